//! Property-based tests using proptest.

use crate::board::{Board, Move, Rules, Square};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..64usize).prop_map(|idx| Square::ALL[idx])
}

/// Play `num_moves` random legal moves, stopping early at game end.
fn random_playout(rules: Rules, seed: u64, num_moves: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::with_rules(rules);
    let mut positions = vec![board.clone()];
    for _ in 0..num_moves {
        let moves = board.all_legal_moves(board.current_turn());
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        assert!(board.apply_move(mv.from, mv.to), "enumerated move {mv} rejected");
        positions.push(board.clone());
    }
    positions
}

proptest! {
    /// Property: a rejected move leaves every square and the turn unchanged
    #[test]
    fn prop_rejected_moves_are_no_ops(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let board = random_playout(Rules::STANDARD, seed, num_moves).pop().unwrap();
        let mut probe = board.clone();
        if probe.apply_move(from, to) {
            prop_assert_eq!(probe.current_turn(), board.current_turn().opponent());
            prop_assert!(probe.piece_at(from).is_none());
        } else {
            prop_assert_eq!(probe, board);
        }
    }

    /// Property: the highlight query and the enumeration agree
    #[test]
    fn prop_is_legal_move_matches_enumeration(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_playout(Rules::STANDARD, seed, num_moves).pop().unwrap();
        let moves = board.all_legal_moves(board.current_turn());
        for from in Square::ALL {
            for to in Square::ALL {
                prop_assert_eq!(
                    board.is_legal_move(from, to),
                    moves.contains(&Move::new(from, to)),
                    "disagreement on {}{}", from, to
                );
            }
        }
    }

    /// Property: structural invariants hold and `has_moved` never reverts
    #[test]
    fn prop_invariants_hold_during_play(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_playout(Rules::STANDARD, seed, num_moves);
        for pair in positions.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            prop_assert!(after.validate().is_ok());
            prop_assert!(after.find_king(before.current_turn()).is_some());

            let unmoved = |b: &Board| b.pieces().filter(|(_, p)| !p.has_moved).count();
            prop_assert!(unmoved(after) <= unmoved(before));
            prop_assert!(after.pieces().count() <= before.pieces().count());
        }
    }

    /// Property: permissive playouts never break the grid either
    #[test]
    fn prop_permissive_playout_stays_valid(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_playout(Rules::PERMISSIVE, seed, num_moves) {
            prop_assert!(board.validate().is_ok());
        }
    }
}
