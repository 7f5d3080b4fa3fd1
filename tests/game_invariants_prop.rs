//! Property tests: random action sequences keep the game consistent.
//!
//! Invariants covered:
//! - While running, the active piece is always in a legal position.
//! - Score is always 100 points per cleared line.
//! - No full row survives a lock.
//! - Ignored actions leave the snapshot untouched.
//! - Ticks never change a game that is not running.

use proptest::prelude::*;

use blockfall::core::{is_legal, GameState};
use blockfall::types::{GameAction, GameStatus, BOARD_HEIGHT, LINE_CLEAR_POINTS};

const ACTIONS: [GameAction; 9] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::HardDrop,
    GameAction::RotateLeft,
    GameAction::RotateRight,
    GameAction::Hold,
    GameAction::TogglePause,
    GameAction::Start,
];

fn assert_consistent(state: &GameState) {
    if state.status() == GameStatus::Running {
        let piece = state.active().expect("running game has an active piece");
        assert!(is_legal(piece.kind, piece.rotation, piece.x, piece.y, state.board()));
        assert!(state.ghost_y().unwrap() >= piece.y);
    }
    assert_eq!(state.score(), state.lines() * LINE_CLEAR_POINTS);
    for y in 0..BOARD_HEIGHT as usize {
        assert!(!state.board().is_row_full(y), "row {y} left full");
    }
}

proptest! {
    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        // Start is rare so games get a chance to run long
        picks in prop::collection::vec((0usize..ACTIONS.len(), any::<bool>()), 1..400),
    ) {
        let mut state = GameState::new(seed);
        state.start();

        for (idx, tick) in picks {
            let action = ACTIONS[idx];
            if action == GameAction::Start && !tick {
                continue;
            }

            let before = state.snapshot();
            let changed = state.apply_action(action);
            if !changed {
                prop_assert_eq!(state.snapshot(), before);
            }
            assert_consistent(&state);

            if tick {
                let before = state.snapshot();
                let was_running = state.status() == GameStatus::Running;
                let changed = state.tick();
                prop_assert_eq!(changed, was_running);
                if !changed {
                    prop_assert_eq!(state.snapshot(), before);
                }
                assert_consistent(&state);
            }
        }
    }

    #[test]
    fn same_seed_and_actions_replay_identically(
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..ACTIONS.len() - 1, 1..200),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        a.start();
        b.start();

        for idx in picks {
            prop_assert_eq!(a.apply_action(ACTIONS[idx]), b.apply_action(ACTIONS[idx]));
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}
