//! Game lifecycle through the public API

use std::collections::HashSet;

use blockfall::core::GameState;
use blockfall::types::{GameAction, GameOverCause, GameStatus, PieceKind};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    state.start();
    state
}

/// Hard drop at the spawn column until the stack reaches the top.
fn play_until_game_over(state: &mut GameState) -> usize {
    let mut drops = 0;
    while state.status() == GameStatus::Running {
        assert!(state.apply_action(GameAction::HardDrop));
        drops += 1;
        assert!(drops < 100, "stack never reached the top");
    }
    drops
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.status(), GameStatus::NotStarted);
    assert!(state.active().is_none());

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.status(), GameStatus::Running);
    assert!(state.active().is_some());
    assert!(state.next_piece().is_some());
    assert_eq!(state.hold_piece(), None);
    assert_eq!(state.episode_id(), 0);
    assert_eq!(state.piece_id(), 1);
}

#[test]
fn test_actions_ignored_before_start() {
    let mut state = GameState::new(1);
    for action in [
        GameAction::MoveLeft,
        GameAction::HardDrop,
        GameAction::RotateRight,
        GameAction::Hold,
        GameAction::TogglePause,
    ] {
        assert!(!state.apply_action(action), "{action:?} should be ignored");
    }
    assert!(!state.tick());
    assert_eq!(state.status(), GameStatus::NotStarted);
}

#[test]
fn test_movement_and_gravity() {
    let mut state = started(12345);
    let start = state.active().unwrap();

    assert!(state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active().unwrap().x, start.x - 1);

    assert!(state.apply_action(GameAction::MoveRight));
    assert!(state.apply_action(GameAction::MoveRight));
    assert_eq!(state.active().unwrap().x, start.x + 1);

    assert!(state.tick());
    assert!(state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.active().unwrap().y, start.y + 2);
}

#[test]
fn test_sideways_moves_stop_at_walls() {
    let mut state = started(7);
    while state.apply_action(GameAction::MoveLeft) {}
    let piece = state.active().unwrap();
    assert!(piece.cells().iter().any(|&(x, _)| x == 0));
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active(), Some(piece));
}

#[test]
fn test_hard_drop_locks_and_spawns_next() {
    let mut state = started(99);
    let queued = state.next_piece();
    let ghost = state.ghost_y().unwrap();
    let dropped = state.active().unwrap();

    assert!(state.apply_action(GameAction::HardDrop));

    assert_eq!(state.active().map(|p| p.kind), queued);
    assert_eq!(state.piece_id(), 2);
    let event = state.take_last_event().unwrap();
    assert_eq!(event.kind, dropped.kind);
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(event.game_over, None);

    let landed = blockfall::core::Tetromino { y: ghost, ..dropped };
    for (x, y) in landed.cells() {
        assert_eq!(state.board().get(x, y), Some(Some(dropped.kind)));
    }
}

#[test]
fn test_pause_freezes_the_piece() {
    let mut state = started(12345);
    let before = state.active();

    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.status(), GameStatus::Paused);

    assert!(!state.tick());
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::Start));
    assert_eq!(state.active(), before);

    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.status(), GameStatus::Running);
}

#[test]
fn test_hold_once_per_piece() {
    let mut state = started(12345);
    let first = state.active().unwrap().kind;
    let queued = state.next_piece();

    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.hold_piece(), Some(first));
    assert!(!state.can_hold());
    // An empty hold slot draws from the bag, the preview stays put
    assert_eq!(state.next_piece(), queued);

    assert!(!state.apply_action(GameAction::Hold));
    assert_eq!(state.hold_piece(), Some(first));

    assert!(state.apply_action(GameAction::HardDrop));
    assert!(state.can_hold());

    let current = state.active().unwrap().kind;
    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.active().unwrap().kind, first);
    assert_eq!(state.hold_piece(), Some(current));
}

#[test]
fn test_stacking_ends_the_game() {
    let mut state = started(2024);
    play_until_game_over(&mut state);

    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.score(), 0);
    let event = state.take_last_event().unwrap();
    assert!(event.game_over.is_some());

    // Only Start is accepted now
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.apply_action(GameAction::TogglePause));
    assert!(!state.tick());

    // The overlay is gone once the game is over
    let filled_visible = state.visible_board().iter().flatten().filter(|c| c.is_some()).count();
    let filled_locked = state.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(filled_visible, filled_locked);

    let json = serde_json::to_value(state.snapshot()).unwrap();
    assert_eq!(json["status"], "gameOver");
    assert_eq!(json["score"], 0);
}

#[test]
fn test_restart_after_game_over() {
    let mut state = started(2024);
    play_until_game_over(&mut state);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.hold_piece(), None);
    assert!(state.board().is_empty());
    assert!(state.take_last_event().is_none());
}

#[test]
fn test_start_while_running_restarts() {
    let mut state = started(5);
    state.apply_action(GameAction::HardDrop);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.episode_id(), 1);
    assert!(state.board().is_empty());
}

#[test]
fn test_first_seven_pieces_are_a_permutation() {
    let mut state = started(31337);
    let mut seen = HashSet::new();

    for i in 0..7 {
        seen.insert(state.active().unwrap().kind);
        // Alternate walls so the stack never reaches the spawn area
        let shift = if i % 2 == 0 { GameAction::MoveLeft } else { GameAction::MoveRight };
        while state.apply_action(shift) {}
        state.apply_action(GameAction::HardDrop);
        assert_eq!(state.status(), GameStatus::Running);
    }

    assert_eq!(seen.len(), PieceKind::ALL.len());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = started(77);
    let mut b = started(77);

    for _ in 0..10 {
        assert_eq!(a.active(), b.active());
        assert_eq!(a.next_piece(), b.next_piece());
        a.apply_action(GameAction::HardDrop);
        b.apply_action(GameAction::HardDrop);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_game_over_cause_is_reported() {
    let mut state = started(2024);
    play_until_game_over(&mut state);
    let cause = state.take_last_event().and_then(|e| e.game_over);
    assert!(matches!(
        cause,
        Some(GameOverCause::SpawnBlocked) | Some(GameOverCause::LockedAboveBoard)
    ));
}
