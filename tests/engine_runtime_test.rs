//! Engine runtime under tokio's paused clock.

use std::time::Duration;

use blockfall::engine::{Engine, EngineConfig, EngineError};
use blockfall::types::{GameAction, GameStatus};
use tokio::time;

fn config() -> EngineConfig {
    EngineConfig::new().with_tick_ms(100).with_seed(2024)
}

#[tokio::test(start_paused = true)]
async fn game_over_stops_gravity_until_restart() {
    let handle = Engine::spawn(config()).unwrap();
    let mut rx = handle.subscribe();

    handle.send(GameAction::Start).await.unwrap();
    rx.wait_for(|s| s.status == GameStatus::Running).await.unwrap();

    for _ in 0..100 {
        let snap = *rx.borrow_and_update();
        if snap.status == GameStatus::GameOver {
            break;
        }
        handle.send(GameAction::HardDrop).await.unwrap();
        rx.wait_for(|s| s.piece_id != snap.piece_id || s.status == GameStatus::GameOver)
            .await
            .unwrap();
    }
    let over = handle.snapshot();
    assert_eq!(over.status, GameStatus::GameOver);

    // Nothing moves while the game is over
    time::sleep(Duration::from_secs(5)).await;
    assert_eq!(handle.snapshot(), over);

    // Restart re-arms gravity
    handle.send(GameAction::Start).await.unwrap();
    rx.changed().await.unwrap();
    let restarted = *rx.borrow_and_update();
    assert_eq!(restarted.status, GameStatus::Running);
    assert_eq!(restarted.episode_id, 1);
    let y0 = restarted.active.unwrap().y;

    time::sleep(Duration::from_millis(150)).await;
    tokio::task::yield_now().await;
    assert_eq!(handle.snapshot().active.unwrap().y, y0 + 1);

    let state = handle.shutdown().await.unwrap();
    assert_eq!(state.episode_id(), 1);
}

#[tokio::test(start_paused = true)]
async fn commands_apply_in_arrival_order() {
    let handle = Engine::spawn(config()).unwrap();

    handle.send(GameAction::Start).await.unwrap();
    handle.send(GameAction::MoveLeft).await.unwrap();
    handle.send(GameAction::MoveLeft).await.unwrap();
    handle.send(GameAction::MoveRight).await.unwrap();

    let state = handle.shutdown().await.unwrap();
    assert_eq!(state.active().unwrap().x, 3);
}

#[tokio::test(start_paused = true)]
async fn ignored_commands_publish_nothing() {
    let handle = Engine::spawn(config()).unwrap();
    let rx = handle.subscribe();

    // Not started: everything but Start is dropped
    handle.send(GameAction::HardDrop).await.unwrap();
    handle.send(GameAction::TogglePause).await.unwrap();
    time::sleep(Duration::from_millis(500)).await;

    assert!(!rx.has_changed().unwrap());
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn engine_rejects_bad_config() {
    let err = Engine::spawn(EngineConfig::new().with_command_buffer(0))
        .err()
        .unwrap();
    assert!(matches!(err, EngineError::InvalidCommandBuffer(0)));
}
