//! Session host tests, run on tokio's paused clock

use std::time::Duration;

use blockfall::core::{Board, Session, SequencePieces};
use blockfall::host::{spawn_session, HostConfig};
use blockfall::types::{Command, Phase, PieceKind, Rotation};

fn started(kind: PieceKind) -> Session<SequencePieces> {
    let mut session = Session::new(SequencePieces::repeat(kind));
    session.start();
    session
}

async fn wait(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_ticks_follow_drop_interval() {
    let handle = spawn_session(started(PieceKind::O), &HostConfig::default());

    wait(500).await;
    assert_eq!(handle.snapshot().active.unwrap().y, 0);

    wait(1000).await;
    assert_eq!(handle.snapshot().active.unwrap().y, 1);

    wait(1000).await;
    assert_eq!(handle.snapshot().active.unwrap().y, 2);

    let session = handle.shutdown().await.unwrap();
    assert_eq!(session.active().unwrap().position.y, 2);
}

#[tokio::test(start_paused = true)]
async fn test_commands_apply_in_order() {
    let handle = spawn_session(started(PieceKind::T), &HostConfig::default());

    handle.send(Command::MoveLeft).await.unwrap();
    handle.send(Command::MoveLeft).await.unwrap();
    handle.send(Command::Rotate).await.unwrap();
    wait(10).await;

    let active = handle.snapshot().active.unwrap();
    assert_eq!(active.x, 2);
    assert_eq!(active.rotation, Rotation::East);

    let session = handle.shutdown().await.unwrap();
    assert_eq!(session.active().unwrap().position.x, 2);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_each_command() {
    let handle = spawn_session(started(PieceKind::O), &HostConfig::default());
    let mut updates = handle.subscribe();

    handle.send(Command::HardDrop).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().active.unwrap().y, 18);

    handle.send(Command::MoveDown).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().board.filled_count(), 4);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_pause_stops_ticks() {
    let handle = spawn_session(started(PieceKind::O), &HostConfig::default());

    handle.send(Command::Pause).await.unwrap();
    wait(5000).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.phase, Phase::Paused);
    assert!(!snapshot.timer.is_armed());
    assert_eq!(snapshot.active.unwrap().y, 0);

    // Resuming restarts the full interval.
    handle.send(Command::Pause).await.unwrap();
    wait(900).await;
    assert_eq!(handle.snapshot().active.unwrap().y, 0);
    wait(200).await;
    assert_eq!(handle.snapshot().active.unwrap().y, 1);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_game_over_disarms_timer() {
    let mut session = started(PieceKind::O);
    session.load_board(Board::from_rows(&["....OO...."; 18]).unwrap());
    let handle = spawn_session(session, &HostConfig::default());

    handle.send(Command::MoveDown).await.unwrap();
    wait(10).await;
    let over = handle.snapshot();
    assert_eq!(over.phase, Phase::GameOver);
    assert!(!over.timer.is_armed());

    wait(10_000).await;
    assert_eq!(handle.snapshot(), over);

    let session = handle.shutdown().await.unwrap();
    assert!(session.is_game_over());
}

#[tokio::test(start_paused = true)]
async fn test_not_started_session_never_ticks() {
    let session = Session::new(SequencePieces::repeat(PieceKind::I));
    let handle = spawn_session(session, &HostConfig::default());

    wait(5000).await;
    assert_eq!(handle.snapshot().phase, Phase::NotStarted);

    handle.send(Command::Start).await.unwrap();
    wait(1100).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.phase, Phase::Playing);
    assert_eq!(snapshot.active.unwrap().y, 1);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_try_send_reports_full_queue() {
    let config = HostConfig {
        max_pending_commands: 1,
        ..HostConfig::default()
    };
    let handle = spawn_session(started(PieceKind::O), &config);

    // Nothing yields between these, so the session task cannot drain the queue.
    handle.try_send(Command::MoveLeft).unwrap();
    assert!(handle.try_send(Command::MoveLeft).is_err());

    wait(10).await;
    assert_eq!(handle.snapshot().active.unwrap().x, 3);
    handle.shutdown().await.unwrap();
}
