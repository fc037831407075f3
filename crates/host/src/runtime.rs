//! Session runtime.
//!
//! One task owns the session. It waits on either the drop deadline (only
//! while the session's timer is armed) or the next queued command, applies
//! exactly one of them, and publishes a snapshot. Ticks and commands can
//! therefore never interleave.

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use blockfall_core::{DropTimer, PieceSource, Session, Snapshot};
use blockfall_types::{Command, Phase};

use crate::config::HostConfig;

/// Handle to a running session task.
pub struct SessionHandle<S> {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    task: JoinHandle<Session<S>>,
}

/// Move `session` into a new task on the current tokio runtime.
pub fn spawn_session<S>(session: Session<S>, config: &HostConfig) -> SessionHandle<S>
where
    S: PieceSource + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(config.max_pending_commands.max(1));
    let (snap_tx, snap_rx) = watch::channel(session.snapshot());

    let task = tokio::spawn(run_session(session, cmd_rx, snap_tx));

    SessionHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        task,
    }
}

impl<S> SessionHandle<S> {
    /// Queue a command, waiting for room in the queue.
    pub async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| anyhow!("session stopped; dropped {}", command.as_str()))
    }

    /// Queue a command without waiting; fails when the queue is full.
    pub fn try_send(&self, command: Command) -> Result<()> {
        self.commands
            .try_send(command)
            .map_err(|e| anyhow!("could not queue {}: {}", command.as_str(), e))
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Stop accepting commands, drain the queue and return the session.
    pub async fn shutdown(self) -> Result<Session<S>> {
        drop(self.commands);
        self.task.await.context("session task failed")
    }
}

fn deadline_for(timer: DropTimer, from: Instant) -> Option<Instant> {
    timer.is_armed().then(|| from + timer.interval())
}

async fn run_session<S: PieceSource>(
    mut session: Session<S>,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<Snapshot>,
) -> Session<S> {
    let mut generation = session.drop_timer().generation();
    let mut deadline = deadline_for(session.drop_timer(), Instant::now());
    let mut phase = session.phase();

    loop {
        let wait = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = wait => {
                session.tick();
                deadline = deadline.map(|at| at + session.drop_timer().interval());
            }
            command = commands.recv() => match command {
                Some(command) => {
                    session.apply(command);
                }
                None => {
                    eprintln!("[Host] command channel closed; stopping session");
                    break;
                }
            },
        }

        // Arm, disarm and level changes all bump the generation; restart the clock.
        let timer = session.drop_timer();
        if timer.generation() != generation {
            generation = timer.generation();
            deadline = deadline_for(timer, Instant::now());
        }

        if session.phase() != phase {
            phase = session.phase();
            if phase == Phase::GameOver {
                eprintln!(
                    "[Host] game over: score {} lines {} level {}",
                    session.score(),
                    session.lines(),
                    session.level()
                );
            }
        }

        snapshots.send_replace(session.snapshot());
    }

    session
}
