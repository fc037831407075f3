//! Host runtime - drives a session with a real clock
//!
//! The engine is single-writer and clockless. This crate supplies the rest:
//! a tokio task that owns the session, fires the auto-drop on the interval
//! the session's [`DropTimer`](blockfall_core::DropTimer) asks for, and
//! feeds commands from a bounded queue in between.
//!
//! # Environment Variables
//!
//! - `BLOCKFALL_SEED`: seed for random pieces (default: 1)
//! - `BLOCKFALL_MAX_PENDING`: command queue capacity (default: 32)
//!
//! # Example
//!
//! ```no_run
//! use blockfall_core::Session;
//! use blockfall_host::{spawn_session, HostConfig};
//! use blockfall_types::Command;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = HostConfig::from_env();
//! let mut session = Session::with_seed(config.seed);
//! session.start();
//!
//! let handle = spawn_session(session, &config);
//! handle.send(Command::MoveLeft).await?;
//! println!("score: {}", handle.snapshot().score);
//! let session = handle.shutdown().await?;
//! # let _ = session;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod runtime;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::HostConfig;
pub use runtime::{spawn_session, SessionHandle};
