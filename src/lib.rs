//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace members under one roof, so tools and tests can
//! write `blockfall::{core, host, types}`.

pub use blockfall_core as core;
pub use blockfall_host as host;
pub use blockfall_types as types;
