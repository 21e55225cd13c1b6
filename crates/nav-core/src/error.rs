//! Framework error type.
//!
//! Sub-crates define their own error enums (`PathError`, `ScheduleError`, …)
//! and either convert into `NavError` via `From` impls or stay separate.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{AgentId, SceneId};

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("no grid data for scene {0}")]
    MissingGridData(SceneId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
