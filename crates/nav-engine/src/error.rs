use thiserror::Error;

use nav_core::{AgentId, SceneId};
use nav_path::PathError;
use nav_timeline::TimelineError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no grid data for scene {0}")]
    MissingGridData(SceneId),

    #[error("agent {0} has not been placed in a scene")]
    NotPlaced(AgentId),

    #[error("search failed: {0}")]
    Path(#[from] PathError),

    #[error("timeline failed: {0}")]
    Timeline(#[from] TimelineError),
}

pub type EngineResult<T> = Result<T, EngineError>;
