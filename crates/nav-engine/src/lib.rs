//! `nav-engine` — the orchestration layer tying search, timing, and
//! schedules together.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`navigator`] | `Navigator<P, F>` — grid allocation + search + timeline, `NavConfig` |
//! | [`driver`]    | `ScheduleDriver<P, F>` — per-agent state and the minute tick    |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                                |
//!
//! # Request model (fresh grid per build)
//!
//! Every path request:
//!
//! 1. Looks up the scene's geometry from the application's
//!    [`GridProperties`][nav_grid::GridProperties] source — unknown scene
//!    means no path, checked before anything is allocated.
//! 2. Allocates a fresh `GridStore` and snapshots obstacle/penalty flags.
//! 3. Runs the configured [`PathFinder`][nav_path::PathFinder].
//! 4. Builds, stamps, and trims the step stack.
//! 5. Discards the grid.
//!
//! Pathing failures are routine (blocked routes, agents already at their
//! destination), so the public `build_path` collapses every failure to
//! `None`; `try_build_path` keeps the error for callers that want to know
//! why.

pub mod driver;
pub mod error;
pub mod navigator;


pub use driver::{ActiveRoute, AgentState, ScheduleDriver};
pub use error::{EngineError, EngineResult};
pub use navigator::{NavConfig, Navigator};
