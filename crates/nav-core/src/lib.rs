//! `nav-core` — foundational types for the `npc_nav` NPC movement framework.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `SceneId`, `AgentId`                                  |
//! | [`cell`]    | `GridCell`, `Facing`                                  |
//! | [`time`]    | `GameTime`, `ClockStamp`, `Season`, `Weather`         |
//! | [`error`]   | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Facing, GridCell};
pub use error::{NavError, NavResult};
pub use ids::{AgentId, SceneId};
pub use time::{ClockStamp, GameTime, Season, Weather};
