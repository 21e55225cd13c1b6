//! `nav-timeline` — turning raw cell paths into time-stamped step stacks.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`step`]    | `MovementStep`, `StepStack`                           |
//! | [`builder`] | `build_steps`, `assign_arrival_times`, `trim_current_position`, `build_timeline`, `TravelSpeed` |
//! | [`error`]   | `TimelineError`, `TimelineResult<T>`                  |
//!
//! # Ordering model (summary)
//!
//! The path finder hands over cells in target→start order.  `build_steps`
//! pushes them onto a [`StepStack`] in that same order, so `pop()` yields
//! steps start→target — the order the movement executor consumes them in.
//! Timestamping visits the stack in consumption order and accumulates game
//! seconds per step; the start step (the agent's current cell) is then
//! trimmed off, leaving only future steps.

pub mod builder;
pub mod error;
pub mod step;


pub use builder::{
    assign_arrival_times, build_steps, build_timeline, trim_current_position, TravelSpeed,
};
pub use error::{TimelineError, TimelineResult};
pub use step::{MovementStep, StepStack};
