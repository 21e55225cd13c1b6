//! `nav-path` — informed search over a [`GridStore`](nav_grid::GridStore).
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`cost`]   | 10/14 octile distance metric                          |
//! | [`finder`] | `PathFinder` trait, `AStarPathFinder`                 |
//! | [`error`]  | `PathError`, `PathResult<T>`                          |
//!
//! # Contract (summary)
//!
//! `find_path` returns the cell sequence in **target→start** order — the
//! order parent back-pointers produce — because the timeline builder wants
//! exactly that order to build its pop-forward step stack.  Callers that
//! need start→target order reverse it themselves.

pub mod cost;
pub mod error;
pub mod finder;

#[cfg(test)]
mod tests;

pub use cost::{octile, step_cost, DIAGONAL_COST, ORTHOGONAL_COST};
pub use error::{PathError, PathResult};
pub use finder::{AStarPathFinder, PathFinder};
