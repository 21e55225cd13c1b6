//! `nav-grid` — per-search node storage and the grid-property boundary.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`node`]  | `SearchNode` (costs, obstacle flag, parent index)         |
//! | [`store`] | `GridStore` (dense node arena), `TerrainPenalties`        |
//! | [`props`] | `GridProperties` trait, `CellFlags`, `SceneGeometry`, `MapGridProperties` |
//!
//! # Lifecycle
//!
//! A `GridStore` lives for exactly one path request: allocate, populate from
//! the application's [`GridProperties`] source, search, discard.  Grids are
//! small (a scene is typically under 200×200 tiles), so rebuilding per
//! request is cheaper than keeping obstacle state coherent between requests.

pub mod node;
pub mod props;
pub mod store;

#[cfg(test)]
mod tests;

pub use node::SearchNode;
pub use props::{CellFlags, GridProperties, MapGridProperties, SceneGeometry};
pub use store::{GridStore, TerrainPenalties};
