//! `nav-schedule` — per-agent timed events and the minute-tick selector.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`event`]  | `ScheduleEvent`, `ScheduleBook`                           |
//! | [`loader`] | `load_books_csv`, `load_books_reader`                     |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Selection model (summary)
//!
//! Every agent carries a `ScheduleBook`: events kept sorted ascending by
//! `(time_key, priority)` where `time_key = hour*100 + minute`.  On each
//! simulated minute the selector scans the events at exactly the current
//! key, in order, and the **first** one whose day/season/weather filters
//! pass wins — a lower priority value beats a higher one at the same time,
//! and insertion order breaks exact duplicates.  Scanning stops as soon as
//! a later key is reached; the book is sorted, so nothing beyond it can
//! match this minute.

pub mod error;
pub mod event;
pub mod loader;


pub use error::{ScheduleError, ScheduleResult};
pub use event::{ScheduleBook, ScheduleEvent};
pub use loader::{load_books_csv, load_books_reader};
