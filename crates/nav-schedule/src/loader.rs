//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per schedule event:
//!
//! ```csv
//! agent_id,hour,minute,priority,day,season,weather,scene,x,y,facing,animation
//! 0,8,0,0,0,any,any,2,14,30,down,
//! 0,12,0,0,0,any,rain,1,5,9,left,read_book
//! 1,8,0,1,6,spring,any,2,14,30,up,
//! ```
//!
//! | Column      | Meaning                                                  |
//! |-------------|----------------------------------------------------------|
//! | `day`       | `1..=7` day-of-week, `0` = any day                       |
//! | `season`    | `any`, `spring`, `summer`, `fall`, `winter`              |
//! | `weather`   | `any`, `sunny`, `rain`, `storm`, `snow`                  |
//! | `scene`     | destination `SceneId` (u16)                              |
//! | `x`, `y`    | destination cell in world coordinates                    |
//! | `facing`    | `down`, `right`, `up`, `left`                            |
//! | `animation` | arrival animation name; empty = none                     |
//!
//! Agents absent from the CSV receive an empty `ScheduleBook`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::{Facing, GridCell, SceneId, Season, Weather};

use crate::event::{ScheduleBook, ScheduleEvent};
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventRecord {
    agent_id: u32,
    hour: u32,
    minute: u32,
    priority: u32,
    day: u8,
    season: String,
    weather: String,
    scene: u16,
    x: i32,
    y: i32,
    facing: String,
    animation: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load per-agent `ScheduleBook`s from a CSV file.
///
/// Returns a `Vec` of length `agent_count`, indexed by `AgentId`.  Agents
/// with no rows in the file receive [`ScheduleBook::empty`].
pub fn load_books_csv(path: &Path, agent_count: usize) -> Result<Vec<ScheduleBook>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_books_reader(file, agent_count)
}

/// Like [`load_books_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded schedule data.
pub fn load_books_reader<R: Read>(
    reader: R,
    agent_count: usize,
) -> Result<Vec<ScheduleBook>, ScheduleError> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_agent: HashMap<u32, Vec<EventRecord>> = HashMap::new();

    for result in csv_reader.deserialize::<EventRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        by_agent.entry(row.agent_id).or_default().push(row);
    }

    // ── Build one ScheduleBook per agent ──────────────────────────────────
    let mut books: Vec<ScheduleBook> = Vec::with_capacity(agent_count);

    for i in 0..agent_count as u32 {
        match by_agent.remove(&i) {
            None => books.push(ScheduleBook::empty()),
            Some(rows) => {
                let events: Vec<ScheduleEvent> = rows
                    .into_iter()
                    .map(record_to_event)
                    .collect::<Result<_, ScheduleError>>()?;
                books.push(ScheduleBook::from_events(events));
            }
        }
    }

    Ok(books)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn record_to_event(r: EventRecord) -> Result<ScheduleEvent, ScheduleError> {
    let season = Season::parse(&r.season).ok_or_else(|| {
        ScheduleError::Parse(format!("invalid season {:?}", r.season))
    })?;
    let weather = Weather::parse(&r.weather).ok_or_else(|| {
        ScheduleError::Parse(format!("invalid weather {:?}", r.weather))
    })?;
    let facing = Facing::parse(&r.facing).ok_or_else(|| {
        ScheduleError::Parse(format!("invalid facing {:?}", r.facing))
    })?;
    if r.day > 7 {
        return Err(ScheduleError::Parse(format!(
            "invalid day {}: expected 0 (any) or 1..=7",
            r.day
        )));
    }

    let animation = if r.animation.trim().is_empty() {
        None
    } else {
        Some(r.animation.trim().to_owned())
    };

    Ok(ScheduleEvent {
        hour: r.hour,
        minute: r.minute,
        priority: r.priority,
        day: r.day,
        season,
        weather,
        destination_scene: SceneId(r.scene),
        destination: GridCell::new(r.x, r.y),
        facing,
        arrival_animation: animation,
    })
}
