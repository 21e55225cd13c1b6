//! Game time model.
//!
//! # Design
//!
//! Time inside one path build is a plain `(hour, minute, second)` triple.
//! All arithmetic is integer seconds — no floating point, no datetime crate —
//! so step timestamps are exact and schedule comparisons are O(1).
//!
//! `plus_secs` carries seconds into minutes and minutes into hours but lets
//! `hour` run past 23: the external clock owns day rollover, and wrapping at
//! midnight would make step timestamps jump backwards inside a single build.
//!
//! The clock itself lives outside this framework.  Each simulated minute it
//! hands the engine a [`ClockStamp`]: the current time plus the day/season/
//! weather context that schedule events filter on.

use std::fmt;

// ── GameTime ──────────────────────────────────────────────────────────────────

/// A time of day in simulated hours, minutes and seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl GameTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    /// The `hour*100 + minute` key schedule events are ordered by.
    ///
    /// 8:30 → 830, 14:00 → 1400.  Seconds never participate: schedule
    /// resolution is one simulated minute.
    #[inline]
    pub fn time_key(self) -> u32 {
        self.hour * 100 + self.minute
    }

    /// The time `secs` simulated seconds after `self`.
    ///
    /// Seconds carry into minutes and minutes into hours; `hour` is allowed
    /// to exceed 23 (see module docs).
    pub fn plus_secs(self, secs: u32) -> GameTime {
        let total = self.second + secs;
        let second = total % 60;
        let total_min = self.minute + total / 60;
        let minute = total_min % 60;
        let hour = self.hour + total_min / 60;
        GameTime { hour, minute, second }
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// ── Season / Weather ──────────────────────────────────────────────────────────

/// Season filter value.  `Any` matches every season.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    #[default]
    Any,
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// `true` if a schedule filter with this value accepts `current`.
    #[inline]
    pub fn matches(self, current: Season) -> bool {
        self == Season::Any || self == current
    }

    /// Parse a lowercase season name; `"any"` is the wildcard.
    pub fn parse(s: &str) -> Option<Season> {
        match s {
            "any" => Some(Season::Any),
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

/// Weather filter value.  `Any` matches every weather.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weather {
    #[default]
    Any,
    Sunny,
    Rain,
    Storm,
    Snow,
}

impl Weather {
    /// `true` if a schedule filter with this value accepts `current`.
    #[inline]
    pub fn matches(self, current: Weather) -> bool {
        self == Weather::Any || self == current
    }

    /// Parse a lowercase weather name; `"any"` is the wildcard.
    pub fn parse(s: &str) -> Option<Weather> {
        match s {
            "any" => Some(Weather::Any),
            "sunny" => Some(Weather::Sunny),
            "rain" => Some(Weather::Rain),
            "storm" => Some(Weather::Storm),
            "snow" => Some(Weather::Snow),
            _ => None,
        }
    }
}

// ── ClockStamp ────────────────────────────────────────────────────────────────

/// Everything the external clock reports on a simulated-minute tick.
///
/// `day` is the day-of-week as `1..=7`; schedule events use `0` to mean
/// "any day", so `0` never appears in a stamp.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockStamp {
    pub time: GameTime,
    pub day: u8,
    pub season: Season,
    pub weather: Weather,
}

impl ClockStamp {
    pub fn new(hour: u32, minute: u32, day: u8, season: Season, weather: Weather) -> Self {
        Self {
            time: GameTime::new(hour, minute, 0),
            day,
            season,
            weather,
        }
    }
}
