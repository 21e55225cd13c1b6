//! Schedule events and the per-agent ordered book.

use nav_core::{ClockStamp, Facing, GridCell, SceneId, Season, Weather};

// ── ScheduleEvent ─────────────────────────────────────────────────────────────

/// A timed, conditionally-filtered instruction: "at this time, on days like
/// this, travel there."
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEvent {
    pub hour: u32,
    pub minute: u32,

    /// Secondary sort key at equal times.  Lower wins.
    pub priority: u32,

    /// Day-of-week filter, `1..=7`; `0` matches any day.
    pub day: u8,
    pub season: Season,
    pub weather: Weather,

    pub destination_scene: SceneId,
    /// World-coordinate destination cell.
    pub destination: GridCell,

    /// Pose on arrival.
    pub facing: Facing,
    /// Animation to play on arrival, if any (application-defined name).
    pub arrival_animation: Option<String>,
}

impl ScheduleEvent {
    /// The `hour*100 + minute` ordering key.
    #[inline]
    pub fn time_key(&self) -> u32 {
        self.hour * 100 + self.minute
    }

    /// Composite sort key: time first, then priority.
    #[inline]
    fn sort_key(&self) -> (u32, u32) {
        (self.time_key(), self.priority)
    }

    /// `true` if this event's day/season/weather filters accept `stamp`.
    pub fn filters_match(&self, stamp: &ClockStamp) -> bool {
        (self.day == 0 || self.day == stamp.day)
            && self.season.matches(stamp.season)
            && self.weather.matches(stamp.weather)
    }
}

// ── ScheduleBook ──────────────────────────────────────────────────────────────

/// One agent's events, kept sorted ascending by `(time_key, priority)`.
///
/// Duplicate keys are permitted and resolve in insertion order: `insert`
/// places new events after existing equals, and construction from a batch
/// uses a stable sort.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleBook {
    events: Vec<ScheduleEvent>,
}

impl ScheduleBook {
    /// An empty book — the agent never travels on schedule.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a book from a batch of events (stable-sorted by key).
    pub fn from_events(mut events: Vec<ScheduleEvent>) -> Self {
        events.sort_by_key(|e| e.sort_key());
        Self { events }
    }

    /// Insert one event, keeping the book sorted.  Equal-key events keep
    /// their insertion order (upper-bound placement).
    pub fn insert(&mut self, event: ScheduleEvent) {
        let key = event.sort_key();
        let idx = self.events.partition_point(|e| e.sort_key() <= key);
        self.events.insert(idx, event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Read-only slice of all events in book order.
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    /// The event due at `stamp`, if any.
    ///
    /// Jumps to the first event at the current `time_key`, then scans
    /// forward while the key still matches, returning the first event whose
    /// filters accept the stamp.  The scan never looks past the current key
    /// — the book is sorted, so no later event can be due this minute.
    pub fn due_event(&self, stamp: &ClockStamp) -> Option<&ScheduleEvent> {
        let key = stamp.time.time_key();
        let start = self.events.partition_point(|e| e.time_key() < key);
        self.events[start..]
            .iter()
            .take_while(|e| e.time_key() == key)
            .find(|e| e.filters_match(stamp))
    }
}
