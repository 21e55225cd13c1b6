//! Per-agent schedule driving and travel state.
//!
//! # Tick model
//!
//! The external clock calls [`ScheduleDriver::on_minute_tick`] once per
//! simulated minute.  For every idle, placed agent the driver asks its
//! [`ScheduleBook`] for a due event and, on a match, builds a path to the
//! event's destination.  Every failure along the way — filtered-out events,
//! blocked routes, destinations one tile away — leaves the agent exactly as
//! it was: schedule misses are routine, not errors.
//!
//! The movement executor that actually animates agents lives outside this
//! framework.  [`ScheduleDriver::advance_to`] is the hook it drives:
//! popping each agent's due steps keeps the logical position current and
//! reports arrivals.

use nav_core::{AgentId, ClockStamp, Facing, GameTime, GridCell, SceneId};
use nav_grid::GridProperties;
use nav_path::{AStarPathFinder, PathFinder};
use nav_schedule::{ScheduleBook, ScheduleEvent};
use nav_timeline::{MovementStep, StepStack};

use crate::navigator::Navigator;

// ── ActiveRoute ───────────────────────────────────────────────────────────────

/// A journey in progress: the remaining steps plus the arrival pose taken
/// from the schedule event that triggered it.
#[derive(Clone, Debug)]
pub struct ActiveRoute {
    pub steps: StepStack,
    pub facing: Facing,
    pub arrival_animation: Option<String>,
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// Where one agent is, and whether it is going somewhere.
///
/// An agent is **idle** (`route == None`) or **traveling**.  A freshly
/// registered agent sits in `SceneId::INVALID` until the application places
/// it; unplaced agents are skipped by the minute tick.
#[derive(Clone, Debug)]
pub struct AgentState {
    pub scene: SceneId,
    pub cell: GridCell,
    pub route: Option<ActiveRoute>,
}

impl AgentState {
    /// An idle state at `cell` in `scene`.
    pub fn stationary(scene: SceneId, cell: GridCell) -> Self {
        Self { scene, cell, route: None }
    }

    fn unplaced() -> Self {
        Self::stationary(SceneId::INVALID, GridCell::new(0, 0))
    }

    pub fn is_traveling(&self) -> bool {
        self.route.is_some()
    }
}

// ── ScheduleDriver ────────────────────────────────────────────────────────────

/// Owns every agent's schedule book and travel state, and turns clock ticks
/// into path builds.
pub struct ScheduleDriver<P: GridProperties, F: PathFinder = AStarPathFinder> {
    pub navigator: Navigator<P, F>,
    books: Vec<ScheduleBook>,
    states: Vec<AgentState>,
}

impl<P: GridProperties, F: PathFinder> ScheduleDriver<P, F> {
    /// Create a driver for `agent_count` agents, all unplaced with empty
    /// schedule books.
    pub fn new(navigator: Navigator<P, F>, agent_count: usize) -> Self {
        Self {
            navigator,
            books: vec![ScheduleBook::empty(); agent_count],
            states: vec![AgentState::unplaced(); agent_count],
        }
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Put `agent` at `cell` in `scene`, idle.  Any in-flight route is
    /// abandoned.
    pub fn place(&mut self, agent: AgentId, scene: SceneId, cell: GridCell) {
        self.states[agent.index()] = AgentState::stationary(scene, cell);
    }

    /// Replace all schedule books (e.g. from the CSV loader).
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the book count doesn't match the agent count.
    pub fn set_books(&mut self, books: Vec<ScheduleBook>) {
        debug_assert_eq!(books.len(), self.states.len());
        self.books = books;
    }

    /// Add one event to an agent's book.
    pub fn insert_event(&mut self, agent: AgentId, event: ScheduleEvent) {
        self.books[agent.index()].insert(event);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self, agent: AgentId) -> &AgentState {
        &self.states[agent.index()]
    }

    pub fn book(&self, agent: AgentId) -> &ScheduleBook {
        &self.books[agent.index()]
    }

    pub fn agent_count(&self) -> usize {
        self.states.len()
    }

    // ── Tick entry points ─────────────────────────────────────────────────

    /// The per-minute clock callback.  Returns how many agents started
    /// traveling this tick.
    ///
    /// Agents already traveling keep their route — a new event for a busy
    /// agent is dropped, matching the one-route-per-agent model.  Events
    /// whose destination lies in another scene are dropped too: the engine
    /// paths within one scene, and cross-scene itineraries are the
    /// application's concern.
    pub fn on_minute_tick(&mut self, stamp: &ClockStamp) -> usize {
        let mut started = 0;

        for i in 0..self.states.len() {
            let state = &self.states[i];
            if state.scene == SceneId::INVALID || state.is_traveling() {
                continue;
            }
            let Some(event) = self.books[i].due_event(stamp) else {
                continue;
            };
            if event.destination_scene != state.scene {
                continue;
            }

            // Any build failure is silent: the agent stays idle this minute.
            let Some(steps) = self.navigator.build_path(
                state.scene,
                state.cell,
                event.destination,
                stamp.time,
            ) else {
                continue;
            };

            let route = ActiveRoute {
                steps,
                facing: event.facing,
                arrival_animation: event.arrival_animation.clone(),
            };
            self.states[i].route = Some(route);
            started += 1;
        }

        started
    }

    /// Advance every traveling agent through all steps due by `now`.
    ///
    /// Each popped step moves the agent's logical position.  Agents whose
    /// stacks empty out are marked idle again; the returned list is
    /// `(agent, final cell)` for each arrival this call.
    pub fn advance_to(&mut self, now: GameTime) -> Vec<(AgentId, GridCell)> {
        let mut arrivals = Vec::new();

        for (i, state) in self.states.iter_mut().enumerate() {
            let Some(route) = state.route.as_mut() else {
                continue;
            };

            let mut last: Option<MovementStep> = None;
            while let Some(step) = route.steps.pop_due(now) {
                last = Some(step);
            }
            let finished = route.steps.is_empty();

            if let Some(step) = last {
                state.scene = step.scene;
                state.cell = step.cell;
            }
            if finished {
                state.route = None;
                arrivals.push((AgentId(i as u32), state.cell));
            }
        }

        arrivals
    }
}
