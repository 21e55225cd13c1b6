//! The timeline passes: build, stamp, trim.
//!
//! Each pass is a pure transform so callers can run them separately (for
//! inspection or testing) or use [`build_timeline`] to run all three.

use nav_core::{GameTime, GridCell, SceneId};

use crate::error::{TimelineError, TimelineResult};
use crate::step::{MovementStep, StepStack};

// ── TravelSpeed ───────────────────────────────────────────────────────────────

/// Per-step durations in whole simulated seconds.
///
/// Derived once from an agent's walking rate and the global time scale; the
/// timeline builder only ever adds these two constants, so timestamps stay
/// exact integers.
#[derive(Copy, Clone, Debug)]
pub struct TravelSpeed {
    /// Simulated seconds to cross one tile orthogonally.
    pub orthogonal_secs: u32,
    /// Simulated seconds to cross one tile diagonally.
    pub diagonal_secs: u32,
}

impl TravelSpeed {
    /// Derive step durations from `tiles_per_sec` (real-time walking rate)
    /// and `game_secs_per_real_sec` (the clock's time scale).
    ///
    /// Durations round to the nearest second and are clamped to at least 1
    /// so timestamps always advance.
    pub fn from_rate(tiles_per_sec: f32, game_secs_per_real_sec: f32) -> Self {
        let orthogonal = game_secs_per_real_sec / tiles_per_sec;
        let diagonal = orthogonal * std::f32::consts::SQRT_2;
        Self {
            orthogonal_secs: (orthogonal.round() as u32).max(1),
            diagonal_secs: (diagonal.round() as u32).max(1),
        }
    }

    /// Duration of the step from `prev` to `cur`.
    #[inline]
    pub fn step_secs(&self, prev: GridCell, cur: GridCell) -> u32 {
        if prev.is_diagonal_to(cur) {
            self.diagonal_secs
        } else {
            self.orthogonal_secs
        }
    }
}

impl Default for TravelSpeed {
    /// Two tiles per real second at a 60:1 time scale.
    fn default() -> Self {
        Self::from_rate(2.0, 60.0)
    }
}

// ── Passes ────────────────────────────────────────────────────────────────────

/// Convert a target→start local cell path into a world-coordinate step
/// stack with zeroed timestamps.
///
/// Cells are pushed in the order given, so popping the result walks
/// start→target.
pub fn build_steps(path: &[GridCell], scene: SceneId, origin: GridCell) -> StepStack {
    let mut stack = StepStack::with_capacity(path.len());
    for &cell in path {
        stack.push(MovementStep {
            scene,
            cell: cell.to_world(origin),
            time: GameTime::default(),
        });
    }
    stack
}

/// Stamp each step with its arrival time.
///
/// Visits the stack in traversal (start→target) order: the start step
/// inherits `now`, and every later step adds the orthogonal or diagonal
/// duration for its geometry.  Times never decrease.
pub fn assign_arrival_times(stack: &mut StepStack, now: GameTime, speed: TravelSpeed) {
    let steps = stack.steps_mut();
    let len = steps.len();
    // Storage is target-first, so traversal order is back-to-front.
    for i in (0..len).rev() {
        if i == len - 1 {
            steps[i].time = now;
        } else {
            let prev = steps[i + 1];
            let secs = speed.step_secs(prev.cell, steps[i].cell);
            steps[i].time = prev.time.plus_secs(secs);
        }
    }
}

/// Discard the start step — the cell the agent already occupies.
///
/// A stack left with zero or one steps is too short to animate; the caller
/// drops the triggering event without side effects.
pub fn trim_current_position(stack: &mut StepStack) -> TimelineResult<()> {
    let _ = stack.pop();
    if stack.len() <= 1 {
        return Err(TimelineError::TooShort { remaining: stack.len() });
    }
    Ok(())
}

/// All three passes: build, stamp, trim.
pub fn build_timeline(
    path: &[GridCell],
    scene: SceneId,
    origin: GridCell,
    now: GameTime,
    speed: TravelSpeed,
) -> TimelineResult<StepStack> {
    let mut stack = build_steps(path, scene, origin);
    assign_arrival_times(&mut stack, now, speed);
    trim_current_position(&mut stack)?;
    Ok(stack)
}
