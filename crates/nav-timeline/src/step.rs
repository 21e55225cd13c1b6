//! Movement steps and the LIFO stack that orders them.

use nav_core::{GameTime, GridCell, SceneId};

/// One tile of an agent's journey: where to be, and when to be there.
///
/// `cell` is in **world** coordinates — the timeline builder applies the
/// scene origin when converting from the finder's local cells.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementStep {
    pub scene: SceneId,
    pub cell: GridCell,
    pub time: GameTime,
}

/// A stack of movement steps.
///
/// Steps are pushed in target→start order during construction, so `pop()`
/// yields them start→target.  `steps()` exposes the raw storage (index 0 =
/// target, last index = next step to pop) for callers that need to inspect
/// without consuming.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepStack {
    steps: Vec<MovementStep>,
}

impl StepStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { steps: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, step: MovementStep) {
        self.steps.push(step);
    }

    /// Remove and return the next step in traversal order.
    pub fn pop(&mut self) -> Option<MovementStep> {
        self.steps.pop()
    }

    /// The next step in traversal order, without consuming it.
    pub fn peek(&self) -> Option<&MovementStep> {
        self.steps.last()
    }

    /// Pop the next step only if its timestamp has come due.
    pub fn pop_due(&mut self, now: GameTime) -> Option<MovementStep> {
        if self.peek().is_some_and(|s| s.time <= now) {
            self.steps.pop()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Raw storage order: index 0 is the final (target) step, the last index
    /// is the next step to pop.
    pub fn steps(&self) -> &[MovementStep] {
        &self.steps
    }

    pub(crate) fn steps_mut(&mut self) -> &mut [MovementStep] {
        &mut self.steps
    }

    /// The final (target) step, regardless of how many steps remain.
    pub fn last_destination(&self) -> Option<&MovementStep> {
        self.steps.first()
    }
}
