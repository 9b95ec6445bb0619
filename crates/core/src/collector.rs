use serde::Serialize;

use crate::types::{Phase, Point, TapEvent};

/// Two segments, two points each.
pub const MAX_POINTS: usize = 4;

/// Tapped points plus the "next tap closes a segment" flag.
///
/// Points 0–1 form the first segment and 2–3 the second. `drawing` always
/// equals `points.len() % 2 == 1`; it is kept as a field so renderers can
/// read it without knowing the layout.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TapState {
    points: Vec<Point>,
    drawing: bool,
}

impl TapState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn phase(&self) -> Phase {
        Phase::from_len(self.points.len())
    }

    /// Both segments are drawn; taps are ignored until reset.
    pub fn is_locked(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    /// In-place form of [`accept_tap`].
    pub fn tap(&mut self, location: Point) -> Option<TapEvent> {
        let (next, event) = accept_tap(std::mem::take(self), location);
        *self = next;
        event
    }

    /// In-place form of [`reset`].
    pub fn clear(&mut self) {
        *self = reset();
    }
}

/// Apply one tap.
///
/// Returns the new state and, when the tap was accepted, whether it opened
/// or closed a segment. Taps on a locked state and taps with non-finite
/// coordinates leave the state untouched and return `None`.
pub fn accept_tap(mut state: TapState, location: Point) -> (TapState, Option<TapEvent>) {
    if state.is_locked() {
        log::debug!("tap ({}, {}) ignored: both segments drawn", location.x, location.y);
        return (state, None);
    }
    if !location.is_finite() {
        log::warn!("tap ({}, {}) ignored: non-finite coordinate", location.x, location.y);
        return (state, None);
    }

    let event = if state.drawing {
        // Segment start is the point just before this one
        let from = state.points[state.points.len() - 1];
        TapEvent::SegmentCompleted { from, to: location }
    } else {
        TapEvent::SegmentStarted { at: location }
    };

    state.points.push(location);
    state.drawing = !state.drawing;
    debug_assert_eq!(state.drawing, state.points.len() % 2 == 1);

    log::debug!(
        "tap ({}, {}) accepted: {:?}",
        location.x,
        location.y,
        state.phase()
    );
    (state, Some(event))
}

/// The empty state.
pub fn reset() -> TapState {
    TapState::default()
}
