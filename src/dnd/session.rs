use crate::models::ItemRef;

/// Touch hold required before a drag activates.
pub(crate) const HOLD_DELAY_MS: i32 = 500;

/// Per-axis movement that turns a pending touch into a scroll/tap.
pub(crate) const MOVE_THRESHOLD_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    pub fn exceeds_threshold_from(self, origin: Point) -> bool {
        let (dx, dy) = self.offset_from(origin);
        dx.abs() > MOVE_THRESHOLD_PX || dy.abs() > MOVE_THRESHOLD_PX
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputSource {
    /// HTML5 drag events; active immediately.
    Mouse,
    /// Touch events; armed until the hold timer fires.
    Touch,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DragSession {
    pub source: ItemRef,
    pub input: InputSource,
    pub origin: Point,
    pub activated: bool,

    /// Distinguishes hold timers of different gestures.
    pub generation: u64,
}

impl DragSession {
    pub fn phase(&self) -> Phase {
        if self.activated {
            Phase::Dragging
        } else {
            Phase::Armed
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Armed,
    Dragging,
}
