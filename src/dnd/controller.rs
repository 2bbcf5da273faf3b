use super::mutation::{MoveProtocol, Mutation};
use super::session::{DragSession, InputSource, Phase, Point, HOLD_DELAY_MS};
use crate::api::ApiError;
use crate::models::ItemRef;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum DndError {
    #[error("a drag of {0} is already in progress")]
    SessionActive(ItemRef),
}

/// Result of starting a gesture.
#[derive(Debug, PartialEq)]
pub(crate) enum DragStart {
    /// Mouse drags are live immediately.
    Active,
    /// Touch drags wait for `hold_elapsed(generation)` after `delay_ms`.
    Armed { generation: u64, delay_ms: i32 },
}

#[derive(Debug, PartialEq)]
pub(crate) enum PointerMove {
    /// No gesture in progress.
    Idle,
    /// Still armed, movement within the threshold.
    Pending,
    /// Moved past the threshold before the hold fired; the gesture is a scroll.
    HoldCancelled,
    /// Live drag; offset of the pointer from its origin.
    Dragging { dx: f64, dy: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum IgnoreReason {
    NoSession,
    NotActivated,
    SelfDrop,
    Unsupported,
    RequestInFlight,
}

#[derive(Debug, PartialEq)]
pub(crate) enum DropDecision {
    /// Send this request; the controller is now in flight.
    Dispatch(Mutation),
    Ignored(IgnoreReason),
}

#[derive(Debug, PartialEq)]
pub(crate) enum Completion {
    /// The server accepted the change; reload the view.
    Reload,
    /// Show `notice` to the user; nothing changed.
    Failed { notice: String },
    /// A response arrived with no request in flight.
    Stale,
}

/// Drag-and-drop reparenting state machine.
///
/// `Idle -> Armed (touch hold pending) -> Dragging -> Idle`. Holds no DOM
/// handles: the binding feeds it events and renders `is_dragging` /
/// `is_drag_over` back onto the page after every call.
#[derive(Debug, Default)]
pub(crate) struct DragReparentController {
    session: Option<DragSession>,
    highlighted: Option<ItemRef>,
    in_flight: Option<Mutation>,
    next_generation: u64,
    protocol: MoveProtocol,
}

impl DragReparentController {
    pub fn new(protocol: MoveProtocol) -> Self {
        Self {
            protocol,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.session
            .as_ref()
            .map(DragSession::phase)
            .unwrap_or(Phase::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_dragging(&self, item: &ItemRef) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.activated && s.source.is_same_item(item))
    }

    pub fn is_drag_over(&self, item: &ItemRef) -> bool {
        self.highlighted
            .as_ref()
            .is_some_and(|h| h.is_same_item(item))
    }

    pub fn highlighted(&self) -> Option<&ItemRef> {
        self.highlighted.as_ref()
    }

    pub fn drag_start(
        &mut self,
        source: ItemRef,
        input: InputSource,
        origin: Point,
    ) -> Result<DragStart, DndError> {
        if let Some(active) = &self.session {
            return Err(DndError::SessionActive(active.source.clone()));
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        let activated = input == InputSource::Mouse;

        log::debug!("drag start: {source} via {input:?} (generation {generation})");

        self.highlighted = None;
        self.session = Some(DragSession {
            source,
            input,
            origin,
            activated,
            generation,
        });

        if activated {
            Ok(DragStart::Active)
        } else {
            Ok(DragStart::Armed {
                generation,
                delay_ms: HOLD_DELAY_MS,
            })
        }
    }

    /// Hold timer fired. Returns true when it activated the armed gesture.
    pub fn hold_elapsed(&mut self, generation: u64) -> bool {
        match self.session.as_mut() {
            Some(s) if !s.activated && s.generation == generation => {
                s.activated = true;
                log::debug!("touch hold activated drag of {}", s.source);
                true
            }
            _ => false,
        }
    }

    pub fn pointer_moved(&mut self, at: Point) -> PointerMove {
        let Some(s) = self.session.as_ref() else {
            return PointerMove::Idle;
        };

        if s.activated {
            let (dx, dy) = at.offset_from(s.origin);
            return PointerMove::Dragging { dx, dy };
        }

        if at.exceeds_threshold_from(s.origin) {
            log::debug!("touch on {} moved before hold; treating as scroll", s.source);
            self.clear_gesture();
            return PointerMove::HoldCancelled;
        }

        PointerMove::Pending
    }

    /// Returns true when the highlighted candidate changed.
    pub fn drag_over(&mut self, candidate: &ItemRef) -> bool {
        let Some(s) = self.session.as_ref().filter(|s| s.activated) else {
            return false;
        };

        let next = if s.source.is_same_item(candidate) {
            None
        } else {
            Some(candidate.clone())
        };

        if next == self.highlighted {
            return false;
        }
        self.highlighted = next;
        true
    }

    pub fn drag_leave(&mut self, candidate: &ItemRef) -> bool {
        if self.is_drag_over(candidate) {
            self.highlighted = None;
            true
        } else {
            false
        }
    }

    /// Ends the gesture on `target`. Session and highlight are always cleared.
    pub fn drop(&mut self, target: &ItemRef) -> DropDecision {
        let session = self.session.take();
        self.highlighted = None;

        let Some(session) = session else {
            return DropDecision::Ignored(IgnoreReason::NoSession);
        };
        if self.in_flight.is_some() {
            log::debug!("drop on {target} ignored: request already in flight");
            return DropDecision::Ignored(IgnoreReason::RequestInFlight);
        }
        if !session.activated {
            return DropDecision::Ignored(IgnoreReason::NotActivated);
        }

        let source = session.source;
        if source.is_same_item(target) {
            log::debug!("{source} dropped onto itself");
            return DropDecision::Ignored(IgnoreReason::SelfDrop);
        }

        let Some(mutation) = Mutation::for_drop(&source, target, self.protocol) else {
            log::debug!("no relationship for {source} onto {target}");
            return DropDecision::Ignored(IgnoreReason::Unsupported);
        };

        log::info!("{source} dropped onto {target}: {}", mutation.endpoint());
        self.in_flight = Some(mutation.clone());
        DropDecision::Dispatch(mutation)
    }

    pub fn drag_end(&mut self) {
        self.clear_gesture();
    }

    pub fn cancel(&mut self) {
        if let Some(s) = &self.session {
            log::debug!("{:?} drag of {} cancelled", s.input, s.source);
        }
        self.clear_gesture();
    }

    /// Feed the response of the dispatched request.
    pub fn complete(&mut self, result: Result<(), ApiError>) -> Completion {
        let Some(mutation) = self.in_flight.take() else {
            return Completion::Stale;
        };

        match result {
            Ok(()) => Completion::Reload,
            Err(e) => {
                log::error!("{} failed ({:?}): {}", mutation.endpoint(), e.kind, e);
                Completion::Failed {
                    notice: mutation.failure_notice().to_string(),
                }
            }
        }
    }

    fn clear_gesture(&mut self) {
        self.session = None;
        self.highlighted = None;
    }
}
