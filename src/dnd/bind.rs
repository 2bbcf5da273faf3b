//! Page wiring for [`DragReparentController`].
//!
//! Every `.note-item` / `.tag-item` row gets HTML5 drag listeners (mouse) and
//! touch listeners. Handlers feed the controller, then `render` copies its
//! state back onto the rows as `dragging` / `drag-over` classes, so the page
//! never holds visual state the controller does not know about.

use super::controller::{
    Completion, DragReparentController, DragStart, DropDecision, PointerMove,
};
use super::mutation::Mutation;
use super::session::{InputSource, Phase, Point};
use crate::api::ApiResult;
use crate::models::{ItemKind, ItemRef, ITEM_SELECTOR};
use crate::state::AppContext;
use crate::util::{now_ms, reload_view};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(crate) const DRAGGING_CLASS: &str = "dragging";
pub(crate) const DRAG_OVER_CLASS: &str = "drag-over";
const PARENT_ID_ATTRIBUTE: &str = "data-parent-id";

struct BoundItem {
    element: web_sys::HtmlElement,
    item: ItemRef,
}

/// Read the item a rendered row stands for.
pub(crate) fn item_from_element(el: &web_sys::Element) -> Option<ItemRef> {
    let classes = el.class_list();
    let kind = [ItemKind::Note, ItemKind::Tag]
        .into_iter()
        .find(|k| classes.contains(k.css_class()))?;

    ItemRef::from_attributes(
        kind,
        el.get_attribute(kind.id_attribute()),
        el.get_attribute(PARENT_ID_ATTRIBUTE),
    )
}

fn listen<E>(target: &web_sys::EventTarget, event: &str, passive: bool, handler: impl Fn(E) + 'static)
where
    E: JsCast + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });

    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(passive);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    );
    cb.forget();
}

fn touch_point(touch: &web_sys::Touch) -> Point {
    Point::new(touch.client_x() as f64, touch.client_y() as f64)
}

#[derive(Clone)]
pub(crate) struct DragReparentBinding {
    app_state: AppContext,
    controller: Rc<RefCell<DragReparentController>>,
    items: Rc<Vec<BoundItem>>,
    hold_timer: Rc<RefCell<Option<i32>>>,
}

impl DragReparentBinding {
    fn collect_items() -> Vec<BoundItem> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return vec![];
        };
        let Ok(nodes) = document.query_selector_all(ITEM_SELECTOR) else {
            return vec![];
        };

        let mut items = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(element) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                continue;
            };
            match item_from_element(&element) {
                Some(item) => items.push(BoundItem { element, item }),
                None => log::debug!("skipping row without an id"),
            }
        }
        items
    }

    /// Bind every note/tag row currently on the page.
    pub fn attach(app_state: AppContext) -> Self {
        let controller = DragReparentController::new(app_state.0.config.move_protocol);
        let binding = Self {
            app_state,
            controller: Rc::new(RefCell::new(controller)),
            items: Rc::new(Self::collect_items()),
            hold_timer: Rc::new(RefCell::new(None)),
        };

        for bound in binding.items.iter() {
            binding.bind_mouse(bound);
            binding.bind_touch(bound);
        }

        log::info!("drag-and-drop bound to {} rows", binding.items.len());
        binding
    }

    fn bind_mouse(&self, bound: &BoundItem) {
        let el = &bound.element;
        el.set_draggable(true);

        let (b, item) = (self.clone(), bound.item.clone());
        listen(el, "dragstart", false, move |ev: web_sys::DragEvent| {
            ev.stop_propagation();
            if let Some(dt) = ev.data_transfer() {
                let _ = dt.set_data("text/plain", &item.id);
                dt.set_effect_allowed("move");
            }

            let origin = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            let started = b
                .controller
                .borrow_mut()
                .drag_start(item.clone(), InputSource::Mouse, origin);
            if let Err(e) = started {
                log::warn!("{e}");
            }
            b.render();
        });

        let b = self.clone();
        listen(el, "dragend", false, move |ev: web_sys::DragEvent| {
            ev.stop_propagation();
            b.controller.borrow_mut().drag_end();
            b.render();
        });

        let (b, item) = (self.clone(), bound.item.clone());
        listen(el, "dragover", false, move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(dt) = ev.data_transfer() {
                dt.set_drop_effect("move");
            }

            let changed = b.controller.borrow_mut().drag_over(&item);
            if changed {
                b.render();
            }
        });

        let (b, item) = (self.clone(), bound.item.clone());
        listen(el, "dragleave", false, move |ev: web_sys::DragEvent| {
            ev.stop_propagation();
            let changed = b.controller.borrow_mut().drag_leave(&item);
            if changed {
                b.render();
            }
        });

        let (b, item) = (self.clone(), bound.item.clone());
        listen(el, "drop", false, move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            let decision = b.controller.borrow_mut().drop(&item);
            b.render();
            b.handle_decision(decision);
        });
    }

    fn bind_touch(&self, bound: &BoundItem) {
        let el = &bound.element;

        // Touch events stay on the row they started on and bubble to every
        // ancestor row; only the innermost row may handle them.

        // Not prevented here: a short tap must still follow the row's link.
        let (b, item) = (self.clone(), bound.item.clone());
        listen(el, "touchstart", true, move |ev: web_sys::TouchEvent| {
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            ev.stop_propagation();
            b.touch_start(&item, touch_point(&touch));
        });

        let (b, item, source_el) = (self.clone(), bound.item.clone(), el.clone());
        listen(el, "touchmove", false, move |ev: web_sys::TouchEvent| {
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            ev.stop_propagation();
            if b.touch_move(&source_el, &item, touch_point(&touch)) {
                ev.prevent_default();
            }
        });

        let b = self.clone();
        listen(el, "touchend", false, move |ev: web_sys::TouchEvent| {
            ev.stop_propagation();
            let was_dragging = b.controller.borrow().phase() == Phase::Dragging;
            let at = ev.changed_touches().get(0).map(|t| touch_point(&t));

            let decision = b.touch_end(at);
            if was_dragging {
                // Swallow the synthetic click on the row's link.
                ev.prevent_default();
            }
            if let Some(decision) = decision {
                b.handle_decision(decision);
            }
        });

        let b = self.clone();
        listen(el, "touchcancel", true, move |ev: web_sys::TouchEvent| {
            ev.stop_propagation();
            b.cancel_hold_timer();
            b.controller.borrow_mut().cancel();
            b.render();
        });
    }

    fn touch_start(&self, item: &ItemRef, at: Point) {
        let started = self
            .controller
            .borrow_mut()
            .drag_start(item.clone(), InputSource::Touch, at);
        match started {
            Ok(DragStart::Armed {
                generation,
                delay_ms,
            }) => self.arm_hold_timer(generation, delay_ms),
            Ok(DragStart::Active) => self.render(),
            Err(e) => log::warn!("{e}"),
        }
    }

    /// Returns true while the gesture is a live drag.
    fn touch_move(&self, source_el: &web_sys::HtmlElement, item: &ItemRef, at: Point) -> bool {
        let moved = self.controller.borrow_mut().pointer_moved(at);
        match moved {
            PointerMove::HoldCancelled => {
                self.cancel_hold_timer();
                self.render();
                false
            }
            PointerMove::Dragging { dx, dy } => {
                let is_source = self.controller.borrow().is_dragging(item);
                if is_source {
                    let style = source_el.style();
                    let _ = style.set_property("transform", &format!("translate({dx}px, {dy}px)"));
                    // Let hit-testing see through the row under the finger.
                    let _ = style.set_property("pointer-events", "none");
                }
                self.hover_at(at);
                true
            }
            PointerMove::Pending | PointerMove::Idle => false,
        }
    }

    /// Ends the touch gesture at `at`; a live drag over a row becomes a drop.
    fn touch_end(&self, at: Option<Point>) -> Option<DropDecision> {
        self.cancel_hold_timer();

        let phase = self.controller.borrow().phase();
        let target = at.and_then(|p| self.item_at(p));

        let decision = match (phase, target) {
            (Phase::Dragging, Some(target)) => {
                let decision = self.controller.borrow_mut().drop(&target);
                Some(decision)
            }
            _ => {
                self.controller.borrow_mut().cancel();
                None
            }
        };

        self.render();
        decision
    }

    fn arm_hold_timer(&self, generation: u64, delay_ms: i32) {
        self.cancel_hold_timer();

        let Some(window) = web_sys::window() else {
            return;
        };

        let b = self.clone();
        let cb = Closure::once_into_js(move || {
            b.hold_timer.borrow_mut().take();
            let activated = b.controller.borrow_mut().hold_elapsed(generation);
            if activated {
                b.render();
            }
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms,
        ) {
            Ok(id) => *self.hold_timer.borrow_mut() = Some(id),
            Err(e) => log::error!("could not arm touch hold timer: {e:?}"),
        }
    }

    fn cancel_hold_timer(&self) {
        let pending = self.hold_timer.borrow_mut().take();
        if let (Some(id), Some(window)) = (pending, web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
    }

    /// Row under the viewport point `at`, if any.
    fn item_at(&self, at: Point) -> Option<ItemRef> {
        let document = web_sys::window()?.document()?;
        let hit = document.element_from_point(at.x as f32, at.y as f32)?;
        let row = hit.closest(ITEM_SELECTOR).ok().flatten()?;
        item_from_element(&row)
    }

    /// Touch equivalent of `dragover`/`dragleave`.
    fn hover_at(&self, at: Point) {
        let changed = match self.item_at(at) {
            Some(candidate) => self.controller.borrow_mut().drag_over(&candidate),
            None => {
                let current = self.controller.borrow().highlighted().cloned();
                match current {
                    Some(h) => self.controller.borrow_mut().drag_leave(&h),
                    None => false,
                }
            }
        };
        if changed {
            self.render();
        }
    }

    /// Mirror controller state onto the rows.
    fn render(&self) {
        let controller = self.controller.borrow();
        for bound in self.items.iter() {
            let dragging = controller.is_dragging(&bound.item);
            let over = controller.is_drag_over(&bound.item);

            let classes = bound.element.class_list();
            let _ = classes.toggle_with_force(DRAGGING_CLASS, dragging);
            let _ = classes.toggle_with_force(DRAG_OVER_CLASS, over);

            if !dragging {
                let style = bound.element.style();
                let _ = style.remove_property("transform");
                let _ = style.remove_property("pointer-events");
            }
        }
    }

    fn handle_decision(&self, decision: DropDecision) {
        match decision {
            DropDecision::Dispatch(mutation) => self.dispatch(mutation),
            DropDecision::Ignored(reason) => log::debug!("drop ignored: {reason}"),
        }
    }

    fn dispatch(&self, mutation: Mutation) {
        debug_assert!(self.controller.borrow().is_in_flight());
        let b = self.clone();
        let api_client = self.app_state.0.api_client.get_untracked();

        self.app_state.0.dismiss_notice();
        self.app_state.0.drop_in_flight.set(true);
        let started_ms = now_ms();

        spawn_local(async move {
            let result = api_client.apply(&mutation).await;
            log::debug!(
                "{} answered after {}ms",
                mutation.endpoint(),
                now_ms() - started_ms
            );
            b.finish(result);
        });
    }

    /// Feed the response of the in-flight request back and act on it.
    fn finish(&self, result: ApiResult<()>) {
        let completion = self.controller.borrow_mut().complete(result);
        self.app_state.0.drop_in_flight.set(false);
        self.render();

        match completion {
            Completion::Reload => reload_view(),
            Completion::Failed { notice } => self.app_state.0.report_failure(notice),
            Completion::Stale => log::warn!("response arrived with nothing in flight"),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::api::{ApiError, ApiErrorKind, EnvConfig};
    use crate::state::AppState;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_rows(html: &str) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let root = document.create_element("div").expect("create root");
        // Keep rows inside the viewport so elementFromPoint can find them.
        root.set_attribute("style", "position: fixed; top: 0; left: 0; z-index: 9999; background: white")
            .expect("style root");
        root.set_inner_html(html);
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("append root");
        root
    }

    fn count(root: &web_sys::Element, class: &str) -> u32 {
        root.query_selector_all(&format!(".{class}"))
            .map(|l| l.length())
            .unwrap_or(0)
    }

    #[wasm_bindgen_test]
    fn test_item_from_element_reads_dataset() {
        let root = mount_rows(
            r#"<li class="note-item" data-note-id="N1" data-parent-id="N0"></li>
               <li class="tag-item" data-tag-id="T1"></li>
               <li class="note-item"></li>"#,
        );
        let rows = root.query_selector_all(ITEM_SELECTOR).expect("rows");
        let row = |i| {
            rows.item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                .expect("row")
        };

        let note = item_from_element(&row(0)).expect("note row");
        assert_eq!(note, ItemRef::new(ItemKind::Note, "N1"));
        assert_eq!(note.parent_id.as_deref(), Some("N0"));
        assert_eq!(item_from_element(&row(1)), Some(ItemRef::new(ItemKind::Tag, "T1")));
        assert_eq!(item_from_element(&row(2)), None);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_render_mirrors_controller_and_cleans_up() {
        let root = mount_rows(
            r#"<li class="note-item" data-note-id="N1"></li>
               <li class="note-item" data-note-id="N2"></li>
               <li class="note-item" data-note-id="N3"></li>"#,
        );
        let binding = DragReparentBinding::attach(AppContext(AppState::new(EnvConfig::default())));

        binding
            .controller
            .borrow_mut()
            .drag_start(ItemRef::new(ItemKind::Note, "N1"), InputSource::Mouse, Point::default())
            .expect("start");
        binding.controller.borrow_mut().drag_over(&ItemRef::new(ItemKind::Note, "N2"));
        binding.controller.borrow_mut().drag_over(&ItemRef::new(ItemKind::Note, "N3"));
        binding.render();
        assert_eq!(count(&root, DRAGGING_CLASS), 1);
        assert_eq!(count(&root, DRAG_OVER_CLASS), 1);

        binding.controller.borrow_mut().cancel();
        binding.render();
        assert_eq!(count(&root, DRAGGING_CLASS), 0);
        assert_eq!(count(&root, DRAG_OVER_CLASS), 0);
        root.remove();
    }

    const NESTED_ROWS: &str = r#"<ul>
        <li class="note-item" data-note-id="G"><span>grandparent</span>
          <ul>
            <li class="note-item" data-note-id="P" data-parent-id="G"><span>parent</span>
              <ul>
                <li class="note-item" data-note-id="S" data-parent-id="P"><span>source</span></li>
                <li class="note-item" data-note-id="T" data-parent-id="P"><span>sibling</span></li>
              </ul>
            </li>
          </ul>
        </li>
      </ul>"#;

    fn bind_page() -> DragReparentBinding {
        DragReparentBinding::attach(AppContext(AppState::new(EnvConfig::default())))
    }

    fn row(root: &web_sys::Element, id: &str) -> web_sys::HtmlElement {
        root.query_selector(&format!(r#"[data-note-id="{id}"]"#))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .expect("row")
    }

    /// Middle of the row's own label, clear of any nested rows.
    fn label_center(el: &web_sys::HtmlElement) -> Point {
        let rect = el
            .first_element_child()
            .expect("label")
            .get_bounding_client_rect();
        Point::new(
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        )
    }

    fn style_of(el: &web_sys::HtmlElement, property: &str) -> String {
        el.style().get_property_value(property).unwrap_or_default()
    }

    /// Fire the hold timer of the first gesture of a fresh binding.
    fn hold(binding: &DragReparentBinding) {
        binding.cancel_hold_timer();
        assert!(binding.controller.borrow_mut().hold_elapsed(1));
        binding.render();
    }

    /// `None` when the browser has no `Touch` constructor.
    fn touch_event(kind: &str, target: &web_sys::HtmlElement, at: Point) -> Option<web_sys::TouchEvent> {
        let touch_init = web_sys::TouchInit::new(1, target);
        touch_init.set_client_x(at.x);
        touch_init.set_client_y(at.y);
        let touch = web_sys::Touch::new(&touch_init).ok()?;

        let touches: wasm_bindgen::JsValue = js_sys::Array::of1(&touch).into();
        let init = web_sys::TouchEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_touches(&touches);
        init.set_changed_touches(&touches);
        web_sys::TouchEvent::new_with_event_init_dict(kind, &init).ok()
    }

    fn drag_event(kind: &str) -> web_sys::DragEvent {
        let init = web_sys::DragEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        web_sys::DragEvent::new_with_event_init_dict(kind, &init).expect("drag event")
    }

    #[wasm_bindgen_test]
    fn test_nested_touch_drag_drops_on_sibling() {
        let root = mount_rows(NESTED_ROWS);
        let binding = bind_page();
        let (source, sibling) = (row(&root, "S"), row(&root, "T"));
        let source_item = item_from_element(&source).expect("source item");
        let target_at = label_center(&sibling);

        binding.touch_start(&source_item, label_center(&source));
        hold(&binding);
        assert!(binding.touch_move(&source, &source_item, target_at));
        assert_eq!(count(&root, DRAGGING_CLASS), 1);
        assert_eq!(count(&root, DRAG_OVER_CLASS), 1);
        assert!(sibling.class_list().contains(DRAG_OVER_CLASS));

        let decision = binding.touch_end(Some(target_at));
        assert_eq!(
            decision,
            Some(DropDecision::Dispatch(Mutation::AttachChildNote {
                parent_note_id: "T".to_string(),
                child_note_id: "S".to_string(),
            }))
        );
        assert_eq!(count(&root, DRAGGING_CLASS), 0);
        assert_eq!(count(&root, DRAG_OVER_CLASS), 0);
        assert!(style_of(&source, "transform").is_empty());
        assert!(style_of(&source, "pointer-events").is_empty());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_touch_moved_before_hold_is_a_scroll() {
        let root = mount_rows(NESTED_ROWS);
        let binding = bind_page();
        let source = row(&root, "S");
        let source_item = item_from_element(&source).expect("source item");
        let at = label_center(&source);

        binding.touch_start(&source_item, at);
        assert_eq!(binding.controller.borrow().phase(), Phase::Armed);
        assert!(binding.hold_timer.borrow().is_some());

        assert!(!binding.touch_move(&source, &source_item, Point::new(at.x, at.y + 11.0)));
        assert_eq!(binding.controller.borrow().phase(), Phase::Idle);
        assert!(binding.hold_timer.borrow().is_none());
        assert!(style_of(&source, "transform").is_empty());

        assert_eq!(binding.touch_end(Some(at)), None);
        assert_eq!(count(&root, DRAGGING_CLASS), 0);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_touch_events_on_nested_row_move_only_that_row() {
        let root = mount_rows(NESTED_ROWS);
        let binding = bind_page();
        let (source, parent, grandparent, sibling) = (
            row(&root, "S"),
            row(&root, "P"),
            row(&root, "G"),
            row(&root, "T"),
        );
        let target_at = label_center(&sibling);

        let Some(start) = touch_event("touchstart", &source, label_center(&source)) else {
            root.remove();
            return;
        };
        source.dispatch_event(&start).expect("dispatch touchstart");
        assert_eq!(binding.controller.borrow().phase(), Phase::Armed);
        hold(&binding);

        let moved = touch_event("touchmove", &source, target_at).expect("touchmove");
        source.dispatch_event(&moved).expect("dispatch touchmove");

        assert!(!style_of(&source, "transform").is_empty());
        assert_eq!(style_of(&source, "pointer-events"), "none");
        for ancestor in [&parent, &grandparent] {
            assert!(style_of(ancestor, "transform").is_empty());
            assert!(style_of(ancestor, "pointer-events").is_empty());
            assert!(!ancestor.class_list().contains(DRAGGING_CLASS));
        }
        assert!(sibling.class_list().contains(DRAG_OVER_CLASS));

        let cancelled = touch_event("touchcancel", &source, target_at).expect("touchcancel");
        source.dispatch_event(&cancelled).expect("dispatch touchcancel");
        assert_eq!(binding.controller.borrow().phase(), Phase::Idle);
        assert_eq!(count(&root, DRAGGING_CLASS), 0);
        assert_eq!(count(&root, DRAG_OVER_CLASS), 0);
        assert!(style_of(&source, "pointer-events").is_empty());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_mouse_drag_events_stay_on_innermost_row() {
        let root = mount_rows(NESTED_ROWS);
        let binding = bind_page();
        let (source, parent, sibling) = (row(&root, "S"), row(&root, "P"), row(&root, "T"));

        source
            .dispatch_event(&drag_event("dragstart"))
            .expect("dispatch dragstart");
        assert!(source.class_list().contains(DRAGGING_CLASS));
        assert_eq!(count(&root, DRAGGING_CLASS), 1);

        sibling
            .dispatch_event(&drag_event("dragover"))
            .expect("dispatch dragover");
        assert!(sibling.class_list().contains(DRAG_OVER_CLASS));
        assert!(!parent.class_list().contains(DRAG_OVER_CLASS));
        assert_eq!(count(&root, DRAG_OVER_CLASS), 1);

        source
            .dispatch_event(&drag_event("dragend"))
            .expect("dispatch dragend");
        assert_eq!(binding.controller.borrow().phase(), Phase::Idle);
        assert_eq!(count(&root, DRAGGING_CLASS), 0);
        assert_eq!(count(&root, DRAG_OVER_CLASS), 0);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_failed_request_clears_rows_and_shows_notice() {
        let root = mount_rows(NESTED_ROWS);
        let binding = bind_page();
        let source = item_from_element(&row(&root, "S")).expect("source item");
        let target = item_from_element(&row(&root, "T")).expect("target item");

        binding
            .controller
            .borrow_mut()
            .drag_start(source, InputSource::Mouse, Point::default())
            .expect("start");
        binding.controller.borrow_mut().drag_over(&target);
        binding.render();
        assert_eq!(count(&root, DRAG_OVER_CLASS), 1);

        let decision = binding.controller.borrow_mut().drop(&target);
        assert!(matches!(decision, DropDecision::Dispatch(_)));
        binding.app_state.0.drop_in_flight.set(true);

        binding.finish(Err(ApiError {
            kind: ApiErrorKind::Http,
            message: "500".to_string(),
        }));

        assert!(!binding.controller.borrow().is_in_flight());
        assert!(!binding.app_state.0.drop_in_flight.get_untracked());
        assert_eq!(
            binding.app_state.0.notice.get_untracked().as_deref(),
            Some("Failed to move note. Please try again.")
        );
        assert_eq!(count(&root, DRAGGING_CLASS), 0);
        assert_eq!(count(&root, DRAG_OVER_CLASS), 0);
        root.remove();
    }
}
