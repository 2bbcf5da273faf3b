use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Modifier {
    Alt,
    /// Ctrl, or Cmd on macOS.
    Control,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShortcutAction {
    /// Follow the first link matching the selector.
    Navigate(&'static str),
    /// Insert text at the caret of the focused input or textarea.
    InsertSnippet(&'static str),
    /// Submit the form with this id.
    SubmitForm(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Shortcut {
    pub name: &'static str,
    /// Compared against `KeyboardEvent.key` (case-insensitive) and
    /// `KeyboardEvent.code`.
    pub key: &'static str,
    pub modifier: Modifier,
    pub action: ShortcutAction,
}

pub(crate) const LAMBDA_SNIPPET: &str = "λ#()#";

pub(crate) const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        name: "edit",
        key: "e",
        modifier: Modifier::Alt,
        action: ShortcutAction::Navigate("a[data-edit-link]"),
    },
    Shortcut {
        name: "create",
        key: "c",
        modifier: Modifier::Alt,
        action: ShortcutAction::Navigate("a[data-create-link]"),
    },
    Shortcut {
        name: "lambda",
        key: "Backquote",
        modifier: Modifier::Alt,
        action: ShortcutAction::InsertSnippet(LAMBDA_SNIPPET),
    },
    Shortcut {
        name: "submit",
        key: "Enter",
        modifier: Modifier::Control,
        action: ShortcutAction::SubmitForm("content-edit-form"),
    },
];

/// The parts of a `keydown` event the matcher looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct KeyChord {
    pub key: String,
    pub code: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            code: ev.code(),
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        }
    }

    fn has(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Alt => self.alt,
            Modifier::Control => self.ctrl || self.meta,
        }
    }
}

impl Shortcut {
    pub fn matches(&self, chord: &KeyChord) -> bool {
        if !chord.has(self.modifier) {
            return false;
        }

        if chord.key.eq_ignore_ascii_case(self.key) || chord.code == self.key {
            return true;
        }

        // Alt+letter produces a composed character on macOS; fall back to the
        // physical key.
        self.key.len() == 1 && chord.code == format!("Key{}", self.key.to_ascii_uppercase())
    }
}

pub(crate) fn match_shortcut(chord: &KeyChord) -> Option<&'static Shortcut> {
    SHORTCUTS.iter().find(|s| s.matches(chord))
}

/// Replace `[start, end)` of `value` with `snippet`.
///
/// Offsets are UTF-16 code units, as reported by `selectionStart`. Returns the
/// new value and the caret position: just after the first `(` of the snippet,
/// or after the snippet when it has none.
pub(crate) fn splice_snippet(value: &str, start: u32, end: u32, snippet: &str) -> (String, u32) {
    let units: Vec<u16> = value.encode_utf16().collect();
    let len = units.len();
    let start = (start as usize).min(len);
    let end = (end as usize).clamp(start, len);

    let mut out: Vec<u16> = Vec::with_capacity(len + snippet.len());
    out.extend_from_slice(&units[..start]);
    out.extend(snippet.encode_utf16());
    out.extend_from_slice(&units[end..]);

    let caret_in_snippet = match snippet.find('(') {
        Some(i) => snippet[..i].encode_utf16().count() + 1,
        None => snippet.encode_utf16().count(),
    };

    (
        String::from_utf16_lossy(&out),
        (start + caret_in_snippet) as u32,
    )
}

fn navigate_to_link(selector: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let href = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        .map(|a| a.href());

    if let Some(href) = href {
        let _ = window.location().set_href(&href);
    } else {
        log::debug!("no link for `{selector}` on this page");
    }
}

fn insert_at_caret(snippet: &str) {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());

    if let Some(area) = active
        .as_ref()
        .and_then(|el| el.dyn_ref::<web_sys::HtmlTextAreaElement>())
    {
        let value = area.value();
        let start = area.selection_start().ok().flatten().unwrap_or(0);
        let end = area.selection_end().ok().flatten().unwrap_or(start);
        let (next, caret) = splice_snippet(&value, start, end, snippet);
        area.set_value(&next);
        let _ = area.set_selection_range(caret, caret);
        let _ = area.focus();
        return;
    }

    if let Some(input) = active
        .as_ref()
        .and_then(|el| el.dyn_ref::<web_sys::HtmlInputElement>())
    {
        let value = input.value();
        let start = input.selection_start().ok().flatten().unwrap_or(0);
        let end = input.selection_end().ok().flatten().unwrap_or(start);
        let (next, caret) = splice_snippet(&value, start, end, snippet);
        input.set_value(&next);
        let _ = input.set_selection_range(caret, caret);
        let _ = input.focus();
        return;
    }

    log::warn!("No input field or textarea is active.");
}

fn submit_form(id: &str) {
    let form = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok());

    match form {
        Some(form) => {
            if let Err(e) = form.submit() {
                log::error!("submitting #{id} failed: {e:?}");
            }
        }
        None => log::debug!("no form #{id} on this page"),
    }
}

fn run(action: ShortcutAction) {
    match action {
        ShortcutAction::Navigate(selector) => navigate_to_link(selector),
        ShortcutAction::InsertSnippet(snippet) => insert_at_caret(snippet),
        ShortcutAction::SubmitForm(id) => submit_form(id),
    }
}

/// Listen for shortcut chords on the window. Keep the handle alive for as
/// long as shortcuts should work.
pub(crate) fn bind_keyboard_shortcuts() -> WindowListenerHandle {
    window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let chord = KeyChord::from_event(&ev);
        let Some(shortcut) = match_shortcut(&chord) else {
            return;
        };

        ev.prevent_default();
        log::debug!("shortcut `{}`", shortcut.name);
        run(shortcut.action);
    })
}
