//! Theme switching.
//!
//! The chosen theme lives in localStorage and on `<html data-theme>`. When
//! `PERSIST_THEME_REMOTELY` is set the choice is also posted to the backend,
//! best-effort.

use crate::state::AppContext;
use crate::storage::{
    load_first_from_storage, remove_from_storage, save_string_to_storage, LEGACY_THEME_KEY,
    THEME_KEY,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(crate) const THEME_ATTRIBUTE: &str = "data-theme";
pub(crate) const THEME_CONTROL_SELECTOR: &str = ".theme-controller";

/// daisyUI themes compiled into the stylesheet, plus the custom ones.
pub(crate) const THEMES: &[&str] = &[
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
    "nord",
    "sunset",
    "my_catppucin",
    "aurora",
    "twilight",
];

/// Canonical catalogue name for `raw`, if it is a known theme.
pub(crate) fn normalize_theme(raw: &str) -> Option<&'static str> {
    let wanted = raw.trim();
    THEMES
        .iter()
        .copied()
        .find(|t| t.eq_ignore_ascii_case(wanted))
}

/// Theme named by a control: radios carry it in `value`, links and buttons
/// in `data-theme-value`.
pub(crate) fn theme_from_control(
    data_theme_value: Option<String>,
    value: Option<String>,
) -> Option<&'static str> {
    data_theme_value
        .into_iter()
        .chain(value)
        .find_map(|v| normalize_theme(&v))
}

pub(crate) fn radio_selector(theme: &str) -> String {
    format!(r#"input[name="theme-dropdown"][value="{theme}"]"#)
}

fn set_document_theme(theme: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme);
    }

    if let Ok(Some(el)) = document.query_selector(&radio_selector(theme)) {
        if let Some(radio) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            radio.set_checked(true);
        }
    }
}

/// Apply and persist `raw`. Returns the applied theme, or `None` when the
/// name is not in the catalogue.
pub(crate) fn apply_theme(raw: &str) -> Option<&'static str> {
    let Some(theme) = normalize_theme(raw) else {
        log::warn!("unknown theme `{raw}` ignored");
        return None;
    };

    save_string_to_storage(THEME_KEY, theme);
    set_document_theme(theme);
    Some(theme)
}

/// Restore the saved theme, migrating the legacy key when present.
pub(crate) fn restore_saved_theme() -> Option<&'static str> {
    let saved = load_first_from_storage(&[THEME_KEY, LEGACY_THEME_KEY])?;
    let applied = apply_theme(&saved);
    if applied.is_some() {
        remove_from_storage(LEGACY_THEME_KEY);
    }
    applied
}

fn select_theme(app_state: AppContext, raw: &str) {
    let Some(theme) = apply_theme(raw) else {
        return;
    };
    app_state.0.theme.set(Some(theme.to_string()));
    log::info!("theme set to {theme}");

    if !app_state.0.config.persist_theme_remotely {
        return;
    }

    let api_client = app_state.0.api_client.get_untracked();
    spawn_local(async move {
        if let Err(e) = api_client.set_theme(theme).await {
            log::warn!("saving theme on server failed: {e}");
        }
    });
}

/// Wire every `.theme-controller` on the page.
pub(crate) fn bind_theme_controllers(app_state: AppContext) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(controls) = document.query_selector_all(THEME_CONTROL_SELECTOR) else {
        return;
    };

    for i in 0..controls.length() {
        let Some(control) = controls
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };

        let is_input = control.dyn_ref::<web_sys::HtmlInputElement>().is_some();
        let event = if is_input { "change" } else { "click" };

        let el = control.clone();
        let app_state = app_state.clone();
        let on_event = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let value = el
                .dyn_ref::<web_sys::HtmlInputElement>()
                .map(|input| input.value());
            let Some(theme) = theme_from_control(el.get_attribute("data-theme-value"), value)
            else {
                return;
            };
            if !is_input {
                ev.prevent_default();
            }
            select_theme(app_state.clone(), theme);
        });

        let _ = control.add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref());
        on_event.forget();
    }
}
