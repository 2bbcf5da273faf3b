pub(crate) const CSRF_META_SELECTOR: &str = r#"meta[name="csrf-token"]"#;

/// Anti-forgery token rendered by the server into `<meta name="csrf-token">`.
pub(crate) fn read_csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(CSRF_META_SELECTOR).ok().flatten()?;
    meta.get_attribute("content")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Full page reload; the server render is the source of truth for the tree.
pub(crate) fn reload_view() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {e:?}");
        }
    }
}

pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}
