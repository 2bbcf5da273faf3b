use crate::dnd::{MoveProtocol, Mutation};
use crate::util::read_csrf_token;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// The request never got a response.
    Network,
    /// Non-2xx status.
    Http,
    /// 2xx, but the body was not what the endpoint promises.
    Parse,
    /// 2xx with an explicit `success: false`.
    Rejected,
}

#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn rejected(ctx: &str, detail: Option<&str>) -> Self {
        Self {
            kind: ApiErrorKind::Rejected,
            message: match detail {
                Some(d) => format!("{ctx} rejected: {d}"),
                None => format!("{ctx} rejected"),
            },
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const CSRF_HEADER: &str = "X-CSRFToken";

/// Page-level settings from `window.ENV`.
#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub move_protocol: MoveProtocol,
    pub persist_theme_remotely: bool,
    pub log_level: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            move_protocol: MoveProtocol::Json,
            persist_theme_remotely: false,
            log_level: "info".to_string(),
        }
    }
}

impl EnvConfig {
    /// Read `window.ENV`; each key is accepted as `UPPER_CASE` or `lower_case`.
    pub fn from_window() -> Self {
        let mut cfg = Self::default();

        let Some(window) = web_sys::window() else {
            return cfg;
        };

        if let Ok(origin) = window.location().origin() {
            if origin.starts_with("http") {
                cfg.api_url = origin;
            }
        }

        let Some(env) = window.get("ENV") else {
            return cfg;
        };
        if env.is_undefined() || !env.is_object() {
            return cfg;
        }

        let get = |upper: &str, lower: &str| -> Option<wasm_bindgen::JsValue> {
            [upper, lower].iter().find_map(|k| {
                js_sys::Reflect::get(&env, &wasm_bindgen::JsValue::from(*k))
                    .ok()
                    .filter(|v| !v.is_undefined() && !v.is_null())
            })
        };

        if let Some(url) = get("API_URL", "api_url").and_then(|v| v.as_string()) {
            cfg.api_url = url;
        }
        if let Some(p) = get("MOVE_PROTOCOL", "move_protocol")
            .and_then(|v| v.as_string())
            .and_then(|s| MoveProtocol::parse(&s))
        {
            cfg.move_protocol = p;
        }
        if let Some(v) = get("PERSIST_THEME_REMOTELY", "persist_theme_remotely") {
            cfg.persist_theme_remotely = v
                .as_bool()
                .or_else(|| v.as_string().map(|s| is_truthy(&s)))
                .unwrap_or(false);
        }
        if let Some(level) = get("LOG_LEVEL", "log_level").and_then(|v| v.as_string()) {
            cfg.log_level = level;
        }

        cfg
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AttachChildNoteRequest {
    pub parent_note_id: String,
    pub child_note_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AttachChildTagRequest {
    pub parent_tag_id: String,
    pub child_tag_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AttachNoteToTagRequest {
    pub note_id: String,
    pub tag_id: String,
}

/// Form body for `POST /note/:id/move`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum MoveNoteForm {
    Detach { detach: bool },
    Attach { new_parent_id: String },
}

/// Body returned by the JSON attach endpoints.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AttachResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: None,
        }
    }

    /// Client for the current page: base URL from `EnvConfig`, token from the
    /// `csrf-token` meta tag.
    pub fn from_page(cfg: &EnvConfig) -> Self {
        let mut client = Self::new(cfg.api_url.clone());
        if let Some(token) = read_csrf_token() {
            client.set_csrf_token(token);
        }
        client
    }

    pub fn set_csrf_token(&mut self, token: String) {
        self.csrf_token = Some(token);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_csrf_header(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        // The backend expects the header even when the page carries no token.
        req.header(CSRF_HEADER, self.csrf_token.clone().unwrap_or_default())
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        ctx: &str,
    ) -> ApiResult<reqwest::Response> {
        let res = self
            .with_csrf_header(req)
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        self.send(client.post(self.url(path)).json(body), path).await
    }

    async fn post_form(&self, path: &str, body: &impl Serialize) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        self.send(client.post(self.url(path)).form(body), path).await
    }

    pub(crate) fn parse_attach_response(data: serde_json::Value, ctx: &str) -> ApiResult<()> {
        let parsed: AttachResponse = serde_json::from_value(data).map_err(ApiError::parse)?;
        if parsed.success {
            Ok(())
        } else {
            Err(ApiError::rejected(ctx, parsed.error.as_deref()))
        }
    }

    pub async fn attach_child_note(&self, parent_note_id: &str, child_note_id: &str) -> ApiResult<()> {
        let path = "/api/attach_child_note";
        let res = self
            .post_json(
                path,
                &AttachChildNoteRequest {
                    parent_note_id: parent_note_id.to_string(),
                    child_note_id: child_note_id.to_string(),
                },
            )
            .await?;

        let data: serde_json::Value = res.json().await.map_err(ApiError::parse)?;
        Self::parse_attach_response(data, path)
    }

    pub async fn attach_child_tag(&self, parent_tag_id: &str, child_tag_id: &str) -> ApiResult<()> {
        self.post_json(
            "/api/attach_child_tag",
            &AttachChildTagRequest {
                parent_tag_id: parent_tag_id.to_string(),
                child_tag_id: child_tag_id.to_string(),
            },
        )
        .await
        .map(|_| ())
    }

    pub async fn attach_note_to_tag(&self, note_id: &str, tag_id: &str) -> ApiResult<()> {
        self.post_json(
            "/api/attach_note_to_tag",
            &AttachNoteToTagRequest {
                note_id: note_id.to_string(),
                tag_id: tag_id.to_string(),
            },
        )
        .await
        .map(|_| ())
    }

    pub async fn detach_note(&self, note_id: &str) -> ApiResult<()> {
        let path = format!("/note/{}/move", urlencoding::encode(note_id));
        self.post_form(&path, &MoveNoteForm::Detach { detach: true })
            .await
            .map(|_| ())
    }

    /// Two-step move used by the form protocol: detach, then attach under the
    /// new parent. The second response decides the outcome.
    pub async fn move_note(&self, note_id: &str, new_parent_id: &str) -> ApiResult<()> {
        if let Err(e) = self.detach_note(note_id).await {
            // The backend re-parents on attach anyway; a failed detach is not fatal.
            log::warn!("detach of note {note_id} failed: {e}");
        }

        let path = format!("/note/{}/move", urlencoding::encode(note_id));
        self.post_form(
            &path,
            &MoveNoteForm::Attach {
                new_parent_id: new_parent_id.to_string(),
            },
        )
        .await
        .map(|_| ())
    }

    pub async fn set_theme(&self, theme: &str) -> ApiResult<()> {
        let path = format!("/set-theme/{}", urlencoding::encode(theme));
        self.post_json(&path, &serde_json::json!({})).await.map(|_| ())
    }

    /// Send the request a drop decided on.
    pub async fn apply(&self, mutation: &Mutation) -> ApiResult<()> {
        match mutation {
            Mutation::AttachChildNote {
                parent_note_id,
                child_note_id,
            } => self.attach_child_note(parent_note_id, child_note_id).await,
            Mutation::AttachChildTag {
                parent_tag_id,
                child_tag_id,
            } => self.attach_child_tag(parent_tag_id, child_tag_id).await,
            Mutation::AttachNoteToTag { note_id, tag_id } => {
                self.attach_note_to_tag(note_id, tag_id).await
            }
            Mutation::MoveNote {
                note_id,
                new_parent_id,
            } => self.move_note(note_id, new_parent_id).await,
        }
    }
}
