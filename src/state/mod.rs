use crate::api::{ApiClient, EnvConfig};
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: EnvConfig,
    pub api_client: RwSignal<ApiClient>,

    /// A drop mutation is waiting for the server.
    pub drop_in_flight: RwSignal<bool>,

    /// User-visible failure notice; `None` when nothing to report.
    pub notice: RwSignal<Option<String>>,

    /// Theme currently applied to the page.
    pub theme: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new(config: EnvConfig) -> Self {
        let api_client = ApiClient::from_page(&config);

        Self {
            config,
            api_client: RwSignal::new(api_client),
            drop_in_flight: RwSignal::new(false),
            notice: RwSignal::new(None),
            theme: RwSignal::new(None),
        }
    }

    pub fn report_failure(&self, notice: impl Into<String>) {
        self.notice.set(Some(notice.into()));
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
