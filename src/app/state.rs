use std::path::PathBuf;

use crate::api::{ApiClient, PredictionResult};
use crate::config::Config;
use crate::history::History;
use crate::ui::admin::AdminWidgets;
use crate::ui::auth::AuthWidgets;
use crate::ui::dashboard::DashboardWidgets;

/// Events sent from tokio tasks back to the GTK main thread.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    PreviewReady(PathBuf, Vec<u8>),
    PreviewFailed(String),
    PredictionComplete(PredictionResult),
    PredictionFailed(String),
    LoginComplete(String),
    LoginFailed(String),
    RegisterComplete(String),
    RegisterFailed(String),
    AdminUsersLoaded(serde_json::Value),
    AdminLookupFailed(String),
    LoggedOut,
}

/// Upload workflow status. Every state accepts a new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Idle,
    Busy,
    Success,
    Error,
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub status: WorkflowStatus,
    pub selection: Option<PathBuf>,
    pub last_result: Option<PredictionResult>,
    pub config: Config,
    pub history: History,
    pub api: ApiClient,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<BackendEvent>,

    // UI handles
    pub dashboard: Option<DashboardWidgets>,
    pub auth: Option<AuthWidgets>,
    pub admin: Option<AdminWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<BackendEvent>) -> Self {
        let config = Config::load();
        let history = History::load();
        let api = ApiClient::new(&config.server_url);
        let tokio_rt = tokio::runtime::Runtime::new()
            .expect("Failed to create tokio runtime");

        Self {
            status: WorkflowStatus::Idle,
            selection: None,
            last_result: None,
            config,
            history,
            api,
            tokio_rt,
            backend_sender: sender,
            dashboard: None,
            auth: None,
            admin: None,
        }
    }
}

/// Helper to update workflow status and the status label together.
pub fn update_status(
    state: &std::rc::Rc<std::cell::RefCell<AppState>>,
    status: WorkflowStatus,
    label_text: &str,
) {
    let mut s = state.borrow_mut();
    s.status = status;
    if let Some(ref dash) = s.dashboard {
        crate::ui::dashboard::set_status(dash, status, label_text);
    }
}
