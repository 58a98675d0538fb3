mod event_handler;
mod pipeline;
mod state;
mod submit;

pub use event_handler::handle_backend_event;
pub use pipeline::{dispatch_admin_lookup, dispatch_login, dispatch_logout, dispatch_register};
pub use state::{AppState, BackendEvent, WorkflowStatus};
pub use submit::{set_selection, submit};
