use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use super::state::{AppState, BackendEvent};

/// Read the selected file's bytes for the preview on the tokio runtime.
pub fn dispatch_preview(state: &Rc<RefCell<AppState>>, path: PathBuf) {
    let s = state.borrow();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let _ = sender.send(BackendEvent::PreviewReady(path, bytes)).await;
            }
            Err(e) => {
                let _ = sender
                    .send(BackendEvent::PreviewFailed(format!(
                        "Could not read {}: {e}",
                        path.display()
                    )))
                    .await;
            }
        }
    });
}

/// Submit the selected image to /predict on the tokio runtime.
pub fn dispatch_prediction(state: &Rc<RefCell<AppState>>, path: PathBuf) {
    let s = state.borrow();
    let api = s.api.clone();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match api.predict(&path).await {
            Ok(result) => {
                let _ = sender.send(BackendEvent::PredictionComplete(result)).await;
            }
            Err(e) => {
                let _ = sender
                    .send(BackendEvent::PredictionFailed(e.to_string()))
                    .await;
            }
        }
    });
}

pub fn dispatch_login(state: &Rc<RefCell<AppState>>, identifier: String, password: String) {
    let s = state.borrow();
    let api = s.api.clone();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match api.login(&identifier, &password).await {
            Ok(message) => {
                let _ = sender.send(BackendEvent::LoginComplete(message)).await;
            }
            Err(e) => {
                let _ = sender.send(BackendEvent::LoginFailed(e.to_string())).await;
            }
        }
    });
}

pub fn dispatch_register(
    state: &Rc<RefCell<AppState>>,
    username: String,
    email: String,
    password: String,
) {
    let s = state.borrow();
    let api = s.api.clone();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match api.register(&username, &email, &password).await {
            Ok(message) => {
                let _ = sender.send(BackendEvent::RegisterComplete(message)).await;
            }
            Err(e) => {
                let _ = sender.send(BackendEvent::RegisterFailed(e.to_string())).await;
            }
        }
    });
}

pub fn dispatch_admin_lookup(state: &Rc<RefCell<AppState>>, token: String) {
    let s = state.borrow();
    let api = s.api.clone();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match api.admin_users(&token).await {
            Ok(payload) => {
                let _ = sender.send(BackendEvent::AdminUsersLoaded(payload)).await;
            }
            Err(e) => {
                let _ = sender
                    .send(BackendEvent::AdminLookupFailed(e.to_string()))
                    .await;
            }
        }
    });
}

/// End the session. Navigation back to login happens regardless of outcome.
pub fn dispatch_logout(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    let api = s.api.clone();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        if let Err(e) = api.logout().await {
            log::warn!("Logout request failed: {e}");
        }
        let _ = sender.send(BackendEvent::LoggedOut).await;
    });
}
