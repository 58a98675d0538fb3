use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;
use gtk4::prelude::*;

use super::state::{AppState, WorkflowStatus, BackendEvent, update_status};
use crate::format;
use crate::ui::auth::set_form_status;
use crate::ui::dashboard::{render_scores, show_disease_info};

/// Handle a backend event. This is the core state machine.
pub fn handle_backend_event(state: &Rc<RefCell<AppState>>, event: BackendEvent) {
    match event {
        BackendEvent::PreviewReady(path, bytes) => {
            let s = state.borrow();
            if let Some(ref dash) = s.dashboard {
                // Last write wins when reads overlap.
                let data = glib::Bytes::from_owned(bytes);
                match gtk4::gdk::Texture::from_bytes(&data) {
                    Ok(texture) => {
                        dash.preview.set_paintable(Some(&texture));
                        dash.preview.set_visible(true);
                        dash.drop_hint.set_visible(false);
                        dash.dropzone.add_css_class("has-preview");
                    }
                    Err(e) => {
                        log::warn!("Could not decode preview for {}: {e}", path.display());
                    }
                }
            }
        }
        BackendEvent::PreviewFailed(msg) => {
            log::warn!("Preview failed: {msg}");
            let s = state.borrow();
            if let Some(ref dash) = s.dashboard {
                let toast = libadwaita::Toast::new(&msg);
                toast.set_timeout(3);
                dash.toast_overlay.add_toast(toast);
            }
        }
        BackendEvent::PredictionComplete(result) => {
            log::info!(
                "Prediction: {} ({:.2}%)",
                result.label,
                result.confidence * 100.0
            );
            on_prediction_complete(state, result);
        }
        BackendEvent::PredictionFailed(msg) => {
            log::error!("Prediction failed: {msg}");
            {
                let s = state.borrow();
                if let Some(ref dash) = s.dashboard {
                    dash.prediction_label.set_text("Error");
                    dash.confidence_label.set_text(&msg);
                    dash.analyze_button.set_sensitive(true);
                }
            }
            update_status(state, WorkflowStatus::Error, "Something went wrong");
        }
        BackendEvent::LoginComplete(message) => {
            log::info!("Login successful");
            {
                let s = state.borrow();
                if let Some(ref auth) = s.auth {
                    set_form_status(&auth.login_status, &format!("\u{2705} {message}"), "success");
                    auth.login_button.set_sensitive(true);
                }
            }
            enter_dashboard(state, 600);
        }
        BackendEvent::LoginFailed(msg) => {
            log::warn!("Login failed: {msg}");
            let s = state.borrow();
            if let Some(ref auth) = s.auth {
                set_form_status(&auth.login_status, &format!("\u{26a0}\u{fe0f} {msg}"), "error");
                auth.login_button.set_sensitive(true);
            }
        }
        BackendEvent::RegisterComplete(message) => {
            log::info!("Registration successful");
            {
                let s = state.borrow();
                if let Some(ref auth) = s.auth {
                    set_form_status(
                        &auth.register_status,
                        &format!("\u{2705} {message}\nRedirecting\u{2026}"),
                        "success",
                    );
                    auth.register_button.set_sensitive(true);
                }
            }
            enter_dashboard(state, 700);
        }
        BackendEvent::RegisterFailed(msg) => {
            log::warn!("Registration failed: {msg}");
            let s = state.borrow();
            if let Some(ref auth) = s.auth {
                set_form_status(&auth.register_status, &format!("\u{26a0}\u{fe0f} {msg}"), "error");
                auth.register_button.set_sensitive(true);
            }
        }
        BackendEvent::AdminUsersLoaded(payload) => {
            let s = state.borrow();
            if let Some(ref admin) = s.admin {
                let pretty = serde_json::to_string_pretty(&payload)
                    .unwrap_or_else(|_| payload.to_string());
                admin.json_label.remove_css_class("dim-label");
                admin.json_label.set_text(&pretty);
                admin.copy_button.set_visible(true);
            }
        }
        BackendEvent::AdminLookupFailed(msg) => {
            log::warn!("Admin lookup failed: {msg}");
            let s = state.borrow();
            if let Some(ref admin) = s.admin {
                let body = serde_json::json!({ "error": msg });
                let pretty = serde_json::to_string_pretty(&body)
                    .unwrap_or_else(|_| body.to_string());
                admin.json_label.remove_css_class("dim-label");
                admin.json_label.set_text(&pretty);
                admin.copy_button.set_visible(false);
            }
        }
        BackendEvent::LoggedOut => {
            log::info!("Logged out");
            on_logged_out(state);
        }
    }
}

fn on_prediction_complete(state: &Rc<RefCell<AppState>>, result: crate::api::PredictionResult) {
    {
        let mut s = state.borrow_mut();
        let file_name = s
            .selection
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        s.history.record_scan(&result.label, result.confidence, &file_name);
        if let Err(e) = s.history.save() {
            log::warn!("Failed to save history: {e}");
        }
    }

    {
        let s = state.borrow();
        if let Some(ref dash) = s.dashboard {
            dash.prediction_label.set_text(&result.label);
            dash.confidence_label
                .set_text(&format::confidence_text(result.confidence));
            render_scores(dash, &result.scores);
            show_disease_info(dash, &result.label);
            dash.analyze_button.set_sensitive(true);
        }
    }

    update_status(state, WorkflowStatus::Success, "Scan complete");
    state.borrow_mut().last_result = Some(result);
}

/// Present the dashboard after a short beat so the success message is seen.
fn enter_dashboard(state: &Rc<RefCell<AppState>>, delay_ms: u64) {
    let state_clone = state.clone();
    glib::timeout_add_local_once(
        std::time::Duration::from_millis(delay_ms),
        move || {
            let s = state_clone.borrow();
            if let Some(ref dash) = s.dashboard {
                dash.window.present();
            }
            if let Some(ref auth) = s.auth {
                auth.window.set_visible(false);
                auth.login_status.set_visible(false);
                auth.register_status.set_visible(false);
            }
        },
    );
}

/// Reset the workflow to its initial state and return to the login window.
fn on_logged_out(state: &Rc<RefCell<AppState>>) {
    {
        let mut s = state.borrow_mut();
        s.selection = None;
        s.last_result = None;
        if let Some(ref dash) = s.dashboard {
            dash.preview.set_paintable(gtk4::gdk::Paintable::NONE);
            dash.preview.set_visible(false);
            dash.drop_hint.set_visible(true);
            dash.dropzone.remove_css_class("has-preview");
            dash.prediction_label.set_text("Awaiting scan");
            dash.confidence_label.set_text("Confidence \u{2014}");
            render_scores(dash, &[]);
            dash.info_group.set_visible(false);
            dash.analyze_button.set_sensitive(true);
            dash.window.set_visible(false);
        }
        if let Some(ref auth) = s.auth {
            auth.window.present();
        }
    }
    update_status(state, WorkflowStatus::Idle, "Idle");
}
