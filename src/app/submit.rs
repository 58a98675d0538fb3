use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use gtk4::prelude::*;

use super::pipeline::{dispatch_prediction, dispatch_preview};
use super::state::{AppState, WorkflowStatus, update_status};
use crate::ui::dashboard::render_scores;

/// Store a newly chosen image file and kick off the preview read.
/// Both the file chooser and drag-and-drop land here.
pub fn set_selection(state: &Rc<RefCell<AppState>>, path: PathBuf) {
    log::info!("Selected {}", path.display());
    state.borrow_mut().selection = Some(path.clone());
    dispatch_preview(state, path);
}

/// Submit the current selection for analysis.
///
/// Without a selection this is rejected with an inline warning and no
/// state change. Otherwise the workflow enters Busy: analyze button
/// disabled, previous result cleared, info panel hidden.
pub fn submit(state: &Rc<RefCell<AppState>>) {
    let selection = state.borrow().selection.clone();
    let Some(path) = selection else {
        let s = state.borrow();
        if let Some(ref dash) = s.dashboard {
            let toast = libadwaita::Toast::new("Select an image first.");
            toast.set_timeout(2);
            dash.toast_overlay.add_toast(toast);
        }
        return;
    };

    log::info!("Submitting {} for analysis", path.display());

    {
        let s = state.borrow();
        if let Some(ref dash) = s.dashboard {
            dash.analyze_button.set_sensitive(false);
            dash.prediction_label.set_text("Processing\u{2026}");
            dash.confidence_label.set_text("Confidence \u{2014}");
            render_scores(dash, &[]);
            dash.info_group.set_visible(false);
        }
    }

    update_status(state, WorkflowStatus::Busy, "Analyzing sample...");
    dispatch_prediction(state, path);
}
