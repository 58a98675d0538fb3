use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::api::Score;
use crate::app::WorkflowStatus;
use crate::format;

/// Handles returned from building the dashboard window.
pub struct DashboardWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub toast_overlay: libadwaita::ToastOverlay,
    pub scrolled: gtk4::ScrolledWindow,
    pub dropzone: gtk4::Box,
    pub drop_hint: gtk4::Label,
    pub preview: gtk4::Picture,
    pub analyze_button: gtk4::Button,
    pub prediction_label: gtk4::Label,
    pub confidence_label: gtk4::Label,
    pub status_label: gtk4::Label,
    pub score_list: gtk4::Box,
    pub info_group: libadwaita::PreferencesGroup,
    pub info_label: gtk4::Label,
    pub logout_button: gtk4::Button,
    pub history_button: gtk4::Button,
}

/// Build the main analysis window.
pub fn build_dashboard(app: &libadwaita::Application) -> DashboardWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Fruit Guardian")
        .default_width(480)
        .default_height(640)
        .build();

    load_css();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let history_button = gtk4::Button::from_icon_name("document-open-recent-symbolic");
    history_button.set_tooltip_text(Some("Scan history"));
    header.pack_start(&history_button);

    let logout_button = gtk4::Button::builder()
        .label("Log out")
        .valign(gtk4::Align::Center)
        .build();
    header.pack_end(&logout_button);

    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Drop zone ---
    let dropzone = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    dropzone.add_css_class("dropzone");
    dropzone.set_valign(gtk4::Align::Start);

    let drop_hint = gtk4::Label::new(Some(
        "Drop a fruit photo here\nor click to browse (jpg, png)",
    ));
    drop_hint.add_css_class("dim-label");
    drop_hint.set_justify(gtk4::Justification::Center);
    drop_hint.set_margin_top(24);
    drop_hint.set_margin_bottom(24);
    dropzone.append(&drop_hint);

    let preview = gtk4::Picture::new();
    preview.set_content_fit(gtk4::ContentFit::Contain);
    preview.set_size_request(-1, 220);
    preview.set_visible(false);
    dropzone.append(&preview);

    content.append(&dropzone);

    // --- Analyze button ---
    let analyze_button = gtk4::Button::builder()
        .label("Analyze Sample")
        .margin_top(12)
        .build();
    analyze_button.add_css_class("suggested-action");
    analyze_button.add_css_class("pill");
    content.append(&analyze_button);

    // --- Result group ---
    let result_group = libadwaita::PreferencesGroup::new();
    result_group.set_title("Diagnosis");
    result_group.set_margin_top(12);

    let prediction_row = libadwaita::ActionRow::builder()
        .title("Prediction")
        .build();
    let prediction_label = gtk4::Label::new(Some("Awaiting scan"));
    prediction_label.add_css_class("title-3");
    prediction_row.add_suffix(&prediction_label);
    result_group.add(&prediction_row);

    let confidence_row = libadwaita::ActionRow::builder()
        .title("Confidence")
        .build();
    let confidence_label = gtk4::Label::new(Some("Confidence \u{2014}"));
    confidence_label.add_css_class("dim-label");
    confidence_label.set_wrap(true);
    confidence_row.add_suffix(&confidence_label);
    result_group.add(&confidence_row);

    let status_row = libadwaita::ActionRow::builder()
        .title("Status")
        .build();
    let status_label = gtk4::Label::new(Some("Idle"));
    status_label.add_css_class("dim-label");
    status_row.add_suffix(&status_label);
    result_group.add(&status_row);

    content.append(&result_group);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- Score list ---
    let scores_group = libadwaita::PreferencesGroup::new();
    scores_group.set_title("Class Scores");
    scores_group.set_margin_top(12);

    let score_list = gtk4::Box::new(gtk4::Orientation::Vertical, 10);
    score_list.set_margin_top(8);
    scores_group.add(&score_list);

    content.append(&scores_group);

    // --- Disease reference panel, hidden until a known label arrives ---
    let info_group = libadwaita::PreferencesGroup::new();
    info_group.set_title("Disease Reference");
    info_group.set_margin_top(12);
    info_group.set_visible(false);

    let info_label = gtk4::Label::new(None);
    info_label.set_wrap(true);
    info_label.set_xalign(0.0);
    info_label.set_selectable(true);
    info_label.set_margin_top(8);
    info_group.add(&info_label);

    content.append(&info_group);

    // Assemble
    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));

    let toast_overlay = libadwaita::ToastOverlay::new();
    toast_overlay.set_child(Some(&toolbar_view));
    window.set_content(Some(&toast_overlay));

    DashboardWidgets {
        window,
        toast_overlay,
        scrolled,
        dropzone,
        drop_hint,
        preview,
        analyze_button,
        prediction_label,
        confidence_label,
        status_label,
        score_list,
        info_group,
        info_label,
        logout_button,
        history_button,
    }
}

/// Update the status label text and its state styling.
pub fn set_status(dash: &DashboardWidgets, status: WorkflowStatus, text: &str) {
    dash.status_label.set_text(text);
    for class in ["status-busy", "status-success", "status-error"] {
        dash.status_label.remove_css_class(class);
    }
    match status {
        WorkflowStatus::Busy => dash.status_label.add_css_class("status-busy"),
        WorkflowStatus::Success => dash.status_label.add_css_class("status-success"),
        WorkflowStatus::Error => dash.status_label.add_css_class("status-error"),
        WorkflowStatus::Idle => {}
    }
}

/// Replace all score rows. An empty slice clears the list.
pub fn render_scores(dash: &DashboardWidgets, scores: &[Score]) {
    while let Some(child) = dash.score_list.first_child() {
        dash.score_list.remove(&child);
    }

    for score in scores {
        let row = gtk4::Box::new(gtk4::Orientation::Vertical, 4);
        row.add_css_class("score-item");

        let header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
        let name = gtk4::Label::new(Some(&score.label));
        name.add_css_class("heading");
        name.set_xalign(0.0);
        name.set_hexpand(true);
        let percent = gtk4::Label::new(Some(&format::score_percent(score.confidence)));
        percent.add_css_class("dim-label");
        header.append(&name);
        header.append(&percent);

        // Proportional bar: value == confidence on a 0..1 range.
        let bar = gtk4::LevelBar::new();
        bar.set_min_value(0.0);
        bar.set_max_value(1.0);
        bar.set_value(score.confidence.clamp(0.0, 1.0));

        row.append(&header);
        row.append(&bar);
        dash.score_list.append(&row);
    }
}

/// Show reference content for a known label, or hide the panel.
pub fn show_disease_info(dash: &DashboardWidgets, label: &str) {
    match crate::disease::lookup(label) {
        Some(info) => {
            dash.info_label.set_text(info);
            dash.info_group.set_visible(true);
            // Scroll the panel into view once it has been allocated.
            let scrolled = dash.scrolled.clone();
            gtk4::glib::timeout_add_local_once(
                std::time::Duration::from_millis(100),
                move || {
                    let adj = scrolled.vadjustment();
                    adj.set_value(adj.upper() - adj.page_size());
                },
            );
        }
        None => dash.info_group.set_visible(false),
    }
}

fn load_css() {
    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(
        r#"
        .dropzone {
            border: 2px dashed alpha(@borders, 0.8);
            border-radius: 12px;
            padding: 12px;
        }
        .dropzone.dragover {
            border-color: @accent_bg_color;
            background-color: alpha(@accent_bg_color, 0.08);
        }
        .dropzone.has-preview {
            border-style: solid;
        }
        .status-busy {
            color: @accent_fg_color;
        }
        .status-success {
            color: @success_color;
        }
        .status-error {
            color: @error_color;
        }
        .status-message.pending {
            color: @accent_fg_color;
        }
        .status-message.success {
            color: @success_color;
        }
        .status-message.error {
            color: @error_color;
        }
        "#,
    );
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
