use gtk4::prelude::*;
use libadwaita::prelude::*;

/// Handles returned from building the admin lookup window.
pub struct AdminWidgets {
    pub window: libadwaita::Window,
    pub toast_overlay: libadwaita::ToastOverlay,
    pub token_row: libadwaita::PasswordEntryRow,
    pub fetch_button: gtk4::Button,
    pub json_label: gtk4::Label,
    pub copy_button: gtk4::Button,
}

/// Build the admin credential-lookup window. Hidden until requested.
pub fn build_admin_window(parent: &impl IsA<gtk4::Window>) -> AdminWidgets {
    let window = libadwaita::Window::builder()
        .title("Admin \u{2014} User Directory")
        .default_width(520)
        .default_height(480)
        .transient_for(parent)
        .modal(true)
        .hide_on_close(true)
        .build();

    let toast_overlay = libadwaita::ToastOverlay::new();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let copy_button = gtk4::Button::from_icon_name("edit-copy-symbolic");
    copy_button.set_tooltip_text(Some("Copy JSON"));
    copy_button.set_visible(false);
    header.pack_end(&copy_button);

    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    let token_group = libadwaita::PreferencesGroup::new();
    token_group.set_title("Access token");

    let token_row = libadwaita::PasswordEntryRow::builder()
        .title("Admin token")
        .build();
    token_group.add(&token_row);
    content.append(&token_group);

    let fetch_button = gtk4::Button::builder()
        .label("Fetch users")
        .margin_top(12)
        .build();
    fetch_button.add_css_class("suggested-action");
    content.append(&fetch_button);

    let json_label = gtk4::Label::new(Some("// enter a token to fetch credentials"));
    json_label.add_css_class("monospace");
    json_label.add_css_class("dim-label");
    json_label.set_wrap(true);
    json_label.set_xalign(0.0);
    json_label.set_selectable(true);
    json_label.set_margin_top(12);
    content.append(&json_label);

    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));
    toast_overlay.set_child(Some(&toolbar_view));
    window.set_content(Some(&toast_overlay));

    AdminWidgets {
        window,
        toast_overlay,
        token_row,
        fetch_button,
        json_label,
        copy_button,
    }
}
