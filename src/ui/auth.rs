use gtk4::prelude::*;
use libadwaita::prelude::*;

/// Handles returned from building the auth window.
pub struct AuthWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub stack: gtk4::Stack,
    pub login_identifier: libadwaita::EntryRow,
    pub login_password: libadwaita::PasswordEntryRow,
    pub login_button: gtk4::Button,
    pub login_status: gtk4::Label,
    pub show_register_button: gtk4::Button,
    pub register_username: libadwaita::EntryRow,
    pub register_email: libadwaita::EntryRow,
    pub register_password: libadwaita::PasswordEntryRow,
    pub register_button: gtk4::Button,
    pub register_status: gtk4::Label,
    pub show_login_button: gtk4::Button,
    pub server_row: libadwaita::EntryRow,
    pub admin_button: gtk4::Button,
}

/// Build the login/register window shown before a session exists.
pub fn build_auth_window(
    app: &libadwaita::Application,
    initial_server_url: &str,
) -> AuthWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Fruit Guardian \u{2014} Sign in")
        .default_width(420)
        .default_height(560)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let admin_button = gtk4::Button::builder()
        .label("Admin")
        .valign(gtk4::Align::Center)
        .build();
    header.pack_end(&admin_button);

    toolbar_view.add_top_bar(&header);

    let stack = gtk4::Stack::new();
    stack.set_transition_type(gtk4::StackTransitionType::SlideLeftRight);

    // --- Login page ---
    let login_page = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    login_page.set_margin_start(16);
    login_page.set_margin_end(16);
    login_page.set_margin_top(12);
    login_page.set_margin_bottom(12);

    let login_group = libadwaita::PreferencesGroup::new();
    login_group.set_title("Sign in");
    login_group.set_description(Some("Use your username or email"));

    let login_identifier = libadwaita::EntryRow::builder()
        .title("Username or email")
        .build();
    login_group.add(&login_identifier);

    let login_password = libadwaita::PasswordEntryRow::builder()
        .title("Password")
        .build();
    login_group.add(&login_password);

    login_page.append(&login_group);

    let login_button = gtk4::Button::builder()
        .label("Sign in")
        .margin_top(12)
        .build();
    login_button.add_css_class("suggested-action");
    login_button.add_css_class("pill");
    login_page.append(&login_button);

    let login_status = build_status_label();
    login_page.append(&login_status);

    let show_register_button = gtk4::Button::builder()
        .label("Create an account")
        .margin_top(8)
        .build();
    show_register_button.add_css_class("flat");
    login_page.append(&show_register_button);

    stack.add_named(&login_page, Some("login"));

    // --- Register page ---
    let register_page = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    register_page.set_margin_start(16);
    register_page.set_margin_end(16);
    register_page.set_margin_top(12);
    register_page.set_margin_bottom(12);

    let register_group = libadwaita::PreferencesGroup::new();
    register_group.set_title("Create account");

    let register_username = libadwaita::EntryRow::builder().title("Username").build();
    register_group.add(&register_username);

    let register_email = libadwaita::EntryRow::builder().title("Email").build();
    register_group.add(&register_email);

    let register_password = libadwaita::PasswordEntryRow::builder()
        .title("Password")
        .build();
    register_group.add(&register_password);

    register_page.append(&register_group);

    let register_button = gtk4::Button::builder()
        .label("Register")
        .margin_top(12)
        .build();
    register_button.add_css_class("suggested-action");
    register_button.add_css_class("pill");
    register_page.append(&register_button);

    let register_status = build_status_label();
    register_page.append(&register_status);

    let show_login_button = gtk4::Button::builder()
        .label("Back to sign in")
        .margin_top(8)
        .build();
    show_login_button.add_css_class("flat");
    register_page.append(&show_login_button);

    stack.add_named(&register_page, Some("register"));

    // --- Server section, shared below both pages ---
    let outer = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    outer.append(&stack);

    let server_group = libadwaita::PreferencesGroup::new();
    server_group.set_title("Server");
    server_group.set_margin_start(16);
    server_group.set_margin_end(16);
    server_group.set_margin_bottom(12);

    let server_row = libadwaita::EntryRow::builder()
        .title("Server URL")
        .text(initial_server_url)
        .build();
    server_group.add(&server_row);
    outer.append(&server_group);

    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&outer)
        .build();
    toolbar_view.set_content(Some(&scrolled));
    window.set_content(Some(&toolbar_view));

    AuthWidgets {
        window,
        stack,
        login_identifier,
        login_password,
        login_button,
        login_status,
        show_register_button,
        register_username,
        register_email,
        register_password,
        register_button,
        register_status,
        show_login_button,
        server_row,
        admin_button,
    }
}

/// Update a form status line: text plus pending/success/error styling.
pub fn set_form_status(label: &gtk4::Label, message: &str, state: &str) {
    label.set_visible(true);
    label.set_text(message);
    for class in ["pending", "success", "error"] {
        label.remove_css_class(class);
    }
    label.add_css_class(state);
}

fn build_status_label() -> gtk4::Label {
    let label = gtk4::Label::new(None);
    label.add_css_class("status-message");
    label.set_wrap(true);
    label.set_justify(gtk4::Justification::Center);
    label.set_margin_top(10);
    label.set_visible(false);
    label
}
