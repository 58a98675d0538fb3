mod api;
mod app;
mod clipboard;
mod config;
mod disease;
mod format;
mod history;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use libadwaita::prelude::*;

use api::ApiClient;
use app::{AppState, BackendEvent};

fn main() {
    env_logger::init();
    log::info!("Fruit Guardian starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.fruit-guardian.desktop")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Create async channel for backend → UI communication
    let (backend_tx, backend_rx) = async_channel::unbounded::<BackendEvent>();

    // Build app state
    let state = Rc::new(RefCell::new(AppState::new(backend_tx)));

    // Build UI
    let auth = ui::auth::build_auth_window(app, &state.borrow().config.server_url);
    let dashboard = ui::dashboard::build_dashboard(app);
    let admin = ui::admin::build_admin_window(&auth.window);

    // Wire up the drop zone: click-to-browse
    {
        let state_clone = state.clone();
        let window = dashboard.window.clone();
        let click = gtk4::GestureClick::new();
        click.connect_released(move |_, _, _, _| {
            open_file_chooser(&state_clone, &window);
        });
        dashboard.dropzone.add_controller(click);
    }

    // Wire up the drop zone: drag-and-drop
    {
        let drop_target = gtk4::DropTarget::new(
            gtk4::gdk::FileList::static_type(),
            gtk4::gdk::DragAction::COPY,
        );

        {
            let dropzone = dashboard.dropzone.clone();
            drop_target.connect_enter(move |_, _, _| {
                dropzone.add_css_class("dragover");
                gtk4::gdk::DragAction::COPY
            });
        }
        {
            let dropzone = dashboard.dropzone.clone();
            drop_target.connect_leave(move |_| {
                dropzone.remove_css_class("dragover");
            });
        }
        {
            let state_clone = state.clone();
            let dropzone = dashboard.dropzone.clone();
            drop_target.connect_drop(move |_, value, _, _| {
                dropzone.remove_css_class("dragover");
                if let Ok(list) = value.get::<gtk4::gdk::FileList>() {
                    // Only the first dropped file is used.
                    if let Some(path) = list.files().first().and_then(|f| f.path()) {
                        app::set_selection(&state_clone, path);
                        return true;
                    }
                }
                false
            });
        }

        dashboard.dropzone.add_controller(drop_target);
    }

    // Wire up form submission
    {
        let state_clone = state.clone();
        dashboard.analyze_button.connect_clicked(move |_| {
            app::submit(&state_clone);
        });
    }

    // Wire up logout
    {
        let state_clone = state.clone();
        dashboard.logout_button.connect_clicked(move |_| {
            app::dispatch_logout(&state_clone);
        });
    }

    // Wire up scan history
    {
        let state_clone = state.clone();
        let dash_window = dashboard.window.clone();
        dashboard.history_button.connect_clicked(move |_| {
            let records = state_clone.borrow().history.records.clone();
            ui::history::show_history_window(&dash_window, &records);
        });
    }

    // Wire up server URL changes
    {
        let state_clone = state.clone();
        auth.server_row
            .connect_changed(move |row: &libadwaita::EntryRow| {
                let url = row.text().to_string();
                let mut s = state_clone.borrow_mut();
                s.config.server_url = url.clone();
                if let Err(e) = s.config.save() {
                    log::warn!("Failed to save config: {e}");
                }
                s.api = ApiClient::new(&url);
            });
    }

    // Wire up login
    {
        let state_clone = state.clone();
        let identifier_row = auth.login_identifier.clone();
        let password_row = auth.login_password.clone();
        let status = auth.login_status.clone();
        auth.login_button.connect_clicked(move |button| {
            let identifier = identifier_row.text().trim().to_string();
            let password = password_row.text().to_string();
            button.set_sensitive(false);
            ui::auth::set_form_status(&status, "Authenticating\u{2026}", "pending");
            app::dispatch_login(&state_clone, identifier, password);
        });
    }

    // Wire up registration
    {
        let state_clone = state.clone();
        let username_row = auth.register_username.clone();
        let email_row = auth.register_email.clone();
        let password_row = auth.register_password.clone();
        let status = auth.register_status.clone();
        auth.register_button.connect_clicked(move |button| {
            let username = username_row.text().trim().to_string();
            let email = email_row.text().trim().to_lowercase();
            let password = password_row.text().to_string();
            button.set_sensitive(false);
            ui::auth::set_form_status(&status, "Registering user\u{2026}", "pending");
            app::dispatch_register(&state_clone, username, email, password);
        });
    }

    // Wire up login/register page switching
    {
        let stack = auth.stack.clone();
        auth.show_register_button.connect_clicked(move |_| {
            stack.set_visible_child_name("register");
        });
    }
    {
        let stack = auth.stack.clone();
        auth.show_login_button.connect_clicked(move |_| {
            stack.set_visible_child_name("login");
        });
    }

    // Wire up the admin window
    {
        let admin_window = admin.window.clone();
        auth.admin_button.connect_clicked(move |_| {
            admin_window.present();
        });
    }
    {
        let state_clone = state.clone();
        let token_row = admin.token_row.clone();
        let json_label = admin.json_label.clone();
        let copy_button = admin.copy_button.clone();
        admin.fetch_button.connect_clicked(move |_| {
            let token = token_row.text().trim().to_string();
            if token.is_empty() {
                return;
            }
            json_label.set_text("// fetching credentials\u{2026}");
            copy_button.set_visible(false);
            app::dispatch_admin_lookup(&state_clone, token);
        });
    }
    {
        let json_label = admin.json_label.clone();
        let toast_overlay = admin.toast_overlay.clone();
        admin.copy_button.connect_clicked(move |_| {
            match clipboard::copy_to_clipboard(&json_label.text()) {
                Ok(()) => {
                    let toast = libadwaita::Toast::new("Copied to clipboard");
                    toast.set_timeout(2);
                    toast_overlay.add_toast(toast);
                }
                Err(e) => log::warn!("Clipboard error: {e}"),
            }
        });
    }

    // Store UI handles in state
    {
        let mut s = state.borrow_mut();
        s.dashboard = Some(dashboard);
        s.auth = Some(auth);
        s.admin = Some(admin);
    }

    // No session yet, so start at the login window
    state.borrow().auth.as_ref().unwrap().window.present();

    // Attach backend event handler
    {
        let state_clone = state.clone();
        gtk4::glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_backend_event(&state_clone, event);
            }
        });
    }
}

/// Open a native file chooser filtered to the backend's allowed extensions.
fn open_file_chooser(
    state: &Rc<RefCell<AppState>>,
    parent: &libadwaita::ApplicationWindow,
) {
    let filter = gtk4::FileFilter::new();
    filter.set_name(Some("Fruit photos (jpg, png)"));
    for suffix in ["jpg", "jpeg", "png"] {
        filter.add_suffix(suffix);
    }

    let filters = gtk4::gio::ListStore::new::<gtk4::FileFilter>();
    filters.append(&filter);

    let dialog = gtk4::FileDialog::builder()
        .title("Select a fruit photo")
        .filters(&filters)
        .default_filter(&filter)
        .build();

    let state_clone = state.clone();
    dialog.open(
        Some(parent),
        gtk4::gio::Cancellable::NONE,
        move |result| match result {
            Ok(file) => {
                if let Some(path) = file.path() {
                    app::set_selection(&state_clone, path);
                }
            }
            Err(e) => log::debug!("File chooser dismissed: {e}"),
        },
    );
}
