use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log, logging, main_window,
    menu_handler, menu_setup, platform_shell, runtime_paths, shell_settings, tray_setup,
    window_actions, CloseBehavior, ShellState, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

fn should_hide_on_close(quitting: bool, close_behavior: CloseBehavior) -> bool {
    !quitting && close_behavior == CloseBehavior::HideToTray
}

/// An exit request with no code means the last window was destroyed; under
/// hide-to-tray the process stays resident unless a quit was asked for.
fn should_prevent_exit(
    exit_code: Option<i32>,
    quitting: bool,
    close_behavior: CloseBehavior,
) -> bool {
    exit_code.is_none() && !quitting && close_behavior == CloseBehavior::HideToTray
}

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::default_desktop_home_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    let close_behavior = shell_settings::resolve_close_behavior(
        platform_shell::current().default_close_behavior(),
        runtime_paths::desktop_state_path().as_deref(),
    );
    append_startup_log(&format!(
        "close behavior: {}",
        shell_settings::close_behavior_keyword(close_behavior)
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(
            |app_handle, _argv, _cwd| {
                append_desktop_log("second launch detected, focusing existing window");
                window_actions::show_main_window(app_handle, append_desktop_log);
            },
        ))
        .manage(ShellState::new(close_behavior))
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::CloseRequested { api, .. } = event {
                let app_handle = window.app_handle();
                let state = app_handle.state::<ShellState>();
                if should_hide_on_close(state.is_quitting(), state.close_behavior()) {
                    api.prevent_close();
                    window_actions::hide_main_window(app_handle, append_desktop_log);
                }
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                let app_handle = webview.app_handle();
                let state = app_handle.state::<ShellState>();
                if state.mark_revealed() {
                    window_actions::show_main_window(app_handle, append_desktop_log);
                }
            }
        })
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_app_menu_event(app_handle, event.id().as_ref())
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            main_window::create_main_window(&app_handle)?;

            if let Err(error) = menu_setup::setup_app_menu(&app_handle) {
                append_startup_log(&format!("failed to install application menu: {error}"));
            }

            if platform_shell::current().supports_tray() {
                if let Err(error) = tray_setup::setup_tray(&app_handle) {
                    append_startup_log(&format!("failed to initialize tray: {error}"));
                }
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                let state = app_handle.state::<ShellState>();
                if should_prevent_exit(code, state.is_quitting(), state.close_behavior()) {
                    append_desktop_log("all windows closed; staying resident for the tray");
                    api.prevent_exit();
                }
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop process exiting");
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                // Dock icon activation re-creates the window if it is gone.
                window_actions::show_main_window(app_handle, append_desktop_log);
            }
            _ => {}
        });
}

#[cfg(test)]
mod tests {
    use super::{should_hide_on_close, should_prevent_exit};
    use crate::CloseBehavior;

    #[test]
    fn close_requests_hide_only_under_hide_to_tray() {
        assert!(should_hide_on_close(false, CloseBehavior::HideToTray));
        assert!(!should_hide_on_close(false, CloseBehavior::Quit));
    }

    #[test]
    fn close_requests_pass_through_once_quitting() {
        assert!(!should_hide_on_close(true, CloseBehavior::HideToTray));
        assert!(!should_hide_on_close(true, CloseBehavior::Quit));
    }

    #[test]
    fn windows_all_closed_exit_is_prevented_only_under_hide_to_tray() {
        assert!(should_prevent_exit(None, false, CloseBehavior::HideToTray));
        assert!(!should_prevent_exit(None, false, CloseBehavior::Quit));
    }

    #[test]
    fn explicit_exits_are_never_prevented() {
        assert!(!should_prevent_exit(Some(0), false, CloseBehavior::HideToTray));
        assert!(!should_prevent_exit(Some(1), false, CloseBehavior::Quit));
        assert!(!should_prevent_exit(None, true, CloseBehavior::HideToTray));
    }
}
