use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, runtime_paths, shell_settings, tray_actions,
    tray_labels, window_actions, ShellState,
};

pub(crate) fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match tray_actions::action_from_menu_id(menu_id) {
        Some(tray_actions::TrayMenuAction::ToggleWindow) => {
            window_actions::toggle_main_window(app_handle, append_desktop_log)
        }
        Some(tray_actions::TrayMenuAction::ToggleCloseBehavior) => {
            let state = app_handle.state::<ShellState>();
            let behavior = state.toggle_close_behavior();
            let state_path = runtime_paths::desktop_state_path();
            match shell_settings::write_cached_close_behavior(behavior, state_path.as_deref()) {
                Ok(()) => {
                    append_desktop_log(&format!(
                        "tray toggled close behavior: {}",
                        shell_settings::close_behavior_keyword(behavior)
                    ));
                }
                Err(error) => {
                    append_desktop_log(&format!(
                        "failed to persist close behavior setting: {error}"
                    ));
                }
            }
            tray_labels::update_tray_menu_labels(app_handle, append_desktop_log);
        }
        Some(tray_actions::TrayMenuAction::Quit) => {
            let state = app_handle.state::<ShellState>();
            state.mark_quitting();
            append_shutdown_log("tray quit requested, exiting desktop process");
            app_handle.exit(0);
        }
        None => {}
    }
}
