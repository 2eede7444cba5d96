use tauri::AppHandle;

use crate::{
    append_desktop_log, external_open, main_window, menu_actions, window_actions, window_zoom,
    MESSENGER_HELP_URL, NEW_CONVERSATION_URL,
};

pub(crate) fn handle_app_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match menu_actions::action_from_menu_id(menu_id) {
        Some(menu_actions::AppMenuAction::NewConversation) => {
            main_window::navigate_main_window(app_handle, NEW_CONVERSATION_URL, append_desktop_log);
        }
        Some(menu_actions::AppMenuAction::ReloadWindow) => {
            window_actions::reload_main_window(app_handle, append_desktop_log);
        }
        Some(menu_actions::AppMenuAction::ZoomIn) => {
            window_zoom::step_main_window_zoom(
                app_handle,
                window_zoom::ZoomDirection::In,
                append_desktop_log,
            );
        }
        Some(menu_actions::AppMenuAction::ZoomOut) => {
            window_zoom::step_main_window_zoom(
                app_handle,
                window_zoom::ZoomDirection::Out,
                append_desktop_log,
            );
        }
        Some(menu_actions::AppMenuAction::ZoomReset) => {
            window_zoom::reset_main_window_zoom(app_handle, append_desktop_log);
        }
        Some(menu_actions::AppMenuAction::OpenHelp) => {
            match external_open::parse_openable_url(MESSENGER_HELP_URL) {
                Ok(url) => external_open::open_in_system_browser(&url, append_desktop_log),
                Err(error) => append_desktop_log(&format!("help URL rejected: {error}")),
            }
        }
        None => {}
    }
}
