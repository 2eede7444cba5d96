use tauri::{menu::MenuItem, AppHandle, Manager};

use crate::{tray_actions, CloseBehavior, ShellState, TrayMenuState, MAIN_WINDOW_LABEL};

pub(crate) fn toggle_label_for_visibility(visible: bool) -> &'static str {
    if visible {
        "Hide Messenger"
    } else {
        "Show Messenger"
    }
}

pub(crate) fn close_behavior_label(behavior: CloseBehavior) -> &'static str {
    match behavior {
        CloseBehavior::HideToTray => "Close to Tray: On",
        CloseBehavior::Quit => "Close to Tray: Off",
    }
}

fn set_menu_text_safe<F>(item: &MenuItem<tauri::Wry>, text: &str, item_name: &str, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = item.set_text(text) {
        log(&format!(
            "failed to update tray menu text for {}: {}",
            item_name, error
        ));
    }
}

pub(crate) fn update_tray_menu_labels<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    update_tray_menu_labels_with_visibility(app_handle, None, log);
}

pub(crate) fn update_tray_menu_labels_with_visibility<F>(
    app_handle: &AppHandle,
    visible_override: Option<bool>,
    log: F,
) where
    F: Fn(&str),
{
    let Some(tray_state) = app_handle.try_state::<TrayMenuState>() else {
        return;
    };

    let effective_visible = if let Some(visible) = visible_override {
        visible
    } else {
        app_handle
            .get_webview_window(MAIN_WINDOW_LABEL)
            .and_then(|window| window.is_visible().ok())
            .unwrap_or(true)
    };
    let close_behavior = app_handle
        .try_state::<ShellState>()
        .map(|state| state.close_behavior())
        .unwrap_or(CloseBehavior::Quit);

    set_menu_text_safe(
        &tray_state.toggle_item,
        toggle_label_for_visibility(effective_visible),
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
        &log,
    );
    set_menu_text_safe(
        &tray_state.close_behavior_item,
        close_behavior_label(close_behavior),
        tray_actions::TRAY_MENU_TOGGLE_CLOSE_BEHAVIOR,
        &log,
    );
    set_menu_text_safe(
        &tray_state.quit_item,
        "Quit",
        tray_actions::TRAY_MENU_QUIT,
        &log,
    );
}

#[cfg(test)]
mod tests {
    use super::{close_behavior_label, toggle_label_for_visibility};
    use crate::CloseBehavior;

    #[test]
    fn toggle_label_tracks_window_visibility() {
        assert_eq!(toggle_label_for_visibility(true), "Hide Messenger");
        assert_eq!(toggle_label_for_visibility(false), "Show Messenger");
    }

    #[test]
    fn close_behavior_label_names_both_modes() {
        assert_eq!(
            close_behavior_label(CloseBehavior::HideToTray),
            "Close to Tray: On"
        );
        assert_eq!(close_behavior_label(CloseBehavior::Quit), "Close to Tray: Off");
    }
}
