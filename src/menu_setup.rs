use tauri::{
    menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Wry,
};

use crate::menu_actions;

pub(crate) fn setup_app_menu(app_handle: &AppHandle) -> Result<(), String> {
    let menu = build_app_menu(app_handle)
        .map_err(|error| format!("Failed to build application menu: {error}"))?;
    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    Ok(())
}

fn build_app_menu(app_handle: &AppHandle) -> tauri::Result<Menu<Wry>> {
    let new_conversation_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_NEW_CONVERSATION,
        "New Conversation",
        true,
        Some("CmdOrCtrl+N"),
    )?;
    // macOS keeps the window around on close, so File offers Close Window;
    // elsewhere closing is quitting.
    let file_close_item = if cfg!(target_os = "macos") {
        PredefinedMenuItem::close_window(app_handle, None)?
    } else {
        PredefinedMenuItem::quit(app_handle, None)?
    };
    let file_menu = Submenu::with_items(
        app_handle,
        "File",
        true,
        &[
            &new_conversation_item,
            &PredefinedMenuItem::separator(app_handle)?,
            &file_close_item,
        ],
    )?;

    let edit_menu = Submenu::with_items(
        app_handle,
        "Edit",
        true,
        &[
            &PredefinedMenuItem::undo(app_handle, None)?,
            &PredefinedMenuItem::redo(app_handle, None)?,
            &PredefinedMenuItem::separator(app_handle)?,
            &PredefinedMenuItem::cut(app_handle, None)?,
            &PredefinedMenuItem::copy(app_handle, None)?,
            &PredefinedMenuItem::paste(app_handle, None)?,
            &PredefinedMenuItem::select_all(app_handle, None)?,
        ],
    )?;

    let reload_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_RELOAD_WINDOW,
        "Reload",
        true,
        Some("CmdOrCtrl+R"),
    )?;
    let zoom_reset_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_ZOOM_RESET,
        "Actual Size",
        true,
        Some("CmdOrCtrl+0"),
    )?;
    let zoom_in_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_ZOOM_IN,
        "Zoom In",
        true,
        Some("CmdOrCtrl+="),
    )?;
    let zoom_out_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_ZOOM_OUT,
        "Zoom Out",
        true,
        Some("CmdOrCtrl+-"),
    )?;
    let view_menu = Submenu::with_items(
        app_handle,
        "View",
        true,
        &[
            &reload_item,
            &PredefinedMenuItem::separator(app_handle)?,
            &zoom_reset_item,
            &zoom_in_item,
            &zoom_out_item,
            &PredefinedMenuItem::separator(app_handle)?,
            &PredefinedMenuItem::fullscreen(app_handle, None)?,
        ],
    )?;

    let window_minimize_item = PredefinedMenuItem::minimize(app_handle, None)?;
    let window_maximize_item = PredefinedMenuItem::maximize(app_handle, None)?;
    let window_menu = if cfg!(target_os = "macos") {
        Submenu::with_items(
            app_handle,
            "Window",
            true,
            &[&window_minimize_item, &window_maximize_item],
        )?
    } else {
        Submenu::with_items(
            app_handle,
            "Window",
            true,
            &[
                &window_minimize_item,
                &window_maximize_item,
                &PredefinedMenuItem::close_window(app_handle, None)?,
            ],
        )?
    };

    let help_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_OPEN_HELP,
        "Messenger Help",
        true,
        None::<&str>,
    )?;
    let help_menu = Submenu::with_items(app_handle, "Help", true, &[&help_item])?;

    let mut top_level: Vec<&dyn IsMenuItem<Wry>> = Vec::new();

    #[cfg(target_os = "macos")]
    let app_menu = Submenu::with_items(
        app_handle,
        "Messenger",
        true,
        &[
            &PredefinedMenuItem::about(app_handle, None, None)?,
            &PredefinedMenuItem::separator(app_handle)?,
            &PredefinedMenuItem::services(app_handle, None)?,
            &PredefinedMenuItem::separator(app_handle)?,
            &PredefinedMenuItem::hide(app_handle, None)?,
            &PredefinedMenuItem::hide_others(app_handle, None)?,
            &PredefinedMenuItem::show_all(app_handle, None)?,
            &PredefinedMenuItem::separator(app_handle)?,
            &PredefinedMenuItem::quit(app_handle, None)?,
        ],
    )?;
    #[cfg(target_os = "macos")]
    top_level.push(&app_menu);

    top_level.push(&file_menu);
    top_level.push(&edit_menu);
    top_level.push(&view_menu);
    top_level.push(&window_menu);
    top_level.push(&help_menu);

    Menu::with_items(app_handle, &top_level)
}
