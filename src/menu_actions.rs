pub(crate) const MENU_NEW_CONVERSATION: &str = "menu_new_conversation";
pub(crate) const MENU_RELOAD_WINDOW: &str = "menu_reload_window";
pub(crate) const MENU_ZOOM_IN: &str = "menu_zoom_in";
pub(crate) const MENU_ZOOM_OUT: &str = "menu_zoom_out";
pub(crate) const MENU_ZOOM_RESET: &str = "menu_zoom_reset";
pub(crate) const MENU_OPEN_HELP: &str = "menu_open_help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppMenuAction {
    NewConversation,
    ReloadWindow,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    OpenHelp,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<AppMenuAction> {
    match menu_id {
        MENU_NEW_CONVERSATION => Some(AppMenuAction::NewConversation),
        MENU_RELOAD_WINDOW => Some(AppMenuAction::ReloadWindow),
        MENU_ZOOM_IN => Some(AppMenuAction::ZoomIn),
        MENU_ZOOM_OUT => Some(AppMenuAction::ZoomOut),
        MENU_ZOOM_RESET => Some(AppMenuAction::ZoomReset),
        MENU_OPEN_HELP => Some(AppMenuAction::OpenHelp),
        _ => None,
    }
}
