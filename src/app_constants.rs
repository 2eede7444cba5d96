pub(crate) const APP_TITLE: &str = "Messenger";

pub(crate) const MESSENGER_URL: &str = "https://www.messenger.com";
pub(crate) const NEW_CONVERSATION_URL: &str = "https://www.messenger.com/new";
pub(crate) const MESSENGER_HELP_URL: &str = "https://www.facebook.com/help/messenger-app";

/// HTTPS prefixes considered part of the hosted application's trusted
/// origin. Anything outside this list is handed to the system browser.
pub(crate) const ALLOWED_NAVIGATION_PREFIXES: &[&str] = &[
    "https://www.messenger.com",
    "https://www.facebook.com",
    "https://m.facebook.com",
];

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const TRAY_ID: &str = "messenger-tray";
pub(crate) const DEFAULT_TRAY_TOOLTIP: &str = "Messenger";

pub(crate) const DESKTOP_HOME_ENV: &str = "MESSENGER_DESKTOP_HOME";
pub(crate) const CLOSE_BEHAVIOR_ENV: &str = "MESSENGER_CLOSE_BEHAVIOR";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_STATE_FILE: &str = "desktop_state.json";
