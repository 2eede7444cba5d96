#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod external_open;
mod logging;
mod main_window;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod navigation_policy;
mod page_bootstrap;
mod platform_shell;
mod runtime_paths;
mod shell_settings;
mod status_watcher;
mod tray_actions;
mod tray_labels;
mod tray_menu_handler;
mod tray_setup;
mod unread_badge;
mod window_actions;
mod window_zoom;

pub(crate) use app_constants::*;
pub(crate) use app_types::{CloseBehavior, ShellState, TrayMenuState};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
