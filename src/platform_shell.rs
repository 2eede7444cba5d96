use tauri::{AppHandle, Manager};

use crate::{CloseBehavior, MAIN_WINDOW_LABEL};

/// Capability set of the OS shell the process runs under, selected once at
/// startup instead of branching on the platform at every call site.
pub(crate) trait PlatformShell: Send + Sync {
    /// Updates the dock/taskbar unread indicator; `None` clears it.
    fn set_badge(&self, app_handle: &AppHandle, unread: Option<u64>) -> Result<(), String>;

    /// Whether a tray icon should be created at startup.
    fn supports_tray(&self) -> bool;

    /// Product default for what a window close request means here.
    fn default_close_behavior(&self) -> CloseBehavior;
}

pub(crate) fn current() -> &'static dyn PlatformShell {
    &imp::Shell
}

#[cfg(target_os = "macos")]
mod imp {
    use tauri::AppHandle;

    use super::main_badge_window;
    use crate::{unread_badge, CloseBehavior};

    pub(super) struct Shell;

    impl super::PlatformShell for Shell {
        fn set_badge(&self, app_handle: &AppHandle, unread: Option<u64>) -> Result<(), String> {
            let window = main_badge_window(app_handle)?;
            let label = unread.map(|count| unread_badge::badge_label(Some(count)));
            window
                .set_badge_label(label)
                .map_err(|error| format!("Failed to set dock badge label: {error}"))
        }

        fn supports_tray(&self) -> bool {
            // The dock badge covers the unread indicator; no status item.
            false
        }

        fn default_close_behavior(&self) -> CloseBehavior {
            CloseBehavior::HideToTray
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    use tauri::AppHandle;

    use super::main_badge_window;
    use crate::CloseBehavior;

    pub(super) struct Shell;

    impl super::PlatformShell for Shell {
        fn set_badge(&self, app_handle: &AppHandle, unread: Option<u64>) -> Result<(), String> {
            let window = main_badge_window(app_handle)?;
            window
                .set_badge_count(super::taskbar_badge_count(unread))
                .map_err(|error| format!("Failed to set taskbar badge count: {error}"))
        }

        fn supports_tray(&self) -> bool {
            true
        }

        fn default_close_behavior(&self) -> CloseBehavior {
            CloseBehavior::Quit
        }
    }
}

/// Counts wider than the badge API saturate rather than wrap negative.
#[cfg(not(target_os = "macos"))]
fn taskbar_badge_count(unread: Option<u64>) -> Option<i64> {
    unread.map(|count| i64::try_from(count).unwrap_or(i64::MAX))
}

fn main_badge_window(app_handle: &AppHandle) -> Result<tauri::WebviewWindow, String> {
    app_handle
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "main window not found while updating badge".to_string())
}
