use tauri::AppHandle;

use crate::{platform_shell, unread_badge, TRAY_ID};

/// Reaction to a document-title-changed notification from the hosted
/// surface: derive the unread count and relay it to the OS indicators.
/// The count is never stored; every title change recomputes it.
pub(crate) fn apply_title_update<F>(app_handle: &AppHandle, title: &str, log: F)
where
    F: Fn(&str),
{
    let unread = unread_badge::parse_unread_count(title);

    if let Err(error) = platform_shell::current().set_badge(app_handle, unread) {
        log(&format!("failed to update unread badge: {error}"));
    }

    // Absence of a tray (unsupported platform, failed setup) is a no-op.
    let Some(tray) = app_handle.tray_by_id(TRAY_ID) else {
        return;
    };
    let tooltip = unread_badge::tray_tooltip(unread);
    if let Err(error) = tray.set_tooltip(Some(&tooltip)) {
        log(&format!("failed to update tray tooltip: {error}"));
    }
}
