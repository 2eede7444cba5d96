use tauri::{
    webview::NewWindowResponse, AppHandle, Manager, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};
use url::Url;

use crate::{
    append_desktop_log, external_open,
    navigation_policy::{self, NavigationDecision},
    page_bootstrap, status_watcher, ALLOWED_NAVIGATION_PREFIXES, APP_TITLE, MAIN_WINDOW_LABEL,
    MESSENGER_URL,
};

/// Creates the single hosted surface, or returns the existing one. The
/// window starts hidden; `app_runtime` reveals it on the first finished
/// page load.
pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    if let Some(existing) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        return Ok(existing);
    }

    let start_url = Url::parse(MESSENGER_URL)
        .map_err(|error| format!("Invalid start URL {MESSENGER_URL}: {error}"))?;

    let window = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(start_url),
    )
    .title(APP_TITLE)
    .inner_size(1200.0, 800.0)
    .min_inner_size(400.0, 300.0)
    .visible(false)
    .initialization_script(page_bootstrap::BOOTSTRAP_SCRIPT)
    .on_navigation(|url| {
        match navigation_policy::decide_parsed_navigation(url, ALLOWED_NAVIGATION_PREFIXES) {
            NavigationDecision::AllowInPlace => true,
            NavigationDecision::OpenExternal => {
                append_desktop_log(&format!(
                    "redirecting in-place navigation to system browser: {url}"
                ));
                external_open::open_in_system_browser(url, append_desktop_log);
                false
            }
            NavigationDecision::Deny => {
                append_desktop_log(&format!("denied navigation to non-web URL: {url}"));
                false
            }
        }
    })
    .on_new_window(|url, _features| {
        match navigation_policy::decide_parsed_navigation(&url, ALLOWED_NAVIGATION_PREFIXES) {
            NavigationDecision::AllowInPlace => NewWindowResponse::Allow,
            NavigationDecision::OpenExternal => {
                append_desktop_log(&format!(
                    "redirecting new-window request to system browser: {url}"
                ));
                external_open::open_in_system_browser(&url, append_desktop_log);
                NewWindowResponse::Deny
            }
            NavigationDecision::Deny => {
                append_desktop_log(&format!("denied new-window request for non-web URL: {url}"));
                NewWindowResponse::Deny
            }
        }
    })
    .on_document_title_changed(|window, title| {
        status_watcher::apply_title_update(window.app_handle(), &title, append_desktop_log);
    })
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))?;

    Ok(window)
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    // Recreated on demand when the app is re-activated after the window
    // was destroyed.
    let window = match create_main_window(app_handle) {
        Ok(window) => window,
        Err(error) => {
            log(&format!("cannot show main window: {error}"));
            return;
        }
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

pub(crate) fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("hide skipped: main window not found");
        return;
    };

    if let Err(error) = window.hide() {
        log(&format!("failed to hide main window: {error}"));
    }
}

pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("reload skipped: main window not found");
        return;
    };

    if let Err(error) = window.eval("window.location.reload();") {
        log(&format!("failed to reload main window: {error}"));
    }
}

/// In-place navigation of the hosted surface. The raw target runs through
/// the navigation guard first, so shell-initiated navigations obey the
/// same allow-list as page-initiated ones; it is then JSON-quoted so
/// arbitrary URL text cannot escape the script literal.
pub(crate) fn navigate_main_window<F>(app_handle: &AppHandle, url: &str, log: F)
where
    F: Fn(&str),
{
    match navigation_policy::decide_navigation(url, ALLOWED_NAVIGATION_PREFIXES) {
        NavigationDecision::AllowInPlace => {}
        NavigationDecision::OpenExternal | NavigationDecision::Deny => {
            log(&format!("navigation skipped: {url} is outside the trusted origin"));
            return;
        }
    }

    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("navigation skipped: main window not found");
        return;
    };

    let quoted = match serde_json::to_string(url) {
        Ok(quoted) => quoted,
        Err(error) => {
            log(&format!("failed to quote navigation target {url}: {error}"));
            return;
        }
    };

    if let Err(error) = window.eval(&format!("window.location.replace({quoted});")) {
        log(&format!("failed to navigate main window to {url}: {error}"));
    }
}
