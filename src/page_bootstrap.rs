/// Injected into the hosted surface before messenger.com runs. Marks the
/// desktop runtime for anyone who wants to sniff it, nudges the Web
/// Notification permission so Messenger's own notifications work, and
/// swaps the page scrollbars for slimmer desktop-styled ones.
pub(crate) const BOOTSTRAP_SCRIPT: &str = r#"
(function () {
  if (window.__MESSENGER_DESKTOP__) {
    return;
  }
  Object.defineProperty(window, '__MESSENGER_DESKTOP__', {
    value: Object.freeze({ desktop: true }),
    writable: false,
  });

  window.addEventListener('DOMContentLoaded', function () {
    if ('Notification' in window && Notification.permission === 'default') {
      Notification.requestPermission();
    }

    var style = document.createElement('style');
    style.textContent = [
      '::-webkit-scrollbar { width: 8px; height: 8px; }',
      '::-webkit-scrollbar-track { background: transparent; }',
      '::-webkit-scrollbar-thumb { background: rgba(0, 0, 0, 0.2); border-radius: 4px; }',
      '::-webkit-scrollbar-thumb:hover { background: rgba(0, 0, 0, 0.3); }',
    ].join('\n');
    document.head.appendChild(style);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::BOOTSTRAP_SCRIPT;

    #[test]
    fn bootstrap_script_marks_runtime_and_requests_notifications() {
        assert!(BOOTSTRAP_SCRIPT.contains("__MESSENGER_DESKTOP__"));
        assert!(BOOTSTRAP_SCRIPT.contains("Notification.requestPermission"));
    }

    #[test]
    fn bootstrap_script_installs_desktop_scrollbar_styles() {
        assert!(BOOTSTRAP_SCRIPT.contains("::-webkit-scrollbar"));
        assert!(BOOTSTRAP_SCRIPT.contains("::-webkit-scrollbar-thumb"));
        assert!(BOOTSTRAP_SCRIPT.contains("document.head.appendChild(style)"));
    }
}
