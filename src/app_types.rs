use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use tauri::menu::MenuItem;

use crate::window_zoom::DEFAULT_ZOOM_LEVEL;

/// How a close request on the main window is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseBehavior {
    /// Keep the process alive and hide the window (tray keeps it reachable).
    HideToTray,
    /// Let the window close and the process exit.
    Quit,
}

#[derive(Clone)]
pub(crate) struct TrayMenuState {
    pub(crate) toggle_item: MenuItem<tauri::Wry>,
    pub(crate) close_behavior_item: MenuItem<tauri::Wry>,
    pub(crate) quit_item: MenuItem<tauri::Wry>,
}

#[derive(Debug)]
pub(crate) struct ShellState {
    close_behavior: Mutex<CloseBehavior>,
    zoom_level: Mutex<f64>,
    is_quitting: AtomicBool,
    did_reveal: AtomicBool,
}

impl ShellState {
    pub(crate) fn new(close_behavior: CloseBehavior) -> Self {
        Self {
            close_behavior: Mutex::new(close_behavior),
            zoom_level: Mutex::new(DEFAULT_ZOOM_LEVEL),
            is_quitting: AtomicBool::new(false),
            did_reveal: AtomicBool::new(false),
        }
    }

    /// True exactly once, on the first call. The hidden window is revealed
    /// on the first finished page load and never auto-shown again.
    pub(crate) fn mark_revealed(&self) -> bool {
        self.did_reveal
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.is_quitting.load(Ordering::Relaxed)
    }

    pub(crate) fn mark_quitting(&self) {
        self.is_quitting.store(true, Ordering::Relaxed);
    }

    pub(crate) fn close_behavior(&self) -> CloseBehavior {
        self.close_behavior
            .lock()
            .map(|guard| *guard)
            .unwrap_or(CloseBehavior::Quit)
    }

    pub(crate) fn toggle_close_behavior(&self) -> CloseBehavior {
        match self.close_behavior.lock() {
            Ok(mut guard) => {
                *guard = match *guard {
                    CloseBehavior::HideToTray => CloseBehavior::Quit,
                    CloseBehavior::Quit => CloseBehavior::HideToTray,
                };
                *guard
            }
            Err(_) => CloseBehavior::Quit,
        }
    }

    pub(crate) fn zoom_level(&self) -> f64 {
        self.zoom_level
            .lock()
            .map(|guard| *guard)
            .unwrap_or(DEFAULT_ZOOM_LEVEL)
    }

    pub(crate) fn set_zoom_level(&self, level: f64) {
        if let Ok(mut guard) = self.zoom_level.lock() {
            *guard = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CloseBehavior, ShellState};

    #[test]
    fn mark_quitting_is_sticky() {
        let state = ShellState::new(CloseBehavior::Quit);
        assert!(!state.is_quitting());
        state.mark_quitting();
        assert!(state.is_quitting());
        state.mark_quitting();
        assert!(state.is_quitting());
    }

    #[test]
    fn mark_revealed_fires_exactly_once() {
        let state = ShellState::new(CloseBehavior::Quit);
        assert!(state.mark_revealed());
        assert!(!state.mark_revealed());
        assert!(!state.mark_revealed());
    }

    #[test]
    fn toggle_close_behavior_flips_between_both_modes() {
        let state = ShellState::new(CloseBehavior::HideToTray);
        assert_eq!(state.toggle_close_behavior(), CloseBehavior::Quit);
        assert_eq!(state.close_behavior(), CloseBehavior::Quit);
        assert_eq!(state.toggle_close_behavior(), CloseBehavior::HideToTray);
        assert_eq!(state.close_behavior(), CloseBehavior::HideToTray);
    }
}
