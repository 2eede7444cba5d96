use tauri::{AppHandle, Manager};

use crate::{ShellState, MAIN_WINDOW_LABEL};

pub(crate) const DEFAULT_ZOOM_LEVEL: f64 = 1.0;
pub(crate) const MIN_ZOOM_LEVEL: f64 = 0.3;
pub(crate) const MAX_ZOOM_LEVEL: f64 = 3.0;
const ZOOM_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoomDirection {
    In,
    Out,
}

pub(crate) fn next_zoom_level(current: f64, direction: ZoomDirection) -> f64 {
    let stepped = match direction {
        ZoomDirection::In => current + ZOOM_STEP,
        ZoomDirection::Out => current - ZOOM_STEP,
    };
    stepped.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
}

pub(crate) fn step_main_window_zoom<F>(app_handle: &AppHandle, direction: ZoomDirection, log: F)
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    let level = next_zoom_level(state.zoom_level(), direction);
    apply_main_window_zoom(app_handle, level, log);
}

pub(crate) fn reset_main_window_zoom<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    apply_main_window_zoom(app_handle, DEFAULT_ZOOM_LEVEL, log);
}

fn apply_main_window_zoom<F>(app_handle: &AppHandle, level: f64, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("zoom change skipped: main window not found");
        return;
    };

    match window.set_zoom(level) {
        Ok(()) => {
            let state = app_handle.state::<ShellState>();
            state.set_zoom_level(level);
        }
        Err(error) => log(&format!("failed to set webview zoom to {level}: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        next_zoom_level, ZoomDirection, DEFAULT_ZOOM_LEVEL, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL,
    };

    #[test]
    fn next_zoom_level_steps_in_both_directions() {
        let zoomed_in = next_zoom_level(DEFAULT_ZOOM_LEVEL, ZoomDirection::In);
        assert!(zoomed_in > DEFAULT_ZOOM_LEVEL);

        let zoomed_out = next_zoom_level(DEFAULT_ZOOM_LEVEL, ZoomDirection::Out);
        assert!(zoomed_out < DEFAULT_ZOOM_LEVEL);
    }

    #[test]
    fn next_zoom_level_clamps_at_both_bounds() {
        assert_eq!(
            next_zoom_level(MAX_ZOOM_LEVEL, ZoomDirection::In),
            MAX_ZOOM_LEVEL
        );
        assert_eq!(
            next_zoom_level(MIN_ZOOM_LEVEL, ZoomDirection::Out),
            MIN_ZOOM_LEVEL
        );
    }
}
