use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{append_desktop_log, CloseBehavior, CLOSE_BEHAVIOR_ENV};

#[derive(Debug, Default, Serialize, Deserialize)]
struct DesktopStateFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close_behavior: Option<String>,
}

pub(crate) fn normalize_close_behavior(raw: &str) -> Option<CloseBehavior> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "hide" => Some(CloseBehavior::HideToTray),
        "quit" => Some(CloseBehavior::Quit),
        _ => None,
    }
}

pub(crate) fn close_behavior_keyword(behavior: CloseBehavior) -> &'static str {
    match behavior {
        CloseBehavior::HideToTray => "hide",
        CloseBehavior::Quit => "quit",
    }
}

/// Resolution order: cached state file, then env override, then the
/// platform default handed in by the caller.
pub(crate) fn resolve_close_behavior(
    default_behavior: CloseBehavior,
    state_path: Option<&Path>,
) -> CloseBehavior {
    if let Some(cached) = read_cached_close_behavior(state_path) {
        return cached;
    }

    if let Ok(value) = env::var(CLOSE_BEHAVIOR_ENV) {
        if let Some(behavior) = normalize_close_behavior(&value) {
            return behavior;
        }
    }

    default_behavior
}

fn read_state_file(state_path: &Path) -> DesktopStateFile {
    let raw = match fs::read_to_string(state_path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return DesktopStateFile::default();
        }
        Err(error) => {
            append_desktop_log(&format!(
                "failed to read desktop state {}: {}",
                state_path.display(),
                error
            ));
            return DesktopStateFile::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(error) => {
            append_desktop_log(&format!(
                "failed to parse desktop state {}: {}. resetting state file",
                state_path.display(),
                error
            ));
            DesktopStateFile::default()
        }
    }
}

fn read_cached_close_behavior(state_path: Option<&Path>) -> Option<CloseBehavior> {
    let state_path = state_path?;
    let state = read_state_file(state_path);
    normalize_close_behavior(state.close_behavior.as_deref()?)
}

pub(crate) fn write_cached_close_behavior(
    behavior: CloseBehavior,
    state_path: Option<&Path>,
) -> Result<(), String> {
    let Some(state_path) = state_path else {
        append_desktop_log("desktop state path is unavailable; skipping close behavior persistence");
        return Ok(());
    };

    if let Some(parent_dir) = state_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create desktop state directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut state = read_state_file(state_path);
    state.close_behavior = Some(close_behavior_keyword(behavior).to_string());

    let serialized = serde_json::to_string_pretty(&state)
        .map_err(|error| format!("Failed to serialize desktop state: {error}"))?;
    fs::write(state_path, serialized).map_err(|error| {
        format!(
            "Failed to write desktop state {}: {}",
            state_path.display(),
            error
        )
    })
}
