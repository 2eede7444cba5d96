use std::{env, path::PathBuf};

use crate::{DESKTOP_HOME_ENV, DESKTOP_STATE_FILE};

/// Per-user directory holding the shell's state file and logs.
/// `MESSENGER_DESKTOP_HOME` overrides the default `~/.messenger-desktop`.
pub(crate) fn default_desktop_home_dir() -> Option<PathBuf> {
    if let Ok(override_dir) = env::var(DESKTOP_HOME_ENV) {
        let path = PathBuf::from(override_dir.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(".messenger-desktop"))
}

pub(crate) fn desktop_state_path() -> Option<PathBuf> {
    default_desktop_home_dir().map(|home| home.join(DESKTOP_STATE_FILE))
}
