use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE};

/// Resolves where the desktop log lives. Falls back to the system temp
/// directory when no desktop home directory can be determined.
pub(crate) fn resolve_desktop_log_path(home_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match home_dir {
        Some(home) => home.join("logs").join(file_name),
        None => env::temp_dir().join("messenger-desktop").join(file_name),
    }
}

fn append_log_line_to(path: &Path, prefix: &str, message: &str) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    writeln!(file, "[{timestamp}] [{prefix}] {message}")
        .map_err(|error| format!("Failed to append log line to {}: {}", path.display(), error))
}

fn append_tagged_log(prefix: &str, message: &str) {
    let path = resolve_desktop_log_path(
        runtime_paths::default_desktop_home_dir(),
        DESKTOP_LOG_FILE,
    );
    // A broken log destination must never take the shell down.
    let _ = append_log_line_to(&path, prefix, message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_tagged_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_tagged_log("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_tagged_log("shutdown", message);
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::{append_log_line_to, resolve_desktop_log_path};

    #[test]
    fn resolve_desktop_log_path_prefers_home_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/shell-home")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/shell-home/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert!(path.ends_with("messenger-desktop/desktop.log"));
    }

    #[test]
    fn append_log_line_creates_parents_and_tags_lines() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let log_path = temp_dir.path().join("logs").join("desktop.log");

        append_log_line_to(&log_path, "startup", "first line").expect("append");
        append_log_line_to(&log_path, "desktop", "second line").expect("append");

        let contents = fs::read_to_string(&log_path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[startup] first line"));
        assert!(lines[1].contains("[desktop] second line"));
    }
}
