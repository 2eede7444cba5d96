use std::process::{Command, Stdio};

use url::Url;

/// Validates a URL that is about to leave the shell for the system
/// browser. Only web URLs ever reach the OS default handler.
pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

pub(crate) fn open_in_system_browser<F>(url: &Url, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = spawn_system_browser(url.as_str()) {
        log(&format!("failed to open {url} externally: {error}"));
    }
}

fn spawn_system_browser(url: &str) -> Result<(), String> {
    let (launcher, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else if cfg!(target_os = "windows") {
        ("rundll32", vec!["url.dll,FileProtocolHandler", url])
    } else {
        ("xdg-open", vec![url])
    };

    Command::new(launcher)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{launcher}': {error}"))
}

#[cfg(test)]
mod tests {
    use super::parse_openable_url;

    #[test]
    fn parse_openable_url_accepts_web_urls() {
        assert!(parse_openable_url("https://example.com/page").is_ok());
        assert!(parse_openable_url("  http://example.com  ").is_ok());
    }

    #[test]
    fn parse_openable_url_rejects_non_web_schemes() {
        assert!(parse_openable_url("file:///etc/passwd").is_err());
        assert!(parse_openable_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn parse_openable_url_rejects_empty_and_malformed_input() {
        assert!(parse_openable_url("").is_err());
        assert!(parse_openable_url("   ").is_err());
        assert!(parse_openable_url("not a url").is_err());
    }
}
