use url::Url;

/// Outcome of the navigation guard for a single attempted navigation or
/// new-window request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationDecision {
    /// Trusted origin; navigation proceeds inside the hosted surface.
    AllowInPlace,
    /// Web URL outside the trusted origin; cancel in place and hand the
    /// URL to the system browser.
    OpenExternal,
    /// Non-web scheme or unparseable URL; cancel with no external open.
    Deny,
}

pub(crate) fn decide_navigation(raw_url: &str, allowed_prefixes: &[&str]) -> NavigationDecision {
    match Url::parse(raw_url.trim()) {
        Ok(parsed) => decide_parsed_navigation(&parsed, allowed_prefixes),
        // Fail closed: a URL the guard cannot read is a URL it cannot vouch for.
        Err(_) => NavigationDecision::Deny,
    }
}

pub(crate) fn decide_parsed_navigation(
    url: &Url,
    allowed_prefixes: &[&str],
) -> NavigationDecision {
    match url.scheme() {
        "http" | "https" => {}
        _ => return NavigationDecision::Deny,
    }

    let url_text = url.as_str();
    if allowed_prefixes
        .iter()
        .any(|prefix| url_text.starts_with(prefix))
    {
        NavigationDecision::AllowInPlace
    } else {
        NavigationDecision::OpenExternal
    }
}

#[cfg(test)]
mod tests {
    use super::{decide_navigation, NavigationDecision};
    use crate::ALLOWED_NAVIGATION_PREFIXES;

    #[test]
    fn decide_navigation_allows_trusted_origins_in_place() {
        for url in [
            "https://www.messenger.com",
            "https://www.messenger.com/t/12345",
            "https://www.facebook.com/login",
            "https://m.facebook.com/home.php",
        ] {
            assert_eq!(
                decide_navigation(url, ALLOWED_NAVIGATION_PREFIXES),
                NavigationDecision::AllowInPlace,
                "expected in-place navigation for {url}"
            );
        }
    }

    #[test]
    fn decide_navigation_sends_other_web_urls_to_system_browser() {
        for url in [
            "https://example.com/article",
            "http://www.messenger.com.evil.example/phish",
            "https://accounts.google.com/o/oauth2/auth",
        ] {
            assert_eq!(
                decide_navigation(url, ALLOWED_NAVIGATION_PREFIXES),
                NavigationDecision::OpenExternal,
                "expected external open for {url}"
            );
        }
    }

    #[test]
    fn decide_navigation_denies_non_web_schemes() {
        for url in [
            "file:///etc/passwd",
            "javascript:alert(1)",
            "ftp://ftp.example.com/pub",
            "mailto:someone@example.com",
        ] {
            assert_eq!(
                decide_navigation(url, ALLOWED_NAVIGATION_PREFIXES),
                NavigationDecision::Deny,
                "expected deny for {url}"
            );
        }
    }

    #[test]
    fn decide_navigation_denies_unparseable_urls() {
        for url in ["", "   ", "not a url", "https://", "::::"] {
            assert_eq!(
                decide_navigation(url, ALLOWED_NAVIGATION_PREFIXES),
                NavigationDecision::Deny,
                "expected deny for {url:?}"
            );
        }
    }

    #[test]
    fn decide_navigation_keeps_shell_navigation_targets_in_place() {
        // Menu-driven navigations run through the same guard as
        // page-initiated ones; their targets must stay in-window.
        assert_eq!(
            decide_navigation(crate::NEW_CONVERSATION_URL, ALLOWED_NAVIGATION_PREFIXES),
            NavigationDecision::AllowInPlace
        );
        assert_eq!(
            decide_navigation(crate::MESSENGER_URL, ALLOWED_NAVIGATION_PREFIXES),
            NavigationDecision::AllowInPlace
        );
    }

    #[test]
    fn decide_navigation_matches_prefixes_only_at_string_start() {
        assert_eq!(
            decide_navigation(
                "https://example.com/?next=https://www.messenger.com",
                ALLOWED_NAVIGATION_PREFIXES
            ),
            NavigationDecision::OpenExternal
        );
    }
}
