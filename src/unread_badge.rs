use crate::DEFAULT_TRAY_TOOLTIP;

/// Extracts the unread count Messenger encodes in the page title, e.g.
/// `"(3) Messenger"`. The pattern is a parenthesized base-10 integer at the
/// very start of the title; anything else means "no unread count".
pub(crate) fn parse_unread_count(title: &str) -> Option<u64> {
    let rest = title.strip_prefix('(')?;
    let digits_end = rest.find(')')?;
    let digits = &rest[..digits_end];
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Text for the dock/taskbar badge. Zero is a real, displayed count; only
/// the absence of a count clears the badge.
pub(crate) fn badge_label(unread: Option<u64>) -> String {
    match unread {
        Some(count) => count.to_string(),
        None => String::new(),
    }
}

pub(crate) fn tray_tooltip(unread: Option<u64>) -> String {
    match unread {
        Some(count) => format!("{DEFAULT_TRAY_TOOLTIP} - {count} unread"),
        None => DEFAULT_TRAY_TOOLTIP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{badge_label, parse_unread_count, tray_tooltip};

    #[test]
    fn parse_unread_count_reads_leading_parenthesized_integer() {
        assert_eq!(parse_unread_count("(12) Messenger"), Some(12));
        assert_eq!(parse_unread_count("(1) Messenger"), Some(1));
        assert_eq!(parse_unread_count("(3)"), Some(3));
    }

    #[test]
    fn parse_unread_count_treats_zero_as_a_real_count() {
        assert_eq!(parse_unread_count("(0) Messenger"), Some(0));
    }

    #[test]
    fn parse_unread_count_rejects_titles_without_the_pattern() {
        assert_eq!(parse_unread_count("Messenger"), None);
        assert_eq!(parse_unread_count(""), None);
        assert_eq!(parse_unread_count("Messenger (3)"), None);
        assert_eq!(parse_unread_count("() Messenger"), None);
        assert_eq!(parse_unread_count("(3a) Messenger"), None);
        assert_eq!(parse_unread_count("(-3) Messenger"), None);
        assert_eq!(parse_unread_count("( 3) Messenger"), None);
        assert_eq!(parse_unread_count("(3 Messenger"), None);
    }

    #[test]
    fn badge_label_shows_count_and_clears_without_one() {
        assert_eq!(badge_label(Some(12)), "12");
        assert_eq!(badge_label(Some(0)), "0");
        assert_eq!(badge_label(None), "");
    }

    #[test]
    fn tray_tooltip_embeds_count_and_resets_to_default() {
        assert_eq!(tray_tooltip(Some(12)), "Messenger - 12 unread");
        assert_eq!(tray_tooltip(Some(0)), "Messenger - 0 unread");
        assert_eq!(tray_tooltip(None), "Messenger");
    }
}
