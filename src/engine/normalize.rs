//! Shared cleanup for raw task captures.

use std::sync::OnceLock;

use regex::Regex;

use crate::consts::MIN_TASK_CHARS;

static RE_LEADING_ARTICLE: OnceLock<Regex> = OnceLock::new();

fn re_leading_article() -> &'static Regex {
    RE_LEADING_ARTICLE
        .get_or_init(|| Regex::new(r"(?i)^(the |a |an )").expect("leading article regex"))
}

/// Clean a raw capture into task text, or reject it as noise.
///
/// Trims, strips at most one leading article, and capitalizes the first
/// letter. Returns `None` when the result is [`MIN_TASK_CHARS`] characters
/// or fewer, or when its lower-cased form contains the substring `"we"` or
/// `"it"` anywhere. The filter is not word-boundary aware: "with" is
/// rejected, "schedule" is fine. Do not sharpen the rule; callers depend
/// on the current behavior.
pub fn normalize_capture(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = re_leading_article().replace(trimmed, "");
    let task = capitalize_first(&stripped);

    if task.chars().count() <= MIN_TASK_CHARS {
        return None;
    }
    let lowered = task.to_lowercase();
    if lowered.contains("we") || lowered.contains("it") {
        return None;
    }
    Some(task)
}

/// Upper-case the first letter, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_capitalizes() {
        assert_eq!(
            normalize_capture("  finalize budget  ").as_deref(),
            Some("Finalize budget")
        );
    }

    #[test]
    fn strips_one_leading_article() {
        assert_eq!(
            normalize_capture("the venue booking").as_deref(),
            Some("Venue booking")
        );
        assert_eq!(
            normalize_capture("an updated moodboard").as_deref(),
            Some("Updated moodboard")
        );
        // Only the first article goes.
        assert_eq!(
            normalize_capture("the a la carte menu").as_deref(),
            Some("A la carte menu")
        );
    }

    #[test]
    fn article_without_trailing_space_is_kept() {
        assert_eq!(normalize_capture("theater run").as_deref(), Some("Theater run"));
    }

    #[test]
    fn article_strip_is_case_insensitive() {
        assert_eq!(
            normalize_capture("The venue booking").as_deref(),
            Some("Venue booking")
        );
    }

    #[test]
    fn short_captures_are_rejected() {
        assert!(normalize_capture("nope").is_none());
        assert!(normalize_capture("apple").is_none()); // exactly 5 chars
        assert!(normalize_capture("mangos").is_some()); // 6 chars
    }

    #[test]
    fn generic_phrases_are_rejected() {
        assert!(normalize_capture("check it tomorrow").is_none());
        assert!(normalize_capture("ask the vendor weekly").is_none());
        // "it" inside a longer word still rejects — blunt on purpose.
        assert!(normalize_capture("sync with the vendor").is_none());
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("émail the crew"), "Émail the crew");
    }
}
