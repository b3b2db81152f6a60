//! Content flattening and length policy.
//!
//! Length rules count characters, not bytes; the logs mix Cyrillic and
//! Latin text and a byte cut could land mid character.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::entry::{ContentBlock, MessageContent, RawLogEntry, Speaker};

/// Minimum characters a turn must carry to be worth storing.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Characters kept before truncation.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Suffix appended to truncated bodies.
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// A normalized dialogue turn, ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueTurn {
    pub speaker: Speaker,
    pub text: String,
    /// Event time recovered from the entry, when it parsed.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Normalize a recognized entry into a dialogue turn.
///
/// Returns `None` for turns shorter than [`MIN_CONTENT_CHARS`];
/// acknowledgement noise carries no durable meaning.
pub fn normalize_entry(entry: &RawLogEntry) -> Option<DialogueTurn> {
    let message = entry.message.as_ref()?;
    let text = flatten_content(&message.content);
    if text.chars().count() < MIN_CONTENT_CHARS {
        return None;
    }
    Some(DialogueTurn {
        speaker: Speaker::from_role(&message.role),
        text: truncate_text(&text),
        timestamp: entry.timestamp.as_deref().and_then(parse_event_time),
    })
}

/// Collapse message content into flat text.
///
/// Block sequences keep only `text` blocks, joined with newlines in
/// document order.
pub fn flatten_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => {
            let texts: Vec<&str> = blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    ContentBlock::Other => None,
                })
                .collect();
            texts.join("\n")
        }
    }
}

/// Cap outlier-length turns at [`MAX_CONTENT_CHARS`] characters.
fn truncate_text(text: &str) -> String {
    if text.chars().count() <= MAX_CONTENT_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_CONTENT_CHARS).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Parse an entry timestamp.
///
/// Only strings carrying a date-time separator are attempted. Offset forms
/// keep their instant, offset-free date-times are assumed UTC, anything
/// else is reported unparsed so the caller can fall back.
fn parse_event_time(raw: &str) -> Option<DateTime<Utc>> {
    if !raw.contains('T') {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{LogMessage, parse_line};

    fn user_entry(content: &str) -> RawLogEntry {
        RawLogEntry {
            entry_type: "user".to_string(),
            message: Some(LogMessage {
                role: "user".to_string(),
                content: MessageContent::Text(content.to_string()),
            }),
            timestamp: None,
        }
    }

    #[test]
    fn test_flat_strings_pass_through() {
        let entry = parse_line(
            r#"{"type":"user","message":{"role":"user","content":"Please review the plan"}}"#,
        )
        .unwrap();

        let turn = normalize_entry(&entry).unwrap();
        assert_eq!(turn.speaker, Speaker::User);
        assert_eq!(turn.text, "Please review the plan");
        assert_eq!(turn.timestamp, None);
    }

    #[test]
    fn test_text_blocks_join_with_newlines() {
        let content = MessageContent::Blocks(vec![
            ContentBlock::Text { text: "first".to_string() },
            ContentBlock::Other,
            ContentBlock::Text { text: "second".to_string() },
        ]);
        assert_eq!(flatten_content(&content), "first\nsecond");
    }

    #[test]
    fn test_empty_text_blocks_still_contribute() {
        // An empty text block is kept, so its neighbors stay separated.
        let content = MessageContent::Blocks(vec![
            ContentBlock::Text { text: "first".to_string() },
            ContentBlock::Text { text: String::new() },
            ContentBlock::Text { text: "third".to_string() },
        ]);
        assert_eq!(flatten_content(&content), "first\n\nthird");
    }

    #[test]
    fn test_non_text_blocks_flatten_to_nothing() {
        let content = MessageContent::Blocks(vec![ContentBlock::Other, ContentBlock::Other]);
        assert_eq!(flatten_content(&content), "");
    }

    #[test]
    fn test_minimum_length_boundary() {
        assert!(normalize_entry(&user_entry("123456789")).is_none());
        assert!(normalize_entry(&user_entry("1234567890")).is_some());
    }

    #[test]
    fn test_length_counts_characters() {
        // Nine Cyrillic characters, well over ten bytes.
        assert!(normalize_entry(&user_entry("дякую вам")).is_none());
    }

    #[test]
    fn test_missing_message_no_turn() {
        let entry = RawLogEntry {
            entry_type: "user".to_string(),
            message: None,
            timestamp: None,
        };
        assert!(normalize_entry(&entry).is_none());
    }

    #[test]
    fn test_truncate_long_turns() {
        let turn = normalize_entry(&user_entry(&"a".repeat(2500))).unwrap();
        assert_eq!(
            turn.text.chars().count(),
            MAX_CONTENT_CHARS + TRUNCATION_MARKER.chars().count()
        );
        assert!(turn.text.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_limit_length_untouched() {
        let turn = normalize_entry(&user_entry(&"a".repeat(2000))).unwrap();
        assert_eq!(turn.text.chars().count(), 2000);
        assert!(!turn.text.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_rfc3339_timestamps() {
        assert_eq!(
            parse_event_time("2024-05-01T10:00:00Z"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_event_time("2024-05-01T10:00:00+03:00"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_offset_free_timestamps() {
        assert_eq!(
            parse_event_time("2024-05-01T10:00:00"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_garbage_timestamps() {
        assert_eq!(parse_event_time("last Tuesday"), None);
        assert_eq!(parse_event_time("1714557600"), None);
        assert_eq!(parse_event_time(""), None);
    }
}
