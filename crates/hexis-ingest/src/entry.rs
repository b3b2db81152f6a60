//! Line-level parsing of Claude Code session logs.
//!
//! Session logs are append-only JSONL. Producers evolve the schema, so the
//! types here keep every field optional or defaulted and ignore anything
//! unknown; a line that still fails to decode is noise, not an error.

use serde::Deserialize;

/// One raw line of a session log.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLogEntry {
    /// Entry discriminator; only `user` and `assistant` carry dialogue.
    #[serde(rename = "type", default)]
    pub entry_type: String,
    /// Message body, absent on bookkeeping entries.
    #[serde(default)]
    pub message: Option<LogMessage>,
    /// Capture time as written by the producer.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Role-attributed message payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LogMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: MessageContent,
}

/// Message content arrives either as a flat string or a block sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for MessageContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// One content block; only `text` blocks contribute dialogue.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    /// Tool invocations, tool results, thinking blocks and the like.
    #[serde(other)]
    Other,
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Map a message role; anything that is not the human is the assistant.
    pub fn from_role(role: &str) -> Self {
        if role == "user" {
            Self::User
        } else {
            Self::Assistant
        }
    }

    /// Fixed prefix stamped onto stored memory bodies.
    pub fn memory_label(self) -> &'static str {
        match self {
            Self::User => "[Ruth]: ",
            Self::Assistant => "[Vesper]: ",
        }
    }
}

/// Why a line produced no entry.
///
/// Both cases are expected in a live log and are absorbed without logging
/// or counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSkip {
    /// Line is not a JSON object of the expected shape.
    MalformedJson,
    /// Entry type is not one of the two conversational roles.
    WrongEntryType,
}

/// Decode one raw log line.
pub fn parse_line(line: &str) -> Result<RawLogEntry, ParseSkip> {
    let entry: RawLogEntry = serde_json::from_str(line).map_err(|_| ParseSkip::MalformedJson)?;
    match entry.entry_type.as_str() {
        "user" | "assistant" => Ok(entry),
        _ => Err(ParseSkip::WrongEntryType),
    }
}
