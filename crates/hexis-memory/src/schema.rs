//! Episodic memory record types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for one episodic memory write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEpisode {
    /// Memory body, already speaker-labelled.
    pub content: String,
    /// Retention priority in `[0.0, 1.0]`.
    pub importance: f64,
    /// Signed affect attached to the memory.
    pub emotional_valence: f64,
    /// When the remembered event happened.
    pub event_time: DateTime<Utc>,
}

/// Identifier the store assigns to a created record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub Uuid);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_episode_serialization() {
        let episode = NewEpisode {
            content: "[Ruth]: hello there friend".to_string(),
            importance: 0.5,
            emotional_valence: 0.3,
            event_time: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&episode).unwrap();
        assert!(json.contains("\"content\":\"[Ruth]: hello there friend\""));
        assert!(json.contains("\"importance\":0.5"));
        assert!(json.contains("\"emotional_valence\":0.3"));
        assert!(json.contains("2024-05-01T10:00:00Z"));
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
