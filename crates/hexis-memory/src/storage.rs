//! Postgres-backed episodic memory store.

use anyhow::Result;
use postgres::{Client, NoTls};
use thiserror::Error;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::schema::{NewEpisode, RecordId};

/// Errors surfaced by the Postgres store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No session could be established; fatal at startup.
    #[error("failed to connect to memory store: {0}")]
    Connect(#[source] postgres::Error),
    /// One create call was rejected; recoverable per record.
    #[error("create_episodic_memory failed: {0}")]
    Write(#[source] postgres::Error),
}

/// The single write capability an importer needs from a memory store.
pub trait MemorySink {
    /// Create one episodic memory record, returning its id.
    fn create_episodic_memory(&mut self, episode: &NewEpisode) -> Result<RecordId>;
}

/// Episodic memory store backed by the Hexis Postgres database.
///
/// Owns one client session for the lifetime of the value; dropping the
/// store closes the session.
pub struct PgMemoryStore {
    client: Client,
}

const CREATE_EPISODIC_MEMORY: &str = "SELECT create_episodic_memory(
    p_content := $1,
    p_importance := $2,
    p_emotional_valence := $3,
    p_event_time := $4
)";

impl PgMemoryStore {
    /// Open a session against the given coordinates.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let client = postgres::Config::new()
            .host(&config.host)
            .port(config.port)
            .dbname(&config.database)
            .user(&config.user)
            .password(&config.password)
            .connect(NoTls)
            .map_err(StoreError::Connect)?;
        Ok(Self { client })
    }
}

impl MemorySink for PgMemoryStore {
    fn create_episodic_memory(&mut self, episode: &NewEpisode) -> Result<RecordId> {
        let row = self
            .client
            .query_one(
                CREATE_EPISODIC_MEMORY,
                &[
                    &episode.content,
                    &episode.importance,
                    &episode.emotional_valence,
                    &episode.event_time,
                ],
            )
            .map_err(StoreError::Write)?;
        let id: Uuid = row.try_get(0).map_err(StoreError::Write)?;
        Ok(RecordId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_call_parameters() {
        for param in [
            "p_content",
            "p_importance",
            "p_emotional_valence",
            "p_event_time",
        ] {
            assert!(
                CREATE_EPISODIC_MEMORY.contains(param),
                "missing parameter {param}"
            );
        }
    }
}
