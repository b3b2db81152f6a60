//! Access to the Hexis episodic memory store.
//!
//! Provides:
//! - Episodic memory record types
//! - The `MemorySink` write capability used by importers
//! - A Postgres-backed store implementation
//! - Connection configuration from the environment

pub mod config;
pub mod schema;
pub mod storage;

pub use config::StoreConfig;
pub use schema::{NewEpisode, RecordId};
pub use storage::{MemorySink, PgMemoryStore, StoreError};
