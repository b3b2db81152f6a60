//! Session log to episodic memory ingestion.
//!
//! Provides:
//! - Tolerant per-line parsing of Claude Code session logs
//! - Content flattening and length policy
//! - Deterministic importance and valence scoring
//! - The sequential import pipeline and its run report

pub mod entry;
pub mod normalize;
pub mod pipeline;
pub mod policy;
pub mod report;

pub use entry::{ParseSkip, RawLogEntry, Speaker, parse_line};
pub use normalize::{DialogueTurn, normalize_entry};
pub use pipeline::SessionImporter;
pub use policy::{Score, classify_importance};
pub use report::RunReport;
