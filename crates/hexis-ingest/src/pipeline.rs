//! The import pipeline: read, normalize, score, write.

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use hexis_memory::{MemorySink, NewEpisode};
use log::{debug, warn};

use crate::entry::parse_line;
use crate::normalize::normalize_entry;
use crate::policy::classify_importance;
use crate::report::RunReport;

/// Pause after each successful write so the store's embedding step keeps up.
pub const WRITE_PACING: Duration = Duration::from_millis(100);

/// Interval, in imported records, between progress lines.
const PROGRESS_INTERVAL: u64 = 100;

/// Characters of a record shown in dry-run previews.
const PREVIEW_CHARS: usize = 100;

/// Sequential importer for one session log.
///
/// Records reach the sink in input order, one at a time. In dry-run mode
/// there is no sink at all and would-be records are previewed instead.
pub struct SessionImporter<'a> {
    sink: Option<&'a mut dyn MemorySink>,
    pacing: Duration,
}

impl<'a> SessionImporter<'a> {
    /// Importer writing through the given sink.
    pub fn new(sink: &'a mut dyn MemorySink) -> Self {
        Self { sink: Some(sink), pacing: WRITE_PACING }
    }

    /// Importer that previews would-be records instead of writing them.
    pub fn dry_run() -> Self {
        Self { sink: None, pacing: WRITE_PACING }
    }

    /// Override the post-write pause.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Drive a whole log through the pipeline.
    ///
    /// Lines that are not dialogue at all (malformed JSON, bookkeeping
    /// entry types, blank lines) pass silently. Dialogue that falls to the
    /// content, policy, or write stage is counted skipped; a sink failure
    /// is warned about and never fatal. Only reader errors abort the run.
    pub fn run(mut self, reader: impl BufRead) -> Result<RunReport> {
        let mut report = RunReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line =
                line.with_context(|| format!("failed to read line {line_number}"))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let entry = match parse_line(line) {
                Ok(entry) => entry,
                Err(_) => continue,
            };

            let Some(turn) = normalize_entry(&entry) else {
                report.skipped += 1;
                continue;
            };

            let score = classify_importance(&turn.text, turn.speaker);
            if score.is_discard() {
                report.skipped += 1;
                continue;
            }

            let episode = NewEpisode {
                content: format!("{}{}", turn.speaker.memory_label(), turn.text),
                importance: score.importance,
                emotional_valence: score.valence,
                event_time: turn.timestamp.unwrap_or_else(Utc::now),
            };

            match &mut self.sink {
                Some(sink) => match sink.create_episodic_memory(&episode) {
                    Ok(id) => {
                        debug!("line {line_number} stored as {id}");
                        report.imported += 1;
                        thread::sleep(self.pacing);
                    }
                    Err(err) => {
                        warn!("Failed to import message {line_number}: {err:#}");
                        report.skipped += 1;
                        continue;
                    }
                },
                None => {
                    let preview: String =
                        episode.content.chars().take(PREVIEW_CHARS).collect();
                    println!("[{:.2}] {}...", episode.importance, preview);
                    report.imported += 1;
                }
            }

            if report.imported % PROGRESS_INTERVAL == 0 {
                println!("Processed {} messages...", report.imported);
            }
        }

        Ok(report)
    }
}
