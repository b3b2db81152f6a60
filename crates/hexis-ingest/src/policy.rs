//! Importance and valence scoring for dialogue turns.
//!
//! Plain substring matching against fixed marker tables. Scoring is pure
//! and deterministic, so the same log always classifies the same way.

use crate::entry::Speaker;

/// Records scoring below this importance are discarded outright.
pub const KEEP_THRESHOLD: f64 = 0.1;

/// Tool and shell artifacts that disqualify a turn entirely.
const SKIP_MARKERS: &[&str] = &[
    "<bash-",
    "<local-command",
    "file-history-snapshot",
    "tool_use",
    "tool_result",
];

/// Emotional and relational vocabulary, Ukrainian and English.
const HIGH_MARKERS: &[&str] = &[
    "дякую",
    "thank",
    "love",
    "важливо",
    "important",
    "відчуваю",
    "feel",
    "хочу",
    "want",
    "value",
    "цінність",
    "рішення",
    "decision",
    "принцип",
    "principle",
    "обійм",
    "hug",
    "разом",
    "together",
    "ідентичність",
    "identity",
    "довіра",
    "trust",
    "vesper",
    "ruth",
    "сузір'я",
    "constellation",
];

/// Operational chatter worth keeping but down-weighting.
const LOW_MARKERS: &[&str] = &[
    "docker",
    "git",
    "pip",
    "npm",
    "ls",
    "cd",
    "mkdir",
    "error",
    "failed",
    "running",
    "checking",
    "installed",
    "```",
    "exit code",
    "container",
    "port",
    "config",
];

/// Importance and emotional valence assigned to one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub importance: f64,
    pub valence: f64,
}

impl Score {
    /// Whether the turn falls below the retention threshold.
    pub fn is_discard(self) -> bool {
        self.importance < KEEP_THRESHOLD
    }
}

/// Score one turn.
///
/// Marker precedence is skip over high over low; with no marker at all
/// the speaker decides the baseline.
pub fn classify_importance(text: &str, speaker: Speaker) -> Score {
    let lowered = text.to_lowercase();

    // Skip markers are checked against both the folded and unfolded text.
    if SKIP_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker) || text.contains(marker))
    {
        return Score { importance: 0.0, valence: 0.0 };
    }

    if HIGH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return Score { importance: 0.85, valence: 0.6 };
    }

    if LOW_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return Score { importance: 0.2, valence: 0.0 };
    }

    match speaker {
        Speaker::User => Score { importance: 0.5, valence: 0.3 },
        Speaker::Assistant => Score { importance: 0.4, valence: 0.1 },
    }
}
