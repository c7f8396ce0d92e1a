// src/validate.rs
//
// Acceptance rule for extracted candidates. Applied by adapters while walking
// their heuristics and again by the aggregator, so a stubbed or misbehaving
// adapter can never put a degenerate name into the snapshot.

use crate::config::consts::MIN_MODEL_CHARS;
use crate::error::FetchFailure;
use crate::model::CandidateResult;

/// Placeholder text that leaderboards render while loading or when empty.
const BLOCKLIST: &[&str] = &[
    "unknown", "—", "–", "-", "n/a", "na", "none", "null", "undefined", "loading",
    "loading...", "loading…", "model", "models", "rank", "tbd", "?",
];

pub fn is_acceptable_model(model: &str) -> bool {
    let m = model.trim();
    if m.chars().count() <= MIN_MODEL_CHARS {
        return false;
    }
    // bare ranks, scores, dates: "12", "#3", "1 1", "1501.2"
    if !m.chars().any(char::is_alphabetic) {
        return false;
    }
    let lc = m.to_lowercase();
    !BLOCKLIST.contains(&lc.as_str())
}

pub fn check(candidate: CandidateResult) -> Result<CandidateResult, FetchFailure> {
    if is_acceptable_model(candidate.model()) {
        Ok(candidate)
    } else {
        Err(FetchFailure::Rejected { model: s!(candidate.model()) })
    }
}
