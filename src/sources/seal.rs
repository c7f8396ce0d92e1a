// src/sources/seal.rs
//! SEAL (Scale AI). Only the overall board is read live, from the first table row
//! (model name in the first cell). Per-benchmark boards are client-rendered.

use crate::engine::types::{CategoryPlan, Heuristic, RowRule, ScoreRule, SourceConfig};
use crate::model::{Category::*, SourceId};

pub const LEADERBOARD_URL: &str = "https://scale.com/leaderboard";

const BOARD: &[Heuristic] = &[
    Heuristic::FirstTableRow(RowRule { model_cell: 0, score: ScoreRule::None }),
    Heuristic::VendorName,
];

pub fn config() -> SourceConfig {
    SourceConfig {
        source: SourceId::Seal,
        plans: vec![
            CategoryPlan::scrape(Overall, LEADERBOARD_URL, BOARD),
            CategoryPlan::fallback_only(Coding),
            CategoryPlan::fixed(Math, "GPT-4 Turbo", ""),
            CategoryPlan::fallback_only(Reasoning),
            CategoryPlan::fallback_only(Multilingual),
        ],
    }
}
