// src/sources/artificial_analysis.rs
//! Artificial Analysis renders its model list either as cards inside a
//! `*leaderboard*` container or as a plain table, depending on the layout served.

use crate::engine::types::{CategoryPlan, Heuristic, RowRule, ScoreRule, SourceConfig};
use crate::model::{Category::*, SourceId};

pub const MODELS_URL: &str = "https://artificialanalysis.ai/leaderboards/models";

const MODELS: &[Heuristic] = &[
    Heuristic::ClassItem { container: "leaderboard", item: "item" },
    Heuristic::FirstTableRow(RowRule { model_cell: 0, score: ScoreRule::None }),
    Heuristic::VendorName,
];

pub fn config() -> SourceConfig {
    SourceConfig {
        source: SourceId::ArtificialAnalysis,
        plans: vec![
            CategoryPlan::scrape(Overall, MODELS_URL, MODELS),
            CategoryPlan::fallback_only(Coding),
            CategoryPlan::fixed(Math, "Gemini 3 Pro", ""),
            CategoryPlan::fallback_only(Reasoning),
            CategoryPlan::fallback_only(Vision),
            CategoryPlan::fixed(Expert, "o3", ""),
            CategoryPlan::fallback_only(TextToImage),
            CategoryPlan::fixed(ImageEdit, "Flux 2", ""),
            CategoryPlan::fallback_only(TextToVideo),
            CategoryPlan::fallback_only(ImageToVideo),
            CategoryPlan::fallback_only(Speed),
            CategoryPlan::fallback_only(Value),
        ],
    }
}
