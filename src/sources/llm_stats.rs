// src/sources/llm_stats.rs
use crate::engine::types::{CategoryPlan, Heuristic, RowRule, ScoreRule, SourceConfig};
use crate::model::{Category::*, SourceId};

pub const HOME_URL: &str = "https://llm-stats.com/";

const HOME: &[Heuristic] = &[
    Heuristic::FirstTableRow(RowRule { model_cell: 0, score: ScoreRule::Cell(2) }),
    Heuristic::VendorName,
];

pub fn config() -> SourceConfig {
    SourceConfig {
        source: SourceId::LlmStats,
        plans: vec![
            CategoryPlan::scrape(Overall, HOME_URL, HOME),
            CategoryPlan::fallback_only(Coding),
            CategoryPlan::fallback_only(Math),
            CategoryPlan::fallback_only(Reasoning),
            CategoryPlan::fallback_only(Vision),
            CategoryPlan::fallback_only(Multilingual),
            CategoryPlan::fallback_only(TextToImage),
            CategoryPlan::fallback_only(TextToVideo),
            CategoryPlan::fallback_only(Speed),
            CategoryPlan::fallback_only(Value),
        ],
    }
}
