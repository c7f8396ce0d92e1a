// src/sources/vellum.rs
//! Vellum loads its leaderboard data client-side. The served HTML sometimes
//! links the current leader; everything else comes from the fallback table.

use crate::engine::types::{CategoryPlan, Heuristic, SourceConfig};
use crate::model::{Category::*, SourceId};

pub const LEADERBOARD_URL: &str = "https://www.vellum.ai/llm-leaderboard";

pub fn config() -> SourceConfig {
    SourceConfig {
        source: SourceId::Vellum,
        plans: vec![
            CategoryPlan::scrape(Overall, LEADERBOARD_URL, &[Heuristic::VendorName]),
            CategoryPlan::fallback_only(Coding),
            CategoryPlan::fallback_only(Math),
            CategoryPlan::fallback_only(Reasoning),
            CategoryPlan::fallback_only(Vision),
            CategoryPlan::fallback_only(Expert),
            CategoryPlan::fallback_only(Multilingual),
            CategoryPlan::fallback_only(Speed),
            CategoryPlan::fallback_only(Value),
        ],
    }
}
