// src/sources/lmarena.rs
//! LMArena: one leaderboard page per arena. Rows are `rank | model | rating | …`;
//! rank can be fused into the model cell and the rating cell carries slider glyphs.
//! Math, reasoning and creative writing have no page of their own and follow the
//! text arena.

use crate::engine::types::{CategoryPlan, Heuristic, RowRule, ScoreRule, SourceConfig};
use crate::model::{Category::*, SourceId};

pub const TEXT_URL: &str = "https://lmarena.ai/leaderboard/text";
pub const WEBDEV_URL: &str = "https://lmarena.ai/leaderboard/webdev";
pub const VISION_URL: &str = "https://lmarena.ai/leaderboard/vision";
pub const TEXT_TO_IMAGE_URL: &str = "https://lmarena.ai/leaderboard/text-to-image";
pub const TEXT_TO_VIDEO_URL: &str = "https://lmarena.ai/leaderboard/text-to-video";

const ARENA: &[Heuristic] = &[
    Heuristic::FirstTableRow(RowRule { model_cell: 0, score: ScoreRule::Elo }),
    Heuristic::VendorName,
];

pub fn config() -> SourceConfig {
    SourceConfig {
        source: SourceId::LmArena,
        plans: vec![
            CategoryPlan::scrape(Overall, TEXT_URL, ARENA),
            CategoryPlan::scrape(Coding, WEBDEV_URL, ARENA),
            CategoryPlan::same_as(Math, Overall),
            CategoryPlan::same_as(Reasoning, Overall),
            CategoryPlan::scrape(Vision, VISION_URL, ARENA),
            CategoryPlan::same_as(CreativeWriting, Overall),
            CategoryPlan::fixed(Expert, "Claude Sonnet 4.5", "~1510 Elo (tie)"),
            CategoryPlan::fixed(Search, "GPT-5.1 Search", ""),
            CategoryPlan::scrape(TextToImage, TEXT_TO_IMAGE_URL, ARENA),
            CategoryPlan::fixed(ImageEdit, "Flux 2 Pro", ""),
            CategoryPlan::scrape(TextToVideo, TEXT_TO_VIDEO_URL, ARENA),
            CategoryPlan::fixed(ImageToVideo, "Veo 3.1", ""),
        ],
    }
}
