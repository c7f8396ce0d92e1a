// src/model.rs
//
// Canonical run data: which sources and categories exist, what one extracted
// candidate looks like, and the per-run Snapshot that the aggregator builds.
//
// Nothing in here talks to the network or the filesystem.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::consts::{MAX_MODEL_CHARS, UNKNOWN_MODEL};
use crate::core::sanitize::{normalize_ws, truncate_chars};

/// One external leaderboard. Declaration order is the table's column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceId {
    LmArena,
    Seal,
    Vellum,
    ArtificialAnalysis,
    LlmStats,
}

impl SourceId {
    pub const ALL: [SourceId; 5] = [
        SourceId::LmArena,
        SourceId::Seal,
        SourceId::Vellum,
        SourceId::ArtificialAnalysis,
        SourceId::LlmStats,
    ];

    /// Key used in the snapshot JSON.
    pub fn key(self) -> &'static str {
        match self {
            SourceId::LmArena => "lmarena",
            SourceId::Seal => "seal",
            SourceId::Vellum => "vellum",
            SourceId::ArtificialAnalysis => "artificial_analysis",
            SourceId::LlmStats => "llm_stats",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SourceId::LmArena => "LMArena",
            SourceId::Seal => "SEAL (Scale)",
            SourceId::Vellum => "Vellum",
            SourceId::ArtificialAnalysis => "Artificial Analysis",
            SourceId::LlmStats => "LLM-Stats",
        }
    }

    pub fn homepage(self) -> &'static str {
        match self {
            SourceId::LmArena => "https://lmarena.ai/leaderboard",
            SourceId::Seal => "https://scale.com/leaderboard",
            SourceId::Vellum => "https://www.vellum.ai/llm-leaderboard",
            SourceId::ArtificialAnalysis => "https://artificialanalysis.ai/leaderboards/models",
            SourceId::LlmStats => "https://llm-stats.com/",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for SourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// A capability axis compared across sources. Declaration order is row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Overall,
    Coding,
    Math,
    Reasoning,
    Vision,
    CreativeWriting,
    Expert,
    Multilingual,
    Search,
    TextToImage,
    ImageEdit,
    TextToVideo,
    ImageToVideo,
    Speed,
    Value,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Overall,
        Category::Coding,
        Category::Math,
        Category::Reasoning,
        Category::Vision,
        Category::CreativeWriting,
        Category::Expert,
        Category::Multilingual,
        Category::Search,
        Category::TextToImage,
        Category::ImageEdit,
        Category::TextToVideo,
        Category::ImageToVideo,
        Category::Speed,
        Category::Value,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Overall => "overall",
            Category::Coding => "coding",
            Category::Math => "math",
            Category::Reasoning => "reasoning",
            Category::Vision => "vision",
            Category::CreativeWriting => "creative_writing",
            Category::Expert => "expert",
            Category::Multilingual => "multilingual",
            Category::Search => "search",
            Category::TextToImage => "text_to_image",
            Category::ImageEdit => "image_edit",
            Category::TextToVideo => "text_to_video",
            Category::ImageToVideo => "image_to_video",
            Category::Speed => "speed",
            Category::Value => "value",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Overall => "🗣️ Text / Chat (Overall)",
            Category::Coding => "💻 Coding / WebDev",
            Category::Math => "🧮 Math",
            Category::Reasoning => "🧠 Reasoning",
            Category::Vision => "👁️ Vision (Multimodal)",
            Category::CreativeWriting => "✍️ Creative Writing",
            Category::Expert => "🎯 Expert / Hard Prompts",
            Category::Multilingual => "🌍 Multilingual",
            Category::Search => "🔍 Search / Grounding",
            Category::TextToImage => "🖼️ Text-to-Image",
            Category::ImageEdit => "✏️ Image Edit",
            Category::TextToVideo => "🎬 Text-to-Video",
            Category::ImageToVideo => "🎞️ Image-to-Video",
            Category::Speed => "⚡ Speed (tokens/s)",
            Category::Value => "💰 Best Value",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// An extracted `(model, score)` pair.
///
/// `model` is never empty: blank input becomes the `"unknown"` sentinel, which
/// validation then rejects. Long names are cut at `MAX_MODEL_CHARS`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CandidateResult {
    model: String,
    score: String,
}

impl CandidateResult {
    pub fn new(model: impl AsRef<str>, score: impl AsRef<str>) -> Self {
        let model = truncate_chars(&normalize_ws(model.as_ref()), MAX_MODEL_CHARS);
        let model = if model.is_empty() { s!(UNKNOWN_MODEL) } else { model };
        Self { model, score: normalize_ws(score.as_ref()) }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn score(&self) -> &str {
        &self.score
    }
}

/// Resolution of one `(source, category)` pair.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Cell {
    /// The adapter's own, validated result.
    Extracted(CandidateResult),
    /// Last-known-good value from the fallback table.
    Fallback(CandidateResult),
    Unavailable,
}

impl Cell {
    pub fn candidate(&self) -> Option<&CandidateResult> {
        match self {
            Cell::Extracted(c) | Cell::Fallback(c) => Some(c),
            Cell::Unavailable => None,
        }
    }
}

pub type SourceCells = BTreeMap<Category, Cell>;

/// The complete output of one run. Built once by the aggregator, then only read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    generated_at: DateTime<Utc>,
    sources: BTreeMap<SourceId, SourceCells>,
}

impl Snapshot {
    pub fn new(generated_at: DateTime<Utc>, sources: BTreeMap<SourceId, SourceCells>) -> Self {
        Self { generated_at, sources }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn sources(&self) -> impl Iterator<Item = (SourceId, &SourceCells)> {
        self.sources.iter().map(|(id, cells)| (*id, cells))
    }

    pub fn source(&self, source: SourceId) -> Option<&SourceCells> {
        self.sources.get(&source)
    }

    pub fn cell(&self, source: SourceId, category: Category) -> Option<&Cell> {
        self.sources.get(&source)?.get(&category)
    }

    /// Categories reported by at least one source, in row order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.sources.values().any(|cells| cells.contains_key(c)))
            .collect()
    }
}

// Flat on purpose: one key per source, then `generated_at`.
impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sources.len() + 1))?;
        for (source, cells) in &self.sources {
            map.serialize_entry(source, cells)?;
        }
        map.serialize_entry("generated_at", &self.generated_at.to_rfc3339())?;
        map.end()
    }
}
