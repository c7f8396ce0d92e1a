// src/fallback.rs
//
// Last-known-good values, one per (source, category). Hand curated: edit the
// rows and bump FALLBACK_REVISION together. No expiry, no staleness tracking.

use std::collections::BTreeMap;

use crate::model::{CandidateResult, Category, SourceId};
use Category::*;
use SourceId::*;

pub const FALLBACK_REVISION: &str = "2025-11";

#[rustfmt::skip]
const BUILTIN: &[(SourceId, Category, &str, &str)] = &[
    (LmArena, Overall,         "Gemini 3 Pro",      "1501 Elo"),
    (LmArena, Coding,          "Claude 3.7 Sonnet", "1356 Elo"),
    (LmArena, Math,            "Gemini 3 Pro",      ""),
    (LmArena, Reasoning,       "Gemini 3 Pro",      ""),
    (LmArena, Vision,          "Gemini 3 Pro",      "1328 Elo"),
    (LmArena, CreativeWriting, "Gemini 3 Pro",      ""),
    (LmArena, Expert,          "Claude Sonnet 4.5", "~1510 Elo (tie)"),
    (LmArena, Search,          "GPT-5.1 Search",    ""),
    (LmArena, TextToImage,     "Nano Banana Pro",   ""),
    (LmArena, ImageEdit,       "Flux 2 Pro",        ""),
    (LmArena, TextToVideo,     "Veo 3.1",           "1400+ Elo"),
    (LmArena, ImageToVideo,    "Veo 3.1",           ""),

    (Seal, Overall,      "Gemini 3 Pro",    ""),
    (Seal, Coding,       "Claude Opus 4.1", "SWE-Bench Pro: 22.7%"),
    (Seal, Math,         "GPT-4 Turbo",     ""),
    (Seal, Reasoning,    "Gemini 3 Pro",    "HLE: 41%"),
    (Seal, Multilingual, "GPT-4o",          "Spanish, Chinese, Japanese"),

    (Vellum, Overall,      "Gemini 3 Pro",      ""),
    (Vellum, Coding,       "Claude Sonnet 4.5", "SWE-Bench: 82%"),
    (Vellum, Math,         "Gemini 3 Pro",      "AIME: 100%"),
    (Vellum, Reasoning,    "GPT-oss-120b",      "GPQA: 98.7%"),
    (Vellum, Vision,       "Gemini 3 Pro",      ""),
    (Vellum, Expert,       "Gemini 3 Pro",      "HLE: 45.8%"),
    (Vellum, Multilingual, "Gemini 3 Pro",      "MMMLU: 91.8%"),
    (Vellum, Speed,        "Llama 4 Scout",     "2600 t/s"),
    (Vellum, Value,        "DeepSeek V3.2",     ""),

    (ArtificialAnalysis, Overall,      "DeepSeek V3.2",   ""),
    (ArtificialAnalysis, Coding,       "Claude Opus 4.5", "Aider: 89.4%"),
    (ArtificialAnalysis, Math,         "Gemini 3 Pro",    ""),
    (ArtificialAnalysis, Reasoning,    "o3",              ""),
    (ArtificialAnalysis, Vision,       "Gemini 3 Pro",    ""),
    (ArtificialAnalysis, Expert,       "o3",              ""),
    (ArtificialAnalysis, TextToImage,  "Seedream 4.5",    "ELO: 1146"),
    (ArtificialAnalysis, ImageEdit,    "Flux 2",          ""),
    (ArtificialAnalysis, TextToVideo,  "Veo 3.1",         ""),
    (ArtificialAnalysis, ImageToVideo, "Veo 3",           ""),
    (ArtificialAnalysis, Speed,        "DeepSeek V3",     ""),
    (ArtificialAnalysis, Value,        "DeepSeek V3.2",   ""),

    (LlmStats, Overall,      "Gemini 3 Pro",      ""),
    (LlmStats, Coding,       "Claude Sonnet 4.5", ""),
    (LlmStats, Math,         "Gemini 3 Pro",      ""),
    (LlmStats, Reasoning,    "Gemini 3 Pro",      ""),
    (LlmStats, Vision,       "GPT-5.1",           ""),
    (LlmStats, Multilingual, "Claude Opus 4.5",   ""),
    (LlmStats, TextToImage,  "Hunyuan Image 3.0", ""),
    (LlmStats, TextToVideo,  "Veo 3.1",           ""),
    (LlmStats, Speed,        "Llama 4 Scout",     ""),
    (LlmStats, Value,        "DeepSeek V3.2",     ""),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FallbackTable {
    entries: BTreeMap<(SourceId, Category), CandidateResult>,
}

impl FallbackTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The curated table shipped with the binary.
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .fold(Self::empty(), |table, (source, category, model, score)| {
                table.with(*source, *category, model, score)
            })
    }

    /// Add or replace one entry.
    pub fn with(mut self, source: SourceId, category: Category, model: &str, score: &str) -> Self {
        self.entries.insert((source, category), CandidateResult::new(model, score));
        self
    }

    /// `None` means no fallback is configured for this pair.
    pub fn get(&self, source: SourceId, category: Category) -> Option<&CandidateResult> {
        self.entries.get(&(source, category))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceId, Category, &CandidateResult)> {
        self.entries.iter().map(|((s, c), r)| (*s, *c, r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_replaces_existing_entry() {
        let table = FallbackTable::empty()
            .with(Seal, Math, "GPT-4 Turbo", "")
            .with(Seal, Math, "o3", "AIME: 96%");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Seal, Math).map(|c| c.model()), Some("o3"));
        assert!(table.get(Seal, Vision).is_none());
        assert!(FallbackTable::empty().is_empty());
    }

    #[test]
    fn builtin_has_one_row_per_pair() {
        assert_eq!(FallbackTable::builtin().len(), BUILTIN.len());
    }
}
