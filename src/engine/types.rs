// src/engine/types.rs
use crate::model::{Category, SourceId};

/// How one site is read: which categories it reports and where each comes from.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    pub source: SourceId,
    pub plans: Vec<CategoryPlan>,
}

#[derive(Clone, Debug)]
pub struct CategoryPlan {
    pub category: Category,
    pub strategy: Strategy,
}

#[derive(Clone, Debug)]
pub enum Strategy {
    /// Fetch `url`, then try `heuristics` in order until one yields an acceptable candidate.
    Scrape { url: &'static str, heuristics: &'static [Heuristic] },
    /// Fixed substitution; no network.
    Fixed { model: &'static str, score: &'static str },
    /// Reuse this source's result for another category.
    SameAs(Category),
    /// Reported, but only ever resolved from the fallback table.
    FallbackOnly,
}

#[derive(Clone, Copy, Debug)]
pub enum Heuristic {
    /// First data row of the first table.
    FirstTableRow(RowRule),
    /// First `item`-classed element inside the first `container`-classed element.
    ClassItem { container: &'static str, item: &'static str },
    /// First link, then first text line, that looks like a known vendor's model name.
    VendorName,
}

#[derive(Clone, Copy, Debug)]
pub struct RowRule {
    /// Cell to start looking for the model in; rank-only cells are skipped.
    pub model_cell: usize,
    pub score: ScoreRule,
}

#[derive(Clone, Copy, Debug)]
pub enum ScoreRule {
    None,
    /// Cleaned text of this cell.
    Cell(usize),
    /// Arena style rating: the cell after the model, else any 3-4 digit number after it.
    Elo,
}

impl CategoryPlan {
    pub fn scrape(category: Category, url: &'static str, heuristics: &'static [Heuristic]) -> Self {
        Self { category, strategy: Strategy::Scrape { url, heuristics } }
    }

    pub fn fixed(category: Category, model: &'static str, score: &'static str) -> Self {
        Self { category, strategy: Strategy::Fixed { model, score } }
    }

    pub fn same_as(category: Category, other: Category) -> Self {
        Self { category, strategy: Strategy::SameAs(other) }
    }

    pub fn fallback_only(category: Category) -> Self {
        Self { category, strategy: Strategy::FallbackOnly }
    }
}
