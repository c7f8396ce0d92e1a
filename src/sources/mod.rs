// src/sources/mod.rs
//! # Source adapters
//!
//! One module per leaderboard site. Each encodes *where the ground truth lives*
//! on that site (URLs, which table or element, how its score column looks) as a
//! `SourceConfig` that the generic `engine::PageAdapter` drives.
//!
//! ## What lives here
//! - Site URLs and the heuristic order per category.
//! - Site quirks (rank columns, rating widgets, client-rendered pages that only
//!   ever resolve from the fallback table).
//!
//! ## What does **not** live here
//! - Fallback values (`fallback.rs`).
//! - Deciding between extracted and fallback results (`aggregate.rs`).
//! - Output formatting (`render.rs`, `store.rs`).
//!
//! Site markup changes often; every heuristic is best-effort and is expected to
//! break. A broken heuristic degrades that category to its fallback entry.
//!
//! Adapters are tested offline against captured fixtures through a `Fetch` stub.

use std::collections::BTreeMap;

use crate::core::net::Fetch;
use crate::engine::PageAdapter;
use crate::error::FetchFailure;
use crate::model::{CandidateResult, Category, SourceId};

pub mod artificial_analysis;
pub mod llm_stats;
pub mod lmarena;
pub mod seal;
pub mod vellum;

pub type SourceResults = BTreeMap<Category, Result<CandidateResult, FetchFailure>>;

pub trait SourceAdapter {
    fn source(&self) -> SourceId;

    /// Categories this source reports. Anything else it returns is ignored.
    fn categories(&self) -> Vec<Category>;

    /// One result per declared category. Must not panic on bad input; failures
    /// are values here, and the aggregator decides what replaces them.
    fn fetch(&self, fetcher: &dyn Fetch) -> SourceResults;

    /// Whether an extracted value for `category` came off the site. Curated
    /// substitutions report `false` so summaries don't count them as live.
    fn is_live(&self, _category: Category) -> bool {
        true
    }
}

/// Every built-in site, in column order.
pub fn builtin() -> Vec<Box<dyn SourceAdapter>> {
    vec![
        Box::new(PageAdapter::new(lmarena::config())),
        Box::new(PageAdapter::new(seal::config())),
        Box::new(PageAdapter::new(vellum::config())),
        Box::new(PageAdapter::new(artificial_analysis::config())),
        Box::new(PageAdapter::new(llm_stats::config())),
    ]
}
