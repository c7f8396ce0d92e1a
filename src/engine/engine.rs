// src/engine/engine.rs
//
// Generic adapter: drives a `SourceConfig` against whatever `Fetch` it is given.
// Each URL is fetched at most once per run, however many categories read it.

use std::collections::HashMap;

use log::{debug, info};
use scraper::Html;

use crate::core::html;
use crate::core::net::Fetch;
use crate::engine::extract;
use crate::engine::types::{Heuristic, SourceConfig, Strategy};
use crate::error::FetchFailure;
use crate::model::{CandidateResult, Category, SourceId};
use crate::sources::{SourceAdapter, SourceResults};
use crate::validate;

pub struct PageAdapter {
    config: SourceConfig,
}

impl PageAdapter {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl SourceAdapter for PageAdapter {
    fn source(&self) -> SourceId {
        self.config.source
    }

    fn categories(&self) -> Vec<Category> {
        self.config.plans.iter().map(|p| p.category).collect()
    }

    fn is_live(&self, category: Category) -> bool {
        let mut current = category;
        // SameAs chains are one hop in practice; the bound keeps a cycle finite
        for _ in 0..self.config.plans.len() {
            match self.config.plans.iter().find(|p| p.category == current).map(|p| &p.strategy) {
                Some(Strategy::Scrape { .. }) => return true,
                Some(Strategy::SameAs(target)) => current = *target,
                _ => return false,
            }
        }
        false
    }

    fn fetch(&self, fetcher: &dyn Fetch) -> SourceResults {
        let source = self.config.source;
        let mut pages: HashMap<&'static str, Result<Html, FetchFailure>> = HashMap::new();
        let mut out = SourceResults::new();

        for plan in &self.config.plans {
            let result = match &plan.strategy {
                Strategy::Scrape { url, heuristics } => {
                    let page = pages.entry(*url).or_insert_with(|| {
                        info!("{source}: loading {url}");
                        fetcher.get(url).map(|body| html::parse(&body))
                    });
                    match page {
                        Ok(doc) => run_heuristics(doc, url, heuristics),
                        Err(e) => Err(e.clone()),
                    }
                }
                Strategy::Fixed { model, score } => validate::check(CandidateResult::new(model, score)),
                Strategy::FallbackOnly => Err(FetchFailure::NotScraped),
                // resolved below, once their targets exist
                Strategy::SameAs(_) => continue,
            };
            match &result {
                Ok(c) => debug!("{source}/{}: {} ({})", plan.category, c.model(), c.score()),
                Err(e) => debug!("{source}/{}: {e}", plan.category),
            }
            out.insert(plan.category, result);
        }

        for plan in &self.config.plans {
            if let Strategy::SameAs(target) = plan.strategy {
                let result = out.get(&target).cloned().unwrap_or(Err(FetchFailure::NotScraped));
                out.insert(plan.category, result);
            }
        }
        out
    }
}

fn run_heuristics(doc: &Html, url: &str, heuristics: &[Heuristic]) -> Result<CandidateResult, FetchFailure> {
    let mut last = FetchFailure::NoMatch { url: s!(url) };
    for heuristic in heuristics {
        let Some(candidate) = extract::apply(heuristic, doc) else {
            debug!("{heuristic:?}: nothing on {url}");
            continue;
        };
        match validate::check(candidate) {
            Ok(c) => return Ok(c),
            Err(e) => {
                debug!("{heuristic:?}: {e}");
                last = e;
            }
        }
    }
    Err(last)
}
