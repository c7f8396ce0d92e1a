// src/aggregate.rs
//
// Runs every adapter once, in order, and turns their per-category results into
// one immutable Snapshot. This is the only place that decides between an
// adapter's candidate, the fallback table and "unavailable".

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::core::net::Fetch;
use crate::error::FetchFailure;
use crate::fallback::FallbackTable;
use crate::model::{CandidateResult, Category, Cell, Snapshot, SourceCells, SourceId};
use crate::progress::{Progress, SourceSummary};
use crate::sources::SourceAdapter;
use crate::validate;

pub struct Aggregator<'a> {
    fallback: &'a FallbackTable,
    fetcher: &'a dyn Fetch,
}

impl<'a> Aggregator<'a> {
    pub fn new(fallback: &'a FallbackTable, fetcher: &'a dyn Fetch) -> Self {
        Self { fallback, fetcher }
    }

    pub fn run(
        &self,
        adapters: &[Box<dyn SourceAdapter>],
        progress: Option<&mut dyn Progress>,
    ) -> Snapshot {
        self.run_at(adapters, Utc::now(), progress)
    }

    /// Same as `run` with a caller-chosen timestamp; identical adapter output
    /// gives an identical Snapshot.
    pub fn run_at(
        &self,
        adapters: &[Box<dyn SourceAdapter>],
        generated_at: DateTime<Utc>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Snapshot {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(adapters.len());
        }

        let mut sources: BTreeMap<SourceId, SourceCells> = BTreeMap::new();
        for adapter in adapters {
            let source = adapter.source();
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Scraping {source}…"));
            }

            let cells = self.collect_source(adapter.as_ref());
            let summary = summarize(adapter.as_ref(), &cells);
            info!(
                "{source}: {} live, {} fixed, {} fallback, {} unavailable",
                summary.live(), summary.fixed, summary.fallback, summary.unavailable
            );
            if let Some(p) = progress.as_deref_mut() {
                p.source_done(source, &summary);
            }
            // a source listed twice keeps its first resolution
            sources.entry(source).or_insert(cells);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Snapshot::new(generated_at, sources)
    }

    fn collect_source(&self, adapter: &dyn SourceAdapter) -> SourceCells {
        let source = adapter.source();
        let declared = adapter.categories();

        let (mut results, missing) =
            match panic::catch_unwind(AssertUnwindSafe(|| adapter.fetch(self.fetcher))) {
                Ok(results) => (results, FetchFailure::NotScraped),
                Err(payload) => {
                    let msg = panic_message(payload.as_ref());
                    error!("{source}: adapter panicked: {msg}");
                    (BTreeMap::new(), FetchFailure::Panicked(msg))
                }
            };

        declared
            .into_iter()
            .map(|category| {
                let result = results.remove(&category).unwrap_or_else(|| Err(missing.clone()));
                (category, self.resolve(source, category, result))
            })
            .collect()
    }

    /// Adapter result if acceptable, else fallback entry, else unavailable.
    pub fn resolve(
        &self,
        source: SourceId,
        category: Category,
        result: Result<CandidateResult, FetchFailure>,
    ) -> Cell {
        let failure = match result.and_then(validate::check) {
            Ok(candidate) => return Cell::Extracted(candidate),
            Err(failure) => failure,
        };

        match (self.fallback.get(source, category), &failure) {
            (Some(entry), FetchFailure::NotScraped) => {
                debug!("{source}/{category}: curated value {}", entry.model());
                Cell::Fallback(entry.clone())
            }
            (Some(entry), _) => {
                warn!("{source}/{category}: {failure}; using fallback {}", entry.model());
                Cell::Fallback(entry.clone())
            }
            (None, _) => {
                warn!("{source}/{category}: {failure}; no fallback configured");
                Cell::Unavailable
            }
        }
    }
}

pub fn summarize(adapter: &dyn SourceAdapter, cells: &SourceCells) -> SourceSummary {
    cells.iter().fold(SourceSummary::default(), |mut s, (category, cell)| {
        match cell {
            Cell::Extracted(_) => {
                s.extracted += 1;
                if !adapter.is_live(*category) {
                    s.fixed += 1;
                }
            }
            Cell::Fallback(_) => s.fallback += 1,
            Cell::Unavailable => s.unavailable += 1,
        }
        s
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s!(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("unknown panic")
    }
}
