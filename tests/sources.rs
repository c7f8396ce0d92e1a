// tests/sources.rs
use std::cell::RefCell;
use std::collections::HashMap;

use leaderboard_scrape::aggregate::Aggregator;
use leaderboard_scrape::core::net::{Fetch, OfflineFetcher};
use leaderboard_scrape::error::FetchFailure;
use leaderboard_scrape::fallback::FallbackTable;
use leaderboard_scrape::model::{Category, Cell, SourceId};
use leaderboard_scrape::sources::{self, SourceAdapter, artificial_analysis, llm_stats, lmarena, seal, vellum};
use leaderboard_scrape::engine::PageAdapter;
use leaderboard_scrape::validate::is_acceptable_model;

/// Serves captured pages by URL; anything else is a 404. Records every request.
#[derive(Default)]
struct Fixtures {
    pages: HashMap<&'static str, String>,
    requests: RefCell<Vec<String>>,
}

impl Fixtures {
    fn with(mut self, url: &'static str, html: impl Into<String>) -> Self {
        self.pages.insert(url, html.into());
        self
    }
}

impl Fetch for Fixtures {
    fn get(&self, url: &str) -> Result<String, FetchFailure> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchFailure::Status { url: url.to_string(), status: 404 })
    }
}

const ARENA_TEXT: &str = r#"<html><head>
<script>window.__boot = "<table><tr><td>Fake Model</td></tr></table>";</script>
</head><body>
<table>
  <thead><tr><th>Rank (UB)</th><th>Model</th><th>Score</th><th>Org</th></tr></thead>
  <tbody>
    <tr><td>1</td><td><a href="/m/gemini-3-pro">Gemini&nbsp;3 Pro</a></td><td>1501</td><td>Google</td></tr>
    <tr><td>2</td><td>Grok 4.1 Thinking</td><td>1483</td><td>xAI</td></tr>
  </tbody>
</table></body></html>"#;

const ARENA_VISION: &str = r#"<table><tbody>
<tr><td>1</td><td>Gemini 3 Pro</td><td>1 2</td><td><span>1328</span> ±6</td></tr>
</tbody></table>"#;

const ARENA_LOADING: &str = r#"<table><tbody><tr><td>1</td><td>Loading...</td><td>—</td></tr></tbody></table>"#;

#[test]
fn lmarena_reads_tables_and_mirrors_overall() {
    let fixtures = Fixtures::default()
        .with(lmarena::TEXT_URL, ARENA_TEXT)
        .with(lmarena::VISION_URL, ARENA_VISION)
        .with(lmarena::TEXT_TO_IMAGE_URL, ARENA_LOADING);
    let adapter = PageAdapter::new(lmarena::config());

    let results = adapter.fetch(&fixtures);

    let overall = results[&Category::Overall].as_ref().unwrap();
    assert_eq!(overall.model(), "Gemini 3 Pro");
    assert_eq!(overall.score(), "1501");
    for mirrored in [Category::Math, Category::Reasoning, Category::CreativeWriting] {
        assert_eq!(results[&mirrored].as_ref().unwrap(), overall);
    }

    let vision = results[&Category::Vision].as_ref().unwrap();
    assert_eq!(vision.model(), "Gemini 3 Pro");
    assert_eq!(vision.score(), "1328 Elo");

    assert!(matches!(results[&Category::TextToImage], Err(FetchFailure::NoMatch { .. })));
    assert!(matches!(results[&Category::Coding], Err(FetchFailure::Status { status: 404, .. })));
    assert_eq!(results[&Category::Expert].as_ref().unwrap().model(), "Claude Sonnet 4.5");

    // one request per page
    let requests = fixtures.requests.borrow();
    assert_eq!(requests.len(), 5);
    assert_eq!(requests.iter().filter(|u| u.as_str() == lmarena::TEXT_URL).count(), 1);
}

#[test]
fn llm_stats_takes_score_from_third_cell() {
    let html = r#"<table><tr><th>#</th><th>Model</th><th>GPQA</th></tr>
        <tr><td>#1</td><td>Gemini 3 Pro<br><small>Google</small></td><td>91.9%</td></tr></table>"#;
    let fixtures = Fixtures::default().with(llm_stats::HOME_URL, html);

    let results = PageAdapter::new(llm_stats::config()).fetch(&fixtures);

    let overall = results[&Category::Overall].as_ref().unwrap();
    assert_eq!(overall.model(), "Gemini 3 Pro");
    assert_eq!(overall.score(), "91.9%");
    assert_eq!(results[&Category::Speed], Err(FetchFailure::NotScraped));
}

#[test]
fn artificial_analysis_prefers_cards_over_table() {
    let html = r#"<div class="models-leaderboard grid">
          <div class="card-item"><div>1</div><div>DeepSeek V3.2</div></div>
          <div class="card-item"><div>2</div><div>Kimi K2</div></div>
        </div>
        <table><tr><td>GPT-5.1</td></tr></table>"#;
    let fixtures = Fixtures::default().with(artificial_analysis::MODELS_URL, html);

    let results = PageAdapter::new(artificial_analysis::config()).fetch(&fixtures);

    assert_eq!(results[&Category::Overall].as_ref().unwrap().model(), "DeepSeek V3.2");
    assert_eq!(results[&Category::Expert].as_ref().unwrap().model(), "o3");
}

#[test]
fn vendor_name_fallback_on_unstructured_pages() {
    let vellum_html = r#"<header><a href="/">Vellum</a><a href="/llm-leaderboard">Leaderboard</a></header>
        <main><h2>Best in reasoning</h2><div class="leader"><a href="/models/claude-opus-4-5">Claude Opus 4.5</a></div></main>"#;
    let seal_html = r#"<main><h1>SEAL Leaderboards</h1><p>Expert-driven evaluations</p>
        <ol><li>1. GPT-5.1 (high)</li><li>2. Claude Sonnet 4.5</li></ol></main>"#;
    let fixtures = Fixtures::default()
        .with(vellum::LEADERBOARD_URL, vellum_html)
        .with(seal::LEADERBOARD_URL, seal_html);

    let vellum = PageAdapter::new(vellum::config()).fetch(&fixtures);
    let seal = PageAdapter::new(seal::config()).fetch(&fixtures);

    assert_eq!(vellum[&Category::Overall].as_ref().unwrap().model(), "Claude Opus 4.5");
    assert_eq!(seal[&Category::Overall].as_ref().unwrap().model(), "GPT-5.1 (high)");
    assert_eq!(seal[&Category::Math].as_ref().unwrap().model(), "GPT-4 Turbo");
}

#[test]
fn lmarena_survives_markup_a_browser_would_accept() {
    // `>` inside an attribute, then a row whose end tags are all omitted
    let quoted = r#"<table><tr><td>1</td><td title="a>b">Gemini 3 Pro</td><td>1501</td></tr></table>"#;
    let unclosed = "<table><tr><td>1<td>Gemini 3 Pro<td>1501<tr><td>2<td>Grok 4</table>";
    let fixtures = Fixtures::default()
        .with(lmarena::TEXT_URL, quoted)
        .with(lmarena::WEBDEV_URL, unclosed);

    let results = PageAdapter::new(lmarena::config()).fetch(&fixtures);

    for category in [Category::Overall, Category::Coding] {
        let c = results[&category].as_ref().unwrap();
        assert_eq!(c.model(), "Gemini 3 Pro", "{category}");
        assert_eq!(c.score(), "1501", "{category}");
    }
}

#[test]
fn stray_angle_bracket_before_cards_is_text() {
    let html = r#"<p>Latency < 200ms on 3 < 4 providers</p>
        <div class="leaderboard"><div class="item"><span>1</span><span>Kimi K2</span></div></div>"#;
    let fixtures = Fixtures::default().with(artificial_analysis::MODELS_URL, html);

    let results = PageAdapter::new(artificial_analysis::config()).fetch(&fixtures);

    assert_eq!(results[&Category::Overall].as_ref().unwrap().model(), "Kimi K2");
}

#[test]
fn vendor_name_scales_to_link_heavy_pages() {
    let mut html = String::from("<nav>");
    for i in 0..8_000 {
        html.push_str(&format!(r#"<a href="/p/{i}">Page {i}</a><abbr>{i}</abbr>"#));
    }
    html.push_str(r#"</nav><main><a href="/models/claude-opus-4-5">Claude Opus 4.5</a></main>"#);
    let fixtures = Fixtures::default().with(vellum::LEADERBOARD_URL, html);

    let results = PageAdapter::new(vellum::config()).fetch(&fixtures);

    assert_eq!(results[&Category::Overall].as_ref().unwrap().model(), "Claude Opus 4.5");
}

#[test]
fn curated_and_fallback_only_categories_are_not_live() {
    let arena = PageAdapter::new(lmarena::config());
    assert!(arena.is_live(Category::Overall));
    // mirrors the text arena
    assert!(arena.is_live(Category::Math));
    assert!(!arena.is_live(Category::Expert));

    let seal = PageAdapter::new(seal::config());
    assert!(!seal.is_live(Category::Math));
    assert!(!seal.is_live(Category::Coding));
    // undeclared
    assert!(!seal.is_live(Category::Vision));
}

#[test]
fn offline_run_is_complete_and_never_degenerate() {
    let adapters = sources::builtin();
    let fallback = FallbackTable::builtin();

    let snap = Aggregator::new(&fallback, &OfflineFetcher).run(&adapters, None);

    assert_eq!(snap.sources().map(|(id, _)| id).collect::<Vec<_>>(), SourceId::ALL.to_vec());
    for adapter in &adapters {
        let cells = snap.source(adapter.source()).unwrap();
        let mut declared = adapter.categories();
        declared.sort();
        assert_eq!(cells.keys().copied().collect::<Vec<_>>(), declared);
        for (category, cell) in cells {
            let candidate = cell
                .candidate()
                .unwrap_or_else(|| panic!("{}/{category} has no value", adapter.source()));
            assert!(is_acceptable_model(candidate.model()), "{}/{category}", adapter.source());
        }
    }
    // scraped categories come from the table when offline
    assert!(matches!(snap.cell(SourceId::LmArena, Category::Overall), Some(Cell::Fallback(_))));
    // fixed ones don't need the network
    assert!(matches!(snap.cell(SourceId::Seal, Category::Math), Some(Cell::Extracted(_))));
}

#[test]
fn builtin_fallback_matches_declared_categories() {
    let declared: Vec<(SourceId, Vec<Category>)> =
        sources::builtin().iter().map(|a| (a.source(), a.categories())).collect();
    let table = FallbackTable::builtin();

    for (source, category, entry) in table.iter() {
        let (_, cats) = declared.iter().find(|(s, _)| *s == source).unwrap();
        assert!(cats.contains(&category), "fallback for undeclared {source}/{category}");
        assert!(is_acceptable_model(entry.model()), "{source}/{category}: {}", entry.model());
    }
    for (source, cats) in &declared {
        for category in cats {
            assert!(table.get(*source, *category).is_some(), "no fallback for {source}/{category}");
        }
    }
}
