// src/engine/extract.rs
//
// The heuristics themselves. Each one looks at an already-fetched document
// and returns a raw candidate; accepting or rejecting it is the caller's job.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::config::consts::{MAX_MODEL_CHARS, MIN_SCORE_CHARS};
use crate::core::html::{anchor_texts, find_by_class, first_table_row_cells, text_of, visible_lines};
use crate::core::sanitize::{strip_decorations, strip_rank_prefix};
use crate::engine::types::{Heuristic, RowRule, ScoreRule};
use crate::model::CandidateResult;
use crate::validate::is_acceptable_model;

/// Model families the leaderboards rank. Anchored at the start of the text.
static VENDOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:gpt|chatgpt|o[1-9]\b|claude|gemini|gemma|llama|deepseek|grok|qwen|mistral|magistral|kimi|glm|minimax|nova|command|phi|veo|sora|kling|flux|seedream|imagen|hunyuan|nano banana|ideogram|recraft|midjourney)",
    )
    .expect("vendor pattern")
});

static ELO_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{3,4}(?:\.\d+)?)\b").expect("elo pattern"));

/// Rank columns and slider residue: "1", "1 2", "12 3".
static RANK_CLUSTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}(?: \d{1,2})*$").expect("rank pattern"));

const MAX_VENDOR_WORDS: usize = 8;

pub fn apply(heuristic: &Heuristic, doc: &Html) -> Option<CandidateResult> {
    match heuristic {
        Heuristic::FirstTableRow(rule) => from_table_row(doc, rule),
        Heuristic::ClassItem { container, item } => from_class_item(doc, container, item),
        Heuristic::VendorName => from_vendor_name(doc),
    }
}

fn from_table_row(doc: &Html, rule: &RowRule) -> Option<CandidateResult> {
    let cells = first_table_row_cells(doc)?;

    // Rank may sit in its own cell; look a couple of cells further.
    let (model_idx, model) = cells
        .iter()
        .enumerate()
        .skip(rule.model_cell)
        .take(3)
        .map(|(i, cell)| (i, model_text(*cell)))
        .find(|(_, m)| is_acceptable_model(m))?;

    let texts: Vec<String> = cells.iter().map(|c| text_of(*c)).collect();
    let score = match rule.score {
        ScoreRule::None => s!(),
        ScoreRule::Cell(i) => texts.get(i).map(|t| strip_decorations(t)).unwrap_or_default(),
        ScoreRule::Elo => elo_score(&texts[model_idx + 1..]),
    };
    Some(CandidateResult::new(model, score))
}

fn from_class_item(doc: &Html, container: &str, item: &str) -> Option<CandidateResult> {
    let block = find_by_class(doc.root_element(), container)?;
    // search inside, so a container class like "leaderboard-items" can't match itself
    let entry = find_by_class(block, item)?;
    Some(CandidateResult::new(model_text(entry), ""))
}

fn from_vendor_name(doc: &Html) -> Option<CandidateResult> {
    anchor_texts(doc)
        .into_iter()
        .chain(visible_lines(doc.root_element()))
        .map(|t| s!(strip_rank_prefix(&t)))
        .find(|t| looks_like_model_name(t))
        .map(|m| CandidateResult::new(m, ""))
}

pub fn looks_like_model_name(text: &str) -> bool {
    VENDOR_NAME.is_match(text)
        && text.chars().count() <= MAX_MODEL_CHARS
        && text.split_whitespace().count() <= MAX_VENDOR_WORDS
}

/// First visible line of a cell that is more than a rank number.
pub fn model_text(cell: ElementRef<'_>) -> String {
    visible_lines(cell)
        .iter()
        .map(|line| strip_rank_prefix(line))
        .find(|line| !line.is_empty())
        .map(String::from)
        .unwrap_or_default()
}

/// Score from the cell texts after the model cell. A short or rank-like
/// first cell means the rating lives further along the row.
pub fn elo_score(texts: &[String]) -> String {
    let first = texts.first().map(|t| strip_decorations(t)).unwrap_or_default();

    if first.chars().count() >= MIN_SCORE_CHARS && !RANK_CLUSTER.is_match(&first) {
        return first;
    }
    texts
        .iter()
        .find_map(|t| ELO_NUMBER.captures(t))
        .map(|n| format!("{} Elo", &n[1]))
        .unwrap_or_default()
}
