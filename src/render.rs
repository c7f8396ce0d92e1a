// src/render.rs
//
// Snapshot -> standalone HTML comparison table. Template text is compiled into
// the binary; the `.html` name turns on minijinja's HTML auto-escaping, so
// scraped text can never inject markup.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::config::consts::NA_GLYPH;
use crate::error::Result;
use crate::model::{Cell, Snapshot, SourceId};

const TEMPLATE_NAME: &str = "leaderboard.html";
const TEMPLATE: &str = include_str!("templates/leaderboard.html");

#[derive(Serialize)]
struct Column {
    name: &'static str,
    homepage: &'static str,
}

#[derive(Serialize)]
struct Row<'a> {
    label: &'static str,
    cells: Vec<CellView<'a>>,
}

#[derive(Serialize)]
struct CellView<'a> {
    model: Option<&'a str>,
    score: &'a str,
    fallback: bool,
}

impl<'a> CellView<'a> {
    fn from_cell(cell: Option<&'a Cell>) -> Self {
        match cell {
            Some(Cell::Extracted(c)) => Self { model: Some(c.model()), score: c.score(), fallback: false },
            Some(Cell::Fallback(c)) => Self { model: Some(c.model()), score: c.score(), fallback: true },
            Some(Cell::Unavailable) | None => Self { model: None, score: "", fallback: false },
        }
    }
}

/// Render the comparison page. Columns are the sources present in the
/// snapshot; rows are every category at least one of them reports.
pub fn render_html(snapshot: &Snapshot) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;

    let sources: Vec<SourceId> = snapshot.sources().map(|(id, _)| id).collect();
    let columns: Vec<Column> = sources
        .iter()
        .map(|s| Column { name: s.display_name(), homepage: s.homepage() })
        .collect();

    let rows: Vec<Row> = snapshot
        .categories()
        .into_iter()
        .map(|category| Row {
            label: category.label(),
            cells: sources
                .iter()
                .map(|s| CellView::from_cell(snapshot.cell(*s, category)))
                .collect(),
        })
        .collect();

    let at = snapshot.generated_at();
    let html = template.render(context! {
        updated => at.format("%B %d, %Y").to_string(),
        generated_utc => at.format("%Y-%m-%d %H:%M:%S").to_string(),
        na => NA_GLYPH,
        columns,
        rows,
    })?;
    Ok(html)
}
