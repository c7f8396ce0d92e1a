// src/core/html.rs
//
// DOM queries over a parsed page. Parsing is html5ever's (through `scraper`),
// so optional end tags, `>` inside attributes and markup quoted in scripts
// all come out the way a browser sees them.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect("table selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("row selector"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("anchor selector"));

/// Tags that start a new visual line (roughly what `innerText` breaks on).
const BREAKING: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "tr", "td", "th", "table", "thead", "tbody",
    "h1", "h2", "h3", "h4", "h5", "h6", "section", "article", "header", "footer",
];

/// Never rendered as text.
const HIDDEN: &[&str] = &["script", "style", "noscript", "template", "head"];

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// `<td>` cells of the first data row of the first table.
/// Header-only rows (`<th>` without `<td>`) are skipped.
pub fn first_table_row_cells(doc: &Html) -> Option<Vec<ElementRef<'_>>> {
    let table = doc.select(&TABLE).next()?;
    table.select(&ROW).find_map(|row| {
        let cells: Vec<ElementRef> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| cell.value().name() == "td")
            .collect();
        (!cells.is_empty()).then_some(cells)
    })
}

/// Case-insensitive substring match on the `class` attribute.
pub fn has_class_fragment(el: ElementRef<'_>, fragment: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|class| class.to_ascii_lowercase().contains(&fragment.to_ascii_lowercase()))
}

/// First element strictly inside `scope` whose `class` contains `fragment`.
pub fn find_by_class<'a>(scope: ElementRef<'a>, fragment: &str) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| has_class_fragment(*el, fragment))
}

/// Visible text of every `<a>` in document order.
pub fn anchor_texts(doc: &Html) -> Vec<String> {
    doc.select(&ANCHOR)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect()
}

/// All descendant text, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Visible text split into lines the way a browser would break them.
/// Source newlines are just whitespace.
pub fn visible_lines(el: ElementRef<'_>) -> Vec<String> {
    let mut buf = String::new();
    push_visible(el, &mut buf);
    buf.lines()
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect()
}

fn push_visible(el: ElementRef<'_>, buf: &mut String) {
    let name = el.value().name();
    if HIDDEN.contains(&name) {
        return;
    }
    let breaks = BREAKING.contains(&name);
    if breaks {
        buf.push('\n');
    }
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            buf.extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
        } else if let Some(child) = ElementRef::wrap(child) {
            push_visible(child, buf);
        }
    }
    if breaks {
        buf.push('\n');
    }
}
