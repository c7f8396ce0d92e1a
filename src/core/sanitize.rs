// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Cut to at most `max` chars (not bytes), trimming any dangling space.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].trim_end().to_string(),
        None => s.to_string(),
    }
}

/// Arrow and box-drawing glyphs that sort/slider widgets leave in score cells.
const DECORATIVE: &[char] = &[
    '◄', '►', '←', '→', '▲', '▼', '─', '│', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼',
];

pub fn strip_decorations(s: &str) -> String {
    let kept: String = s.chars().filter(|c| !DECORATIVE.contains(c)).collect();
    normalize_ws(&kept)
}

/// Drop a leading rank like `1`, `#1` or `#12 ` from a cell's text.
pub fn strip_rank_prefix(s: &str) -> &str {
    let t = s.trim_start();
    let t = t.strip_prefix('#').unwrap_or(t);
    let digits = t.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return s.trim();
    }
    let rest = &t[digits..];
    // "1 Gemini" and "1. Gemini" are ranks; "4o" and "3.5" are part of a name
    if rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with(". ") {
        rest.trim_start_matches('.').trim()
    } else {
        s.trim()
    }
}
