use regex::Regex;

use super::html::escape;

/// The line-break marker the backend embeds in snippet text.
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Which marker a span is rendered with: the submitted query term or the
/// secondary term from the grid's filter box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Query,
    Filter,
}

impl MarkKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MarkKind::Query => "hl-query",
            MarkKind::Filter => "hl-filter",
        }
    }
}

/// A highlighted byte range within one plain-text segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: MarkKind,
}

/// Compile the matcher for a term. Matching is case-insensitive; the
/// whole-word variant anchors the escaped term on word boundaries.
pub fn term_pattern(term: &str, whole_word: bool) -> Option<Regex> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }
    let escaped = regex::escape(trimmed);
    let pattern = if whole_word {
        format!(r"(?i)\b{}\b", escaped)
    } else {
        format!("(?i){}", escaped)
    };
    Regex::new(&pattern).ok()
}

/// Find every match of `pattern` in a plain-text segment, skipping ranges that
/// intersect spans already claimed by an earlier pass.
pub fn match_spans(segment: &str, pattern: &Regex, kind: MarkKind, taken: &[Span]) -> Vec<Span> {
    pattern
        .find_iter(segment)
        .map(|found| Span {
            start: found.start(),
            end: found.end(),
            kind,
        })
        .filter(|span| {
            !taken
                .iter()
                .any(|other| span.start < other.end && other.start < span.end)
        })
        .collect()
}

/// Escape a segment and wrap its spans in highlight markers. Spans must not
/// overlap; they are emitted in text order.
pub fn render_segment(segment: &str, spans: &[Span]) -> String {
    let mut ordered: Vec<Span> = spans.to_vec();
    ordered.sort_by_key(|span| span.start);

    let mut out = String::with_capacity(segment.len());
    let mut cursor = 0;
    for span in ordered {
        out.push_str(&escape(&segment[cursor..span.start]));
        out.push_str("<mark class=\"");
        out.push_str(span.kind.css_class());
        out.push_str("\">");
        out.push_str(&escape(&segment[span.start..span.end]));
        out.push_str("</mark>");
        cursor = span.end;
    }
    out.push_str(&escape(&segment[cursor..]));
    out
}

/// Render one table cell's text.
///
/// The text is split at line-break markers first, so matching only ever sees
/// plain text: markers cannot be wrapped and a pass cannot re-match its own
/// output. Query spans are claimed before filter spans; a filter match that
/// intersects a query span is dropped.
pub fn render_cell(text: &str, query: Option<&Regex>, filter: Option<&Regex>) -> String {
    text.split(LINE_BREAK_MARKER)
        .map(|segment| {
            let mut spans = match query {
                Some(pattern) => match_spans(segment, pattern, MarkKind::Query, &[]),
                None => Vec::new(),
            };
            if let Some(pattern) = filter {
                let filter_spans = match_spans(segment, pattern, MarkKind::Filter, &spans);
                spans.extend(filter_spans);
            }
            render_segment(segment, &spans)
        })
        .collect::<Vec<_>>()
        .join(LINE_BREAK_MARKER)
}
