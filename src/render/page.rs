use crate::grid::state::GridState;
use crate::query::types::SearchRequest;
use crate::query::validate::{FieldError, SearchForm};
use crate::session::store::StoredSearch;

use super::highlight;
use super::html::escape;
use super::table::{self, GridOptions};

const STYLE: &str = include_str!("style.css");

/// The backend falls back to this response size when none is sent; the blank
/// form is prefilled with it.
pub const DEFAULT_SIZE: &str = "500";

/// Form field values and inline errors for redisplay.
#[derive(Debug, Clone)]
pub struct FormView {
    pub query: String,
    pub size: String,
    pub key: String,
    pub match_word: bool,
    pub errors: Vec<FieldError>,
}

impl FormView {
    pub fn blank() -> Self {
        Self {
            query: String::new(),
            size: DEFAULT_SIZE.to_string(),
            key: String::new(),
            match_word: false,
            errors: Vec::new(),
        }
    }

    /// Redisplay the raw submitted values together with their field errors.
    pub fn from_form(form: &SearchForm, errors: Vec<FieldError>) -> Self {
        Self {
            query: form.query.clone().unwrap_or_default(),
            size: form.size.clone().unwrap_or_default(),
            key: form.key.clone().unwrap_or_default(),
            match_word: form.match_word.as_deref() == Some("on"),
            errors,
        }
    }

    pub fn from_request(request: &SearchRequest) -> Self {
        Self {
            query: request.query.clone(),
            size: request.size.to_string(),
            key: request.key.clone().unwrap_or_default(),
            match_word: request.match_whole_word,
            errors: Vec::new(),
        }
    }

    fn error_for(&self, field: &str) -> String {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| format!("<span class=\"field-error\">{}</span>", escape(error.message)))
            .unwrap_or_default()
    }
}

/// Assemble a full page: search form, loading overlay, status line, and an
/// optional pre-rendered results block. No results block means the table is
/// hidden, which is the error and empty-result presentation.
pub fn render_page(form: &FormView, message: Option<&str>, results: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&render_form(form));
    body.push_str("<div id=\"loading-screen\" hidden>Searching&hellip;</div>\n");
    if let Some(message) = message {
        body.push_str(&format!(
            "<p id=\"result-message\">{}</p>\n",
            escape(message)
        ));
    }
    if let Some(results) = results {
        body.push_str(results);
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Search Console</title>\n<style>{}</style>\n</head>\n<body>\n\
         <h1>Search Console</h1>\n{}</body>\n</html>\n",
        STYLE, body
    )
}

/// Assemble the results page for a stored search and the given grid state.
pub fn render_results_page(
    stored: &StoredSearch,
    grid: &GridState,
    options: GridOptions,
) -> String {
    let envelope = &stored.envelope;
    let form = FormView::from_request(&stored.request);

    if envelope.results.is_empty() {
        return render_page(&form, Some(&envelope.message), None);
    }

    let query_pattern = highlight::term_pattern(&envelope.query, envelope.match_whole_word);
    let mut block = table::render_table(&envelope.results, grid, options, query_pattern.as_ref());
    block.push_str("<p><a id=\"download-csv\" href=\"/export.csv\" download>Download CSV</a>");
    if options.interactive {
        block.push_str(" &middot; <a id=\"view-all\" href=\"/results?plain=1\">View full table</a>");
    } else {
        block.push_str(" &middot; <a href=\"/results\">Back to paged view</a>");
    }
    block.push_str("</p>\n");

    render_page(&form, Some(&envelope.message), Some(&block))
}

fn render_form(form: &FormView) -> String {
    let checked = if form.match_word { " checked" } else { "" };
    format!(
        "<form id=\"form\" action=\"/search\" method=\"get\" \
         onsubmit=\"document.getElementById('loading-screen').hidden = false\">\n\
         <label for=\"query\">Word or sentence</label>\n\
         <input id=\"query\" name=\"query\" value=\"{query}\" autofocus>{query_error}\n\
         <details id=\"advanced-configurations\">\n\
         <summary>Advanced configurations</summary>\n\
         <label for=\"size\">Average response size</label>\n\
         <input id=\"size\" name=\"size\" value=\"{size}\">{size_error}\n\
         <label for=\"key\">Correction API key</label>\n\
         <input id=\"key\" name=\"key\" value=\"{key}\">\n\
         <label for=\"matchWord\">\
         <input id=\"matchWord\" type=\"checkbox\" name=\"matchWord\"{checked}> \
         Match whole word</label>\n\
         </details>\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
        query = escape(&form.query),
        query_error = form.error_for("query"),
        size = escape(&form.size),
        size_error = form.error_for("size"),
        key = escape(&form.key),
        checked = checked,
    )
}
