use regex::Regex;

use crate::grid::state::{Column, Direction, GridState, GridView};
use crate::query::types::SearchRecord;

use super::highlight;
use super::html::escape;

/// Chrome switches for the grid. Interactive rendering carries the
/// filter-header row and the pager footer; the plain variant disables paging,
/// sorting, and filtering entirely and emits the full set as a bare table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub interactive: bool,
}

impl GridOptions {
    pub fn interactive() -> Self {
        Self { interactive: true }
    }

    pub fn plain() -> Self {
        Self { interactive: false }
    }
}

/// Render the result table for the given grid state.
///
/// The renderer is pure: the output always contains the header row once and,
/// when interactive, the filter row once. Repeated renders replace the table
/// wholesale instead of mutating it.
pub fn render_table(
    records: &[SearchRecord],
    grid: &GridState,
    options: GridOptions,
    query_pattern: Option<&Regex>,
) -> String {
    let filter_pattern = if options.interactive {
        grid.filter
            .as_deref()
            .and_then(|term| highlight::term_pattern(term, false))
    } else {
        None
    };

    let (rows, pager) = if options.interactive {
        let view = grid.apply(records);
        let pager = render_pager(grid, &view);
        (view.rows, Some(pager))
    } else {
        (records.iter().collect::<Vec<_>>(), None)
    };

    let mut out = String::from("<table id=\"table\">\n<thead>\n");
    out.push_str(&render_header_row(grid, options));
    if options.interactive {
        out.push_str(&render_filter_row(grid));
    }
    out.push_str("</thead>\n<tbody id=\"table-body\">\n");
    for record in rows {
        out.push_str("<tr><td>");
        out.push_str(&highlight::render_cell(
            &record.text,
            query_pattern,
            filter_pattern.as_ref(),
        ));
        out.push_str("</td><td>");
        out.push_str(&highlight::render_cell(
            &record.work,
            query_pattern,
            filter_pattern.as_ref(),
        ));
        out.push_str("</td></tr>\n");
    }
    out.push_str("</tbody>\n");
    if let Some(pager) = pager {
        out.push_str(&pager);
    }
    out.push_str("</table>\n");
    out
}

fn render_header_row(grid: &GridState, options: GridOptions) -> String {
    let mut out = String::from("<tr>");
    for column in [Column::Text, Column::Work] {
        if options.interactive {
            let mut target = grid.clone();
            target.sort = GridState::next_sort(grid.sort, column);
            let marker = match grid.sort {
                Some((active, Direction::Ascending)) if active == column => " &#9650;",
                Some((active, Direction::Descending)) if active == column => " &#9660;",
                _ => "",
            };
            out.push_str(&format!(
                "<th><a href=\"/results?{}\">{}</a>{}</th>",
                target.query_string(),
                column.label(),
                marker
            ));
        } else {
            out.push_str(&format!("<th>{}</th>", column.label()));
        }
    }
    out.push_str("</tr>\n");
    out
}

fn render_filter_row(grid: &GridState) -> String {
    // The filter form carries no page field: changing the filter always lands
    // back on the first page.
    let mut out = String::from(
        "<tr id=\"filter-row\"><td colspan=\"2\"><form action=\"/results\" method=\"get\">",
    );
    out.push_str(&format!(
        "<input type=\"hidden\" name=\"per\" value=\"{}\">",
        grid.per_page
    ));
    if let Some((column, direction)) = grid.sort {
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"sort\" value=\"{}\">",
            column.as_param()
        ));
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"dir\" value=\"{}\">",
            direction.as_param()
        ));
    }
    out.push_str(&format!(
        "<input type=\"search\" name=\"filter\" value=\"{}\" placeholder=\"Filter results\">",
        escape(grid.filter.as_deref().unwrap_or(""))
    ));
    out.push_str("<button type=\"submit\">Filter</button></form></td></tr>\n");
    out
}

fn render_pager(grid: &GridState, view: &GridView) -> String {
    let mut out = String::from("<tfoot id=\"pager\"><tr><td colspan=\"2\">");
    if view.page > 1 {
        let mut target = grid.clone();
        target.page = view.page - 1;
        out.push_str(&format!(
            "<a href=\"/results?{}\">Previous</a> ",
            target.query_string()
        ));
    }
    let plural = if view.total == 1 { "" } else { "s" };
    out.push_str(&format!(
        "Page {} of {} ({} row{})",
        view.page, view.page_count, view.total, plural
    ));
    if view.page < view.page_count {
        let mut target = grid.clone();
        target.page = view.page + 1;
        out.push_str(&format!(
            " <a href=\"/results?{}\">Next</a>",
            target.query_string()
        ));
    }
    out.push_str("</td></tr></tfoot>\n");
    out
}
