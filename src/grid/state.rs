use serde::Deserialize;

use crate::query::types::SearchRecord;

pub const DEFAULT_PER_PAGE: usize = 5;
pub const MAX_PER_PAGE: usize = 100;

/// The two result columns: matched snippet and source label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Text,
    Work,
}

impl Column {
    pub fn as_param(self) -> &'static str {
        match self {
            Column::Text => "text",
            Column::Work => "work",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Text => "Text",
            Column::Work => "Work",
        }
    }

    pub fn parse(raw: &str) -> Option<Column> {
        match raw {
            "text" => Some(Column::Text),
            "work" => Some(Column::Work),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_param(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }

    pub fn parse(raw: &str) -> Option<Direction> {
        match raw {
            "asc" => Some(Direction::Ascending),
            "desc" => Some(Direction::Descending),
            _ => None,
        }
    }
}

/// Raw query parameters for the grid route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridParams {
    pub page: Option<usize>,
    pub per: Option<usize>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub filter: Option<String>,
    pub plain: Option<u8>,
}

/// The grid's explicit state. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub page: usize,
    pub per_page: usize,
    pub sort: Option<(Column, Direction)>,
    pub filter: Option<String>,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            filter: None,
        }
    }
}

/// One page of the grid after filter, sort, and pagination.
pub struct GridView<'a> {
    pub rows: Vec<&'a SearchRecord>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

impl GridState {
    /// Decode state from route parameters. The filter form carries no page
    /// field, so a filter change always lands back on the first page.
    pub fn from_params(params: &GridParams) -> Self {
        let sort = params
            .sort
            .as_deref()
            .and_then(Column::parse)
            .map(|column| {
                let direction = params
                    .dir
                    .as_deref()
                    .and_then(Direction::parse)
                    .unwrap_or(Direction::Ascending);
                (column, direction)
            });
        let filter = params
            .filter
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string);

        Self {
            page: params.page.unwrap_or(1).max(1),
            per_page: params.per.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
            sort,
            filter,
        }
    }

    /// Three-state sort cycling: none -> ascending -> descending -> none.
    /// Activating a different column starts its cycle at ascending.
    pub fn next_sort(
        current: Option<(Column, Direction)>,
        column: Column,
    ) -> Option<(Column, Direction)> {
        match current {
            Some((active, Direction::Ascending)) if active == column => {
                Some((column, Direction::Descending))
            }
            Some((active, Direction::Descending)) if active == column => None,
            _ => Some((column, Direction::Ascending)),
        }
    }

    /// Filter, sort, clamp the page into range, and slice the visible rows.
    pub fn apply<'a>(&self, records: &'a [SearchRecord]) -> GridView<'a> {
        let mut rows: Vec<&SearchRecord> = match self.filter.as_deref() {
            Some(term) => {
                let needle = term.to_lowercase();
                records
                    .iter()
                    .filter(|record| {
                        record.text.to_lowercase().contains(&needle)
                            || record.work.to_lowercase().contains(&needle)
                    })
                    .collect()
            }
            None => records.iter().collect(),
        };

        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = match column {
                    Column::Text => a.text.to_lowercase().cmp(&b.text.to_lowercase()),
                    Column::Work => a.work.to_lowercase().cmp(&b.work.to_lowercase()),
                };
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        let total = rows.len();
        let page_count = total.div_ceil(self.per_page).max(1);
        let page = self.page.clamp(1, page_count);
        let start = (page - 1) * self.per_page;
        let rows = rows.into_iter().skip(start).take(self.per_page).collect();

        GridView {
            rows,
            total,
            page,
            page_count,
        }
    }

    /// Serialize the state back into a `/results` query string for self-links.
    pub fn query_string(&self) -> String {
        let mut qs = format!("page={}&per={}", self.page, self.per_page);
        if let Some((column, direction)) = self.sort {
            qs.push_str("&sort=");
            qs.push_str(column.as_param());
            qs.push_str("&dir=");
            qs.push_str(direction.as_param());
        }
        if let Some(filter) = &self.filter {
            qs.push_str("&filter=");
            qs.push_str(&urlencoding::encode(filter));
        }
        qs
    }
}
