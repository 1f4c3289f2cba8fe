//! Export Module
//!
//! The CSV adapter. Serializes the full, unfiltered, unpaginated result set of
//! the session's last search to a downloadable `data.csv` (UTF-8 with BOM),
//! with highlight markup stripped and line-break markers converted to
//! newlines. The export reads the stored records, never the rendered table,
//! so the paginated table state is untouched.

pub mod csv;
pub mod handlers;
