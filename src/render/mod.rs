//! Render Module
//!
//! The HTML layer of the console. Every dynamic string (result records, the
//! echoed query, status messages, error details) is escaped before it is
//! interpolated into markup; nothing server-provided reaches the page raw.
//!
//! ## Submodules
//! - **`html`**: Text escaping.
//! - **`highlight`**: Range-based term highlighting over plain text segments.
//! - **`table`**: The result table with the grid's filter/pager chrome.
//! - **`page`**: The page shell, the search form, and full-page assembly.

pub mod highlight;
pub mod html;
pub mod page;
pub mod table;
