//! Search Console Library
//!
//! This library crate defines the modules that make up the web console for a
//! text-search service. It serves as the foundation for the binary executable
//! (`main.rs`), which wires the modules into an HTTP server.
//!
//! ## Architecture Modules
//! The console is composed of five loosely coupled subsystems:
//!
//! - **`query`**: The form controller. Validates search form input, builds the
//!   backend request, calls the `/search` endpoint, and dispatches the response
//!   to the renderer or the error path.
//! - **`render`**: The HTML layer. Escapes all dynamic text, renders result
//!   records into table rows, and wraps matched terms in highlight markers.
//! - **`grid`**: The table state component. Owns pagination, sorting, and
//!   filtering over the cached result set with explicit state and a pure
//!   renderer.
//! - **`export`**: The CSV adapter. Serializes the full result set to a
//!   downloadable `data.csv` with highlight markup stripped and line-break
//!   markers converted to newlines.
//! - **`session`**: The controller state. A concurrent per-session store for
//!   the last submitted search, replacing process-wide mutable flags.

pub mod export;
pub mod grid;
pub mod query;
pub mod render;
pub mod session;
