//! Session Module
//!
//! Explicit controller state, scoped to one browser session. The last search
//! lives in a concurrent per-session store keyed by a cookie, and a submission
//! sequence number decides whether a late-arriving response may overwrite
//! newer table state.

pub mod store;

#[cfg(test)]
mod tests;
