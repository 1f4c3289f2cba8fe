//! Query Module
//!
//! The form controller: the component that turns a submitted search form into
//! a backend request and dispatches the response.
//!
//! ## Responsibilities
//! - **Validation**: Field checks (query length, size bounds) surfaced inline
//!   next to the relevant field before any request is sent.
//! - **Request building**: URL-encoding the form values into the backend's
//!   `/search` query string.
//! - **Dispatch**: Parsing the JSON payload (envelope or legacy bare array)
//!   and handing it to the session store and renderer, or taking the error
//!   path (generic failure message, table hidden).
//!
//! ## Submodules
//! - **`client`**: The HTTP client for the search backend.
//! - **`handlers`**: Axum handlers for the form page and the submission route.
//! - **`types`**: Wire types for the `/search` contract.
//! - **`validate`**: Form field validation rules and messages.

pub mod client;
pub mod handlers;
pub mod types;
pub mod validate;
