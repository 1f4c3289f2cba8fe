//! Query Wire Types
//!
//! Data Transfer Objects for the backend `/search` contract. The backend has
//! shipped two payload shapes over its lifetime: a bare JSON array of records,
//! and an envelope carrying the records plus the echoed query, the whole-word
//! flag, and a status message. Both are accepted here.

use serde::{Deserialize, Serialize};

/// A single search submission, built fresh from the form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub size: u32,
    pub key: Option<String>,
    pub match_whole_word: bool,
}

/// One matched snippet with its source label.
///
/// The label field has been serialized as `Play` or `WorkTitle` depending on
/// the backend version; both spellings deserialize into `work`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Play", alias = "WorkTitle")]
    pub work: String,
}

/// The envelope shape returned by current backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "Results", default)]
    pub results: Vec<SearchRecord>,
    #[serde(rename = "Query")]
    pub query: String,
    #[serde(rename = "MatchWholeWord", default)]
    pub match_whole_word: bool,
    #[serde(rename = "Message", default)]
    pub message: String,
}

/// Either the current envelope or the bare record array older backends return.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    Envelope(SearchEnvelope),
    Bare(Vec<SearchRecord>),
}

impl SearchPayload {
    /// Normalize the payload into an envelope. A bare array carries no echoed
    /// query or message, so both are reconstructed from the request.
    pub fn into_envelope(self, request: &SearchRequest) -> SearchEnvelope {
        match self {
            SearchPayload::Envelope(envelope) => envelope,
            SearchPayload::Bare(results) => {
                let message = result_message(&request.query, results.len());
                SearchEnvelope {
                    results,
                    query: request.query.clone(),
                    match_whole_word: request.match_whole_word,
                    message,
                }
            }
        }
    }
}

/// Status line in the backend's own phrasing, including the singular/plural
/// result count and the no-results hint.
pub fn result_message(query: &str, count: usize) -> String {
    let results_string = if count > 1 {
        format!("a total of {} results", count)
    } else if count == 1 {
        "a total of 1 result".to_string()
    } else {
        "no results. Please try with another sentence or word".to_string()
    };
    format!(
        "You searched for \"{}\". The search returned {}.",
        query, results_string
    )
}
