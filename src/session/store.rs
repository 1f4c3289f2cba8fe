use axum::http::{HeaderMap, header};
use dashmap::DashMap;

use crate::query::types::{SearchEnvelope, SearchRequest};

pub const SESSION_COOKIE: &str = "sid";

/// The last successful search for a session: the request as submitted plus the
/// normalized backend response. Grid re-renders and CSV export read this.
#[derive(Debug, Clone)]
pub struct StoredSearch {
    pub request: SearchRequest,
    pub envelope: SearchEnvelope,
}

#[derive(Default)]
struct SessionState {
    next_seq: u64,
    committed_seq: u64,
    search: Option<StoredSearch>,
}

/// Concurrent map from session id to session state.
pub struct SessionStore {
    sessions: DashMap<String, SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Session id from the request cookie, if one is attached.
    pub fn existing(&self, headers: &HeaderMap) -> Option<String> {
        let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
        cookies
            .split(';')
            .find_map(|part| {
                part.trim()
                    .strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
            .filter(|sid| !sid.is_empty())
            .map(str::to_string)
    }

    /// Resolve the session for a request, minting a fresh id when none is
    /// attached yet. The second value is the `Set-Cookie` header to send back
    /// for a fresh session.
    pub fn attach(&self, headers: &HeaderMap) -> (String, Option<String>) {
        if let Some(sid) = self.existing(headers) {
            return (sid, None);
        }
        let sid = uuid::Uuid::new_v4().to_string();
        let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, sid);
        (sid, Some(cookie))
    }

    /// Allocate the sequence number for a new submission in this session.
    pub fn begin(&self, sid: &str) -> u64 {
        let mut state = self.sessions.entry(sid.to_string()).or_default();
        state.next_seq += 1;
        state.next_seq
    }

    /// Install a completed search unless a later submission already committed.
    /// Returns false when the response was stale and has been discarded.
    pub fn commit(&self, sid: &str, seq: u64, search: StoredSearch) -> bool {
        let mut state = self.sessions.entry(sid.to_string()).or_default();
        if seq < state.committed_seq {
            return false;
        }
        state.committed_seq = seq;
        state.search = Some(search);
        true
    }

    /// The cached last search for a session.
    pub fn stored(&self, sid: &str) -> Option<StoredSearch> {
        self.sessions.get(sid).and_then(|state| state.search.clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
