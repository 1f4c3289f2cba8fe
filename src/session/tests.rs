//! Session Module Tests
//!
//! Validates cookie handling and the submission sequence guard that keeps a
//! stale response from overwriting newer table state.

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};

    use crate::query::types::{SearchEnvelope, SearchRequest};
    use crate::session::store::{SESSION_COOKIE, SessionStore, StoredSearch};

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn search(query: &str) -> StoredSearch {
        StoredSearch {
            request: SearchRequest {
                query: query.to_string(),
                size: 200,
                key: None,
                match_whole_word: false,
            },
            envelope: SearchEnvelope {
                results: vec![],
                query: query.to_string(),
                match_whole_word: false,
                message: String::new(),
            },
        }
    }

    // ============================================================
    // COOKIE TESTS
    // ============================================================

    #[test]
    fn test_attach_mints_fresh_session() {
        let store = SessionStore::new();

        let (sid, set_cookie) = store.attach(&HeaderMap::new());

        assert!(!sid.is_empty());
        let cookie = set_cookie.expect("fresh session should set a cookie");
        assert!(cookie.starts_with(&format!("{}={}", SESSION_COOKIE, sid)));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_attach_reuses_existing_session() {
        let store = SessionStore::new();
        let headers = headers_with_cookie("sid=abc-123");

        let (sid, set_cookie) = store.attach(&headers);

        assert_eq!(sid, "abc-123");
        assert!(set_cookie.is_none());
    }

    #[test]
    fn test_existing_parses_among_other_cookies() {
        let store = SessionStore::new();
        let headers = headers_with_cookie("theme=dark; sid=abc-123; lang=en");

        assert_eq!(store.existing(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_existing_ignores_empty_and_missing() {
        let store = SessionStore::new();

        assert_eq!(store.existing(&HeaderMap::new()), None);
        assert_eq!(store.existing(&headers_with_cookie("sid=")), None);
        assert_eq!(store.existing(&headers_with_cookie("sideboard=x")), None);
    }

    // ============================================================
    // SEQUENCE GUARD TESTS
    // ============================================================

    #[test]
    fn test_begin_allocates_increasing_sequence() {
        let store = SessionStore::new();

        assert_eq!(store.begin("s1"), 1);
        assert_eq!(store.begin("s1"), 2);
        // Sessions are independent
        assert_eq!(store.begin("s2"), 1);
    }

    #[test]
    fn test_commit_and_read_back() {
        let store = SessionStore::new();
        let seq = store.begin("s1");

        assert!(store.commit("s1", seq, search("love")));
        assert_eq!(store.stored("s1").unwrap().request.query, "love");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let store = SessionStore::new();
        let first = store.begin("s1");
        let second = store.begin("s1");

        // The later submission answers first
        assert!(store.commit("s1", second, search("second")));
        // The older response arrives late and must not overwrite
        assert!(!store.commit("s1", first, search("first")));

        assert_eq!(store.stored("s1").unwrap().request.query, "second");
    }

    #[test]
    fn test_stored_is_none_before_any_search() {
        let store = SessionStore::new();

        assert!(store.stored("nobody").is_none());

        store.begin("s1");
        assert!(store.stored("s1").is_none(), "begin alone must not store");
    }
}
