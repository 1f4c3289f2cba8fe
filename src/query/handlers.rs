use std::sync::Arc;

use axum::Extension;
use axum::extract::Query;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::grid::state::GridState;
use crate::render::page::{self, FormView};
use crate::render::table::GridOptions;
use crate::session::store::{SessionStore, StoredSearch};

use super::client::BackendClient;
use super::validate::{SearchForm, validate_form};

/// The search page with a blank form.
pub async fn handle_index() -> Html<String> {
    Html(page::render_page(&FormView::blank(), None, None))
}

/// The submission route. Validates the form, issues exactly one backend
/// request, commits the response into the session, and renders the results
/// page — or takes the error path (message shown, table hidden).
pub async fn handle_search(
    Query(form): Query<SearchForm>,
    Extension(client): Extension<Arc<BackendClient>>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    headers: HeaderMap,
) -> Response {
    let (sid, set_cookie) = sessions.attach(&headers);

    let request = match validate_form(&form) {
        Ok(request) => request,
        Err(errors) => {
            let view = FormView::from_form(&form, errors);
            let html = page::render_page(&view, None, None);
            let response = (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response();
            return with_session_cookie(response, set_cookie);
        }
    };

    let seq = sessions.begin(&sid);
    tracing::info!("search #{}: \"{}\" (size {})", seq, request.query, request.size);

    match client.search(&request).await {
        Ok(envelope) => {
            tracing::debug!("search #{} returned {} results", seq, envelope.results.len());
            let stored = StoredSearch { request, envelope };
            if !sessions.commit(&sid, seq, stored.clone()) {
                // A later submission already answered; its table state stays.
                tracing::debug!("discarding stale response for search #{}", seq);
            }
            let html =
                page::render_results_page(&stored, &GridState::default(), GridOptions::interactive());
            with_session_cookie((StatusCode::OK, Html(html)).into_response(), set_cookie)
        }
        Err(err) => {
            tracing::error!("search #{} failed: {}", seq, err);
            let message = format!("The search has failed. Please try again. ({})", err);
            let view = FormView::from_request(&request);
            let html = page::render_page(&view, Some(&message), None);
            let response = (StatusCode::BAD_GATEWAY, Html(html)).into_response();
            with_session_cookie(response, set_cookie)
        }
    }
}

fn with_session_cookie(mut response: Response, set_cookie: Option<String>) -> Response {
    if let Some(cookie) = set_cookie
        && let Ok(value) = HeaderValue::from_str(&cookie)
    {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}
