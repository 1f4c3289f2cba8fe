use std::sync::Arc;

use axum::Extension;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::render::page::{self, FormView};
use crate::render::table::GridOptions;
use crate::session::store::SessionStore;

use super::state::{GridParams, GridState};

/// Re-render the cached result set for a page, sort, or filter change. No
/// backend call happens here; `plain=1` disables the interactive chrome and
/// shows the full set.
pub async fn handle_results(
    Query(params): Query<GridParams>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    headers: HeaderMap,
) -> Response {
    let stored = sessions
        .existing(&headers)
        .and_then(|sid| sessions.stored(&sid));

    let Some(stored) = stored else {
        let html = page::render_page(
            &FormView::blank(),
            Some("Nothing to show yet. Run a search first."),
            None,
        );
        return (StatusCode::NOT_FOUND, Html(html)).into_response();
    };

    let grid = GridState::from_params(&params);
    let options = if params.plain == Some(1) {
        GridOptions::plain()
    } else {
        GridOptions::interactive()
    };

    (
        StatusCode::OK,
        Html(page::render_results_page(&stored, &grid, options)),
    )
        .into_response()
}
