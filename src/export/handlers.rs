use std::sync::Arc;

use axum::Extension;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::render::page::{self, FormView};
use crate::session::store::SessionStore;

use super::csv::{EXPORT_FILE_NAME, export_csv};

/// Download the last search as `data.csv`. Requesting an export before any
/// search has been stored is an error surfaced to the user; the stored table
/// state is never disturbed by an export.
pub async fn handle_export(
    Extension(sessions): Extension<Arc<SessionStore>>,
    headers: HeaderMap,
) -> Response {
    let stored = sessions
        .existing(&headers)
        .and_then(|sid| sessions.stored(&sid));

    let Some(stored) = stored else {
        tracing::debug!("csv export requested with no stored search");
        let html = page::render_page(
            &FormView::blank(),
            Some("There is no search to export yet. Run a search first."),
            None,
        );
        return (StatusCode::NOT_FOUND, Html(html)).into_response();
    };

    match export_csv(&stored.envelope.results) {
        Ok(body) => {
            tracing::info!(
                "exporting {} rows as {}",
                stored.envelope.results.len(),
                EXPORT_FILE_NAME
            );
            let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("csv export failed: {}", err);
            let html = page::render_page(
                &FormView::from_request(&stored.request),
                Some("The export has failed. Please try again."),
                None,
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
        }
    }
}
