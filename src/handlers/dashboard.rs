use crate::app_state::AppState;
use crate::domain::Page;
use crate::handlers::internal_error;
use crate::session::CurrentUser;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

/// Handler for the dashboard (GET /).
///
/// Guarded: anonymous requests are redirected to the login form by the
/// `CurrentUser` extractor. Shows total and per-status counts for the
/// session's collection.
#[tracing::instrument(skip(state, user))]
pub async fn dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, StatusCode> {
    // ---
    let stats = state
        .repository()
        .game_stats(user.user_id)
        .await
        .map_err(internal_error)?;

    Ok(Html(state.views().render(&Page::Dashboard {
        username: user.username,
        stats,
    })))
}
