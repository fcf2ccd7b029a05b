// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod auth;
mod dashboard;
mod games;
mod health;

// Core handlers
pub use dashboard::dashboard;
pub use health::health_check;

// Authentication handlers
pub use auth::{login_form, login_submit, logout, register_form, register_submit};

// Game CRUD handlers
pub use games::{create_game, delete_game, edit_game_form, list_games, new_game_form, update_game};

/// Logs a repository failure and maps it to a bare 500.
///
/// No structured error body: every page in this app is HTML or a redirect.
pub(crate) fn internal_error(err: anyhow::Error) -> axum::http::StatusCode {
    // ---
    tracing::error!("Request failed: {err:?}");
    axum::http::StatusCode::INTERNAL_SERVER_ERROR
}
