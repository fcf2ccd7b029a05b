// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

use handlers::{
    create_game, dashboard, delete_game, edit_game_form, health_check, list_games, login_form,
    login_submit, logout, new_game_form, register_form, register_submit, update_game,
};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod session;

// Hoist up only the public symbol(s)
pub use session::{CurrentUser, SessionInfo, SessionStore, SESSION_COOKIE};

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_html_renderer, // ---
    create_sqlite_repository,
};

/// Build the HTTP router over the already-initialized database.
///
/// Call `domain::init_database_with_retry_from_env` first; this function
/// fails when the shared pool is missing.
pub fn create_router() -> Result<Router> {
    // ---
    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    // Create infrastructure dependencies
    let repository = create_sqlite_repository()?;
    let sessions = SessionStore::new();
    let views = create_html_renderer();

    // Build application state with all dependencies
    let app_state = AppState::new(repository, sessions, views);

    let router = Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health_check))
        .route("/login", get(login_form).post(login_submit))
        .route("/register", get(register_form).post(register_submit))
        .route("/logout", get(logout))
        .route("/videojuegos", get(list_games))
        .route("/videojuegos/nuevo", get(new_game_form).post(create_game))
        .route("/videojuegos/{id}/editar", get(edit_game_form).post(update_game))
        .route("/videojuegos/{id}/borrar", post(delete_game))
        .with_state(app_state);

    Ok(router)
}
