//! Per-user game CRUD.
//!
//! Every handler here is guarded by the `CurrentUser` extractor and passes
//! the session's user id down to the repository, which scopes all SQL to the
//! owning account. Mutations redirect back to the list; an edit target that
//! is absent or not owned redirects instead of erroring.

use crate::app_state::AppState;
use crate::domain::{GameDraft, GameFilters, Page};
use crate::handlers::internal_error;
use crate::session::CurrentUser;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

/// Handler for the game list (GET /videojuegos).
///
/// Accepts optional `platform`, `genre`, and `status` query filters; absent
/// or empty values impose no constraint.
#[tracing::instrument(skip(state, user, filters))]
pub async fn list_games(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(filters): Query<GameFilters>,
) -> Result<Html<String>, StatusCode> {
    // ---
    let games = state
        .repository()
        .list_games(user.user_id, &filters)
        .await
        .map_err(internal_error)?;

    Ok(Html(state.views().render(&Page::GameList {
        username: user.username,
        games,
        filters,
    })))
}

/// Handler for the new-game form (GET /videojuegos/nuevo).
pub async fn new_game_form(State(state): State<AppState>, user: CurrentUser) -> Html<String> {
    // ---
    Html(state.views().render(&Page::GameForm {
        username: user.username,
        game: None,
    }))
}

/// Handler for saving a new game (POST /videojuegos/nuevo).
#[tracing::instrument(skip(state, user, draft))]
pub async fn create_game(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(draft): Form<GameDraft>,
) -> Result<Redirect, StatusCode> {
    // ---
    state
        .repository()
        .create_game(user.user_id, &draft)
        .await
        .map_err(internal_error)?;

    Ok(Redirect::to("/videojuegos"))
}

/// Handler for the edit form (GET /videojuegos/{id}/editar).
///
/// Pre-fills the form with the owned game; redirects to the list when the
/// game is absent or owned by another account.
#[tracing::instrument(skip(state, user))]
pub async fn edit_game_form(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, StatusCode> {
    // ---
    let game = state
        .repository()
        .get_owned_game(user.user_id, id)
        .await
        .map_err(internal_error)?;

    let Some(game) = game else {
        return Ok(Redirect::to("/videojuegos").into_response());
    };

    let page = Page::GameForm {
        username: user.username,
        game: Some(game),
    };
    Ok(Html(state.views().render(&page)).into_response())
}

/// Handler for saving an edit (POST /videojuegos/{id}/editar).
///
/// Overwrites all four descriptive fields of the owned row; a non-owned or
/// missing target is a silent no-op.
#[tracing::instrument(skip(state, user, draft))]
pub async fn update_game(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Form(draft): Form<GameDraft>,
) -> Result<Redirect, StatusCode> {
    // ---
    state
        .repository()
        .update_game(user.user_id, id, &draft)
        .await
        .map_err(internal_error)?;

    Ok(Redirect::to("/videojuegos"))
}

/// Handler for deleting a game (POST /videojuegos/{id}/borrar).
///
/// A non-owned or missing target is a silent no-op.
#[tracing::instrument(skip(state, user))]
pub async fn delete_game(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Redirect, StatusCode> {
    // ---
    state
        .repository()
        .delete_game(user.user_id, id)
        .await
        .map_err(internal_error)?;

    Ok(Redirect::to("/videojuegos"))
}
