//! Login, logout, and registration.
//!
//! Failed logins re-present the form with one generic message and no hint of
//! which field was wrong. A duplicate username at registration is caught and
//! re-presented the same way; it never surfaces as a storage error.

use crate::app_state::AppState;
use crate::domain::Page;
use crate::handlers::internal_error;
use crate::session::SESSION_COOKIE;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

/// Credential form payload; field names match the reference UI.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    // ---
    pub usuario: String,
    pub password: String,
}

/// Handler for the login form (GET /login).
pub async fn login_form(State(state): State<AppState>) -> Html<String> {
    // ---
    Html(state.views().render(&Page::Login { error: None }))
}

/// Handler for login submission (POST /login).
///
/// On success, creates a session, sets the session cookie, and redirects to
/// the game list. On bad credentials, re-renders the form with an error.
#[tracing::instrument(skip(state, jar, form))]
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<Credentials>,
) -> Result<Response, StatusCode> {
    // ---
    let user = state
        .repository()
        .find_user_by_credentials(&form.usuario, &form.password)
        .await
        .map_err(internal_error)?;

    let Some(user) = user else {
        let page = Page::Login {
            error: Some("Usuario o contraseña incorrectos".to_string()),
        };
        return Ok(Html(state.views().render(&page)).into_response());
    };

    let token = state.sessions().create(user.id, user.username.clone());
    let jar = jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true),
    );

    Ok((jar, Redirect::to("/videojuegos")).into_response())
}

/// Handler for the registration form (GET /register).
pub async fn register_form(State(state): State<AppState>) -> Html<String> {
    // ---
    Html(state.views().render(&Page::Register { error: None }))
}

/// Handler for registration submission (POST /register).
///
/// Inserts the account and redirects to the login form. A taken username
/// re-renders the registration form with a message.
#[tracing::instrument(skip(state, form))]
pub async fn register_submit(
    State(state): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<Response, StatusCode> {
    // ---
    let created = state
        .repository()
        .create_user(&form.usuario, &form.password)
        .await
        .map_err(internal_error)?;

    match created {
        Some(user) => {
            tracing::info!("Registered user: {}", user.username);
            Ok(Redirect::to("/login").into_response())
        }
        None => {
            let page = Page::Register {
                error: Some("El nombre de usuario ya está en uso".to_string()),
            };
            Ok(Html(state.views().render(&page)).into_response())
        }
    }
}

/// Handler for logout (GET /logout).
///
/// Destroys the server-side session, clears the cookie, and redirects home.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    // ---
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions().destroy(cookie.value());
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    (jar, Redirect::to("/"))
}
