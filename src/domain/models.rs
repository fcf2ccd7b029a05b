use serde::Deserialize;

/// A registered account.
///
/// Passwords are stored and compared as plaintext, matching the behavior of
/// the data this service inherits. Known weakness; do not reuse this table
/// for anything security-sensitive.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// One entry in a user's collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub platform: String,
    pub genre: String,
    pub status: String,
    pub user_id: i64,
}

/// The four descriptive fields of a game, as submitted by the new/edit forms.
///
/// The repository performs no validation on these values (no enum-membership
/// check on `status`, no non-empty check). The forms constrain input; the
/// storage layer stores what it is given.
#[derive(Debug, Clone, Deserialize)]
pub struct GameDraft {
    pub title: String,
    pub platform: String,
    pub genre: String,
    pub status: String,
}

/// Optional list filters, deserialized straight from the query string.
///
/// `platform` and `genre` are case-sensitive infix matches, `status` is an
/// exact match. Missing or empty values impose no constraint; filters combine
/// with logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameFilters {
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
}

/// Per-status counts for the dashboard, computed in one aggregate pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub total: i64,
    pub pendientes: i64,
    pub jugando: i64,
    pub completados: i64,
}
