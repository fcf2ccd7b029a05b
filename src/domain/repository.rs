use super::models::{Game, GameDraft, GameFilters, GameStats, User};
use anyhow::Result;
use std::sync::Arc;

/// Abstraction for user and game persistence.
///
/// Every game operation takes the owning `user_id` and is scoped to it in the
/// backing store; rows belonging to other users are invisible to reads and
/// untouchable by writes.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    // ---
    /// Create a new account. Returns `None` when the username is already
    /// taken, so the caller can re-present the registration form instead of
    /// surfacing a storage error.
    async fn create_user(&self, username: &str, password: &str) -> Result<Option<User>>;

    /// Look up a user by exact, case-sensitive credential match.
    async fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>>;

    /// Games owned by `user_id` matching all supplied filters, newest first.
    async fn list_games(&self, user_id: i64, filters: &GameFilters) -> Result<Vec<Game>>;

    /// Insert one game and return it with its assigned id.
    async fn create_game(&self, user_id: i64, draft: &GameDraft) -> Result<Game>;

    /// Fetch a single game scoped to its owner. `None` when absent or owned
    /// by someone else; callers redirect rather than erroring.
    async fn get_owned_game(&self, user_id: i64, game_id: i64) -> Result<Option<Game>>;

    /// Overwrite all four descriptive fields of an owned row. Silent no-op
    /// when no row matches both ids.
    async fn update_game(&self, user_id: i64, game_id: i64, draft: &GameDraft) -> Result<()>;

    /// Delete an owned row. Silent no-op when no row matches both ids.
    async fn delete_game(&self, user_id: i64, game_id: i64) -> Result<()>;

    /// Total and per-status counts for the dashboard.
    async fn game_stats(&self, user_id: i64) -> Result<GameStats>;

    /// Connectivity probe for the full-mode health check.
    async fn ping(&self) -> Result<()>;
}

/// Type alias for any backend that implements Repository.
pub type RepositoryPtr = Arc<dyn Repository>;
