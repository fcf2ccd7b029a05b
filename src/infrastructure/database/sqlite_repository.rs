use anyhow::Result;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::{Game, GameDraft, GameFilters, GameStats, Repository, User};

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: i64,
    title: String,
    platform: String,
    genre: String,
    status: String,
    user_id: i64,
}

impl From<GameRow> for Game {
    // ---
    fn from(r: GameRow) -> Self {
        // ---
        Game {
            id: r.id,
            title: r.title,
            platform: r.platform,
            genre: r.genre,
            status: r.status,
            user_id: r.user_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total: i64,
    pendientes: i64,
    jugando: i64,
    completados: i64,
}

pub struct SqliteRepository {
    // ---
    pool: SqlitePool,
}

impl SqliteRepository {
    // ---
    pub fn new(pool: SqlitePool) -> Self {
        // ---
        Self { pool }
    }
}

/// Filters arrive straight from the query string; an empty input box submits
/// as an empty string, which imposes no constraint.
fn active(value: &Option<String>) -> Option<&str> {
    // ---
    value.as_deref().filter(|v| !v.is_empty())
}

#[async_trait::async_trait]
impl Repository for SqliteRepository {
    // ---
    async fn create_user(&self, username: &str, password: &str) -> Result<Option<User>> {
        // ---
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(Some(User {
                id: done.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })),
            // Username taken; surfaced as a value so the registration form
            // can be re-presented instead of failing the request.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        // ---
        // Plaintext comparison, exact and case-sensitive. Inherited contract;
        // swapping in hashing would break logins for existing rows.
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password FROM users WHERE username = ? AND password = ?",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| User {
            id: r.id,
            username: r.username,
            password: r.password,
        }))
    }

    async fn list_games(&self, user_id: i64, filters: &GameFilters) -> Result<Vec<Game>> {
        // ---
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, title, platform, genre, status, user_id FROM games WHERE user_id = ",
        );
        query.push_bind(user_id);

        if let Some(platform) = active(&filters.platform) {
            query.push(" AND platform LIKE ");
            query.push_bind(format!("%{platform}%"));
        }
        if let Some(genre) = active(&filters.genre) {
            query.push(" AND genre LIKE ");
            query.push_bind(format!("%{genre}%"));
        }
        if let Some(status) = active(&filters.status) {
            query.push(" AND status = ");
            query.push_bind(status.to_string());
        }

        query.push(" ORDER BY id DESC");

        let rows = query
            .build_query_as::<GameRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn create_game(&self, user_id: i64, draft: &GameDraft) -> Result<Game> {
        // ---
        let done = sqlx::query(
            "INSERT INTO games (title, platform, genre, status, user_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&draft.title)
        .bind(&draft.platform)
        .bind(&draft.genre)
        .bind(&draft.status)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(Game {
            id: done.last_insert_rowid(),
            title: draft.title.clone(),
            platform: draft.platform.clone(),
            genre: draft.genre.clone(),
            status: draft.status.clone(),
            user_id,
        })
    }

    async fn get_owned_game(&self, user_id: i64, game_id: i64) -> Result<Option<Game>> {
        // ---
        let row = sqlx::query_as::<_, GameRow>(
            "SELECT id, title, platform, genre, status, user_id FROM games
             WHERE id = ? AND user_id = ?",
        )
        .bind(game_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Game::from))
    }

    async fn update_game(&self, user_id: i64, game_id: i64, draft: &GameDraft) -> Result<()> {
        // ---
        let done = sqlx::query(
            "UPDATE games SET title = ?, platform = ?, genre = ?, status = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.platform)
        .bind(&draft.genre)
        .bind(&draft.status)
        .bind(game_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if done.rows_affected() == 0 {
            // Absent or not owned: silent no-op, never an error.
            tracing::debug!("Update matched no owned row (game {game_id}, user {user_id})");
        }

        Ok(())
    }

    async fn delete_game(&self, user_id: i64, game_id: i64) -> Result<()> {
        // ---
        let done = sqlx::query("DELETE FROM games WHERE id = ? AND user_id = ?")
            .bind(game_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if done.rows_affected() == 0 {
            // Absent or not owned: silent no-op, never an error.
            tracing::debug!("Delete matched no owned row (game {game_id}, user {user_id})");
        }

        Ok(())
    }

    async fn game_stats(&self, user_id: i64) -> Result<GameStats> {
        // ---
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT
                COUNT(*) AS total,
                COALESCE(SUM(CASE WHEN status = 'pendiente' THEN 1 ELSE 0 END), 0) AS pendientes,
                COALESCE(SUM(CASE WHEN status = 'jugando' THEN 1 ELSE 0 END), 0) AS jugando,
                COALESCE(SUM(CASE WHEN status = 'completado' THEN 1 ELSE 0 END), 0) AS completados
             FROM games WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(GameStats {
            total: row.total,
            pendientes: row.pendientes,
            jugando: row.jugando,
            completados: row.completados,
        })
    }

    async fn ping(&self) -> Result<()> {
        // ---
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
