// Test helpers are intentionally partially used
#![allow(dead_code)]

use ludoteca::create_router;
use ludoteca::domain::init_database_with_retry_from_env;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::Once;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

macro_rules! set_env_if_unset {
    // ---
    ($key:expr, $val:expr) => {
        if std::env::var($key).is_err() {
            std::env::set_var($key, $val);
        }
    };
}

static INIT: Once = Once::new();

// ============================================================================
// Test Setup
// ============================================================================

/// Initialize test environment (database, env vars) once.
///
/// The database lives in a per-process temp file so every pooled connection
/// sees the same data for the lifetime of the test process. (`sqlite::memory:`
/// cannot be used here: each `#[tokio::test]` runs on its own runtime, and a
/// reopened pool connection would get a fresh, schema-less in-memory database.)
pub async fn setup_test_env() {
    // ---
    INIT.call_once(|| {
        // ---
        let db_path = std::env::temp_dir().join(format!("ludoteca_test_{}.db", std::process::id()));
        set_env_if_unset!("DATABASE_URL", format!("sqlite://{}", db_path.display()));
        set_env_if_unset!("LUDOTECA_DB_MIN_CONNECTIONS", "1");
        set_env_if_unset!("LUDOTECA_DB_MAX_CONNECTIONS", "1");
    });

    // Database init OUTSIDE call_once (but it's idempotent anyway)
    let _ = init_database_with_retry_from_env().await;
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        // --
        setup_test_env().await;

        let app = create_router().expect("Should be able to create router");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        // Cookies carry the session; redirects stay visible so tests can
        // assert on them.
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}

/// Pulls the game id out of a rendered list page by locating the edit link
/// in the row for `title`.
pub fn extract_game_id(html: &str, title: &str) -> i64 {
    // ---
    let row = html.find(title).expect("title not present in page");
    let rest = &html[row..];

    let link = rest
        .find("/videojuegos/")
        .expect("no edit link after title");
    let digits: String = rest[link + "/videojuegos/".len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().expect("edit link carries no numeric id")
}

/// A username that is unique across runs against a persistent database.
pub fn unique_username(prefix: &str) -> String {
    // ---
    format!(
        "{prefix}_{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis()
    )
}
