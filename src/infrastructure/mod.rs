mod database;
mod views;

// Re-export the factory and lifecycle functions for easy access
pub use database::{
    create_sqlite_repository, init_database_with_retry, init_database_with_retry_from_env,
};
pub use views::create_html_renderer;
