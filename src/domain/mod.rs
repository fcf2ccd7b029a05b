mod models;
mod repository;
mod view;

// Publicly expose the persistence abstraction
pub use repository::{Repository, RepositoryPtr};

// Publicly expose the domain models
pub use models::{Game, GameDraft, GameFilters, GameStats, User};

// Publicly expose the view-rendering abstraction
pub use view::{Page, RendererPtr, ViewRenderer};

// Database lifecycle lives in infrastructure; re-exported here so binaries
// and tests can initialize storage without reaching into infrastructure.
pub use crate::infrastructure::init_database_with_retry_from_env;
