use super::models::{Game, GameFilters, GameStats};
use std::sync::Arc;

/// Data object handed to the view renderer; one variant per page.
///
/// Authenticated pages carry the session's `username` so the layout can show
/// who is logged in, the way the reference UI does on every private page.
#[derive(Debug, Clone)]
pub enum Page {
    Login { error: Option<String> },
    Register { error: Option<String> },
    Dashboard { username: String, stats: GameStats },
    GameList { username: String, games: Vec<Game>, filters: GameFilters },
    /// `game` is `Some` for the edit form, `None` for the new-game form.
    GameForm { username: String, game: Option<Game> },
}

/// Abstraction for turning a page's data object into an HTML document.
pub trait ViewRenderer: Send + Sync + 'static {
    // ---
    fn render(&self, page: &Page) -> String;
}

/// Type alias for any backend that implements ViewRenderer.
pub type RendererPtr = Arc<dyn ViewRenderer>;
