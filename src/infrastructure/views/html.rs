//! Built-in HTML renderer.
//!
//! Turns [`Page`] data objects into complete HTML documents: a shared layout
//! plus one body per page. All dynamic values pass through [`escape`].

use crate::domain::{Game, GameFilters, GameStats, Page, RendererPtr, ViewRenderer};
use std::sync::Arc;

pub fn create_html_renderer() -> RendererPtr {
    // ---
    Arc::new(HtmlRenderer)
}

pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    // ---
    fn render(&self, page: &Page) -> String {
        // ---
        match page {
            Page::Login { error } => layout(
                "Iniciar sesión",
                None,
                &auth_form("/login", "Iniciar sesión", error.as_deref()),
            ),
            Page::Register { error } => layout(
                "Registrarse",
                None,
                &auth_form("/register", "Registrarse", error.as_deref()),
            ),
            Page::Dashboard { username, stats } => {
                layout("Inicio", Some(username), &dashboard_body(stats))
            }
            Page::GameList {
                username,
                games,
                filters,
            } => layout(
                "Mis videojuegos",
                Some(username),
                &game_list_body(games, filters),
            ),
            Page::GameForm { username, game } => {
                let title = if game.is_some() {
                    "Editar videojuego"
                } else {
                    "Nuevo videojuego"
                };
                layout(title, Some(username), &game_form_body(game.as_ref()))
            }
        }
    }
}

/// Minimal HTML entity escaping for attribute and text positions.
fn escape(value: &str) -> String {
    // ---
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Shared page chrome. The nav reflects session state: authenticated pages
/// show the username and the private links, public pages the auth links.
fn layout(title: &str, username: Option<&str>, body: &str) -> String {
    // ---
    let nav = match username {
        Some(name) => format!(
            concat!(
                r#"<span>Hola, {}</span> "#,
                r#"<a href="/">Inicio</a> "#,
                r#"<a href="/videojuegos">Mis videojuegos</a> "#,
                r#"<a href="/videojuegos/nuevo">Nuevo</a> "#,
                r#"<a href="/logout">Cerrar sesión</a>"#
            ),
            escape(name)
        ),
        None => concat!(
            r#"<a href="/login">Iniciar sesión</a> "#,
            r#"<a href="/register">Registrarse</a>"#
        )
        .to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>{title} — Ludoteca</title>
</head>
<body>
  <nav>{nav}</nav>
  <main>
    <h1>{title}</h1>
{body}
  </main>
</body>
</html>
"#
    )
}

fn auth_form(action: &str, submit: &str, error: Option<&str>) -> String {
    // ---
    let error_html = match error {
        Some(message) => format!(r#"    <p class="error">{}</p>"#, escape(message)),
        None => String::new(),
    };

    format!(
        r#"{error_html}
    <form method="post" action="{action}">
      <label>Usuario <input type="text" name="usuario" required></label>
      <label>Contraseña <input type="password" name="password" required></label>
      <button type="submit">{submit}</button>
    </form>"#
    )
}

fn dashboard_body(stats: &GameStats) -> String {
    // ---
    format!(
        r#"    <ul class="stats">
      <li>Total: <strong>{}</strong></li>
      <li>Pendientes: <strong>{}</strong></li>
      <li>Jugando: <strong>{}</strong></li>
      <li>Completados: <strong>{}</strong></li>
    </ul>"#,
        stats.total, stats.pendientes, stats.jugando, stats.completados
    )
}

fn status_options(selected: Option<&str>) -> String {
    // ---
    let mut options = String::from(r#"<option value="">-- Todos --</option>"#);
    for status in ["pendiente", "jugando", "completado"] {
        let marker = if selected == Some(status) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{status}"{marker}>{status}</option>"#
        ));
    }
    options
}

fn game_list_body(games: &[Game], filters: &GameFilters) -> String {
    // ---
    let filter_form = format!(
        r#"    <form method="get" action="/videojuegos">
      <input type="text" name="platform" placeholder="Plataforma" value="{}">
      <input type="text" name="genre" placeholder="Género" value="{}">
      <select name="status">{}</select>
      <button type="submit">Filtrar</button>
    </form>"#,
        escape(filters.platform.as_deref().unwrap_or("")),
        escape(filters.genre.as_deref().unwrap_or("")),
        status_options(filters.status.as_deref().filter(|s| !s.is_empty())),
    );

    if games.is_empty() {
        return format!("{filter_form}\n    <p>No hay videojuegos todavía.</p>");
    }

    let rows: String = games
        .iter()
        .map(|game| {
            format!(
                r#"      <tr>
        <td>{}</td><td>{}</td><td>{}</td><td>{}</td>
        <td>
          <a href="/videojuegos/{}/editar">Editar</a>
          <form method="post" action="/videojuegos/{}/borrar"><button type="submit">Borrar</button></form>
        </td>
      </tr>
"#,
                escape(&game.title),
                escape(&game.platform),
                escape(&game.genre),
                escape(&game.status),
                game.id,
                game.id,
            )
        })
        .collect();

    format!(
        r#"{filter_form}
    <table>
      <tr><th>Título</th><th>Plataforma</th><th>Género</th><th>Estado</th><th></th></tr>
{rows}    </table>"#
    )
}

fn game_form_body(game: Option<&Game>) -> String {
    // ---
    let action = match game {
        Some(game) => format!("/videojuegos/{}/editar", game.id),
        None => "/videojuegos/nuevo".to_string(),
    };

    let (title, platform, genre, status) = match game {
        Some(game) => (
            escape(&game.title),
            escape(&game.platform),
            escape(&game.genre),
            Some(game.status.as_str()),
        ),
        None => (String::new(), String::new(), String::new(), None),
    };

    // No "all" placeholder here; the new-game form defaults to "pendiente".
    let mut options = String::new();
    for candidate in ["pendiente", "jugando", "completado"] {
        let marker = if status.map_or(candidate == "pendiente", |s| s == candidate) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{candidate}"{marker}>{candidate}</option>"#
        ));
    }

    format!(
        r#"    <form method="post" action="{action}">
      <label>Título <input type="text" name="title" value="{title}" required></label>
      <label>Plataforma <input type="text" name="platform" value="{platform}" required></label>
      <label>Género <input type="text" name="genre" value="{genre}" required></label>
      <label>Estado <select name="status">{options}</select></label>
      <button type="submit">Guardar</button>
    </form>"#
    )
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn sample_game() -> Game {
        // ---
        Game {
            id: 42,
            title: "Hollow Knight".to_string(),
            platform: "Switch".to_string(),
            genre: "Metroidvania".to_string(),
            status: "jugando".to_string(),
            user_id: 1,
        }
    }

    #[test]
    fn escape_neutralizes_markup() {
        // ---
        assert_eq!(
            escape(r#"<b>"a" & b</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;"
        );
    }

    #[test]
    fn login_page_carries_error_message() {
        // ---
        let renderer = HtmlRenderer;

        let clean = renderer.render(&Page::Login { error: None });
        assert!(clean.contains(r#"action="/login""#));
        assert!(!clean.contains("class=\"error\""));

        let failed = renderer.render(&Page::Login {
            error: Some("Usuario o contraseña incorrectos".to_string()),
        });
        assert!(failed.contains("Usuario o contraseña incorrectos"));
    }

    #[test]
    fn list_page_links_edit_and_delete_per_row() {
        // ---
        let renderer = HtmlRenderer;
        let html = renderer.render(&Page::GameList {
            username: "demo".to_string(),
            games: vec![sample_game()],
            filters: GameFilters::default(),
        });

        assert!(html.contains("Hollow Knight"));
        assert!(html.contains(r#"href="/videojuegos/42/editar""#));
        assert!(html.contains(r#"action="/videojuegos/42/borrar""#));
        assert!(html.contains("Hola, demo"));
    }

    #[test]
    fn list_page_preserves_active_filters() {
        // ---
        let renderer = HtmlRenderer;
        let html = renderer.render(&Page::GameList {
            username: "demo".to_string(),
            games: vec![],
            filters: GameFilters {
                platform: Some("Switch".to_string()),
                genre: None,
                status: Some("jugando".to_string()),
            },
        });

        assert!(html.contains(r#"name="platform" placeholder="Plataforma" value="Switch""#));
        assert!(html.contains(r#"<option value="jugando" selected>"#));
        assert!(html.contains("No hay videojuegos todavía."));
    }

    #[test]
    fn edit_form_is_prefilled() {
        // ---
        let renderer = HtmlRenderer;
        let html = renderer.render(&Page::GameForm {
            username: "demo".to_string(),
            game: Some(sample_game()),
        });

        assert!(html.contains(r#"action="/videojuegos/42/editar""#));
        assert!(html.contains(r#"value="Hollow Knight""#));
        assert!(html.contains(r#"<option value="jugando" selected>"#));
    }

    #[test]
    fn new_form_posts_to_nuevo() {
        // ---
        let renderer = HtmlRenderer;
        let html = renderer.render(&Page::GameForm {
            username: "demo".to_string(),
            game: None,
        });

        assert!(html.contains(r#"action="/videojuegos/nuevo""#));
        assert!(html.contains(r#"<option value="pendiente" selected>"#));
    }

    #[test]
    fn titles_are_escaped_in_lists() {
        // ---
        let renderer = HtmlRenderer;
        let mut game = sample_game();
        game.title = "<script>alert(1)</script>".to_string();

        let html = renderer.render(&Page::GameList {
            username: "demo".to_string(),
            games: vec![game],
            filters: GameFilters::default(),
        });

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
