//! Static HTML rendition of the card list with the embedded players.

use minijinja::{context, Environment};
use playlist_core::{AppViewModel, CardView, SessionState};
use serde::Serialize;

const PAGE_TEMPLATE_NAME: &str = "playlist.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Playlist Player</title>
  <style>
    body { font-family: sans-serif; margin: 2rem; }
    .track { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1.5rem; }
    .track img { width: 64px; height: 64px; object-fit: cover; }
    .track-info h3 { margin: 0 0 .25rem 0; }
    .track-info p { margin: .1rem 0; }
    .spotify-embed { width: 300px; height: 80px; border: 0; }
  </style>
</head>
<body>
{% if logged_in %}
  {% if query %}<p class="search">Search: {{ query }}</p>{% endif %}
  <p class="summary">{{ cards | length }} of {{ expected }} tracks{% if rendering %} (loading){% endif %}</p>
  <div id="tracks-container">
  {% for card in cards %}
    <div class="track">
      <img src="{{ card.artwork_url }}" alt="{{ card.artwork_alt }}">
      <div class="track-info">
        <h3>{{ card.title }}</h3>
        <p>{{ card.artist_line }}</p>
        <p>{{ card.album_line }}</p>
        {% if card.release_line %}<p>{{ card.release_line }}</p>{% endif %}
        <p>{{ card.duration_line }}</p>
        {% if card.popularity_line %}<p>{{ card.popularity_line }}</p>{% endif %}
      </div>
      <iframe class="spotify-embed" src="{{ card.embed_url }}" frameborder="0" allow="encrypted-media"></iframe>
    </div>
  {% endfor %}
  </div>
{% else %}
  <p class="logged-out">Log in from the console to load a playlist.</p>
{% endif %}
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct CardContext<'a> {
    artwork_url: &'a str,
    artwork_alt: &'a str,
    title: &'a str,
    artist_line: &'a str,
    album_line: &'a str,
    release_line: Option<&'a str>,
    duration_line: &'a str,
    popularity_line: Option<&'a str>,
    embed_url: &'a str,
}

impl<'a> From<&'a CardView> for CardContext<'a> {
    fn from(card: &'a CardView) -> Self {
        Self {
            artwork_url: &card.artwork_url,
            artwork_alt: &card.artwork_alt,
            title: &card.title,
            artist_line: &card.artist_line,
            album_line: &card.album_line,
            release_line: card.release_line.as_deref(),
            duration_line: &card.duration_line,
            popularity_line: card.popularity_line.as_deref(),
            embed_url: &card.embed_url,
        }
    }
}

/// Renders templates with HTML auto-escaping (selected by the `.html` name).
pub(crate) struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &AppViewModel) -> Result<String, minijinja::Error> {
        let cards: Vec<CardContext<'_>> = view.cards.iter().map(CardContext::from).collect();
        self.env.get_template(PAGE_TEMPLATE_NAME)?.render(context! {
            logged_in => view.session == SessionState::LoggedIn,
            query => view.query.as_str(),
            rendering => view.rendering,
            expected => view.expected_cards,
            cards => cards,
        })
    }
}
