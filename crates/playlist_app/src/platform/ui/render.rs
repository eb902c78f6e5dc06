use playlist_core::{AppViewModel, CardView, RenderGeneration, SessionState};

/// Turns successive view models into console lines, printing only what changed.
#[derive(Debug, Default)]
pub(crate) struct ConsoleRenderer {
    shown_session: Option<SessionState>,
    shown_generation: Option<RenderGeneration>,
    shown_cards: usize,
    announced_done: bool,
}

impl ConsoleRenderer {
    pub fn render(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();

        if self.shown_session != Some(view.session) {
            self.shown_session = Some(view.session);
            lines.push(session_banner(view.session).to_string());
        }

        if self.shown_generation != Some(view.generation) {
            self.shown_generation = Some(view.generation);
            self.shown_cards = 0;
            self.announced_done = false;
            if view.expected_cards > 0 {
                lines.push(list_heading(view));
            } else if view.total_rows > 0 && !view.query.is_empty() {
                lines.push(format!("No tracks match \"{}\".", view.query));
                self.announced_done = true;
            }
        }

        for (index, card) in view.cards.iter().enumerate().skip(self.shown_cards) {
            lines.extend(format_card(index + 1, card));
        }
        self.shown_cards = self.shown_cards.max(view.cards.len());

        if !view.rendering && view.expected_cards > 0 && !self.announced_done {
            self.announced_done = true;
            if view.cards.len() < view.expected_cards {
                lines.push(format!(
                    "Stopped after {} of {} tracks.",
                    view.cards.len(),
                    view.expected_cards
                ));
            }
        }

        lines
    }
}

pub(crate) fn status_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("Session: {}", session_label(view.session))];
    if view.search_visible {
        lines.push(format!("Playlist: {} tracks loaded", view.total_rows));
        if !view.query.is_empty() {
            lines.push(format!("Search: \"{}\"", view.query));
        }
        let progress = if view.rendering { "loading" } else { "done" };
        lines.push(format!(
            "Showing: {} of {} ({progress})",
            view.cards.len(),
            view.expected_cards
        ));
    }
    lines
}

fn session_banner(session: SessionState) -> &'static str {
    match session {
        SessionState::LoggedIn => "Logged in. Use `load <file.csv>` and `search <text>`.",
        SessionState::LoggedOut => "Logged out. Use `login` to connect to Spotify.",
    }
}

fn session_label(session: SessionState) -> &'static str {
    match session {
        SessionState::LoggedIn => "logged in",
        SessionState::LoggedOut => "logged out",
    }
}

fn list_heading(view: &AppViewModel) -> String {
    if view.query.is_empty() {
        format!("── {} tracks ──", view.expected_cards)
    } else {
        format!(
            "── {} of {} tracks matching \"{}\" ──",
            view.expected_cards, view.total_rows, view.query
        )
    }
}

fn format_card(position: usize, card: &CardView) -> Vec<String> {
    let mut lines = vec![format!("[{position}] {}", card.title)];
    lines.push(format!("    {}", card.artist_line));
    lines.push(format!("    {}", card.album_line));
    if let Some(release) = &card.release_line {
        lines.push(format!("    {release}"));
    }
    lines.push(format!("    {}", card.duration_line));
    if let Some(popularity) = &card.popularity_line {
        lines.push(format!("    {popularity}"));
    }
    lines.push(format!("    Artwork: {}", card.artwork_url));
    lines.push(format!("    Player: {}", card.embed_url));
    lines
}
