use std::fmt;

use crate::view_model::AppViewModel;
use crate::{build_card, CardView, Enrichment, RowRecord, Session, SessionState};

/// Identifier of one render pass. Results stamped with an older generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RenderGeneration(u64);

impl RenderGeneration {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RenderGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct RenderPass {
    rows: Vec<RowRecord>,
    cards: Vec<CardView>,
    finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: Session,
    status: SessionState,
    rows: Vec<RowRecord>,
    query: String,
    generation: RenderGeneration,
    pass: RenderPass,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State that already holds a session, e.g. one carried over by the host.
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let logged_in = self.status == SessionState::LoggedIn;
        AppViewModel {
            session: self.status,
            search_visible: logged_in,
            file_input_enabled: logged_in,
            query: self.query.clone(),
            total_rows: self.rows.len(),
            generation: self.generation,
            expected_cards: self.pass.rows.len(),
            cards: self.pass.cards.clone(),
            rendering: self.is_rendering(),
            dirty: self.dirty,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> SessionState {
        self.status
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> RenderGeneration {
        self.generation
    }

    pub fn cards(&self) -> &[CardView] {
        &self.pass.cards
    }

    pub fn is_rendering(&self) -> bool {
        !self.pass.finished && self.pass.cards.len() < self.pass.rows.len()
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub(crate) fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    pub(crate) fn set_status(&mut self, status: SessionState) {
        if self.status != status {
            self.status = status;
            self.dirty = true;
        }
    }

    pub(crate) fn set_rows(&mut self, rows: Vec<RowRecord>) {
        self.rows = rows;
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
        self.dirty = true;
    }

    /// Clears the cards and opens a new pass over `rows`.
    pub(crate) fn begin_pass(&mut self, rows: Vec<RowRecord>) -> RenderGeneration {
        self.generation = self.generation.next();
        self.pass = RenderPass {
            rows,
            cards: Vec::new(),
            finished: false,
        };
        self.dirty = true;
        self.generation
    }

    /// Drops the current pass; results still in flight become stale.
    pub(crate) fn abandon_pass(&mut self) -> bool {
        let was_rendering = self.is_rendering();
        self.generation = self.generation.next();
        self.pass = RenderPass::default();
        self.dirty = true;
        was_rendering
    }

    pub(crate) fn pass_rows(&self) -> &[RowRecord] {
        &self.pass.rows
    }

    /// Appends the card for row `index` of the current pass.
    ///
    /// Cards are only accepted in row order; anything else is ignored.
    pub(crate) fn apply_resolved(&mut self, index: usize, enrichment: Option<&Enrichment>) -> bool {
        if index != self.pass.cards.len() {
            return false;
        }
        let Some(row) = self.pass.rows.get(index) else {
            return false;
        };
        let card = build_card(row, enrichment);
        self.pass.cards.push(card);
        self.dirty = true;
        true
    }

    pub(crate) fn finish_pass(&mut self) {
        if !self.pass.finished {
            self.pass.finished = true;
            self.dirty = true;
        }
    }
}
