use crate::{CardView, RenderGeneration, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub search_visible: bool,
    pub file_input_enabled: bool,
    pub query: String,
    pub total_rows: usize,
    pub generation: RenderGeneration,
    /// Rows in the current render pass; `cards.len()` of them are done.
    pub expected_cards: usize,
    pub cards: Vec<CardView>,
    pub rendering: bool,
    pub dirty: bool,
}
