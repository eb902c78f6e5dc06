use chrono::{DateTime, Utc};

use crate::{Enrichment, RenderGeneration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked to log in.
    LoginClicked,
    /// User asked to log out.
    LogoutClicked,
    /// The authorization redirect landed; `callback` is the URL or its fragment.
    CallbackReceived { callback: String, now: DateTime<Utc> },
    /// Opportunistic expiry check (start-up, status requests).
    SessionCheck { now: DateTime<Utc> },
    /// User picked a playlist file; `text` is its decoded content.
    CsvLoaded { text: String, now: DateTime<Utc> },
    /// The playlist file could not be read or decoded.
    CsvLoadFailed { reason: String },
    /// User edited the search box.
    QueryChanged { query: String, now: DateTime<Utc> },
    /// Engine finished the lookup for row `index` of a render pass.
    TrackResolved {
        generation: RenderGeneration,
        index: usize,
        enrichment: Option<Enrichment>,
    },
    /// Engine processed every row of a render pass.
    RenderPassFinished { generation: RenderGeneration },
    /// The remote service rejected the token during a render pass.
    AuthRejected { generation: RenderGeneration },
    /// UI/render tick to coalesce rendering.
    Tick,
}
