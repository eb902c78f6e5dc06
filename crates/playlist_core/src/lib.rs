//! Playlist core: pure state machine, CSV parsing and card mapping.
mod card;
mod csv;
mod duration;
mod effect;
mod filter;
mod msg;
mod record;
mod session;
mod state;
mod update;
mod view_model;

pub use card::{
    build_card, embed_url, track_id, CardView, Enrichment, EMBED_BASE_URL,
    PLACEHOLDER_ARTWORK_URL,
};
pub use csv::{parse_csv, CsvError};
pub use duration::format_duration;
pub use effect::Effect;
pub use filter::{filter_rows, matches_query};
pub use msg::Msg;
pub use record::{columns, RowRecord};
pub use session::{parse_callback, CallbackOutcome, CallbackToken, Session, SessionState};
pub use state::{AppState, RenderGeneration};
pub use update::{update, NOTICE_LOGIN_FIRST, NOTICE_SESSION_EXPIRED};
pub use view_model::AppViewModel;
