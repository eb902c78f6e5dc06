//! Playlist engine: metadata lookups, render passes and file IO.
mod auth;
mod decode;
mod engine;
mod fetch;
mod output;
mod types;

pub use auth::{authorize_url, AuthSettings, AuthUrlError, DEFAULT_AUTHORIZE_ENDPOINT};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, MetadataFetcher, SpotifyFetcher, DEFAULT_API_BASE_URL};
pub use output::{prepare_output_dir, PageWriter, PersistError, DEFAULT_PAGE_FILENAME};
pub use types::{
    AlbumMetadata, EngineEvent, FailureKind, FetchError, ImageMetadata, TrackMetadata,
    ARTWORK_IMAGE_INDEX,
};
