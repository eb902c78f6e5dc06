use std::fmt;

use playlist_core::{Enrichment, RenderGeneration};
use serde::Deserialize;

/// Spotify lists album images largest first; index 1 is the 300px rendition.
pub const ARTWORK_IMAGE_INDEX: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Lookup for row `index` of a render pass is done, successful or not.
    TrackResolved {
        generation: RenderGeneration,
        index: usize,
        enrichment: Option<Enrichment>,
    },
    /// The pass's token was rejected by the service or expired; the pass has stopped.
    AuthRejected { generation: RenderGeneration },
    /// Every row of the pass has been reported.
    PassFinished { generation: RenderGeneration },
}

/// Subset of the track lookup response the player reads.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TrackMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub album: Option<AlbumMetadata>,
    /// Kept loose so that a non-numeric value only drops the popularity line.
    #[serde(default)]
    pub popularity: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AlbumMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageMetadata {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl TrackMetadata {
    pub fn artwork_url(&self) -> Option<&str> {
        self.album
            .as_ref()
            .and_then(|album| album.images.get(ARTWORK_IMAGE_INDEX))
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Whole-number scores only, whether encoded as `77` or `77.0`.
    pub fn popularity(&self) -> Option<u32> {
        let value = self.popularity.as_ref()?;
        if let Some(score) = value.as_u64() {
            return u32::try_from(score).ok();
        }
        let score = value.as_f64()?;
        let whole = score.is_finite() && score.fract() == 0.0;
        (whole && (0.0..=f64::from(u32::MAX)).contains(&score)).then(|| score as u32)
    }

    pub fn into_enrichment(self) -> Enrichment {
        Enrichment {
            artwork_url: self.artwork_url().map(ToOwned::to_owned),
            popularity: self.popularity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// No token, or the token has expired; nothing was sent.
    NoSession,
    /// The service answered 401 and the session was cleared.
    Unauthorized,
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NoSession => write!(f, "no session"),
            FailureKind::Unauthorized => write!(f, "unauthorized"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
