use std::time::Duration;

use chrono::Utc;
use player_logging::{player_debug, player_error, player_warn};
use playlist_core::{track_id, Enrichment, Session};
use reqwest::StatusCode;

use crate::{FailureKind, FetchError, TrackMetadata};

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_base_url: String,
    /// No timeouts unless configured; a lookup is a single attempt either way.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Looks up enrichment for one track on behalf of a session.
///
/// Implementations clear `session` when the service rejects its token, so
/// later calls with the same session short-circuit without a request.
#[async_trait::async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch_track(
        &self,
        session: &mut Session,
        track_uri: &str,
    ) -> Result<Enrichment, FetchError>;
}

#[derive(Debug, Clone)]
pub struct SpotifyFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl SpotifyFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// `{api_base_url}/tracks/{id}` with the id taken from the track reference.
    pub fn track_url(&self, track_uri: &str) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&self.settings.api_base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot have a path"))?
            .pop_if_empty()
            .push("tracks")
            .push(track_id(track_uri));
        Ok(url)
    }
}

#[async_trait::async_trait]
impl MetadataFetcher for SpotifyFetcher {
    async fn fetch_track(
        &self,
        session: &mut Session,
        track_uri: &str,
    ) -> Result<Enrichment, FetchError> {
        let token = match session.token() {
            Some(token) if session.is_valid_at(Utc::now()) => token.to_string(),
            _ => {
                return Err(FetchError::new(
                    FailureKind::NoSession,
                    "no valid access token",
                ))
            }
        };
        let url = self.track_url(track_uri)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| {
                player_error!("Fetch error for {}: {}", track_uri, err);
                map_reqwest_error(err)
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            player_warn!("Access token rejected while fetching {}", track_uri);
            session.clear();
            return Err(FetchError::new(
                FailureKind::Unauthorized,
                status.to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            player_error!("Failed to fetch track {}: {} {}", track_uri, status, body);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(|err| {
            player_error!("Fetch error for {}: {}", track_uri, err);
            map_reqwest_error(err)
        })?;
        let metadata: TrackMetadata = serde_json::from_slice(&body).map_err(|err| {
            player_error!("Unreadable track response for {}: {}", track_uri, err);
            FetchError::new(FailureKind::Decode, err.to_string())
        })?;
        player_debug!(
            "Fetched {} ({})",
            track_uri,
            metadata.name.as_deref().unwrap_or("untitled")
        );
        Ok(metadata.into_enrichment())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
