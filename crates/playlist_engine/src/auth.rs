use url::Url;

pub const DEFAULT_AUTHORIZE_ENDPOINT: &str = "https://accounts.spotify.com/authorize";

/// Public-client parameters for the implicit grant. There is no client secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    pub authorize_endpoint: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    /// Force the consent dialog even when the user approved before.
    pub show_dialog: bool,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            authorize_endpoint: DEFAULT_AUTHORIZE_ENDPOINT.to_string(),
            client_id: String::new(),
            redirect_uri: String::new(),
            scopes: Vec::new(),
            show_dialog: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthUrlError {
    #[error("client id is not configured")]
    MissingClientId,
    #[error("redirect uri is not configured")]
    MissingRedirectUri,
    #[error("invalid authorize endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Builds the authorization request that returns a token in the redirect fragment.
pub fn authorize_url(settings: &AuthSettings) -> Result<Url, AuthUrlError> {
    if settings.client_id.trim().is_empty() {
        return Err(AuthUrlError::MissingClientId);
    }
    if settings.redirect_uri.trim().is_empty() {
        return Err(AuthUrlError::MissingRedirectUri);
    }

    let mut url =
        Url::parse(&settings.authorize_endpoint).map_err(|source| AuthUrlError::InvalidEndpoint {
            endpoint: settings.authorize_endpoint.clone(),
            source,
        })?;
    url.query_pairs_mut()
        .append_pair("client_id", &settings.client_id)
        .append_pair("redirect_uri", &settings.redirect_uri)
        .append_pair("response_type", "token")
        .append_pair("show_dialog", if settings.show_dialog { "true" } else { "false" })
        .append_pair("scope", &settings.scopes.join(" "));
    Ok(url)
}
