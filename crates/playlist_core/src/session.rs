use chrono::{DateTime, Duration, Utc};

const MAX_LIFETIME_SECS: i64 = u32::MAX as i64;

/// Whether the player currently holds a usable access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Access token and its expiry.
///
/// A session is valid only while the token is non-empty and the expiry lies in
/// the future; [`Session::clear`] returns it to the logged-out shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Session for a token granted at `now` that lives for `expires_in_secs`.
    pub fn granted(token: impl Into<String>, expires_in_secs: i64, now: DateTime<Utc>) -> Self {
        let lifetime = Duration::try_seconds(expires_in_secs.clamp(0, MAX_LIFETIME_SECS))
            .unwrap_or_else(Duration::zero);
        Self::new(token, now + lifetime)
    }

    pub fn token(&self) -> Option<&str> {
        (!self.token.is_empty()).then_some(self.token.as_str())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty() && self.expires_at.is_some_and(|expiry| now < expiry)
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> SessionState {
        if self.is_valid_at(now) {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    pub fn clear(&mut self) {
        self.token.clear();
        self.expires_at = None;
    }
}

/// Token data carried back by the implicit-grant redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackToken {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Token(CallbackToken),
    /// The authorization server reported an error such as `access_denied`.
    Denied(String),
    /// Nothing usable in the callback.
    Empty,
}

/// Reads the redirect callback.
///
/// Accepts a full callback URL, a bare fragment, or a fragment with its
/// leading `#`. A missing or non-numeric `expires_in` counts as 0.
pub fn parse_callback(callback: &str) -> CallbackOutcome {
    let callback = callback.trim();
    let (before_fragment, fragment) = match callback.split_once('#') {
        Some((head, fragment)) => (head, fragment),
        None if callback.contains("://") => (callback, ""),
        None => ("", callback),
    };

    let mut access_token = None;
    let mut expires_in = None;
    let mut error = None;
    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match &*key {
            "access_token" if !value.is_empty() => access_token = Some(value.into_owned()),
            "expires_in" => expires_in = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(access_token) = access_token {
        let expires_in = expires_in
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);
        return CallbackOutcome::Token(CallbackToken {
            access_token,
            expires_in,
        });
    }

    // Errors from the authorization server arrive in the query string.
    let query = before_fragment
        .split_once('?')
        .map_or("", |(_, query)| query);
    error
        .or_else(|| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "error")
                .map(|(_, value)| value.into_owned())
        })
        .map_or(CallbackOutcome::Empty, CallbackOutcome::Denied)
}
