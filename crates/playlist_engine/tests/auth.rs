use std::collections::HashMap;

use playlist_engine::{authorize_url, AuthSettings, AuthUrlError, DEFAULT_AUTHORIZE_ENDPOINT};

fn settings() -> AuthSettings {
    AuthSettings {
        client_id: "client-123".to_string(),
        redirect_uri: "https://player.example/callback/".to_string(),
        scopes: vec!["user-read-private".to_string(), "user-read-email".to_string()],
        ..AuthSettings::default()
    }
}

#[test]
fn authorize_url_requests_an_implicit_token() {
    let url = authorize_url(&settings()).unwrap();

    assert!(url.as_str().starts_with(DEFAULT_AUTHORIZE_ENDPOINT));
    let params: HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "client-123");
    assert_eq!(params["redirect_uri"], "https://player.example/callback/");
    assert_eq!(params["response_type"], "token");
    assert_eq!(params["show_dialog"], "true");
    assert_eq!(params["scope"], "user-read-private user-read-email");
    assert!(!params.contains_key("client_secret"));
}

#[test]
fn redirect_uri_is_encoded() {
    let url = authorize_url(&settings()).unwrap();
    assert!(url
        .query()
        .unwrap()
        .contains("redirect_uri=https%3A%2F%2Fplayer.example%2Fcallback%2F"));
}

#[test]
fn empty_scope_list_is_sent_empty() {
    let url = authorize_url(&AuthSettings {
        scopes: Vec::new(),
        ..settings()
    })
    .unwrap();
    let params: HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(params["scope"], "");
}

#[test]
fn missing_configuration_is_rejected() {
    assert!(matches!(
        authorize_url(&AuthSettings {
            client_id: " ".to_string(),
            ..settings()
        }),
        Err(AuthUrlError::MissingClientId)
    ));
    assert!(matches!(
        authorize_url(&AuthSettings {
            redirect_uri: String::new(),
            ..settings()
        }),
        Err(AuthUrlError::MissingRedirectUri)
    ));
    assert!(matches!(
        authorize_url(&AuthSettings {
            authorize_endpoint: "not a url".to_string(),
            ..settings()
        }),
        Err(AuthUrlError::InvalidEndpoint { .. })
    ));
}
