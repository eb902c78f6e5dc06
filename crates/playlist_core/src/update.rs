use chrono::{DateTime, Utc};

use crate::{
    filter_rows, parse_callback, parse_csv, AppState, CallbackOutcome, Effect, Msg, Session,
    SessionState,
};

pub const NOTICE_LOGIN_FIRST: &str = "Please login to Spotify first.";
pub const NOTICE_SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoginClicked => vec![Effect::BeginAuthorization],
        Msg::LogoutClicked => {
            let mut effects = enter_logged_out(&mut state);
            effects.push(Effect::ClearCallback);
            effects
        }
        Msg::CallbackReceived { callback, now } => match parse_callback(&callback) {
            CallbackOutcome::Token(token) => {
                state.set_session(Session::granted(
                    token.access_token,
                    token.expires_in,
                    now,
                ));
                let mut effects = vec![Effect::ClearCallback];
                effects.extend(check_session(&mut state, now));
                effects
            }
            CallbackOutcome::Denied(reason) => {
                let mut effects = vec![
                    Effect::ClearCallback,
                    Effect::Notify {
                        message: format!("Authorization failed: {reason}"),
                    },
                ];
                effects.extend(check_session(&mut state, now));
                effects
            }
            CallbackOutcome::Empty => check_session(&mut state, now),
        },
        Msg::SessionCheck { now } => check_session(&mut state, now),
        Msg::CsvLoaded { text, now } => match parse_csv(&text) {
            Ok(rows) => {
                let mut effects = check_session(&mut state, now);
                state.set_rows(rows);
                state.set_query(String::new());
                if state.status() == SessionState::LoggedIn {
                    effects.push(start_pass(&mut state));
                } else {
                    effects.push(notify(NOTICE_LOGIN_FIRST));
                }
                effects
            }
            Err(err) => vec![notify(format!("Could not read playlist: {err}"))],
        },
        Msg::CsvLoadFailed { reason } => {
            vec![notify(format!("Could not read playlist: {reason}"))]
        }
        Msg::QueryChanged { query, now } => {
            if state.status() != SessionState::LoggedIn {
                // Search is hidden while logged out.
                return (state, Vec::new());
            }
            state.set_query(query.to_lowercase());
            let mut effects = check_session(&mut state, now);
            if state.status() == SessionState::LoggedIn {
                effects.push(start_pass(&mut state));
            } else {
                effects.push(notify(NOTICE_LOGIN_FIRST));
            }
            effects
        }
        Msg::TrackResolved {
            generation,
            index,
            enrichment,
        } => {
            if generation == state.generation() {
                state.apply_resolved(index, enrichment.as_ref());
            }
            Vec::new()
        }
        Msg::RenderPassFinished { generation } => {
            if generation == state.generation() {
                state.finish_pass();
            }
            Vec::new()
        }
        Msg::AuthRejected { generation } => {
            if generation == state.generation() {
                let mut effects = enter_logged_out(&mut state);
                effects.push(notify(NOTICE_SESSION_EXPIRED));
                effects
            } else {
                Vec::new()
            }
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

/// Moves to whichever state the held session allows at `now`.
fn check_session(state: &mut AppState, now: DateTime<Utc>) -> Vec<Effect> {
    if state.session().is_valid_at(now) {
        state.set_status(SessionState::LoggedIn);
        Vec::new()
    } else {
        enter_logged_out(state)
    }
}

fn enter_logged_out(state: &mut AppState) -> Vec<Effect> {
    state.session_mut().clear();
    if state.status() == SessionState::LoggedOut {
        return Vec::new();
    }

    state.set_status(SessionState::LoggedOut);
    state.set_rows(Vec::new());
    state.set_query(String::new());
    if state.abandon_pass() {
        vec![Effect::CancelRenderPass]
    } else {
        Vec::new()
    }
}

fn start_pass(state: &mut AppState) -> Effect {
    let rows = filter_rows(state.rows(), state.query());
    let generation = state.begin_pass(rows);
    Effect::StartRenderPass {
        generation,
        rows: state.pass_rows().to_vec(),
        session: state.session().clone(),
    }
}

fn notify(message: impl Into<String>) -> Effect {
    Effect::Notify {
        message: message.into(),
    }
}
