use chrono::{DateTime, TimeZone, Utc};
use playlist_core::{
    update, AppState, Effect, Enrichment, Msg, RenderGeneration, RowRecord, Session,
    PLACEHOLDER_ARTWORK_URL,
};
use pretty_assertions::assert_eq;

const CSV: &str = "Track URI,Track Name,Artist Name(s),Album Name,Release Date,Duration (ms)\n\
                   spotify:track:1,Alpha,X,Y,2001-01-01,61000\n\
                   spotify:track:2,Beta,Alpha Band,Z,,3599000\n\
                   spotify:track:3,Gamma,\"Q, R\",W,,0";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn session() -> Session {
    Session::granted("abc", 3600, now())
}

fn loaded() -> (AppState, RenderGeneration, Vec<RowRecord>) {
    let (state, _) = update(AppState::with_session(session()), Msg::SessionCheck { now: now() });
    let (state, effects) = update(
        state,
        Msg::CsvLoaded {
            text: CSV.to_string(),
            now: now(),
        },
    );
    match effects.as_slice() {
        [Effect::StartRenderPass {
            generation,
            rows,
            session: pass_session,
        }] => {
            assert_eq!(pass_session, &session());
            (state, *generation, rows.clone())
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

fn resolve(state: AppState, generation: RenderGeneration, index: usize) -> AppState {
    let (state, effects) = update(
        state,
        Msg::TrackResolved {
            generation,
            index,
            enrichment: None,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn loading_starts_a_pass_over_every_row() {
    let (state, generation, rows) = loaded();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].artist_names(), "Q, R");
    let view = state.view();
    assert_eq!(view.generation, generation);
    assert_eq!(view.expected_cards, 3);
    assert!(view.cards.is_empty());
    assert!(view.rendering);
}

#[test]
fn cards_are_appended_in_row_order() {
    let (state, generation, _) = loaded();
    let (state, _) = update(
        state,
        Msg::TrackResolved {
            generation,
            index: 0,
            enrichment: Some(Enrichment {
                artwork_url: Some("https://img.example/a.jpg".to_string()),
                popularity: Some(55),
            }),
        },
    );
    // Out of order results are not accepted.
    let state = resolve(state, generation, 2);
    let state = resolve(state, generation, 1);
    let state = resolve(state, generation, 2);

    let view = state.view();
    let titles: Vec<_> = view.cards.iter().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(view.cards[0].artwork_url, "https://img.example/a.jpg");
    assert_eq!(view.cards[0].popularity_line.as_deref(), Some("Popularity: 55"));
    assert_eq!(view.cards[0].duration_line, "Duration: 1:01");
    assert_eq!(view.cards[1].artwork_url, PLACEHOLDER_ARTWORK_URL);
    assert_eq!(view.cards[1].duration_line, "Duration: 59:59");
    assert_eq!(view.cards[1].release_line, None);
    assert!(!view.rendering);
}

#[test]
fn query_starts_a_new_pass_and_discards_stale_results() {
    let (state, first, _) = loaded();
    let state = resolve(state, first, 0);

    let (state, effects) = update(
        state,
        Msg::QueryChanged {
            query: "ALPHA".to_string(),
            now: now(),
        },
    );
    let second = match effects.as_slice() {
        [Effect::StartRenderPass {
            generation, rows, ..
        }] => {
            let titles: Vec<_> = rows.iter().map(RowRecord::track_name).collect();
            assert_eq!(titles, vec!["Alpha", "Beta"]);
            *generation
        }
        other => panic!("unexpected effects: {other:?}"),
    };
    assert!(second > first);
    assert_eq!(state.query(), "alpha");
    assert!(state.cards().is_empty());

    // A late result from the first pass must not leak into the new list.
    let state = resolve(state, first, 1);
    assert!(state.cards().is_empty());

    let state = resolve(state, second, 0);
    assert_eq!(state.cards().len(), 1);
    assert_eq!(state.cards()[0].title, "Alpha");
}

#[test]
fn empty_query_renders_everything_again() {
    let (state, _, _) = loaded();
    let (state, _) = update(
        state,
        Msg::QueryChanged {
            query: "zzz".to_string(),
            now: now(),
        },
    );
    assert_eq!(state.view().expected_cards, 0);

    let (state, _) = update(
        state,
        Msg::QueryChanged {
            query: String::new(),
            now: now(),
        },
    );
    assert_eq!(state.view().expected_cards, 3);
}

#[test]
fn finished_pass_stops_rendering_even_when_short() {
    let (state, generation, _) = loaded();
    let state = resolve(state, generation, 0);

    let (state, _) = update(state, Msg::RenderPassFinished { generation });

    let view = state.view();
    assert!(!view.rendering);
    assert_eq!(view.cards.len(), 1);
}

#[test]
fn malformed_file_keeps_previous_rows() {
    let (state, generation, _) = loaded();
    let (state, effects) = update(
        state,
        Msg::CsvLoaded {
            text: "Track Name\n\"open".to_string(),
            now: now(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Notify {
            message: "Could not read playlist: unterminated quoted field on line 2".to_string()
        }]
    );
    assert_eq!(state.rows().len(), 3);
    assert_eq!(state.generation(), generation);
}

#[test]
fn search_is_ignored_while_logged_out() {
    let (state, effects) = update(
        AppState::new(),
        Msg::QueryChanged {
            query: "alpha".to_string(),
            now: now(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.query(), "");
}
