use player_logging::{player_debug, player_error, player_info, player_warn};
use playlist_core::{Effect, Msg};
use playlist_engine::{authorize_url, AuthSettings, EngineEvent, EngineHandle};

/// Executes core effects against the engine and the console.
pub struct EffectRunner {
    engine: EngineHandle,
    auth: AuthSettings,
    open_browser: bool,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, auth: AuthSettings, open_browser: bool) -> Self {
        Self {
            engine,
            auth,
            open_browser,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::BeginAuthorization => self.begin_authorization(),
                Effect::ClearCallback => {
                    // Pasted callbacks are never stored, so there is nothing to clear.
                    player_debug!("Callback consumed");
                }
                Effect::StartRenderPass {
                    generation,
                    rows,
                    session,
                } => {
                    player_info!(
                        "StartRenderPass generation={} rows={}",
                        generation,
                        rows.len()
                    );
                    self.engine.start_pass(generation, rows, session);
                }
                Effect::CancelRenderPass => {
                    player_info!("CancelRenderPass");
                    self.engine.cancel_pass();
                }
                Effect::Notify { message } => {
                    player_info!("Notice: {}", message);
                    println!("! {message}");
                }
            }
        }
    }

    /// Next engine result as a message for the core, if one is waiting.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    fn begin_authorization(&self) {
        let url = match authorize_url(&self.auth) {
            Ok(url) => url,
            Err(err) => {
                player_error!("Cannot build authorization url: {}", err);
                println!("! Cannot start login: {err}");
                return;
            }
        };

        player_info!("Authorization requested");
        println!("Log in at:\n  {url}");
        println!("Then paste the address you are sent back to: callback <address>");
        if self.open_browser {
            if let Err(err) = webbrowser::open(url.as_str()) {
                player_warn!("Could not open a browser: {}", err);
            }
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TrackResolved {
            generation,
            index,
            enrichment,
        } => Msg::TrackResolved {
            generation,
            index,
            enrichment,
        },
        EngineEvent::AuthRejected { generation } => Msg::AuthRejected { generation },
        EngineEvent::PassFinished { generation } => Msg::RenderPassFinished { generation },
    }
}
