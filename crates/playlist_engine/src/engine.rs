use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use player_logging::{player_debug, player_info, player_warn};
use playlist_core::{RenderGeneration, RowRecord, Session};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, MetadataFetcher, SpotifyFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    StartPass {
        generation: RenderGeneration,
        rows: Vec<RowRecord>,
        session: Session,
    },
    CancelPass,
}

/// Runs render passes on a background runtime and reports per-row results.
///
/// At most one pass is live: starting a pass cancels the previous one. Rows
/// within a pass are looked up strictly one after another. A pass whose
/// session is rejected or runs out reports `AuthRejected` and ends without
/// `PassFinished`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = SpotifyFetcher::new(settings)?;
        Ok(Self::with_fetcher(Arc::new(fetcher)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn MetadataFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut live: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                if let Some(previous) = live.take() {
                    previous.cancel();
                }
                match command {
                    EngineCommand::StartPass {
                        generation,
                        rows,
                        session,
                    } => {
                        let cancel = CancellationToken::new();
                        live = Some(cancel.clone());
                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            run_pass(fetcher.as_ref(), generation, rows, session, cancel, event_tx)
                                .await;
                        });
                    }
                    EngineCommand::CancelPass => {}
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn start_pass(&self, generation: RenderGeneration, rows: Vec<RowRecord>, session: Session) {
        let _ = self.cmd_tx.send(EngineCommand::StartPass {
            generation,
            rows,
            session,
        });
    }

    pub fn cancel_pass(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelPass);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_pass(
    fetcher: &dyn MetadataFetcher,
    generation: RenderGeneration,
    rows: Vec<RowRecord>,
    mut session: Session,
    cancel: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    player_info!("Render pass {} started with {} rows", generation, rows.len());

    for (index, row) in rows.iter().enumerate() {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = fetcher.fetch_track(&mut session, row.track_uri()) => Some(result),
        };
        let Some(result) = result else {
            player_debug!("Render pass {} cancelled at row {}", generation, index);
            return;
        };

        let enrichment = match result {
            Ok(enrichment) => Some(enrichment),
            // Rejected or expired mid-pass: the remaining rows cannot be looked up.
            Err(err) if matches!(err.kind, FailureKind::Unauthorized | FailureKind::NoSession) => {
                player_info!(
                    "Render pass {} stopped at row {}: {}",
                    generation,
                    index,
                    err
                );
                let _ = event_tx.send(EngineEvent::AuthRejected { generation });
                return;
            }
            Err(err) => {
                player_warn!(
                    "Row {} of pass {} renders without metadata: {}",
                    index,
                    generation,
                    err
                );
                None
            }
        };

        if cancel.is_cancelled() {
            return;
        }
        let event = EngineEvent::TrackResolved {
            generation,
            index,
            enrichment,
        };
        if event_tx.send(event).is_err() {
            return;
        }
    }

    let _ = event_tx.send(EngineEvent::PassFinished { generation });
    player_info!("Render pass {} finished", generation);
}
