use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use log::LevelFilter;
use player_logging::{player_debug, player_error, player_info, player_warn};
use playlist_core::{update, AppState, AppViewModel, Msg};
use playlist_engine::{decode_text, EngineHandle, PageWriter};

use super::config::{load_config, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command, HELP_TEXT};
use super::ui::page::PageRenderer;
use super::ui::render::{status_lines, ConsoleRenderer};

const TICK_INTERVAL: Duration = Duration::from_millis(75);

/// What the console reader hands to the main loop.
enum Input {
    Msg(Msg),
    Status,
    Help,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let loaded = load_config(Path::new(CONFIG_FILENAME))?;
    let config = loaded.config.clone();
    player_logging::initialize(config.log_destination(), &config.log_file, LevelFilter::Info);
    loaded.report();

    let engine =
        EngineHandle::new(config.fetch_settings()).context("failed to start the metadata engine")?;
    let effects = EffectRunner::new(engine, config.auth_settings(), config.open_browser);
    let page = PageRenderer::new().context("failed to prepare the page template")?;
    let writer = PageWriter::new(&config.output_dir, &config.page_filename);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    thread::spawn(move || read_console(input_tx));

    let mut app = App {
        state: AppState::new(),
        effects,
        console: ConsoleRenderer::default(),
        page,
        writer,
    };

    println!("{HELP_TEXT}");
    let initial_view = app.state.view();
    app.present(&initial_view);
    app.dispatch(Msg::SessionCheck { now: Utc::now() });

    loop {
        match input_rx.recv_timeout(TICK_INTERVAL) {
            Ok(Input::Msg(msg)) => app.dispatch(msg),
            Ok(Input::Status) => {
                app.dispatch(Msg::SessionCheck { now: Utc::now() });
                for line in status_lines(&app.state.view()) {
                    println!("{line}");
                }
            }
            Ok(Input::Help) => println!("{HELP_TEXT}"),
            Ok(Input::Quit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => app.dispatch(Msg::Tick),
        }

        while let Some(msg) = app.effects.poll() {
            app.dispatch(msg);
        }
    }

    player_info!("Shutting down");
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
    console: ConsoleRenderer,
    page: PageRenderer,
    writer: PageWriter,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let dirty = state.consume_dirty();
        let view = dirty.then(|| state.view());
        self.state = state;

        self.effects.run(effects);
        if let Some(view) = view {
            self.present(&view);
        }
    }

    fn present(&mut self, view: &AppViewModel) {
        for line in self.console.render(view) {
            println!("{line}");
        }

        match self.page.render(view) {
            Ok(html) => match self.writer.publish(&html) {
                Ok(path) => player_debug!("Page written to {:?}", path),
                Err(err) => player_error!("Failed to write {:?}: {}", self.writer.target(), err),
            },
            Err(err) => player_error!("Failed to render page: {}", err),
        }
    }
}

fn read_console(tx: mpsc::Sender<Input>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                player_warn!("Console read failed: {}", err);
                break;
            }
        };

        let input = match parse_command(&line) {
            Ok(command) => to_input(command),
            Err(err) => {
                println!("! {err}");
                continue;
            }
        };
        let quit = matches!(input, Input::Quit);
        if tx.send(input).is_err() || quit {
            break;
        }
    }
    // Closing the channel on EOF ends the main loop.
}

fn to_input(command: Command) -> Input {
    match command {
        Command::Login => Input::Msg(Msg::LoginClicked),
        Command::Logout => Input::Msg(Msg::LogoutClicked),
        Command::Callback(callback) => Input::Msg(Msg::CallbackReceived {
            callback,
            now: Utc::now(),
        }),
        Command::Search(query) => Input::Msg(Msg::QueryChanged {
            query,
            now: Utc::now(),
        }),
        Command::Load(path) => Input::Msg(load_playlist(path)),
        Command::Status => Input::Status,
        Command::Help => Input::Help,
        Command::Quit => Input::Quit,
    }
}

fn load_playlist(path: PathBuf) -> Msg {
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return Msg::CsvLoadFailed {
                reason: format!("{}: {err}", path.display()),
            }
        }
    };
    match decode_text(&bytes) {
        Ok(decoded) => {
            player_info!(
                "Read {:?} ({} bytes, {})",
                path,
                bytes.len(),
                decoded.encoding_label
            );
            Msg::CsvLoaded {
                text: decoded.text,
                now: Utc::now(),
            }
        }
        Err(err) => Msg::CsvLoadFailed {
            reason: format!("{}: {err}", path.display()),
        },
    }
}
