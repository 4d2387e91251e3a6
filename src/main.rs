//! Main entry point for the headless platformer.
//!
//! Initializes logging, loads settings, starts the game session actor and feeds it
//! keyboard commands read from stdin.

use std::path::Path;

use actix::{Actor, System};
use log::{error, info};

use config::settings::{RendererKind, Settings};
use game::state::GameState;
use game::systems::render::{JsonFrameSink, NullRenderer, RenderTarget, TerminalRenderer};
use session::GameSession;

pub mod config;
mod game;
mod session;

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match Settings::load(Path::new(&path)) {
        Ok(settings) => {
            info!("Loaded settings from {}", path);
            settings
        }
        Err(err) => {
            error!("{}; falling back to defaults", err);
            Settings::default()
        }
    }
}

fn make_renderer(settings: &Settings) -> Box<dyn RenderTarget> {
    match settings.renderer {
        RendererKind::Terminal => Box::new(TerminalRenderer::new(
            settings.terminal_print_every,
            settings.screen_width,
        )),
        RendererKind::Json => Box::new(JsonFrameSink::new(std::io::stdout())),
        RendererKind::None => Box::new(NullRenderer),
    }
}

fn main() -> std::io::Result<()> {
    // RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    let renderer = make_renderer(&settings);

    let system = System::new();
    system.block_on(async move {
        let state = GameState::new(settings);
        let addr = GameSession::new(state, renderer).stop_system_on_exit().start();
        session::stdin::spawn_reader(addr);
    });
    system.run()
}
