use std::{path::PathBuf, sync::OnceLock};

use clap::Parser;
use log::{debug, error, info, warn};
use macroquad::prelude::*;
use toroidal_life::{
    Algorithm, GameConfig, GameOfLife, GridGeometry, UiState,
    application::{FixedStep, Ticker},
    input::{self, InputTranslator},
    rendering,
};

#[derive(Parser, Debug)]
#[command(name = "toroidal_life", about = "Conway's Game of Life on a wrapping board")]
struct Args {
    /// TOML file with board and pacing settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Cell size in pixels
    #[arg(long)]
    block_size: Option<u32>,
    /// Initial inverse speed (2 = fastest, 60 = slowest)
    #[arg(long)]
    speed: Option<u32>,
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,
}

fn settings() -> &'static GameConfig {
    static SETTINGS: OnceLock<GameConfig> = OnceLock::new();
    SETTINGS.get_or_init(|| {
        env_logger::init();
        load_settings(Args::parse())
    })
}

fn load_settings(args: Args) -> GameConfig {
    let mut config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                error!("{err}; using defaults");
                GameConfig::default()
            }
        },
        None => GameConfig::default(),
    };

    if let Some(block_size) = args.block_size {
        config.block_size = block_size;
        if block_size > 0 {
            config.width -= config.width % block_size;
            config.height -= config.height % block_size;
        }
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }

    if let Err(err) = config.validate() {
        warn!("{err}; using defaults");
        return GameConfig::default();
    }
    config
}

fn window_conf() -> Conf {
    let config = settings();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = settings();

    // The real framebuffer may differ from the requested size
    let geometry = GridGeometry::fitting(screen_width(), screen_height(), config.block_size as i32);
    let board_config = GameConfig {
        width: geometry.width() as u32,
        height: geometry.height() as u32,
        ..config.clone()
    };
    info!(
        "board {}x{} px, {} px cells, speed {}, {}",
        geometry.width(),
        geometry.height(),
        geometry.block_size(),
        board_config.speed,
        board_config.algorithm.name()
    );

    let mut game = GameOfLife::from_config(&board_config, UiState::default());
    let translator = InputTranslator::default();
    let mut ticker = Ticker::new();
    let mut clock = FixedStep::per_second(board_config.ticks_per_second);
    let mut last_pos = None;

    loop {
        let was_started = game.is_started();
        for event in input::poll_pointer(&mut last_pos) {
            translator.apply(&mut game, event);
        }
        if was_started && !game.is_started() {
            ticker.reset();
            let ui = game.observer();
            debug!(
                "session over: {} cells added, {} removed so far",
                ui.cells_added, ui.cells_removed
            );
        }

        for _ in 0..clock.steps(get_frame_time()) {
            if ticker.tick(game.is_started(), game.speed()) {
                game.advance_generation();
            }
        }

        rendering::draw_frame(&game, translator.layout(), mouse_position());

        next_frame().await;
    }
}
