mod broadcaster;
mod config;
mod runner;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_engine::config::ConfigManager;
use snake_engine::logger::init_logger;
use tokio::sync::mpsc;

use config::ClientConfig;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(about = "Grid snake desktop client")]
struct Args {
    /// Path to the YAML config; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(None);
    let args = Args::parse();

    let manager: ConfigManager<ClientConfig> = match args.config {
        Some(ref path) => ConfigManager::from_yaml_file(path),
        None => config::get_config_manager(),
    };
    let client_config = manager.get_config()?;

    let settings = client_config.game.clone();
    let seed = args.seed.or(client_config.seed);
    let grid = settings.grid()?;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let runner_state = shared_state.clone();
    let runner_settings = settings.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(runner::game_task(
            runner_state,
            command_rx,
            runner_settings,
            seed,
        ));
    });

    let window_width = grid.width_cells() as f32 * settings.cell_size as f32 + 40.0;
    let window_height = grid.height_cells() as f32 * settings.cell_size as f32 + 140.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_tx,
                settings,
                grid,
            )))
        }),
    )?;

    Ok(())
}
