mod colors;
mod confetti;
mod renderer;
mod state;
mod ui;

use clap::Parser;
use tictactoe_common::config::{DEFAULT_CONFIG_FILE, GameConfig, get_config_manager};
use tictactoe_common::games::tictactoe::{GameController, GameSession, MatchSettings};
use tictactoe_common::{log, log_warn, logger};
use tokio::sync::mpsc;

use renderer::SharedStateRenderer;
use state::SharedState;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", version = tictactoe_common::version::VERSION)]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config; missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
}

fn load_config(path: &str) -> GameConfig {
    match get_config_manager(path).get_config() {
        Ok(config) => {
            log!("Using config from {}: {:?}", path, config);
            config
        }
        Err(e) => {
            log_warn!("{}; falling back to defaults", e);
            GameConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args.config);
    let ai_move_delay = config.ai_move_delay();

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let controller = GameController::new(
        SharedStateRenderer::new(shared_state.clone()),
        MatchSettings::from(&config),
    );

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log_warn!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(GameSession::run(controller, command_rx, ai_move_delay));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 620.0])
            .with_title(format!("Tic-Tac-Toe v{}", tictactoe_common::version::VERSION)),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| {
            Ok(Box::new(TicTacToeApp::new(
                cc,
                shared_state,
                command_tx,
            )))
        }),
    )?;

    Ok(())
}
