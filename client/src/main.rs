mod config;
mod game_loop;
mod input;
mod profile;
mod render;
mod username_prompt;

use clap::Parser;
use snake_common::snake::SnakeSession;
use snake_common::{log, logger, SessionRng};
use tokio::sync::mpsc;

use config::{get_config_manager, DEFAULT_CONFIG_FILE};
use game_loop::{run_game_loop, GameHost};
use input::forward_key_events;
use render::{TerminalGuard, TerminalRenderer};
use username_prompt::prompt_for_username;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    player: Option<String>,

    #[arg(long)]
    grid_size: Option<u32>,

    /// Ticks per second.
    #[arg(long)]
    speed: Option<f64>,

    /// Snake passes through edges instead of dying on them.
    #[arg(long)]
    wrap: Option<bool>,

    /// Fixed seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "snake_client.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Stdout belongs to the board once the game starts.
    logger::init_file_logger(Some("Client".to_string()), &args.log_file)?;

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager
        .get_config()
        .inspect_err(|e| log!("Failed to load config {}: {}", args.config, e))?;

    if let Some(grid_size) = args.grid_size {
        config.game.grid_size = grid_size;
    }
    if let Some(speed) = args.speed {
        config.game.speed = speed;
    }
    if let Some(wrap) = args.wrap {
        config.game.wrap = wrap;
    }

    let player = match args.player.or(config.player_name.clone()) {
        Some(name) => name,
        None => prompt_for_username().ok_or("A player name is required to play")?,
    };
    config.player_name = Some(player.trim().to_string());
    config_manager
        .set_config(&config)
        .inspect_err(|e| log!("Failed to save config {}: {}", args.config, e))?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting: player={}, grid={}, speed={}, wrap={}, seed={}",
        player.trim(),
        config.game.grid_size,
        config.game.speed,
        config.game.wrap,
        rng.seed()
    );

    let mut session = SnakeSession::new(config.game, config.high_score, rng)?;
    session.set_player(&player)?;

    let mut host = GameHost::new(session, TerminalRenderer::new(), config_manager);
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let result = {
        let _terminal = TerminalGuard::enter()?;
        let input_task = tokio::spawn(forward_key_events(command_tx));
        let result = run_game_loop(&mut host, command_rx).await;
        input_task.abort();
        result
    };

    if let Err(e) = &result {
        log!("Game loop failed: {}", e);
    }
    log!("Exiting, high score {}", host.session().high_score());
    result?;

    Ok(())
}
