mod colors;
mod config;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::BotType;
use common::{log, logger};
use eframe::egui;

use config::get_config_manager;
use ui::{LaunchOptions, MENU_WINDOW_SIZE, MenuApp};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    LineHeuristic,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Random => BotType::Random,
            BotArg::LineHeuristic => BotType::LineHeuristic,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file path; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for the bot's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = BotArg::LineHeuristic)]
    bot: BotArg,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let launch = LaunchOptions {
        seed: args.seed,
        bot_type: args.bot.into(),
    };

    log!("Starting Tic-Tac-Toe client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(MENU_WINDOW_SIZE)
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(MenuApp::new(config_manager, launch)))),
    )?;

    Ok(())
}
