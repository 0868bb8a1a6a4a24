mod classic_game_config;
mod extended_game_config;
mod game_type;
mod main_config;

pub use classic_game_config::ClassicGameConfig;
pub use extended_game_config::{ExtendedGameConfig, MAX_CELL_SIZE, MIN_CELL_SIZE};
pub use game_type::GameType;
pub use main_config::{ClientConfigManager, Config, get_config_manager};
