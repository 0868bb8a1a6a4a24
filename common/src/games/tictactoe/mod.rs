mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, BotType, LineHeuristicBot, MoveStrategy, RandomBot, calculate_move};
pub use error::GameError;
pub use game_state::TicTacToeGameState;
pub use session::{BotSeat, TicTacToeSession, TurnPhase};
pub use settings::{
    CLASSIC_FIELD_SIZE, CLASSIC_PLAYER_COUNT, MAX_FIELD_SIZE, MIN_FIELD_SIZE, MIN_PLAYER_COUNT,
    MatchSettings,
};
pub use types::{GameStatus, Line, PlayerMark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
