use thiserror::Error;

use super::types::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid match configuration: {0}")]
    Configuration(String),

    #[error("position {position} is outside of the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("match is already over")]
    MatchOver,

    #[error("no legal move available")]
    NoLegalMove,

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("it is not the bot's turn")]
    NotBotTurn,
}
