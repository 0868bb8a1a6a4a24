mod board_geometry;
mod tictactoe;

pub use tictactoe::{GameUiAction, TicTacToeGameUi};
