use std::collections::HashSet;

use super::board::{Board, get_available_moves};
use super::error::GameError;
use super::settings::validate_dimensions;
use super::types::{GameStatus, PlayerMark, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    players: Vec<PlayerMark>,
    current_index: usize,
    status: GameStatus,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(size: usize, players: Vec<PlayerMark>) -> Result<Self, GameError> {
        validate_dimensions(size, players.len())?;

        let distinct: HashSet<&PlayerMark> = players.iter().collect();
        if distinct.len() != players.len() {
            return Err(GameError::Configuration(
                "player marks must be distinct".to_string(),
            ));
        }

        Ok(Self {
            board: Board::new(size),
            players,
            current_index: 0,
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[PlayerMark] {
        &self.players
    }

    pub fn current_player(&self) -> &PlayerMark {
        &self.players[self.current_index]
    }

    pub fn current_player_index(&self) -> usize {
        self.current_index
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn cell_at(&self, pos: Position) -> Option<&PlayerMark> {
        self.board.get(pos)
    }

    pub fn available_moves(&self) -> Vec<Position> {
        get_available_moves(&self.board)
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won(_) => check_win_with_line(&self.board),
            _ => None,
        }
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::MatchOver);
        }

        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                position: pos,
                size: self.size(),
            });
        }

        if self.board.get(pos).is_some() {
            return Err(GameError::CellOccupied(pos));
        }

        self.board.set(pos, self.current_player().clone());
        self.last_move = Some(pos);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status.clone())
    }

    fn switch_turn(&mut self) {
        self.current_index = (self.current_index + 1) % self.players.len();
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = GameStatus::Won(winner_mark);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
