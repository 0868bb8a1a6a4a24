use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Line, PlayerMark, Position};

pub struct BotInput<'a> {
    pub board: &'a Board,
    pub players: &'a [PlayerMark],
    pub status: &'a GameStatus,
}

impl<'a> BotInput<'a> {
    pub fn from_game_state(state: &'a TicTacToeGameState) -> Self {
        Self {
            board: state.board(),
            players: state.players(),
            status: state.status(),
        }
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::MatchOver);
        }
        if self.board.is_full() {
            return Err(GameError::NoLegalMove);
        }
        Ok(())
    }
}

pub trait MoveStrategy {
    fn choose_move(&self, input: &BotInput<'_>, rng: &mut SessionRng) -> Result<Position, GameError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotType {
    Random,
    #[default]
    LineHeuristic,
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput<'_>,
    rng: &mut SessionRng,
) -> Result<Position, GameError> {
    match bot_type {
        BotType::Random => RandomBot.choose_move(input, rng),
        BotType::LineHeuristic => LineHeuristicBot.choose_move(input, rng),
    }
}

pub struct RandomBot;

impl MoveStrategy for RandomBot {
    fn choose_move(&self, input: &BotInput<'_>, rng: &mut SessionRng) -> Result<Position, GameError> {
        input.ensure_playable()?;
        let available_moves = get_available_moves(input.board);
        rng.choose(&available_moves)
            .copied()
            .ok_or(GameError::NoLegalMove)
    }
}

/// One-ply heuristic for the classic 3×3 two-player game; other boards go to
/// [`RandomBot`].
///
/// A line with one empty cell and a single mark on the rest is played at once
/// (win or block). Empty cells of mixed lines form a pool with duplicates, so
/// a cell closing several lines is proportionally more likely.
pub struct LineHeuristicBot;

impl LineHeuristicBot {
    pub const SUPPORTED_SIZE: usize = 3;
    pub const SUPPORTED_PLAYERS: usize = 2;

    pub fn supports(input: &BotInput<'_>) -> bool {
        input.board.size() == Self::SUPPORTED_SIZE && input.players.len() == Self::SUPPORTED_PLAYERS
    }
}

enum LineVerdict {
    Immediate(Position),
    Candidate(Position),
    Skip,
}

// Lines with two or more empty cells never enter the pool.
fn judge_line(board: &Board, line: Line) -> LineVerdict {
    let cells = board.line_cells(line);
    let mut empty = cells.iter().filter(|(_, mark)| mark.is_none());

    let Some(&(empty_pos, _)) = empty.next() else {
        return LineVerdict::Skip;
    };
    if empty.next().is_some() {
        return LineVerdict::Skip;
    }

    let mut occupied = cells.iter().filter_map(|(_, mark)| *mark);
    let first = occupied.next();
    if first.is_some() && occupied.all(|mark| Some(mark) == first) {
        LineVerdict::Immediate(empty_pos)
    } else {
        LineVerdict::Candidate(empty_pos)
    }
}

impl MoveStrategy for LineHeuristicBot {
    fn choose_move(&self, input: &BotInput<'_>, rng: &mut SessionRng) -> Result<Position, GameError> {
        input.ensure_playable()?;

        if !Self::supports(input) {
            return RandomBot.choose_move(input, rng);
        }

        let mut candidates = Vec::new();
        for line in Line::all(input.board.size()) {
            match judge_line(input.board, line) {
                LineVerdict::Immediate(pos) => return Ok(pos),
                LineVerdict::Candidate(pos) => candidates.push(pos),
                LineVerdict::Skip => {}
            }
        }

        if let Some(&pos) = rng.choose(&candidates) {
            return Ok(pos);
        }

        RandomBot.choose_move(input, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_rows;
    use std::collections::HashMap;

    fn classic_players() -> Vec<PlayerMark> {
        vec![PlayerMark::from("X"), PlayerMark::from("O")]
    }

    fn input<'a>(board: &'a Board, players: &'a [PlayerMark], status: &'a GameStatus) -> BotInput<'a> {
        BotInput {
            board,
            players,
            status,
        }
    }

    fn heuristic(rows: &[&str], seed: u64) -> Result<Position, GameError> {
        let board = board_from_rows(rows);
        let players = classic_players();
        let status = GameStatus::InProgress;
        let mut rng = SessionRng::new(seed);
        LineHeuristicBot.choose_move(&input(&board, &players, &status), &mut rng)
    }

    #[test]
    fn test_completes_two_in_first_row() {
        for seed in 0..20 {
            assert_eq!(heuristic(&["XX.", "...", "..."], seed), Ok(Position::new(0, 2)));
        }
    }

    #[test]
    fn test_blocks_first_matching_column() {
        // Columns 0 and 2 both hold two equal marks; column 0 is scanned first.
        assert_eq!(heuristic(&["O..", "O.X", "..X"], 5), Ok(Position::new(2, 0)));
    }

    #[test]
    fn test_scan_order_prefers_rows_over_columns() {
        // Row 0 and column 1 both hold two O; row 0 is scanned first.
        let pos = heuristic(&["OO.", "X..", "XO."], 9).unwrap();
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn test_anti_diagonal_cell_coordinates() {
        assert_eq!(heuristic(&["..O", "...", "O.X"], 1), Ok(Position::new(1, 1)));
        assert_eq!(heuristic(&["...", ".X.", "X.O"], 1), Ok(Position::new(0, 2)));
    }

    #[test]
    fn test_main_diagonal_immediate() {
        assert_eq!(heuristic(&["X.O", ".X.", "O.."], 4), Ok(Position::new(2, 2)));
    }

    #[test]
    fn test_single_mixed_line_is_the_only_candidate() {
        // Row 0 is the only line down to one empty cell.
        for seed in 0..20 {
            assert_eq!(heuristic(&["XO.", "...", "..."], seed), Ok(Position::new(0, 2)));
        }
    }

    #[test]
    fn test_duplicate_candidates_are_weighted() {
        // Pool: row 0 -> (0,2), row 1 -> (1,1), column 1 -> (1,1),
        // column 2 -> (0,2), main diagonal -> (1,1). Expect roughly 3:2.
        let board = board_from_rows(&["XO.", "O.X", "XXO"]);
        let players = classic_players();
        let status = GameStatus::InProgress;
        let mut rng = SessionRng::new(11);
        let mut counts: HashMap<Position, usize> = HashMap::new();
        for _ in 0..3000 {
            let pos = LineHeuristicBot
                .choose_move(&input(&board, &players, &status), &mut rng)
                .unwrap();
            *counts.entry(pos).or_default() += 1;
        }
        assert_eq!(counts.len(), 2);
        let center = counts[&Position::new(1, 1)];
        let corner = counts[&Position::new(0, 2)];
        assert!(center * 4 > corner * 5, "center {} corner {}", center, corner);
    }

    #[test]
    fn test_empty_board_is_uniform() {
        let board = Board::new(3);
        let players = classic_players();
        let status = GameStatus::InProgress;
        let mut rng = SessionRng::new(2024);
        let mut counts: HashMap<Position, usize> = HashMap::new();
        let trials = 9000;
        for _ in 0..trials {
            let pos = LineHeuristicBot
                .choose_move(&input(&board, &players, &status), &mut rng)
                .unwrap();
            *counts.entry(pos).or_default() += 1;
        }
        assert_eq!(counts.len(), 9);
        for (pos, count) in counts {
            assert!((800..=1200).contains(&count), "{} picked {} times", pos, count);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(heuristic(&["XOX", "XOO", "OXX"], 0), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_finished_match_is_rejected() {
        let board = board_from_rows(&["XXX", "OO.", "..."]);
        let players = classic_players();
        let status = GameStatus::Won(PlayerMark::from("X"));
        let mut rng = SessionRng::new(0);
        let result = LineHeuristicBot.choose_move(&input(&board, &players, &status), &mut rng);
        assert_eq!(result, Err(GameError::MatchOver));
    }

    #[test]
    fn test_unsupported_board_falls_back_to_random_legal_move() {
        // Row 0 has three X and one gap; the heuristic must not be used here.
        let board = board_from_rows(&["XXX.", "OOO.", "....", "...."]);
        let players = classic_players();
        let status = GameStatus::InProgress;
        let mut rng = SessionRng::new(8);
        let seen: std::collections::HashSet<Position> = (0..200)
            .map(|_| {
                LineHeuristicBot
                    .choose_move(&input(&board, &players, &status), &mut rng)
                    .unwrap()
            })
            .collect();
        assert!(seen.iter().all(|pos| board.is_empty_at(*pos)));
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_random_bot_only_picks_empty_cells() {
        let board = board_from_rows(&["XO.", "OX.", "XO."]);
        let players = classic_players();
        let status = GameStatus::InProgress;
        let mut rng = SessionRng::new(42);
        for _ in 0..50 {
            let pos = calculate_move(BotType::Random, &input(&board, &players, &status), &mut rng).unwrap();
            assert_eq!(pos.col, 2);
        }
    }

    #[test]
    fn test_input_from_game_state_sees_current_board() {
        let mut state = TicTacToeGameState::new(3, classic_players()).unwrap();
        for (row, col) in [(0, 0), (2, 2), (0, 1)] {
            state.place_mark(Position::new(row, col)).unwrap();
        }
        let input = BotInput::from_game_state(&state);
        assert_eq!(input.players.len(), 2);
        assert!(LineHeuristicBot::supports(&input));
        let mut rng = SessionRng::new(3);
        assert_eq!(LineHeuristicBot.choose_move(&input, &mut rng), Ok(Position::new(0, 2)));
    }
}
