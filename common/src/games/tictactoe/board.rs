use super::types::{Line, PlayerMark, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<PlayerMark>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Position) -> Option<&PlayerMark> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[pos.row * self.size + pos.col].as_ref()
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_none()
    }

    pub(super) fn set(&mut self, pos: Position, mark: PlayerMark) {
        let idx = pos.row * self.size + pos.col;
        self.cells[idx] = Some(mark);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn line_cells(&self, line: Line) -> Vec<(Position, Option<&PlayerMark>)> {
        line.positions(self.size)
            .map(|pos| (pos, self.get(pos)))
            .collect()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let size = board.size();
    let mut moves = Vec::new();
    for row in 0..size {
        for col in 0..size {
            let pos = Position::new(row, col);
            if board.get(pos).is_none() {
                moves.push(pos);
            }
        }
    }
    moves
}

#[cfg(test)]
pub(crate) fn board_from_rows(rows: &[&str]) -> Board {
    let mut board = Board::new(rows.len());
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch != '.' {
                board.set(Position::new(row, col), PlayerMark::new(ch.to_string()));
            }
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(get_available_moves(&board).len(), 16);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_outside_board_is_none() {
        let board = board_from_rows(&["XXX", "...", "..."]);
        assert!(board.get(Position::new(3, 0)).is_none());
        assert!(!board.is_empty_at(Position::new(0, 3)));
    }

    #[test]
    fn test_available_moves_skip_marked_cells() {
        let board = board_from_rows(&["X.O", ".X.", "O.."]);
        let moves = get_available_moves(&board);
        assert_eq!(moves.len(), 5);
        assert!(!moves.contains(&Position::new(0, 0)));
        assert!(moves.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_full_board() {
        let board = board_from_rows(&["XOX", "OXO", "OXO"]);
        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_line_cells_reads_anti_diagonal() {
        let board = board_from_rows(&["..O", ".X.", "O.."]);
        let cells = board.line_cells(Line::AntiDiagonal);
        let marks: Vec<Option<&str>> = cells.iter().map(|(_, m)| m.map(PlayerMark::as_str)).collect();
        assert_eq!(marks, vec![Some("O"), Some("X"), Some("O")]);
    }
}
