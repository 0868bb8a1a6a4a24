use super::board::Board;
use super::types::{Line, PlayerMark, WinningLine};

pub fn check_win(board: &Board) -> Option<PlayerMark> {
    check_win_with_line(board).map(|winning| winning.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    Line::all(size).find_map(|line| {
        line_owner(board, line).map(|mark| WinningLine::new(mark.clone(), line, size))
    })
}

fn line_owner(board: &Board, line: Line) -> Option<&PlayerMark> {
    let mut positions = line.positions(board.size());
    let first = board.get(positions.next()?)?;
    positions
        .all(|pos| board.get(pos) == Some(first))
        .then_some(first)
}
