use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerMark(String);

impl PlayerMark {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerMark {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerMark {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PlayerMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerMark),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<&PlayerMark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    // Scan order: rows, columns, main diagonal, anti-diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: PlayerMark,
    pub line: Line,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: PlayerMark, line: Line, size: usize) -> Self {
        let mut positions = line.positions(size);
        let start = positions.next().unwrap_or(Position::new(0, 0));
        let end = positions.last().unwrap_or(start);
        Self { mark, line, start, end }
    }
}
