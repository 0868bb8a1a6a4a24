use common::games::tictactoe::Position;

/// Pixel layout of the board: square cells separated by grid lines that are
/// a tenth of a cell wide. No border is drawn around the outer cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub field_size: usize,
    pub cell_size: f32,
    pub line_width: f32,
}

impl BoardGeometry {
    pub fn new(field_size: usize, cell_size: f32) -> Self {
        Self {
            field_size,
            cell_size,
            line_width: (cell_size / 10.0).floor().max(1.0),
        }
    }

    fn pitch(&self) -> f32 {
        self.cell_size + self.line_width
    }

    pub fn canvas_size(&self) -> f32 {
        let n = self.field_size as f32;
        n * self.cell_size + (n - 1.0).max(0.0) * self.line_width
    }

    /// Top-left corner of a cell, relative to the canvas origin.
    pub fn cell_origin(&self, pos: Position) -> (f32, f32) {
        (pos.col as f32 * self.pitch(), pos.row as f32 * self.pitch())
    }

    pub fn cell_center(&self, pos: Position) -> (f32, f32) {
        let (x, y) = self.cell_origin(pos);
        let half = self.cell_size / 2.0;
        (x + half, y + half)
    }

    /// Centers of the grid lines between cells, along one axis.
    pub fn grid_line_offsets(&self) -> Vec<f32> {
        (1..self.field_size)
            .map(|k| k as f32 * self.pitch() - self.line_width / 2.0)
            .collect()
    }

    /// Maps a point relative to the canvas origin to a cell. Points on a grid
    /// line or outside the canvas map to nothing.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        let col = self.axis_index(x)?;
        let row = self.axis_index(y)?;
        Some(Position::new(row, col))
    }

    fn axis_index(&self, offset: f32) -> Option<usize> {
        if offset < 0.0 || offset >= self.canvas_size() {
            return None;
        }
        let index = (offset / self.pitch()).floor();
        let within = offset - index * self.pitch();
        if within >= self.cell_size {
            return None;
        }
        Some(index as usize)
    }
}
