//! Mapping between logical pixels and terminal cells.

use painel_core::geometry::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    logical: Size,
    cols: u16,
    rows: u16,
}

impl CellScale {
    pub fn new(logical: Size, cols: u16, rows: u16) -> Self {
        Self {
            logical,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn logical(&self) -> Size {
        self.logical
    }

    /// Logical width of one cell.
    pub fn cell_width(&self) -> f32 {
        self.logical.width as f32 / self.cols as f32
    }

    /// Logical height of one cell.
    pub fn cell_height(&self) -> f32 {
        self.logical.height as f32 / self.rows as f32
    }

    /// Logical position of the centre of cell `(col, row)`.
    pub fn to_logical(&self, col: u16, row: u16) -> Point {
        Point::new(
            (col as f32 + 0.5) * self.cell_width(),
            (row as f32 + 0.5) * self.cell_height(),
        )
    }

    /// Cell containing a logical point. May lie outside the grid.
    pub fn to_cell(&self, point: Point) -> (i32, i32) {
        (
            (point.x / self.cell_width()).floor() as i32,
            (point.y / self.cell_height()).floor() as i32,
        )
    }

    /// Cells whose centres fall inside `rect`, clipped to the grid, as
    /// half-open `(col_start, col_end, row_start, row_end)`.
    pub fn cell_span(&self, rect: Rect) -> (u16, u16, u16, u16) {
        let cw = self.cell_width();
        let ch = self.cell_height();
        let clip_col = |v: f32| v.clamp(0.0, self.cols as f32) as u16;
        let clip_row = |v: f32| v.clamp(0.0, self.rows as f32) as u16;
        (
            clip_col((rect.x / cw - 0.5).ceil()),
            clip_col((rect.right() / cw - 0.5).ceil()),
            clip_row((rect.y / ch - 0.5).ceil()),
            clip_row((rect.bottom() / ch - 0.5).ceil()),
        )
    }
}
