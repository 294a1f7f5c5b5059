//! Canvas to cell-grid rasteriser.
//!
//! Fills set cell backgrounds, outlines and text set glyphs with a
//! foreground colour. Later commands overwrite earlier ones.

use painel_core::canvas::{Canvas, DrawCommand, TextAlign};
use painel_core::geometry::{Point, Rect, Rgb};

use crate::scale::CellScale;

const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);
const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CellBuffer {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(cols: u16, rows: u16, background: Rgb) -> Self {
        let blank = Cell {
            bg: background,
            ..Cell::default()
        };
        Self {
            cols,
            rows,
            cells: vec![blank; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        self.cells.get_mut(row as usize * self.cols as usize + col as usize)
    }

    /// One row as a string of glyphs.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.get(col, row))
            .map(|c| c.glyph)
            .collect()
    }

    fn fill(&mut self, scale: &CellScale, rect: Rect, color: Rgb) {
        let (c0, c1, r0, r1) = scale.cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.get_mut(col as i32, row as i32) {
                    cell.bg = color;
                    cell.glyph = ' ';
                }
            }
        }
    }

    fn stroke(&mut self, scale: &CellScale, rect: Rect, color: Rgb) {
        let (c0, c1, r0, r1) = scale.cell_span(rect);
        if c1 <= c0 || r1 <= r0 {
            return;
        }
        let (last_col, last_row) = (c1 - 1, r1 - 1);
        for col in c0..c1 {
            for row in [r0, last_row] {
                self.put_glyph(col as i32, row as i32, '─', color);
            }
        }
        for row in r0..r1 {
            for col in [c0, last_col] {
                self.put_glyph(col as i32, row as i32, '│', color);
            }
        }
        self.put_glyph(c0 as i32, r0 as i32, '┌', color);
        self.put_glyph(last_col as i32, r0 as i32, '┐', color);
        self.put_glyph(c0 as i32, last_row as i32, '└', color);
        self.put_glyph(last_col as i32, last_row as i32, '┘', color);
    }

    fn put_glyph(&mut self, col: i32, row: i32, glyph: char, color: Rgb) {
        if let Some(cell) = self.get_mut(col, row) {
            cell.glyph = glyph;
            cell.fg = color;
        }
    }

    fn ellipse(&mut self, scale: &CellScale, rect: Rect, color: Rgb, outline: bool) {
        let center = rect.center();
        let (rx, ry) = (rect.width / 2.0, rect.height / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (c0, c1, r0, r1) = scale.cell_span(rect.inflate(scale.cell_width(), scale.cell_height()));
        let ring = (scale.cell_width() / rx).max(scale.cell_height() / ry);
        for row in r0..r1 {
            for col in c0..c1 {
                let p = scale.to_logical(col, row);
                let d = ((p.x - center.x) / rx).powi(2) + ((p.y - center.y) / ry).powi(2);
                let d = d.sqrt();
                if outline {
                    if (d - 1.0).abs() <= ring / 2.0 {
                        self.put_glyph(col as i32, row as i32, '•', color);
                    }
                } else if d <= 1.0 {
                    if let Some(cell) = self.get_mut(col as i32, row as i32) {
                        cell.bg = color;
                        cell.glyph = ' ';
                    }
                }
            }
        }
    }

    fn line(&mut self, scale: &CellScale, from: Point, to: Point, color: Rgb) {
        let (mut x0, mut y0) = scale.to_cell(from);
        let (x1, y1) = scale.to_cell(to);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            let glyph = if dx == 0 {
                '│'
            } else if dy == 0 {
                '─'
            } else {
                '·'
            };
            self.put_glyph(x0, y0, glyph, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn text(&mut self, scale: &CellScale, text: &str, position: Point, align: TextAlign, color: Rgb) {
        let (col, row) = scale.to_cell(position);
        let len = text.chars().count() as i32;
        let start = match align {
            TextAlign::Left => col,
            TextAlign::Center => col - len / 2,
        };
        for (i, glyph) in text.chars().enumerate() {
            self.put_glyph(start + i as i32, row, glyph, color);
        }
    }
}

/// Rasterise a frame's display list onto a `scale`-sized grid.
pub fn rasterize(canvas: &Canvas, scale: &CellScale) -> CellBuffer {
    let background = canvas.clear_color().unwrap_or(DEFAULT_BG);
    let mut buffer = CellBuffer::new(scale.cols(), scale.rows(), background);

    for command in canvas.commands() {
        match command {
            DrawCommand::FillRect { rect, color, .. } => buffer.fill(scale, *rect, *color),
            DrawCommand::StrokeRect { rect, color, .. } => buffer.stroke(scale, *rect, *color),
            DrawCommand::Ellipse { rect, color } => buffer.ellipse(scale, *rect, *color, false),
            DrawCommand::Circle {
                center,
                radius,
                color,
                stroke,
            } => {
                let rect = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
                buffer.ellipse(scale, rect, *color, stroke.is_some());
            }
            DrawCommand::Line { from, to, color, .. } => buffer.line(scale, *from, *to, *color),
            DrawCommand::Text {
                text,
                position,
                color,
                align,
                ..
            } => buffer.text(scale, text, *position, *align, *color),
        }
    }
    buffer
}
