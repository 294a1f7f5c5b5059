//! PDF output for [`ReportDocument`]s.
//!
//! [`layout`] places everything on US Letter pages in points with the
//! origin at the top-left; [`write_report`] renders the pages with
//! `printpdf` using the built-in Helvetica faces.

use std::path::{Path, PathBuf};

use printpdf::path::PaintMode;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb};

use crate::reports::{CellAlign, ReportDocument, Table};

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 72.0;

const TITLE_SIZE: f32 = 18.0;
const TITLE_SPACE_AFTER: f32 = 30.0;
const BODY_SIZE: f32 = 10.0;
const FOOTER_SIZE: f32 = 8.0;
const SPACER: f32 = 20.0;
const CELL_PADDING: f32 = 4.0;
const HEADER_BOTTOM_PADDING: f32 = 12.0;
const LINE_FACTOR: f32 = 1.2;
/// Average Helvetica glyph advance as a fraction of the font size.
const GLYPH_FACTOR: f32 = 0.5;

const HEADER_FILL: [u8; 3] = [128, 128, 128];
const HEADER_TEXT: [u8; 3] = [245, 245, 245];
const BODY_FILL: [u8; 3] = [245, 245, 220];
const BLACK: [u8; 3] = [0, 0, 0];

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Erro ao gravar {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro ao gerar PDF: {0}")]
    Pdf(String),
}

/// One positioned drawing operation, in points from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: [u8; 3],
        text: String,
    },
    Fill {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [u8; 3],
    },
    Border {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub ops: Vec<Op>,
}

impl PageLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_FACTOR
}

/// Greedy word wrap to at most `width` points per line. Words longer than
/// a line are split.
pub fn wrap(text: &str, size: f32, width: f32) -> Vec<String> {
    let max_chars = ((width / (size * GLYPH_FACTOR)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct Cursor {
    pages: Vec<PageLayout>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            y: MARGIN,
        }
    }

    fn page(&mut self) -> &mut PageLayout {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Start a new page unless `height` still fits on this one.
    fn reserve(&mut self, height: f32) -> bool {
        if self.y + height > PAGE_HEIGHT - MARGIN && self.y > MARGIN {
            self.pages.push(PageLayout::default());
            self.y = MARGIN;
            return true;
        }
        false
    }

    fn centered_line(&mut self, text: &str, size: f32, bold: bool) {
        let line = size * LINE_FACTOR;
        self.reserve(line);
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        let y = self.y + size;
        self.page().ops.push(Op::Text {
            x: x.max(MARGIN),
            y,
            size,
            bold,
            color: BLACK,
            text: text.to_string(),
        });
        self.y += line;
    }

    fn left_line(&mut self, text: &str, size: f32) {
        let line = size * LINE_FACTOR;
        self.reserve(line);
        let y = self.y + size;
        self.page().ops.push(Op::Text {
            x: MARGIN,
            y,
            size,
            bold: false,
            color: BLACK,
            text: text.to_string(),
        });
        self.y += line;
    }
}

struct RowStyle {
    size: f32,
    bold: bool,
    fill: [u8; 3],
    text: [u8; 3],
    bottom_padding: f32,
}

fn table_row(cursor: &mut Cursor, table: &Table, x0: f32, cells: &[String], style: &RowStyle) -> f32 {
    let widths: Vec<f32> = table.column_widths.iter().map(|w| w * 72.0).collect();
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(&widths)
        .map(|(cell, width)| wrap(cell, style.size, width - 2.0 * CELL_PADDING))
        .collect();
    let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    let line = style.size * LINE_FACTOR;
    let height = lines as f32 * line + 2.0 * CELL_PADDING + style.bottom_padding;

    let top = cursor.y;
    let mut x = x0;
    for (cell_lines, width) in wrapped.iter().zip(&widths) {
        let page = cursor.page();
        page.ops.push(Op::Fill {
            x,
            y: top,
            width: *width,
            height,
            color: style.fill,
        });
        page.ops.push(Op::Border {
            x,
            y: top,
            width: *width,
            height,
        });
        for (i, text) in cell_lines.iter().enumerate() {
            let text_x = match table.align {
                CellAlign::Left => x + CELL_PADDING,
                CellAlign::Center => x + (width - text_width(text, style.size)) / 2.0,
            };
            page.ops.push(Op::Text {
                x: text_x,
                y: top + CELL_PADDING + style.size + i as f32 * line,
                size: style.size,
                bold: style.bold,
                color: style.text,
                text: text.clone(),
            });
        }
        x += width;
    }
    cursor.y += height;
    height
}

fn row_height(table: &Table, cells: &[String], size: f32, bottom_padding: f32) -> f32 {
    let lines = cells
        .iter()
        .zip(&table.column_widths)
        .map(|(cell, width)| wrap(cell, size, width * 72.0 - 2.0 * CELL_PADDING).len())
        .max()
        .unwrap_or(1);
    lines as f32 * size * LINE_FACTOR + 2.0 * CELL_PADDING + bottom_padding
}

/// Lay the document out on as many pages as the table needs. The header
/// row is repeated at the top of every page the table continues on.
pub fn layout(doc: &ReportDocument) -> Vec<PageLayout> {
    let mut cursor = Cursor::new();
    cursor.centered_line(&doc.title, TITLE_SIZE, true);
    cursor.y += TITLE_SPACE_AFTER;

    for line in &doc.body {
        cursor.left_line(line, BODY_SIZE);
    }
    if !doc.body.is_empty() {
        cursor.y += SPACER;
    }

    let table = &doc.table;
    let table_width: f32 = table.column_widths.iter().sum::<f32>() * 72.0;
    let x0 = (PAGE_WIDTH - table_width) / 2.0;
    let header = RowStyle {
        size: table.header_font_size,
        bold: true,
        fill: HEADER_FILL,
        text: HEADER_TEXT,
        bottom_padding: HEADER_BOTTOM_PADDING,
    };
    let body = RowStyle {
        size: table.body_font_size,
        bold: false,
        fill: BODY_FILL,
        text: BLACK,
        bottom_padding: 0.0,
    };

    let header_height = row_height(table, &table.header, header.size, header.bottom_padding);
    let first_row = table
        .rows
        .first()
        .map(|r| row_height(table, r, body.size, 0.0))
        .unwrap_or(0.0);
    cursor.reserve(header_height + first_row);
    table_row(&mut cursor, table, x0, &table.header, &header);

    for row in &table.rows {
        let height = row_height(table, row, body.size, 0.0);
        if cursor.reserve(height) {
            table_row(&mut cursor, table, x0, &table.header, &header);
        }
        table_row(&mut cursor, table, x0, row, &body);
    }

    cursor.y += SPACER;
    cursor.centered_line(&doc.footer, FOOTER_SIZE, false);
    cursor.pages
}

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn color([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn pdf_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(err.to_string())
}

/// Corners of a top-left-origin box as a closed PDF path.
fn outline(x: f32, y: f32, width: f32, height: f32) -> Vec<(Point, bool)> {
    let (top, bottom) = (PAGE_HEIGHT - y, PAGE_HEIGHT - y - height);
    [(x, bottom), (x + width, bottom), (x + width, top), (x, top)]
        .into_iter()
        .map(|(px, py)| (Point::new(mm(px), mm(py)), false))
        .collect()
}

fn render_op(layer: &PdfLayerReference, op: &Op, regular: &IndirectFontRef, bold_font: &IndirectFontRef) {
    match op {
        Op::Text {
            x,
            y,
            size,
            bold,
            color: rgb,
            text,
        } => {
            layer.set_fill_color(color(*rgb));
            let font = if *bold { bold_font } else { regular };
            layer.use_text(text.as_str(), *size, mm(*x), mm(PAGE_HEIGHT - y), font);
        }
        Op::Fill {
            x,
            y,
            width,
            height,
            color: rgb,
        } => {
            layer.set_fill_color(color(*rgb));
            let rect = printpdf::Rect::new(
                mm(*x),
                mm(PAGE_HEIGHT - y - height),
                mm(x + width),
                mm(PAGE_HEIGHT - y),
            )
            .with_mode(PaintMode::Fill);
            layer.add_rect(rect);
        }
        Op::Border { x, y, width, height } => {
            layer.set_outline_color(color(BLACK));
            layer.set_outline_thickness(1.0);
            layer.add_line(Line {
                points: outline(*x, *y, *width, *height),
                is_closed: true,
            });
        }
    }
}

/// Render `doc` and write it to `path`, creating the parent directory.
pub fn write_report(doc: &ReportDocument, path: &Path) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(io_error)?;
    }

    let pages = layout(doc);
    let (pdf, first_page, first_layer) =
        PdfDocument::new(doc.title.as_str(), mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Página 1");
    let regular = pdf.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
    let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), format!("Página {}", index + 1))
        };
        let layer = pdf.get_page(page_index).get_layer(layer_index);
        for op in &page.ops {
            render_op(&layer, op, &regular, &bold);
        }
    }

    let bytes = pdf.save_to_bytes().map_err(pdf_error)?;
    std::fs::write(path, bytes).map_err(io_error)?;
    tracing::info!(path = %path.display(), pages = pages.len(), "PDF written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(rows: usize) -> ReportDocument {
        ReportDocument {
            title: "TÍTULO".into(),
            body: vec![format!("Total de Inscrições: {rows}")],
            table: Table {
                column_widths: vec![0.5, 2.0, 0.7, 1.0, 1.0, 1.0],
                header: ["ID", "Nome", "Idade", "Renda", "Status", "Data"]
                    .map(String::from)
                    .to_vec(),
                rows: (0..rows)
                    .map(|i| {
                        vec![
                            i.to_string(),
                            format!("Pessoa {i}"),
                            "30".into(),
                            "R$ 100.00".into(),
                            "Pendente".into(),
                            "2024-01-01".into(),
                        ]
                    })
                    .collect(),
                align: CellAlign::Center,
                header_font_size: 10.0,
                body_font_size: 8.0,
            },
            footer: "Relatório gerado em 01/01/2024 às 10:00".into(),
        }
    }

    #[test]
    fn short_table_fits_one_page() {
        let pages = layout(&document(3));
        assert_eq!(pages.len(), 1);
        let texts: Vec<_> = pages[0].texts().collect();
        assert_eq!(texts.first(), Some(&"TÍTULO"));
        assert_eq!(texts.last(), Some(&"Relatório gerado em 01/01/2024 às 10:00"));
        assert!(texts.contains(&"Pessoa 2"));
    }

    #[test]
    fn long_table_paginates_and_repeats_header() {
        let pages = layout(&document(120));
        assert!(pages.len() > 1);
        for page in &pages[1..] {
            assert!(page.texts().any(|t| t == "Nome"));
        }
        let people: usize = pages
            .iter()
            .map(|p| p.texts().filter(|t| t.starts_with("Pessoa ")).count())
            .sum();
        assert_eq!(people, 120);
    }

    #[test]
    fn nothing_is_placed_below_the_bottom_margin() {
        for page in layout(&document(200)) {
            for op in &page.ops {
                if let Op::Fill { y, height, .. } = op {
                    assert!(y + height <= PAGE_HEIGHT - MARGIN + 0.01);
                }
            }
        }
    }

    #[test]
    fn wrap_splits_on_words_and_long_tokens() {
        assert_eq!(wrap("Rua das Flores 10", 10.0, 50.0), vec!["Rua das", "Flores 10"]);
        assert_eq!(wrap("abcdefghijkl", 10.0, 50.0), vec!["abcdefghij", "kl"]);
        assert_eq!(wrap("", 10.0, 50.0), vec![String::new()]);
    }

    #[test]
    fn writes_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.pdf");
        write_report(&document(2), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
