//! Character-cell canvas.
//!
//! One unit of control geometry is one terminal cell. Text is measured as
//! one cell per character; the sweep circle is drawn as a single glyph
//! whose fill follows the sweep angle.

use dlbutton_control::{Canvas, Color, FontMetrics, RectF, TextBounds, TextMeasurer};

/// Ascent of a terminal line, in cells.
pub const CELL_ASCENT: f32 = -0.8;
/// Descent of a terminal line, in cells.
pub const CELL_DESCENT: f32 = 0.2;

/// Gap between label and circle, in cells.
pub const CELL_CIRCLE_MARGIN: f32 = 1.0;

const SWEEP_GLYPHS: [char; 4] = ['○', '◔', '◑', '◕'];

/// Measures text as one cell per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn font_metrics(&self, _text_size: f32) -> FontMetrics {
        FontMetrics {
            ascent: CELL_ASCENT,
            descent: CELL_DESCENT,
        }
    }

    fn text_bounds(&self, text: &str, _text_size: f32) -> TextBounds {
        TextBounds {
            left: 0.0,
            top: CELL_ASCENT,
            right: text.chars().count() as f32,
            bottom: CELL_DESCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: Color(0),
        }
    }
}

/// Grid of cells the control draws into.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Characters of one row.
    pub fn row_text(&self, row: usize) -> String {
        self.row(row).iter().map(|cell| cell.ch).collect()
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < self.width && row < self.height {
            self.cells.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    fn clamp_col(&self, x: f32) -> usize {
        (x.round().max(0.0) as usize).min(self.width)
    }

    fn clamp_row(&self, y: f32) -> usize {
        (y.round().max(0.0) as usize).min(self.height)
    }
}

impl Canvas for TextCanvas {
    fn fill(&mut self, color: Color) {
        for cell in &mut self.cells {
            *cell = Cell {
                ch: ' ',
                fg: None,
                bg: color,
            };
        }
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        let (left, right) = (self.clamp_col(rect.left), self.clamp_col(rect.right));
        let (top, bottom) = (self.clamp_row(rect.top), self.clamp_row(rect.bottom));
        for row in top..bottom {
            for col in left..right {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.bg = color;
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, center_x: f32, baseline_y: f32, _text_size: f32, color: Color) {
        let glyph_center = baseline_y + (CELL_ASCENT + CELL_DESCENT) / 2.0;
        if glyph_center < 0.0 {
            return;
        }
        let row = glyph_center.floor() as usize;
        let len = text.chars().count() as f32;
        let start = (center_x - len / 2.0).round();
        for (offset, ch) in text.chars().enumerate() {
            let col = start + offset as f32;
            if col < 0.0 {
                continue;
            }
            if let Some(cell) = self.cell_mut(col as usize, row) {
                cell.ch = ch;
                cell.fg = Some(color);
            }
        }
    }

    fn draw_arc(&mut self, oval: RectF, _start_degrees: f32, sweep_degrees: f32, color: Color) {
        let (x, y) = (oval.center_x(), oval.center_y());
        if x < 0.0 || y < 0.0 {
            return;
        }
        let quarter = ((sweep_degrees / 90.0).floor().max(0.0) as usize).min(SWEEP_GLYPHS.len() - 1);
        if let Some(cell) = self.cell_mut(x.floor() as usize, y.floor() as usize) {
            cell.ch = SWEEP_GLYPHS[quarter];
            cell.fg = Some(color);
        }
    }
}
