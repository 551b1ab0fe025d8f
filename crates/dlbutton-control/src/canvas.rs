//! Host drawing boundary.
//!
//! The control never rasterizes anything itself. It issues draw calls
//! against a [`Canvas`] and asks a [`TextMeasurer`] for font metrics; the
//! host view system provides both.

use crate::geometry::RectF;

/// Colour as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    #[must_use]
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }
}

/// Vertical font metrics relative to the baseline.
///
/// `ascent` is negative (above the baseline), `descent` positive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    /// Baseline that vertically centres a line of text in a box of the
    /// given height.
    ///
    /// Half of `descent - ascent` above the geometric centre, then shifted
    /// up by `descent`.
    #[must_use]
    pub fn centered_baseline(&self, height: f32) -> f32 {
        height / 2.0 + (self.descent - self.ascent) / 2.0 - self.descent
    }
}

/// Tight bounds of a piece of text, relative to its origin on the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Font measurement supplied by the host.
pub trait TextMeasurer: Send + Sync {
    /// Ascent/descent for the font at the given size.
    fn font_metrics(&self, text_size: f32) -> FontMetrics;

    /// Bounds of `text` rendered at the given size.
    fn text_bounds(&self, text: &str, text_size: f32) -> TextBounds;
}

/// Drawing surface supplied by the host for one frame.
pub trait Canvas {
    /// Paint the whole surface.
    fn fill(&mut self, color: Color);

    /// Paint a filled rectangle.
    fn fill_rect(&mut self, rect: RectF, color: Color);

    /// Draw text horizontally centred on `center_x` with its baseline at
    /// `baseline_y`.
    fn draw_text(&mut self, text: &str, center_x: f32, baseline_y: f32, text_size: f32, color: Color);

    /// Draw a filled pie slice of the oval, starting at `start_degrees` and
    /// sweeping clockwise by `sweep_degrees`.
    fn draw_arc(&mut self, oval: RectF, start_degrees: f32, sweep_degrees: f32, color: Color);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill(Color),
    FillRect(RectF, Color),
    Text {
        text: String,
        center_x: f32,
        baseline_y: f32,
        color: Color,
    },
    Arc {
        oval: RectF,
        start_degrees: f32,
        sweep_degrees: f32,
        color: Color,
    },
}

/// Canvas that records draw calls instead of painting.
///
/// Used by tests and by hosts that replay frames elsewhere.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every text draw, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The first arc drawn, if any.
    #[must_use]
    pub fn arc(&self) -> Option<&DrawOp> {
        self.ops.iter().find(|op| matches!(op, DrawOp::Arc { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Color) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn draw_text(&mut self, text: &str, center_x: f32, baseline_y: f32, _text_size: f32, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            center_x,
            baseline_y,
            color,
        });
    }

    fn draw_arc(&mut self, oval: RectF, start_degrees: f32, sweep_degrees: f32, color: Color) {
        self.ops.push(DrawOp::Arc {
            oval,
            start_degrees,
            sweep_degrees,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channels() {
        let color = Color(0xFF07_C2AA);
        assert_eq!(color.red(), 0x07);
        assert_eq!(color.green(), 0xC2);
        assert_eq!(color.blue(), 0xAA);
    }

    #[test]
    fn test_centered_baseline_uses_metrics() {
        let metrics = FontMetrics {
            ascent: -16.0,
            descent: 4.0,
        };
        // Centre 30, half line height 10 below it, minus the descent.
        assert!((metrics.centered_baseline(60.0) - 36.0).abs() < f32::EPSILON);

        // Glyph box [baseline + ascent, baseline + descent] is centred.
        let baseline = metrics.centered_baseline(60.0);
        let top = baseline + metrics.ascent;
        let bottom = baseline + metrics.descent;
        assert!(((top + bottom) / 2.0 - 30.0).abs() < f32::EPSILON);
    }
}
