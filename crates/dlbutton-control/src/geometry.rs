//! Geometry and measurement primitives.
//!
//! Measurement follows the host layout protocol: the parent hands the
//! control one [`MeasureSpec`] per axis and the control resolves its desired
//! size against it.

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    /// Create a rectangle from its edges.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `2 * radius` centred on a point.
    #[must_use]
    pub fn around(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self::new(
            center_x - radius,
            center_y - radius,
            center_x + radius,
            center_y + radius,
        )
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// Resolved size of the control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Padding inside the control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// Same padding on every side.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    #[must_use]
    pub const fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    #[must_use]
    pub const fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// How the parent constrains one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    /// The parent dictates the exact size.
    Exactly,
    /// The control may be as large as it wants up to the given size.
    AtMost,
    /// No constraint.
    Unspecified,
}

/// Constraint for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    #[must_use]
    pub const fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    #[must_use]
    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    #[must_use]
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }
}

/// Outcome of resolving a desired size against a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Size the control will use.
    pub size: u32,
    /// The control wanted more room than the parent allowed.
    pub too_small: bool,
}

/// Resolve a desired size against a parent constraint.
///
/// `Exactly` always wins, `AtMost` caps the desired size and flags the
/// shortfall, `Unspecified` grants the desired size.
#[must_use]
pub const fn resolve_size(desired: u32, spec: MeasureSpec) -> Resolved {
    match spec.mode {
        MeasureMode::Exactly => Resolved {
            size: spec.size,
            too_small: false,
        },
        MeasureMode::AtMost => {
            if spec.size < desired {
                Resolved {
                    size: spec.size,
                    too_small: true,
                }
            } else {
                Resolved {
                    size: desired,
                    too_small: false,
                }
            }
        }
        MeasureMode::Unspecified => Resolved {
            size: desired,
            too_small: false,
        },
    }
}
