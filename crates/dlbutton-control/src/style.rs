//! Resolved visual style of the control.

use dlbutton_core::ButtonSettings;

use crate::canvas::Color;

/// Labels, colours and circle geometry used for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub default_label: String,
    pub loading_label: String,
    pub default_background: Color,
    pub loading_background: Color,
    pub text_color: Color,
    pub circle_color: Color,
    pub text_size: f32,
    /// Circle radius as a fraction of half the control height.
    pub circle_size_multiplier: f32,
    /// Gap between the end of the label and the circle.
    pub circle_margin_left: f32,
}

impl From<&ButtonSettings> for ButtonStyle {
    fn from(settings: &ButtonSettings) -> Self {
        Self {
            default_label: settings.default_label.clone(),
            loading_label: settings.loading_label.clone(),
            default_background: Color(settings.default_background),
            loading_background: Color(settings.loading_background),
            text_color: Color(settings.text_color),
            circle_color: Color(settings.circle_color),
            text_size: settings.text_size,
            circle_size_multiplier: settings.circle_size_multiplier,
            circle_margin_left: settings.circle_margin_left,
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::from(&ButtonSettings::default())
    }
}
