//! Settings domain types and validation.
//!
//! These are pure serde types; loading them from disk is the adapter's job.
//! Every section has defaults, so a partial JSON file only overrides what it
//! names.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{
    ArtifactCatalog, ImageRef, Importance, NotificationChannel, NotificationId,
};

/// Default length of one animation cycle.
pub const DEFAULT_ANIMATION_CYCLE_MS: u64 = 3_000;

/// Default frame interval (about 60 frames per second).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Look of the loading button.
    pub button: ButtonSettings,
    /// Animation timing.
    pub animation: AnimationSettings,
    /// Delay between dispatching a notification and resetting the button.
    pub handback: HandbackSettings,
    /// Notification channel and copy.
    pub notification: NotificationSettings,
    /// Copy attached to download requests.
    pub request: RequestCopy,
    /// Selectable artifacts.
    pub artifacts: ArtifactCatalog,
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Effective grace delay before the button is handed back.
    ///
    /// Falls back to one animation cycle, so the handback and the animation
    /// share a single constant unless explicitly overridden.
    #[must_use]
    pub fn grace_delay(&self) -> Duration {
        self.handback
            .grace_delay_ms
            .map_or_else(|| self.animation.cycle(), Duration::from_millis)
    }
}

/// Colours, labels and geometry of the loading button.
///
/// Colours are `0xAARRGGBB`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ButtonSettings {
    /// Label shown while idle.
    pub default_label: String,
    /// Label shown while loading.
    pub loading_label: String,
    /// Idle background.
    pub default_background: u32,
    /// Colour of the fill wipe while loading.
    pub loading_background: u32,
    /// Label colour.
    pub text_color: u32,
    /// Colour of the sweep circle.
    pub circle_color: u32,
    /// Label text size in pixels.
    pub text_size: f32,
    /// Circle radius as a fraction of half the button height.
    pub circle_size_multiplier: f32,
    /// Gap between the label and the circle.
    pub circle_margin_left: f32,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            default_label: "Download".to_string(),
            loading_label: "We are loading".to_string(),
            default_background: 0xFF07_C2AA,
            loading_background: 0xFF00_4349,
            text_color: 0xFFFF_FFFF,
            circle_color: 0xFFF9_A825,
            text_size: 21.0,
            circle_size_multiplier: 0.4,
            circle_margin_left: 20.0,
        }
    }
}

/// Animation timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationSettings {
    /// Length of one sweep/wipe cycle in milliseconds.
    pub cycle_ms: u64,
    /// Interval between frames in milliseconds.
    pub frame_interval_ms: u64,
}

impl AnimationSettings {
    /// Cycle length.
    #[must_use]
    pub const fn cycle(&self) -> Duration {
        Duration::from_millis(self.cycle_ms)
    }

    /// Frame interval.
    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            cycle_ms: DEFAULT_ANIMATION_CYCLE_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

/// Handback timing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HandbackSettings {
    /// Explicit grace delay in milliseconds; `None` uses the animation cycle.
    pub grace_delay_ms: Option<u64>,
}

/// Notification channel identity and copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationSettings {
    /// Fixed channel id.
    pub channel_id: String,
    /// User-visible channel name.
    pub channel_name: String,
    /// User-visible channel description.
    pub channel_description: String,
    /// Fixed notification id; a new download replaces the previous one.
    pub notification_id: NotificationId,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body_text: String,
    /// Label of the explicit action button.
    pub action_label: String,
    /// Notification light colour.
    pub light_color: u32,
    /// Status-bar icon resource.
    pub small_icon: ImageRef,
}

impl NotificationSettings {
    /// Channel registration request for these settings.
    #[must_use]
    pub fn channel(&self) -> NotificationChannel {
        NotificationChannel {
            id: self.channel_id.clone(),
            name: self.channel_name.clone(),
            description: self.channel_description.clone(),
            importance: Importance::Default,
            enable_lights: true,
            light_color: self.light_color,
            enable_vibration: true,
            show_badge: false,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            channel_id: "channelId".to_string(),
            channel_name: "Downloads".to_string(),
            channel_description: "The selected repository has been downloaded".to_string(),
            notification_id: NotificationId(0),
            title: "Download finished".to_string(),
            body_text: "The selected repository has been downloaded".to_string(),
            action_label: "Check the status".to_string(),
            light_color: 0xFFF9_A825,
            small_icon: ImageRef::new("cloud_download"),
        }
    }
}

/// Static copy attached to every download request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestCopy {
    /// Request title.
    pub title: String,
    /// Request description.
    pub description: String,
}

impl Default for RequestCopy {
    fn default() -> Self {
        Self {
            title: "LoadApp".to_string(),
            description: "Downloading the selected repository".to_string(),
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings could not be parsed: {0}")]
    Parse(String),

    #[error("Frame interval must be greater than zero")]
    InvalidFrameInterval,

    #[error("Animation cycle must be greater than zero")]
    InvalidCycle,

    #[error("Label '{0}' must not be empty")]
    EmptyLabel(&'static str),

    #[error("Text size must be positive, got {0}")]
    InvalidTextSize(String),

    #[error("Circle size multiplier must be in (0, 1], got {0}")]
    InvalidCircleMultiplier(String),

    #[error("Circle margin must not be negative, got {0}")]
    InvalidCircleMargin(String),

    #[error("Artifact '{0}' is listed more than once")]
    DuplicateArtifact(String),

    #[error("Artifact '{0}' has an empty URL")]
    EmptyArtifactUrl(String),
}

/// Validate settings.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    let animation = &settings.animation;
    if animation.frame_interval_ms == 0 {
        return Err(SettingsError::InvalidFrameInterval);
    }
    if animation.cycle_ms == 0 {
        return Err(SettingsError::InvalidCycle);
    }

    let button = &settings.button;
    if button.default_label.trim().is_empty() {
        return Err(SettingsError::EmptyLabel("default_label"));
    }
    if button.loading_label.trim().is_empty() {
        return Err(SettingsError::EmptyLabel("loading_label"));
    }
    if button.text_size.is_nan() || button.text_size <= 0.0 {
        return Err(SettingsError::InvalidTextSize(button.text_size.to_string()));
    }
    let multiplier = button.circle_size_multiplier;
    if multiplier.is_nan() || multiplier <= 0.0 || multiplier > 1.0 {
        return Err(SettingsError::InvalidCircleMultiplier(multiplier.to_string()));
    }
    if button.circle_margin_left.is_nan() || button.circle_margin_left < 0.0 {
        return Err(SettingsError::InvalidCircleMargin(
            button.circle_margin_left.to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for spec in settings.artifacts.iter() {
        if !seen.insert(spec.choice) {
            return Err(SettingsError::DuplicateArtifact(spec.choice.to_string()));
        }
        if spec.url.trim().is_empty() {
            return Err(SettingsError::EmptyArtifactUrl(spec.choice.to_string()));
        }
    }

    Ok(())
}
