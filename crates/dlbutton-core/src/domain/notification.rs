//! Notification channel and payload types.
//!
//! These are plain values handed to the notification surface port; image
//! references are resource names, resolved by the surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::detail_link::DetailLink;
use super::outcome::Outcome;

/// Identity under which a notification is posted.
///
/// Posting twice under the same id replaces the first notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub i32);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an image resource (icon, bitmap) by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a resource name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The resource name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interruption level of a notification channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    /// Shown silently.
    Low,
    /// Makes a sound, no heads-up.
    #[default]
    Default,
    /// Heads-up notification.
    High,
}

/// Channel registration request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    /// Fixed channel identity.
    pub id: String,
    /// User-visible channel name.
    pub name: String,
    /// User-visible channel description.
    pub description: String,
    /// Interruption level.
    pub importance: Importance,
    /// Whether the notification light is used.
    pub enable_lights: bool,
    /// Light colour as `0xAARRGGBB`.
    pub light_color: u32,
    /// Whether the device vibrates.
    pub enable_vibration: bool,
    /// Whether a launcher badge is shown.
    pub show_badge: bool,
}

/// An explicit action button on a notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Button label.
    pub label: String,
    /// Where the button navigates.
    pub link: DetailLink,
}

/// Everything the notification surface needs to show one completion.
///
/// Built fresh for every completion and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Channel the notification is posted on.
    pub channel_id: String,
    /// Title line.
    pub title: String,
    /// Body text.
    pub body_text: String,
    /// Small status-bar icon.
    pub small_icon: ImageRef,
    /// Artifact-specific expanded image.
    pub big_picture: ImageRef,
    /// Artifact-specific icon.
    pub large_icon: ImageRef,
    /// Classified outcome of the download.
    pub outcome: Outcome,
    /// Human-readable file name of the artifact.
    pub file_name: String,
    /// Navigation performed when the notification body is tapped.
    pub tap_action: DetailLink,
    /// Additional action buttons.
    pub actions: Vec<NotificationAction>,
    /// Dismiss the notification when tapped.
    pub auto_cancel: bool,
    /// When the payload was built.
    pub posted_at: DateTime<Utc>,
}
