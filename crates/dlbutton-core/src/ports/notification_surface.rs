//! Notification surface port.
//!
//! This port abstracts the system notification shade so the dispatcher can
//! post completions without knowing how they are displayed.

use thiserror::Error;

use crate::domain::{NotificationChannel, NotificationId, NotificationPayload};

/// Errors from the notification surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// The channel could not be registered.
    #[error("channel '{channel_id}' rejected: {message}")]
    ChannelRejected {
        /// Channel that was refused.
        channel_id: String,
        /// Why.
        message: String,
    },

    /// Posting or clearing failed.
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Port for posting and clearing notifications.
///
/// Posting under an id that is already shown replaces that notification.
pub trait NotificationSurfacePort: Send + Sync {
    /// Register a channel. Registering the same channel again is harmless.
    fn register_channel(&self, channel: &NotificationChannel) -> Result<(), NotificationError>;

    /// Show (or replace) the notification with this id.
    fn post(&self, id: NotificationId, payload: &NotificationPayload)
    -> Result<(), NotificationError>;

    /// Remove every notification this application has shown.
    fn clear_all(&self) -> Result<(), NotificationError>;
}

/// A notification surface that discards everything.
///
/// Suitable for tests and headless contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotificationSurface;

impl NotificationSurfacePort for NoopNotificationSurface {
    fn register_channel(&self, _channel: &NotificationChannel) -> Result<(), NotificationError> {
        Ok(())
    }

    fn post(
        &self,
        _id: NotificationId,
        _payload: &NotificationPayload,
    ) -> Result<(), NotificationError> {
        Ok(())
    }

    fn clear_all(&self) -> Result<(), NotificationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_surface() {
        let surface: Arc<dyn NotificationSurfacePort> = Arc::new(NoopNotificationSurface);
        assert!(surface.clear_all().is_ok());
    }
}
