//! Notification dispatch for finished downloads.
//!
//! The dispatcher owns the notification channel, clears stale notifications
//! when a new download starts, and turns a classified outcome into a posted
//! notification whose tap opens the detail view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use dlbutton_core::{
    DetailLink, ImageRef, NotificationAction, NotificationPayload, NotificationSettings,
    NotificationSurfacePort, Outcome,
};
use tracing::{debug, info, warn};

/// Artifact imagery shown in the notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Imagery {
    pub big_picture: ImageRef,
    pub large_icon: ImageRef,
}

/// Posts completion notifications through a [`NotificationSurfacePort`].
///
/// Every notification is posted under the same id, so a second download
/// replaces the first instead of stacking.
pub struct NotificationDispatcher {
    surface: Arc<dyn NotificationSurfacePort>,
    settings: NotificationSettings,
    channel_registered: AtomicBool,
}

impl NotificationDispatcher {
    pub fn new(surface: Arc<dyn NotificationSurfacePort>, settings: NotificationSettings) -> Self {
        Self {
            surface,
            settings,
            channel_registered: AtomicBool::new(false),
        }
    }

    /// The surface notifications are posted to.
    pub fn surface(&self) -> &dyn NotificationSurfacePort {
        self.surface.as_ref()
    }

    pub const fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Register the notification channel once per process.
    ///
    /// A rejected registration is logged and retried on the next call.
    /// Returns whether the channel is registered.
    pub fn ensure_channel(&self) -> bool {
        if self.channel_registered.load(Ordering::Acquire) {
            return true;
        }

        let channel = self.settings.channel();
        match self.surface.register_channel(&channel) {
            Ok(()) => {
                self.channel_registered.store(true, Ordering::Release);
                debug!(channel_id = %channel.id, "Notification channel registered");
                true
            }
            Err(err) => {
                warn!(channel_id = %channel.id, error = %err, "Failed to register notification channel");
                false
            }
        }
    }

    /// Clear notifications left over from an earlier download.
    pub fn clear_stale(&self) {
        if let Err(err) = self.surface.clear_all() {
            warn!(error = %err, "Failed to clear stale notifications");
        }
    }

    /// Build the payload for a finished download.
    ///
    /// The tap action and the explicit action both open the detail view with
    /// the outcome's display text and the file name.
    pub fn build_payload(
        &self,
        outcome: Outcome,
        file_name: &str,
        imagery: Imagery,
        posted_at: DateTime<Utc>,
    ) -> NotificationPayload {
        let link = DetailLink::new(outcome.display_text(), file_name);
        NotificationPayload {
            channel_id: self.settings.channel_id.clone(),
            title: self.settings.title.clone(),
            body_text: self.settings.body_text.clone(),
            small_icon: self.settings.small_icon.clone(),
            big_picture: imagery.big_picture,
            large_icon: imagery.large_icon,
            outcome,
            file_name: file_name.to_string(),
            tap_action: link.clone(),
            actions: vec![NotificationAction {
                label: self.settings.action_label.clone(),
                link,
            }],
            auto_cancel: true,
            posted_at,
        }
    }

    /// Build and post the notification for a finished download.
    ///
    /// Delivery failures are logged; the returned payload is what was (or
    /// would have been) shown.
    pub fn dispatch(&self, outcome: Outcome, file_name: &str, imagery: Imagery) -> NotificationPayload {
        self.ensure_channel();

        let payload = self.build_payload(outcome, file_name, imagery, Utc::now());
        match self.surface.post(self.settings.notification_id, &payload) {
            Ok(()) => info!(
                notification_id = %self.settings.notification_id,
                outcome = %outcome,
                file_name,
                "Posted download notification"
            ),
            Err(err) => warn!(
                notification_id = %self.settings.notification_id,
                outcome = %outcome,
                error = %err,
                "Failed to post download notification"
            ),
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlbutton_core::{NotificationChannel, NotificationError, NotificationId};
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct FlakySurface {
        reject_channel_once: AtomicBool,
        registrations: AtomicUsize,
        posted: Mutex<Vec<(NotificationId, NotificationPayload)>>,
        clears: AtomicUsize,
    }

    impl NotificationSurfacePort for FlakySurface {
        fn register_channel(&self, channel: &NotificationChannel) -> Result<(), NotificationError> {
            self.registrations.fetch_add(1, Ordering::SeqCst);
            if self.reject_channel_once.swap(false, Ordering::SeqCst) {
                return Err(NotificationError::ChannelRejected {
                    channel_id: channel.id.clone(),
                    message: "busy".to_string(),
                });
            }
            Ok(())
        }

        fn post(&self, id: NotificationId, payload: &NotificationPayload) -> Result<(), NotificationError> {
            self.posted.lock().unwrap().push((id, payload.clone()));
            Ok(())
        }

        fn clear_all(&self) -> Result<(), NotificationError> {
            self.clears.fetch_add(1, Ordering::SeqCst);
            Err(NotificationError::Delivery("shade unavailable".to_string()))
        }
    }

    fn imagery() -> Imagery {
        Imagery {
            big_picture: ImageRef::new("glide_big_pic"),
            large_icon: ImageRef::new("glide_large_icon"),
        }
    }

    #[test]
    fn test_channel_registered_once() {
        let surface = Arc::new(FlakySurface::default());
        let dispatcher = NotificationDispatcher::new(surface.clone(), NotificationSettings::default());

        assert!(dispatcher.ensure_channel());
        assert!(dispatcher.ensure_channel());
        dispatcher.dispatch(Outcome::Success, "Glide", imagery());
        assert_eq!(surface.registrations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rejected_channel_is_retried() {
        let surface = Arc::new(FlakySurface::default());
        surface.reject_channel_once.store(true, Ordering::SeqCst);
        let dispatcher = NotificationDispatcher::new(surface.clone(), NotificationSettings::default());

        assert!(!dispatcher.ensure_channel());
        assert!(dispatcher.ensure_channel());
        assert_eq!(surface.registrations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_payload_links_to_detail() {
        let dispatcher = NotificationDispatcher::new(
            Arc::new(FlakySurface::default()),
            NotificationSettings::default(),
        );
        let payload = dispatcher.build_payload(Outcome::Failed, "Retrofit", imagery(), Utc::now());

        assert_eq!(payload.tap_action.status.as_deref(), Some("Failed"));
        assert_eq!(payload.tap_action.file_name.as_deref(), Some("Retrofit"));
        assert_eq!(payload.actions.len(), 1);
        assert_eq!(payload.actions[0].label, "Check the status");
        assert_eq!(payload.actions[0].link, payload.tap_action);
        assert_eq!(payload.big_picture, ImageRef::new("glide_big_pic"));
        assert!(payload.auto_cancel);
    }

    #[test]
    fn test_dispatch_uses_fixed_id() {
        let surface = Arc::new(FlakySurface::default());
        let settings = NotificationSettings {
            notification_id: NotificationId(7),
            ..NotificationSettings::default()
        };
        let dispatcher = NotificationDispatcher::new(surface.clone(), settings);

        dispatcher.dispatch(Outcome::Success, "Glide", imagery());
        dispatcher.dispatch(Outcome::Undefined, "LoadApp", imagery());

        let posted = surface.posted.lock().unwrap();
        assert!(posted.iter().all(|(id, _)| *id == NotificationId(7)));
        assert_eq!(posted[1].1.outcome, Outcome::Undefined);
    }

    #[test]
    fn test_clear_failure_is_swallowed() {
        let surface = Arc::new(FlakySurface::default());
        let dispatcher = NotificationDispatcher::new(surface.clone(), NotificationSettings::default());
        dispatcher.clear_stale();
        assert_eq!(surface.clears.load(Ordering::SeqCst), 1);
    }
}
