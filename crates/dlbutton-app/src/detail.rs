//! Detail view opened from a download notification.

use dlbutton_core::{DetailLink, NotificationSurfacePort};
use tracing::{debug, warn};

/// Passive display of a finished download's status and file name.
///
/// Fields that were not supplied by the link render as nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailView {
    status: Option<String>,
    file_name: Option<String>,
    open: bool,
}

impl DetailView {
    /// Open the view for a deep link.
    ///
    /// Opening counts as acknowledging every pending download notification,
    /// so all of them are cleared, not only the one that was tapped.
    pub fn open(link: DetailLink, surface: &dyn NotificationSurfacePort) -> Self {
        if let Err(err) = surface.clear_all() {
            warn!(error = %err, "Failed to clear notifications when opening detail view");
        }
        debug!(status = ?link.status, file_name = ?link.file_name, "Opened detail view");
        Self {
            status: link.status,
            file_name: link.file_name,
            open: true,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Rows to render, one per supplied field.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(status) = &self.status {
            lines.push(format!("Status: {status}"));
        }
        if let Some(file_name) = &self.file_name {
            lines.push(format!("File name: {file_name}"));
        }
        lines
    }

    /// Close the view.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlbutton_core::{NotificationChannel, NotificationError, NotificationId, NotificationPayload};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSurface {
        clears: AtomicUsize,
    }

    impl NotificationSurfacePort for CountingSurface {
        fn register_channel(&self, _channel: &NotificationChannel) -> Result<(), NotificationError> {
            Ok(())
        }

        fn post(&self, _id: NotificationId, _payload: &NotificationPayload) -> Result<(), NotificationError> {
            Ok(())
        }

        fn clear_all(&self) -> Result<(), NotificationError> {
            self.clears.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_open_clears_all_notifications() {
        let surface = CountingSurface::default();
        let view = DetailView::open(DetailLink::new("Successful", "Glide"), &surface);
        assert_eq!(surface.clears.load(Ordering::SeqCst), 1);
        assert!(view.is_open());
        assert_eq!(view.status(), Some("Successful"));
        assert_eq!(view.file_name(), Some("Glide"));
    }

    #[test]
    fn test_missing_fields_render_nothing() {
        let link = DetailLink {
            status: Some("Failed".to_string()),
            file_name: None,
        };
        let view = DetailView::open(link, &CountingSurface::default());
        assert_eq!(view.file_name(), None);
        assert_eq!(view.lines(), vec!["Status: Failed".to_string()]);

        let empty = DetailView::open(DetailLink::default(), &CountingSurface::default());
        assert!(empty.lines().is_empty());
    }

    #[test]
    fn test_values_are_shown_verbatim() {
        let view = DetailView::open(
            DetailLink::new("Undefined", "Retrofit - Type-safe HTTP client"),
            &CountingSurface::default(),
        );
        assert_eq!(
            view.lines(),
            vec![
                "Status: Undefined".to_string(),
                "File name: Retrofit - Type-safe HTTP client".to_string(),
            ]
        );
    }

    #[test]
    fn test_dismiss_closes() {
        let mut view = DetailView::open(DetailLink::default(), &CountingSurface::default());
        view.dismiss();
        assert!(!view.is_open());
    }
}
