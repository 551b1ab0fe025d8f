//! Transient user message port (toast/snackbar).

/// Shows short, dismissible messages to the user.
pub trait UserMessagePort: Send + Sync {
    /// Display a message. Must not block.
    fn show_message(&self, text: &str);
}
