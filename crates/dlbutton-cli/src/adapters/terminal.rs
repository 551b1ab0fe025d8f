//! Terminal implementations of the screen's output ports.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use dlbutton_app::{DetailView, FrameSink};
use dlbutton_control::{Color, LoadingButton};
use dlbutton_core::{
    NotificationChannel, NotificationError, NotificationId, NotificationPayload,
    NotificationSurfacePort, UserMessagePort,
};
use tracing::{debug, warn};

use super::text_canvas::TextCanvas;

const fn terminal_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.red(),
        g: color.green(),
        b: color.blue(),
    }
}

/// Redraws the button in place on every frame.
pub struct TerminalFrameSink<W: Write + Send> {
    out: W,
    drawn_rows: usize,
}

impl TerminalFrameSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalFrameSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out, drawn_rows: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, canvas: &TextCanvas) -> io::Result<()> {
        if self.drawn_rows > 1 {
            let up = u16::try_from(self.drawn_rows - 1).unwrap_or(u16::MAX);
            queue!(self.out, MoveUp(up))?;
        }
        queue!(self.out, MoveToColumn(0))?;

        for row in 0..canvas.height() {
            if row > 0 {
                queue!(self.out, Print("\r\n"))?;
            }
            for cell in canvas.row(row) {
                queue!(self.out, SetBackgroundColor(terminal_color(cell.bg)))?;
                if let Some(fg) = cell.fg {
                    queue!(self.out, SetForegroundColor(terminal_color(fg)))?;
                }
                queue!(self.out, Print(cell.ch))?;
            }
            queue!(self.out, ResetColor)?;
        }
        self.drawn_rows = canvas.height();
        self.out.flush()
    }
}

impl<W: Write + Send> FrameSink for TerminalFrameSink<W> {
    fn present(&mut self, button: &LoadingButton) {
        let size = button.size();
        let mut canvas = TextCanvas::new(size.width as usize, size.height as usize);
        if canvas.width() == 0 || canvas.height() == 0 {
            return;
        }
        button.draw(&mut canvas);
        if let Err(err) = self.render(&canvas) {
            warn!(error = %err, "Failed to draw button");
        }
    }

    fn present_detail(&mut self, detail: &DetailView) {
        let mut text = String::from("\n\nDownload details\n");
        for line in detail.lines() {
            text.push_str("  ");
            text.push_str(&line);
            text.push('\n');
        }
        self.drawn_rows = 0;
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!(error = %err, "Failed to show detail view");
        }
    }
}

/// Prints notifications and remembers which ones are showing.
#[derive(Default)]
pub struct TerminalNotifications {
    shown: Mutex<HashMap<NotificationId, NotificationPayload>>,
}

impl TerminalNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications currently showing.
    pub fn shown(&self) -> Vec<NotificationPayload> {
        self.shown
            .lock()
            .map(|shown| shown.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Text printed for a notification.
    pub fn describe(payload: &NotificationPayload) -> String {
        let mut text = format!(
            "[{}] {}\n  {}: {}",
            payload.title,
            payload.body_text,
            payload.outcome.display_text(),
            payload.file_name
        );
        for action in &payload.actions {
            text.push_str(&format!("\n  {} -> {}", action.label, action.link.to_link()));
        }
        text
    }
}

impl NotificationSurfacePort for TerminalNotifications {
    fn register_channel(&self, channel: &NotificationChannel) -> Result<(), NotificationError> {
        debug!(channel_id = %channel.id, name = %channel.name, "Registered terminal channel");
        Ok(())
    }

    fn post(&self, id: NotificationId, payload: &NotificationPayload) -> Result<(), NotificationError> {
        let mut shown = self
            .shown
            .lock()
            .map_err(|_| NotificationError::Delivery("notification table poisoned".to_string()))?;
        shown.insert(id, payload.clone());
        println!("\n\n{}", Self::describe(payload));
        Ok(())
    }

    fn clear_all(&self) -> Result<(), NotificationError> {
        let mut shown = self
            .shown
            .lock()
            .map_err(|_| NotificationError::Delivery("notification table poisoned".to_string()))?;
        shown.clear();
        Ok(())
    }
}

/// Prints transient messages to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalMessages;

impl UserMessagePort for TerminalMessages {
    fn show_message(&self, text: &str) {
        eprintln!("\n{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::text_canvas::CellMeasurer;
    use dlbutton_app::{Imagery, NotificationDispatcher};
    use dlbutton_control::ButtonStyle;
    use dlbutton_core::{ImageRef, NotificationSettings, Outcome};
    use std::sync::Arc;
    use std::time::Duration;

    fn imagery() -> Imagery {
        Imagery {
            big_picture: ImageRef::new("glide_big_pic"),
            large_icon: ImageRef::new("glide_large_icon"),
        }
    }

    #[test]
    fn test_notifications_replace_by_id() {
        let surface = Arc::new(TerminalNotifications::new());
        let dispatcher = NotificationDispatcher::new(surface.clone(), NotificationSettings::default());

        dispatcher.dispatch(Outcome::Success, "Glide", imagery());
        dispatcher.dispatch(Outcome::Failed, "Glide", imagery());
        let shown = surface.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].outcome, Outcome::Failed);

        surface.clear_all().unwrap();
        assert!(surface.shown().is_empty());
    }

    #[test]
    fn test_describe_includes_status_and_action() {
        let surface = Arc::new(TerminalNotifications::new());
        let dispatcher = NotificationDispatcher::new(surface, NotificationSettings::default());
        let payload = dispatcher.dispatch(Outcome::Undefined, "Glide", imagery());

        let text = TerminalNotifications::describe(&payload);
        assert!(text.starts_with("[Download finished]"));
        assert!(text.contains("Undefined: Glide"));
        assert!(text.contains("Check the status -> "));
    }

    #[test]
    fn test_frame_sink_writes_label() {
        let mut button = LoadingButton::new(
            ButtonStyle::default(),
            Arc::new(CellMeasurer),
            Duration::from_secs(3),
        );
        button.set_size(20.0, 1.0);

        let mut sink = TerminalFrameSink::new(Vec::new());
        sink.present(&button);
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.contains('D'));
        assert!(written.contains('w'));
    }
}
