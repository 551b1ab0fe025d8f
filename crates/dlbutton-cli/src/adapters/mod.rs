//! Terminal and network adapters for the screen's ports.

pub mod http_transport;
pub mod terminal;
pub mod text_canvas;

pub use http_transport::HttpTransport;
pub use terminal::{TerminalFrameSink, TerminalMessages, TerminalNotifications};
pub use text_canvas::{CELL_CIRCLE_MARGIN, CellMeasurer, TextCanvas};
