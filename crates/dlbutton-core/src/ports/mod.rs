//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from the platform. They
//! contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - Calls are synchronous and must not block; asynchronous completion is
//!   delivered out of band
//! - Adapters own their transport details (HTTP, terminal, OS shade)

pub mod notification_surface;
pub mod transport;
pub mod user_message;

pub use notification_surface::{NoopNotificationSurface, NotificationError, NotificationSurfacePort};
pub use transport::DownloadTransportPort;
pub use user_message::UserMessagePort;

#[cfg(test)]
pub use transport::MockDownloadTransportPort;
