//! Domain types shared by the control, the orchestration layer and adapters.
//!
//! Pure data types with no I/O dependencies.

pub mod artifact;
pub mod button;
pub mod detail_link;
pub mod notification;
pub mod outcome;

pub use artifact::{ArtifactCatalog, ArtifactChoice, ArtifactSpec, Selection, UnknownArtifact};
pub use button::ButtonState;
pub use detail_link::{DetailLink, DetailLinkError};
pub use notification::{
    ImageRef, Importance, NotificationAction, NotificationChannel, NotificationId,
    NotificationPayload,
};
pub use outcome::Outcome;
