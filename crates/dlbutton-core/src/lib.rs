//! Core domain types, ports and settings for the dlbutton download screen.
//!
//! This crate holds everything that does not touch I/O: the data model that
//! flows between the animated control, the download transport and the
//! notification surface, the port traits those external systems implement,
//! the request builder and the completion classifier.
//!
//! # Structure
//!
//! - `domain` - button state, artifact selection, outcomes, notification payloads
//! - `download` - download requests, handles, the request builder and the classifier
//! - `ports` - trait abstractions for the transport, notification and message surfaces
//! - `settings` - serde-backed configuration with validation

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod download;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ArtifactCatalog, ArtifactChoice, ArtifactSpec, ButtonState, DetailLink, DetailLinkError,
    ImageRef, Importance, NotificationAction, NotificationChannel, NotificationId,
    NotificationPayload, Outcome, Selection, UnknownArtifact,
};
pub use download::{
    CompletionClassifier, CompletionEvent, DownloadHandle, DownloadRequest,
    DownloadRequestBuilder, JobId, NetworkPolicy, PreparedDownload, StatusCode, TransportError,
    ValidationError,
};
pub use ports::{
    DownloadTransportPort, NoopNotificationSurface, NotificationError,
    NotificationSurfacePort, UserMessagePort,
};
pub use settings::{
    AnimationSettings, ButtonSettings, HandbackSettings, NotificationSettings, RequestCopy,
    Settings, SettingsError, validate_settings,
};
