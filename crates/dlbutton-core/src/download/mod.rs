//! Download domain types, errors, request building and classification.
//!
//! No I/O, networking, or runtime dependencies allowed.
//!
//! # Structure
//!
//! - `types` - job ids, handles, requests, status codes, completion events
//! - `errors` - validation and transport errors
//! - `request_builder` - selection → request
//! - `classifier` - completion event → outcome

pub mod classifier;
pub mod errors;
pub mod request_builder;
pub mod types;

pub use classifier::CompletionClassifier;
pub use errors::{TransportError, ValidationError};
pub use request_builder::{DownloadRequestBuilder, PreparedDownload};
pub use types::{CompletionEvent, DownloadHandle, DownloadRequest, JobId, NetworkPolicy, StatusCode};
