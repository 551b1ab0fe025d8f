//! Turns the user's selection into a download request.

use crate::domain::{ArtifactChoice, Selection};
use crate::settings::RequestCopy;

use super::errors::ValidationError;
use super::types::{DownloadRequest, NetworkPolicy};

/// A request ready for submission, plus the file name the notification and
/// detail view will show once the download finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedDownload {
    /// Request for the transport.
    pub request: DownloadRequest,
    /// Human-readable name of the selected artifact.
    pub file_name: String,
    /// Which artifact was selected.
    pub choice: ArtifactChoice,
}

/// Builds [`DownloadRequest`]s with fixed copy and network policy.
///
/// Construction only; submitting the request is the caller's job.
#[derive(Clone, Debug)]
pub struct DownloadRequestBuilder {
    copy: RequestCopy,
    policy: NetworkPolicy,
}

impl DownloadRequestBuilder {
    /// Create a builder using the given title/description copy.
    #[must_use]
    pub const fn new(copy: RequestCopy) -> Self {
        Self {
            copy,
            policy: NetworkPolicy::permissive(),
        }
    }

    /// Build the request for a selection.
    ///
    /// Fails fast with [`ValidationError::NoSelection`] when nothing is
    /// selected; this is the only validation in the download flow.
    pub fn build(&self, selection: Option<&Selection>) -> Result<PreparedDownload, ValidationError> {
        let selection = selection.ok_or(ValidationError::NoSelection)?;
        Ok(PreparedDownload {
            request: DownloadRequest {
                url: selection.display_url.clone(),
                title: self.copy.title.clone(),
                description: self.copy.description.clone(),
                policy: self.policy,
            },
            file_name: selection.display_name.clone(),
            choice: selection.choice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtifactCatalog, ArtifactChoice};

    fn builder() -> DownloadRequestBuilder {
        DownloadRequestBuilder::new(RequestCopy::default())
    }

    #[test]
    fn test_no_selection_fails_fast() {
        assert_eq!(builder().build(None), Err(ValidationError::NoSelection));
    }

    #[test]
    fn test_builds_request_from_selection() {
        let selection = ArtifactCatalog::default()
            .select(ArtifactChoice::Retrofit)
            .unwrap();
        let prepared = builder().build(Some(&selection)).unwrap();

        assert_eq!(prepared.request.url, selection.display_url);
        assert_eq!(prepared.file_name, selection.display_name);
        assert_eq!(prepared.request.title, RequestCopy::default().title);
        assert_eq!(prepared.request.description, RequestCopy::default().description);
        assert!(prepared.request.allow_metered_network());
        assert!(prepared.request.allow_roaming());
        assert!(!prepared.request.require_charging());
    }

    #[test]
    fn test_build_is_deterministic() {
        let selection = ArtifactCatalog::default().select(ArtifactChoice::Glide).unwrap();
        let b = builder();
        assert_eq!(b.build(Some(&selection)), b.build(Some(&selection)));
    }
}
