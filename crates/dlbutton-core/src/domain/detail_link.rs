//! Deep link that opens the detail view.
//!
//! The detail view is invoked with two optional string fields, `status` and
//! `file_name`. [`DetailLink`] carries them and round-trips through a
//! `dlbutton://detail?...` link so a notification surface can store the tap
//! action as an opaque string.

use serde::{Deserialize, Serialize};
use url::Url;

/// Scheme used for links into the application.
pub const LINK_SCHEME: &str = "dlbutton";

/// Host naming the detail view.
pub const DETAIL_HOST: &str = "detail";

/// Query key for the status text.
pub const EXTRA_STATUS: &str = "status";

/// Query key for the file name.
pub const EXTRA_FILE_NAME: &str = "file_name";

/// Invocation context for the detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailLink {
    /// Outcome display text, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// File name, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Error parsing a deep link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetailLinkError {
    /// Not a URL at all.
    #[error("invalid link: {0}")]
    Invalid(String),
    /// A URL, but not one that targets the detail view.
    #[error("link does not target the detail view: {0}")]
    WrongTarget(String),
}

impl DetailLink {
    /// Create a link carrying both fields.
    pub fn new(status: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            file_name: Some(file_name.into()),
        }
    }

    /// Encode as a `dlbutton://detail` link.
    #[must_use]
    pub fn to_link(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(status) = &self.status {
            query.append_pair(EXTRA_STATUS, status);
        }
        if let Some(file_name) = &self.file_name {
            query.append_pair(EXTRA_FILE_NAME, file_name);
        }
        let query = query.finish();
        if query.is_empty() {
            format!("{LINK_SCHEME}://{DETAIL_HOST}")
        } else {
            format!("{LINK_SCHEME}://{DETAIL_HOST}?{query}")
        }
    }

    /// Decode a link produced by [`to_link`](Self::to_link).
    ///
    /// Unknown query keys are ignored; a repeated key keeps its last value.
    pub fn parse(link: &str) -> Result<Self, DetailLinkError> {
        let url = Url::parse(link).map_err(|e| DetailLinkError::Invalid(e.to_string()))?;
        if url.scheme() != LINK_SCHEME || url.host_str() != Some(DETAIL_HOST) {
            return Err(DetailLinkError::WrongTarget(link.to_string()));
        }

        let mut parsed = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                EXTRA_STATUS => parsed.status = Some(value.into_owned()),
                EXTRA_FILE_NAME => parsed.file_name = Some(value.into_owned()),
                _ => {}
            }
        }
        Ok(parsed)
    }
}
