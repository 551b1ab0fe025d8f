//! Selectable artifacts and the user's current selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::notification::ImageRef;

/// One of the fixed set of artifacts the selector offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactChoice {
    /// Glide image loading library.
    Glide,
    /// The `LoadApp` starter project.
    LoadApp,
    /// Retrofit HTTP client.
    Retrofit,
}

impl ArtifactChoice {
    /// All choices in selector order.
    pub const ALL: [Self; 3] = [Self::Glide, Self::LoadApp, Self::Retrofit];

    /// Stable identifier used in settings and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Glide => "glide",
            Self::LoadApp => "load_app",
            Self::Retrofit => "retrofit",
        }
    }
}

impl fmt::Display for ArtifactChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known artifact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown artifact '{0}' (expected one of: glide, load_app, retrofit)")]
pub struct UnknownArtifact(pub String);

impl FromStr for ArtifactChoice {
    type Err = UnknownArtifact;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "glide" => Ok(Self::Glide),
            "load_app" | "loadapp" | "app" => Ok(Self::LoadApp),
            "retrofit" => Ok(Self::Retrofit),
            _ => Err(UnknownArtifact(s.to_string())),
        }
    }
}

/// Static description of a downloadable artifact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Which selector entry this describes.
    pub choice: ArtifactChoice,
    /// Source URL of the archive.
    pub url: String,
    /// Human-readable file name shown in the notification and detail view.
    pub file_name: String,
    /// Artifact-specific expanded notification image.
    pub big_picture: ImageRef,
    /// Artifact-specific notification icon.
    pub large_icon: ImageRef,
}

/// What the user picked in the selector.
///
/// The orchestration layer holds an `Option<Selection>`; `None` means
/// nothing has been chosen yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selector entry.
    pub choice: ArtifactChoice,
    /// URL that will be downloaded.
    pub display_url: String,
    /// Human-readable name of the artifact.
    pub display_name: String,
}

/// The fixed catalog of artifacts, keyed by [`ArtifactChoice`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactCatalog {
    entries: Vec<ArtifactSpec>,
}

impl ArtifactCatalog {
    /// Build a catalog from explicit entries.
    #[must_use]
    pub const fn new(entries: Vec<ArtifactSpec>) -> Self {
        Self { entries }
    }

    /// Look up the entry for a choice.
    #[must_use]
    pub fn get(&self, choice: ArtifactChoice) -> Option<&ArtifactSpec> {
        self.entries.iter().find(|entry| entry.choice == choice)
    }

    /// Resolve a selector choice into a [`Selection`].
    ///
    /// Returns `None` when the catalog has no entry for the choice, which the
    /// caller treats exactly like "nothing selected".
    #[must_use]
    pub fn select(&self, choice: ArtifactChoice) -> Option<Selection> {
        self.get(choice).map(|spec| Selection {
            choice,
            display_url: spec.url.clone(),
            display_name: spec.file_name.clone(),
        })
    }

    /// Big picture and large icon for a choice.
    #[must_use]
    pub fn imagery(&self, choice: ArtifactChoice) -> Option<(&ImageRef, &ImageRef)> {
        self.get(choice)
            .map(|spec| (&spec.big_picture, &spec.large_icon))
    }

    /// Iterate over all entries in selector order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtifactSpec> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ArtifactCatalog {
    fn default() -> Self {
        Self::new(vec![
            ArtifactSpec {
                choice: ArtifactChoice::Glide,
                url: "https://github.com/bumptech/glide/archive/master.zip".to_string(),
                file_name: "Glide - Image Loading Library by BumpTech".to_string(),
                big_picture: ImageRef::new("glide_big_pic"),
                large_icon: ImageRef::new("glide_large_icon"),
            },
            ArtifactSpec {
                choice: ArtifactChoice::LoadApp,
                url: "https://github.com/udacity/nd940-c3-advanced-android-programming-project-starter/archive/master.zip".to_string(),
                file_name: "LoadApp - Current repository by Udacity".to_string(),
                big_picture: ImageRef::new("app_big_pic"),
                large_icon: ImageRef::new("app_large_icon"),
            },
            ArtifactSpec {
                choice: ArtifactChoice::Retrofit,
                url: "https://github.com/square/retrofit/archive/master.zip".to_string(),
                file_name: "Retrofit - Type-safe HTTP client for Android and Java by Square, Inc"
                    .to_string(),
                big_picture: ImageRef::new("retrofit_big_pic"),
                large_icon: ImageRef::new("retrofit_large_icon"),
            },
        ])
    }
}
