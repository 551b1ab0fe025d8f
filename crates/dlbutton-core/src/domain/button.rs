//! Logical state of the loading button.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-phase lifecycle of the download button.
///
/// `Completed` is both the initial state and the state the button returns
/// to after every download; it is re-enterable. `Clicked` is entered
/// synchronously on user interaction, before anything is committed.
/// `Loading` persists until the button is explicitly reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    /// Idle; the only state in which a click means something.
    #[default]
    Completed,
    /// Momentary state after a click, before the animation starts.
    Clicked,
    /// Animating until reset.
    Loading,
}

impl ButtonState {
    /// Lowercase name used in logs and snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Clicked => "clicked",
            Self::Loading => "loading",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_completed() {
        assert_eq!(ButtonState::default(), ButtonState::Completed);
        assert_eq!(ButtonState::Loading.to_string(), "loading");
    }
}
