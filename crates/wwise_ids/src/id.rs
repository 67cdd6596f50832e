//! Core identifier types shared by every binding category

use serde::{Deserialize, Serialize};
use std::fmt;

/// 32-bit identifier assigned by the authoring tool.
///
/// Values are FNV-1 hashes of the lowercased authoring object name
/// (see [`crate::hash`]). Zero is reserved; no generated binding
/// carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UniqueId(u32);

impl UniqueId {
    /// The reserved invalid identifier
    pub const INVALID: Self = Self(0);

    /// Wrap a raw 32-bit identifier
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw 32-bit value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check whether this is a real generated identifier
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<u32> for UniqueId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<UniqueId> for u32 {
    fn from(id: UniqueId) -> Self {
        id.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binding categories found in a generated header
///
/// The audio engine matches purely on the integer value; the category
/// is a grouping convention carried through so tables stay readable
/// and collisions can be checked per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Named playback trigger
    Event,
    /// Discrete mode switch group
    StateGroup,
    /// Member of a state group
    State,
    /// Continuous mixing parameter (RTPC)
    GameParameter,
    /// Loadable bundle of audio assets
    Bank,
    /// Mixing-graph routing node
    Bus,
    /// Output endpoint
    AudioDevice,
}

impl Category {
    /// Section namespace used by the generated header, if the category
    /// owns one. States live nested inside their group's section and
    /// have no section of their own.
    #[must_use]
    pub const fn section(self) -> Option<&'static str> {
        match self {
            Self::Event => Some("EVENTS"),
            Self::StateGroup => Some("STATES"),
            Self::State => None,
            Self::GameParameter => Some("GAME_PARAMETERS"),
            Self::Bank => Some("BANKS"),
            Self::Bus => Some("BUSSES"),
            Self::AudioDevice => Some("AUDIO_DEVICES"),
        }
    }

    /// Lowercase label for logs and reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::StateGroup => "state group",
            Self::State => "state",
            Self::GameParameter => "game parameter",
            Self::Bank => "bank",
            Self::Bus => "bus",
            Self::AudioDevice => "audio device",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id() {
        assert!(!UniqueId::INVALID.is_valid());
        assert!(UniqueId::new(4030404899).is_valid());
    }

    #[test]
    fn test_raw_conversions() {
        let id = UniqueId::from(1355168291u32);
        assert_eq!(id.value(), 1355168291);
        assert_eq!(u32::from(id), 1355168291);
    }

    #[test]
    fn test_display() {
        assert_eq!(UniqueId::new(42).to_string(), "42");
        assert_eq!(Category::GameParameter.to_string(), "game parameter");
    }

    #[test]
    fn test_sections() {
        assert_eq!(Category::Event.section(), Some("EVENTS"));
        assert_eq!(Category::State.section(), None);
        assert_eq!(Category::Bus.section(), Some("BUSSES"));
    }
}
