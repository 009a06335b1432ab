//! Named compression level presets.

use std::fmt;
use std::str::FromStr;

/// A named tier that each engine maps to its own numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelPreset {
    /// Fastest compression the engine offers
    Speed,
    /// Smallest output the engine offers
    Size,
    /// The engine's built-in default
    #[default]
    Default,
}

impl LevelPreset {
    /// Parse a preset name. Unrecognized names fall back to [`LevelPreset::Default`].
    pub fn parse(name: &str) -> Self {
        match name {
            "speed" => Self::Speed,
            "size" => Self::Size,
            _ => Self::Default,
        }
    }
}

impl FromStr for LevelPreset {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for LevelPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Speed => "speed",
            Self::Size => "size",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}
