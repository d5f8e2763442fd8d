//! Sandbox construction settings.

use std::str::FromStr;

use crate::error::SandboxError;

/// Named grid sizes offered by launchers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SizePreset {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizePreset {
    /// `(width, height)` in tiles. `Small` is the classic 80×45 board;
    /// `Medium` and `Large` are its 2× and 4× scale-ups added for bigger
    /// screens.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Small => (80, 45),
            Self::Medium => (160, 90),
            Self::Large => (320, 180),
        }
    }
}

impl FromStr for SizePreset {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(SandboxError::UnknownPreset(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SandboxConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed RNG seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self::from_preset(SizePreset::default())
    }
}

impl SandboxConfig {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }

    #[must_use]
    pub const fn from_preset(preset: SizePreset) -> Self {
        let (width, height) = preset.dimensions();
        Self::new(width, height)
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
