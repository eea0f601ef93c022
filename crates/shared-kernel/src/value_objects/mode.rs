// crates/shared-kernel/src/value_objects/mode.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};

/// Unix permission bits applied to every entry of one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct Mode(u32);

impl Mode {
    #[inline]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl From<u32> for Mode {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

impl From<Mode> for u32 {
    fn from(mode: Mode) -> Self {
        mode.bits()
    }
}

/// Parses an octal string such as `"0644"`, `"755"` or `"0o700"`.
impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
        u32::from_str_radix(digits, 8)
            .map(Self)
            .map_err(|e| format!("Invalid mode '{s}': {e}"))
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bits(u32),
            Octal(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bits(bits) => Ok(Self(bits)),
            Repr::Octal(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
