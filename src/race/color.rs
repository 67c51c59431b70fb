use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::DatasetError;

/// Boat color as declared by the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoatColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BoatColor {
    /// Used when a roster color cannot be parsed.
    pub const FALLBACK: Self = Self {
        r: 0x9c,
        g: 0xa3,
        b: 0xaf,
    };

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Default for BoatColor {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl FromStr for BoatColor {
    type Err = DatasetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || DatasetError::InvalidColor {
            value: value.to_owned(),
        };
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(invalid)
        };
        match hex.len() {
            6 => Ok(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
            }),
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Ok(Self {
                    r: r.saturating_mul(17),
                    g: g.saturating_mul(17),
                    b: b.saturating_mul(17),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for BoatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for BoatColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
