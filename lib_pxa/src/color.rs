use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseColorError {
    #[error("invalid color literal {literal:?}: expected \"#RRGGBB\"")]
    InvalidFormat { literal: String },
    #[error("invalid hex digits in color literal {literal:?}")]
    InvalidHexDigits { literal: String },
}

/// An RGB triple. Equality is exact value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// White doubles as the transparent marker during raster export.
    pub const BACKGROUND: Color = Color::WHITE;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses a `#RRGGBB` literal, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::InvalidFormat {
                literal: s.to_string(),
            })?;

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParseColorError::InvalidFormat {
                literal: s.to_string(),
            });
        }

        let component = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::InvalidHexDigits {
                literal: s.to_string(),
            })
        };

        Ok(Color::new(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}
