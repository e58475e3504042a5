//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{FuseError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Light gray, the original tool's third background choice.
    pub const LIGHT_GRAY: Self = Self::rgb(0xF0, 0xF0, 0xF0);

    /// Look up one of the named background colours.
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Some(Self::WHITE),
            "black" => Some(Self::BLACK),
            "light-gray" | "light-grey" => Some(Self::LIGHT_GRAY),
            _ => None,
        }
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (3 digits, expanded to 6) and `#RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                let mut digits = hex.chars();
                let r = parse_hex_digit(digits.next().unwrap_or('x'))?;
                let g = parse_hex_digit(digits.next().unwrap_or('x'))?;
                let b = parse_hex_digit(digits.next().unwrap_or('x'))?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(FuseError::Config {
                message: format!("Invalid colour: {}", s),
                help: Some("Use a named colour (white, black, light-gray) or #RGB/#RRGGBB hex".to_string()),
            }),
        }
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to an RGB array, dropping alpha.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = FuseError;

    fn from_str(s: &str) -> Result<Self> {
        match Self::named(s) {
            Some(colour) => Ok(colour),
            None => Self::from_hex(s),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| FuseError::Config {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| FuseError::Config {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#f0f0f0").unwrap();
        assert_eq!(c, Colour::LIGHT_GRAY);
    }

    #[test]
    fn test_from_hex_3digit_expands() {
        let c = Colour::from_hex("#fff").unwrap();
        assert_eq!(c, Colour::WHITE);

        let c = Colour::from_hex("#a1b").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0x11, 0xBB));
    }

    #[test]
    fn test_from_hex_without_prefix() {
        let c = Colour::from_hex("00FF00").unwrap();
        assert_eq!(c, Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#gggggg").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_named_colours() {
        assert_eq!(Colour::named("white"), Some(Colour::WHITE));
        assert_eq!(Colour::named("Black"), Some(Colour::BLACK));
        assert_eq!(Colour::named("light-grey"), Some(Colour::LIGHT_GRAY));
        assert_eq!(Colour::named("chartreuse"), None);
    }

    #[test]
    fn test_from_str_prefers_names() {
        let c: Colour = "white".parse().unwrap();
        assert_eq!(c, Colour::WHITE);

        let c: Colour = "#000000".parse().unwrap();
        assert_eq!(c, Colour::BLACK);

        assert!("mauve".parse::<Colour>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#FF0000");
        assert_eq!(Colour::new(1, 2, 3, 4).to_string(), "#01020304");
    }
}
