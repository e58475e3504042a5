//! Background selection for composed canvases.

use std::fmt;
use std::str::FromStr;

use crate::error::FuseError;

use super::Colour;

/// Canvas background: an opaque fill colour or fully transparent.
///
/// `Transparent` forces the canvas into RGBA mode with every pixel at zero
/// alpha before any paste; a solid colour gives an RGB canvas filled with
/// that colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(Colour),
    Transparent,
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid(Colour::WHITE)
    }
}

impl FromStr for Background {
    type Err = FuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }
        s.parse::<Colour>().map(Self::Solid)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(colour) => colour.fmt(f),
            Self::Transparent => write!(f, "transparent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transparent_sentinel() {
        assert_eq!("transparent".parse::<Background>().unwrap(), Background::Transparent);
        assert_eq!("TRANSPARENT".parse::<Background>().unwrap(), Background::Transparent);
        assert_eq!(" Transparent ".parse::<Background>().unwrap(), Background::Transparent);
    }

    #[test]
    fn test_parse_named_and_hex() {
        assert_eq!(
            "white".parse::<Background>().unwrap(),
            Background::Solid(Colour::WHITE)
        );
        assert_eq!(
            "#102030".parse::<Background>().unwrap(),
            Background::Solid(Colour::rgb(0x10, 0x20, 0x30))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("seethrough".parse::<Background>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Background::Transparent.to_string(), "transparent");
        assert_eq!(Background::Solid(Colour::BLACK).to_string(), "#000000");
    }
}
