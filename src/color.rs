//! Color literals accepted in diagrams and canvas configs.
//!
//! Supported forms: `#RGB`, `#RRGGBB`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! and `transparent`. SVG gets the opaque part as a hex literal and the
//! alpha as a separate `*-opacity` attribute, which every renderer honors.

use crate::error::RenderError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref RE_HEX: Regex = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
    static ref RE_RGB: Regex = Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$"
    )
    .unwrap();
}

/// An sRGB color with straight alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0.0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color literal.
    pub fn parse(input: &str) -> Result<Self, RenderError> {
        let s = input.trim();
        let invalid = || RenderError::InvalidColor {
            value: input.to_string(),
        };

        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }

        if let Some(caps) = RE_HEX.captures(s) {
            let digits = &caps[1];
            let expanded: String = if digits.len() == 3 {
                digits.chars().flat_map(|c| [c, c]).collect()
            } else {
                digits.to_string()
            };
            let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(caps) = RE_RGB.captures(s) {
            let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
            let a = match caps.get(4) {
                Some(m) => m.as_str().parse::<f64>().map_err(|_| invalid())?,
                None => 1.0,
            };
            if !(0.0..=1.0).contains(&a) {
                return Err(invalid());
            }
            return Ok(Color::rgba(channel(1)?, channel(2)?, channel(3)?, a));
        }

        Err(invalid())
    }

    /// `#RRGGBB`, ignoring alpha
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.hex())
        } else if self.is_transparent() && (self.r, self.g, self.b) == (0, 0, 0) {
            write!(f, "transparent")
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
