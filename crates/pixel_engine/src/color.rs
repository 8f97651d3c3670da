use std::fmt::Display;

use regex::Regex;

use crate::{EngineError, Result};

lazy_static::lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();

    static ref RGB_REGEX: Regex = Regex::new(r"^(?i:rgb)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap();

    static ref RGBA_REGEX: Regex = Regex::new(r"^(?i:rgba)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)$").unwrap();
}

/// An 8 bit per channel color with straight alpha.
///
/// This is only used where a token has to become real pixels (PNG export) or
/// where real pixels have to become a token (image import). The editing core
/// keeps tokens as opaque strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Rgba: r={:02X}, g={:02X}, b={:02X}, a={:02X}}}", self.r, self.g, self.b, self.a)
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Parses a cell color token.
    ///
    /// The empty token is an unpainted cell and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidColor`] for anything that is not
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse(token: &str) -> Result<Option<Self>> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }

        if let Some(cap) = HEX_REGEX.captures(token) {
            return Ok(Some(parse_hex_digits(&cap[1])));
        }

        if let Some(cap) = RGB_REGEX.captures(token) {
            let (_, [r, g, b]) = cap.extract();
            return Ok(Some(Rgba::opaque(channel(r, token)?, channel(g, token)?, channel(b, token)?)));
        }

        if let Some(cap) = RGBA_REGEX.captures(token) {
            let (_, [r, g, b, a]) = cap.extract();
            let alpha: f32 = a.parse().map_err(|_| EngineError::invalid_color(token))?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(EngineError::invalid_color(token));
            }
            return Ok(Some(Rgba::new(
                channel(r, token)?,
                channel(g, token)?,
                channel(b, token)?,
                (alpha * 255.0).round() as u8,
            )));
        }

        Err(EngineError::invalid_color(token))
    }

    /// Formats this color as a cell token: `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_token(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (f32::from(self.a) / 255.0 * 1000.0).round() / 1000.0;
            format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
        }
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Rgba::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> [u8; 4] {
        value.to_array()
    }
}

fn channel(digits: &str, token: &str) -> Result<u8> {
    digits.parse::<u8>().map_err(|_| EngineError::invalid_color(token))
}

// Digits are already validated by HEX_REGEX.
fn parse_hex_digits(digits: &str) -> Rgba {
    let nibble = |c: u8| -> u8 {
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => c - b'A' + 10,
        }
    };
    let bytes = digits.as_bytes();
    match bytes.len() {
        3 | 4 => {
            let short = |i: usize| nibble(bytes[i]) * 17;
            let a = if bytes.len() == 4 { short(3) } else { 255 };
            Rgba::new(short(0), short(1), short(2), a)
        }
        _ => {
            let full = |i: usize| nibble(bytes[i]) << 4 | nibble(bytes[i + 1]);
            let a = if bytes.len() == 8 { full(6) } else { 255 };
            Rgba::new(full(0), full(2), full(4), a)
        }
    }
}
