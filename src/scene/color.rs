//! RGB color value type used by scene nodes and materials.
//!
//! Colors are stored as linear float channels in `[0.0, 1.0]` and can be
//! built from a packed `0xRRGGBB` integer or parsed from a string
//! (`"#rgb"`, `"#rrggbb"`, `"0xRRGGBB"`, or a small set of CSS-style names).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RGB color with float channels in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value. Bits above the low 24
    /// are ignored.
    pub fn from_hex(hex: u32) -> Self {
        let hex = hex & 0x00FF_FFFF;
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Parse a color from a string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `0xRRGGBB` and a handful of CSS-style
    /// color names. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));
        if let Some(digits) = hex {
            return match digits.len() {
                3 => {
                    let v = u32::from_str_radix(digits, 16).ok()?;
                    let (r, g, b) = ((v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF);
                    // Expand each nibble: #f80 -> #ff8800
                    Some(Self::from_hex((r * 17) << 16 | (g * 17) << 8 | (b * 17)))
                }
                6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
                _ => None,
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Some(Self::WHITE),
            "black" => Some(Self::BLACK),
            "red" => Some(Self::from_hex(0xFF0000)),
            "green" => Some(Self::from_hex(0x00FF00)),
            "blue" => Some(Self::from_hex(0x0000FF)),
            "yellow" => Some(Self::from_hex(0xFFFF00)),
            "cyan" => Some(Self::from_hex(0x00FFFF)),
            "magenta" => Some(Self::from_hex(0xFF00FF)),
            "orange" => Some(Self::from_hex(0xFFA500)),
            "gray" | "grey" => Some(Self::from_hex(0x808080)),
            _ => None,
        }
    }

    /// Lenient conversion from a JSON value: a number is read as a packed
    /// `0xRRGGBB` integer, a string goes through [`Color::parse`], and an
    /// object with `r`/`g`/`b` float channels is taken as-is. Anything else
    /// yields `None`.
    pub fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(|v| Self::from_hex(v as u32)),
            Value::String(s) => Self::parse(s),
            Value::Object(map) => {
                let channel = |key: &str| map.get(key).and_then(Value::as_f64);
                match (channel("r"), channel("g"), channel("b")) {
                    (Some(r), Some(g), Some(b)) => Some(Self::new(r as f32, g as f32, b as f32)),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_from_hex_channels() {
        let c = Color::from_hex(0xFF8000);
        assert!(approx_eq(c.r, 1.0));
        assert!(approx_eq(c.g, 128.0 / 255.0));
        assert!(approx_eq(c.b, 0.0));
    }

    #[test]
    fn test_from_hex_ignores_high_bits() {
        assert_eq!(Color::from_hex(0xFF00_00FF), Color::from_hex(0x0000FF));
    }

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Color::parse("#ff0000"), Some(Color::from_hex(0xFF0000)));
        assert_eq!(Color::parse("0x00ff00"), Some(Color::from_hex(0x00FF00)));
    }

    #[test]
    fn test_parse_short_hex_expands_nibbles() {
        assert_eq!(Color::parse("#f80"), Some(Color::from_hex(0xFF8800)));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("white"), Some(Color::WHITE));
        assert_eq!(Color::parse("Red"), Some(Color::from_hex(0xFF0000)));
        assert_eq!(Color::parse("grey"), Color::parse("gray"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("not-a-color"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(Color::coerce(&json!(0x0000FF)), Some(Color::from_hex(0x0000FF)));
    }

    #[test]
    fn test_coerce_string() {
        assert_eq!(Color::coerce(&json!("#00ff00")), Some(Color::from_hex(0x00FF00)));
    }

    #[test]
    fn test_coerce_object() {
        let c = Color::coerce(&json!({"r": 0.5, "g": 0.25, "b": 1.0})).unwrap();
        assert!(approx_eq(c.r, 0.5));
        assert!(approx_eq(c.g, 0.25));
        assert!(approx_eq(c.b, 1.0));
    }

    #[test]
    fn test_coerce_rejects_other_values() {
        assert_eq!(Color::coerce(&json!(true)), None);
        assert_eq!(Color::coerce(&json!([1, 2, 3])), None);
        assert_eq!(Color::coerce(&json!({"r": 1.0})), None);
    }
}
