use crate::foundation::core::Rgb;
use crate::foundation::error::{ChoroError, ChoroResult};

/// Parse a `RRGGBB` color, with or without a leading `#`. Case-insensitive.
pub fn hex_to_rgb(hex: &str) -> ChoroResult<Rgb> {
    let s = hex.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ChoroError::invalid_color(format!(
            "expected #RRGGBB, got \"{hex}\""
        )));
    }

    let byte = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .map_err(|_| ChoroError::invalid_color(format!("invalid hex byte in \"{hex}\"")))
    };

    Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Format a color as uppercase `#RRGGBB`.
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

pub(crate) mod serde_color {
    use super::{hex_to_rgb, rgb_to_hex};
    use crate::foundation::core::Rgb;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&rgb_to_hex(*color))
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => hex_to_rgb(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Rgb::new(r, g, b)),
            Repr::Arr(arr) => Ok(Rgb::from(arr)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
