use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, AtlasResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a `#rrggbb` (or `#rrggbbaa`) hex string so config files and
/// frame dumps stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(input: &str) -> AtlasResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        let invalid = || AtlasError::InvalidData(format!("invalid hex color `{input}`"));
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| -> AtlasResult<f64> {
            let raw = u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())?;
            Ok(f64::from(raw) / 255.0)
        };
        let short = |index: usize| -> AtlasResult<f64> {
            let raw = u8::from_str_radix(&digits[index..=index], 16).map_err(|_| invalid())?;
            Ok(f64::from(raw * 17) / 255.0)
        };

        match digits.len() {
            3 => Ok(Self::rgb(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Formats as `#rrggbb`, appending alpha only when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if byte(self.alpha) == u8::MAX {
            rgb
        } else {
            format!("{rgb}{:02x}", byte(self.alpha))
        }
    }

    /// Scales RGB channels toward black by `amount` (0 keeps the color, 1 is black).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        let factor = 1.0 - amount.clamp(0.0, 1.0);
        Self::rgba(
            self.red * factor,
            self.green * factor,
            self.blue * factor,
            self.alpha,
        )
    }

    pub fn validate(self) -> AtlasResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AtlasError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = AtlasError;

    fn try_from(value: String) -> AtlasResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}
