use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::format::format_number;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string so render configurations stay readable
/// by web-facing hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

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
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, 1.0)
    }

    /// Same hue with a replaced alpha channel.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }

    /// `#RRGGBB` for opaque colors, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let (red, green, blue) = self.to_rgb8();
        if self.alpha >= 1.0 {
            format!("#{red:02X}{green:02X}{blue:02X}")
        } else {
            format!(
                "rgba({red}, {green}, {blue}, {})",
                format_number(self.alpha)
            )
        }
    }

    /// Parses the CSS color forms dashboards send: `#rgb`, `#rrggbb`,
    /// `#rrggbbaa`, `rgb(...)`, `rgba(...)` and a few keywords.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let raw = input.trim();
        let lower = raw.to_ascii_lowercase();
        match lower.as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(raw));
        }

        let body = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| invalid_color(raw))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid_color(raw));
        }

        let mut channels = [0.0; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let value: f64 = part.parse().map_err(|_| invalid_color(raw))?;
            if !(0.0..=255.0).contains(&value) {
                return Err(invalid_color(raw));
            }
            *slot = value / 255.0;
        }
        let alpha = match parts.get(3) {
            Some(part) => part.parse::<f64>().map_err(|_| invalid_color(raw))?,
            None => 1.0,
        };

        let color = Self::rgba(channels[0], channels[1], channels[2], alpha);
        color.validate()?;
        Ok(color)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_css(&raw).map_err(D::Error::custom)
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);

    match hex.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f64::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn invalid_color(raw: &str) -> ChartError {
    ChartError::InvalidData(format!("unrecognized css color `{raw}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_and_rgba_forms_resolve_to_the_same_channels() {
        let hex = Color::parse_css("#3B82F6").expect("hex");
        let functional = Color::parse_css("rgb(59, 130, 246)").expect("rgb");
        assert_eq!(hex, functional);
        assert_eq!(hex.to_css(), "#3B82F6");
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        let color = Color::from_rgb8(59, 130, 246).with_alpha(0.1);
        assert_eq!(color.to_css(), "rgba(59, 130, 246, 0.1)");
    }

    #[test]
    fn short_hex_expands_nibbles() {
        let color = Color::parse_css("#fff").expect("short hex");
        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Color::parse_css("blue-ish").is_err());
        assert!(Color::parse_css("rgba(300, 0, 0, 1)").is_err());
        assert!(Color::parse_css("#12345").is_err());
    }
}
