use crate::{
    color::hex::{hex_to_rgb, serde_color},
    foundation::core::Rgb,
    foundation::error::ChoroResult,
    math::range::step_range,
};

/// Map `value` within `[min, max]` onto the line between `start` and `end`.
///
/// The ratio `(value - min) / (max - min)` is **not** clamped: values outside `[min, max]`
/// extrapolate past the endpoint colors, and each channel is then saturated into `0..=255`.
/// Callers that want the ramp to stop at the endpoints must clamp `value` first.
///
/// A degenerate range (`min == max`) or a non-finite ratio yields `start`.
pub fn interpolate_color(value: f64, min: f64, max: f64, start: Rgb, end: Rgb) -> Rgb {
    let span = max - min;
    let ratio = if span == 0.0 { 0.0 } else { (value - min) / span };
    if !ratio.is_finite() {
        return start;
    }

    fn channel(a: u8, b: u8, ratio: f64) -> u8 {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * ratio).floor().clamp(0.0, 255.0) as u8
    }

    Rgb {
        r: channel(start.r, end.r, ratio),
        g: channel(start.g, end.g, ratio),
        b: channel(start.b, end.b, ratio),
    }
}

/// Start and end colors of a choropleth ramp.
///
/// Serialized as `#RRGGBB` strings; deserialization also accepts `{ "r", "g", "b" }` objects and
/// `[r, g, b]` arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorRamp {
    /// Color at the low end of the value range.
    #[serde(with = "serde_color")]
    pub start: Rgb,
    /// Color at the high end of the value range.
    #[serde(with = "serde_color")]
    pub end: Rgb,
}

impl ColorRamp {
    /// Build a ramp from two colors.
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Build a ramp from two hex strings.
    pub fn from_hex(start: &str, end: &str) -> ChoroResult<Self> {
        Ok(Self {
            start: hex_to_rgb(start)?,
            end: hex_to_rgb(end)?,
        })
    }

    /// See [`interpolate_color`].
    pub fn color_at(&self, value: f64, min: f64, max: f64) -> Rgb {
        interpolate_color(value, min, max, self.start, self.end)
    }

    /// `steps` evenly spaced swatches from `start` to `end`, for legends.
    pub fn legend(&self, steps: usize) -> Vec<Rgb> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.start],
            _ => {
                // integer positions, so the swatch count is exact
                let last = (steps - 1) as f64;
                match step_range(0.0, last, None, 1.0) {
                    Ok(range) => range.iter().map(|v| self.color_at(v, 0.0, last)).collect(),
                    Err(_) => vec![self.start],
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/ramp.rs"]
mod tests;
