use crate::foundation::error::{ChoroError, ChoroResult};

/// Transform applied to statistic values before they are mapped to colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueScale {
    /// Values are used as-is.
    #[default]
    Linear,
    /// `log10(v + 1)`; spreads out skewed data such as population counts. Zero maps to zero.
    Log10,
}

impl ValueScale {
    /// Map a raw value onto this scale.
    pub fn apply(self, value: f64) -> ChoroResult<f64> {
        match self {
            Self::Linear => Ok(value),
            Self::Log10 => {
                if value.is_nan() || value < 0.0 {
                    return Err(ChoroError::InvalidValue(value));
                }
                Ok((value + 1.0).log10())
            }
        }
    }

    /// Inverse of [`ValueScale::apply`], for labelling scaled legend stops.
    pub fn invert(self, scaled: f64) -> ChoroResult<f64> {
        match self {
            Self::Linear => Ok(scaled),
            Self::Log10 => {
                if scaled.is_nan() || scaled < 0.0 {
                    return Err(ChoroError::InvalidValue(scaled));
                }
                Ok(10f64.powf(scaled) - 1.0)
            }
        }
    }
}
