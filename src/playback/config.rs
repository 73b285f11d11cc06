use crate::foundation::error::{ChoroError, ChoroResult};

/// Options controlling playback timing and progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerOpts {
    /// Duration of one year step at speed `1.0`, in milliseconds.
    pub base_step_interval_ms: f64,
    /// Maximum number of progress steps across the year range (slider tick count).
    pub progress_resolution: u32,
}

impl Default for PlayerOpts {
    fn default() -> Self {
        Self {
            base_step_interval_ms: 1000.0,
            progress_resolution: 40,
        }
    }
}

impl PlayerOpts {
    /// Check option ranges.
    pub fn validate(&self) -> ChoroResult<()> {
        validate_step_interval(self.base_step_interval_ms)?;
        if self.progress_resolution == 0 {
            return Err(ChoroError::validation("progress_resolution must be > 0"));
        }
        Ok(())
    }

    /// Step interval for a speed multiplier: `base_step_interval_ms / speed`.
    pub fn step_interval_for_speed(&self, speed: f64) -> ChoroResult<f64> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ChoroError::validation(format!(
                "speed must be > 0, got {speed}"
            )));
        }
        let interval = self.base_step_interval_ms / speed;
        validate_step_interval(interval)?;
        Ok(interval)
    }
}

pub(crate) fn validate_step_interval(ms: f64) -> ChoroResult<()> {
    if !(ms.is_finite() && ms > 0.0) {
        return Err(ChoroError::validation(format!(
            "step interval must be a positive number of milliseconds, got {ms}"
        )));
    }
    Ok(())
}
