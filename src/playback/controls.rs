//! Option lists for playback controls (year pickers, speed picker, slider ticks).

use crate::{
    foundation::error::{ChoroError, ChoroResult},
    math::range::step_range,
};

/// Every year from `first` to `last`, for year pickers.
pub fn year_options(first: i32, last: i32) -> ChoroResult<Vec<i32>> {
    years(first, last, None)
}

/// Slider tick years from `anchor` toward `target`, at most `resolution` of them.
pub fn slider_ticks(anchor: i32, target: i32, resolution: u32) -> ChoroResult<Vec<i32>> {
    years(anchor, target, Some(resolution as usize))
}

/// Speed multipliers offered to the user: `0.25, 0.5, ..., 2.0`.
pub fn speed_options() -> Vec<f64> {
    step_range(0.25, 2.0, None, 0.25)
        .map(|r| r.iter().collect())
        .unwrap_or_default()
}

fn years(first: i32, last: i32, max_len: Option<usize>) -> ChoroResult<Vec<i32>> {
    if first > last {
        return Err(ChoroError::InvalidRange {
            anchor: first,
            target: last,
        });
    }
    let range = step_range(f64::from(first), f64::from(last), max_len, 1.0)?;
    Ok(range.iter().map(|y| y as i32).collect())
}
