use std::sync::Arc;

use crate::{
    color::ramp::ColorRamp,
    foundation::core::Rgb,
    foundation::error::{ChoroError, ChoroResult},
    math::interp::interpolate_value_by_time,
    paint::surface::RegionFeature,
    stats::{dataset::StatisticSeries, lookup::lookup, scale::ValueScale},
};

/// Value range mapped onto the color ramp (raw, before scaling).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueBounds {
    /// Value painted with the ramp's start color.
    pub min: f64,
    /// Value painted with the ramp's end color.
    pub max: f64,
}

impl ValueBounds {
    /// Checked constructor: both ends finite and `min <= max`.
    pub fn new(min: f64, max: f64) -> ChoroResult<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(ChoroError::validation("value bounds must be finite"));
        }
        if min > max {
            return Err(ChoroError::validation(format!(
                "value bounds min {min} is greater than max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Smallest and largest value of the whole series.
    pub fn from_series(series: &StatisticSeries) -> ChoroResult<Self> {
        let (min, max) = series.value_bounds()?;
        Self::new(min, max)
    }
}

/// Outcome of one paint pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PaintReport {
    /// Regions whose fill was rewritten.
    pub painted: usize,
    /// Regions skipped because their code is not in the dataset.
    pub unknown_region: usize,
    /// Regions skipped because one of the two years is not in the dataset.
    pub unknown_year: usize,
    /// Regions skipped because the dataset has no value for one of the two years.
    pub missing_value: usize,
    /// Regions skipped because a value could not be scaled.
    pub invalid_value: usize,
}

impl PaintReport {
    /// Regions left at their previous style.
    pub fn skipped(&self) -> usize {
        self.unknown_region + self.unknown_year + self.missing_value + self.invalid_value
    }

    fn record(&mut self, err: &ChoroError) {
        match err {
            ChoroError::UnknownRegion(_) => self.unknown_region += 1,
            ChoroError::UnknownYear(_) => self.unknown_year += 1,
            ChoroError::MissingValue { .. } => self.missing_value += 1,
            _ => self.invalid_value += 1,
        }
    }
}

/// Colors every region for one frame.
///
/// A region whose lookup fails keeps its previous style; the failure is counted in the
/// returned [`PaintReport`] and the pass continues with the next region.
#[derive(Clone, Debug)]
pub struct RegionPainter {
    series: Arc<StatisticSeries>,
    ramp: ColorRamp,
    bounds: ValueBounds,
    scale: ValueScale,
    // bounds after `scale`
    scaled_min: f64,
    scaled_max: f64,
}

impl RegionPainter {
    /// Linear-scale painter.
    pub fn new(
        series: Arc<StatisticSeries>,
        ramp: ColorRamp,
        bounds: ValueBounds,
    ) -> ChoroResult<Self> {
        Self::with_scale(series, ramp, bounds, ValueScale::Linear)
    }

    /// Painter that maps values through `scale` before coloring.
    pub fn with_scale(
        series: Arc<StatisticSeries>,
        ramp: ColorRamp,
        bounds: ValueBounds,
        scale: ValueScale,
    ) -> ChoroResult<Self> {
        let (scaled_min, scaled_max) = scale_bounds(bounds, scale)?;
        Ok(Self {
            series,
            ramp,
            bounds,
            scale,
            scaled_min,
            scaled_max,
        })
    }

    /// Dataset being painted.
    pub fn series(&self) -> &Arc<StatisticSeries> {
        &self.series
    }

    /// Current color ramp.
    pub fn ramp(&self) -> ColorRamp {
        self.ramp
    }

    /// Replace the ramp; takes effect on the next pass.
    pub fn set_ramp(&mut self, ramp: ColorRamp) {
        self.ramp = ramp;
    }

    /// Current value bounds.
    pub fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    /// Replace the value bounds. Rejected (and the old bounds kept) if they cannot be scaled.
    pub fn set_bounds(&mut self, bounds: ValueBounds) -> ChoroResult<()> {
        let (lo, hi) = scale_bounds(bounds, self.scale)?;
        self.bounds = bounds;
        self.scaled_min = lo;
        self.scaled_max = hi;
        Ok(())
    }

    /// Value scale in use.
    pub fn scale(&self) -> ValueScale {
        self.scale
    }

    /// Color for a region at `fraction` of the way from `current_year` to `next_year`.
    pub fn region_color(
        &self,
        region_code: &str,
        current_year: i32,
        next_year: i32,
        fraction: f64,
    ) -> ChoroResult<Rgb> {
        let from = lookup(region_code, &self.series, current_year)?;
        let to = lookup(region_code, &self.series, next_year)?;
        let value = interpolate_value_by_time(fraction, 1.0, from, to);
        let scaled = self.scale.apply(value)?;
        Ok(self.ramp.color_at(scaled, self.scaled_min, self.scaled_max))
    }

    /// Paint every region `fraction` of the way from `current_year` to `next_year`.
    ///
    /// Only rewrites style slots; requesting a repaint is the caller's job.
    pub fn paint_frame(
        &self,
        regions: &mut [RegionFeature],
        current_year: i32,
        next_year: i32,
        fraction: f64,
    ) -> PaintReport {
        let mut report = PaintReport::default();
        for region in regions.iter_mut() {
            match self.region_color(region.code(), current_year, next_year, fraction) {
                Ok(color) => {
                    region.set_fill(color);
                    report.painted += 1;
                }
                Err(err) => report.record(&err),
            }
        }

        if report.skipped() > 0 {
            tracing::debug!(
                current_year,
                next_year,
                painted = report.painted,
                unknown_region = report.unknown_region,
                unknown_year = report.unknown_year,
                missing_value = report.missing_value,
                invalid_value = report.invalid_value,
                "paint pass skipped regions"
            );
        }
        report
    }

    /// Paint the exact values of a single year.
    pub fn paint_year(&self, regions: &mut [RegionFeature], year: i32) -> PaintReport {
        self.paint_frame(regions, year, year, 0.0)
    }
}

fn scale_bounds(bounds: ValueBounds, scale: ValueScale) -> ChoroResult<(f64, f64)> {
    Ok((scale.apply(bounds.min)?, scale.apply(bounds.max)?))
}

#[cfg(test)]
#[path = "../../tests/unit/paint/painter.rs"]
mod tests;
