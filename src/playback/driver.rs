use std::time::Duration;

use crate::{
    foundation::error::ChoroResult,
    paint::surface::RenderSurface,
    playback::{
        clock::Clock,
        engine::{PlaybackEngine, TickOutcome},
    },
};

/// Cooperative tick source for hosts without a per-frame callback.
///
/// Runs on the caller's thread: sleeps `interval`, then delivers `on_frame_tick(now)` for as long
/// as the engine's frame handler stays registered on the surface.
#[derive(Clone, Copy, Debug)]
pub struct FrameDriver {
    /// Pause between ticks. Zero ticks back to back.
    pub interval: Duration,
    /// Upper bound on delivered ticks; `None` runs until playback stops.
    pub max_ticks: Option<u64>,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(16),
            max_ticks: None,
        }
    }
}

/// Counters for one [`FrameDriver::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct DriveStats {
    /// Ticks delivered to the engine.
    pub ticks: u64,
    /// Ticks that painted an intermediate frame.
    pub interpolated: u64,
    /// Ticks that advanced the year.
    pub advanced: u64,
    /// Region paints skipped for missing data, summed over all passes.
    pub regions_skipped: u64,
    /// Whether playback reached its target year during the run.
    pub finished: bool,
}

impl FrameDriver {
    /// Driver ticking every `interval` until playback stops.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_ticks: None,
        }
    }

    /// Limit the run to `max_ticks` ticks.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Deliver ticks until playback stops, the surface drops the handler, or `max_ticks` is hit.
    #[tracing::instrument(skip_all, fields(interval_ms = self.interval.as_millis() as u64))]
    pub fn run<C, S>(
        &self,
        engine: &mut PlaybackEngine<C>,
        surface: &mut S,
    ) -> ChoroResult<DriveStats>
    where
        C: Clock,
        S: RenderSurface + ?Sized,
    {
        let mut stats = DriveStats::default();

        while let Some(id) = engine.frame_handler() {
            if !surface.is_frame_handler_registered(id) {
                tracing::debug!("frame handler was removed by the surface");
                break;
            }
            if self.max_ticks.is_some_and(|max| stats.ticks >= max) {
                break;
            }
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }

            let now = engine.now_ms();
            stats.ticks += 1;
            match engine.on_frame_tick(surface, now)? {
                TickOutcome::Ignored => break,
                TickOutcome::Interpolated { report, .. } => {
                    stats.interpolated += 1;
                    stats.regions_skipped += report.skipped() as u64;
                }
                TickOutcome::Advanced { .. } => stats.advanced += 1,
                TickOutcome::Finished { report, .. } => {
                    stats.regions_skipped += report.skipped() as u64;
                    stats.finished = true;
                }
            }
        }

        tracing::debug!(
            ticks = stats.ticks,
            advanced = stats.advanced,
            finished = stats.finished,
            "frame driver returned"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
