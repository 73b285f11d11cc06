use crate::{
    color::ramp::ColorRamp,
    foundation::error::{ChoroError, ChoroResult},
    math::range::bounded_difference,
    paint::{
        painter::{PaintReport, RegionPainter, ValueBounds},
        surface::{FrameHandlerId, RenderSurface},
    },
    playback::{
        clock::{Clock, SystemClock},
        config::{PlayerOpts, validate_step_interval},
        state::{Phase, PlaybackState},
    },
};

/// What a single frame tick did.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The engine was idle; nothing happened.
    Ignored,
    /// Regions were painted part of the way between two years.
    Interpolated {
        /// Year at the start of the step.
        year: i32,
        /// Year at the end of the step.
        next_year: i32,
        /// Position within the step in `[0, 1]`.
        fraction: f64,
        /// Paint pass summary.
        report: PaintReport,
    },
    /// The step interval elapsed; `current_year` moved on. Nothing was painted.
    Advanced {
        /// The new current year.
        year: i32,
    },
    /// The target year was reached; the target year was painted and playback stopped.
    Finished {
        /// The target year.
        year: i32,
        /// Paint pass summary of the final paint.
        report: PaintReport,
    },
}

/// Year-by-year playback state machine.
///
/// The engine is driven by frame ticks delivered by the host (see [`RenderSurface`]). Each tick
/// either paints an intermediate frame between `current_year` and `current_year + 1`, advances
/// `current_year` once the step interval has elapsed, or stops playback at the target year.
/// At most one year is advanced per tick: a long stall between ticks makes playback lag instead
/// of skipping years.
///
/// `start` while running is rejected, so a surface never holds more than one registration for
/// an engine.
pub struct PlaybackEngine<C: Clock = SystemClock> {
    clock: C,
    painter: RegionPainter,
    opts: PlayerOpts,
    state: PlaybackState,
    handler: Option<FrameHandlerId>,
    warned_skips: bool,
}

impl PlaybackEngine<SystemClock> {
    /// Engine on the wall clock with default options.
    pub fn with_system_clock(painter: RegionPainter) -> ChoroResult<Self> {
        Self::new(painter, PlayerOpts::default(), SystemClock::new())
    }
}

impl<C: Clock> PlaybackEngine<C> {
    /// Idle engine configured for the dataset's full year range at speed `1.0`.
    pub fn new(painter: RegionPainter, opts: PlayerOpts, clock: C) -> ChoroResult<Self> {
        opts.validate()?;
        let (first, last) = painter.series().year_bounds()?;
        Ok(Self {
            clock,
            painter,
            opts,
            state: PlaybackState::idle(first, last, opts.base_step_interval_ms),
            handler: None,
            warned_skips: false,
        })
    }

    /// Read-only view of the published state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Year being shown.
    pub fn current_year(&self) -> i32 {
        self.state.current_year
    }

    /// Whether playback is running.
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Progress through the range in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Frame handler currently registered on the surface, if any.
    pub fn frame_handler(&self) -> Option<FrameHandlerId> {
        self.handler
    }

    /// Current time on the engine's clock.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Options the engine was built with.
    pub fn opts(&self) -> &PlayerOpts {
        &self.opts
    }

    /// The painter used for every frame.
    pub fn painter(&self) -> &RegionPainter {
        &self.painter
    }

    /// Replace the color ramp. Used from the next painted frame on, running or not.
    pub fn set_color_ramp(&mut self, ramp: ColorRamp) {
        self.painter.set_ramp(ramp);
    }

    /// Replace the value bounds mapped onto the ramp.
    pub fn set_value_bounds(&mut self, bounds: ValueBounds) -> ChoroResult<()> {
        self.painter.set_bounds(bounds)
    }

    /// Set the year range and step interval. Only allowed while idle.
    ///
    /// On error the previous configuration is left untouched.
    pub fn configure(
        &mut self,
        anchor_year: i32,
        target_year: i32,
        step_interval_ms: f64,
    ) -> ChoroResult<()> {
        if self.is_running() {
            return Err(ChoroError::PlaybackActive);
        }
        if anchor_year > target_year {
            return Err(ChoroError::InvalidRange {
                anchor: anchor_year,
                target: target_year,
            });
        }
        validate_step_interval(step_interval_ms)?;
        let series = self.painter.series();
        if let Some(missing) = [anchor_year, target_year]
            .into_iter()
            .find(|y| !series.has_year(*y))
        {
            return Err(ChoroError::UnknownYear(missing));
        }

        self.state = PlaybackState::idle(anchor_year, target_year, step_interval_ms);
        tracing::debug!(anchor_year, target_year, step_interval_ms, "playback configured");
        Ok(())
    }

    /// [`configure`](Self::configure) with a speed multiplier over the base step interval.
    pub fn configure_with_speed(
        &mut self,
        anchor_year: i32,
        target_year: i32,
        speed: f64,
    ) -> ChoroResult<()> {
        let interval = self.opts.step_interval_for_speed(speed)?;
        self.configure(anchor_year, target_year, interval)
    }

    /// Start playback from the anchor year.
    ///
    /// Registers the frame handler and forces one repaint so the first tick arrives even if the
    /// surface is otherwise unchanged. Fails with [`ChoroError::AlreadyRunning`] if already
    /// running; if the forced repaint fails, the registration is undone and the engine stays idle.
    #[tracing::instrument(skip_all, fields(anchor = self.state.anchor_year, target = self.state.target_year))]
    pub fn start<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> ChoroResult<()> {
        if self.is_running() {
            return Err(ChoroError::AlreadyRunning);
        }

        self.state.phase = Phase::Running;
        self.state.current_year = self.state.anchor_year;
        self.state.progress = 0.0;
        self.state.frame_anchor_ms = Some(self.clock.now_ms());
        self.warned_skips = false;
        self.handler = Some(surface.register_frame_handler());

        if let Err(err) = surface.force_repaint() {
            self.stop(surface);
            return Err(err);
        }

        tracing::info!("playback started");
        Ok(())
    }

    /// Stop playback and unregister the frame handler. Safe to call in any state, any number of
    /// times.
    pub fn stop<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(id) = self.handler.take() {
            surface.unregister_frame_handler(id);
        }
        if self.is_running() {
            tracing::info!(year = self.state.current_year, "playback stopped");
        }
        self.state.phase = Phase::Idle;
        self.state.frame_anchor_ms = None;
    }

    /// Process one frame tick delivered by the host at `frame_time_ms`.
    ///
    /// `frame_time_ms` is measured on the engine's clock (see [`PlaybackEngine::now_ms`]); the
    /// step in progress started at the clock reading taken by `start` or by the last advance.
    /// A timestamp behind that anchor paints fraction `0.0` and never advances.
    pub fn on_frame_tick<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        frame_time_ms: f64,
    ) -> ChoroResult<TickOutcome> {
        if !self.is_running() {
            return Ok(TickOutcome::Ignored);
        }

        let anchor_ms = self.state.frame_anchor_ms.unwrap_or(frame_time_ms);
        let elapsed = (frame_time_ms - anchor_ms).max(0.0);
        let year = self.state.current_year;
        let target = self.state.target_year;

        if year >= target {
            let report = self.painter.paint_year(surface.regions_mut(), target);
            self.stop(surface);
            self.state.progress = 1.0;
            surface.request_repaint()?;
            return Ok(TickOutcome::Finished {
                year: target,
                report,
            });
        }

        let step = self.state.step_interval_ms;
        if elapsed <= step {
            let fraction = elapsed / step;
            let report = self
                .painter
                .paint_frame(surface.regions_mut(), year, year + 1, fraction);
            self.note_skips(&report);
            surface.request_repaint()?;
            return Ok(TickOutcome::Interpolated {
                year,
                next_year: year + 1,
                fraction,
                report,
            });
        }

        self.state.frame_anchor_ms = Some(frame_time_ms);
        self.state.current_year += 1;
        let steps = bounded_difference(
            f64::from(self.state.anchor_year),
            f64::from(target),
            Some(f64::from(self.opts.progress_resolution)),
        );
        if steps > 0.0 {
            self.state.progress = (self.state.progress + 1.0 / steps).min(1.0);
        }
        tracing::debug!(year = self.state.current_year, "year advanced");
        surface.request_repaint()?;
        Ok(TickOutcome::Advanced {
            year: self.state.current_year,
        })
    }

    /// Paint the exact values of `year` while idle, e.g. the initial map or after recoloring.
    pub fn paint_year<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        year: i32,
    ) -> ChoroResult<PaintReport> {
        if self.is_running() {
            return Err(ChoroError::PlaybackActive);
        }
        let report = self.painter.paint_year(surface.regions_mut(), year);
        surface.request_repaint()?;
        Ok(report)
    }

    /// Move the idle playhead to `year` (within the configured range) and paint it.
    pub fn seek<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        year: i32,
    ) -> ChoroResult<PaintReport> {
        if self.is_running() {
            return Err(ChoroError::PlaybackActive);
        }
        let (anchor, target) = (self.state.anchor_year, self.state.target_year);
        if !(anchor..=target).contains(&year) {
            return Err(ChoroError::validation(format!(
                "seek year {year} is outside {anchor}..={target}"
            )));
        }

        let steps = bounded_difference(
            f64::from(anchor),
            f64::from(target),
            Some(f64::from(self.opts.progress_resolution)),
        );
        self.state.current_year = year;
        self.state.progress = if steps > 0.0 {
            (f64::from(year - anchor) / steps).min(1.0)
        } else {
            0.0
        };
        self.paint_year(surface, year)
    }

    /// Stop and return the playhead to the anchor year.
    pub fn rewind<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> ChoroResult<PaintReport> {
        self.stop(surface);
        self.seek(surface, self.state.anchor_year)
    }

    fn note_skips(&mut self, report: &PaintReport) {
        if report.skipped() > 0 && !self.warned_skips {
            self.warned_skips = true;
            tracing::warn!(
                year = self.state.current_year,
                skipped = report.skipped(),
                "regions without data are left unpainted"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/engine.rs"]
mod tests;
