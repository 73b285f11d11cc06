use crate::foundation::{core::Rgb, error::ChoroResult};

/// Registration token for the engine's per-frame callback on a [`RenderSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandlerId(pub u64);

/// Paint style slot of one region. Reused across frames and rewritten in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PaintStyle {
    /// Fill color, `None` until the region has been painted once.
    pub fill: Option<Rgb>,
}

/// One map region as seen by the painter: its code and its style slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionFeature {
    code: String,
    style: PaintStyle,
}

impl RegionFeature {
    /// Unpainted region with the given code (the map's `NATCODE`).
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            style: PaintStyle::default(),
        }
    }

    /// Region code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Current style.
    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    /// Overwrite the fill color.
    pub fn set_fill(&mut self, color: Rgb) {
        self.style.fill = Some(color);
    }
}

/// Host drawing surface the playback engine drives.
///
/// The surface owns the regions and decides when frames happen. While a frame handler is
/// registered, the host calls [`PlaybackEngine::on_frame_tick`](crate::PlaybackEngine::on_frame_tick)
/// once per paint pass with that pass's timestamp.
///
/// Timestamps must be on the engine's [`Clock`](crate::Clock) time base: `start` anchors the
/// first step at `Clock::now_ms()`. A host with its own frame clock should hand the engine a
/// `Clock` reading that same clock, or pass `engine.now_ms()` as the tick time. Ticks stamped
/// before the anchor count as zero elapsed time.
pub trait RenderSurface {
    /// Start delivering frame ticks to the engine.
    fn register_frame_handler(&mut self) -> FrameHandlerId;

    /// Stop delivering frame ticks for `id`. Unknown ids are ignored.
    fn unregister_frame_handler(&mut self, id: FrameHandlerId);

    /// Whether `id` is still registered.
    fn is_frame_handler_registered(&self, id: FrameHandlerId) -> bool;

    /// Guarantee at least one paint pass even if nothing else changed.
    fn force_repaint(&mut self) -> ChoroResult<()>;

    /// Schedule the next paint pass.
    fn request_repaint(&mut self) -> ChoroResult<()>;

    /// All regions, for an in-place paint pass.
    fn regions_mut(&mut self) -> &mut [RegionFeature];
}

/// In-memory surface for hosts without a real map, and for tests.
///
/// Keeps region styles, frame-handler registrations and repaint counters; it never draws.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    regions: Vec<RegionFeature>,
    handlers: Vec<FrameHandlerId>,
    next_handler: u64,
    repaints: u64,
    forced_repaints: u64,
}

impl HeadlessSurface {
    /// Surface with one unpainted region per code.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: codes.into_iter().map(RegionFeature::new).collect(),
            ..Self::default()
        }
    }

    /// Regions in insertion order.
    pub fn regions(&self) -> &[RegionFeature] {
        &self.regions
    }

    /// Fill of the first region with `code`.
    pub fn fill_of(&self, code: &str) -> Option<Rgb> {
        self.regions
            .iter()
            .find(|r| r.code() == code)
            .and_then(|r| r.style().fill)
    }

    /// Number of live frame-handler registrations.
    pub fn frame_handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Repaints requested through [`RenderSurface::request_repaint`].
    pub fn repaint_count(&self) -> u64 {
        self.repaints
    }

    /// Repaints forced through [`RenderSurface::force_repaint`].
    pub fn forced_repaint_count(&self) -> u64 {
        self.forced_repaints
    }
}

impl RenderSurface for HeadlessSurface {
    fn register_frame_handler(&mut self) -> FrameHandlerId {
        let id = FrameHandlerId(self.next_handler);
        self.next_handler += 1;
        self.handlers.push(id);
        id
    }

    fn unregister_frame_handler(&mut self, id: FrameHandlerId) {
        self.handlers.retain(|h| *h != id);
    }

    fn is_frame_handler_registered(&self, id: FrameHandlerId) -> bool {
        self.handlers.contains(&id)
    }

    fn force_repaint(&mut self) -> ChoroResult<()> {
        self.forced_repaints += 1;
        Ok(())
    }

    fn request_repaint(&mut self) -> ChoroResult<()> {
        self.repaints += 1;
        Ok(())
    }

    fn regions_mut(&mut self) -> &mut [RegionFeature] {
        &mut self.regions
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/surface.rs"]
mod tests;
