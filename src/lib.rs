//! Choroplay animates a choropleth map through a range of years.
//!
//! The crate is the playback core behind a region-colored map of Finnish municipalities: it walks
//! a year range at a configurable speed, blends each region's statistic between two adjacent
//! years on every frame, maps the blended value to a color between two endpoint colors, and asks
//! a host rendering surface to repaint.
//!
//! # Pipeline overview
//!
//! 1. **Lookup**: `StatisticSeries + region code + year -> f64` ([`lookup`])
//! 2. **Blend**: two adjacent years and a frame fraction -> one value ([`interpolate_value_by_time`])
//! 3. **Color**: value within `[min, max]` -> [`Rgb`] ([`interpolate_color`])
//! 4. **Paint**: every [`RegionFeature`] on a [`RenderSurface`] gets its fill rewritten in place
//!    ([`RegionPainter`])
//! 5. **Playback**: [`PlaybackEngine`] decides, per frame tick, which year pair to paint and when
//!    to advance, and [`FrameDriver`] provides the tick source for hosts without a frame callback.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: all playback work happens on the thread that delivers frame ticks.
//! - **No IO**: fetching and decoding the dataset is the host's job; the crate consumes a typed
//!   [`JsonStatDataset`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod math;
mod paint;
mod playback;
mod stats;

pub use color::hex::{hex_to_rgb, rgb_to_hex};
pub use color::ramp::{ColorRamp, interpolate_color};
pub use foundation::core::Rgb;
pub use foundation::error::{ChoroError, ChoroResult};
pub use math::interp::interpolate_value_by_time;
pub use math::range::{StepRange, StepRangeIter, bounded_difference, step_range};
pub use paint::painter::{PaintReport, RegionPainter, ValueBounds};
pub use paint::surface::{FrameHandlerId, HeadlessSurface, PaintStyle, RegionFeature, RenderSurface};
pub use playback::clock::{Clock, ManualClock, SystemClock};
pub use playback::config::PlayerOpts;
pub use playback::controls::{slider_ticks, speed_options, year_options};
pub use playback::driver::{DriveStats, FrameDriver};
pub use playback::engine::{PlaybackEngine, TickOutcome};
pub use playback::state::{Phase, PlaybackState};
pub use stats::dataset::{
    Category, Dimension, JsonStatDataset, Roles, StatisticSeries, DEFAULT_REGION_PREFIX,
};
pub use stats::lookup::{lookup, max_value, max_year, min_value, min_year};
pub use stats::scale::ValueScale;
