use std::{sync::Arc, time::Duration};

use choroplay::{
    ColorRamp, FrameDriver, HeadlessSurface, JsonStatDataset, PlaybackEngine, RegionPainter,
    StatisticSeries, ValueBounds, ValueScale, rgb_to_hex,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/population.json");
    let dataset: JsonStatDataset = serde_json::from_str(s)?;
    let series = Arc::new(StatisticSeries::from_dataset(dataset)?);
    let bounds = ValueBounds::from_series(&series)?;
    let painter = RegionPainter::with_scale(
        series,
        ColorRamp::from_hex("#F7FBFF", "#08306B")?,
        bounds,
        ValueScale::Log10,
    )?;

    let mut engine = PlaybackEngine::with_system_clock(painter)?;
    engine.configure_with_speed(2015, 2018, 4.0)?;

    let mut surface = HeadlessSurface::new(["091", "049", "837", "020"]);
    engine.paint_year(&mut surface, 2015)?;
    engine.start(&mut surface)?;

    let stats = FrameDriver::new(Duration::from_millis(16)).run(&mut engine, &mut surface)?;
    println!(
        "{} ticks, {} year steps, finished at {}",
        stats.ticks,
        stats.advanced,
        engine.current_year()
    );

    for region in surface.regions() {
        let fill = region.style().fill.map(rgb_to_hex).unwrap_or_default();
        println!("{}: {fill}", region.code());
    }

    Ok(())
}
