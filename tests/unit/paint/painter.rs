use super::*;
use crate::{
    paint::surface::{HeadlessSurface, RenderSurface},
    stats::fixtures,
};

const START: Rgb = Rgb::new(0, 0, 0);
const END: Rgb = Rgb::new(128, 0, 255);

fn painter() -> RegionPainter {
    RegionPainter::new(
        Arc::new(fixtures::series()),
        ColorRamp::new(START, END),
        ValueBounds::new(1000.0, 3048.0).unwrap(),
    )
    .unwrap()
}

#[test]
fn paints_interpolated_frame() {
    let mut surface = HeadlessSurface::new(fixtures::REGIONS);
    let report = painter().paint_frame(surface.regions_mut(), 2015, 2016, 0.5);

    assert_eq!(report.painted, 3);
    assert_eq!(report.skipped(), 0);
    // 1050, 2050 and 3050 against [1000, 3048]
    assert_eq!(surface.fill_of("091"), Some(Rgb::new(3, 0, 6)));
    assert_eq!(surface.fill_of("049"), Some(Rgb::new(65, 0, 130)));
    assert_eq!(surface.fill_of("837"), Some(Rgb::new(128, 0, 255)));
}

#[test]
fn paint_year_uses_exact_values() {
    let mut surface = HeadlessSurface::new(["091"]);
    let report = painter().paint_year(surface.regions_mut(), 2015);
    assert_eq!(report.painted, 1);
    assert_eq!(surface.fill_of("091"), Some(START));
}

#[test]
fn unknown_region_keeps_previous_style_and_pass_continues() {
    let mut surface = HeadlessSurface::new(["999", "091"]);
    surface.regions_mut()[0].set_fill(Rgb::new(9, 9, 9));

    let report = painter().paint_year(surface.regions_mut(), 2015);
    assert_eq!(report.painted, 1);
    assert_eq!(report.unknown_region, 1);
    assert_eq!(surface.fill_of("999"), Some(Rgb::new(9, 9, 9)));
    assert_eq!(surface.fill_of("091"), Some(START));
}

#[test]
fn unknown_year_is_counted_per_region() {
    let mut surface = HeadlessSurface::new(fixtures::REGIONS);
    let report = painter().paint_frame(surface.regions_mut(), 2018, 2019, 0.5);
    assert_eq!(report.painted, 0);
    assert_eq!(report.unknown_year, 3);
    assert!(surface.regions().iter().all(|r| r.style().fill.is_none()));
}

#[test]
fn ramp_replacement_applies_to_next_pass() {
    let mut p = painter();
    let mut surface = HeadlessSurface::new(["091"]);
    p.paint_year(surface.regions_mut(), 2015);
    assert_eq!(surface.fill_of("091"), Some(START));

    p.set_ramp(ColorRamp::new(Rgb::new(10, 20, 30), END));
    p.paint_year(surface.regions_mut(), 2015);
    assert_eq!(surface.fill_of("091"), Some(Rgb::new(10, 20, 30)));
}

#[test]
fn log_scale_keeps_endpoints() {
    let series = Arc::new(fixtures::series());
    let bounds = ValueBounds::from_series(&series).unwrap();
    let p = RegionPainter::with_scale(series, ColorRamp::new(START, END), bounds, ValueScale::Log10)
        .unwrap();

    let mut surface = HeadlessSurface::new(["091", "837"]);
    p.paint_year(surface.regions_mut(), 2015);
    assert_eq!(surface.fill_of("091"), Some(START));
    p.paint_year(surface.regions_mut(), 2018);
    assert_eq!(surface.fill_of("837"), Some(END));
}

#[test]
fn bounds_that_cannot_be_scaled_are_rejected() {
    let series = Arc::new(fixtures::series());
    let bounds = ValueBounds::new(-5.0, 10.0).unwrap();
    assert!(matches!(
        RegionPainter::with_scale(series, ColorRamp::new(START, END), bounds, ValueScale::Log10),
        Err(ChoroError::InvalidValue(_))
    ));

    let mut p = RegionPainter::with_scale(
        Arc::new(fixtures::series()),
        ColorRamp::new(START, END),
        ValueBounds::new(0.0, 10.0).unwrap(),
        ValueScale::Log10,
    )
    .unwrap();
    assert!(p.set_bounds(bounds).is_err());
    assert_eq!(p.bounds(), ValueBounds::new(0.0, 10.0).unwrap());
}

#[test]
fn value_bounds_validation() {
    assert!(ValueBounds::new(2.0, 1.0).is_err());
    assert!(ValueBounds::new(f64::NAN, 1.0).is_err());
    assert!(ValueBounds::new(1.0, 1.0).is_ok());
}

#[test]
fn null_cell_skips_region_and_keeps_its_style() {
    let p = RegionPainter::new(
        Arc::new(fixtures::series_with_gap()),
        ColorRamp::new(START, END),
        ValueBounds::new(1000.0, 3048.0).unwrap(),
    )
    .unwrap();
    let mut surface = HeadlessSurface::new(fixtures::REGIONS);
    p.paint_year(surface.regions_mut(), 2017);
    let before = surface.fill_of(fixtures::GAP_REGION);
    assert!(before.is_some());

    let report = p.paint_frame(surface.regions_mut(), 2017, 2018, 0.5);
    assert_eq!(report.painted, 2);
    assert_eq!(report.missing_value, 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(surface.fill_of(fixtures::GAP_REGION), before);
}

#[test]
fn scale_is_chosen_per_painter() {
    assert_eq!(painter().scale(), ValueScale::Linear);
    let series = Arc::new(fixtures::series());
    let bounds = ValueBounds::from_series(&series).unwrap();
    let p = RegionPainter::with_scale(series, ColorRamp::new(START, END), bounds, ValueScale::Log10)
        .unwrap();
    assert_eq!(p.scale(), ValueScale::Log10);
}
