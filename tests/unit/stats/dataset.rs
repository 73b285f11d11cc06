use super::*;
use crate::stats::fixtures;

#[test]
fn indexes_a_valid_dataset() {
    let series = fixtures::series();
    assert_eq!(series.time_size(), 4);
    assert_eq!(series.values().len(), 12);
    assert_eq!(series.region_prefix(), DEFAULT_REGION_PREFIX);
    assert!(series.has_year(2016));
    assert!(!series.has_year(2019));
    assert_eq!(series.region_label("049"), Some("Espoo"));
    assert_eq!(series.region_label("999"), None);
}

#[test]
fn bounds_cover_values_and_years() {
    let series = fixtures::series();
    assert_eq!(series.value_bounds().unwrap(), (1000.0, 3300.0));
    assert_eq!(series.year_bounds().unwrap(), (2015, 2018));
}

#[test]
fn region_prefix_is_configurable() {
    let series = fixtures::series().with_region_prefix("");
    assert_eq!(series.region_label("KU091"), Some("Helsinki"));
    assert_eq!(series.region_label("091"), None);
}

#[test]
fn rejects_value_count_mismatch() {
    let mut ds = fixtures::dataset();
    ds.value.pop();
    let err = StatisticSeries::from_dataset(ds).unwrap_err();
    assert!(matches!(err, ChoroError::Validation(_)), "{err}");
}

#[test]
fn rejects_id_size_mismatch() {
    let mut ds = fixtures::dataset();
    ds.size.push(1);
    assert!(StatisticSeries::from_dataset(ds).is_err());
}

#[test]
fn rejects_missing_roles_and_dimensions() {
    let mut ds = fixtures::dataset();
    ds.role.time.clear();
    assert!(StatisticSeries::from_dataset(ds).is_err());

    let mut ds = fixtures::dataset();
    ds.dimension.remove("Alue");
    assert!(StatisticSeries::from_dataset(ds).is_err());

    let mut ds = fixtures::dataset();
    ds.role.geo = vec!["Kunta".to_owned()];
    assert!(StatisticSeries::from_dataset(ds).is_err());
}

#[test]
fn rejects_out_of_range_category_index() {
    let mut ds = fixtures::dataset();
    if let Some(dim) = ds.dimension.get_mut("Vuosi") {
        dim.category.index.insert("2019".to_owned(), 4);
    }
    let err = StatisticSeries::from_dataset(ds).unwrap_err();
    assert!(err.to_string().contains("2019"));
}

#[test]
fn optional_metadata_round_trips() {
    let ds = fixtures::dataset();
    assert_eq!(ds.source.as_deref(), Some("Tilastokeskus"));
    assert!(ds.extension.is_none());
    let json = serde_json::to_value(&ds).unwrap();
    assert!(json.get("extension").is_none());
    assert_eq!(json["role"]["metric"][0], "Tiedot");
}

#[test]
fn null_cells_are_kept_as_missing() {
    let ds = fixtures::dataset_with_gap();
    assert_eq!(ds.value[7], None);
    assert_eq!(ds.value[6], Some(fixtures::value_at(1, 2)));

    let series = StatisticSeries::from_dataset(ds).unwrap();
    assert_eq!(series.values().iter().filter(|v| v.is_none()).count(), 1);
    assert_eq!(series.value_bounds().unwrap(), (1000.0, 3300.0));
}
