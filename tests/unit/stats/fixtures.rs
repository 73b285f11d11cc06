use crate::stats::dataset::{JsonStatDataset, StatisticSeries};

/// Region codes in geo-index order.
pub(crate) const REGIONS: [&str; 3] = ["091", "049", "837"];
pub(crate) const FIRST_YEAR: i32 = 2015;
pub(crate) const LAST_YEAR: i32 = 2018;

/// Value stored for region `geo` at time index `time`.
pub(crate) fn value_at(geo: usize, time: usize) -> f64 {
    (geo as f64 + 1.0) * 1000.0 + time as f64 * 100.0
}

pub(crate) fn dataset() -> JsonStatDataset {
    let years = (FIRST_YEAR..=LAST_YEAR).count();
    let mut value = Vec::new();
    for geo in 0..REGIONS.len() {
        for time in 0..years {
            value.push(value_at(geo, time));
        }
    }

    serde_json::from_value(serde_json::json!({
        "label": "Väestö 31.12. muuttujina Alue, Vuosi ja Tiedot",
        "source": "Tilastokeskus",
        "role": { "geo": ["Alue"], "time": ["Vuosi"], "metric": ["Tiedot"] },
        "id": ["Alue", "Vuosi", "Tiedot"],
        "size": [REGIONS.len(), years, 1],
        "dimension": {
            "Alue": { "category": {
                "index": { "KU091": 0, "KU049": 1, "KU837": 2 },
                "label": { "KU091": "Helsinki", "KU049": "Espoo", "KU837": "Tampere" }
            } },
            "Vuosi": { "category": {
                "index": { "2015": 0, "2016": 1, "2017": 2, "2018": 3 },
                "label": { "2015": "2015", "2016": "2016", "2017": "2017", "2018": "2018" }
            } },
            "Tiedot": { "category": { "index": { "vaesto": 0 } } }
        },
        "value": value
    }))
    .expect("fixture dataset deserializes")
}

pub(crate) fn series() -> StatisticSeries {
    StatisticSeries::from_dataset(dataset()).expect("fixture dataset is valid")
}

/// Region whose last year is `null` in [`dataset_with_gap`].
pub(crate) const GAP_REGION: &str = "049";

/// Same table with a `null` cell for Espoo in 2018 (geo 1, time 3).
pub(crate) fn dataset_with_gap() -> JsonStatDataset {
    let mut json = serde_json::to_value(dataset()).expect("fixture dataset serializes");
    json["value"][7] = serde_json::Value::Null;
    serde_json::from_value(json).expect("null cells deserialize")
}

pub(crate) fn series_with_gap() -> StatisticSeries {
    StatisticSeries::from_dataset(dataset_with_gap()).expect("fixture dataset is valid")
}
