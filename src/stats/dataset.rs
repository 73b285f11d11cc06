use std::collections::{BTreeMap, HashMap};

use crate::foundation::error::{ChoroError, ChoroResult};

/// Region-code prefix used by the Finnish municipal statistics (`"KU" + NATCODE`).
pub const DEFAULT_REGION_PREFIX: &str = "KU";

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// JSON-stat style dataset as delivered by the statistics source.
pub struct JsonStatDataset {
    /// Which dimensions carry the geographic, time and metric roles.
    pub role: Roles,
    /// Dimension definitions keyed by dimension id.
    pub dimension: BTreeMap<String, Dimension>,
    /// Dimension ids in value-array order.
    pub id: Vec<String>,
    /// Cardinality of each dimension, parallel to `id`.
    pub size: Vec<usize>,
    /// Flat values in row-major order over `id`. `null` marks a suppressed or missing cell.
    pub value: Vec<Option<f64>>,
    /// Dataset title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Publisher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Last update timestamp, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Provider-specific payload, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Dimension role assignments.
pub struct Roles {
    /// Geographic dimension ids; the first one is used.
    pub geo: Vec<String>,
    /// Time dimension ids; the first one is used.
    pub time: Vec<String>,
    /// Metric dimension ids.
    #[serde(default)]
    pub metric: Vec<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// One dataset dimension.
pub struct Dimension {
    /// Category mapping of the dimension.
    pub category: Category,
    /// Dimension title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Category key to position and label mappings.
pub struct Category {
    /// Category key to position within the dimension.
    pub index: HashMap<String, usize>,
    /// Category key to display label.
    #[serde(default)]
    pub label: HashMap<String, String>,
}

/// Validated, read-only view of a dataset for `(region, year)` lookups.
///
/// Values are addressed as `geo_index * time_size + time_index`. Built once and shared (usually
/// behind an `Arc`) for the whole playback session.
#[derive(Clone, Debug)]
pub struct StatisticSeries {
    pub(crate) geo_index: HashMap<String, usize>,
    pub(crate) geo_labels: HashMap<String, String>,
    pub(crate) time_index: HashMap<String, usize>,
    pub(crate) time_size: usize,
    pub(crate) values: Vec<Option<f64>>,
    pub(crate) region_prefix: String,
}

impl StatisticSeries {
    /// Validate `dataset` and index it for lookups, using [`DEFAULT_REGION_PREFIX`].
    #[tracing::instrument(skip_all)]
    pub fn from_dataset(dataset: JsonStatDataset) -> ChoroResult<Self> {
        let JsonStatDataset {
            role,
            mut dimension,
            id,
            size,
            value,
            ..
        } = dataset;

        if id.len() != size.len() {
            return Err(ChoroError::validation(format!(
                "dataset id has {} entries but size has {}",
                id.len(),
                size.len()
            )));
        }

        let expected = size
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| ChoroError::validation("dataset size product overflows"))?;
        if value.len() != expected {
            return Err(ChoroError::validation(format!(
                "dataset has {} values but its dimensions span {expected}",
                value.len()
            )));
        }

        let geo_key = first_role(&role.geo, "geo")?;
        let time_key = first_role(&role.time, "time")?;
        let geo_size = dimension_size(&id, &size, geo_key)?;
        let time_size = dimension_size(&id, &size, time_key)?;

        let geo = dimension
            .remove(geo_key)
            .ok_or_else(|| ChoroError::validation(format!("missing dimension \"{geo_key}\"")))?;
        let time = dimension
            .remove(time_key)
            .ok_or_else(|| ChoroError::validation(format!("missing dimension \"{time_key}\"")))?;

        check_indices(geo_key, &geo.category.index, geo_size)?;
        check_indices(time_key, &time.category.index, time_size)?;

        tracing::debug!(geo_size, time_size, "indexed statistic series");

        Ok(Self {
            geo_index: geo.category.index,
            geo_labels: geo.category.label,
            time_index: time.category.index,
            time_size,
            values: value,
            region_prefix: DEFAULT_REGION_PREFIX.to_owned(),
        })
    }

    /// Replace the prefix prepended to region codes before geo lookups.
    pub fn with_region_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.region_prefix = prefix.into();
        self
    }

    /// Prefix prepended to region codes before geo lookups.
    pub fn region_prefix(&self) -> &str {
        &self.region_prefix
    }

    /// Number of entries in the time dimension (the value stride per region).
    pub fn time_size(&self) -> usize {
        self.time_size
    }

    /// Flat value array; `None` where the dataset has `null`.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Keys of the time dimension (years as strings), unordered.
    pub fn year_keys(&self) -> impl Iterator<Item = &str> {
        self.time_index.keys().map(String::as_str)
    }

    /// Whether `year` is present in the time dimension.
    pub fn has_year(&self, year: i32) -> bool {
        self.time_index.contains_key(&year.to_string())
    }

    /// Display label for a region code, when the dataset provides one.
    pub fn region_label(&self, region_code: &str) -> Option<&str> {
        self.geo_labels
            .get(&self.geo_key(region_code))
            .map(String::as_str)
    }

    pub(crate) fn geo_key(&self, region_code: &str) -> String {
        let mut key = String::with_capacity(self.region_prefix.len() + region_code.len());
        key.push_str(&self.region_prefix);
        key.push_str(region_code);
        key
    }

    /// Smallest and largest value over the whole dataset, ignoring missing cells.
    pub fn value_bounds(&self) -> ChoroResult<(f64, f64)> {
        let present: Vec<f64> = self.values.iter().flatten().copied().collect();
        Ok((
            crate::stats::lookup::min_value(&present)?,
            crate::stats::lookup::max_value(&present)?,
        ))
    }

    /// First and last year of the time dimension.
    pub fn year_bounds(&self) -> ChoroResult<(i32, i32)> {
        Ok((
            crate::stats::lookup::min_year(self.year_keys())?,
            crate::stats::lookup::max_year(self.year_keys())?,
        ))
    }
}

fn first_role<'a>(keys: &'a [String], role: &str) -> ChoroResult<&'a str> {
    keys.first()
        .map(String::as_str)
        .ok_or_else(|| ChoroError::validation(format!("dataset has no {role} role")))
}

fn dimension_size(id: &[String], size: &[usize], key: &str) -> ChoroResult<usize> {
    id.iter()
        .position(|k| k == key)
        .map(|pos| size[pos])
        .ok_or_else(|| ChoroError::validation(format!("dimension \"{key}\" is not listed in id")))
}

fn check_indices(key: &str, index: &HashMap<String, usize>, size: usize) -> ChoroResult<()> {
    if let Some((cat, &i)) = index.iter().find(|&(_, &i)| i >= size) {
        return Err(ChoroError::validation(format!(
            "category \"{cat}\" of dimension \"{key}\" has index {i} >= size {size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/stats/dataset.rs"]
mod tests;
