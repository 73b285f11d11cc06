use crate::{
    foundation::error::{ChoroError, ChoroResult},
    stats::dataset::StatisticSeries,
};

/// Value of the statistic for `region_code` in `year`.
///
/// The region code is prefixed with the series' region prefix before the geo lookup, and the
/// year is looked up by its decimal string. A `null` cell yields [`ChoroError::MissingValue`].
pub fn lookup(region_code: &str, series: &StatisticSeries, year: i32) -> ChoroResult<f64> {
    let geo = *series
        .geo_index
        .get(&series.geo_key(region_code))
        .ok_or_else(|| ChoroError::unknown_region(region_code))?;
    let time = *series
        .time_index
        .get(&year.to_string())
        .ok_or(ChoroError::UnknownYear(year))?;

    // Indices are bounds-checked against the dimension sizes when the series is built.
    let offset = geo * series.time_size + time;
    series
        .values
        .get(offset)
        .copied()
        .ok_or_else(|| ChoroError::validation(format!("value offset {offset} out of bounds")))?
        .ok_or_else(|| ChoroError::MissingValue {
            region: region_code.to_owned(),
            year,
        })
}

/// Smallest of `values`. NaN entries are ignored unless every entry is NaN.
pub fn min_value(values: &[f64]) -> ChoroResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(ChoroError::EmptySeries("min_value of no values"))
}

/// Largest of `values`. NaN entries are ignored unless every entry is NaN.
pub fn max_value(values: &[f64]) -> ChoroResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(ChoroError::EmptySeries("max_value of no values"))
}

fn parse_years<'a>(years: impl IntoIterator<Item = &'a str>) -> ChoroResult<Vec<i32>> {
    years
        .into_iter()
        .map(|key| {
            key.trim()
                .parse::<i32>()
                .map_err(|_| ChoroError::MalformedYear(key.to_owned()))
        })
        .collect()
}

/// Earliest year among time-dimension keys.
pub fn min_year<'a>(years: impl IntoIterator<Item = &'a str>) -> ChoroResult<i32> {
    parse_years(years)?
        .into_iter()
        .min()
        .ok_or(ChoroError::EmptySeries("min_year of no years"))
}

/// Latest year among time-dimension keys.
pub fn max_year<'a>(years: impl IntoIterator<Item = &'a str>) -> ChoroResult<i32> {
    parse_years(years)?
        .into_iter()
        .max()
        .ok_or(ChoroError::EmptySeries("max_year of no years"))
}

#[cfg(test)]
#[path = "../../tests/unit/stats/lookup.rs"]
mod tests;
