pub(crate) mod dataset;
pub(crate) mod lookup;
pub(crate) mod scale;

#[cfg(test)]
#[path = "../../tests/unit/stats/fixtures.rs"]
pub(crate) mod fixtures;
