use crate::foundation::error::{ChoroError, ChoroResult};

/// Absolute difference `|a - b|`, capped at `max` when given.
pub fn bounded_difference(a: f64, b: f64, max: Option<f64>) -> f64 {
    let diff = (a - b).abs();
    match max {
        Some(max) => diff.min(max),
        None => diff,
    }
}

/// Lazy arithmetic sequence `start, start + increment, ...` of a fixed length.
///
/// Cheap to clone and iterate any number of times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRange {
    start: f64,
    increment: f64,
    len: usize,
}

/// Build the sequence starting at `a` and stepping by `increment`, with
/// `min(max_len, floor(|a - b| / increment) + 1)` elements. `max_len = None` means unbounded.
///
/// The sequence always counts upward from `a`, even when `b < a`.
pub fn step_range(
    a: f64,
    b: f64,
    max_len: Option<usize>,
    increment: f64,
) -> ChoroResult<StepRange> {
    if !(increment.is_finite() && increment > 0.0) {
        return Err(ChoroError::validation("step_range increment must be > 0"));
    }
    if !(a.is_finite() && b.is_finite()) {
        return Err(ChoroError::validation("step_range bounds must be finite"));
    }

    let steps = (bounded_difference(a, b, None) / increment).floor();
    let natural = if steps >= (usize::MAX - 1) as f64 {
        usize::MAX
    } else {
        steps as usize + 1
    };
    let len = max_len.map_or(natural, |max| max.min(natural));

    Ok(StepRange {
        start: a,
        increment,
        len,
    })
}

impl StepRange {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when `max_len` capped the sequence to zero elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.start + index as f64 * self.increment)
    }

    /// Iterate from the first element.
    pub fn iter(&self) -> StepRangeIter {
        StepRangeIter {
            range: *self,
            front: 0,
        }
    }
}

impl IntoIterator for StepRange {
    type Item = f64;
    type IntoIter = StepRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &StepRange {
    type Item = f64;
    type IntoIter = StepRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`StepRange`].
#[derive(Clone, Debug)]
pub struct StepRangeIter {
    range: StepRange,
    front: usize,
}

impl Iterator for StepRangeIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let v = self.range.get(self.front)?;
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.len - self.front;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StepRangeIter {}

#[cfg(test)]
#[path = "../../tests/unit/math/range.rs"]
mod tests;
