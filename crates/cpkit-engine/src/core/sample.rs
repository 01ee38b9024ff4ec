use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A single paired deviation measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 1-based position in the sequence the sample was produced in.
    pub index: usize,
    /// Deviation along the x axis.
    pub x: f64,
    /// Deviation along the y axis.
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }
}

/// Ordered collection of samples.
///
/// Order only matters for presentation; statistics are order-independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet(Vec<Sample>);

impl SampleSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a set from raw `(x, y)` pairs, assigning indices starting at 1.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Sample::new(i + 1, x, y))
            .collect()
    }

    /// Appends a pair, giving it the next 1-based index.
    pub fn push_pair(&mut self, x: f64, y: f64) {
        let index = self.0.len() + 1;
        self.0.push(Sample::new(index, x, y));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.x).collect()
    }

    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.y).collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Sample] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Sample> {
        self.0
    }
}

impl Deref for SampleSet {
    type Target = [Sample];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Sample>> for SampleSet {
    fn from(samples: Vec<Sample>) -> Self {
        Self(samples)
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_assigns_one_based_indices() {
        let set = SampleSet::from_pairs([(0.1, 0.2), (0.3, 0.4), (0.5, 0.6)]);
        let indices = set.iter().map(|s| s.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_push_pair_continues_numbering() {
        let mut set = SampleSet::from_pairs([(1.0, 2.0)]);
        set.push_pair(3.0, 4.0);
        assert_eq!(set.len(), 2);
        assert_eq!(set[1], Sample::new(2, 3.0, 4.0));
    }

    #[test]
    fn test_axis_extraction_preserves_order() {
        let set = SampleSet::from_pairs([(1.0, -1.0), (2.0, -2.0)]);
        assert_eq!(set.xs(), vec![1.0, 2.0]);
        assert_eq!(set.ys(), vec![-1.0, -2.0]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = SampleSet::from_pairs([(0.5, -0.25)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"index":1,"x":0.5,"y":-0.25}]"#);
        let back: SampleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut set = SampleSet::from_pairs([(1.0, 1.0), (2.0, 2.0)]);
        set.clear();
        assert!(set.is_empty());
    }
}
