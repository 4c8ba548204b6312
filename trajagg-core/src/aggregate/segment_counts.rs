use indexmap::IndexMap;
use itertools::{Itertools, MinMaxResult};

use super::Segment;

/// number of routes passing through each segment. iteration follows the
/// order in which segments were first walked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentCounts(IndexMap<Segment, usize>);

impl SegmentCounts {
    /// adds one route to the count of this segment
    pub(crate) fn increment(&mut self, segment: Segment) {
        *self.0.entry(segment).or_insert(0) += 1;
    }

    /// the count of a segment, 0 if no route passed through it
    pub fn get(&self, segment: &Segment) -> usize {
        self.0.get(segment).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Segment, &usize)> {
        self.0.iter()
    }

    /// smallest and largest count, or None when there are no segments
    pub fn range(&self) -> Option<(usize, usize)> {
        match self.0.values().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(c) => Some((*c, *c)),
            MinMaxResult::MinMax(min, max) => Some((*min, *max)),
        }
    }
}

impl<'a> IntoIterator for &'a SegmentCounts {
    type Item = (&'a Segment, &'a usize);
    type IntoIter = indexmap::map::Iter<'a, Segment, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
