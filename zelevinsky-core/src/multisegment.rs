use std::fmt;

use itertools::Itertools;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SegmentError {
    #[error("segment {index} is [{start}, {end}] but its start exceeds its end")]
    Reversed { index: usize, start: i64, end: i64 },
}

/// The closed integer interval `[start, end]`.
///
/// Nothing forces `start <= end`; see [`Segment::is_well_formed`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "[i64; 2]", into = "[i64; 2]"))]
pub struct Segment {
    pub start: i64,
    pub end: i64,
}

impl Segment {
    #[inline]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

impl From<[i64; 2]> for Segment {
    #[inline]
    fn from([start, end]: [i64; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Segment> for [i64; 2] {
    #[inline]
    fn from(segment: Segment) -> Self {
        [segment.start, segment.end]
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// An ordered list of segments. Its length is the degree of every permutation attached to it.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Multisegment {
    segments: Vec<Segment>,
}

impl Multisegment {
    #[inline]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Fails on the first segment whose start exceeds its end.
    pub fn validate(&self) -> Result<(), SegmentError> {
        match self.segments.iter().position(|s| !s.is_well_formed()) {
            None => Ok(()),
            Some(index) => {
                let Segment { start, end } = self.segments[index];
                Err(SegmentError::Reversed { index, start, end })
            }
        }
    }
}

impl From<Vec<Segment>> for Multisegment {
    #[inline]
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl<const N: usize> From<[[i64; 2]; N]> for Multisegment {
    fn from(pairs: [[i64; 2]; N]) -> Self {
        pairs.into_iter().map(Segment::from).collect()
    }
}

impl FromIterator<Segment> for Multisegment {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Multisegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.segments.iter().join(", "))
    }
}
