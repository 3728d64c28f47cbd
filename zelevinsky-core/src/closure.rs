//! Multisegments reachable by repeatedly replacing two segments with their union and
//! intersection.

use std::ops::Range;

use itertools::{Itertools, TupleCombinations};
use rustc_hash::FxHashSet;

use crate::multisegment::{Multisegment, Segment};

/// Orders a pair so that the second segment ends last.
#[inline]
pub fn set_in_order(a: Segment, b: Segment) -> (Segment, Segment) {
    if b.end < a.end {
        (b, a)
    } else {
        (a, b)
    }
}

/// Union of an ordered pair (see [`set_in_order`]); `None` unless the segments overlap or touch.
#[inline]
pub fn union(a: Segment, b: Segment) -> Option<Segment> {
    (a.end.saturating_add(1) >= b.start).then(|| Segment::new(a.start.min(b.start), b.end))
}

/// Intersection of an ordered pair (see [`set_in_order`]); `None` unless the segments overlap.
#[inline]
pub fn intersection(a: Segment, b: Segment) -> Option<Segment> {
    (a.end >= b.start).then(|| Segment::new(a.start.max(b.start), a.end))
}

/// Replaces `m[i]` by the union of `m[i]` and `m[j]`, and `m[j]` by their intersection
/// (dropping it when empty). `None` when the two segments cannot be merged.
pub fn merge_pair(m: &Multisegment, i: usize, j: usize) -> Option<Multisegment> {
    debug_assert!(i < j && j < m.degree(), "merge indices out of range");
    let (a, b) = set_in_order(m.segments()[i], m.segments()[j]);
    let merged = union(a, b)?;

    let mut segments = m.segments().to_vec();
    segments[i] = merged;
    match intersection(a, b) {
        Some(common) => segments[j] = common,
        None => {
            segments.remove(j);
        }
    }
    Some(Multisegment::new(segments))
}

struct Frame {
    multisegment: Multisegment,
    pairs: TupleCombinations<Range<usize>, (usize, usize)>,
}

impl Frame {
    fn new(multisegment: Multisegment) -> Self {
        let pairs = (0..multisegment.degree()).tuple_combinations();
        Self {
            multisegment,
            pairs,
        }
    }
}

/// `m` followed by every distinct multisegment reachable from it through [`merge_pair`].
///
/// Each new multisegment is expanded as soon as it is found (depth-first preorder over index
/// pairs `i < j` in lexicographic order). Multisegments are compared positionally.
pub fn compute_all_union_and_inter(m: &Multisegment) -> Vec<Multisegment> {
    let mut produced = vec![m.clone()];
    let mut seen: FxHashSet<Multisegment> = FxHashSet::default();
    seen.insert(m.clone());

    let mut stack = vec![Frame::new(m.clone())];
    while let Some(frame) = stack.last_mut() {
        let Some((i, j)) = frame.pairs.next() else {
            stack.pop();
            continue;
        };
        let Some(next) = merge_pair(&frame.multisegment, i, j) else {
            continue;
        };
        if seen.insert(next.clone()) {
            produced.push(next.clone());
            stack.push(Frame::new(next));
        }
    }

    tracing::debug!(closure = produced.len(), "union/intersection closure of {m}");
    produced
}
