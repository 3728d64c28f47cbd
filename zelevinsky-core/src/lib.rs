//! Core combinatorics for Zelevinsky multisegments: permutation algebra, the dot action,
//! stabilizers and double cosets, and the standard-form search.

pub mod chamber;
pub mod closure;
pub mod coset;
pub mod family;
pub mod multisegment;
pub mod parse;
pub mod perm;
pub mod standard_form;

pub use family::{FamilyDegreeError, PermutationFamily};
pub use multisegment::{Multisegment, Segment, SegmentError};
pub use perm::{Permutation, PermutationError, Weight};
pub use standard_form::{StandardForm, find_standard_form, is_standard, unique_standard_form};
