//! Search for the standard form `(λ, w, μ)` of a multisegment.
//!
//! A multisegment `m` of degree `k` is written as `λ / (w · μ)`, where
//! - `λ` and `μ` lie in the dominant chamber `D_k`,
//! - `λ` dominates `w · μ`,
//! - `w` is a longest element of its double coset `W_λ · w · W_μ`.
//!
//! The search is exhaustive: every ordering of the segments is tried for `λ`, and every
//! permutation of degree `k` is tried for `w`. `m` is standard exactly when one record survives.

use tracing::{debug, trace};

use crate::chamber::{dominates, is_in_dk};
use crate::coset::{compute_double_coset, compute_stabilizer};
use crate::family::PermutationFamily;
use crate::multisegment::{Multisegment, Segment};
use crate::perm::{Permutation, Weight};

/// A dominant `λ` together with the ordering of the segments that produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LambdaCandidate {
    pub lambda: Vec<Weight>,
    /// `order[i]` is segment `ordering[i]` of the input multisegment.
    pub order: Vec<Segment>,
    pub ordering: Permutation,
}

/// A pair `(w, μ)` with `w · μ == wmu` and `μ` dominant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WMuCandidate {
    pub w: Permutation,
    pub mu: Vec<Weight>,
    pub wmu: Vec<Weight>,
}

/// One accepted decomposition.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StandardForm {
    pub lambda: Vec<Weight>,
    pub mu: Vec<Weight>,
    pub w: Permutation,
    pub wmu: Vec<Weight>,
    pub order: Vec<Segment>,
    pub ordering: Permutation,
    pub lambda_stabilizer: PermutationFamily,
    pub mu_stabilizer: PermutationFamily,
    pub double_coset: PermutationFamily,
}

/// Every ordering of the segments whose right endpoints give a dominant `λ`,
/// with `λ[i] = (i + 1) + order[i].end`.
///
/// Orderings are the `k!` index permutations in lexicographic order; equal segments are not
/// merged, so a repeated segment yields repeated candidates.
pub fn find_possible_lambdas(m: &Multisegment) -> Vec<LambdaCandidate> {
    let segments = m.segments();
    Permutation::all(m.degree())
        .filter_map(|ordering| {
            let order: Vec<Segment> = ordering.images().iter().map(|&i| segments[i]).collect();
            let lambda: Vec<Weight> = order
                .iter()
                .enumerate()
                .map(|(i, s)| i as Weight + 1 + Weight::from(s.end))
                .collect();
            is_in_dk(&lambda).then_some(LambdaCandidate {
                lambda,
                order,
                ordering,
            })
        })
        .collect()
}

/// All `(w, μ)` solving `w · μ == wmu` with `μ` dominant, where `wmu[i] = order[i].start + i`.
///
/// Returns nothing unless `λ` dominates `wmu`.
///
/// # Panics
///
/// Panics if `lambda` and `order` have different lengths.
pub fn find_possible_wmu(lambda: &[Weight], order: &[Segment]) -> Vec<WMuCandidate> {
    let k = order.len();
    let wmu: Vec<Weight> = order
        .iter()
        .enumerate()
        .map(|(i, s)| Weight::from(s.start) + i as Weight)
        .collect();
    if !dominates(lambda, &wmu) {
        return Vec::new();
    }

    let wmu_minus_id: Vec<Weight> = wmu
        .iter()
        .enumerate()
        .map(|(i, &e)| e - i as Weight)
        .collect();
    let mut found = Vec::new();
    for w_tilde in Permutation::all(k) {
        let mu_tilde: Vec<Weight> = wmu_minus_id
            .iter()
            .zip(w_tilde.images())
            .map(|(&e, &t)| e + t as Weight)
            .collect();
        let w = w_tilde.inverse();
        let mu: Vec<Weight> = w.images().iter().map(|&j| mu_tilde[j]).collect();
        if is_in_dk(&mu) {
            debug_assert_eq!(w.dot(&mu), wmu);
            found.push(WMuCandidate {
                w,
                mu,
                wmu: wmu.clone(),
            });
        }
    }
    found
}

/// Every standard-form record of `m`; `m` is standard when there is exactly one.
pub fn find_standard_form(m: &Multisegment) -> Vec<StandardForm> {
    let lambdas = find_possible_lambdas(m);
    debug!(
        degree = m.degree(),
        lambda_candidates = lambdas.len(),
        "searching standard form of {m}"
    );

    let mut forms = Vec::new();
    for LambdaCandidate {
        lambda,
        order,
        ordering,
    } in lambdas
    {
        let lambda_stabilizer = compute_stabilizer(&lambda);
        for WMuCandidate { w, mu, wmu } in find_possible_wmu(&lambda, &order) {
            let mu_stabilizer = compute_stabilizer(&mu);
            let double_coset = compute_double_coset(&lambda_stabilizer, &w, &mu_stabilizer);
            let length = w.inversion_count();
            let longest = double_coset.max_length() == Some(length);
            trace!(?lambda, ?mu, %w, length, longest, coset = double_coset.len());
            if longest {
                forms.push(StandardForm {
                    lambda: lambda.clone(),
                    mu,
                    w,
                    wmu,
                    order: order.clone(),
                    ordering: ordering.clone(),
                    lambda_stabilizer: lambda_stabilizer.clone(),
                    mu_stabilizer,
                    double_coset,
                });
            }
        }
    }

    debug!(records = forms.len(), "standard form search of {m} done");
    forms
}

#[inline]
pub fn is_standard(m: &Multisegment) -> bool {
    find_standard_form(m).len() == 1
}

/// The standard form of `m` when it is unique.
pub fn unique_standard_form(m: &Multisegment) -> Option<StandardForm> {
    let mut forms = find_standard_form(m);
    if forms.len() == 1 {
        forms.pop()
    } else {
        None
    }
}
