//! Stabilizers and double cosets under the dot action, by exhaustive enumeration.

use crate::family::PermutationFamily;
use crate::perm::{Permutation, Weight};

/// All `w` with `w · mu == mu`.
///
/// Walks the whole symmetric group of degree `mu.len()`, so the cost is `O(k! · k)`.
pub fn compute_stabilizer(mu: &[Weight]) -> PermutationFamily {
    let degree = mu.len();
    let members = Permutation::all(degree)
        .filter(|w| w.dot(mu) == mu)
        .collect();
    PermutationFamily::from_members(degree, members)
}

/// The raw double coset `H·x·G`: `h ∘ x ∘ g` for every `h` in `H` and, inside that, every `g`
/// in `G`. Repeated products are kept.
///
/// `G` need not be a group; any family of matching degree works.
///
/// # Panics
///
/// Panics if the degrees of `h`, `x` and `g` disagree.
pub fn compute_double_coset(
    h: &PermutationFamily,
    x: &Permutation,
    g: &PermutationFamily,
) -> PermutationFamily {
    let degree = x.degree();
    assert!(
        h.degree() == degree && g.degree() == degree,
        "double coset degrees disagree (H={}, x={degree}, G={})",
        h.degree(),
        g.degree()
    );

    let mut coset = PermutationFamily::empty(degree);
    for left in h {
        let left_x = left.compose(x);
        for right in g {
            coset.push(left_x.compose(right));
        }
    }
    coset
}
