//! Dominance order and the dominant chamber `D_k`.

use crate::perm::Weight;

/// `u[i] >= v[i]` for every index.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn dominates(u: &[Weight], v: &[Weight]) -> bool {
    assert_eq!(
        u.len(),
        v.len(),
        "dominance is only defined between vectors of the same length"
    );
    u.iter().zip(v).all(|(a, b)| a >= b)
}

/// `d[i] = v[i] - (i + 1)`, the 1-indexed ρ-shift.
pub fn rho_shift(v: &[Weight]) -> Vec<Weight> {
    v.iter()
        .enumerate()
        .map(|(i, &e)| e - (i as Weight + 1))
        .collect()
}

/// Membership in `D_k`: `v[0] - 1 >= v[1] - 2 >= .. >= v[k-1] - k`.
pub fn is_in_dk(v: &[Weight]) -> bool {
    // Adjacent ρ-shifts compare like v[i] >= v[i+1] - 1.
    v.windows(2).all(|w| w[0] >= w[1] - 1)
}
