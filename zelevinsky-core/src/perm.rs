use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use smallvec::SmallVec;
use thiserror::Error;

/// Inline storage covers every degree the exhaustive search can handle in practice.
type Images = SmallVec<[usize; 8]>;

/// Entries of `λ`, `μ` and `w · μ`. Wider than segment endpoints, so that adding a position
/// shift to any `i64` endpoint cannot overflow.
pub type Weight = i128;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PermutationError {
    #[error("image {image} at position {position} is out of range for degree {degree}")]
    OutOfRange {
        position: usize,
        image: usize,
        degree: usize,
    },
    #[error("image {image} occurs more than once")]
    Repeated { image: usize },
}

/// A bijection on `0..k`, stored by images: position `i` holds the image of `i`.
///
/// Values are only built through validated constructors, so every operation below is total.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Permutation {
    images: Images,
}

impl Permutation {
    #[inline]
    pub fn identity(degree: usize) -> Self {
        Self {
            images: (0..degree).collect(),
        }
    }

    pub fn try_from_images<I>(images: I) -> Result<Self, PermutationError>
    where
        I: IntoIterator<Item = usize>,
    {
        let images: Images = images.into_iter().collect();
        let degree = images.len();
        let mut seen = vec![false; degree];
        for (position, &image) in images.iter().enumerate() {
            if image >= degree {
                return Err(PermutationError::OutOfRange {
                    position,
                    image,
                    degree,
                });
            }
            if std::mem::replace(&mut seen[image], true) {
                return Err(PermutationError::Repeated { image });
            }
        }
        Ok(Self { images })
    }

    /// Every permutation of `0..degree`, in lexicographic order of their images.
    ///
    /// There are `degree!` of them; callers are expected to keep the degree small.
    pub fn all(degree: usize) -> impl Iterator<Item = Permutation> {
        (0..degree).permutations(degree).map(|images| Permutation {
            images: Images::from_vec(images),
        })
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &image)| i == image)
    }

    /// Coxeter length in the symmetric group.
    #[inline]
    pub fn inversion_count(&self) -> usize {
        inversion_count(&self.images)
    }

    pub fn inverse(&self) -> Self {
        Self {
            images: Images::from_vec(invert(&self.images)),
        }
    }

    /// `self ∘ other`: applies `other` first, then `self`.
    ///
    /// # Panics
    ///
    /// Panics if the degrees differ.
    pub fn compose(&self, other: &Self) -> Self {
        assert_eq!(
            self.degree(),
            other.degree(),
            "cannot compose permutations of different degrees"
        );
        Self {
            images: other.images.iter().map(|&e| self.images[e]).collect(),
        }
    }

    /// The dot action `self · mu` (see [`dot`]).
    ///
    /// # Panics
    ///
    /// Panics if `mu.len() != self.degree()`.
    #[inline]
    pub fn dot(&self, mu: &[Weight]) -> Vec<Weight> {
        dot(&self.images, mu)
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    #[inline]
    fn index(&self, index: usize) -> &usize {
        &self.images[index]
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(images: Vec<usize>) -> Result<Self, Self::Error> {
        Self::try_from_images(images)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(perm: Permutation) -> Self {
        perm.images.into_vec()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.images.iter().join(", "))
    }
}

/// Number of pairs `i < j` with `p[i] > p[j]`.
pub fn inversion_count(p: &[usize]) -> usize {
    let mut count = 0usize;
    for (i, &a) in p.iter().enumerate() {
        count += p[i + 1..].iter().filter(|&&b| a > b).count();
    }
    count
}

/// Returns `q` with `q[p[i]] = i`.
///
/// # Panics
///
/// Panics if `p` is not a bijection on `0..p.len()`.
pub fn invert(p: &[usize]) -> Vec<usize> {
    let mut inverse = vec![usize::MAX; p.len()];
    for (i, &image) in p.iter().enumerate() {
        assert!(
            image < p.len() && inverse[image] == usize::MAX,
            "not a permutation of 0..{}: {p:?}",
            p.len()
        );
        inverse[image] = i;
    }
    inverse
}

/// The ρ-shifted action `w · mu`, with ρ the identity vector `(0, 1, .., k-1)`:
/// `result[i] = mu[w⁻¹[i]] - w⁻¹[i] + i`.
///
/// # Panics
///
/// Panics if the lengths differ or `w` is not a permutation.
pub fn dot(w: &[usize], mu: &[Weight]) -> Vec<Weight> {
    assert_eq!(
        w.len(),
        mu.len(),
        "dot action needs a permutation and a vector of the same length"
    );
    invert(w)
        .into_iter()
        .enumerate()
        .map(|(i, j)| mu[j] - j as Weight + i as Weight)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(images: &[usize]) -> Permutation {
        Permutation::try_from_images(images.iter().copied()).unwrap()
    }

    #[test]
    fn inversion_counts() {
        assert_eq!(inversion_count(&[0]), 0);
        assert_eq!(inversion_count(&[0, 1]), 0);
        assert_eq!(inversion_count(&[1, 0]), 1);
        assert_eq!(inversion_count(&[2, 0, 3, 1]), 3);
        for k in 0..7usize {
            let reversed: Vec<usize> = (0..k).rev().collect();
            assert_eq!(Permutation::identity(k).inversion_count(), 0);
            assert_eq!(inversion_count(&reversed), k * k.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn invert_matches_known_values() {
        assert_eq!(invert(&[]), Vec::<usize>::new());
        assert_eq!(invert(&[0, 2, 1]), vec![0, 2, 1]);
        assert_eq!(invert(&[4, 0, 3, 2, 1]), vec![1, 4, 3, 2, 0]);
    }

    #[test]
    fn inverse_round_trips_and_composes_to_identity() {
        for p in Permutation::all(4) {
            let q = p.inverse();
            assert_eq!(q.inverse(), p);
            assert!(p.compose(&q).is_identity());
            assert!(q.compose(&p).is_identity());
        }
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn invert_rejects_repeated_images() {
        invert(&[0, 0, 1]);
    }

    #[test]
    fn constructor_reports_bad_images() {
        assert_eq!(
            Permutation::try_from_images([0, 3, 1]),
            Err(PermutationError::OutOfRange {
                position: 1,
                image: 3,
                degree: 3
            })
        );
        assert_eq!(
            Permutation::try_from_images([1, 1]),
            Err(PermutationError::Repeated { image: 1 })
        );
    }

    #[test]
    fn dot_action() {
        assert_eq!(dot(&[0], &[7]), vec![7]);
        assert_eq!(dot(&[0, 1, 2], &[4, 6, 9]), vec![4, 6, 9]);
        assert_eq!(dot(&[2, 0, 1], &[4, 6, 9]), vec![5, 8, 6]);
        assert_eq!(perm(&[2, 0, 1]).dot(&[4, 6, 9]), vec![5, 8, 6]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn dot_rejects_length_mismatch() {
        dot(&[1, 0], &[1, 2, 3]);
    }

    #[test]
    fn enumerates_all_permutations_in_order() {
        let all: Vec<Vec<usize>> = Permutation::all(3).map(Vec::from).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        assert_eq!(Permutation::all(5).count(), 120);
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let p = perm(&[1, 2, 0]);
        let q = perm(&[0, 2, 1]);
        assert_eq!(p.compose(&q), perm(&[1, 0, 2]));
        assert_eq!(p.to_string(), "[1, 2, 0]");
    }
}
