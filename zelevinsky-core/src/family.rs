use thiserror::Error;

use crate::perm::Permutation;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("member {index} has degree {found}, but the family has degree {degree}")]
pub struct FamilyDegreeError {
    pub index: usize,
    pub found: usize,
    pub degree: usize,
}

/// An ordered list of permutations of one fixed degree.
///
/// Multiplicity is kept: a raw double coset `H·x·G` lists `h ∘ x ∘ g` once per pair `(h, g)`.
/// Deserialization checks every member against the family degree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFamily"))]
pub struct PermutationFamily {
    degree: usize,
    members: Vec<Permutation>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFamily {
    degree: usize,
    members: Vec<Permutation>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFamily> for PermutationFamily {
    type Error = FamilyDegreeError;

    fn try_from(raw: RawFamily) -> Result<Self, Self::Error> {
        Self::try_from_members(raw.degree, raw.members)
    }
}

impl PermutationFamily {
    #[inline]
    pub fn empty(degree: usize) -> Self {
        Self {
            degree,
            members: Vec::new(),
        }
    }

    /// The trivial group `{id}`.
    #[inline]
    pub fn trivial(degree: usize) -> Self {
        Self {
            degree,
            members: vec![Permutation::identity(degree)],
        }
    }

    /// The whole symmetric group of the given degree, in lexicographic order.
    pub fn symmetric(degree: usize) -> Self {
        Self {
            degree,
            members: Permutation::all(degree).collect(),
        }
    }

    pub fn try_from_members(
        degree: usize,
        members: Vec<Permutation>,
    ) -> Result<Self, FamilyDegreeError> {
        if let Some((index, p)) = members.iter().enumerate().find(|(_, p)| p.degree() != degree) {
            return Err(FamilyDegreeError {
                index,
                found: p.degree(),
                degree,
            });
        }
        Ok(Self { degree, members })
    }

    /// # Panics
    ///
    /// Panics if any member has a degree other than `degree`.
    pub fn from_members(degree: usize, members: Vec<Permutation>) -> Self {
        match Self::try_from_members(degree, members) {
            Ok(family) => family,
            Err(err) => panic!("family members must all have degree {degree}: {err}"),
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn members(&self) -> &[Permutation] {
        &self.members
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Permutation> {
        self.members.iter()
    }

    pub fn contains(&self, perm: &Permutation) -> bool {
        self.members.contains(perm)
    }

    /// # Panics
    ///
    /// Panics if `perm` has a degree other than [`Self::degree`].
    pub fn push(&mut self, perm: Permutation) {
        assert_eq!(perm.degree(), self.degree, "family degree mismatch");
        self.members.push(perm);
    }

    /// Largest inversion count among the members, or `None` for an empty family.
    pub fn max_length(&self) -> Option<usize> {
        self.members.iter().map(Permutation::inversion_count).max()
    }

    /// Members reaching [`Self::max_length`], in family order and with multiplicity.
    pub fn longest(&self) -> Vec<&Permutation> {
        let Some(max) = self.max_length() else {
            return Vec::new();
        };
        self.members
            .iter()
            .filter(|p| p.inversion_count() == max)
            .collect()
    }

    #[inline]
    pub fn into_members(self) -> Vec<Permutation> {
        self.members
    }
}

impl<'a> IntoIterator for &'a PermutationFamily {
    type Item = &'a Permutation;
    type IntoIter = std::slice::Iter<'a, Permutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{FamilyDegreeError, PermutationFamily};
    use crate::perm::Permutation;

    #[test]
    fn symmetric_group_has_factorial_size_and_one_longest_element() {
        let s4 = PermutationFamily::symmetric(4);
        assert_eq!(s4.len(), 24);
        assert_eq!(s4.max_length(), Some(6));
        let longest = s4.longest();
        assert_eq!(longest.len(), 1);
        assert_eq!(longest[0].images(), &[3, 2, 1, 0]);
    }

    #[test]
    fn empty_family_has_no_length() {
        let family = PermutationFamily::empty(3);
        assert!(family.is_empty());
        assert_eq!(family.max_length(), None);
        assert!(family.longest().is_empty());
    }

    #[test]
    fn trivial_family_contains_only_identity() {
        let family = PermutationFamily::trivial(3);
        assert_eq!(family.len(), 1);
        assert!(family.contains(&Permutation::identity(3)));
        assert_eq!(family.max_length(), Some(0));
    }

    #[test]
    #[should_panic(expected = "degree 2")]
    fn rejects_mixed_degrees() {
        PermutationFamily::from_members(
            2,
            vec![Permutation::identity(2), Permutation::identity(3)],
        );
    }

    #[test]
    fn reports_the_first_member_of_the_wrong_degree() {
        let members = vec![
            Permutation::identity(3),
            Permutation::identity(2),
            Permutation::identity(4),
        ];
        assert_eq!(
            PermutationFamily::try_from_members(3, members),
            Err(FamilyDegreeError {
                index: 1,
                found: 2,
                degree: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "family degree mismatch")]
    fn push_rejects_wrong_degree() {
        let mut family = PermutationFamily::trivial(3);
        family.push(Permutation::identity(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_checks_member_degrees() {
        let family: PermutationFamily =
            serde_json::from_str(r#"{"degree":2,"members":[[0,1],[1,0]]}"#).unwrap();
        assert_eq!(family, PermutationFamily::symmetric(2));
        assert_eq!(
            serde_json::to_string(&family).unwrap(),
            r#"{"degree":2,"members":[[0,1],[1,0]]}"#
        );

        let err = serde_json::from_str::<PermutationFamily>(r#"{"degree":2,"members":[[0,1,2]]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("member 0 has degree 3"), "{err}");
    }
}
