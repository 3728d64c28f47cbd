use std::fmt;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use tracing::{debug, warn};
use zelevinsky_core::closure::compute_all_union_and_inter;
use zelevinsky_core::{Multisegment, Permutation, find_standard_form};

use crate::backend::KlBackend;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpansionTerm {
    /// `P_{w_m, w_n}(1)`.
    pub coefficient: i64,
    pub multisegment: Multisegment,
    pub w: Permutation,
}

/// `I(m) = Σ_n P_{w_m, w_n}(1) · Z(n)` over the union/intersection closure of `m`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expansion {
    pub multisegment: Multisegment,
    pub terms: Vec<ExpansionTerm>,
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I({}) = \n{}",
            self.multisegment,
            self.terms
                .iter()
                .map(|t| format!("{} * Z({})", t.coefficient, t.multisegment))
                .join("\n + ")
        )
    }
}

/// The `w` of the standard form of `n`. The first record is used when `n` is not standard.
fn standard_w(n: &Multisegment) -> Result<Permutation> {
    let forms = find_standard_form(n);
    if forms.len() != 1 {
        warn!(records = forms.len(), "{n} has no unique standard form");
    }
    let form = forms
        .into_iter()
        .next()
        .with_context(|| format!("{n} has no standard form"))?;
    Ok(form.w)
}

pub fn expand<B: KlBackend + ?Sized>(m: &Multisegment, backend: &B) -> Result<Expansion> {
    let closure = compute_all_union_and_inter(m);
    let ws = closure
        .iter()
        .map(standard_w)
        .collect::<Result<Vec<_>>>()?;
    debug!(terms = ws.len(), "expanding {m}");

    // The closure starts with `m` itself.
    let base = &ws[0];
    let polynomials = backend.evaluate(m.degree(), base, &ws)?;
    ensure!(
        polynomials.len() == ws.len(),
        "backend returned {} polynomials for {} multisegments",
        polynomials.len(),
        ws.len()
    );

    let terms = closure
        .into_iter()
        .zip(ws)
        .zip(polynomials)
        .map(|((multisegment, w), poly)| ExpansionTerm {
            coefficient: poly.evaluate_at_one(),
            multisegment,
            w,
        })
        .collect();
    Ok(Expansion {
        multisegment: m.clone(),
        terms,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::backend::{KlPolynomial, format_permutation};

    /// Records its calls and answers `1 + ℓ(target)·q` for every pair.
    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<(usize, String, Vec<String>)>>,
    }

    impl KlBackend for RecordingBackend {
        fn evaluate(
            &self,
            degree: usize,
            base: &Permutation,
            targets: &[Permutation],
        ) -> Result<Vec<KlPolynomial>> {
            self.calls.borrow_mut().push((
                degree,
                format_permutation(base, 0),
                targets.iter().map(|t| format_permutation(t, degree)).collect(),
            ));
            Ok(targets
                .iter()
                .map(|t| KlPolynomial::new(vec![1, t.inversion_count() as i64]))
                .collect())
        }
    }

    struct ShortBackend;

    impl KlBackend for ShortBackend {
        fn evaluate(
            &self,
            _: usize,
            _: &Permutation,
            _: &[Permutation],
        ) -> Result<Vec<KlPolynomial>> {
            Ok(vec![KlPolynomial::new(vec![1])])
        }
    }

    #[test]
    fn expands_over_the_closure() {
        let m = Multisegment::from([[1, 2], [2, 3], [3, 4]]);
        let backend = RecordingBackend::default();
        let expansion = expand(&m, &backend).unwrap();

        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (degree, base, targets) = &calls[0];
        assert_eq!(*degree, 3);
        assert_eq!(base, "012");
        assert_eq!(targets, &["012", "021", "120", "102", "012", "102"]);

        let coefficients: Vec<i64> = expansion.terms.iter().map(|t| t.coefficient).collect();
        assert_eq!(coefficients, vec![1, 2, 3, 2, 1, 2]);
        assert_eq!(
            expansion.terms[3].multisegment,
            Multisegment::from([[1, 4], [2, 3]])
        );
    }

    #[test]
    fn displays_as_symbolic_sum() {
        let m = Multisegment::from([[1, 2], [3, 4]]);
        let expansion = expand(&m, &RecordingBackend::default()).unwrap();
        assert_eq!(
            expansion.to_string(),
            "I([[1, 2], [3, 4]]) = \n1 * Z([[1, 2], [3, 4]])\n + 1 * Z([[1, 4]])"
        );
    }

    #[test]
    fn short_backend_answers_are_rejected() {
        let m = Multisegment::from([[1, 2], [3, 4]]);
        assert!(expand(&m, &ShortBackend).is_err());
    }

    #[test]
    fn multisegment_without_standard_form_is_an_error() {
        let m = Multisegment::from([[3, 1], [1, 2], [2, 2], [3, 3]]);
        let err = expand(&m, &RecordingBackend::default()).unwrap_err();
        assert!(err.to_string().contains("has no standard form"));
    }
}
