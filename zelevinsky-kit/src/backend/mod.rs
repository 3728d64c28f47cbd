//! Kazhdan-Lusztig polynomial backends.
//!
//! The calculator reads a two-column file of permutation pairs and prints one line per pair;
//! the second-to-last space-separated column of each line is the comma-separated coefficient
//! list of `P_{x,y}`.

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow, ensure};
use zelevinsky_core::Permutation;

mod external;

pub use external::ExternalKl;

/// Seam between the expansion pipeline and whatever computes KL polynomials.
pub trait KlBackend {
    /// `P_{base, target}` for every target, in order. All permutations live in `S_degree`.
    fn evaluate(
        &self,
        degree: usize,
        base: &Permutation,
        targets: &[Permutation],
    ) -> Result<Vec<KlPolynomial>>;
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KlPolynomial {
    coefficients: Vec<i64>,
}

impl KlPolynomial {
    #[inline]
    pub fn new(coefficients: Vec<i64>) -> Self {
        Self { coefficients }
    }

    #[inline]
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// The sum of the coefficients.
    #[inline]
    pub fn evaluate_at_one(&self) -> i64 {
        self.coefficients.iter().sum()
    }
}

/// Concatenated images of `perm`, followed by `perm.degree()..length` so that permutations of
/// a smaller multisegment embed into the larger symmetric group.
pub fn format_permutation(perm: &Permutation, length: usize) -> String {
    let mut out = String::new();
    for image in perm.images().iter().copied().chain(perm.degree()..length) {
        out.push_str(&image.to_string());
    }
    out
}

/// One line `"<base> <target>"` per target, targets padded to the degree of `base`.
pub fn write_pair_file<W: Write>(
    mut out: W,
    base: &Permutation,
    targets: &[Permutation],
) -> io::Result<()> {
    let base_str = format_permutation(base, 0);
    for target in targets {
        writeln!(out, "{base_str} {}", format_permutation(target, base.degree()))?;
    }
    out.flush()
}

/// Coefficients from one output line of the calculator.
pub fn parse_output_line(line: &str) -> Result<KlPolynomial> {
    let columns: Vec<&str> = line.split(' ').collect();
    ensure!(
        columns.len() >= 2,
        "expected at least two columns in calculator output: {line:?}"
    );
    let column = columns[columns.len() - 2];
    let coefficients = column
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<i64>()
                .map_err(|err| anyhow!("bad coefficient {c:?} in {line:?}: {err}"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(KlPolynomial::new(coefficients))
}

/// One polynomial per non-empty line of calculator output.
pub fn parse_output(stdout: &str) -> Result<Vec<KlPolynomial>> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| parse_output_line(line).with_context(|| format!("output line {}", i + 1)))
        .collect()
}
