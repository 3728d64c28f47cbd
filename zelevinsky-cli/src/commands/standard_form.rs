//! `zelevinsky standard-form`

use anyhow::Result;
use serde::Serialize;
use zelevinsky::{Multisegment, StandardForm, find_standard_form};

use super::parse_multisegment;
use crate::OutputFormat;

#[derive(Serialize)]
struct Report<'a> {
    multisegment: &'a Multisegment,
    standard: bool,
    forms: &'a [StandardForm],
}

pub fn run(input: &str, format: OutputFormat, strict: bool) -> Result<()> {
    let m = parse_multisegment(input, strict)?;
    let forms = find_standard_form(&m);

    match format {
        OutputFormat::Json => {
            let report = Report {
                multisegment: &m,
                standard: forms.len() == 1,
                forms: &forms,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_human(&m, &forms),
    }
    Ok(())
}

fn print_human(m: &Multisegment, forms: &[StandardForm]) {
    println!("multisegment: {m}");
    println!("standard forms: {}", forms.len());
    for (i, form) in forms.iter().enumerate() {
        println!(
            "#{} λ = {:?}  μ = {:?}  w = {}  ℓ(w) = {}",
            i + 1,
            form.lambda,
            form.mu,
            form.w,
            form.w.inversion_count()
        );
        println!(
            "   w·μ = {:?}  order = {}",
            form.wmu,
            Multisegment::from(form.order.clone())
        );
        println!(
            "   |W_λ| = {}  |W_μ| = {}  |W_λ·w·W_μ| = {}",
            form.lambda_stabilizer.len(),
            form.mu_stabilizer.len(),
            form.double_coset.len()
        );
    }
    if forms.len() != 1 {
        println!("{m} is not standard");
    }
}
