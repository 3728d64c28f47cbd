//! `zelevinsky closure`

use anyhow::Result;
use zelevinsky::closure::compute_all_union_and_inter;

use super::parse_multisegment;
use crate::OutputFormat;

pub fn run(input: &str, format: OutputFormat) -> Result<()> {
    let m = parse_multisegment(input, false)?;
    let closure = compute_all_union_and_inter(&m);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&closure)?),
        OutputFormat::Human => {
            for n in &closure {
                println!("{n}");
            }
        }
    }
    Ok(())
}
