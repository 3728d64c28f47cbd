//! Subcommand implementations.

pub mod closure;
pub mod expand;
pub mod standard_form;

use anyhow::{Result, ensure};
use zelevinsky::Multisegment;
use zelevinsky::parse::multisegment_from_str;

/// Parses a multisegment argument; at least one segment is required.
pub(crate) fn parse_multisegment(input: &str, strict: bool) -> Result<Multisegment> {
    let m = multisegment_from_str(input);
    ensure!(!m.is_empty(), "no segment found in {input:?}");
    if strict {
        m.validate()?;
    }
    Ok(m)
}
