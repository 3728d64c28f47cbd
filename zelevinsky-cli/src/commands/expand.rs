//! `zelevinsky expand`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use zelevinsky::{ExternalKl, expand, load_config};

use super::parse_multisegment;

fn prompt_multisegment() -> Result<String> {
    print!("enter a multisegment: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read multisegment from stdin")?;
    Ok(line)
}

pub fn run(
    input: Option<String>,
    config_path: Option<PathBuf>,
    kl_program: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(program) = kl_program {
        config.kl.program = program;
    }
    debug!(program = %config.kl.program.display(), "using KL calculator");

    let input = match input {
        Some(input) => input,
        None => prompt_multisegment()?,
    };
    let m = parse_multisegment(&input, strict)?;

    let backend = ExternalKl::new(config.kl);
    let expansion = expand(&m, &backend)?;
    println!("{expansion}");
    Ok(())
}
