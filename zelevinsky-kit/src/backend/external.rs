use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, ensure};
use tracing::debug;
use zelevinsky_core::Permutation;

use super::{KlBackend, KlPolynomial, parse_output, write_pair_file};
use crate::config::KlConfig;

/// Runs the native calculator as `<program> <degree> <pair-file>`.
#[derive(Clone, Debug)]
pub struct ExternalKl {
    config: KlConfig,
}

impl ExternalKl {
    pub fn new(config: KlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KlConfig {
        &self.config
    }

    fn run(&self, degree: usize, pair_file: PathBuf) -> Result<String> {
        let program = &self.config.program;
        debug!(program = %program.display(), degree, pairs = %pair_file.display(), "running KL calculator");
        let output = Command::new(program)
            .arg(degree.to_string())
            .arg(&pair_file)
            .output()
            .with_context(|| format!("failed to run KL calculator {}", program.display()))?;
        ensure!(
            output.status.success(),
            "KL calculator {} exited with {}: {}",
            program.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        String::from_utf8(output.stdout).context("KL calculator printed non UTF-8 output")
    }
}

impl KlBackend for ExternalKl {
    fn evaluate(
        &self,
        degree: usize,
        base: &Permutation,
        targets: &[Permutation],
    ) -> Result<Vec<KlPolynomial>> {
        // Held until the calculator has exited.
        let scratch;
        let dir = match &self.config.work_dir {
            Some(dir) => dir.clone(),
            None => {
                scratch = tempfile::tempdir().context("failed to create scratch directory")?;
                scratch.path().to_path_buf()
            }
        };
        let pair_file = dir.join(&self.config.pair_file_name);

        let file = File::create(&pair_file)
            .with_context(|| format!("failed to create {}", pair_file.display()))?;
        write_pair_file(BufWriter::new(file), base, targets)
            .with_context(|| format!("failed to write {}", pair_file.display()))?;

        let stdout = self.run(degree, pair_file)?;
        let polynomials = parse_output(&stdout)?;
        ensure!(
            polynomials.len() == targets.len(),
            "KL calculator returned {} polynomials for {} pairs",
            polynomials.len(),
            targets.len()
        );
        Ok(polynomials)
    }
}
