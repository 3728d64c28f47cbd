use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_KL_PROGRAM: &str = "../kl/kl";
const DEFAULT_PAIR_FILE_NAME: &str = "multisegm";

/// Root configuration, read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub kl: KlConfig,
}

/// Where the external calculator lives and where its input file goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlConfig {
    pub program: PathBuf,
    pub pair_file_name: String,
    /// Directory for the pair file; a fresh temporary directory per call when unset.
    pub work_dir: Option<PathBuf>,
}

impl Default for KlConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_KL_PROGRAM),
            pair_file_name: DEFAULT_PAIR_FILE_NAME.to_owned(),
            work_dir: None,
        }
    }
}

impl KitConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid configuration")
    }
}

/// Reads the configuration file at `path`, or returns the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<KitConfig> {
    let Some(path) = path else {
        return Ok(KitConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    KitConfig::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.kl.program, PathBuf::from("../kl/kl"));
        assert_eq!(config.kl.pair_file_name, "multisegm");
        assert_eq!(config.kl.work_dir, None);
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let config = KitConfig::from_toml_str(
            r#"
            [kl]
            program = "/opt/kl/kl"
            "#,
        )
        .unwrap();
        assert_eq!(config.kl.program, PathBuf::from("/opt/kl/kl"));
        assert_eq!(config.kl.pair_file_name, "multisegm");
        assert_eq!(KitConfig::from_toml_str("").unwrap(), KitConfig::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zelevinsky.toml");
        std::fs::write(&path, "[kl]\npair_file_name = \"pairs\"\nwork_dir = \"/tmp/kl\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.kl.pair_file_name, "pairs");
        assert_eq!(config.kl.work_dir, Some(PathBuf::from("/tmp/kl")));
        assert!(load_config(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn rejects_unknown_types() {
        assert!(KitConfig::from_toml_str("[kl]\nprogram = 3\n").is_err());
    }
}
