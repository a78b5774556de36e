//! CLI configuration stored in `luhny.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "luhny.toml";

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<imei>\t<verdict>` lines.
    #[default]
    Text,
    /// One JSON object per line (pretty-printed for `explain`).
    Json,
}

/// Luhny configuration (TOML).
///
/// Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LuhnyConfig {
    /// Strip surrounding whitespace from each identifier before validating.
    pub trim_input: bool,

    /// Ignore empty lines when reading identifiers from a file or stdin.
    pub skip_blank_lines: bool,

    pub output: OutputFormat,
}

impl Default for LuhnyConfig {
    fn default() -> Self {
        Self {
            trim_input: true,
            skip_blank_lines: true,
            output: OutputFormat::Text,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LuhnyConfig::default()`.
pub fn load_config(path: &Path) -> Result<LuhnyConfig> {
    if !path.exists() {
        return Ok(LuhnyConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LuhnyConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LuhnyConfig) -> Result<()> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
