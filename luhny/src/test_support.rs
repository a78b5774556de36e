//! Test-only fixtures for checksum and CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A 15-digit IMEI whose check digit matches.
pub const VALID_IMEI: &str = "353879234252633";

/// [`VALID_IMEI`] with the check digit off by one.
pub const INVALID_IMEI: &str = "353879234252634";

/// An IMEI whose checksum total is a multiple of ten (70). Its check digit
/// `0` can never match the computed `"10"`.
pub const ZERO_TOTAL_IMEI: &str = "653879234252630";

/// Temporary working directory for CLI runs.
pub struct TestDir {
    temp: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `name` under the root and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
