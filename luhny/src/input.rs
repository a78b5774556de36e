//! Gathering identifiers for the binary.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::LuhnyConfig;

/// Where identifiers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// Identifiers passed on the command line.
    Args(&'a [String]),
    /// One identifier per line of a file.
    File(&'a Path),
    /// One identifier per line of stdin.
    Stdin,
}

/// Read identifiers from `source` and normalize them per `cfg`.
pub fn collect(source: Source<'_>, cfg: &LuhnyConfig) -> Result<Vec<String>> {
    let raw = match source {
        Source::Args(args) => return Ok(args.iter().map(|arg| normalize(arg, cfg)).collect()),
        Source::File(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        Source::Stdin => {
            let mut buf = String::new();
            for line in std::io::stdin().lock().lines() {
                buf.push_str(&line.context("read stdin")?);
                buf.push('\n');
            }
            buf
        }
    };
    Ok(split_lines(&raw, cfg))
}

/// Split `raw` into identifiers, one per line.
pub fn split_lines(raw: &str, cfg: &LuhnyConfig) -> Vec<String> {
    raw.lines()
        .filter(|line| !(cfg.skip_blank_lines && line.trim().is_empty()))
        .map(|line| normalize(line, cfg))
        .collect()
}

fn normalize(identifier: &str, cfg: &LuhnyConfig) -> String {
    if cfg.trim_input {
        identifier.trim().to_string()
    } else {
        identifier.to_string()
    }
}
