//! Command-line front end for IMEI checksum validation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use luhny::config::{CONFIG_FILE, LuhnyConfig, OutputFormat, load_config, write_config};
use luhny::input::{Source, collect};
use luhny::render::{Verdict, render_report, render_verdict};
use luhny::{check_digit_for, checksum_report, exit_codes, logging, validate};

#[derive(Parser)]
#[command(name = "luhny", version, about = "Validate IMEI check digits")]
struct Cli {
    /// Config file (defaults to `luhny.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured output format.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate identifiers from arguments, `--file`, or stdin.
    Validate {
        imeis: Vec<String>,
        /// Read one identifier per line from this file.
        #[arg(short, long, conflicts_with = "imeis")]
        file: Option<PathBuf>,
    },
    /// Print every intermediate checksum value for one identifier.
    Explain { imei: String },
    /// Print the check digit that completes a 14-digit body.
    CheckDigit { body: String },
    /// Write a default `luhny.toml`.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    match cli.command {
        Command::Validate { imeis, file } => {
            let cfg = effective_config(&config_path, cli.output)?;
            let source = match &file {
                Some(path) => Source::File(path),
                None if imeis.is_empty() => Source::Stdin,
                None => Source::Args(&imeis),
            };
            cmd_validate(source, &cfg)
        }
        Command::Explain { imei } => {
            cmd_explain(&imei, &effective_config(&config_path, cli.output)?)
        }
        Command::CheckDigit { body } => {
            cmd_check_digit(&body, &effective_config(&config_path, cli.output)?)
        }
        Command::InitConfig { force } => cmd_init_config(&config_path, force),
    }
}

/// Load config and apply command-line overrides.
fn effective_config(path: &Path, output: Option<OutputFormat>) -> Result<LuhnyConfig> {
    let mut cfg = load_config(path).context("load config")?;
    if let Some(output) = output {
        cfg.output = output;
    }
    Ok(cfg)
}

fn cmd_validate(source: Source<'_>, cfg: &LuhnyConfig) -> Result<i32> {
    let imeis = collect(source, cfg)?;
    let mut code = exit_codes::OK;
    for imei in imeis {
        let valid = validate(&imei);
        if !valid {
            code = exit_codes::INVALID;
        }
        println!("{}", render_verdict(&Verdict { imei, valid }, cfg.output)?);
    }
    Ok(code)
}

fn cmd_explain(imei: &str, cfg: &LuhnyConfig) -> Result<i32> {
    let imei = if cfg.trim_input { imei.trim() } else { imei };
    let report = checksum_report(imei).with_context(|| format!("explain {imei:?}"))?;
    println!("{}", render_report(&report, cfg.output)?);
    if report.valid {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::INVALID)
    }
}

fn cmd_check_digit(body: &str, cfg: &LuhnyConfig) -> Result<i32> {
    let body = if cfg.trim_input { body.trim() } else { body };
    let digit = check_digit_for(body).with_context(|| format!("check digit for {body:?}"))?;
    if digit.len() > 1 {
        bail!("no single check digit completes {body:?} (checksum computes {digit})");
    }
    println!("{digit}");
    Ok(exit_codes::OK)
}

fn cmd_init_config(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &LuhnyConfig::default())?;
    Ok(exit_codes::OK)
}
