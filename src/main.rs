// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Date Modified: 2026-10-18
// Author: Lukas Bower

//! `bootcfg` – inspect early boot configuration from a shell.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bootcfg::boot::{create_dt_file, import_acpi_cmdline, DtDirResolver};
use bootcfg::bootloader::{cmdline_entries, read_cmdline};
use bootcfg::props::{expand_props, FilePropertyStore};
use bootcfg::BootPaths;

#[derive(Parser)]
#[command(name = "bootcfg", version, about = "Early boot configuration utilities")]
struct Cli {
    /// Load boot paths from a TOML file instead of BOOTCFG_* variables.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the effective Android DT directory
    DtDir,
    /// Print one DT leaf value
    DtRead { sub_path: String },
    /// Print accepted key=value cmdline entries
    Cmdline {
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Decode the ACPI config node into DT files under ROOT
    AcpiImport {
        #[arg(long)]
        root: PathBuf,
    },
    /// Expand property references in TEMPLATE
    Expand {
        template: String,
        #[arg(long, value_name = "FILE")]
        props: PathBuf,
    },
}

fn load_paths(config: Option<PathBuf>) -> Result<BootPaths> {
    match config {
        Some(path) => BootPaths::from_toml_file(&path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(BootPaths::from_env()),
    }
}

fn cmd_acpi_import(paths: &BootPaths, root: PathBuf) -> Result<()> {
    let mut failures = Vec::new();
    let decoded = import_acpi_cmdline(paths, false, &root, |key, value, emu, dir| {
        match create_dt_file(key, value, emu, dir) {
            Ok(Some(path)) => println!("{}", path.display()),
            Ok(None) => {}
            Err(e) => failures.push(e),
        }
    })
    .context("ACPI import")?;
    for e in &failures {
        eprintln!("warning: {e}");
    }
    println!("{decoded} entries decoded, {} failed", failures.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let paths = load_paths(cli.config)?;

    match cli.cmd {
        Cmd::DtDir => {
            let resolver = DtDirResolver::new(paths);
            println!("{}", resolver.get().display());
        }
        Cmd::DtRead { sub_path } => {
            let resolver = DtDirResolver::new(paths);
            let value = resolver
                .read_dt_file(&sub_path)
                .with_context(|| format!("no DT value at {sub_path}"))?;
            println!("{value}");
        }
        Cmd::Cmdline { file } => {
            let cmdline = read_cmdline(file.as_deref().unwrap_or(paths.cmdline.as_path()));
            for entry in cmdline_entries(&cmdline) {
                println!("{}={}", entry.key, entry.value);
            }
        }
        Cmd::AcpiImport { root } => cmd_acpi_import(&paths, root)?,
        Cmd::Expand { template, props } => {
            let store = FilePropertyStore::load(&props)
                .with_context(|| format!("loading properties from {}", props.display()))?;
            println!("{}", expand_props(&template, &store)?);
        }
    }
    Ok(())
}
