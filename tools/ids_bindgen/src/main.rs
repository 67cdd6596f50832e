//! Bindings generator for generated soundbank headers
//!
//! Reads a `Wwise_IDs.h`, validates the identifier table, and emits
//! Rust constants, a canonical header, or a serialized table model.
//!
//! Usage:
//!   ids_bindgen generate --header Wwise_IDs.h --out src/ids.rs
//!   ids_bindgen check --header Wwise_IDs.h

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use wwise_ids::config::{Config, EmitFormat, GeneratorConfig};
use wwise_ids::table::IdTable;
use wwise_ids::{header, Category, UniqueId};

#[derive(Parser)]
#[command(
    name = "ids_bindgen",
    version,
    about = "Generate typed bindings from a generated soundbank header"
)]
struct Cli {
    /// TOML or RON config file; explicit flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a header and emit bindings
    Generate {
        /// Generated header to read
        #[arg(long)]
        header: Option<PathBuf>,

        /// File to write the emitted bindings to
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output flavor
        #[arg(long, value_enum)]
        emit: Option<Emit>,
    },

    /// Parse a header and report on the table
    Check {
        /// Generated header to read
        #[arg(long)]
        header: Option<PathBuf>,
    },
}

/// CLI mirror of the library's emit formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    Rust,
    Header,
    Ron,
    Toml,
}

impl From<Emit> for EmitFormat {
    fn from(emit: Emit) -> Self {
        match emit {
            Emit::Rust => Self::Rust,
            Emit::Header => Self::Header,
            Emit::Ron => Self::Ron,
            Emit::Toml => Self::Toml,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => {
            let path = path.display().to_string();
            GeneratorConfig::load_from_file(&path)
                .with_context(|| format!("loading config {path}"))?
        }
        None => GeneratorConfig::default(),
    };

    match cli.command {
        Command::Generate { header, out, emit } => generate(base, header, out, emit),
        Command::Check { header } => check(&base, header),
    }
}

fn load_table(header_path: &str) -> Result<IdTable> {
    let contents = fs::read_to_string(header_path)
        .with_context(|| format!("reading header {header_path}"))?;
    let table =
        header::parse(&contents).with_context(|| format!("parsing header {header_path}"))?;
    log::info!("parsed {} bindings from {header_path}", table.len());
    Ok(table)
}

fn generate(
    base: GeneratorConfig,
    header: Option<PathBuf>,
    out: Option<PathBuf>,
    emit: Option<Emit>,
) -> Result<()> {
    let mut config = base;
    if let Some(path) = header {
        config.header_path = path.display().to_string();
    }
    if let Some(path) = out {
        config.output_path = path.display().to_string();
    }
    if let Some(emit) = emit {
        config.emit = emit.into();
    }
    config.validate()?;

    let table = load_table(&config.header_path)?;
    let duplicates = table.duplicate_values();
    if !duplicates.is_empty() {
        report_duplicates(&duplicates);
        bail!("refusing to generate from a table with duplicate values");
    }

    let output = match config.emit {
        EmitFormat::Rust => header::to_rust_module(&table, "wwise_ids"),
        EmitFormat::Header => header::write(&table),
        EmitFormat::Ron => table.to_ron_string()?,
        EmitFormat::Toml => table.to_toml_string()?,
    };

    fs::write(&config.output_path, output)
        .with_context(|| format!("writing {}", config.output_path))?;
    println!("wrote {} ({} bindings)", config.output_path, table.len());
    Ok(())
}

fn check(base: &GeneratorConfig, header: Option<PathBuf>) -> Result<()> {
    let header_path = header.map_or_else(|| base.header_path.clone(), |p| p.display().to_string());
    let table = load_table(&header_path)?;

    let state_count: usize = table.state_groups.iter().map(|g| g.states.len()).sum();
    println!("{header_path}: {} bindings", table.len());
    println!("  events:          {}", table.events.len());
    println!(
        "  state groups:    {} ({state_count} states)",
        table.state_groups.len()
    );
    println!("  game parameters: {}", table.game_parameters.len());
    println!("  banks:           {}", table.banks.len());
    println!("  busses:          {}", table.busses.len());
    println!("  audio devices:   {}", table.audio_devices.len());

    for (name, id) in table.unhashable_symbols() {
        println!("note: {name} = {id} does not hash from its symbol (object name was sanitized)");
    }

    let duplicates = table.duplicate_values();
    if !duplicates.is_empty() {
        report_duplicates(&duplicates);
        bail!("table has duplicate values");
    }

    println!("ok");
    Ok(())
}

fn report_duplicates(duplicates: &[(Category, UniqueId, Vec<String>)]) {
    for (category, id, names) in duplicates {
        eprintln!("duplicate {category} value {id}: {}", names.join(", "));
    }
}
