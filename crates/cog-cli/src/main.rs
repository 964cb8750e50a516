//! `cog` CLI — inspect and edit cog configuration files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Show the section/key tree
//! cog show -i settings.cog
//!
//! # Read one value (DEFAULT section unless -s is given)
//! cog get width -s Display -i settings.cog
//!
//! # Change a value in place; the type is inferred from the text
//! cog set width 1024 -s Display -i settings.cog
//!
//! # Write the change somewhere else instead
//! cog set fullscreen true -s Display -i settings.cog -o out.cog
//!
//! # Normalize a file (stdin → stdout)
//! cat settings.cog | cog fmt
//!
//! # Dump the model as JSON
//! cog dump -i settings.cog
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cog_core::{ConfigDocument, Value, DEFAULT_SECTION};
use std::io::{self, Read};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cog", version, about = "Cog configuration file tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log load/save details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print sections and their keys as a tree
    Show {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print a single value
    Get {
        /// Key to look up
        key: String,
        /// Section name (defaults to DEFAULT)
        #[arg(short, long)]
        section: Option<String>,
        /// Input file
        #[arg(short, long)]
        input: String,
    },
    /// Set a value and save the file
    Set {
        /// Key to set
        key: String,
        /// New value; `true`/`false`, integers and decimals keep their type,
        /// anything else is stored as a string
        value: String,
        /// Section name (defaults to DEFAULT)
        #[arg(short, long)]
        section: Option<String>,
        /// Input file
        #[arg(short, long)]
        input: String,
        /// Output file (overwrites the input if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Re-serialize a file in canonical layout
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the parsed model as pretty JSON
    Dump {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { input } => {
            let doc = read_document(input.as_deref())?;
            print!("{}", render_tree(&doc));
        }
        Commands::Get {
            key,
            section,
            input,
        } => {
            let doc = open_document(&input)?;
            match doc.get(&key, section.as_deref()) {
                Some(value) => println!("{}", value),
                None => {
                    eprintln!(
                        "Error: key '{}' not found in section '{}'",
                        key,
                        section.as_deref().unwrap_or(DEFAULT_SECTION)
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Set {
            key,
            value,
            section,
            input,
            output,
        } => {
            let mut doc = open_document(&input)?;
            let value = Value::infer(&value);
            tracing::info!(key = %key, value = %value.to_cog(), kind = value.type_name(), "setting value");
            doc.set(key, value, section.as_deref());
            let destination = output.as_deref().map(Path::new);
            doc.save(destination).with_context(|| {
                format!(
                    "Failed to save file: {}",
                    output.as_deref().unwrap_or(input.as_str())
                )
            })?;
        }
        Commands::Fmt { input, output } => {
            let doc = read_document(input.as_deref())?;
            write_output(output.as_deref(), &doc.to_cog_string())?;
        }
        Commands::Dump { input } => {
            let doc = read_document(input.as_deref())?;
            let pretty =
                serde_json::to_string_pretty(&doc).context("Failed to serialize document")?;
            println!("{}", pretty);
        }
    }

    Ok(())
}

/// Log to stderr. `--verbose` forces debug output for the cog crates;
/// otherwise `RUST_LOG` applies, defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cog_core=debug,cog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Render the section/key tree the way an editor's tree view shows it:
/// one `[section]` node per section, entries indented beneath.
fn render_tree(doc: &ConfigDocument) -> String {
    let mut out = String::new();
    for section in doc.sections() {
        out.push_str(&format!("[{}]\n", section.name()));
        for entry in section.entries() {
            out.push_str(&format!(
                "  {} = {} ({})\n",
                entry.key(),
                entry.value(),
                entry.value().type_name()
            ));
        }
    }
    out
}

fn open_document(path: &str) -> Result<ConfigDocument> {
    ConfigDocument::open(path).with_context(|| format!("Failed to read file: {}", path))
}

fn read_document(path: Option<&str>) -> Result<ConfigDocument> {
    match path {
        Some(path) => open_document(path),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            let mut doc = ConfigDocument::new();
            doc.load_str(&buf);
            Ok(doc)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
