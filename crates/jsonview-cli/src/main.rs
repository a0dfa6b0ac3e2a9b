//! `jsonview` CLI: query, update and reshape JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Read a nested value (exit status 1 when the path does not exist)
//! echo '{"user":{"name":"Ada"}}' | jsonview get user.name
//!
//! # Write a value, creating intermediate objects and arrays
//! jsonview set -i doc.json tags.0 '"first"'
//!
//! # Apply update operators
//! jsonview update -i doc.json '{"$inc":{"visits":1},"$push":{"log":"seen"}}'
//!
//! # Keep only selected field paths
//! jsonview filter -i doc.json 'name, addresses.city' --pretty
//!
//! # Rename every key
//! jsonview case snake -i doc.json
//!
//! # Merge a directory of .json files into one document
//! jsonview merge ./config
//! ```
//!
//! Set `RUST_LOG` (or pass `-v`) to see what the library does on the way.

mod scan;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jsonview_core::{Cursor, FieldCase};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsonview",
    version,
    about = "Query, update and reshape JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log library activity (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Io {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a dotted path
    Get {
        /// Dotted path, e.g. `addresses.0.city`
        path: String,
        #[command(flatten)]
        io: Io,
    },
    /// Write a JSON value at a dotted path
    Set {
        /// Dotted path, e.g. `addresses.0.city`
        path: String,
        /// JSON text of the value to write
        value: String,
        #[command(flatten)]
        io: Io,
    },
    /// Apply an update-operator document ($set, $inc, $push, ...)
    Update {
        /// Operator document as JSON text
        #[arg(required_unless_present = "ops_file", conflicts_with = "ops_file")]
        ops: Option<String>,
        /// Read the operator document from a file instead
        #[arg(long)]
        ops_file: Option<String>,
        #[command(flatten)]
        io: Io,
    },
    /// Keep only the listed field paths
    Filter {
        /// Comma-separated dotted field paths
        fields: String,
        #[command(flatten)]
        io: Io,
    },
    /// Drop null values, and objects and arrays left empty by doing so
    RemoveNulls {
        #[command(flatten)]
        io: Io,
    },
    /// Rename every object key to a casing style
    Case {
        /// camel, lower-camel, snake, kebab, train or screaming-snake
        style: FieldCase,
        #[command(flatten)]
        io: Io,
    },
    /// Merge every .json file under a directory into one document
    Merge {
        /// Directory to scan
        dir: PathBuf,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Get { path, io } => {
            let doc = read_document(io.input.as_deref())?;
            let selected = doc.select(&path);
            if selected.is_missing() {
                eprintln!("Path not found: {}", path);
                process::exit(1);
            }
            write_document(&io, &selected)?;
        }
        Commands::Set { path, value, io } => {
            let doc = read_document(io.input.as_deref())?;
            let value = Cursor::parse(&value).context("Failed to parse value as JSON")?;
            doc.select(&path).set(&value);
            write_document(&io, &doc)?;
        }
        Commands::Update { ops, ops_file, io } => {
            let ops_text = match (ops, ops_file) {
                (Some(ops), _) => ops,
                (None, Some(file)) => read_input(Some(&file))?,
                (None, None) => anyhow::bail!("An operator document is required"),
            };
            let ops = Cursor::parse(&ops_text).context("Failed to parse operator document")?;
            if !ops.is_object() {
                anyhow::bail!("Operator document must be a JSON object");
            }
            let doc = read_document(io.input.as_deref())?;
            doc.apply_update(&ops);
            write_document(&io, &doc)?;
        }
        Commands::Filter { fields, io } => {
            let doc = read_document(io.input.as_deref())?;
            write_document(&io, &doc.filter_field_names(&fields))?;
        }
        Commands::RemoveNulls { io } => {
            let doc = read_document(io.input.as_deref())?;
            write_document(&io, &doc.remove_nulls())?;
        }
        Commands::Case { style, io } => {
            let doc = read_document(io.input.as_deref())?;
            write_document(&io, &doc.to_field_case(style))?;
        }
        Commands::Merge {
            dir,
            output,
            pretty,
        } => {
            let doc = scan::merge_dir(&dir)?;
            let io = Io {
                input: None,
                output,
                pretty,
            };
            write_document(&io, &doc)?;
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn read_document(path: Option<&str>) -> Result<Cursor> {
    let text = read_input(path)?;
    Cursor::parse(&text).context("Failed to parse input as JSON")
}

fn write_document(io: &Io, doc: &Cursor) -> Result<()> {
    let mut rendered = if io.pretty {
        doc.to_pretty()
    } else {
        doc.to_string()
    };
    if !rendered.is_empty() {
        rendered.push('\n');
    }
    write_output(io.output.as_deref(), &rendered)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
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
