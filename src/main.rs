//! iplist2tree - compress a list of IPv4 networks into a minimal coverage trie.
//!
//! Reads one network per line, builds and optimizes the trie, and writes it (or its complement)
//! as nested pairs that a JavaScript or JSON consumer can walk bit by bit.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use either::Either;
use ip_cover_trie::{source, Trie};
use log::{info, warn};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "iplist2tree")]
#[command(about = "Compress a list of IPv4 networks into a minimal coverage trie")]
#[command(version)]
struct Cli {
    /// File with one IPv4 network or address per line (`;` and `#` start comments)
    input: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "js")]
    format: OutputFormat,

    /// Which trie to export
    #[arg(short, long, default_value = "built")]
    tree: TreeSelection,

    /// Variable name of the built trie (js format)
    #[arg(long, default_value = "cn_tree")]
    name: String,

    /// Variable name of the inverted trie (js format)
    #[arg(long, default_value = "reserved_tree")]
    inverted_name: String,

    /// Export the trie as built, without merging sibling networks
    #[arg(long)]
    no_optimize: bool,

    /// Also export a plain list read from this file (js and json formats)
    #[arg(long)]
    domains: Option<PathBuf>,

    /// Variable name of the plain list (js format)
    #[arg(long, default_value = "paper_list")]
    domains_name: String,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// `var NAME = JSON;` for every export
    Js,
    /// One JSON document per line for every export
    Json,
    /// One network per line in CIDR notation
    Cidr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum TreeSelection {
    /// The trie of the input networks
    Built,
    /// The complement of the input networks
    Inverted,
    /// Both, the built trie first
    Both,
}

enum Export {
    Tree { name: String, trie: Trie },
    List { name: String, entries: Vec<String> },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let networks = source::read_networks(&cli.input)
        .with_context(|| format!("failed to read networks from {}", cli.input.display()))?;
    let mut trie = Trie::build(networks);
    if !cli.no_optimize {
        trie.optimize();
    }
    let stats = trie.stats();
    info!(
        "trie has {} networks in {} nodes (depth {})",
        stats.full, stats.nodes, stats.depth
    );

    let mut exports = Vec::new();
    let inverted = matches!(cli.tree, TreeSelection::Inverted | TreeSelection::Both)
        .then(|| trie.invert());
    if matches!(cli.tree, TreeSelection::Built | TreeSelection::Both) {
        exports.push(Export::Tree {
            name: cli.name.clone(),
            trie,
        });
    }
    if let Some(trie) = inverted {
        info!("inverted trie has {} networks", trie.stats().full);
        exports.push(Export::Tree {
            name: cli.inverted_name.clone(),
            trie,
        });
    }
    if let Some(path) = &cli.domains {
        let entries = source::read_entries(path)
            .with_context(|| format!("failed to read list from {}", path.display()))?;
        exports.push(Export::List {
            name: cli.domains_name.clone(),
            entries,
        });
    }

    // nothing is written before all inputs are parsed.
    let mut out = match &cli.output {
        Some(path) => Either::Left(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Either::Right(io::stdout().lock()),
    };
    let many = exports.len() > 1;
    for export in &exports {
        write_export(&mut out, cli.format, export, many)?;
    }
    out.flush().context("failed to write output")?;
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn write_export<W: Write>(
    out: &mut W,
    format: OutputFormat,
    export: &Export,
    many: bool,
) -> anyhow::Result<()> {
    match (format, export) {
        (OutputFormat::Js, Export::Tree { name, trie }) => write_js(out, name, trie),
        (OutputFormat::Js, Export::List { name, entries }) => write_js(out, name, entries),
        (OutputFormat::Json, Export::Tree { trie, .. }) => write_json(out, trie),
        (OutputFormat::Json, Export::List { entries, .. }) => write_json(out, entries),
        (OutputFormat::Cidr, Export::Tree { name, trie }) => {
            if many {
                writeln!(out, "# {name}")?;
            }
            for cidr in trie.cidrs() {
                writeln!(out, "{cidr}")?;
            }
            Ok(())
        }
        (OutputFormat::Cidr, Export::List { name, .. }) => {
            warn!("the list {name} cannot be written in cidr format, skipping it");
            Ok(())
        }
    }
}

fn write_js<W: Write, T: Serialize>(out: &mut W, name: &str, value: &T) -> anyhow::Result<()> {
    write!(out, "var {name} = ")?;
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out, ";")?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
