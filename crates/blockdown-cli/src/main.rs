//! blockdown CLI - convert between block documents and Markdown
//!
//! Usage:
//!   blockdown to-blocks [FILE]      Markdown to JSON blocks
//!   blockdown to-markdown [FILE]    JSON blocks (or Markdown) to Markdown
//!   blockdown roundtrip [FILE]      Markdown through blocks and back
//!   blockdown palette [QUERY]       Filter the slash-command catalog
//!
//! Input is read from FILE, or stdin when FILE is omitted. Set RUST_LOG=debug
//! to see conversion fallbacks and palette transitions on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use blockdown::{encode, ConverterService, HeadingLevelPolicy, NumberingStyle, Options};
use blockdown_palette::Palette;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockdown")]
#[command(about = "Convert between block documents and Markdown")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse Markdown and print the blocks as JSON
    ToBlocks {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Serialize JSON blocks to Markdown; non-JSON input passes through
    ToMarkdown {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        #[command(flatten)]
        options: OutputOptions,
    },

    /// Parse Markdown and serialize it again
    Roundtrip {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        #[command(flatten)]
        options: OutputOptions,
    },

    /// Filter the command catalog, optionally committing a selection
    Palette {
        /// Filter text
        #[arg(default_value = "")]
        query: String,

        /// Move the selection down this many times, then commit
        #[arg(long)]
        select: Option<usize>,
    },
}

#[derive(Args)]
struct OutputOptions {
    /// Fence string for code blocks
    #[arg(long, default_value = "```")]
    fence: String,

    /// Number list items 1., 2., ... instead of repeating 1.
    #[arg(long)]
    sequential: bool,

    /// Clamp heading levels into 1..=3
    #[arg(long)]
    clamp_headings: bool,
}

impl From<OutputOptions> for Options {
    fn from(opts: OutputOptions) -> Self {
        Options {
            fence: opts.fence,
            numbering: if opts.sequential {
                NumberingStyle::Sequential
            } else {
                NumberingStyle::Literal
            },
            heading_level: if opts.clamp_headings {
                HeadingLevelPolicy::Clamp
            } else {
                HeadingLevelPolicy::PassThrough
            },
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::ToBlocks { input, pretty } => {
            let markdown = read_input(input.as_ref())?;
            let blocks = ConverterService::new().parse(&markdown);
            debug!(blocks = blocks.len(), "parsed markdown");
            let value = encode(&blocks);
            let json = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", json);
        }
        Command::ToMarkdown { input, options } => {
            let text = read_input(input.as_ref())?;
            let service = ConverterService::with_options(options.into());
            println!("{}", service.serialize_input(text.as_str()));
        }
        Command::Roundtrip { input, options } => {
            let markdown = read_input(input.as_ref())?;
            let service = ConverterService::with_options(options.into());
            let blocks = service.parse(&markdown);
            println!("{}", service.serialize(&blocks));
        }
        Command::Palette { query, select } => cmd_palette(&query, select)?,
    }
    Ok(())
}

fn cmd_palette(query: &str, select: Option<usize>) -> Result<()> {
    let mut palette = Palette::new();
    palette.open();
    palette.on_query_change(query);

    let Some(moves) = select else {
        let items = palette
            .state()
            .map(|s| s.visible_items().to_vec())
            .unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    };

    for _ in 0..moves {
        palette.on_move_down();
    }
    match palette.on_commit() {
        Some(id) => println!("{} -> {}", id, id.block_change().block_type()),
        None => println!("no matching command"),
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
