// Fri Feb 6 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use memlayout::{
    config::{LayoutDocument, LayoutEntry},
    render::{LayoutPrinter, RenderConfig},
    utils::LoggingUtils,
    MemoryLayout,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Side-by-side memory layout comparison tables", long_about = None)]
struct Args {
    // JSON file describing the layouts to compare.
    input: PathBuf,

    #[arg(short, long)]
    output: Option<PathBuf>,

    // Bit-field mode: decimal positions, high-to-low square-bracket ranges.
    #[arg(long)]
    bits: bool,

    #[arg(long)]
    no_headers: bool,

    // Keep adjacent gap blocks separate instead of coalescing them.
    #[arg(long)]
    no_merge: bool,

    #[arg(long, default_value_t = 0)]
    min_width: usize,

    #[arg(long, default_value_t = 0)]
    max_width: usize,

    #[arg(long, default_value_t = 0)]
    digits: usize,

    // Clamp cell width so the whole table fits the terminal.
    #[arg(long)]
    fit: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    LoggingUtils::init_logger(
        LoggingUtils::level_from_verbosity(args.verbose),
        !args.no_color,
    );

    let document = match load_document(&args.input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "{} Loaded {} layout(s) from {}",
        "[+]".green(),
        document.layouts.len(),
        args.input.display()
    );

    let config = build_config(&args, document.layouts.len());
    let mut printer = LayoutPrinter::new(config);

    for entry in &document.layouts {
        let layout = match build_layout(entry, !args.no_merge) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("{} Layout '{}': {}", "[!]".red(), entry.name, e);
                std::process::exit(1);
            }
        };
        log::debug!(
            "layout '{}' has {} blocks after gap fill",
            entry.name,
            layout.block_count()
        );
        let header = format!(
            "{} (0x{:X}-0x{:X})",
            entry.name,
            layout.begin_address(),
            layout.end_address()
        );
        printer.add_layout(Some(layout), header);
    }

    let table = printer.to_text();
    if table.is_empty() {
        eprintln!("{} Nothing to render", "[!]".yellow());
        return;
    }

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &table) {
                eprintln!("{} Failed to write {}: {}", "[!]".red(), path.display(), e);
                std::process::exit(1);
            }
            eprintln!("{} Table written to {}", "[+]".green(), path.display());
        }
        None => print!("{}", table),
    }
}

fn load_document(path: &Path) -> anyhow::Result<LayoutDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document: LayoutDocument = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    if document.layouts.is_empty() {
        anyhow::bail!("{} contains no layouts", path.display());
    }
    Ok(document)
}

fn build_layout(entry: &LayoutEntry, merge: bool) -> Result<MemoryLayout, memlayout::LayoutError> {
    let mut layout = entry.build()?;
    layout.fill_gaps()?;
    if merge {
        layout.merge_unused()?;
    }
    Ok(layout)
}

fn build_config(args: &Args, column_count: usize) -> RenderConfig {
    let mut config = if args.bits {
        RenderConfig::bits()
    } else {
        RenderConfig::bytes()
    };
    config.no_headers = args.no_headers;
    if args.digits > 0 {
        config.max_address_digits = args.digits;
    }
    if args.min_width > 0 {
        config.cell_min_length = args.min_width;
    }
    if args.max_width > 0 {
        config.cell_max_length = args.max_width;
    }

    if args.fit && column_count > 0 {
        if let Some((terminal_size::Width(width), _)) = terminal_size::terminal_size() {
            // One border character per column plus the trailing one.
            let available = (width as usize).saturating_sub(column_count + 1);
            let per_column = available / column_count;
            if per_column > 0 {
                config.cell_max_length = per_column;
                log::debug!("fit: clamping cells to {} columns wide", per_column);
            }
        }
    }

    config
}
