//! Import a Claude Code session log into Hexis episodic memory.
//!
//! Reads a JSONL session log line by line, keeps the dialogue turns worth
//! remembering, classifies their importance, and writes them to the
//! memory store. `--dry-run` previews the classification without a store.

use std::fs::File;
use std::io::BufReader;
use std::process;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use env_logger::Env;
use hexis_ingest::SessionImporter;
use hexis_memory::{PgMemoryStore, StoreConfig};

/// Import a Claude Code session log into Hexis memory.
#[derive(Debug, Parser)]
#[command(
    name = "import-session-logs",
    after_help = "Session logs live under ~/.claude/projects/<project-path>/"
)]
struct Args {
    /// Path to the session log (JSONL)
    log_file: Utf8PathBuf,

    /// Classify and count without writing to the store
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Per-record warnings must be visible without RUST_LOG set.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if !args.log_file.exists() {
        eprintln!("Error: File not found: {}", args.log_file);
        process::exit(1);
    }

    println!("Importing: {}", args.log_file);
    if args.dry_run {
        println!("(DRY RUN - no changes will be made)");
    }
    println!();

    let file = File::open(&args.log_file)
        .with_context(|| format!("failed to open {}", args.log_file))?;
    let reader = BufReader::new(file);

    let report = if args.dry_run {
        SessionImporter::dry_run().run(reader)?
    } else {
        let config = StoreConfig::from_env()?;
        let mut store = PgMemoryStore::connect(&config).with_context(|| {
            format!("cannot reach memory store at {}:{}", config.host, config.port)
        })?;
        SessionImporter::new(&mut store).run(reader)?
    };

    println!("\n{report}");
    Ok(())
}
