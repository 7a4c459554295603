pub mod cli;
pub mod error;
pub mod model;
pub mod translator;
pub mod wordlists;
pub mod writer;

pub use error::CompilationError;
pub use model::{Classification, Symbol, Wordlists};
pub use translator::translate;

use anyhow::{Context, bail};
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    if !cli::is_valid_class_name(&args.class_name) {
        bail!("The class name must be a valid Java class name.");
    }

    // 1. ── Load the word lists ────────────────────────────────────────
    let json = std::fs::read_to_string(&args.wordlists)
        .with_context(|| format!("Reading {}", args.wordlists.display()))?;
    let tables = wordlists::load(&json).with_context(|| "Parsing word lists")?;

    // 2. ── Translate ──────────────────────────────────────────────────
    let spl = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let java = match translator::translate(&spl, &args.class_name, &tables) {
        Ok(java) => java,
        Err(e) => {
            println!("Compilation error:");
            println!("{e}");
            return Ok(());
        }
    };

    // 3. ── Write the output ───────────────────────────────────────────
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Creating {}", args.output.display()))?;
    let path = writer::java::emit(&java, &args.class_name, &args.output)
        .with_context(|| "Writing Java output")?;

    println!("Output successfully to {}", path.display());
    Ok(())
}
