pub mod cli;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Parse ──────────────────────────────────────────────────────
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let schema = parser::load_from_json(&json).with_context(|| "Parsing schema descriptor")?;

    // 2. ── Generate ───────────────────────────────────────────────────
    let options = generator::options::Options::from_args(&args.options)?;
    let generated = generator::generate(&schema, &options)
        .with_context(|| format!("Generating bindings for {}", schema.name))?;

    // 3. ── Write outputs ──────────────────────────────────────────────
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Creating {}", args.output.display()))?;
    writer::cpp::emit(&generated, &args.output).with_context(|| "Writing generated bindings")?;

    Ok(())
}
