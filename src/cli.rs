use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input schema descriptor (.json)
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Generator option, `key=value`; may be given multiple times
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}
