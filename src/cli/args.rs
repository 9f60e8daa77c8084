//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Find the reporting chain between two employees of an organisation
#[derive(Parser, Debug)]
#[command(name = "orgchain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Employee record file; the first line is a header
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "generator")]
    pub file: Option<PathBuf>,

    /// The two employee names to connect
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Print the organisation tree before the chains
    #[arg(long)]
    pub tree: bool,

    /// Additional settings file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Debug level: -d, -dd, -ddd
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}
