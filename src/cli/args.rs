//! CLI argument definitions using clap.
//!
//! Apigen has a single operation: regenerate the documentation data and
//! locale files, optionally for a subset of components.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Only process these components (default: all known components)
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub components: Option<Vec<String>>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
