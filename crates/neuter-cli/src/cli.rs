//! CLI argument definitions for neuter.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "neuter",
    version,
    about = "Flatten require-linked source files into a single artifact",
    long_about = "neuter follows require directives from a set of root files and writes one \
                  concatenated file in which every dependency appears exactly once per root, \
                  before everything that depends on it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default Neuter.toml in the current directory
    Init,

    /// Flatten the root files into the output artifact
    Build {
        /// Root files relative to the input directory (default: include patterns)
        roots: Vec<String>,
        /// Output file, relative to the project directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of roots resolved concurrently
        #[arg(short, long)]
        jobs: Option<u32>,
        /// Emit each file at most once across all roots
        #[arg(long)]
        global_dedup: bool,
        /// Wrap every file in an immediately-invoked function
        #[arg(long)]
        closure_wrap: bool,
        /// Suppress status output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the files a root transitively requires
    Deps {
        /// Root file relative to the input directory
        root: String,
        /// Print a JSON array instead of one path per line
        #[arg(long)]
        json: bool,
    },

    /// Print the require tree of a root
    Tree {
        /// Root file relative to the input directory
        root: String,
        /// Maximum tree depth to display
        #[arg(short, long)]
        depth: Option<usize>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
