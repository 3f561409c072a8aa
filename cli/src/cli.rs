use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type check nospace programs
    Check {
        /// Paths to the files to check (.nsa, .ns or .ws)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        /// Require every pushed value to be cast before use
        #[arg(long, default_value_t = false)]
        strict: bool,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Print a program in another surface syntax
    Convert {
        /// Path to the file to convert
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Surface syntax to print
        #[arg(long, value_enum)]
        to: SurfaceArg,
        /// Surface syntax of the input (defaults to the file extension)
        #[arg(long, value_enum)]
        from: Option<SurfaceArg>,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SurfaceArg {
    Nossembly,
    Nospace,
    Whitespace,
}
