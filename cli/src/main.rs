mod cli;

use clap::Parser;
use cli::{Cli, Commands, SurfaceArg};
use colored::Colorize;
use nospace_driver::{BuildError, Conf, Driver, Surface, render};
use std::{path::PathBuf, process::ExitCode};

fn main() -> ExitCode {
    let Cli { command } = Cli::parse();
    let res = match command {
        | Commands::Check { files, strict, verbose } => {
            init_logger(verbose);
            check(files, strict)
        }
        | Commands::Convert { file, to, from, verbose } => {
            init_logger(verbose);
            convert(file, surface(to), from.map(surface))
        }
    };
    match res {
        | Ok(true) => ExitCode::SUCCESS,
        | Ok(false) => ExitCode::FAILURE,
        | Err(err) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn surface(arg: SurfaceArg) -> Surface {
    match arg {
        | SurfaceArg::Nossembly => Surface::Nossembly,
        | SurfaceArg::Nospace => Surface::Nospace,
        | SurfaceArg::Whitespace => Surface::Whitespace,
    }
}

/// True if every file checked cleanly.
fn check(files: Vec<PathBuf>, strict: bool) -> Result<bool, BuildError> {
    let mut driver = Driver::new(Conf::load());
    driver.conf.strict |= strict;
    let mut all_ok = true;
    for file in files {
        match driver.check_file(&file) {
            | Ok(checked) => {
                print!("{}", render::render(&checked));
                all_ok &= checked.is_ok();
            }
            | Err(err) => {
                eprintln!("{}: {}", "error".red().bold(), err);
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn convert(file: PathBuf, to: Surface, from: Option<Surface>) -> Result<bool, BuildError> {
    let from = match from {
        | Some(from) => from,
        | None => Surface::from_path(&file)?,
    };
    let source = std::fs::read_to_string(&file)?;
    let out = Driver::new(Conf::load()).convert(from, &source, to)?;
    print!("{}", out);
    Ok(true)
}
