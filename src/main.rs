#[cfg(not(feature = "cli"))]
compile_error!("The `uarp` binary requires the `cli` feature. Build with `--features cli`.");

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::process;

use uarp::cli;
use uarp::cli::app::{Cli, ColorMode, Commands};
use uarp::UarpError;

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let writer_result: Result<Box<dyn Write>, UarpError> = match &cli.output {
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|e| UarpError::Io(format!("Cannot create {}: {}", path, e))),
        None => Ok(Box::new(std::io::stdout()) as Box<dyn Write>),
    };

    let mut writer = match writer_result {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Info {
            file,
            verbose,
            json,
        } => cli::info::execute(
            &cli::info::InfoOptions {
                file,
                verbose,
                json,
            },
            &mut writer,
        ),

        Commands::Extract { file, dir, row } => {
            cli::extract::execute(&cli::extract::ExtractOptions { file, dir, row }, &mut writer)
        }

        Commands::Dump {
            file,
            row,
            offset,
            length,
            raw,
        } => cli::dump::execute(
            &cli::dump::DumpOptions {
                file,
                row,
                offset,
                length,
                raw,
            },
            &mut writer,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
