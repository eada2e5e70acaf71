use std::{env, process};

use clap::Parser;

mod cli;
mod error;
mod hostname;
mod linux;

use crate::cli::Cli;
use crate::hostname::Kernel;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli::run(&cli, &Kernel) {
        let program = env::args()
            .next()
            .unwrap_or_else(|| String::from(env!("CARGO_PKG_NAME")));
        eprintln!("{}: {}", program, err);
        process::exit(err.exit_code());
    }
}
