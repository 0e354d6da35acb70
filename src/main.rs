mod app;
mod cli;
mod consts;
mod error;
mod report;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = app::run_stdout(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
