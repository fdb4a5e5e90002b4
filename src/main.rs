mod classify;
mod cli;
mod display;
mod editor;
mod error;
mod extract;
mod lang;
mod ledger;
mod logging;
mod materialize;
mod models;
mod store;
mod sync;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
    let cli = Cli::parse();
    cli::run(cli);
}
