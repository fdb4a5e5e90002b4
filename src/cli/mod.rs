mod open;
mod sync;

use std::path::PathBuf;

use clap::Parser;

use crate::models::Language;

#[derive(Parser)]
#[command(name = "leetsync")]
#[command(
    about = "Turn a scraped coding problem into workspace files and keep the editor in sync",
    long_about = None
)]
pub struct Cli {
    /// Target language: typescript, c++ or rust
    #[arg(value_enum, ignore_case = true)]
    pub language: Option<Language>,

    /// Empty or 1 for the daily problem, 2 for a random one, or a problem url
    pub target: Option<String>,

    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Scraped problem dump (one record or a list)
    #[arg(long, value_name = "FILE")]
    pub problems: Option<PathBuf>,

    /// Practice repository root
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File the browser glue mirrors into the remote editor
    #[arg(long, value_name = "FILE")]
    pub editor_buffer: Option<PathBuf>,

    /// Generate files and exit without watching for changes
    #[arg(long)]
    pub no_watch: bool,

    /// Do not open generated files in the desktop editor
    #[arg(long)]
    pub no_open: bool,
}

const SUPPORTED_OS: &[&str] = &["linux", "macos", "windows"];

pub fn run(cli: Cli) {
    let os = std::env::consts::OS;
    if !SUPPORTED_OS.contains(&os) {
        println!("Current operating system: {}", os);
        println!("Only macOS, Linux and Windows are supported.");
        std::process::exit(0);
    }

    if !cli.extra.is_empty() {
        println!("Too many arguments.");
        std::process::exit(0);
    }

    let Some(language) = cli.language else {
        println!("Missing language argument. Pass one of: typescript, c++, rust.");
        std::process::exit(0);
    };

    sync::sync_problem(language, &cli);
}
