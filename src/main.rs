use clap::Parser;
use commands::prune::Prune;
use config::Config;
use git::{Git, SystemShell};

mod commands;
mod config;
mod core;
mod errors;
mod git;
mod parser;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "git-prune-merged", version)]
#[command(about = "Delete remote branches already merged into a reference", long_about = None)]
struct Cli {
    #[command(flatten)]
    prune: Prune,
}

fn main() {
    env_logger::init();

    let args = Cli::parse();

    let result = Config::load().and_then(|config| {
        let git = Git::new(SystemShell::new());
        args.prune.execute(&git, config)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
