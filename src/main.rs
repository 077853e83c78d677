use clap::{Parser, Subcommand};
use git_issues::commands::{execute_init, InitOutcome};
use git_issues::core::print_error;
use std::env;

#[derive(Parser)]
#[command(name = "git-issues")]
#[command(about = "A lightweight issue tracking companion for Git hosting services")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the current project interactively (first run)
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Init => match execute_init() {
            Ok(InitOutcome::Configured) => {}
            // Nothing was written, nothing to report
            Ok(InitOutcome::Cancelled) => std::process::exit(1),
            Err(e) => {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        },
    }
}
