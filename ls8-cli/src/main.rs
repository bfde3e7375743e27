//! LS-8 CLI: load and run `.ls8` programs.
//!
//! Exit codes:
//! - 0: Program halted
//! - 1: Input or usage error
//! - 2: Machine faulted
//! - 3: Step limit reached before HLT

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ls8", version)]
#[command(about = "Run programs for the LS-8 8-bit virtual machine", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Log more (-v for debug, -vv for per-instruction trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a program and run it until HLT
    Run {
        /// Path to a .ls8 program
        program: PathBuf,

        /// Stop with exit code 3 after this many instructions
        #[arg(long)]
        max_steps: Option<u64>,
    },
    /// Parse a program and report its size without running it
    Load {
        /// Path to a .ls8 program
        program: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Run { program, max_steps } => commands::run(program, *max_steps),
        Command::Load { program } => commands::load(program),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
