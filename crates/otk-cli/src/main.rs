mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::EXIT_FAILURE;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "otk",
    version,
    about = "Omnifest toolkit — declarative OS image description compiler"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate that a YAML file is a well-formed omnifest.
    Validate {
        /// Path to the omnifest YAML file.
        #[arg(default_value = "omnifest.yaml")]
        path: PathBuf,
        /// Skip the top-level shape and required-key checks.
        #[arg(long, default_value_t = false)]
        no_ensure: bool,
    },
    /// Validate an omnifest and print its tree as pretty JSON.
    Tree {
        /// Path to the omnifest YAML file.
        #[arg(default_value = "omnifest.yaml")]
        path: PathBuf,
        /// Skip the top-level shape and required-key checks.
        #[arg(long, default_value_t = false)]
        no_ensure: bool,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("OTK_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::Validate { path, no_ensure } => {
            commands::validate::run(&path, !no_ensure, json_output)
        }
        Commands::Tree { path, no_ensure } => commands::tree::run(&path, !no_ensure, json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
