use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use statefile::Result;
use std::io;

#[derive(Parser)]
#[command(name = "statefile")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "YAML-backed key/value state for container tooling", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value stored under a key (prints nothing if absent)
    Get {
        /// Key to look up
        key: String,

        /// State file path (default: .state.yaml in current directory)
        #[arg(short, long)]
        file: Option<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Store a value under a key
    Set {
        /// Key to write
        key: String,

        /// Value, parsed as YAML (quote twice to force a string, e.g. '"2024.1"')
        value: String,

        /// State file path (default: .state.yaml in current directory)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Remove a key (succeeds even if the key is absent)
    Delete {
        /// Key to remove
        key: String,

        /// State file path (default: .state.yaml in current directory)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Dump the full state mapping
    Show {
        /// State file path (default: .state.yaml in current directory)
        #[arg(short, long)]
        file: Option<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Get { key, file, json } => {
            statefile::cli::get::run(&key, file.as_deref(), json)?;
        }

        Commands::Set { key, value, file } => {
            statefile::cli::set::run(&key, &value, file.as_deref())?;
        }

        Commands::Delete { key, file } => {
            statefile::cli::delete::run(&key, file.as_deref())?;
        }

        Commands::Show { file, json } => {
            statefile::cli::show::run(file.as_deref(), json)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "statefile", &mut io::stdout());
        }
    }

    Ok(())
}
