use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "targetrules")]
#[command(about = "Validate and canonicalize build-target declarations")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check target declarations and report every defect found
    Check {
        /// A .target.toml file, or a directory to scan (defaults to current directory)
        path: Option<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve one declaration and print its canonical form
    Show {
        /// The .target.toml file to resolve
        file: PathBuf,
    },

    /// List the build-settings versions this build recognizes
    Versions,

    /// Scaffold a new <NAME>.target.toml declaration
    Init {
        /// Target name (also used as the file stem)
        name: String,

        /// Overwrite an existing declaration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Check { path, json } => {
            let path = path.unwrap_or_else(|| PathBuf::from("."));
            cli::check::check_command(&path, json)?;
        }
        Commands::Show { file } => {
            cli::show::show_command(&file)?;
        }
        Commands::Versions => {
            cli::versions::versions_command();
        }
        Commands::Init { name, force } => {
            cli::init::init_command(&name, force)?;
        }
    }

    Ok(())
}
