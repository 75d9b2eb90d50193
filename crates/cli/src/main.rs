//! Padoca CLI - Database migrations and menu management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! padoca-cli migrate
//!
//! # Load the menu from a YAML file (add --clear to start from scratch)
//! padoca-cli seed --file menu.yaml
//!
//! # Mark the first four products (by name) as "Queridinhos"
//! padoca-cli featured --count 4
//!
//! # Upload the logo and print its public URL
//! padoca-cli upload-logo --file padoca_logo.png
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "padoca-cli")]
#[command(author, version, about = "Padoca CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Upsert categories and products from a YAML file
    Seed {
        /// Path to the menu YAML file
        #[arg(short, long)]
        file: PathBuf,

        /// Delete every product and category first
        #[arg(long)]
        clear: bool,
    },
    /// Mark the first N products (by name) as featured
    Featured {
        /// Number of products to mark
        #[arg(short, long, default_value_t = 4)]
        count: u32,
    },
    /// Upload the bakery logo and print its public URL
    UploadLogo {
        /// Path to the logo image (PNG)
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file, clear } => commands::seed::menu(&file, clear).await?,
        Commands::Featured { count } => commands::featured::mark(count).await?,
        Commands::UploadLogo { file } => commands::logo::upload(&file).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::try_parse_from(["padoca-cli", "seed", "--file", "menu.yaml", "--clear"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            cli.command,
            Commands::Seed { clear: true, ref file } if file == &PathBuf::from("menu.yaml")
        ));
    }

    #[test]
    fn test_featured_defaults_to_four() {
        let cli = Cli::try_parse_from(["padoca-cli", "featured"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(cli.command, Commands::Featured { count: 4 }));
    }

    #[test]
    fn test_upload_logo_requires_file() {
        assert!(Cli::try_parse_from(["padoca-cli", "upload-logo"]).is_err());
    }
}
