//! nsebridge CLI - Build-time configuration checks for the OneSignal NSE
//!
//! Commands:
//! - `nsebridge check` - Validate a plugin props JSON file
//! - `nsebridge compose` - Print the derived NSE bundle identifier
//! - `nsebridge credentials` - Print the EAS managed-credentials `extra` document

use clap::{Parser, Subcommand};

mod check;
mod compose;
mod credentials;

#[derive(Parser)]
#[command(name = "nsebridge")]
#[command(author, version, about = "Build-time configuration for the OneSignal notification service extension", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a plugin props JSON file
    Check {
        /// Path to the props JSON file (default: ./onesignal.json)
        #[arg(short, long)]
        props: Option<String>,
    },

    /// Derive the NSE bundle identifier from the main app's bundle id
    Compose {
        /// The main app's bundle identifier
        bundle_id: String,

        /// Custom NSE bundle identifier (".Suffix" or full form)
        #[arg(short, long)]
        identifier: Option<String>,
    },

    /// Print the EAS managed-credentials `extra` document with the NSE entry
    Credentials {
        /// The main app's bundle identifier
        bundle_id: String,

        /// Path to the props JSON file
        #[arg(short, long)]
        props: Option<String>,

        /// Path to an existing `extra` JSON document to merge into
        #[arg(short, long)]
        extra: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { props } => {
            check::run(props)?;
        }
        Commands::Compose {
            bundle_id,
            identifier,
        } => {
            compose::run(&bundle_id, identifier.as_deref())?;
        }
        Commands::Credentials {
            bundle_id,
            props,
            extra,
        } => {
            credentials::run(&bundle_id, props, extra)?;
        }
    }

    Ok(())
}
