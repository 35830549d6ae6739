/*!
 * SSO Inspect
 *
 * Operator tool for checking how a registered identity provider would
 * provision a user:
 * 1. Load the platform configuration (optional)
 * 2. Register the shipped providers
 * 3. Map a captured userinfo document to the platform user
 *
 * Usage:
 *   cargo run -p sso-inspect -- services
 *   cargo run -p sso-inspect -- map --config config.json userinfo.json
 *   curl -s -H "Authorization: Bearer $TOKEN" $USERINFO | cargo run -p sso-inspect -- map -
 */

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sso_oauth_providers::{openid, ProviderRegistry};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sso-inspect")]
#[command(about = "Map captured userinfo documents through registered SSO providers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a userinfo document to the user it would provision
    Map {
        /// Userinfo JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Auth service whose provider maps the document
        #[arg(short, long, default_value = "openid")]
        service: String,

        /// Platform configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prefer `preferred_username` over `nickname` regardless of config
        #[arg(long)]
        prefer_preferred_username: bool,

        /// Print the user as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered providers
    Services,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_inspect=info,sso_oauth_providers=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let registry = bootstrap_registry();

    match cli.command {
        Commands::Map {
            input,
            service,
            config,
            prefer_preferred_username,
            json,
        } => commands::map::map_userinfo(
            &registry,
            &commands::map::MapOptions {
                input,
                service,
                config,
                prefer_preferred_username,
                json,
            },
        )?,

        Commands::Services => commands::services::list_services(&registry),
    }

    Ok(())
}

fn bootstrap_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    openid::register(&mut registry);
    registry
}
