/*!
 * Map userinfo command
 */

use anyhow::{Context, Result};
use colored::*;
use sso_model::{AuthService, Config, User};
use sso_oauth_providers::ProviderRegistry;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

pub struct MapOptions {
    pub input: String,
    pub service: String,
    pub config: Option<PathBuf>,
    pub prefer_preferred_username: bool,
    pub json: bool,
}

pub fn map_userinfo(registry: &ProviderRegistry, options: &MapOptions) -> Result<()> {
    let service: AuthService = options.service.parse()?;
    let provider = registry.require(service)?;
    let config = load_config(options.config.as_ref())?;

    let mut settings = provider.get_sso_settings(&config, service)?.clone();
    if options.prefer_preferred_username {
        settings.use_preferred_username = Some(true);
    }

    let data = read_input(&options.input)?;
    let user = provider.get_user_from_json(&data, None, Some(&settings))?;
    info!(%service, "Mapped userinfo document");

    if options.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        print_user(&user);
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let mut config = Config::default();
            config.set_defaults();
            config
        }
    };
    config.apply_env_overrides()?;
    Ok(config)
}

fn read_input(input: &str) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    if input == "-" {
        std::io::stdin()
            .read_to_end(&mut data)
            .context("Failed to read userinfo from stdin")?;
    } else {
        data = std::fs::read(input).with_context(|| format!("Failed to read {input}"))?;
    }
    Ok(data)
}

fn print_user(user: &User) {
    println!("{}", "=== Provisioned User ===".bold().cyan());
    println!("  Username: {}", user.username.green());
    println!("  First Name: {}", display_or_empty(&user.first_name));
    println!("  Last Name: {}", display_or_empty(&user.last_name));
    println!("  Email: {}", user.email);
    println!(
        "  Auth Data: {}",
        user.auth_data.as_deref().unwrap_or_default()
    );
    println!("  Auth Service: {}", user.auth_service);
}

fn display_or_empty(value: &str) -> ColoredString {
    if value.is_empty() {
        "(empty)".dimmed()
    } else {
        value.normal()
    }
}
