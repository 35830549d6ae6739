/*!
 * List registered providers
 */

use colored::*;
use sso_oauth_providers::ProviderRegistry;

pub fn list_services(registry: &ProviderRegistry) {
    println!("{}", "=== Registered Providers ===".bold().cyan());

    let services = registry.services();
    if services.is_empty() {
        println!("{}", "No providers registered".yellow());
        return;
    }

    for service in services {
        println!("  {}", service.as_str().green());
    }
}
