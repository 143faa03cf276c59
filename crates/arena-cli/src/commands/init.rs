use std::fs;

use colored::Colorize;

use arena_core::Role;
use arena_game::config::CONFIG_FILE_NAME;
use arena_store::CharacterRepository;

use super::Context;

const CONFIG_TEMPLATE: &str = r#"# Arena configuration. Every key is optional.
#
# Environment variables (ARENA_DATA, ARENA_SEED, ARENA_SESSION_HOURS,
# ARENA_PASSWORD_COST) override these values; command-line flags override
# both.

# Seed for reproducible battles. Leave unset for fresh randomness.
# seed = 42

# How long a login token stays valid, in hours (1-720).
session_hours = 24

# bcrypt cost for new password hashes (4-31).
# password_cost = 10
"#;

pub fn run(ctx: &Context) -> Result<(), String> {
    let arena = ctx.open()?;
    let data_file = arena.config().data_file.clone();

    let config_path = arena.config().sibling_config_path();
    let wrote_config = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, CONFIG_TEMPLATE)
            .map_err(|e| format!("cannot write {CONFIG_FILE_NAME}: {e}"))?;
        true
    };

    let heroes = arena.store().list(Role::Hero).map_err(|e| e.to_string())?;
    let mercenaries = arena
        .store()
        .list(Role::Mercenary)
        .map_err(|e| e.to_string())?;

    println!("{} arena at {}", "Ready".bold(), data_file.display());
    println!(
        "  {} heroes, {} mercenaries",
        heroes.len(),
        mercenaries.len()
    );
    if wrote_config {
        println!("  {CONFIG_FILE_NAME}  {}", "config template".dimmed());
    }
    println!();
    println!("Get started:");
    println!("  arena register <username> <email> --password <password>");
    println!("  arena login <username> --password <password>");
    println!("  arena heroes");
    println!("  arena battle --hero <id> --mercenary <id>");

    Ok(())
}
