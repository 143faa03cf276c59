use std::io::{self, BufRead};

use colored::Colorize;

use arena_game::Registration;

use super::Context;

/// The `--password` / `ARENA_PASSWORD` value, or the first line of stdin.
fn resolve_password(password: Option<String>) -> Result<String, String> {
    if let Some(password) = password {
        return Ok(password);
    }
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("cannot read password from stdin: {e}"))?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err("no password given; pass --password, set ARENA_PASSWORD, or pipe it on stdin".into());
    }
    Ok(password)
}

pub fn register(
    ctx: &Context,
    username: &str,
    email: &str,
    password: Option<String>,
) -> Result<(), String> {
    let password = resolve_password(password)?;
    let arena = ctx.open()?;
    let user = arena
        .register(&Registration::new(username, email, password))
        .map_err(|e| e.to_string())?;
    println!(
        "{} user '{}' {}",
        "Registered".green().bold(),
        user.username,
        format!("(id {})", user.id).dimmed()
    );
    Ok(())
}

/// Prints only the token on stdout so it can be captured with `$(...)`.
pub fn login(ctx: &Context, username: &str, password: Option<String>) -> Result<(), String> {
    let password = resolve_password(password)?;
    let arena = ctx.open()?;
    let outcome = arena
        .login(username, &password)
        .map_err(|e| e.to_string())?;
    println!("{}", outcome.session.token);
    eprintln!(
        "Logged in as {}; token valid until {}",
        outcome.user.username,
        outcome.session.expires_at.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<(), String> {
    let arena = ctx.open()?;
    arena.logout(ctx.token()?).map_err(|e| e.to_string())?;
    println!("Logged out.");
    Ok(())
}
