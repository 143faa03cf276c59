use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use arena_battle::{BattleLogEntry, EntryKind, Winner};
use arena_game::{BattleReport, BattleRequest};

use super::Context;
use crate::Format;

pub fn run(
    ctx: &Context,
    hero: u32,
    mercenary: u32,
    seed: Option<u64>,
    format: Format,
) -> Result<(), String> {
    let arena = ctx.open()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => arena.rng(),
    };
    let report = arena
        .battle(ctx.token()?, BattleRequest::new(hero, mercenary), &mut rng)
        .map_err(|e| e.to_string())?;

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        Format::Markdown => print!("{}", report.result.export_markdown()),
        Format::Text => print_text(&report),
    }

    if !report.saved {
        eprintln!(
            "{} battle was not saved to your history",
            "warning:".yellow().bold()
        );
    }
    Ok(())
}

fn print_text(report: &BattleReport) {
    println!(
        "  {} {} {} {}",
        "Battle".bold(),
        report.hero.name.cyan(),
        "vs".dimmed(),
        report.mercenary.name.magenta()
    );
    println!();

    for entry in &report.result.battle_log {
        let round = format!("[round {:>2}]", entry.round).dimmed();
        println!("  {round} {}", colorize_entry(entry));
    }
    println!();

    let headline = report.result.headline();
    let headline = match report.result.winner {
        Winner::Hero => headline.green().bold(),
        Winner::Mercenary => headline.red().bold(),
        Winner::Draw => headline.yellow().bold(),
    };
    println!("  {headline}");
    if let Some(id) = report.record_id {
        println!("  {}", format!("saved as battle #{id}").dimmed());
    }
}

fn colorize_entry(entry: &BattleLogEntry) -> String {
    match entry.kind {
        EntryKind::Strike => entry.message.clone(),
        EntryKind::Knockout => entry.message.bold().to_string(),
        EntryKind::Draw => entry.message.yellow().to_string(),
        EntryKind::Fault => entry.message.red().to_string(),
    }
}
