use comfy_table::{ContentArrangement, Table};

use super::Context;

pub fn run(ctx: &Context, json: bool) -> Result<(), String> {
    let arena = ctx.open()?;
    let rows = arena.history(ctx.token()?).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if rows.is_empty() {
        println!("  No battles yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "When", "Hero", "Mercenary", "Winner", "Rounds"]);

    for row in &rows {
        let winner = if row.result.errored {
            "error".to_string()
        } else {
            row.result.winner.to_string()
        };
        table.add_row(vec![
            row.id.to_string(),
            row.created_at.format("%Y-%m-%d %H:%M").to_string(),
            row.hero_name.clone(),
            row.mercenary_name.clone(),
            winner,
            row.result.total_rounds.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} battle{}",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
