use comfy_table::{ContentArrangement, Table};

use arena_core::Role;

use super::Context;

pub fn run(ctx: &Context, role: Role) -> Result<(), String> {
    let arena = ctx.open()?;
    let characters = arena
        .roster(ctx.token()?, role)
        .map_err(|e| e.to_string())?;

    let noun = match role {
        Role::Hero => "heroes",
        Role::Mercenary => "mercenaries",
    };
    if characters.is_empty() {
        println!("  No {noun} found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "HP", "Attack", "Defense", "Description"]);

    for c in &characters {
        let desc = if c.description.chars().count() > 60 {
            let cut: String = c.description.chars().take(57).collect();
            format!("{cut}...")
        } else if c.description.is_empty() {
            "-".to_string()
        } else {
            c.description.clone()
        };
        table.add_row(vec![
            c.id.to_string(),
            c.name.clone(),
            c.hp.to_string(),
            c.attack.to_string(),
            c.defense.to_string(),
            desc,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} {noun}", characters.len());

    Ok(())
}
