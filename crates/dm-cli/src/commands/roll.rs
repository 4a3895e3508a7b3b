use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dm_core::Side;
use dm_game::GameEvent;

pub fn run(seed: u64, dice: usize, effect: Option<&str>, json: bool) -> Result<(), String> {
    let mut session = super::build_session(seed, dice, effect)?;
    let events = session
        .roll_to_completion()
        .map_err(|e| e.to_string())?;

    if json {
        let payload = serde_json::json!({
            "seed": seed,
            "dice": session.board().len(),
            "events": events,
            "balance": session.economy().balance(),
        });
        let text = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Roll".bold(),
        format!("(seed={seed}, dice={})", session.board().len()).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Top", "Left", "Right"]);
    for (index, die) in session.board().dice().iter().enumerate() {
        let outcome = die.outcome().ok_or("die never settled")?;
        let mut row = vec![format!("{}", index + 1)];
        for side in Side::ALL {
            let id = outcome.face(side);
            let face = session
                .arena()
                .get(id)
                .ok_or_else(|| format!("missing face {id}"))?;
            let mut cell = face.value.to_string();
            if let Some(kind) = face.effect {
                cell.push_str(&format!(" ({kind})"));
            }
            row.push(cell);
        }
        table.add_row(row);
    }
    println!("{table}");
    println!();

    for event in &events {
        match event {
            GameEvent::FaceFired(fired) => {
                let label = super::yield_label(&fired.text, fired.normalized());
                let side = fired.side.to_string();
                println!("  die {} {side:<6} {label}", fired.die + 1);
            }
            GameEvent::PayoutApplied { amount, balance } => {
                println!();
                println!(
                    "  {} {amount:.2}  {}",
                    "Payout".bold(),
                    format!("(balance {balance:.2})").dimmed()
                );
            }
            GameEvent::DieSettled { .. } => {}
        }
    }

    Ok(())
}
