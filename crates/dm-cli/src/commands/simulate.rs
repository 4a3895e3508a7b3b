use colored::Colorize;

use dm_game::GameEvent;

pub fn run(
    rolls: u64,
    seed: u64,
    dice: usize,
    effect: Option<&str>,
    json: bool,
) -> Result<(), String> {
    if rolls == 0 {
        return Err("nothing to simulate: --rolls must be at least 1".into());
    }

    let mut session = super::build_session(seed, dice, effect)?;
    let mut payouts = Vec::with_capacity(rolls as usize);

    for _ in 0..rolls {
        let events = session
            .roll_to_completion()
            .map_err(|e| e.to_string())?;
        let amount = events
            .iter()
            .find_map(|e| match e {
                GameEvent::PayoutApplied { amount, .. } => Some(*amount),
                _ => None,
            })
            .ok_or("roll finished without a payout")?;
        payouts.push(amount);
    }

    let total: f64 = payouts.iter().sum();
    let mean = total / payouts.len() as f64;
    let best = payouts.iter().cloned().fold(f64::MIN, f64::max);
    let worst = payouts.iter().cloned().fold(f64::MAX, f64::min);

    if json {
        let payload = serde_json::json!({
            "rolls": rolls,
            "seed": seed,
            "dice": session.board().len(),
            "total": total,
            "mean": mean,
            "best": best,
            "worst": worst,
            "balance": session.economy().balance(),
        });
        let text = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({rolls} rolls, seed={seed}, dice={})", session.board().len()).dimmed()
    );
    println!();
    println!("  Total earned:   {total:.2}");
    println!("  Mean per roll:  {mean:.2}");
    println!("  Best roll:      {best:.2}");
    println!("  Worst roll:     {worst:.2}");
    println!("  Final balance:  {:.2}", session.economy().balance());

    Ok(())
}
