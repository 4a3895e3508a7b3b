use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use dm_game::Shop;

pub fn run(seed: u64, balance: f64) -> Result<(), String> {
    let mut shop = Shop::new();
    let mut rng = StdRng::seed_from_u64(seed);
    shop.restock(&mut rng, balance, 3);

    println!(
        "  {} {}",
        "Shop".bold(),
        format!("(seed={seed}, balance={balance:.2})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Face", "Bonus", "Multiplier", "Effect", "Price"]);
    for (slot, offer) in shop.offers().iter().enumerate() {
        let effect = offer
            .face
            .effect
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            format!("{}", slot + 1),
            offer.face.value.to_string(),
            format!("+{} per roll", offer.face.add_modifier),
            format!("x{:.2} per roll", offer.face.mult_modifier),
            effect,
            format!("$ {:.2}", offer.cost),
        ]);
    }
    println!("{table}");

    Ok(())
}
