use comfy_table::{ContentArrangement, Table};

use dm_core::EffectKind;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Effect", "Icon", "Rule"]);
    for kind in EffectKind::ALL {
        table.add_row(vec![
            kind.to_string(),
            kind.icon_key().to_string(),
            kind.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
