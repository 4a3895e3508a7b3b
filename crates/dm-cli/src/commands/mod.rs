pub mod effects;
pub mod roll;
pub mod shop;
pub mod simulate;

use colored::{ColoredString, Colorize};

use dm_core::EffectKind;
use dm_game::{GameConfig, GameSession};

/// Parse an effect name from the command line.
fn parse_effect(name: &str) -> Result<EffectKind, String> {
    match name.trim().to_lowercase().as_str() {
        "mirror" => Ok(EffectKind::Mirror),
        "cascade" => Ok(EffectKind::Cascade),
        "combo" => Ok(EffectKind::Combo),
        "even" => Ok(EffectKind::Even),
        "odd" => Ok(EffectKind::Odd),
        other => Err(format!(
            "unknown effect '{other}' (expected mirror, cascade, combo, even, or odd)"
        )),
    }
}

/// Build a session with `dice` standard dice, optionally mounting an
/// effect on the first slot of every die.
fn build_session(seed: u64, dice: usize, effect: Option<&str>) -> Result<GameSession, String> {
    let config = GameConfig::default()
        .with_seed(seed)
        .with_starting_dice(dice);
    let mut session = GameSession::new(config);

    if let Some(name) = effect {
        let kind = parse_effect(name)?;
        for die in 0..session.board().len() {
            let id = session
                .board()
                .die(die)
                .and_then(|d| d.slot(0))
                .map_err(|e| e.to_string())?;
            session
                .set_face_effect(id, Some(kind))
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(session)
}

/// Color a yield label by its normalized value, using the same
/// blue-green-yellow-red bands as the in-game floating text.
fn yield_label(text: &str, normalized: f64) -> ColoredString {
    if normalized <= 0.33 {
        text.blue()
    } else if normalized <= 0.66 {
        text.green()
    } else if normalized <= 0.9 {
        text.yellow()
    } else {
        text.red()
    }
}
