//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible rolls and shop stock.
    pub seed: u64,
    /// Dice on the board at session start.
    pub starting_dice: usize,
    /// Upper bound on dice the board can hold.
    pub max_dice: usize,
    /// Currency balance at session start.
    pub starting_money: f64,
    /// Offers the shop presents at a time.
    pub shop_slots: usize,
    /// Animation frames before a die settles.
    pub roll_frames: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_dice: 1,
            max_dice: 5,
            starting_money: 0.0,
            shop_slots: 3,
            roll_frames: 7,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting dice count (at least 1, at most `max_dice`).
    pub fn with_starting_dice(mut self, count: usize) -> Self {
        self.starting_dice = count.clamp(1, self.max_dice);
        self
    }

    /// Set the starting balance.
    pub fn with_starting_money(mut self, money: f64) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the animation frame count (at least 1).
    pub fn with_roll_frames(mut self, frames: u32) -> Self {
        self.roll_frames = frames.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.starting_dice, 1);
        assert_eq!(cfg.max_dice, 5);
        assert_eq!(cfg.shop_slots, 3);
        assert_eq!(cfg.roll_frames, 7);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_starting_dice(3)
            .with_starting_money(250.0);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.starting_dice, 3);
        assert_eq!(cfg.starting_money, 250.0);
    }

    #[test]
    fn starting_dice_clamped() {
        assert_eq!(GameConfig::default().with_starting_dice(0).starting_dice, 1);
        assert_eq!(GameConfig::default().with_starting_dice(99).starting_dice, 5);
    }

    #[test]
    fn roll_frames_floor() {
        assert_eq!(GameConfig::default().with_roll_frames(0).roll_frames, 1);
    }
}
