//! The top-level game session.

use rand::SeedableRng;
use rand::rngs::StdRng;

use dm_core::{Board, CoreError, Die, EffectKind, FaceArena, FaceId};
use dm_engine::Resolver;

use crate::config::GameConfig;
use crate::economy::Economy;
use crate::error::{GameError, GameResult};
use crate::event::GameEvent;
use crate::inventory::Inventory;
use crate::roll::RollInFlight;
use crate::shop::Shop;

/// One game in progress: the board, the economy, the shop, the player's
/// inventory, and at most one roll in flight.
///
/// All randomness flows through a single seeded RNG, so a session is
/// fully reproducible from its config.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    arena: FaceArena,
    board: Board,
    economy: Economy,
    shop: Shop,
    inventory: Inventory,
    rng: StdRng,
    roll: Option<RollInFlight>,
}

impl GameSession {
    /// Start a session: standard dice, a stocked shop, an empty
    /// inventory.
    pub fn new(config: GameConfig) -> Self {
        let mut arena = FaceArena::new();
        let board = Board::standard(config.starting_dice, &mut arena);
        let mut economy = Economy::new(config.starting_money);
        economy.refresh_max(&arena, &board);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut shop = Shop::new();
        shop.restock(&mut rng, economy.balance(), config.shop_slots);

        Self {
            config,
            arena,
            board,
            economy,
            shop,
            inventory: Inventory::new(),
            rng,
            roll: None,
        }
    }

    /// The face arena.
    pub fn arena(&self) -> &FaceArena {
        &self.arena
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The economy.
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    /// The shop.
    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// The inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True while a roll is animating.
    pub fn is_rolling(&self) -> bool {
        self.roll.is_some()
    }

    /// The in-flight roll, for preview display.
    pub fn roll_in_flight(&self) -> Option<&RollInFlight> {
        self.roll.as_ref()
    }

    /// Begin rolling every die. Rejected while a roll is already in
    /// flight; the resolution core below never sees concurrent rolls.
    pub fn start_roll(&mut self) -> GameResult<()> {
        if self.roll.is_some() {
            return Err(GameError::RollBusy);
        }
        self.roll = Some(RollInFlight::start(
            &self.board,
            &mut self.rng,
            self.config.roll_frames,
        ));
        Ok(())
    }

    /// Advance the in-flight roll by one frame. Once every die has
    /// settled, resolves the board and applies the payout exactly once.
    /// A no-op when no roll is in flight.
    pub fn tick(&mut self) -> GameResult<Vec<GameEvent>> {
        let Some(roll) = self.roll.as_mut() else {
            return Ok(Vec::new());
        };
        let mut events = roll.tick(&mut self.board, &mut self.rng)?;

        if roll.take_payout() {
            let resolver = Resolver::new(&self.arena, &self.board, self.economy.max_face_value())?;
            let resolution = resolver.resolve_board()?;
            self.economy.deposit(resolution.total);
            events.extend(resolution.events.into_iter().map(GameEvent::FaceFired));
            events.push(GameEvent::PayoutApplied {
                amount: resolution.total,
                balance: self.economy.balance(),
            });
            self.roll = None;
        }
        Ok(events)
    }

    /// Roll and tick until the payout lands. Headless driver for tests
    /// and the CLI.
    pub fn roll_to_completion(&mut self) -> GameResult<Vec<GameEvent>> {
        self.start_roll()?;
        let mut events = Vec::new();
        while self.roll.is_some() {
            events.extend(self.tick()?);
        }
        Ok(events)
    }

    /// Buy the shop offer at `slot` into the inventory. Atomic: if the
    /// balance is short, nothing changes. On success the shop restocks.
    pub fn buy(&mut self, slot: usize) -> GameResult<FaceId> {
        let cost = self.shop.offer(slot)?.cost;
        self.economy.spend(cost)?;
        let offer = self.shop.take(slot)?;
        let id = self.arena.insert(offer.face);
        self.inventory.add(id);
        self.shop
            .restock(&mut self.rng, self.economy.balance(), self.config.shop_slots);
        Ok(id)
    }

    /// Exchange two die slots on the board.
    pub fn swap_board_slots(
        &mut self,
        die_a: usize,
        slot_a: usize,
        die_b: usize,
        slot_b: usize,
    ) -> GameResult<()> {
        self.board.swap_slots(die_a, slot_a, die_b, slot_b)?;
        Ok(())
    }

    /// Exchange a die slot with an inventory slot.
    pub fn swap_with_inventory(
        &mut self,
        die: usize,
        slot: usize,
        inventory_slot: usize,
    ) -> GameResult<()> {
        let mounted = self.board.die(die)?.slot(slot)?;
        let held = self.inventory.get(inventory_slot)?;
        self.board.die_mut(die)?.set_slot(slot, held)?;
        self.inventory.set(inventory_slot, mounted)?;
        self.economy.refresh_max(&self.arena, &self.board);
        Ok(())
    }

    /// Attach or clear a face's special effect.
    pub fn set_face_effect(&mut self, id: FaceId, effect: Option<EffectKind>) -> GameResult<()> {
        self.arena
            .get_mut(id)
            .ok_or(CoreError::FaceNotFound(id))?
            .effect = effect;
        Ok(())
    }

    /// Upgrade a face's modifiers.
    pub fn upgrade_face(&mut self, id: FaceId, add: u32, mult: f64) -> GameResult<()> {
        self.arena
            .get_mut(id)
            .ok_or(CoreError::FaceNotFound(id))?
            .upgrade(add, mult);
        self.economy.refresh_max(&self.arena, &self.board);
        Ok(())
    }

    /// Add a standard die, bounded by the configured maximum.
    pub fn add_die(&mut self) -> GameResult<usize> {
        if self.board.len() >= self.config.max_dice {
            return Err(GameError::MaxDiceReached(self.config.max_dice));
        }
        let die = Die::standard(&mut self.arena);
        let index = self.board.add_die(die);
        self.economy.refresh_max(&self.arena, &self.board);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_value_sum(session: &GameSession) -> f64 {
        session
            .board()
            .visible_faces()
            .unwrap()
            .iter()
            .map(|vf| session.arena().get(vf.face).unwrap().base_yield())
            .sum()
    }

    #[test]
    fn single_die_payout_is_sum_of_visible_values() {
        let mut session = GameSession::new(GameConfig::default().with_seed(17));
        let events = session.roll_to_completion().unwrap();

        let settled = events
            .iter()
            .filter(|e| matches!(e, GameEvent::DieSettled { .. }))
            .count();
        let fired = events
            .iter()
            .filter(|e| matches!(e, GameEvent::FaceFired(_)))
            .count();
        assert_eq!(settled, 1);
        assert_eq!(fired, 3);

        let expected = visible_value_sum(&session);
        let Some(GameEvent::PayoutApplied { amount, balance }) = events.last() else {
            panic!("missing payout event");
        };
        assert_eq!(*amount, expected);
        assert_eq!(*balance, expected);
        assert_eq!(session.economy().balance(), expected);
    }

    #[test]
    fn roll_requests_while_busy_are_rejected() {
        let mut session = GameSession::new(GameConfig::default());
        session.start_roll().unwrap();
        assert!(matches!(session.start_roll(), Err(GameError::RollBusy)));
        // Still busy mid-animation.
        session.tick().unwrap();
        assert!(session.is_rolling());
        assert!(matches!(session.start_roll(), Err(GameError::RollBusy)));
    }

    #[test]
    fn payout_applies_once_per_roll() {
        let mut session = GameSession::new(GameConfig::default().with_seed(9));
        let events = session.roll_to_completion().unwrap();
        let payouts = events
            .iter()
            .filter(|e| matches!(e, GameEvent::PayoutApplied { .. }))
            .count();
        assert_eq!(payouts, 1);

        // Ticking an idle session does nothing.
        assert!(session.tick().unwrap().is_empty());
        let balance = session.economy().balance();
        session.tick().unwrap();
        assert_eq!(session.economy().balance(), balance);
    }

    #[test]
    fn broke_purchase_changes_nothing() {
        let mut session = GameSession::new(GameConfig::default());
        let offers_before = session.shop().offers().to_vec();
        let err = session.buy(0).unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { .. }));
        assert_eq!(session.economy().balance(), 0.0);
        assert!(session.inventory().is_empty());
        assert_eq!(session.shop().offers(), offers_before.as_slice());
    }

    #[test]
    fn purchase_moves_face_to_inventory_and_restocks() {
        let mut session =
            GameSession::new(GameConfig::default().with_starting_money(10_000.0));
        let cost = session.shop().offer(1).unwrap().cost;
        let id = session.buy(1).unwrap();

        assert_eq!(session.economy().balance(), 10_000.0 - cost);
        assert!(session.inventory().contains(id));
        assert_eq!(session.shop().offers().len(), 3);
    }

    #[test]
    fn inventory_swap_mounts_the_purchased_face() {
        let mut session =
            GameSession::new(GameConfig::default().with_starting_money(10_000.0));
        let bought = session.buy(0).unwrap();
        let mounted_before = session.board().die(0).unwrap().slot(2).unwrap();

        session.swap_with_inventory(0, 2, 0).unwrap();
        assert_eq!(session.board().die(0).unwrap().slot(2).unwrap(), bought);
        assert_eq!(session.inventory().get(0).unwrap(), mounted_before);

        // Swapping back restores the original arrangement.
        session.swap_with_inventory(0, 2, 0).unwrap();
        assert_eq!(
            session.board().die(0).unwrap().slot(2).unwrap(),
            mounted_before
        );
        assert!(session.inventory().contains(bought));
    }

    #[test]
    fn upgrades_refresh_the_display_maximum() {
        let mut session = GameSession::new(GameConfig::default());
        assert_eq!(session.economy().max_face_value(), 6.0);

        let id = session.board().die(0).unwrap().slot(5).unwrap();
        session.upgrade_face(id, 4, 1.0).unwrap();
        // (6 + 4) * 2.0
        assert_eq!(session.economy().max_face_value(), 20.0);
    }

    #[test]
    fn dice_count_is_bounded() {
        let mut session = GameSession::new(GameConfig::default());
        for _ in 0..4 {
            session.add_die().unwrap();
        }
        assert_eq!(session.board().len(), 5);
        assert!(matches!(
            session.add_die(),
            Err(GameError::MaxDiceReached(5))
        ));
    }

    #[test]
    fn sessions_are_reproducible_from_their_seed() {
        let mut a = GameSession::new(GameConfig::default().with_seed(33));
        let mut b = GameSession::new(GameConfig::default().with_seed(33));
        a.roll_to_completion().unwrap();
        b.roll_to_completion().unwrap();
        assert_eq!(a.economy().balance(), b.economy().balance());
        assert_eq!(
            a.board().die(0).unwrap().outcome(),
            b.board().die(0).unwrap().outcome()
        );
    }
}
