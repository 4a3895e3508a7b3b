//! The face shop: randomized offers scaled to the player's wealth.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use dm_core::{EffectKind, Face};

use crate::error::{GameError, GameResult};

/// Flat premium on top of the face cost when an offer carries an effect.
const EFFECT_PREMIUM: f64 = 75.0;

/// Chance denominator for an offer to carry a special effect.
const EFFECT_ODDS: u32 = 4;

/// A purchasable face with its asking price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopOffer {
    /// The face for sale.
    pub face: Face,
    /// Asking price.
    pub cost: f64,
}

/// The shop: a fixed number of offers, fully restocked after every
/// purchase. Offer quality scales with the balance at restock time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shop {
    offers: Vec<ShopOffer>,
}

impl Shop {
    /// An empty shop; call [`Shop::restock`] to fill it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offers.
    pub fn offers(&self) -> &[ShopOffer] {
        &self.offers
    }

    /// The offer at a slot.
    pub fn offer(&self, slot: usize) -> GameResult<&ShopOffer> {
        self.offers.get(slot).ok_or(GameError::OfferOutOfRange(slot))
    }

    /// Remove and return the offer at a slot.
    pub fn take(&mut self, slot: usize) -> GameResult<ShopOffer> {
        if slot >= self.offers.len() {
            return Err(GameError::OfferOutOfRange(slot));
        }
        Ok(self.offers.remove(slot))
    }

    /// Throw away the current stock and generate `slots` fresh offers.
    ///
    /// Modifier ranges grow with the balance: the flat bonus scales with
    /// balance / 100, the multiplier with balance / 10000 (floored at
    /// 0.5). Roughly one offer in four carries a random special effect
    /// at a flat premium.
    pub fn restock(&mut self, rng: &mut StdRng, balance: f64, slots: usize) {
        self.offers.clear();
        for _ in 0..slots {
            let add_cap = (balance / 100.0) as u32;
            let add_modifier = if add_cap > 0 {
                rng.random_range(0..add_cap)
            } else {
                0
            };

            let mult_cap = balance / 10_000.0;
            let mult_modifier = if mult_cap > 0.0 {
                rng.random_range(0.0..mult_cap)
            } else {
                0.0
            }
            .max(0.5);

            let value = rng.random_range(1..=6);
            let mut face = Face::with_modifiers(value, add_modifier, mult_modifier);

            let mut cost = face.cost();
            if rng.random_range(0..EFFECT_ODDS) == 0 {
                let kind = EffectKind::ALL[rng.random_range(0..EffectKind::ALL.len())];
                face = face.with_effect(kind);
                cost += EFFECT_PREMIUM;
            }

            self.offers.push(ShopOffer { face, cost });
        }
    }
}
