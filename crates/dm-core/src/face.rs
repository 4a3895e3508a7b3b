//! Die faces: base value, modifiers, cost, and special-effect tags.

use serde::{Deserialize, Serialize};

/// Highest face value with a dedicated sprite; larger values share one
/// overflow sprite key.
pub const MAX_SPRITE_VALUE: u32 = 6;

const BASE_COST: f64 = 30.0;
const ADD_COST_PER_UNIT: f64 = 0.3;
const MULT_COST_PER_STEP: f64 = 100.0;
const MULT_COST_STEP: f64 = 0.5;

/// The special-effect rule a face can carry.
///
/// A closed set of variants dispatched by pattern matching in the
/// resolution engine; description and icon key travel with the variant
/// as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Fires every visible face with the same value as the trigger.
    Mirror,
    /// Fires every visible face valued one higher than the trigger.
    Cascade,
    /// Fires every visible face when the board shows a straight or
    /// three of a kind.
    Combo,
    /// Fires every visible face with an even value.
    Even,
    /// Fires every visible face with an odd value.
    Odd,
}

impl EffectKind {
    /// All effect variants, in display order.
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Mirror,
        EffectKind::Cascade,
        EffectKind::Combo,
        EffectKind::Even,
        EffectKind::Odd,
    ];

    /// Human-readable rule text for shop and inventory display.
    pub fn description(self) -> &'static str {
        match self {
            Self::Mirror => "also fires every visible face showing the same value",
            Self::Cascade => "also fires every visible face showing one higher",
            Self::Combo => "fires the whole board on a straight or three of a kind",
            Self::Even => "also fires every visible even face",
            Self::Odd => "also fires every visible odd face",
        }
    }

    /// Stable key for the effect's icon in a sprite atlas.
    pub fn icon_key(self) -> &'static str {
        match self {
            Self::Mirror => "fx_mirror",
            Self::Cascade => "fx_cascade",
            Self::Combo => "fx_combo",
            Self::Even => "fx_even",
            Self::Odd => "fx_odd",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mirror => write!(f, "mirror"),
            Self::Cascade => write!(f, "cascade"),
            Self::Combo => write!(f, "combo"),
            Self::Even => write!(f, "even"),
            Self::Odd => write!(f, "odd"),
        }
    }
}

/// One side of a die: a base value, two upgrade modifiers, and an
/// optional special effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Base pip value.
    pub value: u32,
    /// Flat bonus added to the value before multiplication.
    pub add_modifier: u32,
    /// Multiplier applied to value plus flat bonus.
    pub mult_modifier: f64,
    /// Optional special effect fired when this face pays out.
    pub effect: Option<EffectKind>,
}

impl Face {
    /// A plain face with the given value and no modifiers.
    pub fn new(value: u32) -> Self {
        Self {
            value,
            add_modifier: 0,
            mult_modifier: 1.0,
            effect: None,
        }
    }

    /// A face with explicit modifiers.
    pub fn with_modifiers(value: u32, add_modifier: u32, mult_modifier: f64) -> Self {
        Self {
            value,
            add_modifier,
            mult_modifier,
            effect: None,
        }
    }

    /// Attach a special effect.
    pub fn with_effect(mut self, effect: EffectKind) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Currency produced by this face alone, before any effect fan-out.
    pub fn base_yield(&self) -> f64 {
        f64::from(self.value + self.add_modifier) * self.mult_modifier
    }

    /// Purchase price: a flat base, plus a small premium per point of
    /// flat bonus, plus a steep premium per half-step of multiplier
    /// above 1.0. Monotonic in both modifiers.
    pub fn cost(&self) -> f64 {
        let add_cost = f64::from(self.add_modifier) * ADD_COST_PER_UNIT;
        let mult_cost = if self.mult_modifier > 1.0 {
            (self.mult_modifier - 1.0) / MULT_COST_STEP * MULT_COST_PER_STEP
        } else {
            0.0
        };
        BASE_COST + add_cost + mult_cost
    }

    /// Apply an upgrade: both modifiers increase additively, unbounded.
    pub fn upgrade(&mut self, add_modifier: u32, mult_modifier: f64) {
        self.add_modifier += add_modifier;
        self.mult_modifier += mult_modifier;
    }

    /// Sprite lookup key for this face's value. Out-of-range values
    /// degrade to the shared overflow key; yield math is unaffected.
    pub fn sprite_value(&self) -> u32 {
        if self.value > MAX_SPRITE_VALUE {
            MAX_SPRITE_VALUE + 1
        } else {
            self.value
        }
    }
}
