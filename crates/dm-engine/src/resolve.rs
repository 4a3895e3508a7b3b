//! The trigger-chain resolution pass over a committed board.
//!
//! Every visible face gets its own top-level trigger with a fresh
//! [`TriggerChain`]; effects reached inside that trigger share the chain,
//! so a face pays at most once per pass while independent passes may each
//! reach it. The chain only grows and visible faces are finite, which
//! bounds recursion structurally.

use serde::{Deserialize, Serialize};

use dm_core::{Board, EffectKind, FaceArena, VisibleFace};

use crate::chain::TriggerChain;
use crate::combo::combo_fires;
use crate::error::{EngineError, EngineResult};
use crate::event::FaceFired;

/// The outcome of resolving a roll: the currency total and the display
/// events to hand to the floating-text collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Total currency gained, applied to the balance exactly once.
    pub total: f64,
    /// One event per face firing, in firing order.
    pub events: Vec<FaceFired>,
}

/// Resolves one committed board roll.
///
/// Snapshots the visible faces at construction so effects always query
/// the outcome the pass started from, never a later roll.
#[derive(Debug)]
pub struct Resolver<'a> {
    arena: &'a FaceArena,
    visible: Vec<(VisibleFace, u32)>,
    normalization_max: f64,
}

impl<'a> Resolver<'a> {
    /// Snapshot the board's visible faces. Fails if any die has no
    /// committed outcome or a visible handle is missing from the arena.
    pub fn new(arena: &'a FaceArena, board: &Board, normalization_max: f64) -> EngineResult<Self> {
        let mut visible = Vec::new();
        for vf in board.visible_faces()? {
            let face = arena.get(vf.face).ok_or(EngineError::MissingFace(vf.face))?;
            visible.push((vf, face.value));
        }
        Ok(Self {
            arena,
            visible,
            normalization_max,
        })
    }

    /// The snapshot this resolver works over.
    pub fn visible(&self) -> impl Iterator<Item = &VisibleFace> {
        self.visible.iter().map(|(vf, _)| vf)
    }

    /// Resolve the whole board: one top-level pass per visible face,
    /// each with its own fresh chain.
    pub fn resolve_board(&self) -> EngineResult<Resolution> {
        let mut resolution = Resolution::default();
        for index in 0..self.visible.len() {
            let mut chain = TriggerChain::new();
            resolution.total += self.trigger(index, &mut chain, &mut resolution.events)?;
        }
        Ok(resolution)
    }

    /// Resolve a single top-level pass for the visible face at `index`
    /// in snapshot order.
    pub fn resolve_pass(&self, index: usize) -> EngineResult<Resolution> {
        let mut resolution = Resolution::default();
        let mut chain = TriggerChain::new();
        resolution.total = self.trigger(index, &mut chain, &mut resolution.events)?;
        Ok(resolution)
    }

    /// Fire one visible face: mark it in the chain, fan out through its
    /// effect if it has one, emit its display event, and return its base
    /// yield plus everything the fan-out gained.
    fn trigger(
        &self,
        index: usize,
        chain: &mut TriggerChain,
        events: &mut Vec<FaceFired>,
    ) -> EngineResult<f64> {
        let (vf, value) = self.visible[index];
        chain.insert(vf.face);

        let face = self.arena.get(vf.face).ok_or(EngineError::MissingFace(vf.face))?;
        let mut gained = face.base_yield();
        if let Some(kind) = face.effect {
            gained += self.activate(kind, value, chain, events)?;
        }

        events.push(FaceFired {
            die: vf.die,
            side: vf.side,
            face: vf.face,
            text: format!("+{value}"),
            raw_value: f64::from(value),
            normalization_max: self.normalization_max,
        });
        Ok(gained)
    }

    /// Fan out from a fired face: select targets by the effect's rule and
    /// recursively trigger each one not already in the chain.
    fn activate(
        &self,
        kind: EffectKind,
        trigger_value: u32,
        chain: &mut TriggerChain,
        events: &mut Vec<FaceFired>,
    ) -> EngineResult<f64> {
        let board_fires = kind == EffectKind::Combo && {
            let values: Vec<u32> = self.visible.iter().map(|&(_, v)| v).collect();
            combo_fires(&values)
        };

        let mut gained = 0.0;
        for (index, &(vf, value)) in self.visible.iter().enumerate() {
            let selected = match kind {
                EffectKind::Mirror => value == trigger_value,
                EffectKind::Cascade => value == trigger_value + 1,
                EffectKind::Even => value % 2 == 0,
                EffectKind::Odd => value % 2 == 1,
                EffectKind::Combo => board_fires,
            };
            if selected && !chain.contains(vf.face) {
                gained += self.trigger(index, chain, events)?;
            }
        }
        Ok(gained)
    }
}
