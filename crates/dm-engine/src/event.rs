//! Outbound display events consumed by the floating-text collaborator.

use serde::{Deserialize, Serialize};

use dm_core::{FaceId, Side};

/// Emitted once per fired face during resolution.
///
/// Carries everything the floating-text layer needs: the label to show,
/// where to spawn it (die + side), and the raw value with the current
/// board maximum for color normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceFired {
    /// Die whose visible face fired.
    pub die: usize,
    /// Side the face is showing on.
    pub side: Side,
    /// Handle of the fired face.
    pub face: FaceId,
    /// Label to display, e.g. `+3`.
    pub text: String,
    /// The face's raw value, for color normalization.
    pub raw_value: f64,
    /// Current maximum single-face yield across the board.
    pub normalization_max: f64,
}

impl FaceFired {
    /// The raw value normalized against the board maximum, clamped to
    /// 0..=1. A maximum below 1 is treated as 1.
    pub fn normalized(&self) -> f64 {
        (self.raw_value / self.normalization_max.max(1.0)).clamp(0.0, 1.0)
    }
}
