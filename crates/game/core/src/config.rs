//! Battle configuration constants and tunable parameters.

use crate::music::{Chord, Melody, Note};

/// Balance constants and runtime-tunable battle parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Health both players start the battle with.
    pub starting_health: f64,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Notes per chord.
    pub const CHORD_LEN: usize = Chord::LEN;
    /// Notes per melody (slots per turn).
    pub const MELODY_LEN: usize = Melody::LEN;
    /// Size of the note domain and of the resolution matrix.
    pub const NOTE_COUNT: usize = Note::COUNT;
    /// Maximum combos a single monster can register.
    pub const MAX_COMBOS: usize = 8;

    // ===== balance scalars =====
    /// Heals restore twice the winning potency.
    pub const HEAL_SCALAR: f64 = 2.0;
    /// Damage lands at triple the winning potency.
    pub const DAMAGE_SCALAR: f64 = 3.0;
    /// How far each chord note tilts its matrix row or column.
    pub const CHORD_SHIFT: f64 = 0.5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HEALTH: f64 = 100.0;

    pub fn new() -> Self {
        Self {
            starting_health: Self::DEFAULT_STARTING_HEALTH,
        }
    }

    pub fn with_starting_health(starting_health: f64) -> Self {
        Self { starting_health }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
