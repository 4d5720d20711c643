//! Per-turn result records returned to the caller.
//!
//! A [`TurnReport`] is produced fresh by every resolution and superseded by
//! the next; nothing here lingers as engine state, so the presentation layer
//! reads a plain value instead of poking at battle internals.

use core::fmt;

use crate::action::PlayerSide;
use crate::engine::BattlePhase;
use crate::music::{Melody, NoteSkill};
use crate::power::MelodyPower;

/// Result of a single melody slot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteOutcome {
    /// Signed matrix score: positive favors side A, negative side B.
    pub score: f64,
    /// Slot winner; `None` on a tied slot, which nobody wins.
    pub winner: Option<PlayerSide>,
    /// The winning note's skill; `None` on a tie.
    pub skill: Option<NoteSkill>,
}

/// The combo a melody winner triggered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboTrigger {
    pub name: String,
    pub power: MelodyPower,
}

/// Everything that happened in one resolved turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// 1-based turn number.
    pub turn: u32,
    /// Player names, indexed by side.
    pub names: [String; PlayerSide::COUNT],
    /// Per-slot outcomes.
    pub notes: [NoteOutcome; Melody::LEN],
    /// Per-slot health deltas that actually landed, indexed by side.
    pub health_deltas: [[f64; Melody::LEN]; PlayerSide::COUNT],
    /// Aggregate melody winner; `None` when the turn's scores sum to zero.
    pub melody_winner: Option<PlayerSide>,
    /// Combo the melody winner triggered, if their melody matched one.
    pub combo: Option<ComboTrigger>,
    /// Health after the turn, indexed by side.
    pub healths: [f64; PlayerSide::COUNT],
    /// Battle phase after the turn (complete, or game over).
    pub phase: BattlePhase,
}

impl TurnReport {
    pub fn name(&self, side: PlayerSide) -> &str {
        &self.names[side.as_index()]
    }

    pub fn health(&self, side: PlayerSide) -> f64 {
        self.healths[side.as_index()]
    }

    pub fn health_delta(&self, side: PlayerSide) -> &[f64; Melody::LEN] {
        &self.health_deltas[side.as_index()]
    }

    /// Sum of one side's landed per-slot deltas.
    pub fn total_delta(&self, side: PlayerSide) -> f64 {
        self.health_delta(side).iter().sum()
    }
}

impl fmt::Display for TurnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "turn {} results:", self.turn)?;
        for (slot, note) in self.notes.iter().enumerate() {
            match (note.winner, note.skill) {
                (Some(side), Some(skill)) => writeln!(
                    f,
                    "  note {}: won by {} ({}), hp changes {:+.1} / {:+.1}",
                    slot + 1,
                    self.name(side),
                    skill,
                    self.health_deltas[0][slot],
                    self.health_deltas[1][slot],
                )?,
                _ => writeln!(f, "  note {}: tied, no effect", slot + 1)?,
            }
        }
        match (self.melody_winner, &self.combo) {
            (Some(side), Some(combo)) => writeln!(
                f,
                "  melody won by {} triggering {}",
                self.name(side),
                combo.name
            )?,
            (Some(side), None) => {
                writeln!(f, "  melody won by {}, no combo", self.name(side))?
            }
            _ => writeln!(f, "  melody tied")?,
        }
        write!(
            f,
            "  {}: {:.1} hp, {}: {:.1} hp",
            self.names[0], self.healths[0], self.names[1], self.healths[1]
        )
    }
}
