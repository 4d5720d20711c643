//! The note interaction matrix and pure resolution functions.
//!
//! The base table scores every note pair from the row note's perspective:
//! positive favors the row, negative the column, zero is a tie. Notes fall
//! into the classes {C,D}, {E,F}, {G,A,B} with cyclic dominance
//! {C,D} → {E,F} → {G,A,B} → {C,D}. The table is antisymmetric
//! (`matrix[i][j] == -matrix[j][i]`) and never mutated; every resolution
//! works on a private copy.

use crate::config::BattleConfig;
use crate::music::{Chord, Melody, Note};

/// The constant base interaction table.
///
/// Rows and columns are indexed by note ordinal (C..B).
const BASE: [[f64; Note::COUNT]; Note::COUNT] = [
    [0.0, 0.0, 1.0, 1.0, -1.0, -1.0, -1.0],
    [0.0, 0.0, 1.0, 1.0, -1.0, -1.0, -1.0],
    [-1.0, -1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    [-1.0, -1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0, -1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, -1.0, -1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, -1.0, -1.0, 0.0, 0.0, 0.0],
];

/// A per-resolution working copy of the interaction table.
///
/// Chord perturbation mutates this copy only; the constant base table is
/// shared by every battle and never changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolutionMatrix {
    cells: [[f64; Note::COUNT]; Note::COUNT],
}

impl ResolutionMatrix {
    /// A fresh copy of the base table.
    pub fn base() -> Self {
        Self { cells: BASE }
    }

    /// Scores one note pair from the row note's perspective.
    #[inline]
    pub fn score(&self, row: Note, col: Note) -> f64 {
        self.cells[row.as_index()][col.as_index()]
    }

    /// Tilts the table for one turn's chords.
    ///
    /// Every note of side A's chord raises its whole row by
    /// [`BattleConfig::CHORD_SHIFT`]; every note of side B's chord lowers its
    /// whole column by the same amount. The two passes touch disjoint axes,
    /// so their order does not matter.
    pub fn apply_chords(&mut self, chord_a: &Chord, chord_b: &Chord) {
        for i in 0..Chord::LEN {
            let row = chord_a.notes()[i].as_index();
            let col = chord_b.notes()[i].as_index();
            for j in 0..Note::COUNT {
                self.cells[row][j] += BattleConfig::CHORD_SHIFT;
                self.cells[j][col] -= BattleConfig::CHORD_SHIFT;
            }
        }
    }

    /// Scores two melodies position-by-position.
    ///
    /// Pure: (melody A, melody B, table) → outcome vector, one signed score
    /// per slot.
    pub fn resolve_melodies(&self, a: &Melody, b: &Melody) -> [f64; Melody::LEN] {
        let mut outcomes = [0.0; Melody::LEN];
        for (slot, outcome) in outcomes.iter_mut().enumerate() {
            *outcome = self.score(a.note(slot), b.note(slot));
        }
        outcomes
    }
}

/// Resolves a full turn's note outcomes without touching any player state.
///
/// Clones the base table, applies both chords, and scores the melodies.
/// Deterministic and side-effect free; usable to test chord perturbation and
/// note resolution in isolation.
pub fn resolve(
    melody_a: &Melody,
    melody_b: &Melody,
    chord_a: &Chord,
    chord_b: &Chord,
) -> [f64; Melody::LEN] {
    let mut matrix = ResolutionMatrix::base();
    matrix.apply_chords(chord_a, chord_b);
    matrix.resolve_melodies(melody_a, melody_b)
}
