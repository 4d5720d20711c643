//! Submitted turn actions and the player side tag.

use core::fmt;

use crate::music::{Chord, Melody, MusicError};

// ============================================================================
// Player Side
// ============================================================================

/// Which of the two battle participants something belongs to.
///
/// The battle state owns both players in a 2-element table indexed by side;
/// "the other player" is always derived from the tag, so no entity carries a
/// back-reference to its opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PlayerSide {
    A = 0,
    B = 1,
}

impl PlayerSide {
    /// Number of battle participants, fixed for a battle's lifetime.
    pub const COUNT: usize = 2;

    /// Returns the side as a participant-table index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// The unique other participant.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerSide::A => PlayerSide::B,
            PlayerSide::B => PlayerSide::A,
        }
    }
}

// ============================================================================
// Turn Action
// ============================================================================

/// One player's complete submission for a turn: a chord and a melody.
///
/// Built fresh each turn by the input layer and discarded after resolution.
/// The fixed-size [`Chord`] and [`Melody`] types make malformed submissions
/// unrepresentable; the fallible constructors below are the boundary where
/// raw input gets rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub side: PlayerSide,
    pub chord: Chord,
    pub melody: Melody,
}

impl TurnAction {
    pub const fn new(side: PlayerSide, chord: Chord, melody: Melody) -> Self {
        Self {
            side,
            chord,
            melody,
        }
    }

    /// Builds an action from raw note slices, rejecting wrong lengths.
    pub fn from_notes(
        side: PlayerSide,
        chord: &[crate::music::Note],
        melody: &[crate::music::Note],
    ) -> Result<Self, MusicError> {
        Ok(Self::new(side, Chord::try_from(chord)?, Melody::try_from(melody)?))
    }

    /// Builds an action from note-character strings such as `"ABC"`/`"GACA"`.
    pub fn parse(side: PlayerSide, chord: &str, melody: &str) -> Result<Self, MusicError> {
        Ok(Self::new(side, chord.parse()?, melody.parse()?))
    }
}

impl fmt::Display for TurnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "side {} plays chord {} and melody {}",
            self.side, self.chord, self.melody
        )
    }
}
