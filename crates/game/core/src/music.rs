//! Musical primitives: notes, note skills, chords, and melodies.
//!
//! A [`Note`] is one of seven discrete pitch classes and is the atomic unit
//! the resolution matrix compares. A [`Chord`] is the 3-note shape that tilts
//! the matrix for one turn; a [`Melody`] is the 4-note sequence compared
//! position-by-position against the opponent's.

use core::fmt;
use core::str::FromStr;

// ============================================================================
// Note
// ============================================================================

/// One of the seven pitch classes, in C-major scale order.
///
/// The discriminant doubles as the index into the resolution matrix and the
/// note-skill table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Note {
    C = 0,
    D = 1,
    E = 2,
    F = 3,
    G = 4,
    A = 5,
    B = 6,
}

impl Note {
    /// Total number of pitch classes.
    pub const COUNT: usize = 7;

    /// Returns all notes in ordinal order.
    pub const fn all() -> [Note; Self::COUNT] {
        [
            Note::C,
            Note::D,
            Note::E,
            Note::F,
            Note::G,
            Note::A,
            Note::B,
        ]
    }

    /// Returns the note as a matrix/table index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// The skill a note carries when it wins its slot.
    #[inline]
    pub const fn skill(self) -> NoteSkill {
        NOTE_SKILLS[self.as_index()]
    }

    /// Parses a single note character (`'c'` and `'C'` both parse).
    pub fn from_char(c: char) -> Result<Note, MusicError> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf)
            .parse()
            .map_err(|_| MusicError::UnknownNote(c))
    }
}

// ============================================================================
// Note Skill
// ============================================================================

/// What a winning note does to the two players' health buffers.
///
/// This is a fixed property of the note value itself, independent of battle
/// context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NoteSkill {
    /// Winner heals.
    Heal,
    /// Winner heals, loser loses the same amount.
    LifeSteal,
    /// Loser takes damage.
    Damage,
}

/// Per-note skill table, indexed by note ordinal.
///
/// Skills follow the matrix note classes: {C,D} heal, {E,F} steal life,
/// {G,A,B} deal damage.
pub const NOTE_SKILLS: [NoteSkill; Note::COUNT] = [
    NoteSkill::Heal,      // C
    NoteSkill::Heal,      // D
    NoteSkill::LifeSteal, // E
    NoteSkill::LifeSteal, // F
    NoteSkill::Damage,    // G
    NoteSkill::Damage,    // A
    NoteSkill::Damage,    // B
];

// ============================================================================
// Errors
// ============================================================================

/// Failure to build a chord or melody from raw input.
///
/// Malformed input is rejected outright, never truncated or padded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MusicError {
    /// A character did not name one of the seven notes.
    #[error("unknown note `{0}`, expected one of C, D, E, F, G, A, B")]
    UnknownNote(char),

    /// A note sequence had the wrong length for the target type.
    #[error("expected exactly {expected} notes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Parses a full note sequence from its character representation.
pub fn notes_from_str(s: &str) -> Result<Vec<Note>, MusicError> {
    s.chars().map(Note::from_char).collect()
}

// ============================================================================
// Chord
// ============================================================================

/// Exactly three notes, order-significant, played once per turn to perturb
/// the resolution matrix in the player's favor. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
    notes: [Note; Chord::LEN],
}

impl Chord {
    /// Number of notes in a chord.
    pub const LEN: usize = 3;

    pub const fn new(notes: [Note; Self::LEN]) -> Self {
        Self { notes }
    }

    #[inline]
    pub const fn notes(&self) -> &[Note; Self::LEN] {
        &self.notes
    }
}

impl TryFrom<&[Note]> for Chord {
    type Error = MusicError;

    fn try_from(notes: &[Note]) -> Result<Self, Self::Error> {
        let notes: [Note; Self::LEN] =
            notes.try_into().map_err(|_| MusicError::WrongLength {
                expected: Self::LEN,
                actual: notes.len(),
            })?;
        Ok(Self::new(notes))
    }
}

impl FromStr for Chord {
    type Err = MusicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::try_from(notes_from_str(s)?.as_slice())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.notes[0], self.notes[1], self.notes[2])
    }
}

// ============================================================================
// Melody
// ============================================================================

/// Exactly four notes, order-significant, compared position-by-position
/// against the opponent's melody. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Melody {
    notes: [Note; Melody::LEN],
}

impl Melody {
    /// Number of notes in a melody, and therefore slots in a turn.
    pub const LEN: usize = 4;

    pub const fn new(notes: [Note; Self::LEN]) -> Self {
        Self { notes }
    }

    #[inline]
    pub const fn notes(&self) -> &[Note; Self::LEN] {
        &self.notes
    }

    /// The note at a slot position.
    #[inline]
    pub const fn note(&self, slot: usize) -> Note {
        self.notes[slot]
    }
}

impl TryFrom<&[Note]> for Melody {
    type Error = MusicError;

    fn try_from(notes: &[Note]) -> Result<Self, Self::Error> {
        let notes: [Note; Self::LEN] =
            notes.try_into().map_err(|_| MusicError::WrongLength {
                expected: Self::LEN,
                actual: notes.len(),
            })?;
        Ok(Self::new(notes))
    }
}

impl FromStr for Melody {
    type Err = MusicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Melody::try_from(notes_from_str(s)?.as_slice())
    }
}

impl fmt::Display for Melody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.notes[0], self.notes[1], self.notes[2], self.notes[3]
        )
    }
}
