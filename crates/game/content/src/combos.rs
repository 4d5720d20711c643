//! Built-in combo melodies.
//!
//! Declared as constants so monster builders can compose registries without
//! allocation. Registry order matters under the default first-match policy;
//! builders push these in the order listed here.

use cadenza_core::{Combo, ComboMatch, Melody, MelodyPower, Note};

/// Full execute: the melody must be played note-perfect.
pub const EXECUTE: Combo = Combo::new(
    "execute",
    Melody::new([Note::F, Note::F, Note::F, Note::F]),
    ComboMatch::Exact,
    MelodyPower::touch_of_death(),
);

/// Lenient execute: only the three leading F's must land, but it demands
/// real momentum and a desperate caster.
pub const EXECUTE_SHORT: Combo = Combo::new(
    "execute_short",
    Melody::new([Note::F, Note::F, Note::F, Note::F]),
    ComboMatch::Leading,
    MelodyPower::TouchOfDeath {
        min_potency: 2.0,
        health_gate: 50.0,
    },
);

/// Small self-heal scaled by the win margin.
pub const MINOR_HEAL: Combo = Combo::new(
    "minor_heal",
    Melody::new([Note::C, Note::F, Note::G, Note::C]),
    ComboMatch::Leading,
    MelodyPower::HealingSong {
        min_potency: 0.0,
        heal_per_potency: 25.0,
    },
);

/// Triples the caster's power scalars for the rest of the battle.
pub const MINOR_AMPLIFY: Combo = Combo::new(
    "minor_amplify",
    Melody::new([Note::D, Note::A, Note::B, Note::C]),
    ComboMatch::Leading,
    MelodyPower::Amplify {
        min_potency: 0.0,
        factor: 3.0,
    },
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_needs_the_exact_melody() {
        assert!(EXECUTE.matches(&"FFFF".parse().unwrap()));
        assert!(!EXECUTE.matches(&"FFFC".parse().unwrap()));
    }

    #[test]
    fn short_execute_accepts_a_trailing_or_leading_free_note() {
        assert!(EXECUTE_SHORT.matches(&"FFFC".parse().unwrap()));
        assert!(EXECUTE_SHORT.matches(&"CFFF".parse().unwrap()));
        assert!(!EXECUTE_SHORT.matches(&"FFCF".parse().unwrap()));
    }
}
