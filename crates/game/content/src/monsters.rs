//! Built-in monsters and their combo registries.

use cadenza_core::{ComboRegistry, Monster};

use crate::combos;

/// The Unseen: a single note-perfect execute.
pub fn the_unseen() -> Monster {
    let mut registry = ComboRegistry::new();
    registry
        .push(combos::EXECUTE)
        .expect("builtin combo set fits the registry");
    Monster::with_registry("the Unseen", registry)
}

/// The Chorister: a supportive songbook built around leading patterns.
pub fn the_chorister() -> Monster {
    let mut registry = ComboRegistry::new();
    for combo in [combos::MINOR_HEAL, combos::MINOR_AMPLIFY, combos::EXECUTE_SHORT] {
        registry
            .push(combo)
            .expect("builtin combo set fits the registry");
    }
    Monster::with_registry("the Chorister", registry)
}
