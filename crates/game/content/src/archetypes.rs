//! Player archetypes pairing a playstyle with a monster.

use cadenza_core::{BattleConfig, PlayerState};

use crate::monsters;

/// The Killer: an aggressive archetype backed by the Unseen.
pub fn killer(name: impl Into<String>, config: &BattleConfig) -> PlayerState {
    PlayerState::new(name, config.starting_health).with_monster(monsters::the_unseen())
}

/// The Bard: a supportive archetype backed by the Chorister.
pub fn bard(name: impl Into<String>, config: &BattleConfig) -> PlayerState {
    PlayerState::new(name, config.starting_health).with_monster(monsters::the_chorister())
}
