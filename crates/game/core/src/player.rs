//! Mutable battle participant state.

use core::fmt;

use crate::combo::Monster;
use crate::music::Melody;
use crate::power::PersistentEffect;

/// One battle participant.
///
/// Created at battle start, mutated every turn, alive until the battle ends.
/// Health only moves through the clamping mutators here, keeping
/// `0 <= health <= max_health` after every change.
///
/// Two multiplier channels feed the health pipeline:
/// - the persistent `*_power` scalars scale a winning note's raw potency
///   when the per-slot buffer is filled;
/// - the persistent `heal_mult`/`damage_mult` and one-shot
///   `heal_mult_mod`/`damage_mult_mod` scale buffered values when they are
///   applied. A one-shot modifier is consumed by the first slot that uses it
///   and snaps back to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    name: String,
    health: f64,
    max_health: f64,

    /// Scales outgoing damage when a damage note wins.
    pub damage_power: f64,
    /// Scales self-healing when a heal note wins.
    pub heal_power: f64,
    /// Scales both halves of a life-steal when a life-steal note wins.
    pub life_steal_power: f64,

    /// Persistent apply-time scalar for positive (heal) buffer slots.
    pub heal_mult: f64,
    /// Persistent apply-time scalar for negative (damage) buffer slots.
    pub damage_mult: f64,
    /// One-shot apply-time bonus for the next heal slot.
    pub heal_mult_mod: f64,
    /// One-shot apply-time bonus for the next damage slot.
    pub damage_mult_mod: f64,

    health_change: [f64; Melody::LEN],
    effects: Vec<PersistentEffect>,
    monster: Monster,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, max_health: f64) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            damage_power: 1.0,
            heal_power: 1.0,
            life_steal_power: 1.0,
            heal_mult: 1.0,
            damage_mult: 1.0,
            heal_mult_mod: 1.0,
            damage_mult_mod: 1.0,
            health_change: [0.0; Melody::LEN],
            effects: Vec::new(),
            monster: Monster::default(),
        }
    }

    /// Builder: set current health (clamped to `[0, max_health]`).
    #[must_use]
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health.clamp(0.0, self.max_health);
        self
    }

    /// Builder: set the monster whose combos this player can trigger.
    #[must_use]
    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monster = monster;
        self
    }

    /// Builder: attach a lingering effect.
    #[must_use]
    pub fn with_effect(mut self, effect: PersistentEffect) -> Self {
        self.effects.push(effect);
        self
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn health(&self) -> f64 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn health_change(&self) -> &[f64; Melody::LEN] {
        &self.health_change
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Adds a delta to health, clamped to `[0, max_health]`.
    ///
    /// Returns the delta that actually landed after clamping.
    pub fn change_health(&mut self, delta: f64) -> f64 {
        let before = self.health;
        self.health = (self.health + delta).clamp(0.0, self.max_health);
        self.health - before
    }

    /// Sets health outright, clamped to `[0, max_health]`.
    pub fn set_health(&mut self, health: f64) {
        self.health = health.clamp(0.0, self.max_health);
    }

    /// Multiplies all three power scalars, e.g. by an amplifying combo.
    pub fn scale_powers(&mut self, factor: f64) {
        self.damage_power *= factor;
        self.heal_power *= factor;
        self.life_steal_power *= factor;
    }

    /// Clears the per-turn buffer before a new resolution.
    pub fn clear_health_change(&mut self) {
        self.health_change = [0.0; Melody::LEN];
    }

    /// Writes one slot of the per-turn buffer.
    pub fn set_health_change(&mut self, slot: usize, value: f64) {
        self.health_change[slot] = value;
    }

    /// Applies the buffered health changes slot by slot, in order.
    ///
    /// Each slot is scaled by the matching apply-time multiplier channel
    /// (heals by `heal_mult * heal_mult_mod`, damage by
    /// `damage_mult * damage_mult_mod`; the one-shot modifier used resets to
    /// 1 immediately), then committed to health with clamping before the
    /// next slot is considered. A slot absorbed by the clamp is lost, not
    /// carried over.
    ///
    /// Returns the per-slot deltas that actually landed.
    pub fn apply_health_change(&mut self) -> [f64; Melody::LEN] {
        let mut applied = [0.0; Melody::LEN];
        for slot in 0..Melody::LEN {
            let raw = self.health_change[slot];
            let scaled = if raw > 0.0 {
                let scaled = raw * self.heal_mult * self.heal_mult_mod;
                self.heal_mult_mod = 1.0;
                scaled
            } else if raw < 0.0 {
                let scaled = raw * self.damage_mult * self.damage_mult_mod;
                self.damage_mult_mod = 1.0;
                scaled
            } else {
                continue;
            };
            applied[slot] = self.change_health(scaled);
        }
        applied
    }

    /// Ticks every lingering effect once.
    pub fn apply_persistent_effects(&mut self) {
        for i in 0..self.effects.len() {
            let effect = self.effects[i];
            effect.tick(self);
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {:.1}/{:.1} hp",
            self.name, self.monster.name, self.health, self.max_health
        )
    }
}
