//! Melody powers and lingering player effects.
//!
//! A [`MelodyPower`] is the bonus a matched combo melody triggers, applied
//! once with the turn's aggregate potency. The variants form a closed set
//! dispatched by exhaustive match; each carries its own tuning parameters.

use crate::player::PlayerState;

// ============================================================================
// Melody Power
// ============================================================================

/// Bonus effect triggered by a matched combo melody.
///
/// Every variant gates on a minimum aggregate potency; a cast below the gate
/// fizzles silently. Application may read and mutate both players.
#[derive(Clone, Copy, Debug, PartialEq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MelodyPower {
    /// Kills the enemy outright, but only while the caster is themselves in
    /// danger: the caster's own health must be at or below `health_gate`.
    TouchOfDeath { min_potency: f64, health_gate: f64 },

    /// Heals the caster by `heal_per_potency` per point of potency.
    HealingSong { min_potency: f64, heal_per_potency: f64 },

    /// Damages the enemy by `damage_per_potency` per point of potency.
    DamagingSong {
        min_potency: f64,
        damage_per_potency: f64,
    },

    /// Multiplies all three of the caster's power scalars by `factor`.
    Amplify { min_potency: f64, factor: f64 },

    /// Multiplies all three of the enemy's power scalars by `factor`.
    Condense { min_potency: f64, factor: f64 },
}

impl MelodyPower {
    /// Baseline execute: no potency gate, triggers at any caster health.
    pub const fn touch_of_death() -> Self {
        Self::TouchOfDeath {
            min_potency: 0.0,
            health_gate: 100.0,
        }
    }

    /// Baseline healing song.
    pub const fn healing_song() -> Self {
        Self::HealingSong {
            min_potency: 0.0,
            heal_per_potency: 100.0,
        }
    }

    /// Baseline damaging song.
    pub const fn damaging_song() -> Self {
        Self::DamagingSong {
            min_potency: 0.0,
            damage_per_potency: 10.0,
        }
    }

    /// Baseline amplify: doubles the caster's powers.
    pub const fn amplify() -> Self {
        Self::Amplify {
            min_potency: 0.0,
            factor: 2.0,
        }
    }

    /// Baseline condense.
    ///
    /// TODO: confirm the intended factor; 0.0 silences the enemy's powers
    /// entirely rather than halving them.
    pub const fn condense() -> Self {
        Self::Condense {
            min_potency: 0.0,
            factor: 0.0,
        }
    }

    /// The display name of the variant.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Applies the power to the caster/enemy pair with the given potency.
    pub fn apply(&self, caster: &mut PlayerState, enemy: &mut PlayerState, potency: f64) {
        match *self {
            Self::TouchOfDeath {
                min_potency,
                health_gate,
            } => {
                if potency >= min_potency && caster.health() <= health_gate {
                    enemy.set_health(0.0);
                }
            }
            Self::HealingSong {
                min_potency,
                heal_per_potency,
            } => {
                if potency >= min_potency {
                    caster.change_health(heal_per_potency * potency);
                }
            }
            Self::DamagingSong {
                min_potency,
                damage_per_potency,
            } => {
                if potency >= min_potency {
                    enemy.change_health(-damage_per_potency * potency);
                }
            }
            Self::Amplify {
                min_potency,
                factor,
            } => {
                if potency >= min_potency {
                    caster.scale_powers(factor);
                }
            }
            Self::Condense {
                min_potency,
                factor,
            } => {
                if potency >= min_potency {
                    enemy.scale_powers(factor);
                }
            }
        }
    }
}

// ============================================================================
// Persistent Effects
// ============================================================================

/// A lingering effect carried by one player, ticked at the end of every turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersistentEffect {
    /// Chips the carrier's health every turn.
    DamageOverTime { potency: f64 },
}

impl PersistentEffect {
    /// Applies one turn's worth of the effect to its carrier.
    pub fn tick(&self, carrier: &mut PlayerState) {
        match *self {
            Self::DamageOverTime { potency } => {
                carrier.change_health(-potency);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerState;

    fn player(health: f64) -> PlayerState {
        PlayerState::new("test", 100.0).with_health(health)
    }

    #[test]
    fn touch_of_death_requires_caster_in_danger() {
        let power = MelodyPower::TouchOfDeath {
            min_potency: 2.0,
            health_gate: 50.0,
        };

        // Caster healthy: enemy survives even with ample potency.
        let mut caster = player(80.0);
        let mut enemy = player(60.0);
        power.apply(&mut caster, &mut enemy, 4.0);
        assert_eq!(enemy.health(), 60.0);

        // Caster at the gate: enemy dies.
        let mut caster = player(50.0);
        let mut enemy = player(60.0);
        power.apply(&mut caster, &mut enemy, 4.0);
        assert_eq!(enemy.health(), 0.0);

        // Potency below the gate never triggers.
        let mut caster = player(10.0);
        let mut enemy = player(60.0);
        power.apply(&mut caster, &mut enemy, 1.0);
        assert_eq!(enemy.health(), 60.0);
    }

    #[test]
    fn songs_scale_with_potency() {
        let heal = MelodyPower::HealingSong {
            min_potency: 0.0,
            heal_per_potency: 25.0,
        };
        let mut caster = player(10.0);
        let mut enemy = player(100.0);
        heal.apply(&mut caster, &mut enemy, 2.0);
        assert_eq!(caster.health(), 60.0);

        let hurt = MelodyPower::DamagingSong {
            min_potency: 0.0,
            damage_per_potency: 10.0,
        };
        hurt.apply(&mut caster, &mut enemy, 3.0);
        assert_eq!(enemy.health(), 70.0);
    }

    #[test]
    fn amplify_and_condense_scale_power_scalars() {
        let mut caster = player(50.0);
        let mut enemy = player(50.0);

        MelodyPower::Amplify {
            min_potency: 0.0,
            factor: 3.0,
        }
        .apply(&mut caster, &mut enemy, 1.0);
        assert_eq!(caster.damage_power, 3.0);
        assert_eq!(caster.heal_power, 3.0);
        assert_eq!(caster.life_steal_power, 3.0);

        MelodyPower::condense().apply(&mut caster, &mut enemy, 1.0);
        assert_eq!(enemy.damage_power, 0.0);
        assert_eq!(enemy.heal_power, 0.0);
        assert_eq!(enemy.life_steal_power, 0.0);
    }

    #[test]
    fn damage_over_time_ticks_the_carrier() {
        let mut carrier = player(10.0);
        let dot = PersistentEffect::DamageOverTime { potency: 4.0 };
        dot.tick(&mut carrier);
        assert_eq!(carrier.health(), 6.0);
    }
}
