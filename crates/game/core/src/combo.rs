//! Combo melodies and the per-monster combo registry.
//!
//! A combo binds a melody pattern to a [`MelodyPower`]. Monsters carry a
//! fixed, ordered registry of combos; when a player wins the melody exchange,
//! their own monster's registry is scanned for a pattern matching the melody
//! they played.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::music::Melody;
use crate::power::MelodyPower;

// ============================================================================
// Matching
// ============================================================================

/// How a combo pattern is compared against a played melody.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ComboMatch {
    /// All four pattern notes must equal the played melody exactly.
    #[default]
    Exact,

    /// Only the first three pattern notes must be played, either leading the
    /// melody or shifted one position in: the pattern's opening matches
    /// `melody[0..3]` or `melody[1..4]`.
    Leading,
}

/// Which combo wins when a melody matches more than one registered pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MatchPolicy {
    /// The first declared match takes effect; registry order matters.
    #[default]
    First,

    /// Later declarations override earlier ones.
    Last,
}

// ============================================================================
// Combo
// ============================================================================

/// One registered combo: a melody pattern bound to a melody power.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Combo {
    pub name: &'static str,
    pub pattern: Melody,
    pub matching: ComboMatch,
    pub power: MelodyPower,
}

impl Combo {
    pub const fn new(
        name: &'static str,
        pattern: Melody,
        matching: ComboMatch,
        power: MelodyPower,
    ) -> Self {
        Self {
            name,
            pattern,
            matching,
            power,
        }
    }

    /// Whether the played melody activates this combo.
    pub fn matches(&self, melody: &Melody) -> bool {
        let pattern = self.pattern.notes();
        let played = melody.notes();
        match self.matching {
            ComboMatch::Exact => self.pattern == *melody,
            ComboMatch::Leading => {
                pattern[..3] == played[..3] || pattern[..3] == played[1..]
            }
        }
    }
}

// ============================================================================
// Registry & Monster
// ============================================================================

/// Ordered, bounded set of combos owned by one monster.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComboRegistry {
    combos: ArrayVec<Combo, { BattleConfig::MAX_COMBOS }>,
    policy: MatchPolicy,
}

impl ComboRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MatchPolicy) -> Self {
        Self {
            combos: ArrayVec::new(),
            policy,
        }
    }

    /// Registers a combo, failing once the registry is full.
    pub fn push(&mut self, combo: Combo) -> Result<(), arrayvec::CapacityError<Combo>> {
        self.combos.try_push(combo)
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combo> {
        self.combos.iter()
    }

    /// Looks up the combo a played melody activates, if any.
    ///
    /// An empty registry or a melody with no matching pattern is a normal
    /// "no combo" outcome, not an error. With [`MatchPolicy::First`] the scan
    /// stops at the first hit; with [`MatchPolicy::Last`] later hits
    /// override earlier ones.
    pub fn find(&self, melody: &Melody) -> Option<&Combo> {
        match self.policy {
            MatchPolicy::First => self.combos.iter().find(|c| c.matches(melody)),
            MatchPolicy::Last => self.combos.iter().filter(|c| c.matches(melody)).last(),
        }
    }
}

/// A battle monster: a named, fixed lookup table of combo melodies.
///
/// Monsters hold no mutable battle state of their own.
#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub name: &'static str,
    combos: ComboRegistry,
}

impl Monster {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            combos: ComboRegistry::new(),
        }
    }

    pub fn with_registry(name: &'static str, combos: ComboRegistry) -> Self {
        Self { name, combos }
    }

    pub fn registry(&self) -> &ComboRegistry {
        &self.combos
    }

    /// Scans this monster's registry for a combo activated by the melody.
    pub fn find_combo(&self, melody: &Melody) -> Option<&Combo> {
        self.combos.find(melody)
    }
}

impl Default for Monster {
    /// A monster that knows no combos; every lookup is a miss.
    fn default() -> Self {
        Self::new("mute")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Note;

    fn melody(s: &str) -> Melody {
        s.parse().unwrap()
    }

    fn combo(name: &'static str, pattern: &str, matching: ComboMatch) -> Combo {
        Combo::new(name, pattern.parse().unwrap(), matching, MelodyPower::amplify())
    }

    #[test]
    fn exact_match_requires_all_four_notes() {
        let c = combo("execute", "FFFF", ComboMatch::Exact);
        assert!(c.matches(&melody("FFFF")));
        assert!(!c.matches(&melody("FFFC")));
        assert!(!c.matches(&melody("CFFF")));
    }

    #[test]
    fn leading_match_accepts_both_offsets() {
        let c = combo("minor_heal", "CFGC", ComboMatch::Leading);
        // Pattern opening at the natural offset; fourth note free.
        assert!(c.matches(&melody("CFGA")));
        // Pattern opening shifted one position in.
        assert!(c.matches(&melody("ACFG")));
        assert!(!c.matches(&melody("CFAG")));
        assert!(!c.matches(&melody("GCFA")));
    }

    #[test]
    fn first_policy_prefers_declaration_order() {
        let mut registry = ComboRegistry::new();
        registry
            .push(combo("opener", "FFFF", ComboMatch::Exact))
            .unwrap();
        registry
            .push(combo("shadow", "FFFF", ComboMatch::Exact))
            .unwrap();
        assert_eq!(registry.find(&melody("FFFF")).unwrap().name, "opener");
    }

    #[test]
    fn last_policy_lets_later_declarations_override() {
        let mut registry = ComboRegistry::with_policy(MatchPolicy::Last);
        registry
            .push(combo("opener", "FFFF", ComboMatch::Exact))
            .unwrap();
        registry
            .push(combo("shadow", "FFFF", ComboMatch::Exact))
            .unwrap();
        assert_eq!(registry.find(&melody("FFFF")).unwrap().name, "shadow");
    }

    #[test]
    fn lookup_is_deterministic() {
        let mut registry = ComboRegistry::new();
        registry
            .push(combo("minor_heal", "CFGC", ComboMatch::Leading))
            .unwrap();
        let played = melody("ACFG");
        let first = registry.find(&played).map(|c| c.name);
        for _ in 0..10 {
            assert_eq!(registry.find(&played).map(|c| c.name), first);
        }
    }

    #[test]
    fn empty_registry_is_a_normal_miss() {
        let monster = Monster::default();
        assert!(monster.find_combo(&melody("FFFF")).is_none());
    }

    #[test]
    fn monster_registry_is_positional() {
        let mut registry = ComboRegistry::new();
        registry
            .push(Combo::new(
                "execute",
                Melody::new([Note::F; 4]),
                ComboMatch::Exact,
                MelodyPower::touch_of_death(),
            ))
            .unwrap();
        let monster = Monster::with_registry("the_unseen", registry);
        assert!(monster.find_combo(&melody("FFFF")).is_some());
        assert!(monster.find_combo(&melody("FFFC")).is_none());
    }
}
