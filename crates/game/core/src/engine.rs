//! The battle orchestrator.
//!
//! [`BattleEngine`] is the authoritative reducer for a two-player battle. A
//! turn moves through `AwaitingActionA → AwaitingActionB → Resolving →
//! Complete`; resolution is one atomic step in fixed order: perturb a fresh
//! matrix copy with both chords, score the melodies, fill both health-change
//! buffers, resolve the melody combo, apply the buffers, tick lingering
//! effects, and emit a [`TurnReport`]. Either player reaching zero health
//! ends the battle.

use crate::action::{PlayerSide, TurnAction};
use crate::config::BattleConfig;
use crate::matrix::resolve;
use crate::music::{Melody, NoteSkill};
use crate::player::PlayerState;
use crate::report::{ComboTrigger, NoteOutcome, TurnReport};

// ============================================================================
// Phase & Errors
// ============================================================================

/// Where the battle currently stands.
///
/// `Complete` marks a finished turn whose players both still stand; the next
/// side-A submission starts the next turn. `GameOver` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    /// Waiting for side A's submission.
    AwaitingActionA,
    /// Side A submitted; waiting for side B.
    AwaitingActionB,
    /// Both actions held; resolution may run.
    Resolving,
    /// Turn resolved, both players alive.
    Complete,
    /// Battle ended. `None` winner is a draw (both fell the same turn).
    GameOver { winner: Option<PlayerSide> },
}

/// Misuse of the battle engine surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// An action arrived for the wrong side of the handshake.
    #[error("expected an action from side {expected}, got side {got}")]
    OutOfTurn { expected: PlayerSide, got: PlayerSide },

    /// Resolution requested before both actions were submitted.
    #[error("both actions must be submitted before resolving")]
    NotReady,

    /// The battle already reached game over.
    #[error("the battle is over")]
    BattleOver,
}

// ============================================================================
// Battle Engine
// ============================================================================

/// Orchestrates turn resolution over a fixed pair of players.
///
/// The engine assumes exclusive access for the duration of each call; the
/// whole per-turn computation runs to completion before returning, with no
/// partial state observable to callers.
pub struct BattleEngine {
    players: [PlayerState; PlayerSide::COUNT],
    phase: BattlePhase,
    pending: [Option<TurnAction>; PlayerSide::COUNT],
    turn: u32,
}

impl BattleEngine {
    /// Starts a battle over a fully-set-up player pair.
    ///
    /// Pairing the players and assigning monsters is the caller's job and
    /// must be finished before the first submission.
    pub fn new(player_a: PlayerState, player_b: PlayerState) -> Self {
        Self {
            players: [player_a, player_b],
            phase: BattlePhase::AwaitingActionA,
            pending: [None, None],
            turn: 0,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player(&self, side: PlayerSide) -> &PlayerState {
        &self.players[side.as_index()]
    }

    /// Submits one side's action for the current turn.
    ///
    /// Side A must submit first, then side B; a completed turn rolls over
    /// into awaiting side A again. Returns the phase after the submission.
    pub fn submit(&mut self, action: TurnAction) -> Result<BattlePhase, BattleError> {
        let expected = match self.phase {
            BattlePhase::AwaitingActionA | BattlePhase::Complete => PlayerSide::A,
            BattlePhase::AwaitingActionB => PlayerSide::B,
            BattlePhase::Resolving => {
                return Err(BattleError::NotReady);
            }
            BattlePhase::GameOver { .. } => return Err(BattleError::BattleOver),
        };
        if action.side != expected {
            return Err(BattleError::OutOfTurn {
                expected,
                got: action.side,
            });
        }

        self.pending[action.side.as_index()] = Some(action);
        self.phase = match action.side {
            PlayerSide::A => BattlePhase::AwaitingActionB,
            PlayerSide::B => BattlePhase::Resolving,
        };
        Ok(self.phase)
    }

    /// Resolves one full turn from two submitted actions.
    ///
    /// Convenience wrapper over [`submit`](Self::submit) +
    /// [`resolve_turn`](Self::resolve_turn); this is the primary operation.
    pub fn battle(
        &mut self,
        action_a: TurnAction,
        action_b: TurnAction,
    ) -> Result<TurnReport, BattleError> {
        self.submit(action_a)?;
        self.submit(action_b)?;
        self.resolve_turn()
    }

    /// Runs the atomic resolution step for the held action pair.
    pub fn resolve_turn(&mut self) -> Result<TurnReport, BattleError> {
        if self.phase != BattlePhase::Resolving {
            return Err(match self.phase {
                BattlePhase::GameOver { .. } => BattleError::BattleOver,
                _ => BattleError::NotReady,
            });
        }
        let (action_a, action_b) = match (self.pending[0].take(), self.pending[1].take()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(BattleError::NotReady),
        };
        self.turn += 1;

        for player in &mut self.players {
            player.clear_health_change();
        }

        // Score the melodies against the chord-perturbed matrix copy.
        let outcomes = resolve(
            &action_a.melody,
            &action_b.melody,
            &action_a.chord,
            &action_b.chord,
        );

        // Per-slot winners fill both health-change buffers.
        let mut notes = [NoteOutcome {
            score: 0.0,
            winner: None,
            skill: None,
        }; Melody::LEN];
        for slot in 0..Melody::LEN {
            notes[slot] = self.decide_note(slot, outcomes[slot], &action_a, &action_b);
        }

        // Aggregate potency decides the melody exchange; the winner's own
        // monster registry supplies any combo. Runs before the buffers are
        // applied, so a combo's power buffs land on this turn's application.
        let (melody_winner, combo) = self.resolve_combo(&action_a, &action_b, &outcomes);

        let mut health_deltas = [[0.0; Melody::LEN]; PlayerSide::COUNT];
        for (i, player) in self.players.iter_mut().enumerate() {
            health_deltas[i] = player.apply_health_change();
        }

        for player in &mut self.players {
            player.apply_persistent_effects();
        }

        self.phase = self.check_game_over();

        Ok(TurnReport {
            turn: self.turn,
            names: [
                self.players[0].name().to_owned(),
                self.players[1].name().to_owned(),
            ],
            notes,
            health_deltas,
            melody_winner,
            combo,
            healths: [self.players[0].health(), self.players[1].health()],
            phase: self.phase,
        })
    }

    /// Decides one slot: winner by score sign, health buffers by the winning
    /// note's skill. A zero score is a tie nobody wins.
    fn decide_note(
        &mut self,
        slot: usize,
        score: f64,
        action_a: &TurnAction,
        action_b: &TurnAction,
    ) -> NoteOutcome {
        if score == 0.0 {
            return NoteOutcome {
                score,
                winner: None,
                skill: None,
            };
        }
        let (winner, action) = if score > 0.0 {
            (PlayerSide::A, action_a)
        } else {
            (PlayerSide::B, action_b)
        };
        let potency = score.abs();
        let skill = action.melody.note(slot).skill();

        let (winner_state, loser_state) = self.pair_mut(winner);
        match skill {
            NoteSkill::Heal => {
                winner_state.set_health_change(
                    slot,
                    BattleConfig::HEAL_SCALAR * potency * winner_state.heal_power,
                );
            }
            NoteSkill::LifeSteal => {
                // Both halves move by the winner's scalar; the loser's own
                // powers never enter a steal.
                let amount = potency * winner_state.life_steal_power;
                winner_state.set_health_change(slot, amount);
                loser_state.set_health_change(slot, -amount);
            }
            NoteSkill::Damage => {
                loser_state.set_health_change(
                    slot,
                    -BattleConfig::DAMAGE_SCALAR * potency * winner_state.damage_power,
                );
            }
        }

        NoteOutcome {
            score,
            winner: Some(winner),
            skill: Some(skill),
        }
    }

    /// Resolves the melody exchange from the aggregate score.
    fn resolve_combo(
        &mut self,
        action_a: &TurnAction,
        action_b: &TurnAction,
        outcomes: &[f64; Melody::LEN],
    ) -> (Option<PlayerSide>, Option<ComboTrigger>) {
        let aggregate: f64 = outcomes.iter().sum();
        if aggregate == 0.0 {
            return (None, None);
        }
        let (winner, action) = if aggregate > 0.0 {
            (PlayerSide::A, action_a)
        } else {
            (PlayerSide::B, action_b)
        };
        let potency = aggregate.abs();

        let (caster, enemy) = self.pair_mut(winner);
        let combo = caster
            .monster()
            .find_combo(&action.melody)
            .map(|combo| (combo.name, combo.power));
        let trigger = combo.map(|(name, power)| {
            power.apply(caster, enemy, potency);
            ComboTrigger {
                name: name.to_owned(),
                power,
            }
        });
        (Some(winner), trigger)
    }

    /// Splits the participant table into (subject, opponent) borrows.
    fn pair_mut(&mut self, side: PlayerSide) -> (&mut PlayerState, &mut PlayerState) {
        let [a, b] = &mut self.players;
        match side {
            PlayerSide::A => (a, b),
            PlayerSide::B => (b, a),
        }
    }

    fn check_game_over(&self) -> BattlePhase {
        match (self.players[0].is_defeated(), self.players[1].is_defeated()) {
            (true, true) => BattlePhase::GameOver { winner: None },
            (true, false) => BattlePhase::GameOver {
                winner: Some(PlayerSide::B),
            },
            (false, true) => BattlePhase::GameOver {
                winner: Some(PlayerSide::A),
            },
            (false, false) => BattlePhase::Complete,
        }
    }
}
