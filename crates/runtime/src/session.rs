//! Synchronous battle session driving the core engine.
//!
//! A [`BattleSession`] owns one [`BattleEngine`] and is what the
//! presentation layer talks to: it parses raw note input into actions,
//! serializes turns, exposes read accessors for rendering, and traces every
//! resolution step. Results are authoritative the moment
//! [`resolve_turn`](BattleSession::resolve_turn) returns; anything a
//! presentation layer animates afterwards must come from the returned
//! [`TurnReport`], never from re-deriving outcomes.

use cadenza_content::killer;
use cadenza_core::{
    BattleConfig, BattleEngine, BattlePhase, PlayerSide, PlayerState, TurnAction, TurnReport,
};

use crate::error::SessionError;

/// One running battle between two fully-set-up players.
pub struct BattleSession {
    engine: BattleEngine,
}

impl BattleSession {
    /// Starts a session over an explicit player pair.
    pub fn new(player_a: PlayerState, player_b: PlayerState) -> Self {
        tracing::info!(
            player_a = %player_a,
            player_b = %player_b,
            "battle session started"
        );
        Self {
            engine: BattleEngine::new(player_a, player_b),
        }
    }

    /// Starts the default duel: two killer-archetype players.
    pub fn duel(
        name_a: impl Into<String>,
        name_b: impl Into<String>,
        config: &BattleConfig,
    ) -> Self {
        Self::new(killer(name_a, config), killer(name_b, config))
    }

    // ========================================================================
    // Turn driving
    // ========================================================================

    /// Parses one side's raw note strings and submits the action.
    pub fn submit(
        &mut self,
        side: PlayerSide,
        chord: &str,
        melody: &str,
    ) -> Result<BattlePhase, SessionError> {
        let action = TurnAction::parse(side, chord, melody)?;
        self.submit_action(action)
    }

    /// Submits an already-built action.
    pub fn submit_action(&mut self, action: TurnAction) -> Result<BattlePhase, SessionError> {
        tracing::debug!(%action, "action submitted");
        Ok(self.engine.submit(action)?)
    }

    /// Resolves the held action pair into a turn report.
    pub fn resolve_turn(&mut self) -> Result<TurnReport, SessionError> {
        let report = self.engine.resolve_turn()?;
        tracing::debug!(turn = report.turn, "turn resolved\n{report}");
        if let BattlePhase::GameOver { winner } = report.phase {
            match winner {
                Some(side) => tracing::info!(winner = report.name(side), "battle over"),
                None => tracing::info!("battle over in a draw"),
            }
        }
        Ok(report)
    }

    /// Drives one whole turn: both submissions plus resolution.
    pub fn battle(
        &mut self,
        action_a: TurnAction,
        action_b: TurnAction,
    ) -> Result<TurnReport, SessionError> {
        self.submit_action(action_a)?;
        self.submit_action(action_b)?;
        self.resolve_turn()
    }

    // ========================================================================
    // Read accessors for the presentation layer
    // ========================================================================

    pub fn phase(&self) -> BattlePhase {
        self.engine.phase()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.engine.phase(), BattlePhase::GameOver { .. })
    }

    pub fn turn(&self) -> u32 {
        self.engine.turn()
    }

    pub fn health(&self, side: PlayerSide) -> f64 {
        self.engine.player(side).health()
    }

    pub fn max_health(&self, side: PlayerSide) -> f64 {
        self.engine.player(side).max_health()
    }

    pub fn name(&self, side: PlayerSide) -> &str {
        self.engine.player(side).name()
    }

    pub fn monster_name(&self, side: PlayerSide) -> &str {
        self.engine.player(side).monster().name
    }
}
