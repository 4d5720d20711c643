//! Session-level error type.

use cadenza_core::{BattleError, MusicError};

/// Anything that can go wrong while driving a battle session.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Raw note input could not be turned into a valid action.
    #[error(transparent)]
    Music(#[from] MusicError),

    /// The engine rejected the call in its current phase.
    #[error(transparent)]
    Battle(#[from] BattleError),
}
