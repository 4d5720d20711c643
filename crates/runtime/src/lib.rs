//! Session orchestration for the rhythm-battler core.
//!
//! This crate wires `cadenza-core` and `cadenza-content` into a cohesive
//! synchronous API. Consumers embed [`BattleSession`] to submit actions,
//! resolve turns, and read battle state for rendering. All rule evaluation
//! lives in the core; this layer adds input parsing, session lifecycle, and
//! tracing instrumentation.
pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::BattleSession;
