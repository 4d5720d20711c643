//! Static battle content: built-in combos, monsters, and player archetypes.
//!
//! Content is consumed by the runtime when setting up a battle and never
//! appears in core state. Everything here is compiled in; the core stays
//! data-driven through the registries these builders fill.

pub mod archetypes;
pub mod combos;
pub mod monsters;

pub use archetypes::{bard, killer};
pub use combos::{EXECUTE, EXECUTE_SHORT, MINOR_AMPLIFY, MINOR_HEAL};
pub use monsters::{the_chorister, the_unseen};
