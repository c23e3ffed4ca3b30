//! Persistent per-player statistics.
//!
//! Tables report games played and net winnings through the [`Roster`]
//! port. Persistence is best effort: a failed save is logged by the table
//! and never rolls game state back.
mod memory;
mod shared;
mod stats;
mod store;

pub use memory::*;
pub use shared::*;
pub use stats::*;
pub use store::*;

pub trait Roster {
    /// Adds `delta` (which may be negative) to the player's lifetime winnings.
    fn modify_money(&mut self, id: &str, delta: i64);
    /// Counts one more game for the player.
    fn track_game(&mut self, id: &str);
    /// Flushes pending changes to storage.
    fn save(&mut self) -> anyhow::Result<()>;
    fn stats(&self, id: &str) -> Option<Stats>;
}
