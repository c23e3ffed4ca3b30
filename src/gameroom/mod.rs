//! One async room per chat channel, and the lobby that routes to them.
mod channel;
mod lobby;
mod outbox;
mod room;
mod settings;

pub use channel::*;
pub use lobby::*;
pub use outbox::*;
pub use room::*;
pub use settings::*;
