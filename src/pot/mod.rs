mod ledger;
mod level;

pub use ledger::*;
pub use level::*;
