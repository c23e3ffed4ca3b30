mod command;
mod dispatch;

pub use command::*;
pub use dispatch::*;
