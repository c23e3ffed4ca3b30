pub mod config;
pub mod event;
pub mod player;
pub mod rotation;
pub mod sink;
pub mod street;
pub mod table;

pub use config::*;
pub use event::*;
pub use player::*;
pub use sink::*;
pub use street::*;
pub use table::*;
