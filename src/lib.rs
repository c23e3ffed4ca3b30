//! Chat-driven Texas Hold'em tables.
//!
//! A table owns the players, the deck and a pot ledger, and advances a hand
//! from deal to showdown as betting commands arrive. Every table is driven
//! by one room actor per chat channel; rooms share a persistent roster.
#![allow(dead_code)]

pub mod cards;
pub mod chat;
pub mod play;
pub mod pot;
pub mod roster;

#[cfg(feature = "server")]
pub mod gameroom;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pot amounts in whole chips.
pub type Chips = u32;
/// Seat index around the table, in join order.
pub type Position = usize;

// ============================================================================
// TABLE DEFAULTS
// ============================================================================
/// Chips each player sits down with.
pub const STACK: Chips = 200;
/// Big blind amount. The small blind is half of it, rounded up.
pub const B_BLIND: Chips = 10;
/// Ante collected from every player before the blinds. Zero disables it.
pub const ANTE: Chips = 0;
/// Seats at one table.
pub const MAX_SEATS: usize = 22;
/// Command prefix recognized in chat lines.
pub const PREFIX: char = '!';

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Exits the process on Ctrl-C without waiting for rooms to settle.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("listen for ctrl-c");
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
