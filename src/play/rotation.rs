//! Seat arithmetic over the join-ordered player list.
//!
//! Every question of whose turn comes next goes through [`eligible`], so
//! folded and cashed out players are skipped the same way everywhere.
use super::player::Player;
use crate::Position;

/// Can this player be given the turn at all?
pub fn eligible(player: &Player) -> bool {
    !player.is_out()
}

pub fn wrapped_increment(n: usize, index: Position) -> Position {
    (index + 1) % n
}

pub fn wrapped_decrement(n: usize, index: Position) -> Position {
    (index + n - 1) % n
}

/// First eligible seat strictly after `index`, wrapping around.
pub fn next_eligible(players: &[Player], index: Position) -> Position {
    assert!(
        players.iter().any(eligible),
        "no eligible player among {}",
        players.len()
    );
    let n = players.len();
    let mut index = wrapped_increment(n, index % n);
    while !eligible(&players[index]) {
        index = wrapped_increment(n, index);
    }
    index
}

/// Nearest eligible seat at or before `index`, walking backwards.
/// Used to name the last player who has to act in a round.
pub fn last_unfolded(players: &[Player], index: Position) -> Position {
    assert!(
        players.iter().any(eligible),
        "all {} players are folded",
        players.len()
    );
    let n = players.len();
    let mut index = index % n;
    while !eligible(&players[index]) {
        index = wrapped_decrement(n, index);
    }
    index
}

/// Seats in order starting from `start`, wrapping once around.
pub fn clockwise(n: usize, start: Position) -> impl Iterator<Item = Position> {
    (0..n).map(move |i| (start + i) % n)
}
