use crate::Chips;
use crate::cards::Hole;

/// A player's state at the table.
///
/// The identifier never changes over a session. Chips move between
/// `stack` and the pot only through the pot ledger, which is also what
/// flags a player as all-in once the stack runs dry.
///
/// # Fields
///
/// - `id`: stable identity, used as the ledger key
/// - `stack`: chips behind (not committed this hand)
/// - `buyin`: chips the player sat down with, for profit reporting
/// - `cards`: hole cards once dealt (private)
/// - `state`: Betting, Shoving (all-in) or Folding
/// - `active`: false once the player has cashed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    stack: Chips,
    buyin: Chips,
    cards: Option<Hole>,
    state: State,
    active: bool,
}

impl From<(&str, Chips)> for Player {
    fn from((id, stack): (&str, Chips)) -> Self {
        Self {
            id: id.to_string(),
            stack,
            buyin: stack,
            cards: None,
            state: State::Betting,
            active: true,
        }
    }
}

impl Player {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn buyin(&self) -> Chips {
        self.buyin
    }
    pub fn cards(&self) -> Option<Hole> {
        self.cards
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn is_folded(&self) -> bool {
        self.state == State::Folding
    }
    pub fn is_all_in(&self) -> bool {
        self.state == State::Shoving
    }
    pub fn is_broke(&self) -> bool {
        self.stack == 0
    }
    /// Folded or cashed out: never gets the turn, never wins a pot.
    pub fn is_out(&self) -> bool {
        self.is_folded() || !self.active
    }
    /// Net result against the buy-in, as reported to the roster.
    pub fn profit(&self) -> i64 {
        i64::from(self.stack) - i64::from(self.buyin)
    }
}

impl Player {
    /// Takes chips off the stack. A cashed out player pays nothing.
    pub fn bet(&mut self, chips: Chips) -> Chips {
        if !self.active {
            return 0;
        }
        assert!(
            chips <= self.stack,
            "{} cannot bet {} from a stack of {}",
            self.id,
            chips,
            self.stack
        );
        self.stack -= chips;
        chips
    }
    /// Adds winnings to the stack. A cashed out player receives nothing.
    pub fn win(&mut self, chips: Chips) {
        if self.active {
            self.stack += chips;
        }
    }
    pub fn fold(&mut self) {
        self.state = State::Folding;
    }
    pub fn shove(&mut self) {
        self.state = State::Shoving;
    }
    pub fn cashout(&mut self) {
        self.fold();
        self.active = false;
    }
    pub fn deal(&mut self, cards: Hole) {
        self.cards = Some(cards);
    }
    /// Clears per-hand state before the next deal.
    pub fn reset_hand(&mut self) {
        self.state = State::Betting;
        self.cards = None;
    }
    /// Starts a fresh session with `stack` chips.
    pub fn reset_stack(&mut self, stack: Chips) {
        self.stack = stack;
        self.buyin = stack;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} ${}", self.state, self.id, self.stack)
    }
}

/// Player betting status within a hand.
///
/// - `Betting`: can still make decisions
/// - `Shoving`: all-in, no more decisions but still in the pot
/// - `Folding`: out of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "P"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cashed_out_players_neither_pay_nor_win() {
        let mut player = Player::from(("alice", 100));
        player.cashout();
        assert_eq!(player.bet(10), 0);
        player.win(50);
        assert_eq!(player.stack(), 100);
        assert!(player.is_out());
    }

    #[test]
    fn profit_tracks_buyin() {
        let mut player = Player::from(("bob", 200));
        player.bet(50);
        assert_eq!(player.profit(), -50);
        player.win(120);
        assert_eq!(player.profit(), 70);
    }

    #[test]
    fn new_hand_clears_fold() {
        let mut player = Player::from(("carol", 10));
        player.fold();
        player.reset_hand();
        assert!(!player.is_out());
        assert!(player.cards().is_none());
    }
}
