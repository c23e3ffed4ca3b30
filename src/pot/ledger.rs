use super::level::Level;
use crate::Chips;
use crate::play::Player;

/// Deepest chain the ledger will build. One level per distinct all-in
/// amount plus the table bet, so a legal table never gets close.
pub const MAX_LEVELS: usize = 64;

/// The money on the table for one hand.
///
/// The ledger records how much each player has risked in total this hand
/// and whether that player is all-in. The chain of pots is never patched
/// in place: after every commitment it is rebuilt from those totals, with
/// a level boundary at each distinct all-in amount below the table bet.
/// The first level is the main pot, every later one a side pot that only
/// deeper stacks contest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    stakes: Vec<Stake>,
    levels: Vec<Level>,
}

/// One player's running total for the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stake {
    id: String,
    risked: Chips,
    shoved: bool,
}

impl Default for Pot {
    fn default() -> Self {
        Self {
            stakes: Vec::new(),
            levels: vec![Level::default()],
        }
    }
}

/// Forced bets.
impl Pot {
    /// Takes an equal ante from one player, before any betting.
    pub fn collect_ante(&mut self, player: &mut Player, amount: Chips) -> Chips {
        let chips = amount.min(player.stack());
        self.commit(player, chips)
    }
    /// The big blind is a raise from nothing to `amount`.
    pub fn collect_big_blind(&mut self, player: &mut Player, amount: Chips) -> Chips {
        let chips = amount.min(player.stack());
        self.commit(player, chips)
    }
    /// Takes half the big blind, rounded up.
    pub fn collect_small_blind(&mut self, player: &mut Player, big_blind: Chips) -> Chips {
        let chips = Self::small_blind(big_blind).min(player.stack());
        self.commit(player, chips)
    }
    pub fn small_blind(big_blind: Chips) -> Chips {
        big_blind.div_ceil(2)
    }
}

/// Betting.
impl Pot {
    /// Raises the table bet by `amount` on top of whatever the player owes.
    ///
    /// The commitment is capped by the player's stack, which leaves them
    /// all-in with a smaller raise. Returns `None` without touching
    /// anything if the stack cannot even cover what is owed. Otherwise
    /// returns the net raise beyond the owed amount.
    ///
    /// A player already flagged all-in first calls, then raises with
    /// whatever is left of `amount`. Nothing left means a raise of 0.
    pub fn raise(&mut self, player: &mut Player, amount: Chips) -> Option<Chips> {
        if player.is_all_in() {
            let called = self.call(player);
            let excess = amount.saturating_sub(called).min(player.stack());
            return Some(self.commit(player, excess));
        }
        let owed = self.total_owed(player.id());
        let chips = player.stack().min(amount.saturating_add(owed));
        if chips < owed {
            log::debug!("{} cannot cover {} owed with {}", player.id(), owed, chips);
            return None;
        }
        self.commit(player, chips);
        Some(chips - owed)
    }
    /// Pushes the player's whole stack in.
    pub fn all_in(&mut self, player: &mut Player) -> Chips {
        player.shove();
        let stack = player.stack();
        self.raise(player, stack).unwrap_or_default()
    }
    /// Matches the table bet, or as much of it as the stack allows.
    pub fn call(&mut self, player: &mut Player) -> Chips {
        let owed = self.total_owed(player.id());
        let chips = owed.min(player.stack());
        self.commit(player, chips)
    }
    /// A check is fine for anyone who owes nothing, and for anyone all-in.
    pub fn check(&self, player: &Player) -> bool {
        player.is_all_in() || self.cleared(player.id())
    }
    /// Marks the end of a betting round. The table bet carries into the
    /// next street, so nothing moves; the chain is only re-verified.
    pub fn new_turn(&mut self) {
        self.verify();
        log::debug!("round closed with {}", self);
    }
    /// Empties the ledger for the next hand.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Queries.
impl Pot {
    /// The main pot.
    pub fn main(&self) -> &Level {
        &self.levels[0]
    }
    /// The first side pot, if there is one.
    pub fn side_pot(&self) -> Option<&Level> {
        self.levels.get(1)
    }
    /// Main pot first, then each side pot.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
    pub fn has_side_pot(&self) -> bool {
        self.levels.len() > 1
    }
    /// Money in the main pot only.
    pub fn money(&self) -> Chips {
        self.main().money()
    }
    /// Money across the whole chain.
    pub fn total_money(&self) -> Chips {
        self.levels.iter().map(Level::money).sum()
    }
    /// Bet of the main pot only.
    pub fn current_bet(&self) -> Chips {
        self.main().bet()
    }
    /// The amount everyone still betting has to reach.
    pub fn total_bets(&self) -> Chips {
        self.levels.iter().map(Level::bet).sum()
    }
    /// Contribution to the main pot only.
    pub fn contribution(&self, id: &str) -> Chips {
        self.main().contribution(id)
    }
    pub fn total_contribution(&self, id: &str) -> Chips {
        self.stake(id).map(|s| s.risked).unwrap_or_default()
    }
    pub fn total_owed(&self, id: &str) -> Chips {
        self.total_bets()
            .checked_sub(self.total_contribution(id))
            .expect("contribution above the table bet")
    }
    pub fn cleared(&self, id: &str) -> bool {
        self.total_owed(id) == 0
    }
    /// Players in the main pot.
    pub fn participants(&self) -> impl Iterator<Item = &str> + '_ {
        self.main().participants()
    }
}

/// Reconciliation.
impl Pot {
    /// Moves chips from the player's stack into the ledger, flags the
    /// player all-in when the stack runs out, and rebuilds the chain.
    fn commit(&mut self, player: &mut Player, chips: Chips) -> Chips {
        let chips = player.bet(chips);
        let shoved = player.is_active() && player.is_broke();
        if shoved {
            player.shove();
        }
        let index = match self.stakes.iter().position(|s| s.id == player.id()) {
            Some(index) => index,
            None => {
                self.stakes.push(Stake {
                    id: player.id().to_string(),
                    risked: 0,
                    shoved: false,
                });
                self.stakes.len() - 1
            }
        };
        let stake = &mut self.stakes[index];
        stake.risked += chips;
        stake.shoved |= shoved;
        self.reconcile();
        chips
    }

    /// Recomputes every level from the players' totals.
    fn reconcile(&mut self) {
        let before = self.stakes.iter().map(|s| s.risked).sum::<Chips>();
        let top = self.stakes.iter().map(|s| s.risked).max().unwrap_or_default();
        let mut ceilings = self
            .stakes
            .iter()
            .filter(|s| s.shoved)
            .map(|s| s.risked)
            .filter(|r| *r > 0 && *r < top)
            .collect::<Vec<Chips>>();
        ceilings.sort_unstable();
        ceilings.dedup();
        ceilings.push(top);
        assert!(
            ceilings.len() <= MAX_LEVELS,
            "pot chain deeper than {} levels",
            MAX_LEVELS
        );
        let mut floor = 0;
        self.levels = ceilings
            .into_iter()
            .map(|ceiling| {
                let risked = self.stakes.iter().map(|s| (s.id.as_str(), s.risked));
                let level = Level::carve(floor, ceiling, risked);
                floor = ceiling;
                level
            })
            .collect();
        let after = self.total_money();
        assert!(
            before == after,
            "pot lost money: {} risked but {} in the chain",
            before,
            after
        );
    }

    /// Checks the chain against the totals.
    fn verify(&self) {
        for stake in self.stakes.iter() {
            let spread = self
                .levels
                .iter()
                .map(|level| level.contribution(&stake.id))
                .sum::<Chips>();
            assert!(
                spread == stake.risked,
                "{} risked {} but holds {} across the chain",
                stake.id,
                stake.risked,
                spread
            );
        }
        for level in self.levels.iter() {
            assert!(
                level.participants().all(|id| level.contribution(id) <= level.bet()),
                "contribution above level bet in {}",
                level
            );
        }
    }

    fn stake(&self, id: &str) -> Option<&Stake> {
        self.stakes.iter().find(|s| s.id == id)
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            match i {
                0 => write!(f, "main {}", level)?,
                _ => write!(f, " | side {}", level)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANTE: Chips = 5;

    fn players() -> (Player, Player, Player) {
        (
            Player::from(("player1", 200)),
            Player::from(("player2", 200)),
            Player::from(("player3", 200)),
        )
    }

    fn ducks() -> (Player, Player, Player) {
        (
            Player::from(("Scrooge", 500)),
            Player::from(("Gearloose", 200)),
            Player::from(("Donald", 50)),
        )
    }

    fn names(level: &Level) -> Vec<&str> {
        let mut names = level.participants().collect::<Vec<&str>>();
        names.sort();
        names
    }

    #[test]
    fn ante() {
        let (mut p1, mut p2, mut p3) = players();
        let mut pot = Pot::default();
        pot.collect_ante(&mut p1, ANTE);
        pot.collect_ante(&mut p2, ANTE);
        pot.collect_ante(&mut p3, ANTE);
        assert_eq!(pot.money(), ANTE * 3);
        assert_eq!(pot.current_bet(), ANTE);
        assert_eq!(names(pot.main()), vec!["player1", "player2", "player3"]);
        assert!(!pot.has_side_pot());
    }

    #[test]
    fn ante_and_raise() {
        let (mut p1, mut p2, mut p3) = players();
        let mut pot = Pot::default();
        pot.collect_ante(&mut p1, ANTE);
        pot.collect_ante(&mut p2, ANTE);
        pot.collect_ante(&mut p3, ANTE);
        for _ in 0..2 {
            assert!(pot.check(&p1));
            assert!(pot.check(&p2));
            assert!(pot.check(&p3));
            pot.new_turn();
        }
        assert_eq!(pot.money(), ANTE * 3);
        assert_eq!(pot.current_bet(), ANTE);
        assert!(!pot.has_side_pot());
        assert_eq!(pot.raise(&mut p1, 50), Some(50));
        assert_eq!(pot.total_contribution("player1"), 55);
        assert_eq!(pot.total_owed("player2"), 50);
        pot.call(&mut p2);
        pot.call(&mut p3);
        pot.new_turn();
        assert_eq!(pot.total_money(), 165);
        assert_eq!(pot.total_contribution("player2"), 55);
        assert_eq!(pot.total_contribution("player3"), 55);
    }

    #[test]
    fn ante_raise_and_fold() {
        let (mut p1, mut p2, _) = players();
        let mut pot = Pot::default();
        pot.collect_ante(&mut p1, ANTE);
        pot.collect_ante(&mut p2, ANTE);
        pot.new_turn();
        pot.raise(&mut p1, 5);
        p1.win(pot.total_money());
        pot.reset();
        assert_eq!(p1.stack(), 205);
        assert_eq!(p2.stack(), 195);
        assert_eq!(pot.total_money(), 0);
    }

    #[test]
    fn raising_and_calling_on_ante_round() {
        let (mut p1, mut p2, mut p3) = players();
        let mut pot = Pot::default();
        pot.collect_ante(&mut p1, ANTE);
        pot.collect_ante(&mut p2, ANTE);
        pot.collect_ante(&mut p3, ANTE);
        pot.raise(&mut p1, 100);
        assert_eq!(pot.money(), 115);
        assert_eq!(pot.current_bet(), 105);
        pot.call(&mut p2);
        assert_eq!(pot.money(), 215);
        assert_eq!(pot.current_bet(), 105);
        pot.call(&mut p3);
        assert_eq!(pot.money(), 315);
        assert!(!pot.has_side_pot());
    }

    #[test]
    fn short_call_makes_side_pot() {
        let mut scrooge = Player::from(("Scrooge", 200));
        let mut donald = Player::from(("Donald", 100));
        let mut pot = Pot::default();
        pot.raise(&mut scrooge, 150);
        assert_eq!(pot.call(&mut donald), 100);
        assert!(donald.is_all_in());
        assert_eq!(pot.money(), 200);
        assert_eq!(pot.current_bet(), 100);
        let side = pot.side_pot().unwrap();
        assert_eq!(side.money(), 50);
        assert_eq!(names(pot.main()), vec!["Donald", "Scrooge"]);
        assert_eq!(names(side), vec!["Scrooge"]);
        assert_eq!(pot.total_money(), 250);
    }

    #[test]
    fn three_way_side_pot() {
        let (mut scrooge, mut gearloose, mut donald) = ducks();
        let mut pot = Pot::default();
        pot.raise(&mut scrooge, 100);
        pot.call(&mut gearloose);
        pot.call(&mut donald);
        assert_eq!(pot.money(), 150);
        assert_eq!(pot.current_bet(), 50);
        let side = pot.side_pot().unwrap();
        assert_eq!(side.money(), 100);
        assert_eq!(names(pot.main()), vec!["Donald", "Gearloose", "Scrooge"]);
        assert_eq!(names(side), vec!["Gearloose", "Scrooge"]);
    }

    #[test]
    fn all_ins() {
        let (mut scrooge, mut gearloose, mut donald) = ducks();
        let mut pot = Pot::default();
        pot.raise(&mut scrooge, 100);
        pot.call(&mut gearloose);
        assert_eq!(pot.all_in(&mut donald), 0);
        assert_eq!(pot.money(), 150);
        assert_eq!(pot.current_bet(), 50);
        assert_eq!(pot.side_pot().map(Level::money), Some(100));
        assert_eq!(names(pot.side_pot().unwrap()), vec!["Gearloose", "Scrooge"]);
        pot.new_turn();
        assert!(pot.check(&scrooge));
        assert_eq!(pot.all_in(&mut gearloose), 100);
        assert!(pot.check(&donald));
        assert_eq!(pot.call(&mut scrooge), 100);
        assert_eq!(pot.total_money(), 450);
        assert_eq!(pot.total_contribution("Donald"), 50);
        assert_eq!(pot.total_contribution("Gearloose"), 200);
        assert_eq!(pot.total_contribution("Scrooge"), 200);
    }

    #[test]
    fn multiple_side_pots() {
        let (mut scrooge, mut gearloose, mut donald) = ducks();
        let mut pot = Pot::default();
        pot.raise(&mut scrooge, 100);
        pot.call(&mut gearloose);
        pot.call(&mut donald);
        assert_eq!(pot.side_pot().map(Level::money), Some(100));
        assert_eq!(pot.total_money(), 250);
        pot.raise(&mut scrooge, 200);
        pot.call(&mut gearloose);
        assert!(pot.check(&donald));
        assert_eq!(names(pot.main()), vec!["Donald", "Gearloose", "Scrooge"]);
        assert_eq!(pot.money(), 150);
        let levels = pot.levels();
        assert_eq!(levels.len(), 3);
        assert_eq!(names(&levels[1]), vec!["Gearloose", "Scrooge"]);
        assert_eq!(levels[1].money(), 300);
        assert_eq!(names(&levels[2]), vec!["Scrooge"]);
        assert_eq!(pot.total_money(), 550);
    }

    #[test]
    fn re_raise_and_split_pot() {
        let (mut p1, mut p2, _) = players();
        let mut pot = Pot::default();
        pot.collect_ante(&mut p1, ANTE);
        pot.collect_ante(&mut p2, ANTE);
        assert_eq!(pot.current_bet(), ANTE);
        pot.raise(&mut p1, 5);
        pot.raise(&mut p2, 5);
        pot.call(&mut p1);
        assert_eq!(pot.money(), 30);
        assert_eq!(p1.stack(), 185);
        assert_eq!(p2.stack(), 185);
        pot.new_turn();
        assert!(pot.check(&p1));
        assert!(pot.check(&p2));
        pot.new_turn();
        assert!(pot.check(&p1));
        pot.raise(&mut p2, 10);
        pot.call(&mut p1);
        pot.new_turn();
        assert!(pot.check(&p1));
        pot.raise(&mut p2, 10);
        pot.call(&mut p1);
        let main = pot.main().clone();
        main.split(&mut [&mut p1, &mut p2]);
        assert_eq!(p1.stack(), 200);
        assert_eq!(p2.stack(), 200);
    }

    #[test]
    fn blinds() {
        let mut p1 = Player::from(("player1", 100));
        let mut p2 = Player::from(("player2", 100));
        let mut p3 = Player::from(("player3", 100));
        let mut pot = Pot::default();
        assert_eq!(Pot::small_blind(5), 3);
        assert_eq!(pot.collect_big_blind(&mut p1, 5), 5);
        assert_eq!(pot.collect_small_blind(&mut p2, 5), 3);
        assert_eq!(pot.total_contribution("player1"), 5);
        assert_eq!(p1.stack(), 95);
        assert_eq!(pot.total_contribution("player2"), 3);
        assert_eq!(p2.stack(), 97);
        assert_eq!(pot.total_contribution("player3"), 0);
        pot.call(&mut p2);
        assert_eq!(pot.total_contribution("player2"), 5);
        pot.call(&mut p3);
        assert_eq!(pot.total_contribution("player3"), 5);
        assert!(pot.check(&p1));
    }

    #[test]
    fn broke_player_calling_raise() {
        let mut p1 = Player::from(("player1", 220));
        let mut p2 = Player::from(("player2", 40));
        let mut p3 = Player::from(("player3", 340));
        let mut pot = Pot::default();
        pot.collect_big_blind(&mut p1, 5);
        pot.collect_small_blind(&mut p2, 5);
        pot.call(&mut p2);
        assert_eq!(pot.money(), 10);
        pot.raise(&mut p1, 20);
        pot.call(&mut p3);
        assert_eq!(pot.money(), 55);
        pot.call(&mut p2);
        assert_eq!(pot.money(), 75);
        assert_eq!(pot.call(&mut p2), 0);
        pot.raise(&mut p1, 10);
        assert_eq!(pot.money(), 85);
        pot.raise(&mut p3, 40);
        assert_eq!(pot.money(), 135);
        assert_eq!(p2.stack(), 15);
        pot.call(&mut p2);
        assert_eq!(pot.contribution("player1"), 35);
        assert_eq!(pot.side_pot().unwrap().contribution("player1"), 0);
        assert_eq!(p2.stack(), 0);
        assert_eq!(pot.total_contribution("player2"), 40);
        assert_eq!(pot.current_bet(), 40);
        pot.call(&mut p1);
        assert_eq!(pot.money(), 120);
        assert_eq!(pot.side_pot().unwrap().money(), 70);
    }

    #[test]
    fn raise_rejected_when_owed_is_out_of_reach() {
        let mut rich = Player::from(("rich", 500));
        let mut poor = Player::from(("poor", 50));
        let mut pot = Pot::default();
        pot.raise(&mut rich, 100);
        assert_eq!(pot.raise(&mut poor, 10), None);
        assert_eq!(poor.stack(), 50);
        assert_eq!(pot.total_contribution("poor"), 0);
        assert!(!pot.check(&poor));
    }

    #[test]
    fn capped_raise_leaves_player_all_in() {
        let mut rich = Player::from(("rich", 500));
        let mut short = Player::from(("short", 80));
        let mut pot = Pot::default();
        pot.raise(&mut rich, 50);
        assert_eq!(pot.raise(&mut short, 100), Some(30));
        assert!(short.is_all_in());
        assert_eq!(pot.total_bets(), 80);
        assert_eq!(pot.total_owed("rich"), 30);
    }

    #[test]
    fn money_is_conserved() {
        let (mut scrooge, mut gearloose, mut donald) = ducks();
        let total = |pot: &Pot, ps: [&Player; 3]| {
            pot.total_money() + ps.iter().map(|p| p.stack()).sum::<Chips>()
        };
        let mut pot = Pot::default();
        let start = total(&pot, [&scrooge, &gearloose, &donald]);
        pot.collect_ante(&mut scrooge, 10);
        pot.collect_ante(&mut gearloose, 10);
        pot.collect_ante(&mut donald, 10);
        pot.raise(&mut gearloose, 60);
        pot.all_in(&mut donald);
        pot.raise(&mut scrooge, 300);
        pot.call(&mut gearloose);
        pot.new_turn();
        assert_eq!(total(&pot, [&scrooge, &gearloose, &donald]), start);
        assert_eq!(pot.levels().len(), 3);
        assert!(gearloose.is_all_in());
        assert!(!scrooge.is_all_in());
    }
}
