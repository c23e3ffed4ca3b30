use crate::Chips;
use crate::play::Player;

/// One pot in the chain: the money every participant put in between a
/// floor and a ceiling of total contribution.
///
/// `bet` is the distance between floor and ceiling, so no contribution
/// at this level can exceed it. Contributions are kept in the order
/// players first put chips in, and only positive amounts are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Level {
    bet: Chips,
    stakes: Vec<(String, Chips)>,
}

impl Level {
    /// Money at this level only.
    pub fn money(&self) -> Chips {
        self.stakes.iter().map(|(_, chips)| chips).sum()
    }
    /// The amount each participant must have in this level to be square.
    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn contribution(&self, id: &str) -> Chips {
        self.stakes
            .iter()
            .find(|(who, _)| who == id)
            .map(|(_, chips)| *chips)
            .unwrap_or_default()
    }
    /// Players with any contribution at this level.
    pub fn participants(&self) -> impl Iterator<Item = &str> + '_ {
        self.stakes.iter().map(|(id, _)| id.as_str())
    }
    pub fn contains(&self, id: &str) -> bool {
        self.stakes.iter().any(|(who, _)| who == id)
    }

    /// Divides this level's money evenly among `winners` and credits
    /// their stacks. The indivisible remainder goes one chip at a time to
    /// the winners in the order given. Returns what each winner received.
    pub fn split(&self, winners: &mut [&mut Player]) -> Vec<Chips> {
        assert!(!winners.is_empty(), "split among zero winners");
        let money = self.money();
        let n = winners.len() as Chips;
        let share = money / n;
        let bonus = money % n;
        winners
            .iter_mut()
            .enumerate()
            .map(|(i, winner)| {
                let chips = share + if (i as Chips) < bonus { 1 } else { 0 };
                winner.win(chips);
                chips
            })
            .collect()
    }

    /// Folds another level's money into this one. Used at showdown when a
    /// level has no one left who can win it.
    pub fn absorb(&mut self, other: Level) {
        self.bet += other.bet;
        for (id, chips) in other.stakes {
            match self.stakes.iter_mut().find(|(who, _)| *who == id) {
                Some((_, mine)) => *mine += chips,
                None => self.stakes.push((id, chips)),
            }
        }
    }
}

impl Level {
    /// Carves the slice `(floor, ceiling]` out of every player's total
    /// risked amount.
    pub(super) fn carve<'a, I>(floor: Chips, ceiling: Chips, risked: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Chips)>,
    {
        assert!(floor <= ceiling, "level floor {} above ceiling {}", floor, ceiling);
        let stakes = risked
            .into_iter()
            .map(|(id, total)| (id, total.min(ceiling).saturating_sub(floor)))
            .filter(|(_, chips)| *chips > 0)
            .map(|(id, chips)| (id.to_string(), chips))
            .collect::<Vec<_>>();
        let bet = ceiling - floor;
        debug_assert!(stakes.iter().all(|(_, chips)| *chips <= bet));
        Self { bet, stakes }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "${} (bet {})", self.money(), self.bet)?;
        for (id, chips) in self.stakes.iter() {
            write!(f, " {}:{}", id, chips)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carve_takes_the_slice() {
        let level = Level::carve(50, 200, [("a", 300), ("b", 200), ("c", 50)]);
        assert_eq!(level.bet(), 150);
        assert_eq!(level.money(), 300);
        assert_eq!(level.contribution("a"), 150);
        assert_eq!(level.contribution("b"), 150);
        assert!(!level.contains("c"));
    }

    #[test]
    fn split_hands_out_the_remainder_in_order() {
        let level = Level::carve(0, 101, [("a", 101)]);
        let mut alice = Player::from(("alice", 0));
        let mut bob = Player::from(("bob", 0));
        let shares = level.split(&mut [&mut alice, &mut bob]);
        assert_eq!(shares, vec![51, 50]);
        assert_eq!(alice.stack() + bob.stack(), 101);
    }

    #[test]
    fn absorb_sums_contributions() {
        let mut lower = Level::carve(0, 50, [("a", 100), ("b", 50)]);
        let upper = Level::carve(50, 100, [("a", 100), ("b", 50)]);
        lower.absorb(upper);
        assert_eq!(lower.money(), 150);
        assert_eq!(lower.contribution("a"), 100);
        assert_eq!(lower.bet(), 100);
    }
}
