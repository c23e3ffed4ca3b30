use super::card::Card;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::hole::Hole;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength.
///
/// Built from an unordered set of Cards. The Ranking decides first,
/// the kicker cards break ties, and two Strengths that compare equal
/// split the pot.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    /// Classification shown to players, e.g. "Flush".
    pub fn label(&self) -> &'static str {
        self.value.label()
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

/// best hand out of two hole cards and up to five community cards
impl From<(Hole, &[Card])> for Strength {
    fn from((hole, board): (Hole, &[Card])) -> Self {
        Self::from(Hand::add(Hand::from(hole), Hand::from(board)))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(hole: &str, board: &str) -> Strength {
        let hole = Hand::try_from(hole).unwrap().collect::<Vec<Card>>();
        let board = Hand::try_from(board).unwrap().collect::<Vec<Card>>();
        Strength::from((Hole::from((hole[0], hole[1])), &board[..]))
    }

    #[test]
    fn kicker_breaks_tie() {
        let a = strength("Ah Kd", "As 7c 5d 3h 2s");
        let b = strength("Ac Qd", "As 7c 5d 3h 2s");
        assert!(a > b);
    }

    #[test]
    fn board_plays_for_both() {
        let a = strength("2h 3d", "Ts Js Qs Ks As");
        let b = strength("4h 5d", "Ts Js Qs Ks As");
        assert_eq!(a, b);
        assert_eq!(a.label(), "Royal Flush");
    }

    #[test]
    fn flush_kickers_compare() {
        let a = strength("Kh 2c", "Ah 9h 7h 4h 3d");
        let b = strength("Qh 2d", "Ah 9h 7h 4h 3d");
        assert!(a > b);
    }
}
