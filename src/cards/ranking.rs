use super::rank::Rank;

/// A poker hand's category along with the ranks that define it.
///
/// Variant order is hand strength, so the derived Ord compares categories
/// first and the defining ranks second. Kickers break remaining ties.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, all of the flush suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// ranks still available as kickers once the defining ranks are taken
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..) | Ranking::StraightFlush(..) | Ranking::Straight(..) => 0,
        }
    }

    /// Classification shown to players, e.g. "Full House".
    pub fn label(&self) -> &'static str {
        match self {
            Ranking::HighCard(_) => "High Card",
            Ranking::OnePair(_) => "Pair",
            Ranking::TwoPair(..) => "Two Pair",
            Ranking::ThreeOAK(_) => "Three of a Kind",
            Ranking::Straight(_) => "Straight",
            Ranking::Flush(_) => "Flush",
            Ranking::FullHouse(..) => "Full House",
            Ranking::FourOAK(_) => "Four of a Kind",
            Ranking::StraightFlush(Rank::Ace) => "Royal Flush",
            Ranking::StraightFlush(_) => "Straight Flush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "High Card {}", r),
            Ranking::OnePair(r) => write!(f, "Pair of {}", r.plural()),
            Ranking::TwoPair(hi, lo) => write!(f, "Two Pair, {} and {}", hi.plural(), lo.plural()),
            Ranking::ThreeOAK(r) => write!(f, "Three {}", r.plural()),
            Ranking::Straight(r) => write!(f, "Straight, {} high", r),
            Ranking::Flush(r) => write!(f, "Flush, {} high", r),
            Ranking::FullHouse(hi, lo) => {
                write!(f, "Full House, {} full of {}", hi.plural(), lo.plural())
            }
            Ranking::FourOAK(r) => write!(f, "Four {}", r.plural()),
            Ranking::StraightFlush(Rank::Ace) => write!(f, "Royal Flush"),
            Ranking::StraightFlush(r) => write!(f, "Straight Flush, {} high", r),
        }
    }
}
