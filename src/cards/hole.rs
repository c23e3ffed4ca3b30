use super::card::Card;
use super::hand::Hand;

/// A player's two private cards, kept in the order they were dealt.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn first(&self) -> Card {
        self.0
    }
    pub fn second(&self) -> Card {
        self.1
    }
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "hole cards must be distinct");
        Self(a, b)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(&hole.cards()[..])
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}
