use super::rank::Rank;
use super::suit::Suit;

/// A single playing card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// All 52 cards in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..52u8).map(Self::from)
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
/// "Ts" -> Ten of Spades
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Self {
                rank: Rank::try_from(r)?,
                suit: Suit::try_from(u)?,
            }),
            _ => Err(anyhow::anyhow!("invalid card string: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match f.alternate() {
            true => write!(f, "{:#}{:#}", self.rank, self.suit),
            false => write!(f, "{}{}", self.rank, self.suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_when_alternate() {
        let card = Card::try_from("Qh").unwrap();
        assert_eq!(format!("{}", card), "Qh");
        assert_eq!(format!("{:#}", card), "Q♥");
        assert_eq!(Card::try_from("Q♥").unwrap(), card);
    }

    #[test]
    fn bijective_u8() {
        let card = Card::from((Rank::Ten, Suit::Spade));
        assert_eq!(card, Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_u64() {
        let card = Card::from((Rank::Two, Suit::Heart));
        assert_eq!(card, Card::from(u64::from(card)));
    }

    #[test]
    fn parse_and_display() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.to_string(), "Ts");
        assert!(Card::try_from("1x").is_err());
        assert!(Card::try_from("Tsx").is_err());
    }

    #[test]
    fn deck_has_52_unique_cards() {
        let cards = Card::all().collect::<std::collections::HashSet<_>>();
        assert_eq!(cards.len(), 52);
    }
}
