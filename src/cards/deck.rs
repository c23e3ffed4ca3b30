use super::card::Card;
use super::hole::Hole;
use rand::Rng;
use rand::seq::SliceRandom;

/// A shuffled deck consumed by sequential draws from the top.
///
/// A fresh deck is built for every hand, so a card is never dealt twice
/// within one hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Builds all 52 cards and shuffles them with the given rng.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all().collect::<Vec<Card>>();
        cards.shuffle(rng);
        Self(cards)
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Removes the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Removes the top two cards as a player's hole.
    pub fn hole(&mut self) -> Option<Hole> {
        let a = self.draw()?;
        let b = self.draw()?;
        Some(Hole::from((a, b)))
    }
}

impl From<Vec<Card>> for Deck {
    /// the last card of the vector is drawn first
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
