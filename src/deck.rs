use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// A standard 52-card deck. The top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in suit-major, rank-minor order.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with a fresh seed.
    pub fn shuffled() -> Self {
        let mut deck = Self::standard();
        deck.shuffle();
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle with a seed drawn freshly from the thread RNG, so no two calls
    /// share a permutation stream.
    pub fn shuffle(&mut self) {
        let seed: u64 = rand::rng().random();
        self.shuffle_seeded(seed);
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove `count` cards from the top and return them as a hand, in the
    /// order they were removed. The deck is left untouched on error.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let mut deck = Deck::shuffled();
    /// let hand = deck.deal(5).unwrap();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(deck.len(), 47);
    /// ```
    pub fn deal(&mut self, count: usize) -> Result<Hand, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DealError::InsufficientCards { requested: count, remaining });
        }
        let dealt: Vec<Card> = self.cards.drain(remaining - count..).rev().collect();
        Ok(Hand::new(dealt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), DECK_SIZE);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
    }

    #[test]
    fn standard_deck_is_suit_major() {
        let d = Deck::standard();
        assert_eq!(d.as_slice()[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(d.as_slice()[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(d.as_slice()[13], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(d.as_slice()[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1, d2);
    }

    #[test]
    fn shuffle_keeps_membership() {
        let mut d = Deck::standard();
        d.shuffle();
        let mut shuffled = d.as_slice().to_vec();
        let mut original = Deck::standard().as_slice().to_vec();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn deal_takes_from_the_top_in_removal_order() {
        let mut d = Deck::standard();
        let hand = d.deal(2).unwrap();
        assert_eq!(
            hand.as_slice(),
            &[Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)]
        );
        assert_eq!(d.len(), 50);
        assert_eq!(d.draw(), Some(Card::new(Rank::Queen, Suit::Spades)));
    }

    #[test]
    fn deal_more_than_remaining_fails_without_consuming() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let _ = d.deal(50).unwrap();
        let err = d.deal(5).unwrap_err();
        assert_eq!(err, DealError::InsufficientCards { requested: 5, remaining: 2 });
        assert_eq!(d.len(), 2);
        assert_eq!(d.deal(2).unwrap().len(), 2);
        assert!(d.is_empty());
        assert_eq!(d.draw(), None);
    }
}
