use crate::cards::{parse_cards, Card};
use crate::deck::{DealError, Deck};
use crate::evaluator::{classify, Category, EvalError};
use std::fmt;
use std::str::FromStr;

/// Number of cards a complete draw-poker hand holds.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("invalid position {position} for a hand of {len} cards")]
    InvalidPosition { position: usize, len: usize },
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// One player's cards for one round.
///
/// Hands are built by [`Deck::deal`] and change only through
/// [`Hand::replace_card`].
///
/// ```
/// use draw_poker::evaluator::Category;
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "Q♣ Q♦ Q♥ 7♠ 7♣".parse().unwrap();
/// assert_eq!(hand.classify().unwrap(), Category::FullHouse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
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

    pub fn get(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    /// Overwrite the card at the 0-based `position` with the deck's top card
    /// and return the discarded card. Discards never go back into the deck.
    ///
    /// Neither the hand nor the deck changes when this fails.
    pub fn replace_card(&mut self, position: usize, deck: &mut Deck) -> Result<Card, HandError> {
        let len = self.cards.len();
        if position >= len {
            return Err(HandError::InvalidPosition { position, len });
        }
        let Some(fresh) = deck.draw() else {
            return Err(DealError::InsufficientCards { requested: 1, remaining: 0 }.into());
        };
        Ok(std::mem::replace(&mut self.cards[position], fresh))
    }

    /// Category of this hand; requires exactly five cards.
    pub fn classify(&self) -> Result<Category, EvalError> {
        classify(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Hand::new(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn replace_card_swaps_in_the_top_card() {
        let mut deck = Deck::standard();
        let mut hand = deck.deal(5).unwrap();
        let top = Card::new(Rank::Nine, Suit::Spades);
        let discarded = hand.replace_card(2, &mut deck).unwrap();
        assert_eq!(discarded, Card::new(Rank::Queen, Suit::Spades));
        assert_eq!(hand.get(2), Some(top));
        assert_eq!(hand.len(), 5);
        assert_eq!(deck.len(), 46);
    }

    #[test]
    fn replace_card_rejects_out_of_range_position() {
        let mut deck = Deck::shuffled();
        let mut hand = deck.deal(5).unwrap();
        let before = hand.clone();
        let err = hand.replace_card(5, &mut deck).unwrap_err();
        assert_eq!(err, HandError::InvalidPosition { position: 5, len: 5 });
        assert_eq!(hand, before);
        assert_eq!(deck.len(), 47);
    }

    #[test]
    fn replace_card_on_empty_deck_fails() {
        let mut deck = Deck::standard();
        let mut hand = deck.deal(5).unwrap();
        let _ = deck.deal(47).unwrap();
        let before = hand.clone();
        let err = hand.replace_card(0, &mut deck).unwrap_err();
        assert!(matches!(err, HandError::Deal(DealError::InsufficientCards { .. })));
        assert_eq!(hand, before);
    }

    #[test]
    fn display_and_parse() {
        let hand: Hand = "10♣ 10♦ 2♥ 5♠ 9♣".parse().unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.to_string(), "10♣ 10♦ 2♥ 5♠ 9♣");
        assert!(matches!("10♣ zz".parse::<Hand>(), Err(HandError::CardParse(_))));
    }
}
