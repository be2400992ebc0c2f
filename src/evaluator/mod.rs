pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::HAND_SIZE;
use std::fmt;

/// Poker hand category from weakest (1) to strongest (9).
///
/// The category is the only thing hands are compared on; two hands of the
/// same category tie regardless of rank height or kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPairs = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPairs => "Two Pairs",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Category {
    type Error = EvalError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.ordinal() == value)
            .ok_or(EvalError::UnknownCategory(value))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("hand must contain exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error("unknown category: {0}")]
    UnknownCategory(u8),
}

/// Display name for a raw category ordinal.
///
/// ```
/// use draw_poker::evaluator::{category_name, EvalError};
///
/// assert_eq!(category_name(7).unwrap(), "Full House");
/// assert_eq!(category_name(0), Err(EvalError::UnknownCategory(0)));
/// ```
pub fn category_name(value: u8) -> Result<&'static str, EvalError> {
    Category::try_from(value).map(Category::name)
}

/// Classify exactly five cards. Card order does not matter.
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::evaluator::{classify, Category};
///
/// let cards = parse_cards("4♣ 5♦ 6♥ 7♠ 8♣").unwrap();
/// assert_eq!(classify(&cards).unwrap(), Category::Straight);
/// ```
pub fn classify(cards: &[Card]) -> Result<Category, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let five: &[Card; HAND_SIZE] =
        cards.try_into().map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

    // One analysis feeds every detector
    let analysis = HandAnalysis::new(five);

    let category = DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.category())
        .unwrap_or(Category::HighCard);
    log::trace!("classified {category}");
    Ok(category)
}
