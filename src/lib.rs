//! draw-poker: five-card draw poker
//!
//! - Standard 52-card deck, seeded or random shuffles
//! - Hand classification into nine categories, no kicker tie-breaks
//! - Round resolution with shared wins and fixed chip settlement
//! - A hot-seat Ratatui table built on top
//!
//! ## Quick start: classify and compare hands
//! ```
//! use draw_poker::evaluator::Category;
//! use draw_poker::hand::Hand;
//! use draw_poker::round::{resolve_winners, settle_chips, ChipBalances, Payouts};
//!
//! let hands: Vec<Hand> = ["2♣ 2♦ 7♥ 9♠ K♣", "J♠ J♥ J♦ 4♣ 8♦"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let outcome = resolve_winners(&hands).unwrap();
//! assert_eq!(outcome.winning, Some(Category::ThreeOfAKind));
//!
//! let balances = settle_chips(ChipBalances::new(), &outcome.winners, &[0, 1], &Payouts::default());
//! assert_eq!(balances.get(0), Some(75));
//! assert_eq!(balances.get(1), Some(110));
//! ```
//!
//! ## TUI
//! Run the interactive table with:
//! ```sh
//! cargo run --bin draw-poker -- --players 4 --max-replacements 2
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod round;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
