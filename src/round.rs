//! Cross-player resolution: who won a round and how chips move afterwards.

use crate::evaluator::{Category, EvalError};
use crate::hand::Hand;
use std::collections::BTreeMap;

/// Seat index of a player at the table (0-based; shown to people as `P1`..).
pub type PlayerId = usize;

/// Settlement policy applied after every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payouts {
    /// Balance a player starts with the first time they are settled.
    pub starting_chips: i64,
    /// Added to every winner.
    pub reward: i64,
    /// Taken from everyone who did not win.
    pub penalty: i64,
}

impl Default for Payouts {
    fn default() -> Self {
        Self { starting_chips: 100, reward: 10, penalty: 25 }
    }
}

/// Result of comparing every hand of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Category of each hand, indexed by player.
    pub categories: Vec<Category>,
    /// Highest category seen; `None` when there were no hands.
    pub winning: Option<Category>,
    /// Every player whose hand reached `winning`, in seat order.
    pub winners: Vec<PlayerId>,
}

impl RoundOutcome {
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }
}

/// Classify every hand and collect the players sharing the best category.
/// Equal categories are co-winners; no kicker decides between them.
///
/// ```
/// use draw_poker::evaluator::Category;
/// use draw_poker::hand::Hand;
/// use draw_poker::round::resolve_winners;
///
/// let hands: Vec<Hand> = ["2♣ 5♦ 7♥ 9♠ K♣", "10♣ 10♦ 2♥ 5♠ 9♣", "10♥ 10♠ 3♥ 6♠ 8♣"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let outcome = resolve_winners(&hands).unwrap();
/// assert_eq!(outcome.winning, Some(Category::Pair));
/// assert_eq!(outcome.winners, vec![1, 2]);
/// ```
pub fn resolve_winners(hands: &[Hand]) -> Result<RoundOutcome, EvalError> {
    let categories = hands.iter().map(Hand::classify).collect::<Result<Vec<_>, _>>()?;

    let mut winning: Option<Category> = None;
    let mut winners: Vec<PlayerId> = Vec::new();
    for (player, &category) in categories.iter().enumerate() {
        match winning {
            Some(best) if category < best => {}
            Some(best) if category == best => winners.push(player),
            _ => {
                winning = Some(category);
                winners.clear();
                winners.push(player);
            }
        }
    }

    Ok(RoundOutcome { categories, winning, winners })
}

/// Running chip totals per player. Balances may go negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipBalances {
    chips: BTreeMap<PlayerId, i64>,
}

impl ChipBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every player in `players` starting at `starting_chips`.
    pub fn seeded(players: &[PlayerId], starting_chips: i64) -> Self {
        Self { chips: players.iter().map(|&p| (p, starting_chips)).collect() }
    }

    pub fn get(&self, player: PlayerId) -> Option<i64> {
        self.chips.get(&player).copied()
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.chips.iter().map(|(&p, &c)| (p, c))
    }

    fn adjust(&mut self, player: PlayerId, starting_chips: i64, delta: i64) {
        let entry = self.chips.entry(player).or_insert(starting_chips);
        *entry += delta;
    }
}

/// Reward every winner and charge everyone else, regardless of margin.
///
/// ```
/// use draw_poker::round::{settle_chips, ChipBalances, Payouts};
///
/// let balances = settle_chips(ChipBalances::new(), &[1, 2], &[0, 1, 2, 3], &Payouts::default());
/// assert_eq!(balances.get(0), Some(75));
/// assert_eq!(balances.get(1), Some(110));
/// ```
pub fn settle_chips(
    mut balances: ChipBalances,
    winners: &[PlayerId],
    players: &[PlayerId],
    payouts: &Payouts,
) -> ChipBalances {
    for &player in players {
        let delta = if winners.contains(&player) { payouts.reward } else { -payouts.penalty };
        balances.adjust(player, payouts.starting_chips, delta);
    }
    balances
}

/// Players whose balance is zero or below. Reporting only; ending the session
/// is up to the caller.
pub fn check_eliminated(balances: &ChipBalances) -> Vec<PlayerId> {
    balances.iter().filter(|&(_, chips)| chips <= 0).map(|(player, _)| player).collect()
}
