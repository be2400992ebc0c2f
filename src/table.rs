use crate::cards::Card;
use crate::deck::{DealError, Deck, DECK_SIZE};
use crate::evaluator::{Category, EvalError};
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::round::{
    check_eliminated, resolve_winners, settle_chips, ChipBalances, Payouts, PlayerId, RoundOutcome,
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// No round dealt yet.
    Waiting,
    /// Players take turns replacing cards.
    Drawing,
    /// Round resolved and settled; the next round can be dealt.
    Showdown,
    /// Someone ran out of chips; no further rounds.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundVerb {
    Deal,
    Replace,
    Stand,
    Win,
    Lose,
    Eliminated,
}

impl RoundVerb {
    pub fn label(self) -> &'static str {
        match self {
            RoundVerb::Deal => "Deal",
            RoundVerb::Replace => "Replace",
            RoundVerb::Stand => "Stand",
            RoundVerb::Win => "Win",
            RoundVerb::Lose => "Lose",
            RoundVerb::Eliminated => "Out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundLogEntry {
    pub round: u32,
    pub seat: PlayerId,
    pub verb: RoundVerb,
    pub detail: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("at least two players are required, got {0}")]
    TooFewPlayers(usize),
    #[error("a round could need {needed} cards but the deck holds {}", DECK_SIZE)]
    DeckTooSmall { needed: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no round is in its drawing phase")]
    NotDrawing,
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("P{} cannot act, P{} is to act", .seat + 1, .current + 1)]
    NotYourTurn { seat: PlayerId, current: PlayerId },
    #[error("replacement limit of {limit} reached")]
    ReplacementLimit { limit: usize },
    #[error("the game is over")]
    GameOver,
    #[error("{waiting} player(s) have not finished their turn")]
    TurnsPending { waiting: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("hand evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

/// Table setup for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub players: usize,
    /// Cards each player may swap per round.
    pub max_replacements: usize,
    pub payouts: Payouts,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { players: 4, max_replacements: 2, payouts: Payouts::default() }
    }
}

impl TableConfig {
    /// Every player must be able to take a full hand plus all their
    /// replacements from one deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players < 2 {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        let needed = self.players * (HAND_SIZE + self.max_replacements);
        if needed > DECK_SIZE {
            return Err(ConfigError::DeckTooSmall { needed });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Seat {
    pub(crate) name: String,
    pub(crate) hand: Option<Hand>,
    pub(crate) replacements: usize,
    pub(crate) stood: bool,
    pub(crate) last_action: Option<String>,
}

impl Seat {
    fn new(name: String) -> Self {
        Self { name, hand: None, replacements: 0, stood: false, last_action: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Cards swapped so far this round.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    pub fn stood(&self) -> bool {
        self.stood
    }

    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }
}

/// A five-card draw session: deals rounds, takes replacements in seat order,
/// then resolves and settles. Balances persist across rounds.
#[derive(Debug)]
#[non_exhaustive]
pub struct Table {
    pub(crate) config: TableConfig,
    pub(crate) deck: Deck,
    pub(crate) seats: Vec<Seat>,
    pub(crate) balances: ChipBalances,
    pub(crate) phase: Phase,
    pub(crate) current: PlayerId,
    pub(crate) round: u32,
    pub(crate) outcome: Option<RoundOutcome>,
    pub(crate) eliminated: Vec<PlayerId>,
    history: VecDeque<RoundLogEntry>,
}

impl Default for Table {
    fn default() -> Self {
        Self::build(TableConfig::default())
    }
}

impl Table {
    /// Oldest history entries are dropped past this many.
    pub const HISTORY_CAPACITY: usize = 512;

    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig) -> Self {
        let seats = (1..=config.players).map(|i| Seat::new(format!("P{i}"))).collect();
        let ids: Vec<PlayerId> = (0..config.players).collect();
        Self {
            config,
            deck: Deck::standard(),
            seats,
            balances: ChipBalances::seeded(&ids, config.payouts.starting_chips),
            phase: Phase::Waiting,
            current: 0,
            round: 0,
            outcome: None,
            eliminated: Vec::new(),
            history: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn num_players(&self) -> usize {
        self.seats.len()
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        (0..self.seats.len()).collect()
    }

    pub fn balances(&self) -> &ChipBalances {
        &self.balances
    }

    pub fn chips(&self, seat: PlayerId) -> i64 {
        self.balances.get(seat).unwrap_or(self.config.payouts.starting_chips)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat whose turn it is while drawing.
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Rounds dealt so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Outcome of the last resolved round.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Category of a seat's hand after the last showdown.
    pub fn showdown_category(&self, seat: PlayerId) -> Option<Category> {
        self.outcome.as_ref().and_then(|o| o.categories.get(seat).copied())
    }

    pub fn eliminated(&self) -> &[PlayerId] {
        &self.eliminated
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    pub fn replacements_left(&self, seat: PlayerId) -> usize {
        self.seats
            .get(seat)
            .map(|s| self.config.max_replacements.saturating_sub(s.replacements))
            .unwrap_or(0)
    }

    pub fn history_recent(&self, n: usize) -> Vec<RoundLogEntry> {
        if n == 0 {
            return Vec::new();
        }
        let start = self.history.len().saturating_sub(n);
        self.history.range(start..).cloned().collect()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<RoundLogEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history.range(start..end).cloned().collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Shuffle a fresh deck and deal five cards to every seat.
    pub fn new_round(&mut self) -> Result<(), ActionError> {
        match self.phase {
            Phase::GameOver => return Err(ActionError::GameOver),
            Phase::Drawing => return Err(ActionError::RoundInProgress),
            Phase::Waiting | Phase::Showdown => {}
        }
        self.deck = Deck::shuffled();
        self.round += 1;
        self.outcome = None;
        self.current = 0;
        log::info!("round {} begins with {} players", self.round, self.seats.len());

        for seat in 0..self.seats.len() {
            let hand = self.deck.deal(HAND_SIZE)?;
            log::debug!("P{} dealt {}", seat + 1, hand);
            let s = &mut self.seats[seat];
            s.hand = Some(hand);
            s.replacements = 0;
            s.stood = false;
            s.last_action = None;
            self.record_history(seat, RoundVerb::Deal, None);
        }
        self.phase = Phase::Drawing;
        Ok(())
    }

    fn ensure_can_act(&self, seat: PlayerId) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Drawing) {
            return Err(ActionError::NotDrawing);
        }
        if seat != self.current {
            return Err(ActionError::NotYourTurn { seat, current: self.current });
        }
        Ok(())
    }

    /// Swap the card at the 0-based `position` of the acting seat's hand for
    /// the top of the deck. Returns the discarded card. Reaching the
    /// replacement limit ends the seat's turn.
    pub fn replace(&mut self, seat: PlayerId, position: usize) -> Result<Card, ActionError> {
        self.ensure_can_act(seat)?;
        let limit = self.config.max_replacements;
        if self.seats[seat].replacements >= limit {
            return Err(ActionError::ReplacementLimit { limit });
        }
        let Some(hand) = self.seats[seat].hand.as_mut() else {
            return Err(ActionError::NotDrawing);
        };
        let discarded = hand.replace_card(position, &mut self.deck)?;
        let drawn = hand.get(position);
        log::debug!("P{} replaced {} at position {}", seat + 1, discarded, position + 1);

        let s = &mut self.seats[seat];
        s.replacements += 1;
        s.last_action = Some(format!("Swap {}", position + 1));
        let detail = match drawn {
            Some(card) => format!("{discarded} -> {card}"),
            None => discarded.to_string(),
        };
        self.record_history(seat, RoundVerb::Replace, Some(detail));

        if self.seats[seat].replacements >= limit {
            self.finish_turn(seat)?;
        }
        Ok(discarded)
    }

    /// Keep the current hand and pass the turn.
    pub fn stand(&mut self, seat: PlayerId) -> Result<(), ActionError> {
        self.ensure_can_act(seat)?;
        self.finish_turn(seat)
    }

    fn finish_turn(&mut self, seat: PlayerId) -> Result<(), ActionError> {
        let s = &mut self.seats[seat];
        s.stood = true;
        if s.last_action.is_none() {
            s.last_action = Some("Stand".to_string());
        }
        self.record_history(seat, RoundVerb::Stand, None);

        if seat + 1 < self.seats.len() {
            self.current = seat + 1;
            Ok(())
        } else {
            self.finish_showdown()
        }
    }

    /// Showdown: classify every hand, settle chips and check for eliminations.
    /// Runs once the last seat has stood.
    fn finish_showdown(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Drawing) {
            return Err(ActionError::NotDrawing);
        }
        let waiting = self.seats.iter().filter(|s| !s.stood).count();
        if waiting > 0 {
            return Err(ActionError::TurnsPending { waiting });
        }
        let hands: Vec<Hand> = self.seats.iter().filter_map(|s| s.hand.clone()).collect();
        let outcome = resolve_winners(&hands)?;

        let players = self.player_ids();
        let balances = std::mem::take(&mut self.balances);
        self.balances = settle_chips(balances, &outcome.winners, &players, &self.config.payouts);

        if let Some(best) = outcome.winning {
            log::info!(
                "round {} won with {} by {:?}",
                self.round,
                best,
                outcome.winners.iter().map(|w| w + 1).collect::<Vec<_>>()
            );
        }
        for &seat in &players {
            let category = outcome.categories.get(seat).map(|c| c.name().to_string());
            let verb = if outcome.is_winner(seat) { RoundVerb::Win } else { RoundVerb::Lose };
            self.record_history(seat, verb, category);
        }

        self.eliminated = check_eliminated(&self.balances);
        for &seat in &self.eliminated.clone() {
            log::warn!("P{} has run out of chips ({})", seat + 1, self.chips(seat));
            self.record_history(seat, RoundVerb::Eliminated, None);
        }

        self.outcome = Some(outcome);
        self.phase = if self.eliminated.is_empty() { Phase::Showdown } else { Phase::GameOver };
        Ok(())
    }

    fn record_history(&mut self, seat: PlayerId, verb: RoundVerb, detail: Option<String>) {
        if self.history.len() == Self::HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(RoundLogEntry { round: self.round, seat, verb, detail });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn mk_table(players: usize) -> Table {
        Table::new(TableConfig { players, ..TableConfig::default() }).expect("valid config")
    }

    fn set_hand(table: &mut Table, seat: PlayerId, cards: &str) {
        table.seats[seat].hand = Some(Hand::new(parse_cards(cards).expect("valid cards")));
    }

    #[test]
    fn config_validation() {
        assert!(TableConfig::default().validate().is_ok());
        let one = TableConfig { players: 1, ..TableConfig::default() };
        assert_eq!(one.validate(), Err(ConfigError::TooFewPlayers(1)));
        let crowded = TableConfig { players: 8, max_replacements: 2, ..TableConfig::default() };
        assert_eq!(crowded.validate(), Err(ConfigError::DeckTooSmall { needed: 56 }));
    }

    #[test]
    fn new_round_deals_five_to_everyone() {
        let mut t = mk_table(4);
        t.new_round().unwrap();
        assert_eq!(t.phase(), Phase::Drawing);
        assert_eq!(t.round(), 1);
        assert_eq!(t.cards_remaining(), 32);
        assert!(t.seats().iter().all(|s| s.hand().map(Hand::len) == Some(5)));
        assert_eq!(t.new_round(), Err(ActionError::RoundInProgress));
    }

    #[test]
    fn turn_order_is_enforced() {
        let mut t = mk_table(3);
        t.new_round().unwrap();
        assert_eq!(t.stand(1), Err(ActionError::NotYourTurn { seat: 1, current: 0 }));
        t.stand(0).unwrap();
        assert_eq!(t.current(), 1);
    }

    #[test]
    fn replacement_limit_ends_turn() {
        let mut t = mk_table(2);
        t.new_round().unwrap();
        t.replace(0, 0).unwrap();
        assert_eq!(t.current(), 0);
        assert_eq!(t.replacements_left(0), 1);
        t.replace(0, 4).unwrap();
        assert_eq!(t.current(), 1);
        assert!(t.seats()[0].stood());
        assert_eq!(t.cards_remaining(), 40);
    }

    #[test]
    fn zero_replacement_limit_rejects_swaps() {
        let cfg = TableConfig { players: 2, max_replacements: 0, ..TableConfig::default() };
        let mut t = Table::new(cfg).unwrap();
        t.new_round().unwrap();
        assert_eq!(t.replace(0, 0), Err(ActionError::ReplacementLimit { limit: 0 }));
    }

    #[test]
    fn invalid_position_keeps_turn_and_hand() {
        let mut t = mk_table(2);
        t.new_round().unwrap();
        let before = t.seats()[0].hand().cloned();
        let err = t.replace(0, 7).unwrap_err();
        assert_eq!(err, ActionError::Hand(HandError::InvalidPosition { position: 7, len: 5 }));
        assert_eq!(t.seats()[0].hand().cloned(), before);
        assert_eq!(t.replacements_left(0), 2);
        assert_eq!(t.current(), 0);
    }

    #[test]
    fn showdown_settles_and_splits_ties() {
        let mut t = mk_table(4);
        t.new_round().unwrap();
        set_hand(&mut t, 0, "4♣ 5♦ 6♥ 7♠ 8♣");
        set_hand(&mut t, 1, "A♠ A♥ A♦ A♣ K♠");
        set_hand(&mut t, 2, "2♠ 2♥ 2♦ 2♣ K♦");
        set_hand(&mut t, 3, "3♣ 3♦ 8♥ 8♠ K♣");
        for seat in 0..4 {
            t.stand(seat).unwrap();
        }
        assert_eq!(t.phase(), Phase::Showdown);
        let outcome = t.outcome().unwrap();
        assert_eq!(outcome.winning, Some(Category::FourOfAKind));
        assert_eq!(outcome.winners, vec![1, 2]);
        assert_eq!(t.chips(0), 75);
        assert_eq!(t.chips(1), 110);
        assert_eq!(t.chips(2), 110);
        assert_eq!(t.chips(3), 75);
        assert_eq!(t.showdown_category(3), Some(Category::TwoPairs));
        assert!(t.eliminated().is_empty());
    }

    #[test]
    fn running_out_of_chips_ends_the_game() {
        let mut t = mk_table(2);
        t.balances = ChipBalances::seeded(&[0, 1], 20);
        t.new_round().unwrap();
        set_hand(&mut t, 0, "2♣ 5♦ 7♥ 9♠ K♣");
        set_hand(&mut t, 1, "10♣ 10♦ 2♥ 5♠ 9♣");
        t.stand(0).unwrap();
        t.stand(1).unwrap();
        assert_eq!(t.phase(), Phase::GameOver);
        assert_eq!(t.eliminated(), &[0]);
        assert_eq!(t.chips(0), -5);
        assert!(t.is_over());
        assert_eq!(t.new_round(), Err(ActionError::GameOver));
    }

    #[test]
    fn showdown_waits_for_every_seat() {
        let mut t = mk_table(4);
        t.new_round().unwrap();
        let chips: Vec<i64> = (0..4).map(|s| t.chips(s)).collect();
        assert_eq!(t.finish_showdown(), Err(ActionError::TurnsPending { waiting: 4 }));
        t.stand(0).unwrap();
        t.stand(1).unwrap();
        assert_eq!(t.finish_showdown(), Err(ActionError::TurnsPending { waiting: 2 }));
        assert_eq!(t.phase(), Phase::Drawing);
        assert!(t.outcome().is_none());
        assert_eq!((0..4).map(|s| t.chips(s)).collect::<Vec<_>>(), chips);
        t.stand(2).unwrap();
        t.stand(3).unwrap();
        assert_eq!(t.phase(), Phase::Showdown);
    }

    #[test]
    fn history_is_capped() {
        let payouts = Payouts { starting_chips: 100, reward: 0, penalty: 0 };
        let mut t = Table::new(TableConfig { players: 2, max_replacements: 0, payouts })
            .expect("valid config");
        // six entries per round: two deals, two stands, win/lose for each seat
        for _ in 0..100 {
            t.new_round().unwrap();
            t.stand(0).unwrap();
            t.stand(1).unwrap();
        }
        assert!(!t.is_over());
        assert_eq!(t.history_len(), Table::HISTORY_CAPACITY);
        let newest = t.history_recent(1);
        assert_eq!(newest[0].round, 100);
        let oldest = t.history_recent_offset(1, Table::HISTORY_CAPACITY);
        assert!(oldest[0].round > 1);
    }

    #[test]
    fn history_records_round_events() {
        let mut t = mk_table(2);
        t.new_round().unwrap();
        t.replace(0, 1).unwrap();
        t.stand(0).unwrap();
        t.stand(1).unwrap();
        let verbs: Vec<RoundVerb> = t.history_recent(10).iter().map(|e| e.verb).collect();
        assert_eq!(verbs[..2], [RoundVerb::Deal, RoundVerb::Deal]);
        assert_eq!(verbs[2], RoundVerb::Replace);
        assert_eq!(verbs[3], RoundVerb::Stand);
        assert_eq!(verbs[4], RoundVerb::Stand);
        assert_eq!(verbs.len(), 7);
        assert_eq!(t.history_recent_offset(2, 5).len(), 2);
        assert!(t.history_recent(0).is_empty());
    }
}
