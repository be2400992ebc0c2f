use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::deck::{DealError, Deck, DECK_SIZE};
use draw_poker::hand::{HandError, HAND_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn four_hands_leave_thirty_two_cards() {
    let mut deck = Deck::shuffled();
    let hands: Vec<_> = (0..4).map(|_| deck.deal(HAND_SIZE).expect("enough cards")).collect();
    assert_eq!(deck.len(), 32);

    let dealt: HashSet<Card> = hands.iter().flat_map(|h| h.as_slice().iter().copied()).collect();
    assert_eq!(dealt.len(), 20);
    assert!(deck.as_slice().iter().all(|c| !dealt.contains(c)));
}

#[test]
fn seeded_shuffles_repeat_and_differ_by_seed() {
    let mut a = Deck::standard();
    let mut b = Deck::standard();
    a.shuffle_seeded(7);
    b.shuffle_seeded(7);
    assert_eq!(a, b);
    b.shuffle_seeded(8);
    assert_ne!(a, b);
}

#[test]
fn caller_supplied_rng_matches_the_seeded_shuffle() {
    let mut a = Deck::standard();
    let mut b = Deck::standard();
    a.shuffle_seeded(99);
    b.shuffle_with(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn shuffled_deck_keeps_every_card() {
    let deck = Deck::shuffled();
    let set: HashSet<Card> = deck.as_slice().iter().copied().collect();
    assert_eq!(set.len(), DECK_SIZE);
}

#[test]
fn deal_takes_from_the_top() {
    let mut deck = Deck::standard();
    let hand = deck.deal(2).unwrap();
    assert_eq!(hand.get(0), Some(Card::new(Rank::Ace, Suit::Spades)));
    assert_eq!(hand.get(1), Some(Card::new(Rank::King, Suit::Spades)));
    assert_eq!(deck.draw(), Some(Card::new(Rank::Queen, Suit::Spades)));
}

#[test]
fn dealing_zero_cards_is_allowed() {
    let mut deck = Deck::standard();
    let hand = deck.deal(0).unwrap();
    assert!(hand.is_empty());
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn overdealing_fails_without_consuming() {
    let mut deck = Deck::standard();
    for _ in 0..10 {
        deck.deal(HAND_SIZE).unwrap();
    }
    assert_eq!(deck.len(), 2);
    assert_eq!(
        deck.deal(HAND_SIZE),
        Err(DealError::InsufficientCards { requested: 5, remaining: 2 })
    );
    assert_eq!(deck.len(), 2);
}

#[test]
fn replacing_swaps_in_the_top_card() {
    let mut deck = Deck::standard();
    let mut hand = deck.deal(HAND_SIZE).unwrap();
    let before = hand.clone();
    let discarded = hand.replace_card(2, &mut deck).unwrap();
    assert_eq!(Some(discarded), before.get(2));
    assert_eq!(hand.get(2), Some(Card::new(Rank::Nine, Suit::Spades)));
    assert_eq!(hand.len(), HAND_SIZE);
    assert_eq!(deck.len(), DECK_SIZE - HAND_SIZE - 1);
    // Untouched positions stay put.
    for i in [0, 1, 3, 4] {
        assert_eq!(hand.get(i), before.get(i));
    }
}

#[test]
fn replacing_an_invalid_position_changes_nothing() {
    let mut deck = Deck::standard();
    let mut hand = deck.deal(HAND_SIZE).unwrap();
    let (hand_before, deck_before) = (hand.clone(), deck.clone());
    assert_eq!(
        hand.replace_card(5, &mut deck),
        Err(HandError::InvalidPosition { position: 5, len: 5 })
    );
    assert_eq!(hand, hand_before);
    assert_eq!(deck, deck_before);
}

#[test]
fn replacing_from_an_empty_deck_fails() {
    let mut deck = Deck::standard();
    let mut hand = deck.deal(HAND_SIZE).unwrap();
    let _rest = deck.deal(deck.len()).unwrap();
    assert!(deck.is_empty());
    let before = hand.clone();
    assert_eq!(
        hand.replace_card(0, &mut deck),
        Err(HandError::Deal(DealError::InsufficientCards { requested: 1, remaining: 0 }))
    );
    assert_eq!(hand, before);
}
