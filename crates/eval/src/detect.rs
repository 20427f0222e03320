// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pattern detectors for five cards hands.
//!
//! Detectors run independently of each other, the [classify](crate::classify)
//! module combines their results.
use std::ops::ControlFlow;

use crate::{Card, Rank, Suit};

/// Returns the flush suit if all cards have the same suit.
pub fn flush(cards: &[Card]) -> Option<Suit> {
    let (first, rest) = cards.split_first()?;
    let suit = first.suit();
    rest.iter().all(|c| c.suit() == suit).then_some(suit)
}

/// Position of the Ace when sorting cards by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AceOrder {
    /// Ace sorts after King.
    High,
    /// Ace sorts before Deuce.
    Low,
}

impl AceOrder {
    /// The rank position in this order, consecutive ranks differ by one.
    pub fn position(self, rank: Rank) -> u8 {
        match (self, rank) {
            (AceOrder::Low, Rank::Ace) => 0,
            _ => rank as u8 + 1,
        }
    }

    /// Sorts cards by rank in this order.
    pub fn sort(self, cards: &mut [Card]) {
        cards.sort_by_key(|c| self.position(c.rank()));
    }
}

/// Returns the highest rank if the cards, sorted with the given order, form
/// a run of consecutive ranks.
///
/// With [AceOrder::High] King to Ace is a regular step so this accepts
/// broadway, with [AceOrder::Low] Ace to Deuce is a regular step so this
/// accepts the wheel.
pub fn straight(sorted: &[Card], order: AceOrder) -> Option<Rank> {
    let consecutive = sorted
        .windows(2)
        .all(|w| order.position(w[0].rank()) + 1 == order.position(w[1].rank()));

    if consecutive {
        sorted.last().map(Card::rank)
    } else {
        None
    }
}

/// Result of counting repeated ranks in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfAKind {
    /// All ranks are distinct.
    Nothing,
    /// Two cards of one rank.
    Pair(Rank),
    /// Two pairs, the higher pair comes first.
    TwoPair(Rank, Rank),
    /// Three cards of one rank.
    ThreeOfAKind(Rank),
    /// Three cards of the first rank and two of the second.
    FullHouse(Rank, Rank),
    /// Four cards of one rank.
    FourOfAKind(Rank),
}

impl OfAKind {
    /// Folds one rank bucket into the scan state, breaks when no later bucket
    /// can change the result.
    fn step(self, rank: Rank, count: u8) -> ControlFlow<OfAKind, OfAKind> {
        use ControlFlow::{Break, Continue};

        match (count, self) {
            (4, _) => Break(OfAKind::FourOfAKind(rank)),
            (3, OfAKind::Pair(pair)) => Break(OfAKind::FullHouse(rank, pair)),
            (3, _) => Continue(OfAKind::ThreeOfAKind(rank)),
            (2, OfAKind::ThreeOfAKind(trips)) => Break(OfAKind::FullHouse(trips, rank)),
            (2, OfAKind::Pair(pair)) => Break(OfAKind::TwoPair(rank.max(pair), rank.min(pair))),
            (2, _) => Continue(OfAKind::Pair(rank)),
            _ => Continue(self),
        }
    }
}

/// Counts repeated ranks, buckets are scanned from Deuce to Ace.
///
/// Cards are not checked for duplicates, five cards of one rank only happen
/// with a repeated card and count as [OfAKind::Nothing].
pub fn of_a_kind(cards: &[Card]) -> OfAKind {
    let mut counts = [0u8; Rank::COUNT];
    for card in cards {
        counts[card.rank() as usize] += 1;
    }

    let buckets = counts.iter().filter(|&&n| n > 0).count();
    if buckets == cards.len() {
        return OfAKind::Nothing;
    }

    let scan = Rank::ranks()
        .zip(counts)
        .try_fold(OfAKind::Nothing, |kind, (rank, count)| kind.step(rank, count));

    match scan {
        ControlFlow::Break(kind) | ControlFlow::Continue(kind) => kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn cards(line: &str) -> Vec<Card> {
        line.split_whitespace()
            .map(|t| Card::parse(t).unwrap())
            .collect()
    }

    fn sorted(line: &str, order: AceOrder) -> Vec<Card> {
        let mut cards = cards(line);
        order.sort(&mut cards);
        cards
    }

    #[test]
    fn flush_suit() {
        assert_eq!(flush(&cards("2h 9h Jh 4h Kh")), Some(Suit::Hearts));
        assert_eq!(flush(&cards("2c 9c Jc 4c Kc")), Some(Suit::Clubs));
        assert_eq!(flush(&cards("2h 9h Jh 4h Ks")), None);
        assert_eq!(flush(&cards("2s 9h Jh 4h Kh")), None);
        assert_eq!(flush(&[]), None);
    }

    #[test]
    fn flush_is_order_independent() {
        let mut rng = rand::rng();
        let mut hand = cards("3d 8d Qd Ad 6d");
        let mut mixed = cards("3d 8d Qd Ad 6s");

        for _ in 0..20 {
            hand.shuffle(&mut rng);
            mixed.shuffle(&mut rng);
            assert_eq!(flush(&hand), Some(Suit::Diamonds));
            assert_eq!(flush(&mixed), None);
        }
    }

    #[test]
    fn ace_positions() {
        assert_eq!(AceOrder::High.position(Rank::Ace), 13);
        assert_eq!(AceOrder::High.position(Rank::King), 12);
        assert_eq!(AceOrder::Low.position(Rank::Ace), 0);
        assert_eq!(AceOrder::Low.position(Rank::Deuce), 1);
    }

    #[test]
    fn straight_ace_high() {
        let hand = sorted("Qh Jd Kc 10s Ah", AceOrder::High);
        assert_eq!(straight(&hand, AceOrder::High), Some(Rank::Ace));

        let hand = sorted("6h 3d 4c 2s 5h", AceOrder::High);
        assert_eq!(straight(&hand, AceOrder::High), Some(Rank::Six));

        let hand = sorted("9h Kd Qc 10s Jh", AceOrder::High);
        assert_eq!(straight(&hand, AceOrder::High), Some(Rank::King));
    }

    #[test]
    fn straight_wheel() {
        let hand = sorted("3s 2h Ad 4c 5c", AceOrder::High);
        assert_eq!(straight(&hand, AceOrder::High), None);

        let hand = sorted("3s 2h Ad 4c 5c", AceOrder::Low);
        assert_eq!(straight(&hand, AceOrder::Low), Some(Rank::Five));
    }

    #[test]
    fn straight_no_wrap_around() {
        for order in [AceOrder::High, AceOrder::Low] {
            let hand = sorted("Kh As 2d 3c 4h", order);
            assert_eq!(straight(&hand, order), None);

            let hand = sorted("Qh Ks As 2c 3h", order);
            assert_eq!(straight(&hand, order), None);
        }
    }

    #[test]
    fn straight_rejects_gaps_and_pairs() {
        for order in [AceOrder::High, AceOrder::Low] {
            let hand = sorted("8s 2h 7d 10c 3s", order);
            assert_eq!(straight(&hand, order), None);

            let hand = sorted("5s 6h 6d 7c 8s", order);
            assert_eq!(straight(&hand, order), None);
        }

        // Broadway with the ace sorted low is not a run.
        let hand = sorted("10s Js Qs Kc As", AceOrder::Low);
        assert_eq!(straight(&hand, AceOrder::Low), None);
    }

    #[test]
    fn of_a_kind_patterns() {
        use OfAKind::*;

        assert_eq!(of_a_kind(&cards("8s 2h 7d 10c 3s")), Nothing);
        assert_eq!(of_a_kind(&cards("8s 2h 8d 10c 3s")), Pair(Rank::Eight));
        assert_eq!(of_a_kind(&cards("8s 2h 8d 4c 4s")), TwoPair(Rank::Eight, Rank::Four));
        assert_eq!(of_a_kind(&cards("Ks 2h Kd Ac As")), TwoPair(Rank::Ace, Rank::King));
        assert_eq!(of_a_kind(&cards("As Ah Ac 4c 5c")), ThreeOfAKind(Rank::Ace));
        assert_eq!(of_a_kind(&cards("4c 4s Ah Ac 4d")), FullHouse(Rank::Four, Rank::Ace));
        assert_eq!(of_a_kind(&cards("As Ah Ac 4c 4d")), FullHouse(Rank::Ace, Rank::Four));
        assert_eq!(of_a_kind(&cards("9s 9h 9c 9d 4d")), FourOfAKind(Rank::Nine));
        assert_eq!(of_a_kind(&cards("2s 9h 9c 9d 9s")), FourOfAKind(Rank::Nine));
    }

    #[test]
    fn of_a_kind_five_of_one_rank() {
        assert_eq!(of_a_kind(&cards("Ah As Ac Ad Ah")), OfAKind::Nothing);
        assert_eq!(of_a_kind(&cards("Ah Ah Ah Ah Ah")), OfAKind::Nothing);
    }

    #[test]
    fn of_a_kind_is_order_independent() {
        let mut rng = rand::rng();
        let mut hand = cards("Js 3h Jd 3c Jh");

        for _ in 0..20 {
            hand.shuffle(&mut rng);
            assert_eq!(of_a_kind(&hand), OfAKind::FullHouse(Rank::Jack, Rank::Trey));
        }
    }
}
