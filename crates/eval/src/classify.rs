// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand resolution.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    Card, Rank, Suit,
    detect::{self, AceOrder, OfAKind},
};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The hand category, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// Not a five cards hand.
    InvalidHand = 0,
    /// High card.
    HighCard,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// The number of hand ranks.
    pub const COUNT: usize = 10;

    /// Returns all hand ranks from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            InvalidHand,
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::InvalidHand => "Invalid Hand",
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// The best hand found in five cards.
///
/// The primary rank is the dominant rank of the hand: the higher pair in two
/// pair, the three of a kind in a full house, the rank of a pair, three or
/// four of a kind, and the highest card of straights and high card hands.
/// The secondary rank is the lower pair of two pair and the pair of a full
/// house. The suit is set for flushes and straight flushes only.
///
/// Classifications are only built by [classify] so they can be serialized
/// but not deserialized, a deserialized value could mix fields of
/// different hand ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    rank: HandRank,
    primary: Option<Rank>,
    secondary: Option<Rank>,
    suit: Option<Suit>,
}

impl Classification {
    /// The classification of a hand that doesn't have five cards.
    pub const fn invalid() -> Self {
        Self {
            rank: HandRank::InvalidHand,
            primary: None,
            secondary: None,
            suit: None,
        }
    }

    const fn with_ranks(rank: HandRank, primary: Rank, secondary: Option<Rank>) -> Self {
        Self {
            rank,
            primary: Some(primary),
            secondary,
            suit: None,
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The dominant rank.
    pub fn primary(&self) -> Option<Rank> {
        self.primary
    }

    /// The subordinate rank.
    pub fn secondary(&self) -> Option<Rank> {
        self.secondary
    }

    /// The flush suit.
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Checks if this is an ace high straight flush.
    pub fn is_royal_flush(&self) -> bool {
        self.rank == HandRank::StraightFlush && self.primary == Some(Rank::Ace)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(r1), r2, suit) = (self.primary, self.secondary, self.suit) else {
            // Only flushes and invalid hands have no primary rank.
            return match (self.rank, self.suit) {
                (HandRank::Flush, Some(suit)) => write!(f, "Flush: {}", suit.name()),
                _ => write!(f, "{}", HandRank::InvalidHand),
            };
        };

        match (self.rank, r2, suit) {
            (HandRank::HighCard, _, _) => write!(f, "High Card: {}", r1.name()),
            (HandRank::Pair, _, _) => write!(f, "Pair: {}", r1.plural_name()),
            (HandRank::TwoPair, Some(r2), _) => write!(
                f,
                "Two Pair: {} over {}",
                r1.plural_name(),
                r2.plural_name()
            ),
            (HandRank::ThreeOfAKind, _, _) => write!(f, "Three of a Kind: {}", r1.plural_name()),
            (HandRank::Straight, _, _) => write!(f, "Straight to {}", r1.name()),
            (HandRank::FullHouse, Some(r2), _) => write!(
                f,
                "Full House: {} full of {}",
                r1.plural_name(),
                r2.plural_name()
            ),
            (HandRank::FourOfAKind, _, _) => write!(f, "Four of a Kind: {}", r1.plural_name()),
            (HandRank::StraightFlush, _, Some(suit)) if r1 == Rank::Ace => {
                write!(f, "Royal Flush! ({})", suit.name())
            }
            (HandRank::StraightFlush, _, Some(suit)) => {
                write!(f, "Straight Flush ({}) to {}", suit.name(), r1.name())
            }
            _ => write!(f, "<unknown>"),
        }
    }
}

/// Classifies a five cards hand.
///
/// Returns [Classification::invalid] if the slice doesn't have exactly five
/// cards, in that case no detector runs.
pub fn classify(cards: &[Card]) -> Classification {
    if cards.len() != HAND_SIZE {
        return Classification::invalid();
    }

    let flush = detect::flush(cards);
    let kind = detect::of_a_kind(cards);

    let mut sorted = [cards[0]; HAND_SIZE];
    sorted.copy_from_slice(cards);
    AceOrder::High.sort(&mut sorted);

    let highest = sorted[HAND_SIZE - 1].rank();

    // Try ace high first, then the wheel.
    let straight = detect::straight(&sorted, AceOrder::High).or_else(|| {
        AceOrder::Low.sort(&mut sorted);
        detect::straight(&sorted, AceOrder::Low)
    });

    match (straight, flush, kind) {
        (Some(high), Some(suit), _) => Classification {
            rank: HandRank::StraightFlush,
            primary: Some(high),
            secondary: None,
            suit: Some(suit),
        },
        (_, _, OfAKind::FourOfAKind(r)) => {
            Classification::with_ranks(HandRank::FourOfAKind, r, None)
        }
        (_, _, OfAKind::FullHouse(trips, pair)) => {
            Classification::with_ranks(HandRank::FullHouse, trips, Some(pair))
        }
        (_, Some(suit), _) => Classification {
            rank: HandRank::Flush,
            primary: None,
            secondary: None,
            suit: Some(suit),
        },
        (Some(high), _, _) => Classification::with_ranks(HandRank::Straight, high, None),
        (_, _, OfAKind::ThreeOfAKind(r)) => {
            Classification::with_ranks(HandRank::ThreeOfAKind, r, None)
        }
        (_, _, OfAKind::TwoPair(high, low)) => {
            Classification::with_ranks(HandRank::TwoPair, high, Some(low))
        }
        (_, _, OfAKind::Pair(r)) => Classification::with_ranks(HandRank::Pair, r, None),
        (None, None, OfAKind::Nothing) => {
            Classification::with_ranks(HandRank::HighCard, highest, None)
        }
    }
}
