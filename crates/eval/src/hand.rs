// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hand.
use log::{debug, trace};
use std::fmt;

use crate::{
    Card,
    classify::{self, Classification, HAND_SIZE},
};

/// A poker hand.
///
/// A hand is valid if it contains exactly five cards, hands are usually
/// created by parsing a line of card tokens with [Hand::parse].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a line of whitespace separated card tokens.
    ///
    /// Tokens that are not cards are dropped, use [Hand::is_valid] to check
    /// if the line had exactly five cards.
    pub fn parse(line: &str) -> Self {
        let cards = line
            .split_whitespace()
            .filter_map(|token| match Card::parse(token) {
                Ok(card) => Some(card),
                Err(e) => {
                    debug!("Dropping token {token:?}: {e}");
                    None
                }
            })
            .collect();

        Self { cards }
    }

    /// Adds a card to this hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Checks if this hand has exactly five cards.
    pub fn is_valid(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Classifies this hand.
    pub fn classify(&self) -> Classification {
        if !self.is_valid() {
            trace!("Invalid hand with {} cards", self.cards.len());
            return Classification::invalid();
        }

        let classification = classify::classify(&self.cards);
        trace!("Hand {self} classified as {classification}");
        classification
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}
