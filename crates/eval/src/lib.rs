// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker Hands five cards hand classifier.
//!
//! Parses a line of card tokens into a [Hand] and classifies it into one of
//! the standard poker hand categories, from high card to straight flush,
//! together with the ranks and suit that describe the hand:
//!
//! ```
//! # use pokerhands_eval::*;
//! let hand = Hand::parse("4c 4s Ah Ac 4d");
//! let best = hand.classify();
//! assert_eq!(best.rank(), HandRank::FullHouse);
//! assert_eq!(best.primary(), Some(Rank::Four));
//! assert_eq!(best.secondary(), Some(Rank::Ace));
//! assert_eq!(best.to_string(), "Full House: Fours full of Aces");
//! ```
//!
//! Tokens that are not cards are dropped and a hand without exactly five
//! cards classifies as [HandRank::InvalidHand]:
//!
//! ```
//! # use pokerhands_eval::*;
//! let hand = Hand::parse("8s 2h 7d 11c 3s");
//! assert!(!hand.is_valid());
//! assert_eq!(hand.classify().to_string(), "Invalid Hand");
//! ```
//!
//! The **`parallel`** feature enables [par_classify] to classify many hands
//! with a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub use classify::{Classification, HAND_SIZE, HandRank, classify};

pub mod detect;

mod hand;
pub use hand::Hand;

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_classify;

// Reexport cards types.
pub use pokerhands_cards::{Card, ParseCardError, Rank, Suit};
