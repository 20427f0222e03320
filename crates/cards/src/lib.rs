// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker Hands cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhands_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = Card::new(Rank::Ten, Suit::Diamonds);
//! ```
//!
//! or to parse them from their token representation, a rank code (`2`-`10`,
//! `J`, `Q`, `K`, `A`) followed by a suit code (`s`, `h`, `c`, `d`):
//!
//! ```
//! # use pokerhands_cards::{Card, ParseCardError, Rank, Suit};
//! let td = Card::parse("10d").unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(td.to_string(), "10d");
//!
//! assert_eq!(Card::parse("11c"), Err(ParseCardError::InvalidRank("11".into())));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit};
