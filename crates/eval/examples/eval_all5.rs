// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1302540
// Pair:            1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use pokerhands_eval::*;

fn main() {
    // Classify all 2.6M five cards hands.
    let deck = Card::cards().collect::<Vec<_>>();
    let n = deck.len();
    let mut counts = [0usize; HandRank::COUNT];
    let mut h = [deck[0]; HAND_SIZE];

    let now = Instant::now();

    for c1 in 0..n {
        h[0] = deck[c1];
        for c2 in (c1 + 1)..n {
            h[1] = deck[c2];
            for c3 in (c2 + 1)..n {
                h[2] = deck[c3];
                for c4 in (c3 + 1)..n {
                    h[3] = deck[c4];
                    for c5 in (c4 + 1)..n {
                        h[4] = deck[c5];
                        counts[classify(&h).rank() as usize] += 1;
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks().skip(1) {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }
}
