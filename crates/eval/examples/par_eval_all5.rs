// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all5
// ```

use std::time::Instant;

use pokerhands_eval::*;

fn main() {
    const NUM_TASKS: usize = 4;

    // Build all 2.6M five cards hands, then classify them with 4 tasks.
    let deck = Card::cards().collect::<Vec<_>>();
    let n = deck.len();
    let mut hands = Vec::with_capacity(2_598_960);

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        hands.push(
                            [c1, c2, c3, c4, c5]
                                .into_iter()
                                .map(|idx| deck[idx])
                                .collect::<Hand>(),
                        );
                    }
                }
            }
        }
    }

    let now = Instant::now();
    let results = par_classify(NUM_TASKS, &hands);
    let elapsed = now.elapsed().as_secs_f64();

    let mut counts = [0usize; HandRank::COUNT];
    for c in &results {
        counts[c.rank() as usize] += 1;
    }

    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks().skip(1) {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }
}
