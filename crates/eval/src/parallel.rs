// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand classification.
use std::thread;

use crate::{Classification, Hand};

/// Classifies hands using `num_tasks` parallel tasks.
///
/// Each task classifies a contiguous chunk of the hands, the returned
/// classifications are in the same order as the input hands.
///
/// Panics if `num_tasks` is zero.
pub fn par_classify(num_tasks: usize, hands: &[Hand]) -> Vec<Classification> {
    assert!(num_tasks > 0);

    if hands.is_empty() {
        return Vec::new();
    }

    let hands_per_task = hands.len().div_ceil(num_tasks);

    thread::scope(|s| {
        let tasks = hands
            .chunks(hands_per_task)
            .map(|chunk| s.spawn(move || chunk.iter().map(Hand::classify).collect::<Vec<_>>()))
            .collect::<Vec<_>>();

        tasks
            .into_iter()
            .flat_map(|task| match task.join() {
                Ok(results) => results,
                Err(e) => std::panic::resume_unwind(e),
            })
            .collect()
    })
}
