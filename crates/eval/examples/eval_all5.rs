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
// Straight Flush:  36
// Royal Flush:     4
// ```

use std::time::Instant;

use stacked_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 11];

    let deck = Deck::default();
    let pairs = deck.pairs();
    let cards = deck.into_iter().collect::<Vec<_>>();

    // Extend each pair with all the 3-cards combinations of the following cards.
    for [c1, c2] in pairs {
        let Some(start) = cards.iter().position(|c| *c == c2) else {
            continue;
        };

        let rest = &cards[start + 1..];
        for i in 0..rest.len() {
            for j in (i + 1)..rest.len() {
                for k in (j + 1)..rest.len() {
                    if let Ok(hand) = Hand::new(&[c1, c2, rest[i], rest[j], rest[k]]) {
                        counts[hand.category().value() as usize] += 1;
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

    for category in HandCategory::categories() {
        let name = format!("{}:", category.name());
        println!("{name:17}{}", counts[category.value() as usize]);
    }
}
