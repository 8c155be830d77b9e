//! Deck construction properties.
//!
//! These tests verify the pairing and repeat-until-filled policy:
//! - Every deck is even and every image fills whole pairs
//! - Small pools cycle, large pools draw distinct images
//! - The final order is a permutation, not a fixed arrangement

use std::collections::HashMap;

use photo_pairs::core::GameRng;
use photo_pairs::game::Deck;
use photo_pairs::pool::{ImageDescriptor, ImageId, ImagePool};
use proptest::prelude::*;

fn pool_of(n: usize) -> ImagePool {
    ImagePool::new((0..n).map(|i| ImageDescriptor::new(format!("/photos/{i}.avif"), 1200, 900)))
}

fn counts(deck: &Deck) -> HashMap<ImageId, usize> {
    let mut counts = HashMap::new();
    for &id in deck.slots() {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn prop_deck_is_paired(pool_size in 1usize..60, pairs in 1usize..30, seed in any::<u64>()) {
        let pool = pool_of(pool_size);
        let deck = Deck::build(&pool, pairs, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), 2 * pairs);
        for (_, count) in counts(&deck) {
            prop_assert_eq!(count % 2, 0);
        }
    }

    #[test]
    fn prop_large_pool_uses_distinct_images(pool_size in 18usize..80, seed in any::<u64>()) {
        let pool = pool_of(pool_size);
        let deck = Deck::build(&pool, 18, &mut GameRng::new(seed));

        let counts = counts(&deck);
        prop_assert_eq!(counts.len(), 18);
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn prop_small_pool_cycles(pool_size in 1usize..18, seed in any::<u64>()) {
        let pool = pool_of(pool_size);
        let deck = Deck::build(&pool, 18, &mut GameRng::new(seed));

        // No image can take more pairs than the number of pool repetitions.
        let rounds = (18 + pool_size - 1) / pool_size;
        for (_, count) in counts(&deck) {
            prop_assert!(count / 2 <= rounds);
        }
    }
}

#[test]
fn test_three_images_fill_eighteen_pairs() {
    let pool = pool_of(3);
    let deck = Deck::build(&pool, 18, &mut GameRng::new(2024));

    assert_eq!(deck.len(), 36);
    assert_eq!(deck.pair_count(), 18);
    for id in pool.ids() {
        assert_eq!(deck.occurrences(id), 12, "{id} should fill six pairs");
    }
}

#[test]
fn test_single_image_pool() {
    let deck = Deck::build(&pool_of(1), 18, &mut GameRng::new(1));
    assert_eq!(deck.occurrences(ImageId::new(0)), 36);
}

#[test]
fn test_empty_pool_builds_empty_deck() {
    let deck = Deck::build(&ImagePool::empty(), 18, &mut GameRng::new(1));
    assert!(deck.is_empty());
    assert_eq!(deck.pair_count(), 0);
}

#[test]
fn test_shuffle_is_not_fixed() {
    let pool = pool_of(18);

    // Where does slot 0's image end up across seeds? It should move around.
    let first_slots: std::collections::HashSet<_> = (0..50)
        .map(|seed| Deck::build(&pool, 18, &mut GameRng::new(seed)).slots()[0])
        .collect();
    assert!(first_slots.len() > 5, "slot 0 barely varies: {:?}", first_slots);
}

#[test]
fn test_positions_are_roughly_uniform() {
    // Image 0 is always drawn (18 of 18); count where its copies land.
    let pool = pool_of(18);
    let mut hits = [0u32; 36];
    for seed in 0..3600 {
        let deck = Deck::build(&pool, 18, &mut GameRng::new(seed));
        for (slot, &id) in deck.slots().iter().enumerate() {
            if id == ImageId::new(0) {
                hits[slot] += 1;
            }
        }
    }
    // Expected 200 per slot (2 copies * 3600 / 36).
    for (slot, &count) in hits.iter().enumerate() {
        assert!((120..280).contains(&count), "slot {slot} hit {count} times");
    }
}
