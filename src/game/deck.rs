//! Deck generation.
//!
//! A deck takes the first `pairs` symbols of the pool, deals two cards for
//! each, and shuffles them with Fisher–Yates so every ordering is equally
//! likely for a uniform random source.

use crate::game::card::Card;
use crate::game::error::GameError;
use rand::RngExt;
use std::collections::HashSet;

/// Check that `pairs` distinct symbols can be drawn from `symbols`.
pub fn check_pool(symbols: &[String], pairs: usize) -> Result<(), GameError> {
    if pairs == 0 {
        return Err(GameError::NoPairs);
    }
    if pairs > symbols.len() {
        return Err(GameError::PoolExhausted {
            requested: pairs,
            available: symbols.len(),
        });
    }
    let mut seen = HashSet::new();
    for symbol in &symbols[..pairs] {
        if !seen.insert(symbol.as_str()) {
            return Err(GameError::DuplicateSymbol(symbol.clone()));
        }
    }
    Ok(())
}

/// Build a shuffled board of `2 * pairs` face-down cards.
pub fn generate<R: RngExt + ?Sized>(
    symbols: &[String],
    pairs: usize,
    rng: &mut R,
) -> Result<Vec<Card>, GameError> {
    check_pool(symbols, pairs)?;

    let mut cards = Vec::with_capacity(pairs * 2);
    for symbol in &symbols[..pairs] {
        cards.push(Card::new(symbol.clone()));
        cards.push(Card::new(symbol.clone()));
    }
    shuffle(&mut cards, rng);
    Ok(cards)
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: RngExt + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::default_symbols;
    use crate::game::difficulty::{Difficulty, DifficultySettings};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn symbol_counts(cards: &[Card]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.symbol.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_every_difficulty_deals_pairs() {
        let pool = default_symbols();
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in Difficulty::ALL {
            let pairs = DifficultySettings::defaults_for(difficulty).pairs;
            let cards = generate(&pool, pairs, &mut rng).unwrap();
            assert_eq!(cards.len(), pairs * 2);

            let counts = symbol_counts(&cards);
            assert_eq!(counts.len(), pairs, "{} distinct symbols", difficulty);
            assert!(counts.values().all(|&n| n == 2));
            assert!(cards.iter().all(|c| !c.flipped && !c.matched));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let original: Vec<u32> = (0..64).collect();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);

        assert_ne!(shuffled, original);
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let pool = default_symbols();
        let a = generate(&pool, 8, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generate(&pool, 8, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![5];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![5]);
    }

    #[test]
    fn test_pool_exhausted_is_rejected() {
        let pool = default_symbols();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate(&pool, 33, &mut rng),
            Err(GameError::PoolExhausted {
                requested: 33,
                available: 32
            })
        );
    }

    #[test]
    fn test_check_pool_rejects_bad_pools() {
        let pool: Vec<String> = vec!["a".into(), "b".into(), "a".into()];
        assert_eq!(check_pool(&pool, 0), Err(GameError::NoPairs));
        assert_eq!(check_pool(&pool, 2), Ok(()));
        assert_eq!(
            check_pool(&pool, 3),
            Err(GameError::DuplicateSymbol("a".into()))
        );
    }
}
