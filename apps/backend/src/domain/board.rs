//! Deterministic paired-board generation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{MAX_TILES, MIN_TILES, SYMBOL_POOL};
use crate::errors::domain::{DomainError, ValidationKind};

/// A tile face. The pool is static, so symbols are plain string slices.
pub type Symbol = &'static str;

/// Check board dimensions: positive, even tile count, within bounds.
pub fn validate_dimensions(rows: u8, cols: u8) -> Result<(), DomainError> {
    if rows == 0 || cols == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidDimensions,
            "rows and cols must be positive",
        ));
    }

    let tiles = rows as usize * cols as usize;
    if tiles % 2 != 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidDimensions,
            format!("tile count must be even, got {tiles}"),
        ));
    }
    if !(MIN_TILES..=MAX_TILES).contains(&tiles) {
        return Err(DomainError::validation(
            ValidationKind::InvalidDimensions,
            format!("tile count must be within {MIN_TILES}..={MAX_TILES}, got {tiles}"),
        ));
    }
    Ok(())
}

/// Build a shuffled deck of `rows * cols` tiles where every symbol appears
/// exactly twice.
///
/// Symbols are taken from the static pool; if the pool is smaller than the
/// number of pairs they repeat round-robin, which keeps the paired-deck
/// invariant but makes some symbols appear in more than one pair.
///
/// The shuffle is a Fisher-Yates over a `ChaCha8Rng`, so the same seed
/// always yields the same board.
pub fn generate_board(rows: u8, cols: u8, seed: u64) -> Result<Vec<Symbol>, DomainError> {
    validate_dimensions(rows, cols)?;

    let tiles = rows as usize * cols as usize;
    let pairs = tiles / 2;

    let mut deck = Vec::with_capacity(tiles);
    for i in 0..pairs {
        let symbol = SYMBOL_POOL[i % SYMBOL_POOL.len()];
        deck.push(symbol);
        deck.push(symbol);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    Ok(deck)
}
