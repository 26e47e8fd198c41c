use std::collections::HashMap;

use crate::domain::board::{generate_board, validate_dimensions};
use crate::domain::rules::{MAX_TILES, MIN_TILES};
use crate::errors::domain::{DomainError, ValidationKind};

fn symbol_counts(board: &[&'static str]) -> HashMap<&'static str, usize> {
    let mut counts = HashMap::new();
    for symbol in board {
        *counts.entry(*symbol).or_insert(0) += 1;
    }
    counts
}

#[test]
fn board_has_exactly_paired_symbols() {
    let board = generate_board(4, 4, 7).unwrap();
    assert_eq!(board.len(), 16);
    for (symbol, count) in symbol_counts(&board) {
        assert_eq!(count, 2, "symbol {symbol} appears {count} times");
    }
}

#[test]
fn largest_board_stays_paired() {
    // 6x10 = 60 tiles = 30 pairs, within the symbol pool.
    let board = generate_board(6, 10, 42).unwrap();
    assert_eq!(board.len(), MAX_TILES);
    for (_, count) in symbol_counts(&board) {
        assert!(count % 2 == 0);
    }
}

#[test]
fn same_seed_same_board() {
    let a = generate_board(4, 6, 1234).unwrap();
    let b = generate_board(4, 6, 1234).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let a = generate_board(6, 6, 1).unwrap();
    let b = generate_board(6, 6, 2).unwrap();
    // With 36 tiles an identical shuffle is effectively impossible.
    assert_ne!(a, b);
}

#[test]
fn rejects_odd_tile_count() {
    let err = validate_dimensions(3, 3).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidDimensions, _)
    ));
}

#[test]
fn rejects_zero_dimension() {
    assert!(validate_dimensions(0, 4).is_err());
    assert!(validate_dimensions(4, 0).is_err());
}

#[test]
fn rejects_out_of_range_tile_counts() {
    // 2x3 = 6 < MIN_TILES.
    assert!(validate_dimensions(2, 3).is_err());
    // 8x8 = 64 > MAX_TILES.
    assert!(validate_dimensions(8, 8).is_err());
    // Bounds themselves are fine.
    assert_eq!(MIN_TILES, 8);
    assert!(validate_dimensions(2, 4).is_ok());
    assert!(validate_dimensions(6, 10).is_ok());
}

#[test]
fn generate_rejects_invalid_dimensions() {
    assert!(generate_board(5, 5, 0).is_err());
}
