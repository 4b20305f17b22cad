// ============================================================================
// Numeric Module
// Fixed-point arithmetic substrate for deterministic financial math
// ============================================================================
//
// This module provides:
// - Wad: unsigned 18-decimal fixed-point value (raw u128)
// - SignedWad: signed 18-decimal fixed-point value (raw i128)
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics, no silent wrapping)
// - 256-bit intermediates for multiply/divide, round half-up on magnitude
// - Bit-identical results for identical inputs on every target

mod errors;
mod wad;

pub use errors::{NumericError, NumericResult};
pub use wad::{SignedWad, Wad, SCALE};
