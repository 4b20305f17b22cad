// ============================================================================
// Math Module
// Transcendental primitives over WAD fixed point
// ============================================================================
//
// This module provides:
// - exp: exponential via range reduction + (2,2) Pade approximant
// - ln/log2/log10: logarithms via exponential-step reduction + odd series
// - sqrt: square root via root-table reduction + Maclaurin tail
// - erf/std_norm_cdf/std_norm_pdf: error function and normal distribution
//
// Every function is a pure, total mapping over its documented domain: a
// fixed, input-independent number of integer operations, no hidden state,
// and bit-identical results for identical inputs.

mod constants;
mod erf;
mod exp;
mod log;
mod sqrt;

pub use erf::{erf, std_norm_cdf, std_norm_pdf};
pub use exp::exp;
pub use log::{ln, log10, log2};
pub use sqrt::sqrt;
