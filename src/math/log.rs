// ============================================================================
// Logarithm Primitive
// ln(x) via exponential-step range reduction and an odd-power series
// ============================================================================

use super::constants::{
    FIFTH, INV_LN_10, INV_LN_2, LN_ROOT_16_OF_2, LN_ROOT_32_OF_16, ROOT_16_OF_2, ROOT_32_OF_16,
    SEVENTH, THIRD,
};
use crate::errors::{MathError, MathResult};
use crate::numeric::{SignedWad, Wad, SCALE};

/// Compute ln(x) for a positive fixed-point argument.
///
/// Arguments below one use the reciprocal identity ln(x) = -ln(1/x). For
/// x >= 1 the multiplier count comes directly from floor(log2) of the
/// integer part (eight units of 16^(1/32) = 2^(1/8) per power of two),
/// followed by at most eight corrective divisions by 2^(1/8) and one
/// refining division by 2^(1/16). The residual is evaluated with the
/// odd-power series ln(x) = 2f(1 + f^2/3 + f^4/5 + f^6/7) where
/// f = (x-1)/(x+1), then the peeled multiples of ln(2^(1/8)) and
/// ln(2^(1/16)) are added back.
///
/// # Edge cases
/// - `x == 1` returns exactly 0
///
/// # Errors
/// Returns `LnLowerBound` when `x` is zero.
pub fn ln(x: Wad) -> MathResult<SignedWad> {
    if x.is_zero() {
        return Err(MathError::LnLowerBound);
    }
    if x < Wad::ONE {
        let positive = ln_ge_one(Wad::ONE.checked_div(x)?)?;
        return positive.to_signed()?.checked_neg().map_err(Into::into);
    }
    ln_ge_one(x)?.to_signed().map_err(Into::into)
}

/// Base-2 logarithm: ln(x) rescaled by 1/ln(2).
///
/// # Errors
/// Returns `LnLowerBound` when `x` is zero.
pub fn log2(x: Wad) -> MathResult<SignedWad> {
    ln(x)?.checked_mul(INV_LN_2).map_err(Into::into)
}

/// Base-10 logarithm: ln(x) rescaled by 1/ln(10).
///
/// # Errors
/// Returns `LnLowerBound` when `x` is zero.
pub fn log10(x: Wad) -> MathResult<SignedWad> {
    ln(x)?.checked_mul(INV_LN_10).map_err(Into::into)
}

/// Core reduction and series for x >= 1.
fn ln_ge_one(x: Wad) -> MathResult<Wad> {
    if x == Wad::ONE {
        return Ok(Wad::ZERO);
    }

    let mut residual = x;
    let mut multiplier: u128 = 0;

    // Count whole powers of two directly instead of iterating: each power
    // of two is eight reduction steps
    let int_part = residual.raw_value() / SCALE;
    if int_part >= 2 {
        let shift = int_part.ilog2();
        residual = Wad::from_raw(residual.raw_value() >> shift);
        multiplier = 8 * shift as u128;
    }

    // Residual is now in [1, 2); finish the count against the step constant
    while residual > ROOT_32_OF_16 {
        residual = residual.checked_div(ROOT_32_OF_16)?;
        multiplier += 1;
    }

    // One refining half-step keeps the series argument below 0.022
    let mut refined = false;
    if residual > ROOT_16_OF_2 {
        residual = residual.checked_div(ROOT_16_OF_2)?;
        refined = true;
    }

    let f = residual
        .checked_sub(Wad::ONE)?
        .checked_div(residual.checked_add(Wad::ONE)?)?;
    let f_squared = f.checked_mul(f)?;

    let mut series = SEVENTH;
    series = series.checked_mul(f_squared)?.checked_add(FIFTH)?;
    series = series.checked_mul(f_squared)?.checked_add(THIRD)?;
    series = series.checked_mul(f_squared)?.checked_add(Wad::ONE)?;

    // ln(a*b) = ln(a) + ln(b): series result plus the peeled step logs
    let mut result = f.checked_mul(series)?.checked_mul_int(2)?;
    result = result.checked_add(LN_ROOT_32_OF_16.checked_mul_int(multiplier)?)?;
    if refined {
        result = result.checked_add(LN_ROOT_16_OF_2)?;
    }
    Ok(result)
}

// ============================================================================
// Tests
// ============================================================================
