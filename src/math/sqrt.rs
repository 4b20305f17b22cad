// ============================================================================
// Square-Root Primitive
// sqrt(x) via magnitude scaling, root-table reduction and a Maclaurin tail
// ============================================================================

use super::constants::{
    ROOT_128_OF_100, ROOT_256_OF_100, ROOT_64_OF_100, SQRT_MACLAURIN, SQRT_POW_ROOTS,
    SQRT_POW_SQUARES,
};
use crate::errors::MathResult;
use crate::numeric::{SignedWad, Wad, SCALE};

/// Compute sqrt(x) for an unsigned fixed-point argument.
///
/// Arguments below one use the reciprocal identity sqrt(x) = 1/sqrt(1/x).
/// Arguments at or above 100 are scaled down by 10^2/10^4/10^6 using
/// sqrt(k^2 x) = k sqrt(x). The remainder in [1, 100) is divided by the
/// largest even power of 100^(1/64) from a precomputed table (tracking the
/// matching square-root multiplier), then refined by at most one division
/// each by 100^(1/64) and 100^(1/128) so the Maclaurin argument stays below
/// 0.037. The residual is evaluated with the 9-term Maclaurin expansion of
/// sqrt(1+u).
///
/// Relative error is below 2.2e-14 on [1e-6, 1e8].
///
/// # Edge cases
/// - `x == 0` returns exactly 0
/// - `x == 1` returns exactly 1
pub fn sqrt(x: Wad) -> MathResult<Wad> {
    if x.is_zero() {
        return Ok(Wad::ZERO);
    }
    if x < Wad::ONE {
        let reciprocal_root = sqrt_ge_one(Wad::ONE.checked_div(x)?)?;
        return Wad::ONE.checked_div(reciprocal_root).map_err(Into::into);
    }
    sqrt_ge_one(x)
}

/// Core reduction for x >= 1.
fn sqrt_ge_one(x: Wad) -> MathResult<Wad> {
    // Order-of-magnitude scaling down to [1, 100)
    let mut residual = x.raw_value();
    let mut scale: u128 = 1;
    while residual >= 100 * SCALE {
        if residual >= 1_000_000 * SCALE {
            residual /= 1_000_000;
            scale *= 1000;
        } else if residual >= 10_000 * SCALE {
            residual /= 10_000;
            scale *= 100;
        } else {
            residual /= 100;
            scale *= 10;
        }
    }

    // Divide out the largest tabulated even power whose square fits
    let index = SQRT_POW_SQUARES.partition_point(|&p| p <= residual) - 1;
    let mut residual =
        Wad::from_raw(residual).checked_div(Wad::from_raw(SQRT_POW_SQUARES[index]))?;
    let mut multiplier = Wad::from_raw(SQRT_POW_ROOTS[index]);

    // Two refining half-steps tighten the Maclaurin argument
    if residual >= ROOT_64_OF_100 {
        residual = residual.checked_div(ROOT_64_OF_100)?;
        multiplier = multiplier.checked_mul(ROOT_128_OF_100)?;
    }
    if residual >= ROOT_128_OF_100 {
        residual = residual.checked_div(ROOT_128_OF_100)?;
        multiplier = multiplier.checked_mul(ROOT_256_OF_100)?;
    }

    // Maclaurin expansion of sqrt(1+u) around u = 0, Horner form
    let u = residual.checked_sub(Wad::ONE)?.to_signed()?;
    let mut acc = SignedWad::from_raw(SQRT_MACLAURIN[8]);
    for &coefficient in SQRT_MACLAURIN[..8].iter().rev() {
        acc = acc
            .checked_mul(u)?
            .checked_add(SignedWad::from_raw(coefficient))?;
    }

    acc.to_unsigned()?
        .checked_mul(multiplier)?
        .checked_mul_int(scale)
        .map_err(Into::into)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn to_f64(w: Wad) -> f64 {
        w.raw_value() as f64 / 1e18
    }

    fn wad(v: &str) -> Wad {
        v.parse().unwrap()
    }

    #[test]
    fn test_sqrt_zero_and_one_exact() {
        assert_eq!(sqrt(Wad::ZERO).unwrap(), Wad::ZERO);
        assert_eq!(sqrt(Wad::ONE).unwrap(), Wad::ONE);
    }

    #[test]
    fn test_sqrt_golden_values() {
        assert_eq!(sqrt(wad("2")).unwrap().raw_value(), 1_414_213_562_373_095_048);
        assert_eq!(sqrt(wad("4")).unwrap().raw_value(), 1_999_999_999_999_999_991);
        // Even powers of ten recombine exactly
        assert_eq!(
            sqrt(wad("100000000")).unwrap().raw_value(),
            10_000_000_000_000_000_000_000
        );
        assert_eq!(sqrt(wad("0.000001")).unwrap().raw_value(), 1_000_000_000_000_000);
    }

    #[test]
    fn test_sqrt_relative_error_budget() {
        // Geometric sweep over [1e-6, 1e8]
        let mut value = 1e-6f64;
        while value < 1e8 {
            let x = Wad::from_raw((value * 1e18) as u128);
            let result = to_f64(sqrt(x).unwrap());
            let reference = (x.raw_value() as f64 / 1e18).sqrt();
            let rel = (result - reference).abs() / reference;
            assert!(rel <= 2.2e-14, "sqrt({}) rel error {}", x, rel);
            value *= 1.37;
        }
    }

    #[test]
    fn test_sqrt_large_arguments() {
        // Near the top of the raw range: sqrt(~3.4e20)
        let result = sqrt(Wad::MAX).unwrap();
        let reference = (u128::MAX as f64 / 1e18).sqrt();
        let rel = (to_f64(result) - reference).abs() / reference;
        assert!(rel <= 2.2e-14);
    }

    proptest! {
        #[test]
        fn prop_sqrt_squared_recovers_input(value in 1e-6f64..1e8) {
            let x = Wad::from_raw((value * 1e18) as u128);
            let root = sqrt(x).unwrap();
            let squared = root.checked_mul(root).unwrap();
            let rel = (squared.raw_value() as f64 - x.raw_value() as f64).abs()
                / x.raw_value() as f64;
            prop_assert!(rel <= 2.2e-14, "sqrt^2 rel error {}", rel);
        }

        #[test]
        fn prop_sqrt_monotone_on_integers(a in 1u64..100_000, b in 1u64..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let sqrt_lo = sqrt(Wad::from_integer(lo as u128).unwrap()).unwrap();
            let sqrt_hi = sqrt(Wad::from_integer(hi as u128).unwrap()).unwrap();
            prop_assert!(sqrt_lo <= sqrt_hi);
        }
    }
}
