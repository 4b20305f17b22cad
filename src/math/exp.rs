// ============================================================================
// Exponential Primitive
// e^x via multi-scale range reduction and a (2,2) Pade approximant
// ============================================================================

use super::constants::{
    E, EXP_MAX_INPUT, EXP_SATURATION_INPUT, EXP_STEP_1_128, EXP_STEP_1_32, EXP_STEP_32,
    E_POW_32, E_ROOT_128, E_ROOT_32, THREE,
};
use crate::errors::{MathError, MathResult};
use crate::numeric::{SignedWad, Wad, SCALE};

/// Compute e^x for a signed fixed-point argument.
///
/// Negative arguments use the reciprocal identity e^x = 1/e^(-x), keeping
/// the core approximation one-sided. The positive branch peels the argument
/// against precomputed powers (e^32, e, e^(1/32), e^(1/128)) until the
/// residual is below 1/128, evaluates the residual with the Pade
/// approximant e^r ~= ((r+3)^2 + 3) / ((r-3)^2 + 3), and recombines by
/// multiplication.
///
/// Relative error is below 5e-14 on [0, 32).
///
/// # Edge cases
/// - `x == 0` returns exactly 1
/// - `x` in (47, 130] saturates to `Wad::MAX` (e^x exceeds the raw range)
/// - `x <= -47` returns zero (e^x is below one raw unit)
///
/// # Errors
/// Returns `ExpUpperBound` when `x > 130`.
pub fn exp(x: SignedWad) -> MathResult<Wad> {
    let magnitude = x.abs();

    if x.is_negative() {
        if magnitude >= EXP_SATURATION_INPUT {
            return Ok(Wad::ZERO);
        }
        return Wad::ONE
            .checked_div(exp_positive(magnitude)?)
            .map_err(Into::into);
    }

    if magnitude > EXP_MAX_INPUT {
        return Err(MathError::ExpUpperBound);
    }
    if magnitude > EXP_SATURATION_INPUT {
        return Ok(Wad::MAX);
    }
    exp_positive(magnitude)
}

/// Positive branch: x in [0, ~47.28].
fn exp_positive(x: Wad) -> MathResult<Wad> {
    if x.is_zero() {
        return Ok(Wad::ONE);
    }

    // Peel integer multiples of each step size, largest step first. The
    // leftover residual is in [0, 1/128).
    let raw = x.raw_value();
    let k_32 = raw / EXP_STEP_32;
    let rem = raw % EXP_STEP_32;
    let k_1 = rem / SCALE;
    let rem = rem % SCALE;
    let k_32nd = rem / EXP_STEP_1_32;
    let rem = rem % EXP_STEP_1_32;
    let k_128th = rem / EXP_STEP_1_128;
    let residual = Wad::from_raw(rem % EXP_STEP_1_128);

    // (2,2) Pade approximant; (r-3)^2 is written (3-r)^2 to stay unsigned
    let num_base = residual.checked_add(THREE)?;
    let num = num_base.checked_mul(num_base)?.checked_add(THREE)?;
    let den_base = THREE.checked_sub(residual)?;
    let den = den_base.checked_mul(den_base)?.checked_add(THREE)?;

    // e^(a+b+c+d+r) = e^a * e^b * e^c * e^d * e^r
    let mut result = num.checked_div(den)?;
    result = result.checked_mul(powi(E_ROOT_128, k_128th)?)?;
    result = result.checked_mul(powi(E_ROOT_32, k_32nd)?)?;
    result = result.checked_mul(powi(E, k_1)?)?;
    result = result.checked_mul(powi(E_POW_32, k_32)?)?;
    Ok(result)
}

/// Raise a fixed-point base to a small integer exponent by repeated
/// multiplication. Exponents are bounded by the step ratios (at most 31).
fn powi(base: Wad, n: u128) -> MathResult<Wad> {
    let mut acc = Wad::ONE;
    for _ in 0..n {
        acc = acc.checked_mul(base)?;
    }
    Ok(acc)
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

    fn signed(v: &str) -> SignedWad {
        v.parse().unwrap()
    }

    #[test]
    fn test_exp_zero_is_exactly_one() {
        assert_eq!(exp(SignedWad::ZERO).unwrap(), Wad::ONE);
    }

    #[test]
    fn test_exp_golden_values() {
        // Bit-exact outputs pinned for determinism
        assert_eq!(exp(SignedWad::ONE).unwrap().raw_value(), 2_718_281_828_459_045_235);
        assert_eq!(
            exp(signed("2.5")).unwrap().raw_value(),
            12_182_493_960_703_473_436
        );
        assert_eq!(
            exp(-SignedWad::ONE).unwrap().raw_value(),
            367_879_441_171_442_322
        );
        assert_eq!(
            exp(signed("20")).unwrap().raw_value(),
            485_165_195_409_790_276_664_322_553
        );
    }

    #[test]
    fn test_exp_relative_error_budget() {
        // Dense grid over [0, 32)
        for i in 0..3200u128 {
            let x = Wad::from_raw(i * 10_000_000_000_000_000).to_signed().unwrap();
            let result = to_f64(exp(x).unwrap());
            let reference = (x.raw_value() as f64 / 1e18).exp();
            let rel = (result - reference).abs() / reference;
            assert!(rel <= 5e-14, "exp({}) rel error {}", x, rel);
        }
    }

    #[test]
    fn test_exp_negative_branch() {
        for i in 1..400u128 {
            let x = Wad::from_raw(i * 100_000_000_000_000_000)
                .to_signed()
                .unwrap()
                .checked_neg()
                .unwrap();
            let result = to_f64(exp(x).unwrap());
            let reference = (x.raw_value() as f64 / 1e18).exp();
            assert!(
                (result - reference).abs() <= 1e-13,
                "exp({}) abs error too large",
                x
            );
        }
    }

    #[test]
    fn test_exp_saturation_policy() {
        // (47, 130]: saturate to the representable maximum
        assert_eq!(exp(signed("47.5")).unwrap(), Wad::MAX);
        assert_eq!(exp(signed("130")).unwrap(), Wad::MAX);

        // Above 130: hard rejection
        assert_eq!(exp(signed("130.000000000000000001")), Err(MathError::ExpUpperBound));

        // Deeply negative: underflow to zero
        assert_eq!(exp(signed("-47")).unwrap(), Wad::ZERO);
        assert_eq!(exp(signed("-1000")).unwrap(), Wad::ZERO);
    }

    #[test]
    fn test_exp_within_saturation_zone_boundary() {
        // 47 itself is still computed, not saturated
        let at_bound = exp(signed("47")).unwrap();
        assert!(at_bound < Wad::MAX);
        let reference = 47f64.exp();
        let rel = (to_f64(at_bound) - reference).abs() / reference;
        assert!(rel <= 1e-13);
    }

    #[test]
    fn test_powi() {
        assert_eq!(powi(wad("2"), 0).unwrap(), Wad::ONE);
        assert_eq!(powi(wad("2"), 10).unwrap(), wad("1024"));
    }

    proptest! {
        #[test]
        fn prop_exp_at_least_one_for_nonnegative(raw in 0u128..32_000_000_000_000_000_000) {
            let x = Wad::from_raw(raw).to_signed().unwrap();
            prop_assert!(exp(x).unwrap() >= Wad::ONE);
        }

        #[test]
        fn prop_exp_at_most_one_for_nonpositive(raw in 0i128..40_000_000_000_000_000_000) {
            let x = SignedWad::from_raw(-raw);
            prop_assert!(exp(x).unwrap() <= Wad::ONE);
        }

        #[test]
        fn prop_exp_matches_reference(raw in 0u128..32_000_000_000_000_000_000) {
            let x = Wad::from_raw(raw).to_signed().unwrap();
            let result = to_f64(exp(x).unwrap());
            let reference = (raw as f64 / 1e18).exp();
            prop_assert!((result - reference).abs() / reference <= 5e-14);
        }
    }
}
