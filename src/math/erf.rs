// ============================================================================
// Error Function and Standard Normal Distribution
// Rational approximation of erf built on the exponential primitive
// ============================================================================

use super::constants::{ERF_A, ERF_P, ERF_SATURATION, PDF_ZERO_BOUND, SQRT_2, SQRT_2_PI};
use super::exp::exp;
use crate::errors::MathResult;
use crate::numeric::{SignedWad, Wad};

/// Compute the error function erf(z).
///
/// Sign-splits the argument and applies the classical Abramowitz & Stegun
/// 7.1.26 rational approximation on the magnitude: with
/// t = 1/(1 + p|z|), erf(|z|) = 1 - poly(t) e^(-z^2), where poly is the
/// fixed degree-5 polynomial. The exponential is the fixed-point `exp`
/// primitive.
///
/// # Edge cases
/// - `z == 0` returns exactly 0 (the raw approximation would give ~1e-9,
///   since the coefficients sum to one only approximately)
/// - `|z| >= 6.5` returns exactly +/-1: the tail is below one raw unit,
///   and the guard keeps z^2 inside the exponential's domain
pub fn erf(z: SignedWad) -> MathResult<SignedWad> {
    if z.is_zero() {
        return Ok(SignedWad::ZERO);
    }

    let magnitude = z.abs();
    if magnitude >= ERF_SATURATION {
        return if z.is_negative() {
            SignedWad::ONE.checked_neg().map_err(Into::into)
        } else {
            Ok(SignedWad::ONE)
        };
    }

    let t = Wad::ONE
        .checked_div(Wad::ONE.checked_add(ERF_P.checked_mul(magnitude)?)?)?
        .to_signed()?;

    let mut poly = SignedWad::from_raw(ERF_A[4]);
    for &coefficient in ERF_A[..4].iter().rev() {
        poly = poly
            .checked_mul(t)?
            .checked_add(SignedWad::from_raw(coefficient))?;
    }
    poly = poly.checked_mul(t)?;

    let z_squared = magnitude.checked_mul(magnitude)?;
    let gauss = exp(z_squared.to_signed()?.checked_neg()?)?;

    let result = SignedWad::ONE.checked_sub(poly.checked_mul(gauss.to_signed()?)?)?;
    if z.is_negative() {
        result.checked_neg().map_err(Into::into)
    } else {
        Ok(result)
    }
}

/// Standard normal cumulative distribution function.
///
/// Phi(x) = (1 + erf(x / sqrt(2))) / 2.
///
/// # Edge cases
/// - `x == 0` returns exactly 0.5
pub fn std_norm_cdf(x: SignedWad) -> MathResult<Wad> {
    let scaled = x.checked_div(SQRT_2.to_signed()?)?;
    let sum = SignedWad::ONE.checked_add(erf(scaled)?)?;
    Ok(Wad::from_raw(sum.raw_value() as u128 / 2))
}

/// Standard normal probability density function.
///
/// n(x) = e^(-x^2/2) / sqrt(2 pi).
pub fn std_norm_pdf(x: SignedWad) -> MathResult<Wad> {
    let magnitude = x.abs();
    if magnitude >= PDF_ZERO_BOUND {
        return Ok(Wad::ZERO);
    }
    let half_square = Wad::from_raw(magnitude.checked_mul(magnitude)?.raw_value() / 2);
    let gauss = exp(half_square.to_signed()?.checked_neg()?)?;
    gauss.checked_div(SQRT_2_PI).map_err(Into::into)
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

    fn to_f64_signed(w: SignedWad) -> f64 {
        w.raw_value() as f64 / 1e18
    }

    fn signed(v: &str) -> SignedWad {
        v.parse().unwrap()
    }

    /// Floating-point mirror of the same A&S 7.1.26 formula (test oracle),
    /// including the zero special case
    fn erf_reference(x: f64) -> f64 {
        if x == 0.0 {
            return 0.0;
        }
        let (a1, a2, a3, a4, a5) = (
            0.254829592f64,
            -0.284496736,
            1.421413741,
            -1.453152027,
            1.061405429,
        );
        let p = 0.3275911f64;
        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();
        let t = 1.0 / (1.0 + p * x);
        sign * (1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp())
    }

    fn cdf_reference(x: f64) -> f64 {
        0.5 * (1.0 + erf_reference(x / std::f64::consts::SQRT_2))
    }

    #[test]
    fn test_erf_zero_is_exactly_zero() {
        assert_eq!(erf(SignedWad::ZERO).unwrap(), SignedWad::ZERO);
    }

    #[test]
    fn test_erf_golden_values() {
        assert_eq!(erf(SignedWad::ONE).unwrap().raw_value(), 842_700_689_747_590_005);
        assert_eq!(
            erf(-SignedWad::ONE).unwrap().raw_value(),
            -842_700_689_747_590_005
        );
    }

    #[test]
    fn test_erf_saturation() {
        assert_eq!(erf(signed("6.5")).unwrap(), SignedWad::ONE);
        assert_eq!(erf(signed("7")).unwrap(), SignedWad::ONE);
        assert_eq!(erf(signed("-100")).unwrap().raw_value(), -SignedWad::ONE.raw_value());
    }

    #[test]
    fn test_erf_matches_reference_mirror() {
        for i in -1300..=1300i128 {
            if i == 0 {
                continue;
            }
            let z = SignedWad::from_raw(i * 5_000_000_000_000_000);
            let result = to_f64_signed(erf(z).unwrap());
            let reference = erf_reference(z.raw_value() as f64 / 1e18);
            assert!(
                (result - reference).abs() <= 1e-13,
                "erf({}) abs error too large",
                z
            );
        }
    }

    #[test]
    fn test_cdf_half_at_zero() {
        assert_eq!(
            std_norm_cdf(SignedWad::ZERO).unwrap().raw_value(),
            500_000_000_000_000_000
        );
    }

    #[test]
    fn test_cdf_golden_values() {
        assert_eq!(
            std_norm_cdf(signed("1.96")).unwrap().raw_value(),
            975_002_173_891_775_656
        );
        assert_eq!(
            std_norm_cdf(signed("-1.96")).unwrap().raw_value(),
            24_997_826_108_224_344
        );
    }

    #[test]
    fn test_cdf_matches_reference_mirror() {
        for i in -1600..=1600i128 {
            let x = SignedWad::from_raw(i * 5_000_000_000_000_000);
            let result = to_f64(std_norm_cdf(x).unwrap());
            let reference = cdf_reference(x.raw_value() as f64 / 1e18);
            assert!(
                (result - reference).abs() <= 1e-13,
                "cdf({}) abs error too large",
                x
            );
        }
    }

    #[test]
    fn test_pdf_values() {
        // n(0) = 1/sqrt(2 pi)
        let at_zero = to_f64(std_norm_pdf(SignedWad::ZERO).unwrap());
        assert!((at_zero - 0.3989422804014327).abs() <= 1e-13);

        // Far tail underflows to zero
        assert_eq!(std_norm_pdf(signed("16")).unwrap(), Wad::ZERO);
        assert_eq!(std_norm_pdf(signed("-20")).unwrap(), Wad::ZERO);
    }

    proptest! {
        #[test]
        fn prop_erf_antisymmetry_exact(raw in 1i128..7_000_000_000_000_000_000) {
            let z = SignedWad::from_raw(raw);
            let forward = erf(z).unwrap();
            let backward = erf(-z).unwrap();
            prop_assert_eq!(forward.raw_value(), -backward.raw_value());
        }

        #[test]
        fn prop_erf_bounded(raw in -7_000_000_000_000_000_000i128..7_000_000_000_000_000_000) {
            let result = erf(SignedWad::from_raw(raw)).unwrap();
            prop_assert!(result.abs() <= Wad::ONE);
        }

        #[test]
        fn prop_cdf_complement(raw in 1i128..6_000_000_000_000_000_000) {
            // Phi(x) + Phi(-x) == 1 up to one raw unit of floor division
            let x = SignedWad::from_raw(raw);
            let upper = std_norm_cdf(x).unwrap().raw_value();
            let lower = std_norm_cdf(-x).unwrap().raw_value();
            let sum = upper + lower;
            prop_assert!(Wad::ONE.raw_value() - sum <= 1);
        }
    }
}
