// ============================================================================
// Greeks
// First- and second-order sensitivities of the Black-Scholes price
// ============================================================================

use super::black_scholes::moneyness_terms;
use super::params::OptionParams;
use super::validator;
use crate::errors::MathResult;
use crate::math::{exp, sqrt, std_norm_cdf, std_norm_pdf};
use crate::numeric::{SignedWad, Wad};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Call and put delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delta {
    /// N(d1), in [0, 1]
    pub call: SignedWad,
    /// N(d1) - 1, in [-1, 0]
    pub put: SignedWad,
}

/// Call and put theta (annualized time decay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Theta {
    pub call: SignedWad,
    pub put: SignedWad,
}

/// Delta: sensitivity of the option price to the spot.
///
/// # Edge cases
/// At expiry delta collapses to the moneyness indicator: call 1/0 and put
/// 0/-1 for in/out of the money, with at-the-money counting as out.
///
/// # Errors
/// Returns a domain error if any input violates its bounds.
pub fn delta(params: &OptionParams) -> MathResult<Delta> {
    validator::validate_option(params)?;
    if params.time_to_expiry_secs == 0 {
        let call = if params.spot > params.strike {
            SignedWad::ONE
        } else {
            SignedWad::ZERO
        };
        return Ok(Delta {
            call,
            put: call.checked_sub(SignedWad::ONE)?,
        });
    }

    let terms = moneyness_terms(params)?;
    let call = std_norm_cdf(terms.d1)?.to_signed()?;
    Ok(Delta {
        call,
        put: call.checked_sub(SignedWad::ONE)?,
    })
}

/// Gamma: n(d1) / (spot * volAdj). Zero at expiry.
///
/// # Errors
/// Returns a domain error if any input violates its bounds.
pub fn gamma(params: &OptionParams) -> MathResult<Wad> {
    validator::validate_option(params)?;
    if params.time_to_expiry_secs == 0 {
        return Ok(Wad::ZERO);
    }

    let terms = moneyness_terms(params)?;
    let density = std_norm_pdf(terms.d1)?;
    density
        .checked_div(params.spot.checked_mul(terms.vol_adj)?)
        .map_err(Into::into)
}

/// Vega: spot * n(d1) * sqrt(T). Zero at expiry.
///
/// # Errors
/// Returns a domain error if any input violates its bounds.
pub fn vega(params: &OptionParams) -> MathResult<Wad> {
    validator::validate_option(params)?;
    if params.time_to_expiry_secs == 0 {
        return Ok(Wad::ZERO);
    }

    let terms = moneyness_terms(params)?;
    let density = std_norm_pdf(terms.d1)?;
    params
        .spot
        .checked_mul(density)?
        .checked_mul(sqrt(terms.time_years)?)
        .map_err(Into::into)
}

/// Theta: -spot*n(d1)*vol / (2*sqrt(T)) plus the rate/discount carry term,
/// which differs in sign between call and put. Zero at expiry.
///
/// # Errors
/// Returns a domain error if any input violates its bounds.
pub fn theta(params: &OptionParams) -> MathResult<Theta> {
    validator::validate_option(params)?;
    if params.time_to_expiry_secs == 0 {
        return Ok(Theta {
            call: SignedWad::ZERO,
            put: SignedWad::ZERO,
        });
    }

    let terms = moneyness_terms(params)?;
    let discounted_strike = params.strike.checked_div(exp(terms.rate_time)?)?;
    let density = std_norm_pdf(terms.d1)?;

    let decay = params
        .spot
        .checked_mul(density)?
        .checked_mul(params.volatility)?
        .checked_div(sqrt(terms.time_years)?.checked_mul_int(2)?)?
        .to_signed()?
        .checked_neg()?;

    let rate_leg = params.rate.checked_mul(discounted_strike.to_signed()?)?;
    let call_carry = rate_leg.checked_mul(std_norm_cdf(terms.d2)?.to_signed()?)?;
    let put_carry = rate_leg.checked_mul(std_norm_cdf(terms.d2.checked_neg()?)?.to_signed()?)?;

    Ok(Theta {
        call: decay.checked_sub(call_carry)?,
        put: decay.checked_add(put_carry)?,
    })
}

// ============================================================================
// Tests
// ============================================================================
