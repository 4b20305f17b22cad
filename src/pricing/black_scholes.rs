// ============================================================================
// Black-Scholes Pricing
// Future price, moneyness terms, and European call/put prices
// ============================================================================

use super::params::{year_fraction, OptionParams};
use super::validator;
use crate::errors::MathResult;
use crate::math::{exp, ln, sqrt, std_norm_cdf};
use crate::numeric::{SignedWad, Wad};

/// Floor for vol*sqrt(T): keeps d1 finite as vol*time -> 0 while staying
/// far below any accepted volatility's contribution (10^-12)
pub(crate) const MIN_VOL_ADJ: Wad = Wad::from_raw(1_000_000);

/// The shared d1/d2 decomposition.
pub(crate) struct MoneynessTerms {
    pub d1: SignedWad,
    pub d2: SignedWad,
    pub vol_adj: Wad,
    pub rate_time: SignedWad,
    pub time_years: Wad,
}

/// Compute d1, d2 and the auxiliary terms shared by prices and Greeks.
///
/// d1 = (rate*T + volAdj^2/2 - ln(strike/spot)) / volAdj, with
/// volAdj = vol * sqrt(T); d2 = d1 - volAdj.
pub(crate) fn moneyness_terms(params: &OptionParams) -> MathResult<MoneynessTerms> {
    let time_years = year_fraction(params.time_to_expiry_secs)?;
    let vol_adj = params
        .volatility
        .checked_mul(sqrt(time_years)?)?
        .max(MIN_VOL_ADJ);
    let rate_time = params.rate.checked_mul(time_years.to_signed()?)?;
    let log_moneyness = ln(params.strike.checked_div(params.spot)?)?;
    let half_variance = Wad::from_raw(vol_adj.checked_mul(vol_adj)?.raw_value() / 2);

    let numerator = rate_time
        .checked_add(half_variance.to_signed()?)?
        .checked_sub(log_moneyness)?;
    let d1 = numerator.checked_div(vol_adj.to_signed()?)?;
    let d2 = d1.checked_sub(vol_adj.to_signed()?)?;

    Ok(MoneynessTerms {
        d1,
        d2,
        vol_adj,
        rate_time,
        time_years,
    })
}

/// Risk-free future price: spot * e^(rate*T).
///
/// # Edge cases
/// - Zero time to expiry returns the spot unchanged (no spurious 1 +/- eps
///   factor from the exponential)
///
/// # Errors
/// Returns a domain error if spot, expiry or rate violate their bounds.
pub fn future_price(spot: Wad, time_to_expiry_secs: u64, rate: SignedWad) -> MathResult<Wad> {
    validator::validate_future(spot, time_to_expiry_secs, rate)?;
    if time_to_expiry_secs == 0 {
        return Ok(spot);
    }
    let time_years = year_fraction(time_to_expiry_secs)?;
    let growth = exp(rate.checked_mul(time_years.to_signed()?)?)?;
    spot.checked_mul(growth).map_err(Into::into)
}

/// European call price: spot*N(d1) - discountedStrike*N(d2).
///
/// # Edge cases
/// - At expiry returns the exact intrinsic value max(0, spot - strike)
/// - The final subtraction clamps to zero: approximation error must not
///   surface as a small negative price near zero intrinsic value
///
/// # Errors
/// Returns a domain error if any input violates its bounds.
pub fn call_price(params: &OptionParams) -> MathResult<Wad> {
    validator::validate_option(params)?;
    if params.time_to_expiry_secs == 0 {
        return Ok(params.spot.checked_sub(params.strike).unwrap_or(Wad::ZERO));
    }

    let terms = moneyness_terms(params)?;
    let discounted_strike = params.strike.checked_div(exp(terms.rate_time)?)?;
    let spot_leg = params.spot.checked_mul(std_norm_cdf(terms.d1)?)?;
    let strike_leg = discounted_strike.checked_mul(std_norm_cdf(terms.d2)?)?;
    Ok(spot_leg.checked_sub(strike_leg).unwrap_or(Wad::ZERO))
}

/// European put price: discountedStrike*N(-d2) - spot*N(-d1).
///
/// # Edge cases
/// - At expiry returns the exact intrinsic value max(0, strike - spot)
/// - The final subtraction clamps to zero, mirroring the call
///
/// # Errors
/// Returns a domain error if any input violates its bounds.
pub fn put_price(params: &OptionParams) -> MathResult<Wad> {
    validator::validate_option(params)?;
    if params.time_to_expiry_secs == 0 {
        return Ok(params.strike.checked_sub(params.spot).unwrap_or(Wad::ZERO));
    }

    let terms = moneyness_terms(params)?;
    let discounted_strike = params.strike.checked_div(exp(terms.rate_time)?)?;
    let strike_leg = discounted_strike.checked_mul(std_norm_cdf(terms.d2.checked_neg()?)?)?;
    let spot_leg = params.spot.checked_mul(std_norm_cdf(terms.d1.checked_neg()?)?)?;
    Ok(strike_leg.checked_sub(spot_leg).unwrap_or(Wad::ZERO))
}

// ============================================================================
// Tests
// ============================================================================
