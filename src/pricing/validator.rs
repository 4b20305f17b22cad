// ============================================================================
// Domain Validator
// Shared input bound checks for every public pricing entry point
// ============================================================================

use super::params::OptionParams;
use crate::errors::{MathError, MathResult};
use crate::numeric::{SignedWad, Wad, SCALE};

/// Smallest accepted spot price: 0.000001
pub const MIN_SPOT: Wad = Wad::from_raw(1_000_000_000_000);

/// Largest accepted spot price: 100,000,000
pub const MAX_SPOT: Wad = Wad::from_raw(100_000_000 * SCALE);

/// Strike must lie within [spot / ratio, spot * ratio]
pub const MAX_STRIKE_SPOT_RATIO: u128 = 1000;

/// Longest accepted time to expiry: 10 years
pub const MAX_EXPIRATION_SECS: u64 = 10 * 31_536_000;

/// Largest accepted rate: 200%
pub const MAX_RATE: SignedWad = SignedWad::from_raw(2 * SCALE as i128);

/// Smallest accepted volatility for option pricing: 0.01%
pub const MIN_VOLATILITY: Wad = Wad::from_raw(100_000_000_000_000);

/// Largest volatility the error budgets are documented and tested for.
/// Not a rejection predicate: the kernel saturates safely beyond it.
pub const MAX_VOLATILITY: Wad = Wad::from_raw(10 * SCALE);

/// Validate the full option-pricing input set.
///
/// Checks run in a fixed order and stop at the first violation; no check
/// is retried or recovered internally.
pub(crate) fn validate_option(params: &OptionParams) -> MathResult<()> {
    let result = check_spot(params.spot)
        .and_then(|_| check_strike(params.spot, params.strike))
        .and_then(|_| check_expiry(params.time_to_expiry_secs))
        .and_then(|_| check_rate(params.rate))
        .and_then(|_| check_volatility(params.volatility));
    if let Err(error) = result {
        tracing::debug!(%error, "option pricing input rejected");
        return Err(error);
    }
    Ok(())
}

/// Validate future-price inputs (no strike, no volatility).
pub(crate) fn validate_future(spot: Wad, time_to_expiry_secs: u64, rate: SignedWad) -> MathResult<()> {
    let result = check_spot(spot)
        .and_then(|_| check_expiry(time_to_expiry_secs))
        .and_then(|_| check_rate(rate));
    if let Err(error) = result {
        tracing::debug!(%error, "future pricing input rejected");
        return Err(error);
    }
    Ok(())
}

fn check_spot(spot: Wad) -> MathResult<()> {
    if spot < MIN_SPOT {
        return Err(MathError::SpotLowerBound);
    }
    if spot > MAX_SPOT {
        return Err(MathError::SpotUpperBound);
    }
    Ok(())
}

/// Requires `check_spot` to have passed: the upper comparison relies on
/// `spot * ratio` fitting the raw range.
fn check_strike(spot: Wad, strike: Wad) -> MathResult<()> {
    if let Some(scaled) = strike.raw_value().checked_mul(MAX_STRIKE_SPOT_RATIO) {
        if scaled < spot.raw_value() {
            return Err(MathError::StrikeLowerBound);
        }
    }
    if strike.raw_value() > spot.raw_value() * MAX_STRIKE_SPOT_RATIO {
        return Err(MathError::StrikeUpperBound);
    }
    Ok(())
}

fn check_expiry(time_to_expiry_secs: u64) -> MathResult<()> {
    if time_to_expiry_secs > MAX_EXPIRATION_SECS {
        return Err(MathError::TimeToExpiryUpperBound);
    }
    Ok(())
}

fn check_rate(rate: SignedWad) -> MathResult<()> {
    if rate > MAX_RATE {
        return Err(MathError::RateUpperBound);
    }
    Ok(())
}

fn check_volatility(volatility: Wad) -> MathResult<()> {
    if volatility < MIN_VOLATILITY {
        return Err(MathError::VolatilityLowerBound);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
