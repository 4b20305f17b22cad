// ============================================================================
// Pricing Parameters
// Input bundle and time conversion for the Black-Scholes layer
// ============================================================================

use crate::errors::MathResult;
use crate::numeric::{SignedWad, Wad};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds per year used for the time-to-expiry conversion (365 days)
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Inputs for option pricing and Greeks.
///
/// Spot, strike and volatility are unsigned WAD values; the rate is signed
/// (negative rates are valid). Time to expiry is raw seconds and is
/// converted internally to a WAD year fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionParams {
    /// Current price of the underlying
    pub spot: Wad,
    /// Strike price
    pub strike: Wad,
    /// Time to expiry in seconds
    pub time_to_expiry_secs: u64,
    /// Annualized volatility (e.g. 0.2 = 20%)
    pub volatility: Wad,
    /// Continuously compounded risk-free rate (e.g. 0.05 = 5%)
    pub rate: SignedWad,
}

impl OptionParams {
    /// Bundle pricing inputs.
    pub fn new(
        spot: Wad,
        strike: Wad,
        time_to_expiry_secs: u64,
        volatility: Wad,
        rate: SignedWad,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry_secs,
            volatility,
            rate,
        }
    }

    /// Bundle pricing inputs with the expiry given as a timestamp.
    ///
    /// An expiry at or before `now` yields zero seconds (the expiry
    /// short-circuit path).
    pub fn with_expiry(
        spot: Wad,
        strike: Wad,
        now: DateTime<Utc>,
        expiry: DateTime<Utc>,
        volatility: Wad,
        rate: SignedWad,
    ) -> Self {
        Self::new(spot, strike, seconds_to_expiry(now, expiry), volatility, rate)
    }
}

/// Seconds from `now` until `expiry`, saturating at zero once expired.
pub fn seconds_to_expiry(now: DateTime<Utc>, expiry: DateTime<Utc>) -> u64 {
    (expiry - now).num_seconds().max(0) as u64
}

/// Convert raw seconds to a WAD year fraction.
pub(crate) fn year_fraction(seconds: u64) -> MathResult<Wad> {
    Wad::from_integer(seconds as u128)?
        .checked_div(Wad::from_integer(SECONDS_PER_YEAR as u128)?)
        .map_err(Into::into)
}

// ============================================================================
// Tests
// ============================================================================
