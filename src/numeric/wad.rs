// ============================================================================
// WAD Fixed-Point Types
// 18-decimal fixed-point arithmetic over integer words
// ============================================================================

use super::errors::{NumericError, NumericResult};
use primitive_types::U256;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The WAD scale factor: 1.0 is represented as 10^18.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Half scale for round-half-up
const HALF_SCALE: u128 = SCALE / 2;

/// Unsigned WAD fixed-point number.
///
/// Internally stores `value × 10^18` as a `u128`, giving a value range of
/// `[0, ~3.4 × 10^20]` with 10^-18 resolution. All arithmetic is checked:
/// results that leave the representable range fail explicitly instead of
/// wrapping.
///
/// Multiplication and division widen to 256 bits internally and round
/// half-up, so identical inputs produce bit-identical outputs on every
/// target.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Wad(u128);

/// Signed WAD fixed-point number.
///
/// Internally stores `value × 10^18` as an `i128`. Used where a sign is
/// semantically meaningful: rates, logarithms, moneyness terms, theta.
/// Rounding on multiply/divide is applied to the magnitude, so negation
/// commutes with every operation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct SignedWad(i128);

// ============================================================================
// Widened Arithmetic Core
// ============================================================================

/// `(a × b) / SCALE` with a 256-bit intermediate, round half-up.
fn mul_scaled(a: u128, b: u128) -> NumericResult<u128> {
    let wide = U256::from(a) * U256::from(b) + U256::from(HALF_SCALE);
    let result = wide / U256::from(SCALE);
    if result > U256::from(u128::MAX) {
        Err(NumericError::Overflow)
    } else {
        Ok(result.as_u128())
    }
}

/// `(a × SCALE) / b` with a 256-bit intermediate, round half-up.
fn div_scaled(a: u128, b: u128) -> NumericResult<u128> {
    if b == 0 {
        return Err(NumericError::DivisionByZero);
    }
    let wide = U256::from(a) * U256::from(SCALE) + U256::from(b / 2);
    let result = wide / U256::from(b);
    if result > U256::from(u128::MAX) {
        Err(NumericError::Overflow)
    } else {
        Ok(result.as_u128())
    }
}

// ============================================================================
// Unsigned WAD
// ============================================================================

impl Wad {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(SCALE);

    /// Maximum representable value
    pub const MAX: Self = Self(u128::MAX);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled by 10^18).
    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: u128) -> NumericResult<Self> {
        value
            .checked_mul(SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from integer and fractional parts.
    ///
    /// `fraction` is in raw 10^-18 units and must be below `SCALE`.
    #[inline]
    pub fn from_parts(integer: u64, fraction: u64) -> NumericResult<Self> {
        if fraction as u128 >= SCALE {
            return Err(NumericError::InvalidInput);
        }
        (integer as u128)
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction as u128))
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 10^18).
    #[inline]
    pub const fn raw_value(self) -> u128 {
        self.0
    }

    /// Get the integer part (truncated).
    #[inline]
    pub const fn integer_part(self) -> u128 {
        self.0 / SCALE
    }

    /// Get the fractional part in raw 10^-18 units.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % SCALE) as u64
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Underflow` if `rhs > self` (unsigned values cannot go
    /// below zero).
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(NumericError::Underflow)
    }

    /// Checked multiplication with round half-up.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        mul_scaled(self.0, rhs.0).map(Self)
    }

    /// Checked division with round half-up.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        div_scaled(self.0, rhs.0).map(Self)
    }

    /// Multiply by a plain integer (no rescaling needed).
    ///
    /// More efficient than `checked_mul` when multiplying by a whole number.
    #[inline]
    pub fn checked_mul_int(self, rhs: u128) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Reinterpret as a signed WAD.
    ///
    /// # Errors
    /// Returns `Overflow` if the value exceeds the signed range.
    #[inline]
    pub fn to_signed(self) -> NumericResult<SignedWad> {
        if self.0 > i128::MAX as u128 {
            Err(NumericError::Overflow)
        } else {
            Ok(SignedWad(self.0 as i128))
        }
    }
}

// ============================================================================
// Signed WAD
// ============================================================================

impl SignedWad {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(SCALE as i128);

    /// Maximum representable value
    pub const MAX: Self = Self(i128::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i128::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled by 10^18).
    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        (value as i128)
            .checked_mul(SCALE as i128)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 10^18).
    #[inline]
    pub const fn raw_value(self) -> i128 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i128 {
        self.0 / SCALE as i128
    }

    /// Get the fractional part as a positive value in raw 10^-18 units.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % SCALE as i128).unsigned_abs() as u64
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value as an unsigned WAD. Never fails: the unsigned range
    /// covers the magnitude of every signed value.
    #[inline]
    pub const fn abs(self) -> Wad {
        Wad(self.0.unsigned_abs())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked multiplication with round half-up on the magnitude.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let magnitude = mul_scaled(self.0.unsigned_abs(), rhs.0.unsigned_abs())?;
        Self::from_sign_magnitude(self.0.is_negative() != rhs.0.is_negative(), magnitude)
    }

    /// Checked division with round half-up on the magnitude.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        let magnitude = div_scaled(self.0.unsigned_abs(), rhs.0.unsigned_abs())?;
        Self::from_sign_magnitude(self.0.is_negative() != rhs.0.is_negative(), magnitude)
    }

    /// Checked negation.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.0.checked_neg().map(Self).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn from_sign_magnitude(negative: bool, magnitude: u128) -> NumericResult<Self> {
        if magnitude > i128::MAX as u128 {
            return Err(if negative {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            });
        }
        let value = magnitude as i128;
        Ok(Self(if negative { -value } else { value }))
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Reinterpret as an unsigned WAD.
    ///
    /// # Errors
    /// Returns `Underflow` if the value is negative.
    #[inline]
    pub fn to_unsigned(self) -> NumericResult<Wad> {
        if self.0 < 0 {
            Err(NumericError::Underflow)
        } else {
            Ok(Wad(self.0 as u128))
        }
    }
}

// Infallible Neg for ergonomics (panics on i128::MIN - use checked_neg in
// production)
impl Neg for SignedWad {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wad({}, raw={})", self, self.0)
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.integer_part(), self.fractional_part())
    }
}

impl fmt::Debug for SignedWad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignedWad({}, raw={})", self, self.0)
    }
}

impl fmt::Display for SignedWad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if self.0 < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:018}", frac_part)
        } else {
            write!(f, "{}.{:018}", int_part, frac_part)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Split a decimal string into sign, integer part and raw fractional units.
fn parse_decimal_str(s: &str) -> NumericResult<(bool, u128, u64)> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s)
    };

    let (int_str, frac_str) = if let Some(pos) = s.find('.') {
        (&s[..pos], Some(&s[pos + 1..]))
    } else {
        (s, None)
    };

    let int_val: u128 = if int_str.is_empty() {
        0
    } else {
        int_str.parse().map_err(|_| NumericError::InvalidInput)?
    };

    let frac_val: u64 = if let Some(frac) = frac_str {
        if frac.is_empty() {
            0
        } else if frac.len() > 18 {
            return Err(NumericError::PrecisionLoss);
        } else {
            // Pad with zeros to reach 18 digits
            let padded = format!("{:0<18}", frac);
            padded.parse().map_err(|_| NumericError::InvalidInput)?
        }
    } else {
        0
    };

    Ok((is_negative, int_val, frac_val))
}

impl std::str::FromStr for Wad {
    type Err = NumericError;

    /// Parse from a decimal string, e.g. "123.456".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_negative, int_val, frac_val) = parse_decimal_str(s)?;
        if is_negative {
            return Err(NumericError::InvalidInput);
        }
        int_val
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(frac_val as u128))
            .map(Self)
            .ok_or(NumericError::Overflow)
    }
}

impl std::str::FromStr for SignedWad {
    type Err = NumericError;

    /// Parse from a decimal string, e.g. "-0.001".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_negative, int_val, frac_val) = parse_decimal_str(s)?;
        let magnitude = int_val
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(frac_val as u128))
            .ok_or(NumericError::Overflow)?;
        Self::from_sign_magnitude(is_negative, magnitude)
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl Wad {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// - `InvalidInput` if the decimal is negative
    /// - `PrecisionLoss` if significant digits would be lost
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(NumericError::InvalidInput);
        }
        SignedWad::from_decimal(d)?.to_unsigned()
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display/debugging only.
    ///
    /// # Errors
    /// Returns `Overflow` when the value exceeds `Decimal`'s 96-bit
    /// mantissa range.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        if self.0 > i128::MAX as u128 {
            return Err(NumericError::Overflow);
        }
        rust_decimal::Decimal::try_from_i128_with_scale(self.0 as i128, 18)
            .map_err(|_| NumericError::Overflow)
    }
}

impl SignedWad {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// - `PrecisionLoss` if significant digits would be lost
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let multiplier = rust_decimal::Decimal::from(SCALE as u64);
        let scaled = d
            .checked_mul(multiplier)
            .ok_or(NumericError::Overflow)?;

        let raw = scaled.to_i128().ok_or(NumericError::Overflow)?;

        // Check for precision loss: if the decimal has more than 18 places
        if d.scale() > 18 {
            let reconstructed = rust_decimal::Decimal::from_i128_with_scale(raw, 18);
            if reconstructed != d {
                return Err(NumericError::PrecisionLoss);
            }
        }

        Ok(Self(raw))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display/debugging only.
    ///
    /// # Errors
    /// Returns `Overflow` when the value exceeds `Decimal`'s 96-bit
    /// mantissa range.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.0, 18)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================
