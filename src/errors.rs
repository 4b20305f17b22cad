// ============================================================================
// Domain Errors
// Closed error taxonomy for the math kernel and pricing layer
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised by the pricing layer's input validation and by the
/// transcendental primitives at their domain boundaries.
///
/// Every variant corresponds to exactly one validator predicate or one
/// primitive's domain bound. A rejected call never returns a partial or
/// clamped result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Spot price below `MIN_SPOT`
    SpotLowerBound,
    /// Spot price above `MAX_SPOT`
    SpotUpperBound,
    /// Strike below `spot / MAX_STRIKE_SPOT_RATIO`
    StrikeLowerBound,
    /// Strike above `spot * MAX_STRIKE_SPOT_RATIO`
    StrikeUpperBound,
    /// Time to expiry above `MAX_EXPIRATION`
    TimeToExpiryUpperBound,
    /// Rate above `MAX_RATE`
    RateUpperBound,
    /// Volatility below `MIN_VOLATILITY`
    VolatilityLowerBound,
    /// Exponential argument too large to represent
    ExpUpperBound,
    /// Logarithm of zero
    LnLowerBound,
    /// Arithmetic failure in the fixed-point substrate
    Numeric(NumericError),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SpotLowerBound => write!(f, "spot price below minimum bound"),
            MathError::SpotUpperBound => write!(f, "spot price above maximum bound"),
            MathError::StrikeLowerBound => {
                write!(f, "strike below minimum strike/spot ratio")
            },
            MathError::StrikeUpperBound => {
                write!(f, "strike above maximum strike/spot ratio")
            },
            MathError::TimeToExpiryUpperBound => {
                write!(f, "time to expiry above maximum bound")
            },
            MathError::RateUpperBound => write!(f, "rate above maximum bound"),
            MathError::VolatilityLowerBound => {
                write!(f, "volatility below minimum bound")
            },
            MathError::ExpUpperBound => {
                write!(f, "exponential argument above maximum bound")
            },
            MathError::LnLowerBound => write!(f, "logarithm argument must be positive"),
            MathError::Numeric(e) => write!(f, "fixed-point arithmetic failure: {}", e),
        }
    }
}

impl std::error::Error for MathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MathError::Numeric(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NumericError> for MathError {
    fn from(e: NumericError) -> Self {
        MathError::Numeric(e)
    }
}

/// Result type alias for kernel and pricing operations
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MathError::LnLowerBound.to_string(),
            "logarithm argument must be positive"
        );
        assert_eq!(
            MathError::Numeric(NumericError::DivisionByZero).to_string(),
            "fixed-point arithmetic failure: division by zero"
        );
    }

    #[test]
    fn test_from_numeric() {
        let e: MathError = NumericError::Overflow.into();
        assert_eq!(e, MathError::Numeric(NumericError::Overflow));
    }
}
