// ============================================================================
// Pricing Kernel Library
// Deterministic fixed-point Black-Scholes pricing for integer-only targets
// ============================================================================

//! # Pricing Kernel
//!
//! A deterministic fixed-point numerical library that computes exponential,
//! logarithm, square-root and error-function primitives without floating
//! point, and composes them into a Black-Scholes engine (prices and Greeks)
//! for European options.
//!
//! ## Features
//!
//! - **Integer-only arithmetic**: every value is an 18-decimal WAD fixed
//!   point; identical inputs produce bit-identical outputs on every target
//! - **Hand-tuned approximations**: range reduction plus Pade/Maclaurin
//!   tails with sub-1e-13 relative error on the documented domains
//! - **Checked everywhere**: arithmetic that leaves the representable range
//!   fails explicitly, never wraps
//! - **Typed domain errors**: every public entry point validates its inputs
//!   against fixed bounds before computing
//!
//! ## Example
//!
//! ```rust
//! use pricing_kernel::prelude::*;
//!
//! let params = OptionParams::new(
//!     Wad::from_integer(1000).unwrap(),       // spot
//!     Wad::from_integer(980).unwrap(),        // strike
//!     60 * 86_400,                            // 60 days to expiry
//!     "0.6".parse().unwrap(),                 // 60% volatility
//!     "0.05".parse().unwrap(),                // 5% rate
//! );
//!
//! let call = call_price(&params).unwrap();
//! let greeks = delta(&params).unwrap();
//! println!("call: {}  delta: {}", call, greeks.call);
//! ```

pub mod errors;
pub mod math;
pub mod numeric;
pub mod pricing;

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{MathError, MathResult};
    pub use crate::math::{erf, exp, ln, log10, log2, sqrt, std_norm_cdf, std_norm_pdf};
    pub use crate::numeric::{NumericError, SignedWad, Wad};
    pub use crate::pricing::{
        call_price, delta, future_price, gamma, put_price, seconds_to_expiry, theta, vega,
        Delta, OptionParams, Theta,
    };
}
