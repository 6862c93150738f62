//! Option parameters with validation.

use num_traits::Float;

use super::error::InstrumentError;
use super::option_type::OptionType;

/// The complete parameter set for a single option computation.
///
/// Pure value object: created fresh per computation, never mutated. All
/// validation happens here, which keeps the pricing and Greeks paths total —
/// a constructed `OptionParams` is always safe to price.
///
/// Validation rules:
/// - spot and strike strictly positive (the log-moneyness ln(S/K) is
///   undefined otherwise)
/// - expiry and volatility non-negative (exact zero is legal; the pricer
///   floors both at a small epsilon before dividing)
/// - rate unrestricted (negative rates are valid inputs)
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use analytics_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0_f64, 95.0, 0.5, 0.03, 0.25, OptionType::Put).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// // Non-positive spot is a domain error, not a NaN later on
/// assert!(OptionParams::new(0.0_f64, 95.0, 0.5, 0.03, 0.25, OptionType::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
}

impl<T: Float> OptionParams<T> {
    /// Creates a new parameter set with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    /// * `rate` - Continuously-compounded risk-free rate, decimal
    /// * `volatility` - Annualised volatility, decimal (must be non-negative)
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if spot <= 0
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    /// - `InstrumentError::InvalidExpiry` if expiry < 0
    /// - `InstrumentError::InvalidVolatility` if volatility < 0
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(InstrumentError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry < zero {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility < zero {
            return Err(InstrumentError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years, as supplied by the caller.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility, as supplied by the caller.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Exercise-now value for these parameters.
    #[inline]
    pub fn intrinsic(&self) -> T {
        self.option_type.intrinsic(self.spot, self.strike)
    }
}
