//! Option type definitions.

use num_traits::Float;

/// Direction of an option payoff.
///
/// Wire format (with the `serde` feature) is lowercase: `"call"` / `"put"`.
/// Anything else is rejected at deserialisation, so the enum itself never
/// holds an out-of-domain value.
///
/// # Examples
/// ```
/// use analytics_models::instruments::OptionType;
///
/// let call = OptionType::Call;
/// assert!(call.is_call());
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0) at expiry
    Call,
    /// Put option: max(K - S, 0) at expiry
    Put,
}

impl OptionType {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Exercise-now value of the option, ignoring time value.
    ///
    /// max(S - K, 0) for a call, max(K - S, 0) for a put.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_call_is_put() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_intrinsic_call() {
        // ITM call
        assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
        // OTM call
        assert_eq!(OptionType::Call.intrinsic(90.0_f64, 100.0), 0.0);
        // ATM call
        assert_eq!(OptionType::Call.intrinsic(100.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_put() {
        // ITM put
        assert_eq!(OptionType::Put.intrinsic(90.0_f64, 100.0), 10.0);
        // OTM put
        assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", OptionType::Call), "call");
        assert_eq!(format!("{}", OptionType::Put), "put");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_lowercase_wire_format() {
            let call: OptionType = serde_json::from_str("\"call\"").unwrap();
            assert_eq!(call, OptionType::Call);

            let put: OptionType = serde_json::from_str("\"put\"").unwrap();
            assert_eq!(put, OptionType::Put);
        }

        #[test]
        fn test_unknown_variant_rejected() {
            let result: Result<OptionType, _> = serde_json::from_str("\"straddle\"");
            assert!(result.is_err());
        }
    }
}
