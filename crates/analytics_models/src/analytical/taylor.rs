//! Taylor-series repricing from Greeks.
//!
//! Given a base price and its Greeks, approximates the new price after a
//! small market move without re-running the full pricer. This is what makes
//! interactive what-if sliders cheap: one multiply-add chain per tick
//! instead of four CDF evaluations.

use num_traits::Float;

use super::black_scholes::Greeks;

/// A small market perturbation to reprice against.
///
/// Units follow the Greeks' conventions, so the expansion is a plain
/// dot product with no rescaling:
/// - `spot`: absolute change in the underlying price
/// - `days`: elapsed calendar days (positive = time passing)
/// - `vol_points`: volatility change in percentage points (1.0 = one vol point)
/// - `rate_points`: rate change in percentage points
///
/// # Examples
/// ```
/// use analytics_models::analytical::MarketShift;
///
/// let shift = MarketShift::spot_move(1.5_f64);
/// assert_eq!(shift.spot, 1.5);
/// assert_eq!(shift.days, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketShift<T: Float> {
    /// Absolute change in spot
    pub spot: T,
    /// Elapsed calendar days
    pub days: T,
    /// Volatility change in percentage points
    pub vol_points: T,
    /// Rate change in percentage points
    pub rate_points: T,
}

impl<T: Float> MarketShift<T> {
    /// Creates a shift with every component specified.
    pub fn new(spot: T, days: T, vol_points: T, rate_points: T) -> Self {
        Self {
            spot,
            days,
            vol_points,
            rate_points,
        }
    }

    /// The identity shift: nothing moves.
    pub fn none() -> Self {
        let zero = T::zero();
        Self::new(zero, zero, zero, zero)
    }

    /// A pure spot move.
    pub fn spot_move(spot: T) -> Self {
        let zero = T::zero();
        Self::new(spot, zero, zero, zero)
    }

    /// Pure time decay over the given number of calendar days.
    pub fn time_decay(days: T) -> Self {
        let zero = T::zero();
        Self::new(zero, days, zero, zero)
    }

    /// A pure volatility move, in percentage points.
    pub fn vol_move(vol_points: T) -> Self {
        let zero = T::zero();
        Self::new(zero, zero, vol_points, zero)
    }

    /// Returns true if every component is exactly zero.
    pub fn is_none(&self) -> bool {
        let zero = T::zero();
        self.spot == zero && self.days == zero && self.vol_points == zero
            && self.rate_points == zero
    }
}

/// Second-order-in-spot, first-order-elsewhere local price approximation.
///
/// ```text
/// new = base + Δ·dS + ½·Γ·dS² + Θ·days + V·dσ_pts + ρ·dr_pts
/// ```
///
/// Valid for small local perturbations only — there is no accuracy guarantee
/// for large moves or near expiry, where the true price surface curves away
/// from its tangent. The all-zero shift returns `base_price` exactly.
///
/// # Examples
/// ```
/// use analytics_models::analytical::{taylor_reprice, Greeks, MarketShift};
///
/// let greeks = Greeks { delta: 0.6_f64, gamma: 0.02, vega: 0.38, theta: -0.01, rho: 0.53 };
///
/// // Zero shift is the identity
/// let same = taylor_reprice(10.45, &greeks, &MarketShift::none());
/// assert_eq!(same, 10.45);
///
/// // A $2 spot rally picks up delta plus gamma convexity
/// let up = taylor_reprice(10.45, &greeks, &MarketShift::spot_move(2.0));
/// assert!((up - (10.45 + 0.6 * 2.0 + 0.5 * 0.02 * 4.0)).abs() < 1e-12);
/// ```
#[inline]
pub fn taylor_reprice<T: Float>(base_price: T, greeks: &Greeks<T>, shift: &MarketShift<T>) -> T {
    let half = T::from(0.5).unwrap();

    base_price
        + greeks.delta * shift.spot
        + half * greeks.gamma * shift.spot * shift.spot
        + greeks.theta * shift.days
        + greeks.vega * shift.vol_points
        + greeks.rho * shift.rate_points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use crate::instruments::{OptionParams, OptionType};
    use approx::assert_relative_eq;

    fn sample_greeks() -> Greeks<f64> {
        Greeks {
            delta: 0.6368,
            gamma: 0.0188,
            vega: 0.3752,
            theta: -0.0103,
            rho: 0.5323,
        }
    }

    // ==========================================================
    // Identity and Single-Factor Tests
    // ==========================================================

    #[test]
    fn test_zero_shift_is_exact_identity() {
        // Must hold bitwise for any base price and Greeks
        for base in [0.0, 1e-8, 10.4506, 1277.5, -3.25] {
            let result = taylor_reprice(base, &sample_greeks(), &MarketShift::none());
            assert_eq!(result, base);
        }
    }

    #[test]
    fn test_spot_only_shift_first_and_second_order() {
        let g = sample_greeks();
        let ds = 2.0;
        let result = taylor_reprice(10.0, &g, &MarketShift::spot_move(ds));
        let expected = 10.0 + g.delta * ds + 0.5 * g.gamma * ds * ds;
        assert_relative_eq!(result, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_time_decay_uses_theta_per_day() {
        let g = sample_greeks();
        let result = taylor_reprice(10.0, &g, &MarketShift::time_decay(3.0));
        assert_relative_eq!(result, 10.0 + g.theta * 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_vol_and_rate_shifts_in_points() {
        let g = sample_greeks();
        let shift = MarketShift::new(0.0, 0.0, 1.0, -2.0);
        let result = taylor_reprice(10.0, &g, &shift);
        assert_relative_eq!(result, 10.0 + g.vega - 2.0 * g.rho, epsilon = 1e-15);
    }

    #[test]
    fn test_shift_constructors() {
        assert!(MarketShift::<f64>::none().is_none());
        assert!(!MarketShift::spot_move(0.1_f64).is_none());
        assert_eq!(MarketShift::vol_move(2.0_f64).vol_points, 2.0);
        assert_eq!(MarketShift::time_decay(1.0_f64).days, 1.0);
    }

    // ==========================================================
    // Approximation Quality vs Full Reprice
    // ==========================================================

    #[test]
    fn test_small_spot_move_tracks_full_reprice() {
        let base = BlackScholes::new(
            OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap(),
        );
        let greeks = base.greeks();

        let ds = 0.5; // half a dollar on a $100 underlying
        let approx = taylor_reprice(base.price(), &greeks, &MarketShift::spot_move(ds));

        let full = BlackScholes::new(
            OptionParams::new(100.0 + ds, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap(),
        )
        .price();

        // Delta+gamma capture a small move to well under a tenth of a cent
        assert!((approx - full).abs() < 1e-4);
    }

    #[test]
    fn test_small_vol_move_tracks_full_reprice() {
        let base = BlackScholes::new(
            OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap(),
        );
        let greeks = base.greeks();

        // One vol point: σ 0.20 -> 0.21
        let approx = taylor_reprice(base.price(), &greeks, &MarketShift::vol_move(1.0));

        let full = BlackScholes::new(
            OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.21, OptionType::Put).unwrap(),
        )
        .price();

        assert!((approx - full).abs() < 1e-3);
    }

    #[test]
    fn test_large_move_diverges_as_documented() {
        // The contract promises nothing for large moves; confirm the
        // first-order picture really does drift so the limitation is visible.
        let base = BlackScholes::new(
            OptionParams::new(100.0_f64, 100.0, 0.1, 0.05, 0.2, OptionType::Call).unwrap(),
        );
        let greeks = base.greeks();

        let ds = 30.0;
        let approx = taylor_reprice(base.price(), &greeks, &MarketShift::spot_move(ds));
        let full = BlackScholes::new(
            OptionParams::new(130.0_f64, 100.0, 0.1, 0.05, 0.2, OptionType::Call).unwrap(),
        )
        .price();

        assert!((approx - full).abs() > 0.1);
    }
}
