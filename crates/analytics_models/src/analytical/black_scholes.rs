//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form pricing and analytical Greeks for
//! European call and put options under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Epsilon-Floor Policy
//!
//! Expiry and volatility are floored at [`EPSILON_FLOOR`] before any
//! division or logarithm. At-expiry and zero-volatility options therefore
//! produce finite values through the ordinary formulas — the price converges
//! to intrinsic value as T approaches the floor — rather than taking a
//! separate code path or raising an error.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::{OptionParams, OptionType};

/// Floor applied to expiry and volatility before they enter a denominator
/// or logarithm. Keeps degenerate inputs (T = 0, σ = 0) finite and non-NaN.
pub const EPSILON_FLOOR: f64 = 1e-10;

/// Calendar days per year, used for the theta unit convention.
const DAYS_PER_YEAR: f64 = 365.0;

/// Percentage-point scale for the vega and rho unit conventions.
const PER_CENT: f64 = 100.0;

/// Risk sensitivities of an option price, computed together.
///
/// All five values are derived from the same clamped S, K, T, r, σ and the
/// same d₁/d₂ terms as the corresponding price — never mixed across calls.
///
/// ## Unit Conventions
///
/// These scalings are part of the contract; every consumer's reading of the
/// numbers depends on them:
/// - `vega` is per 1 **percentage point** of volatility (the raw ∂V/∂σ
///   divided by 100)
/// - `rho` is per 1 **percentage point** of rate (divided by 100)
/// - `theta` is decay per **calendar day** (divided by 365)
/// - `delta` and `gamma` are per unit of spot, unscaled
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: T,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: T,
    /// Vega: sensitivity to a 1-percentage-point change in volatility.
    pub vega: T,
    /// Theta: price decay per calendar day.
    pub theta: T,
    /// Rho: sensitivity to a 1-percentage-point change in the rate.
    pub rho: T,
}

/// Black-Scholes model for a single European option.
///
/// Construction precomputes the quantities shared by the price and every
/// Greek — clamped σ and T, √T, d₁, d₂, and the discount factor — so all
/// outputs of one instance are internally consistent by construction.
///
/// Domain validation (positive spot/strike, non-negative expiry/volatility)
/// happens at [`OptionParams::new`]; every method here is total.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use analytics_models::instruments::{OptionParams, OptionType};
/// use analytics_models::analytical::BlackScholes;
///
/// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let model = BlackScholes::new(params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = model.call_price() - model.put_price() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    params: OptionParams<T>,
    /// Volatility after the epsilon floor
    vol: T,
    /// Expiry after the epsilon floor
    expiry: T,
    sqrt_t: T,
    d1: T,
    d2: T,
    /// Discount factor e^(-rT) on the clamped expiry
    discount: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a model from validated parameters, precomputing d₁, d₂, and
    /// the discount factor from the clamped inputs.
    pub fn new(params: OptionParams<T>) -> Self {
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(EPSILON_FLOOR).unwrap();

        let vol = params.volatility().max(epsilon);
        let expiry = params.expiry().max(epsilon);

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = vol * sqrt_t;

        // d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (params.spot() / params.strike()).ln();
        let drift = (params.rate() + half * vol * vol) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        let discount = (-params.rate() * expiry).exp();

        Self {
            params,
            vol,
            expiry,
            sqrt_t,
            d1,
            d2,
            discount,
        }
    }

    /// Returns the parameters this model was built from (unclamped).
    #[inline]
    pub fn params(&self) -> &OptionParams<T> {
        &self.params
    }

    /// Returns the d₁ term.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns the d₂ term.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }

    /// Computes the European call price for these parameters.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn call_price(&self) -> T {
        self.params.spot() * norm_cdf(self.d1)
            - self.params.strike() * self.discount * norm_cdf(self.d2)
    }

    /// Computes the European put price for these parameters.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn put_price(&self) -> T {
        self.params.strike() * self.discount * norm_cdf(-self.d2)
            - self.params.spot() * norm_cdf(-self.d1)
    }

    /// Theoretical fair value of the option described by the parameters.
    #[inline]
    pub fn price(&self) -> T {
        match self.params.option_type() {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁), in \[0, 1\]
    /// - Put Delta = N(d₁) - 1, in \[-1, 0\]
    #[inline]
    pub fn delta(&self) -> T {
        let n_d1 = norm_cdf(self.d1);
        match self.params.option_type() {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - T::one(),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T) — identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> T {
        norm_pdf(self.d1) / (self.params.spot() * self.vol * self.sqrt_t)
    }

    /// Computes Vega per 1-percentage-point change in volatility.
    ///
    /// Vega = S·φ(d₁)·√T / 100 — identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> T {
        let per_cent = T::from(PER_CENT).unwrap();
        self.params.spot() * norm_pdf(self.d1) * self.sqrt_t / per_cent
    }

    /// Computes Theta as price decay per calendar day.
    ///
    /// Theta = -S·φ(d₁)·σ / (2√T) / 365 — identical for calls and puts.
    #[inline]
    pub fn theta(&self) -> T {
        let two = T::from(2.0).unwrap();
        let days = T::from(DAYS_PER_YEAR).unwrap();
        -(self.params.spot() * norm_pdf(self.d1) * self.vol) / (two * self.sqrt_t) / days
    }

    /// Computes Rho per 1-percentage-point change in the rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂) / 100
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂) / 100
    #[inline]
    pub fn rho(&self) -> T {
        let per_cent = T::from(PER_CENT).unwrap();
        let k_t_disc = self.params.strike() * self.expiry * self.discount;
        match self.params.option_type() {
            OptionType::Call => k_t_disc * norm_cdf(self.d2) / per_cent,
            OptionType::Put => -k_t_disc * norm_cdf(-self.d2) / per_cent,
        }
    }

    /// Computes all five Greeks from the shared d₁/d₂ terms.
    ///
    /// The result is guaranteed to be internally consistent: every value
    /// corresponds to the exact same clamped inputs as [`Self::price`].
    pub fn greeks(&self) -> Greeks<T> {
        Greeks {
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(),
            rho: self.rho(),
        }
    }
}
