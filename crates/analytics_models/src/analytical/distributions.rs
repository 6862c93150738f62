//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `T: Float` so `f64` and `f32` both work.
//! The CDF is built on the Cody (1969) rational approximation to erfc, which
//! is accurate to roughly machine precision in `f64` — well inside the 1e-9
//! target the pricing layer relies on for its reference values.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// 1 / sqrt(pi)
const FRAC_1_SQRT_PI: f64 = 0.564_189_583_547_756_3;

/// Switch point between the erf and erfc rational fits.
const ERF_THRESHOLD: f64 = 0.46875;

/// Switch point between the mid-range and asymptotic erfc fits.
const ERFC_THRESHOLD: f64 = 4.0;

// Cody (1969) coefficients, regime |x| <= 0.46875: erf(x) = x * R(x^2)
const ERF_A: [f64; 5] = [
    3.161_123_743_870_565_6,
    1.138_641_541_510_501_6e2,
    3.774_852_376_853_020_2e2,
    3.209_377_589_138_469_5e3,
    1.857_777_061_846_031_5e-1,
];
const ERF_B: [f64; 4] = [
    2.360_129_095_234_412_1e1,
    2.440_246_379_344_441_7e2,
    1.282_616_526_077_372_3e3,
    2.844_236_833_439_170_6e3,
];

// Regime 0.46875 < |x| <= 4: erfc(x) = exp(-x^2) * P(x) / Q(x)
const ERFC_C: [f64; 9] = [
    5.641_884_969_886_701e-1,
    8.883_149_794_388_376,
    6.611_919_063_714_163e1,
    2.986_351_381_974_001_3e2,
    8.819_522_212_417_691e2,
    1.712_047_612_634_070_6e3,
    2.051_078_377_826_071_5e3,
    1.230_339_354_797_997_2e3,
    2.153_115_354_744_038_5e-8,
];
const ERFC_D: [f64; 8] = [
    1.574_492_611_070_983_5e1,
    1.176_939_508_913_125e2,
    5.371_811_018_620_098_5e2,
    1.621_389_574_566_690_2e3,
    3.290_799_235_733_459_6e3,
    4.362_619_090_143_247e3,
    3.439_367_674_143_721_6e3,
    1.230_339_354_803_749_4e3,
];

// Regime |x| > 4: erfc(x) = exp(-x^2)/x * (1/sqrt(pi) - P(1/x^2)/Q(1/x^2)/x^2)
const ERFC_P: [f64; 6] = [
    3.053_266_349_612_323_4e-1,
    3.603_448_999_498_044_4e-1,
    1.257_817_261_112_292_5e-1,
    1.608_378_514_874_227_7e-2,
    6.587_491_615_298_378e-4,
    1.631_538_713_730_209_8e-2,
];
const ERFC_Q: [f64; 5] = [
    2.568_520_192_289_822_4,
    1.872_952_849_923_460_5,
    5.279_051_029_514_284e-1,
    6.051_834_131_244_132e-2,
    2.335_204_976_268_691_8e-3,
];

/// erf(x) for |x| <= 0.46875 via the odd rational fit erf(x) = x * R(x²).
#[inline]
fn erf_small<T: Float>(x: T) -> T {
    let z = x * x;

    let mut num = T::from(ERF_A[4]).unwrap() * z;
    let mut den = z;
    for i in 0..3 {
        num = (num + T::from(ERF_A[i]).unwrap()) * z;
        den = (den + T::from(ERF_B[i]).unwrap()) * z;
    }

    x * (num + T::from(ERF_A[3]).unwrap()) / (den + T::from(ERF_B[3]).unwrap())
}

/// erfc(y) for 0.46875 < y <= 4.
#[inline]
fn erfc_mid<T: Float>(y: T) -> T {
    let mut num = T::from(ERFC_C[8]).unwrap() * y;
    let mut den = y;
    for i in 0..7 {
        num = (num + T::from(ERFC_C[i]).unwrap()) * y;
        den = (den + T::from(ERFC_D[i]).unwrap()) * y;
    }
    let ratio = (num + T::from(ERFC_C[7]).unwrap()) / (den + T::from(ERFC_D[7]).unwrap());

    (-y * y).exp() * ratio
}

/// erfc(y) for y > 4 via the asymptotic rational fit.
#[inline]
fn erfc_tail<T: Float>(y: T) -> T {
    let z = T::one() / (y * y);

    let mut num = T::from(ERFC_P[5]).unwrap() * z;
    let mut den = z;
    for i in 0..4 {
        num = (num + T::from(ERFC_P[i]).unwrap()) * z;
        den = (den + T::from(ERFC_Q[i]).unwrap()) * z;
    }
    let r = z * (num + T::from(ERFC_P[4]).unwrap()) / (den + T::from(ERFC_Q[4]).unwrap());

    // exp(-y²) underflows to 0 for large y, which is the right limit
    (-y * y).exp() * (T::from(FRAC_1_SQRT_PI).unwrap() - r) / y
}

/// Complementary error function, erfc(x) = 1 - erf(x).
///
/// Three-regime Cody rational approximation; total for all finite x.
#[inline]
fn erfc_cody<T: Float>(x: T) -> T {
    let y = x.abs();

    if y <= T::from(ERF_THRESHOLD).unwrap() {
        // erf fit is exact through zero, so derive erfc from it here
        return T::one() - erf_small(x);
    }

    let erfc_abs = if y <= T::from(ERFC_THRESHOLD).unwrap() {
        erfc_mid(y)
    } else {
        erfc_tail(y)
    };

    // erfc(-y) = 2 - erfc(y)
    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2)) = (1/2) * (1 + erf(x / sqrt(2)))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Better than 1e-9 absolute error for all finite x in `f64`.
///
/// # Examples
/// ```
/// use analytics_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-12);
///
/// // 97.5th percentile
/// let cdf = norm_cdf(1.959964_f64);
/// assert!((cdf - 0.975).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    // Φ(x) = 0.5 * erfc(-x / sqrt(2))
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_cody(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use analytics_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}
