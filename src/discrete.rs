//! Discrete probability distributions.
//!
//! Validated parameter structs with PMF, CDF, and analytical moments
//! for the classical discrete distributions, plus a
//! [`DiscreteDistribution`] enum for evaluating mass values over a set
//! of points with one dispatch.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Support | Mean | Variance |
//! |---|---|---|---|---|
//! | [`Poisson`] | λ | k ∈ {0, 1, …} | λ | λ |
//! | [`Binomial`] | n, p | k ∈ {0, …, n} | np | np(1−p) |
//! | [`Geometric`] | p | k ∈ {1, 2, …} | 1/p | (1−p)/p² |
//! | [`DiscreteUniform`] | a, b | k ∈ {a, …, b} | (a+b)/2 | ((b−a+1)²−1)/12 |
//!
//! # Design Notes
//!
//! PMFs are evaluated in log space through [`crate::special`]
//! (`exp(ln C(n,k) + …)` rather than multiplying factorials), so they
//! stay finite for parameters where the intermediate factorials would
//! overflow. CDFs for Poisson and Binomial use the regularized
//! incomplete gamma and beta closed forms instead of summation.

use crate::special::{ln_choose, ln_factorial, regularized_incomplete_beta, regularized_lower_gamma};

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidParameters(msg) => {
                write!(f, "invalid distribution parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

// ============================================================================
// Poisson Distribution
// ============================================================================

/// Poisson distribution with rate λ.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = λᵏ e^(−λ) / k!
/// - CDF: P(X ≤ k) = Q(k+1, λ) (regularized upper incomplete gamma)
/// - Mean: λ
/// - Variance: λ
#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new Poisson distribution with rate `lambda`.
    ///
    /// # Errors
    /// Returns `Err` if `lambda` is not finite or not strictly positive.
    pub fn new(lambda: f64) -> Result<Self, DistributionError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Poisson requires λ > 0, got λ={lambda}"
            )));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn mean(&self) -> f64 {
        self.lambda
    }

    pub fn variance(&self) -> f64 {
        self.lambda
    }

    /// PMF: λᵏ e^(−λ) / k!, evaluated as exp(k·ln λ − λ − ln k!).
    pub fn pmf(&self, k: u64) -> f64 {
        (k as f64 * self.lambda.ln() - self.lambda - ln_factorial(k)).exp()
    }

    /// CDF: P(X ≤ k) = 1 − P(k+1, λ).
    pub fn cdf(&self, k: u64) -> f64 {
        1.0 - regularized_lower_gamma(k as f64 + 1.0, self.lambda)
    }
}

// ============================================================================
// Binomial Distribution
// ============================================================================

/// Binomial distribution: number of successes in `n` independent
/// trials with success probability `p`.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = C(n, k) pᵏ (1−p)^(n−k)
/// - CDF: P(X ≤ k) = I₁₋ₚ(n−k, k+1) (regularized incomplete beta)
/// - Mean: np
/// - Variance: np(1−p)
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Creates a new binomial distribution with `n` trials and success
    /// probability `p`.
    ///
    /// # Errors
    /// Returns `Err` if `p` is not finite or outside `[0, 1]`.
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::InvalidParameters(format!(
                "Binomial requires p ∈ [0, 1], got p={p}"
            )));
        }
        Ok(Self { n, p })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    /// PMF: C(n, k) pᵏ (1−p)^(n−k), evaluated in log space.
    ///
    /// The degenerate p = 0 and p = 1 cases are handled exactly
    /// (all mass at k = 0 and k = n respectively).
    pub fn pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }
        let ln_pmf = ln_choose(self.n, k)
            + k as f64 * self.p.ln()
            + (self.n - k) as f64 * (-self.p).ln_1p();
        ln_pmf.exp()
    }

    /// CDF: P(X ≤ k) = I₁₋ₚ(n−k, k+1) for k < n, else 1.
    pub fn cdf(&self, k: u64) -> f64 {
        if k >= self.n {
            return 1.0;
        }
        regularized_incomplete_beta(1.0 - self.p, (self.n - k) as f64, k as f64 + 1.0)
    }
}

// ============================================================================
// Geometric Distribution
// ============================================================================

/// Geometric distribution: number of Bernoulli trials until the first
/// success, with support k ∈ {1, 2, …}.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = (1−p)^(k−1) p
/// - CDF: P(X ≤ k) = 1 − (1−p)ᵏ
/// - Mean: 1/p
/// - Variance: (1−p)/p²
#[derive(Debug, Clone, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Creates a new geometric distribution with success probability `p`.
    ///
    /// # Errors
    /// Returns `Err` if `p` is not finite or outside `(0, 1]`.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Geometric requires p ∈ (0, 1], got p={p}"
            )));
        }
        Ok(Self { p })
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        1.0 / self.p
    }

    pub fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }

    /// PMF: (1−p)^(k−1) p for k ≥ 1, 0 for k = 0.
    pub fn pmf(&self, k: u64) -> f64 {
        if k == 0 {
            return 0.0;
        }
        (1.0 - self.p).powf(k as f64 - 1.0) * self.p
    }

    /// CDF: 1 − (1−p)ᵏ for k ≥ 1, 0 for k = 0.
    pub fn cdf(&self, k: u64) -> f64 {
        if k == 0 {
            return 0.0;
        }
        1.0 - (1.0 - self.p).powf(k as f64)
    }
}

// ============================================================================
// Discrete Uniform Distribution
// ============================================================================

/// Discrete uniform distribution on the integers `[a, b]`.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = 1/(b−a+1) for k ∈ [a, b]
/// - CDF: P(X ≤ k) = (⌊k⌋−a+1)/(b−a+1), clamped to [0, 1]
/// - Mean: (a+b)/2
/// - Variance: ((b−a+1)² − 1)/12
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteUniform {
    a: i64,
    b: i64,
}

impl DiscreteUniform {
    /// Creates a new discrete uniform distribution on `[a, b]`.
    ///
    /// # Errors
    /// Returns `Err` if `a > b`.
    pub fn new(a: i64, b: i64) -> Result<Self, DistributionError> {
        if a > b {
            return Err(DistributionError::InvalidParameters(format!(
                "DiscreteUniform requires a ≤ b, got a={a}, b={b}"
            )));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }

    /// Number of support points, `b − a + 1`.
    fn count(&self) -> f64 {
        (self.b as i128 - self.a as i128 + 1) as f64
    }

    pub fn mean(&self) -> f64 {
        (self.a as f64 + self.b as f64) / 2.0
    }

    /// Variance = ((b−a+1)² − 1)/12.
    pub fn variance(&self) -> f64 {
        let n = self.count();
        (n * n - 1.0) / 12.0
    }

    /// PMF: 1/(b−a+1) on the support, 0 outside.
    pub fn pmf(&self, k: i64) -> f64 {
        if k < self.a || k > self.b {
            0.0
        } else {
            1.0 / self.count()
        }
    }

    /// CDF: (k−a+1)/(b−a+1), clamped to [0, 1].
    pub fn cdf(&self, k: i64) -> f64 {
        if k < self.a {
            0.0
        } else if k >= self.b {
            1.0
        } else {
            (k as i128 - self.a as i128 + 1) as f64 / self.count()
        }
    }
}

// ============================================================================
// Dispatch Enum
// ============================================================================

/// A discrete distribution chosen at runtime.
///
/// This is the entry point for evaluating probability mass values for
/// user-supplied parameters over a set of input points: build the
/// parameterized variant, then call [`pmf_values`](Self::pmf_values).
///
/// Points are `i64` so that the uniform distribution's negative
/// support is expressible; the non-negative distributions assign zero
/// mass to negative points.
///
/// # Examples
/// ```
/// use u_mathkit::discrete::{DiscreteDistribution, Poisson};
///
/// let d = DiscreteDistribution::Poisson(Poisson::new(2.0)?);
/// let masses = d.pmf_values(&[0, 1, 2, 3]);
/// assert_eq!(masses.len(), 4);
/// assert!((masses[0] - (-2.0_f64).exp()).abs() < 1e-12);
/// # Ok::<(), u_mathkit::discrete::DistributionError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DiscreteDistribution {
    Poisson(Poisson),
    Binomial(Binomial),
    Geometric(Geometric),
    Uniform(DiscreteUniform),
}

impl DiscreteDistribution {
    /// PMF at `k`. Negative `k` has zero mass except under
    /// [`DiscreteUniform`], whose support may extend below zero.
    pub fn pmf(&self, k: i64) -> f64 {
        match self {
            DiscreteDistribution::Poisson(d) => {
                if k < 0 {
                    0.0
                } else {
                    d.pmf(k as u64)
                }
            }
            DiscreteDistribution::Binomial(d) => {
                if k < 0 {
                    0.0
                } else {
                    d.pmf(k as u64)
                }
            }
            DiscreteDistribution::Geometric(d) => {
                if k < 0 {
                    0.0
                } else {
                    d.pmf(k as u64)
                }
            }
            DiscreteDistribution::Uniform(d) => d.pmf(k),
        }
    }

    /// CDF at `k`.
    pub fn cdf(&self, k: i64) -> f64 {
        match self {
            DiscreteDistribution::Poisson(d) => {
                if k < 0 {
                    0.0
                } else {
                    d.cdf(k as u64)
                }
            }
            DiscreteDistribution::Binomial(d) => {
                if k < 0 {
                    0.0
                } else {
                    d.cdf(k as u64)
                }
            }
            DiscreteDistribution::Geometric(d) => {
                if k < 0 {
                    0.0
                } else {
                    d.cdf(k as u64)
                }
            }
            DiscreteDistribution::Uniform(d) => d.cdf(k),
        }
    }

    pub fn mean(&self) -> f64 {
        match self {
            DiscreteDistribution::Poisson(d) => d.mean(),
            DiscreteDistribution::Binomial(d) => d.mean(),
            DiscreteDistribution::Geometric(d) => d.mean(),
            DiscreteDistribution::Uniform(d) => d.mean(),
        }
    }

    pub fn variance(&self) -> f64 {
        match self {
            DiscreteDistribution::Poisson(d) => d.variance(),
            DiscreteDistribution::Binomial(d) => d.variance(),
            DiscreteDistribution::Geometric(d) => d.variance(),
            DiscreteDistribution::Uniform(d) => d.variance(),
        }
    }

    /// Evaluates the PMF at every point, in order.
    pub fn pmf_values(&self, ks: &[i64]) -> Vec<f64> {
        ks.iter().map(|&k| self.pmf(k)).collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- Poisson ---

        #[test]
        fn poisson_pmf_in_unit_interval(lambda in 0.1_f64..20.0, k in 0_u64..60) {
            let d = Poisson::new(lambda).unwrap();
            let p = d.pmf(k);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn poisson_cdf_matches_partial_sum(lambda in 0.1_f64..20.0, k in 0_u64..40) {
            let d = Poisson::new(lambda).unwrap();
            let partial: f64 = (0..=k).map(|j| d.pmf(j)).sum();
            prop_assert!((d.cdf(k) - partial).abs() < 1e-8);
        }

        // --- Binomial ---

        #[test]
        fn binomial_pmf_sums_to_one(n in 1_u64..40, p in 0.0_f64..=1.0) {
            let d = Binomial::new(n, p).unwrap();
            let total: f64 = (0..=n).map(|k| d.pmf(k)).sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }

        #[test]
        fn binomial_cdf_matches_partial_sum(
            n in 1_u64..30,
            p in 0.01_f64..0.99,
            k_frac in 0.0_f64..=1.0,
        ) {
            let d = Binomial::new(n, p).unwrap();
            let k = (k_frac * n as f64) as u64;
            let partial: f64 = (0..=k).map(|j| d.pmf(j)).sum();
            prop_assert!((d.cdf(k) - partial).abs() < 1e-8);
        }

        // --- Geometric ---

        #[test]
        fn geometric_cdf_matches_partial_sum(p in 0.01_f64..=1.0, k in 1_u64..100) {
            let d = Geometric::new(p).unwrap();
            let partial: f64 = (1..=k).map(|j| d.pmf(j)).sum();
            prop_assert!((d.cdf(k) - partial).abs() < 1e-8);
        }

        // --- DiscreteUniform ---

        #[test]
        fn uniform_cdf_monotone(a in -50_i64..0, b in 0_i64..50, k in -60_i64..60) {
            let d = DiscreteUniform::new(a, b).unwrap();
            prop_assert!(d.cdf(k) <= d.cdf(k + 1) + 1e-15);
        }

        // --- DiscreteDistribution ---

        #[test]
        fn dispatch_pmf_values_matches_pointwise(lambda in 0.1_f64..10.0) {
            let d = DiscreteDistribution::Poisson(Poisson::new(lambda).unwrap());
            let points: Vec<i64> = (-2..10).collect();
            let masses = d.pmf_values(&points);
            prop_assert_eq!(masses.len(), points.len());
            for (point, mass) in points.iter().zip(&masses) {
                prop_assert_eq!(*mass, d.pmf(*point));
            }
        }
    }
}
