//! Special mathematical functions.
//!
//! Numerical approximations of the standard functions the discrete
//! distributions evaluate their PMFs and CDFs through: log-gamma for
//! log-space factorials and binomial coefficients, and the regularized
//! incomplete gamma and beta functions for closed-form CDFs.

/// Lanczos approximation of ln Γ(x).
///
/// Reference: Lanczos (1964), "A Precision Approximation of the Gamma
/// Function", *SIAM Journal on Numerical Analysis* 1(1).
///
/// # Accuracy
/// Relative error < 2 × 10⁻¹⁰ for x > 0.
///
/// # Examples
/// ```
/// use u_mathkit::special::ln_gamma;
/// // Γ(5) = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    // Lanczos coefficients (g = 7)
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // Reflection formula: Γ(x)·Γ(1−x) = π/sin(πx)
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// ln(n!) via `ln Γ(n + 1)`.
///
/// Exact factorials overflow `u64` at n = 21 and `f64` at n = 171;
/// staying in log space keeps PMF evaluation finite for any n.
///
/// # Examples
/// ```
/// use u_mathkit::special::ln_factorial;
/// assert!((ln_factorial(5) - 120.0_f64.ln()).abs() < 1e-10);
/// assert_eq!(ln_factorial(0), 0.0);
/// ```
pub fn ln_factorial(n: u64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    ln_gamma(n as f64 + 1.0)
}

/// ln C(n, k), the log of the binomial coefficient.
///
/// Returns `f64::NEG_INFINITY` for `k > n` (the coefficient is zero).
///
/// # Examples
/// ```
/// use u_mathkit::special::ln_choose;
/// assert!((ln_choose(5, 2) - 10.0_f64.ln()).abs() < 1e-10);
/// assert_eq!(ln_choose(3, 5), f64::NEG_INFINITY);
/// ```
pub fn ln_choose(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// Log of the Beta function: `ln B(a, b) = ln Γ(a) + ln Γ(b) − ln Γ(a+b)`.
///
/// # Examples
/// ```
/// use u_mathkit::special::ln_beta;
/// // B(1,1) = 1, so ln B(1,1) = 0
/// assert!(ln_beta(1.0, 1.0).abs() < 1e-10);
/// ```
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

// ============================================================================
// Regularized Lower Incomplete Gamma Function
// ============================================================================

/// Regularized lower incomplete gamma function P(a, x) = γ(a, x) / Γ(a).
///
/// The Poisson CDF is its complement: P(X ≤ k) = 1 − P(k+1, λ).
///
/// # Algorithm
/// Series expansion for `x < a + 1`, continued fraction otherwise.
///
/// Reference: Press et al. (2007), *Numerical Recipes*, 3rd ed., §6.2.
///
/// # Examples
/// ```
/// use u_mathkit::special::regularized_lower_gamma;
/// // P(1, x) = 1 - exp(-x) for the exponential distribution
/// let p = regularized_lower_gamma(1.0, 2.0);
/// assert!((p - (1.0 - (-2.0_f64).exp())).abs() < 1e-10);
/// ```
pub fn regularized_lower_gamma(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x < a + 1.0 {
        gamma_series(a, x)
    } else {
        1.0 - gamma_cf(a, x)
    }
}

/// Series expansion for the regularized lower incomplete gamma.
fn gamma_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0 / a;
    let mut sum = term;
    let mut ap = a;
    for _ in 0..200 {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * 1e-14 {
            break;
        }
    }
    sum * (-x + a * x.ln() - ln_gamma(a)).exp()
}

/// Continued fraction for the upper incomplete gamma Q(a, x) = 1 − P(a, x).
fn gamma_cf(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / 1e-30;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=200 {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < 1e-30 {
            d = 1e-30;
        }
        c = b + an / c;
        if c.abs() < 1e-30 {
            c = 1e-30;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < 1e-14 {
            break;
        }
    }
    h * (-x + a * x.ln() - ln_gamma(a)).exp()
}

// ============================================================================
// Regularized Incomplete Beta Function
// ============================================================================

/// Regularized incomplete beta function I_x(a, b).
///
/// The Binomial CDF has the closed form P(X ≤ k) = I_{1−p}(n−k, k+1).
///
/// # Algorithm
/// Continued fraction representation (Lentz's method) with the
/// symmetry relation `I_x(a,b) = 1 − I_{1−x}(b,a)` for convergence.
///
/// Reference: Press et al. (2007), *Numerical Recipes*, 3rd ed., §6.4.
///
/// # Accuracy
/// Relative error < 1e-10 for typical parameter ranges.
///
/// # Examples
/// ```
/// use u_mathkit::special::regularized_incomplete_beta;
/// // I_0(a,b) = 0, I_1(a,b) = 1
/// assert_eq!(regularized_incomplete_beta(0.0, 2.0, 3.0), 0.0);
/// assert_eq!(regularized_incomplete_beta(1.0, 2.0, 3.0), 1.0);
/// // I_0.5(1,1) = 0.5 (uniform)
/// assert!((regularized_incomplete_beta(0.5, 1.0, 1.0) - 0.5).abs() < 1e-10);
/// ```
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Use symmetry relation: I_x(a,b) = 1 - I_{1-x}(b,a)
    if x > (a + 1.0) / (a + b + 2.0) {
        return 1.0 - regularized_incomplete_beta(1.0 - x, b, a);
    }

    let ln_prefix = a * x.ln() + b * (1.0 - x).ln() - ln_beta(a, b);
    let cf = beta_cf(x, a, b);
    (ln_prefix.exp() / a) * cf
}

/// Continued fraction for the incomplete beta function (Lentz's algorithm).
fn beta_cf(x: f64, a: f64, b: f64) -> f64 {
    const MAX_ITER: usize = 200;
    const EPS: f64 = 1e-14;
    const TINY: f64 = 1e-30;

    let mut c = 1.0;
    let mut d = 1.0 / (1.0 - (a + b) * x / (a + 1.0)).max(TINY);
    let mut h = d;

    for m in 1..=MAX_ITER {
        let m_f = m as f64;
        let num_even = m_f * (b - m_f) * x / ((a + 2.0 * m_f - 1.0) * (a + 2.0 * m_f));
        d = 1.0 / (1.0 + num_even * d).max(TINY);
        c = (1.0 + num_even / c).max(TINY);
        h *= d * c;

        let num_odd =
            -(a + m_f) * (a + b + m_f) * x / ((a + 2.0 * m_f) * (a + 2.0 * m_f + 1.0));
        d = 1.0 / (1.0 + num_odd * d).max(TINY);
        c = (1.0 + num_odd / c).max(TINY);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    h
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn ln_factorial_is_monotone(n in 1_u64..500) {
            prop_assert!(ln_factorial(n) >= ln_factorial(n - 1));
        }

        #[test]
        fn ln_choose_pascal_rule(n in 1_u64..60, k in 0_u64..60) {
            // C(n+1, k+1) = C(n, k) + C(n, k+1), checked in linear space
            prop_assume!(k <= n);
            let lhs = ln_choose(n + 1, k + 1).exp();
            let rhs = ln_choose(n, k).exp() + ln_choose(n, k + 1).exp();
            prop_assert!((lhs - rhs).abs() <= 1e-8 * rhs.max(1.0));
        }

        #[test]
        fn lower_gamma_in_unit_interval(a in 0.1_f64..50.0, x in 0.0_f64..100.0) {
            let p = regularized_lower_gamma(a, x);
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&p));
        }

        #[test]
        fn lower_gamma_monotone_in_x(a in 0.1_f64..50.0, x in 0.0_f64..100.0) {
            let p1 = regularized_lower_gamma(a, x);
            let p2 = regularized_lower_gamma(a, x + 0.5);
            prop_assert!(p2 >= p1 - 1e-10);
        }

        #[test]
        fn incomplete_beta_in_unit_interval(
            x in 0.0_f64..=1.0,
            a in 0.1_f64..50.0,
            b in 0.1_f64..50.0,
        ) {
            let p = regularized_incomplete_beta(x, a, b);
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&p));
        }

        #[test]
        fn incomplete_beta_symmetry_relation(
            x in 0.01_f64..0.99,
            a in 0.5_f64..20.0,
            b in 0.5_f64..20.0,
        ) {
            let lhs = regularized_incomplete_beta(x, a, b);
            let rhs = 1.0 - regularized_incomplete_beta(1.0 - x, b, a);
            prop_assert!((lhs - rhs).abs() < 1e-9);
        }
    }
}
