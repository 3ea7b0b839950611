//! Dense vector kernels.
//!
//! Low-level operations on `f64` slices, shared by the Gram-Schmidt
//! orthonormalization in [`crate::basis`] and the rank computation in
//! [`crate::matrix`].
//!
//! All kernels are plain loops over contiguous memory. For the small,
//! fixed dimensions this crate targets, naive summation keeps the
//! accumulated error at O(nε), well inside every tolerance used
//! downstream.

/// Dot product `a · b`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Panics
/// Panics if `a` and `b` have different lengths.
///
/// # Examples
/// ```
/// use u_mathkit::vector::dot;
/// assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
/// assert_eq!(dot(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
/// ```
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot: length mismatch");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Squared Euclidean norm `‖v‖²  =  v · v`.
///
/// # Examples
/// ```
/// use u_mathkit::vector::norm_sq;
/// assert_eq!(norm_sq(&[3.0, 4.0]), 25.0);
/// ```
pub fn norm_sq(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Euclidean norm `‖v‖`.
///
/// # Examples
/// ```
/// use u_mathkit::vector::norm;
/// assert_eq!(norm(&[3.0, 4.0]), 5.0);
/// ```
pub fn norm(v: &[f64]) -> f64 {
    norm_sq(v).sqrt()
}

/// Scales `v` in place to unit Euclidean norm.
///
/// Returns the original norm. A zero vector is left unchanged and
/// `0.0` is returned; callers that must not divide by a vanishing norm
/// should check the result (the orthonormalizer filters such vectors
/// before normalizing).
///
/// # Examples
/// ```
/// use u_mathkit::vector::{normalize, norm};
/// let mut v = vec![3.0, 4.0];
/// assert_eq!(normalize(&mut v), 5.0);
/// assert!((norm(&v) - 1.0).abs() < 1e-15);
/// ```
pub fn normalize(v: &mut [f64]) -> f64 {
    let n = norm(v);
    if n > 0.0 {
        for x in v.iter_mut() {
            *x /= n;
        }
    }
    n
}

/// In-place scaled subtraction `v ← v − coeff · u`.
///
/// This is the projection-removal step of Gram-Schmidt: with
/// `coeff = (v·u)/(u·u)`, it subtracts the component of `v` along `u`.
///
/// # Panics
/// Panics if `v` and `u` have different lengths.
///
/// # Examples
/// ```
/// use u_mathkit::vector::sub_scaled;
/// let mut v = vec![1.0, 1.0];
/// sub_scaled(&mut v, 0.5, &[2.0, 0.0]);
/// assert_eq!(v, vec![0.0, 1.0]);
/// ```
pub fn sub_scaled(v: &mut [f64], coeff: f64, u: &[f64]) {
    assert_eq!(v.len(), u.len(), "sub_scaled: length mismatch");
    for (vi, ui) in v.iter_mut().zip(u) {
        *vi -= coeff * ui;
    }
}
