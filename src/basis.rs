//! Gram-Schmidt orthonormalization.
//!
//! Validates an ordered set of vectors against a declared dimension,
//! checks linear independence, and computes an orthonormal basis
//! spanning the same subspace.
//!
//! # Algorithm
//!
//! Classical Gram-Schmidt: each vector has its projection onto every
//! already-accepted basis vector subtracted, and the residual is kept
//! if its norm exceeds [`RESIDUAL_TOLERANCE`]. Accepted vectors are
//! normalized to unit length at the end.
//!
//! Reference: Golub & Van Loan (2013), *Matrix Computations*, 4th ed.,
//! §5.2.7.
//!
//! # Validation
//!
//! All fatal conditions are detected eagerly at construction
//! ([`Orthonormalizer::new`]): a zero dimension, vectors shorter than
//! the dimension, non-finite components, and rank deficiency of the
//! stacked vector set. Vectors *longer* than the dimension are the one
//! recoverable condition: they are truncated and a
//! [`TruncationWarning`] is collected on the instance instead of being
//! written to any output stream.
//!
//! # Examples
//!
//! ```
//! use u_mathkit::basis::Orthonormalizer;
//!
//! let mut ortho = Orthonormalizer::new(2, vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let basis = ortho.orthogonalize();
//! assert_eq!(basis.len(), 2);
//! assert_eq!(
//!     ortho.render()?,
//!     "Orthonormal basis: [0.4472, 0.8944], [0.8944, -0.4472]"
//! );
//! # Ok::<(), u_mathkit::basis::BasisError>(())
//! ```

use crate::matrix::row_rank;
use crate::vector::{dot, norm, normalize, sub_scaled};

/// Residual norm at or below which a candidate is treated as linearly
/// dependent on the already-accepted basis and dropped.
///
/// The construction-time rank check nominally guarantees full rank;
/// this second check guards the near-dependent sets that pass it in
/// floating point, and keeps the final normalization away from
/// vanishing norms.
pub const RESIDUAL_TOLERANCE: f64 = 1e-10;

/// Error type for orthonormalization failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasisError {
    /// The declared dimension is zero.
    InvalidDimension,
    /// A vector is strictly shorter than the declared dimension.
    VectorTooShort {
        /// Position of the offending vector in the input set.
        index: usize,
        /// Its actual length.
        len: usize,
        /// The declared dimension.
        dimension: usize,
    },
    /// A vector contains a NaN or infinite component.
    NonFiniteComponent {
        /// Position of the offending vector in the input set.
        index: usize,
    },
    /// The stacked vector set is rank-deficient.
    LinearlyDependent {
        /// Rank of the stacked matrix.
        rank: usize,
        /// Number of input vectors.
        count: usize,
    },
    /// Rendering was requested before `orthogonalize` ran.
    NotYetComputed,
}

impl std::fmt::Display for BasisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasisError::InvalidDimension => {
                write!(f, "dimension must be a positive integer")
            }
            BasisError::VectorTooShort {
                index,
                len,
                dimension,
            } => write!(
                f,
                "vector at index {index} has length {len}, shorter than dimension {dimension}"
            ),
            BasisError::NonFiniteComponent { index } => {
                write!(f, "vector at index {index} contains a non-finite component")
            }
            BasisError::LinearlyDependent { rank, count } => write!(
                f,
                "vectors are linearly dependent: rank {rank} < {count} vectors"
            ),
            BasisError::NotYetComputed => {
                write!(f, "orthonormal basis has not been computed yet")
            }
        }
    }
}

impl std::error::Error for BasisError {}

/// Non-fatal notice that an over-long input vector was truncated.
///
/// Truncation is lossy: the dropped tail does not participate in the
/// rank check or the orthogonalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationWarning {
    /// Position of the truncated vector in the input set.
    pub index: usize,
    /// Length before truncation.
    pub original_len: usize,
    /// The declared dimension it was truncated to.
    pub dimension: usize,
}

impl std::fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "vector at index {} truncated from length {} to dimension {}",
            self.index, self.original_len, self.dimension
        )
    }
}

/// Whether the basis has been computed yet.
///
/// A two-variant state instead of a nullable field, so rendering can
/// only observe a basis that actually exists.
#[derive(Debug, Clone, PartialEq)]
enum BasisState {
    Unprocessed,
    Processed(Vec<Vec<f64>>),
}

/// Computes an orthonormal basis for a validated set of vectors.
///
/// The vector set and dimension are supplied at construction and
/// validated immediately; [`orthogonalize`](Self::orthogonalize)
/// computes the basis and caches it for rendering.
///
/// # Examples
/// ```
/// use u_mathkit::basis::Orthonormalizer;
///
/// let mut ortho = Orthonormalizer::new(
///     3,
///     vec![vec![1.0, 1.0, 0.0], vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0]],
/// )?;
/// let basis = ortho.orthogonalize();
/// assert_eq!(basis.len(), 3);
/// # Ok::<(), u_mathkit::basis::BasisError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Orthonormalizer {
    dimension: usize,
    vectors: Vec<Vec<f64>>,
    warnings: Vec<TruncationWarning>,
    state: BasisState,
}

impl Orthonormalizer {
    /// Validates the vector set against the declared dimension.
    ///
    /// Vectors longer than `dimension` are truncated to their first
    /// `dimension` components, collecting one [`TruncationWarning`]
    /// each; see [`warnings`](Self::warnings).
    ///
    /// # Errors
    /// - [`BasisError::InvalidDimension`] if `dimension == 0`.
    /// - [`BasisError::VectorTooShort`] if any vector is strictly
    ///   shorter than `dimension`.
    /// - [`BasisError::NonFiniteComponent`] if any retained component
    ///   is NaN or infinite.
    /// - [`BasisError::LinearlyDependent`] if the stacked rank is less
    ///   than the number of vectors (a zero vector, a repeated
    ///   direction, or more vectors than dimensions all land here).
    pub fn new(dimension: usize, vectors: Vec<Vec<f64>>) -> Result<Self, BasisError> {
        if dimension == 0 {
            return Err(BasisError::InvalidDimension);
        }

        let mut warnings = Vec::new();
        let mut validated = Vec::with_capacity(vectors.len());
        for (index, mut v) in vectors.into_iter().enumerate() {
            if v.len() < dimension {
                return Err(BasisError::VectorTooShort {
                    index,
                    len: v.len(),
                    dimension,
                });
            }
            if v.len() > dimension {
                warnings.push(TruncationWarning {
                    index,
                    original_len: v.len(),
                    dimension,
                });
                v.truncate(dimension);
            }
            if !v.iter().all(|x| x.is_finite()) {
                return Err(BasisError::NonFiniteComponent { index });
            }
            validated.push(v);
        }

        let rank = row_rank(&validated, dimension);
        if rank < validated.len() {
            return Err(BasisError::LinearlyDependent {
                rank,
                count: validated.len(),
            });
        }

        Ok(Self {
            dimension,
            vectors: validated,
            warnings,
            state: BasisState::Unprocessed,
        })
    }

    /// The declared dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The validated (length-normalized) input vectors, in order.
    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// Truncation warnings collected during construction, in input
    /// order. Empty when no vector was over-long.
    pub fn warnings(&self) -> &[TruncationWarning] {
        &self.warnings
    }

    /// The cached orthonormal basis, or `None` before the first
    /// [`orthogonalize`](Self::orthogonalize) call.
    pub fn basis(&self) -> Option<&[Vec<f64>]> {
        match &self.state {
            BasisState::Processed(basis) => Some(basis),
            BasisState::Unprocessed => None,
        }
    }

    /// Computes the orthonormal basis spanning the input vectors.
    ///
    /// Processes the vectors in input order. For each vector `v`, the
    /// projection `(v·u / u·u)·u` onto every accepted basis vector `u`
    /// is subtracted; the residual is accepted only if its norm exceeds
    /// [`RESIDUAL_TOLERANCE`], so near-dependent vectors are silently
    /// dropped and the basis may be smaller than the input set. All
    /// accepted vectors are then scaled to unit norm.
    ///
    /// The result is cached on the instance; calling this again
    /// recomputes deterministically from the same stored inputs.
    pub fn orthogonalize(&mut self) -> &[Vec<f64>] {
        let mut accepted: Vec<Vec<f64>> = Vec::with_capacity(self.vectors.len());
        for v in &self.vectors {
            let mut residual = v.clone();
            for u in &accepted {
                let coeff = dot(v, u) / dot(u, u);
                sub_scaled(&mut residual, coeff, u);
            }
            if norm(&residual) > RESIDUAL_TOLERANCE {
                accepted.push(residual);
            }
        }
        for u in &mut accepted {
            normalize(u);
        }

        self.state = BasisState::Processed(accepted);
        match &self.state {
            BasisState::Processed(basis) => basis,
            BasisState::Unprocessed => unreachable!("state was just set"),
        }
    }

    /// Renders the cached basis as
    /// `"Orthonormal basis: [c1, c2, ...], [c1, c2, ...], ..."` with
    /// every component formatted to exactly 4 decimal places.
    ///
    /// # Errors
    /// [`BasisError::NotYetComputed`] before the first
    /// [`orthogonalize`](Self::orthogonalize) call.
    pub fn render(&self) -> Result<String, BasisError> {
        let basis = self.basis().ok_or(BasisError::NotYetComputed)?;
        let rows: Vec<String> = basis
            .iter()
            .map(|u| {
                let components: Vec<String> = u.iter().map(|c| format!("{c:.4}")).collect();
                format!("[{}]", components.join(", "))
            })
            .collect();
        Ok(format!("Orthonormal basis: {}", rows.join(", ")))
    }
}
