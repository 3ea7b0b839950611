//! # u-mathkit
//!
//! Mathematical primitives for the U-Engine ecosystem.
//!
//! This crate provides linear-algebra and discrete-probability building
//! blocks that are domain-agnostic. It knows nothing about scheduling,
//! nesting, geometry, or any consumer domain.
//!
//! ## Modules
//!
//! - [`basis`] — Gram-Schmidt orthonormalization with eager validation
//! - [`matrix`] — row rank via Gaussian elimination with partial pivoting
//! - [`vector`] — dense `f64` vector kernels
//! - [`discrete`] — discrete probability distributions (PMF/CDF/moments)
//! - [`special`] — log-gamma and incomplete gamma/beta functions
//!
//! ## Design Philosophy
//!
//! - **Fail fast**: constructors validate eagerly and return typed
//!   errors; computation never starts on malformed input
//! - **Numerical stability first**: partial pivoting with ε-scaled
//!   tolerances, log-space PMF evaluation, defensive residual checks
//! - **No unnecessary dependencies**: pure Rust for core math
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod basis;
pub mod discrete;
pub mod matrix;
pub mod special;
pub mod vector;

pub use basis::{BasisError, Orthonormalizer, TruncationWarning};
