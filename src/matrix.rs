//! Row rank of a stacked vector set.
//!
//! Computes the rank of the matrix formed by stacking vectors as rows,
//! which is how the orthonormalizer decides linear independence before
//! running Gram-Schmidt.
//!
//! # Algorithm
//!
//! Gaussian elimination with **partial pivoting** over a flattened
//! row-major copy of the input. Pivots are compared against a scaled
//! tolerance `ε · max(m, n) · max|aᵢⱼ|`, the standard choice for
//! rank decisions in floating point (the same default NumPy and MATLAB
//! use for `matrix_rank`).
//!
//! Reference: Golub & Van Loan (2013), *Matrix Computations*, 4th ed.,
//! §3.4 (pivoting), §5.4.1 (numerical rank).

/// Rank of the `m × cols` matrix whose rows are the given vectors.
///
/// The input is copied; rows are not modified.
///
/// # Complexity
/// Time: O(m · n · min(m, n)), Space: O(m · n)
///
/// # Panics
/// Panics if any row's length differs from `cols`.
///
/// # Examples
/// ```
/// use u_mathkit::matrix::row_rank;
/// // Full rank
/// assert_eq!(row_rank(&[vec![1.0, 0.0], vec![0.0, 1.0]], 2), 2);
/// // Second row is a multiple of the first
/// assert_eq!(row_rank(&[vec![1.0, 2.0], vec![2.0, 4.0]], 2), 1);
/// ```
pub fn row_rank(rows: &[Vec<f64>], cols: usize) -> usize {
    let m = rows.len();
    let n = cols;
    if m == 0 || n == 0 {
        return 0;
    }

    let mut a = Vec::with_capacity(m * n);
    for row in rows {
        assert_eq!(row.len(), n, "row_rank: row length mismatch");
        a.extend_from_slice(row);
    }

    let max_abs = a.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if max_abs == 0.0 {
        return 0;
    }
    let tol = f64::EPSILON * m.max(n) as f64 * max_abs;

    let mut rank = 0;
    for col in 0..n {
        if rank == m {
            break;
        }

        // Partial pivoting: largest remaining entry in this column.
        let mut pivot_row = rank;
        let mut pivot_abs = a[rank * n + col].abs();
        for r in rank + 1..m {
            let abs = a[r * n + col].abs();
            if abs > pivot_abs {
                pivot_row = r;
                pivot_abs = abs;
            }
        }
        if pivot_abs <= tol {
            continue;
        }

        if pivot_row != rank {
            for c in col..n {
                a.swap(rank * n + c, pivot_row * n + c);
            }
        }

        let pivot = a[rank * n + col];
        for r in rank + 1..m {
            let factor = a[r * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                a[r * n + c] -= factor * a[rank * n + c];
            }
        }
        rank += 1;
    }

    rank
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rows_strategy() -> impl Strategy<Value = (Vec<Vec<f64>>, usize)> {
        (1_usize..5, 1_usize..5).prop_flat_map(|(m, n)| {
            (
                proptest::collection::vec(
                    proptest::collection::vec(-100.0_f64..100.0, n),
                    m,
                ),
                Just(n),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn rank_bounded_by_dimensions((rows, n) in rows_strategy()) {
            let rank = row_rank(&rows, n);
            prop_assert!(rank <= rows.len().min(n));
        }

        #[test]
        fn duplicate_row_does_not_raise_rank((rows, n) in rows_strategy()) {
            let rank = row_rank(&rows, n);
            let mut extended = rows.clone();
            extended.push(rows[0].clone());
            prop_assert_eq!(row_rank(&extended, n), rank);
        }

        #[test]
        fn zero_row_does_not_raise_rank((rows, n) in rows_strategy()) {
            let rank = row_rank(&rows, n);
            let mut extended = rows.clone();
            extended.push(vec![0.0; n]);
            prop_assert_eq!(row_rank(&extended, n), rank);
        }

        #[test]
        fn row_order_does_not_change_rank((rows, n) in rows_strategy()) {
            let rank = row_rank(&rows, n);
            let mut reversed = rows.clone();
            reversed.reverse();
            prop_assert_eq!(row_rank(&reversed, n), rank);
        }
    }
}
