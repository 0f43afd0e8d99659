use argminmax::ArgMinMax;

/// `count` evenly spaced values over `[start, end]`, both ends included exactly.
/// Returns an empty vec for `count == 0` and `[start]` for `count == 1`.
pub(crate) fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the endpoint so accumulated rounding never drifts past the range
            out[count - 1] = end;
            out
        }
    }
}

/// Index of the largest value. Ties resolve to the first occurrence.
#[inline]
pub(crate) fn argmax(vec: &[f64]) -> usize {
    vec.argmax()
}

/// Scales non-negative values so they sum to 1.0.
/// Returns None when every value is zero or any value is non-finite.
pub(crate) fn normalize_sum(vec: &[f64]) -> Option<Vec<f64>> {
    if vec.iter().any(|x| !x.is_finite()) {
        return None;
    }
    let largest = vec.iter().copied().fold(0.0_f64, f64::max);
    if largest <= 0.0 {
        return None;
    }
    // Dividing by the largest first keeps the sum in [1, len], so huge totals cannot overflow
    let scaled: Vec<f64> = vec.iter().map(|&x| x / largest).collect();
    let sum: f64 = scaled.iter().sum();
    Some(scaled.into_iter().map(|x| x / sum).collect())
}

/// Solves `a * x = b` by Gaussian elimination with partial pivoting.
/// `a` is row-major and square. Returns None for a singular system.
pub(crate) fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    debug_assert_eq!(a.len(), n);

    for col in 0..n {
        // Pick the row with the largest pivot magnitude
        let pivot_row = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot_row][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let xs = linspace(1.0, 30.0, 300);
        assert_eq!(xs.len(), 300);
        assert_eq!(xs[0], 1.0);
        assert_eq!(xs[299], 30.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn argmax_prefers_first_tie() {
        assert_eq!(argmax(&[1.0, 5.0, 3.0, 5.0]), 1);
        assert_eq!(argmax(&[9.0]), 0);
    }

    #[test]
    fn normalize_sum_to_one() {
        let fractions = normalize_sum(&[500.0, 300.0, 400.0, 200.0]).unwrap();
        let total: f64 = fractions.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((fractions[0] - 500.0 / 1400.0).abs() < 1e-12);
        assert!(normalize_sum(&[0.0, 0.0]).is_none());
    }

    #[test]
    fn normalize_sum_accepts_tiny_totals() {
        let fractions = normalize_sum(&[1e-20, 3e-20]).unwrap();
        assert!((fractions[0] - 0.25).abs() < 1e-12);
        assert!((fractions[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn normalize_sum_survives_overflowing_sum() {
        let big = f64::MAX / 1.5;
        let fractions = normalize_sum(&[big, big]).unwrap();
        assert_eq!(fractions, vec![0.5, 0.5]);
        assert!(normalize_sum(&[1.0, f64::INFINITY]).is_none());
        assert!(normalize_sum(&[1.0, f64::NAN]).is_none());
    }

    #[test]
    fn solves_small_system() {
        // 2x + y = 5, x + 3y = 10  =>  x = 1, y = 3
        let x = solve_linear_system(vec![vec![2.0, 1.0], vec![1.0, 3.0]], vec![5.0, 10.0])
            .unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn needs_pivoting_for_zero_leading_entry() {
        let x = solve_linear_system(vec![vec![0.0, 1.0], vec![1.0, 0.0]], vec![2.0, 7.0])
            .unwrap();
        assert_eq!(x, vec![7.0, 2.0]);
    }

    #[test]
    fn singular_system_is_none() {
        assert!(
            solve_linear_system(vec![vec![1.0, 2.0], vec![2.0, 4.0]], vec![1.0, 2.0]).is_none()
        );
    }
}
