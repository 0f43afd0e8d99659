//! Cubic spline smoothing of the daily sales series.
//!
//! The interpolant is a C2 piecewise cubic through every input point with
//! not-a-knot end conditions: the third derivative is continuous across the
//! second and the second-to-last knots, so the first two and last two pieces
//! are each a single cubic. This is the usual default for interpolating cubic
//! splines and needs at least 4 knots.

use {
    crate::{
        config::{CUBIC_MIN_POINTS, DF},
        domain::{ChartError, SalesRecord},
        utils::{linspace, solve_linear_system},
    },
    itertools::Itertools,
    serde::Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Fitted cubic spline stored as knots plus second derivatives at each knot.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    second_derivs: Vec<f64>,
}

impl CubicSpline {
    /// Fits a not-a-knot cubic spline through `(xs[i], ys[i])`.
    /// `xs` must be strictly increasing.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, ChartError> {
        let n = xs.len();
        if n != ys.len() {
            return Err(ChartError::InvalidInput(format!(
                "{} x values but {} y values",
                n,
                ys.len()
            )));
        }
        if n < CUBIC_MIN_POINTS {
            return Err(ChartError::InsufficientData {
                needed: CUBIC_MIN_POINTS,
                got: n,
            });
        }
        if xs.iter().chain(ys).any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidInput("spline knots must be finite".into()));
        }
        if !xs.iter().tuple_windows().all(|(a, b)| b > a) {
            return Err(ChartError::InvalidInput(
                "spline x values must be strictly increasing".into(),
            ));
        }

        let h: Vec<f64> = xs.iter().tuple_windows().map(|(a, b)| b - a).collect();
        let slopes: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        let mut a = vec![vec![0.0; n]; n];
        let mut rhs = vec![0.0; n];

        // Not-a-knot at x[1]: h1 * M0 - (h0 + h1) * M1 + h0 * M2 = 0
        a[0][0] = h[1];
        a[0][1] = -(h[0] + h[1]);
        a[0][2] = h[0];

        // Interior continuity of the first derivative
        for i in 1..n - 1 {
            a[i][i - 1] = h[i - 1];
            a[i][i] = 2.0 * (h[i - 1] + h[i]);
            a[i][i + 1] = h[i];
            rhs[i] = 6.0 * (slopes[i] - slopes[i - 1]);
        }

        // Not-a-knot at x[n-2]
        let (hl, hr) = (h[n - 3], h[n - 2]);
        a[n - 1][n - 3] = hr;
        a[n - 1][n - 2] = -(hl + hr);
        a[n - 1][n - 1] = hl;

        let second_derivs = solve_linear_system(a, rhs).ok_or_else(|| {
            ChartError::InvalidInput("spline system is singular for these knots".into())
        })?;

        if DF.log_spline {
            log::info!("Fitted cubic spline through {} knots", n);
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            second_derivs,
        })
    }

    /// Evaluates the spline. Outside the knot range the end pieces are extended.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        // Segment i covers [xs[i], xs[i+1]]
        let i = self.xs.partition_point(|&k| k <= x).saturating_sub(1).min(n - 2);

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.second_derivs[i], self.second_derivs[i + 1]);
        let h = x1 - x0;
        let left = x1 - x;
        let right = x - x0;

        m0 * left.powi(3) / (6.0 * h)
            + m1 * right.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * left
            + (y1 / h - m1 * h / 6.0) * right
    }

    pub fn knots(&self) -> &[f64] {
        &self.xs
    }
}

/// Dense, evenly sampled curve through the sales series.
#[derive(Debug, Clone)]
pub struct SmoothedCurve {
    pub samples: Vec<CurvePoint>,
    spline: CubicSpline,
}

impl SmoothedCurve {
    pub fn interpolant(&self) -> &CubicSpline {
        &self.spline
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_plot_points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Fits a cubic spline through the records and samples it `sample_count`
/// times, evenly over `[first day, last day]`.
pub fn smooth(records: &[SalesRecord], sample_count: usize) -> Result<SmoothedCurve, ChartError> {
    if records.len() < CUBIC_MIN_POINTS {
        return Err(ChartError::InsufficientData {
            needed: CUBIC_MIN_POINTS,
            got: records.len(),
        });
    }
    if sample_count < 2 {
        return Err(ChartError::InvalidInput(format!(
            "sample count must be at least 2, got {}",
            sample_count
        )));
    }

    let xs: Vec<f64> = records.iter().map(|r| r.day as f64).collect();
    let ys: Vec<f64> = records.iter().map(|r| r.value).collect();
    let spline = CubicSpline::fit(&xs, &ys)?;

    let samples = linspace(xs[0], xs[xs.len() - 1], sample_count)
        .into_iter()
        .map(|x| CurvePoint {
            x,
            y: spline.eval(x),
        })
        .collect();

    Ok(SmoothedCurve { samples, spline })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SalesSeries;

    const TOL: f64 = 1e-9;

    #[test]
    fn passes_through_every_knot() {
        let s = SalesSeries::from_daily_values(&[150.0, 200.0, 250.0, 300.0, 100.0, 400.0])
            .unwrap();
        let curve = smooth(&s, 50).unwrap();
        for r in s.iter() {
            assert!((curve.interpolant().eval(r.day as f64) - r.value).abs() < TOL);
        }
    }

    #[test]
    fn reproduces_a_cubic_exactly() {
        // Not-a-knot reproduces any cubic polynomial
        let f = |x: f64| 0.5 * x.powi(3) - 2.0 * x.powi(2) + x + 7.0;
        let xs: Vec<f64> = (0..8).map(|i| i as f64 * 1.5).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let spline = CubicSpline::fit(&xs, &ys).unwrap();
        for x in [0.3, 2.2, 5.9, 9.1, 10.4] {
            assert!((spline.eval(x) - f(x)).abs() < 1e-6, "x = {}", x);
        }
    }

    #[test]
    fn four_points_give_the_single_interpolating_cubic() {
        let f = |x: f64| x.powi(3) - x;
        let xs = [0.0, 1.0, 2.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let spline = CubicSpline::fit(&xs, &ys).unwrap();
        assert!((spline.eval(3.0) - f(3.0)).abs() < 1e-9);
    }

    #[test]
    fn samples_span_the_day_range() {
        let s = SalesSeries::from_daily_values(&[1.0, 4.0, 2.0, 8.0, 3.0]).unwrap();
        let curve = smooth(&s, 300).unwrap();
        assert_eq!(curve.len(), 300);
        assert_eq!(curve.samples[0].x, 1.0);
        assert_eq!(curve.samples[299].x, 5.0);
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let s = SalesSeries::from_daily_values(&[1.0, 4.0, 2.0, 8.0, 3.0, 6.0]).unwrap();
        let curve = smooth(&s, 101).unwrap();
        let step = 5.0 / 100.0;
        for pair in curve.samples.windows(2) {
            assert!((pair[1].x - pair[0].x - step).abs() < 1e-12);
        }
    }

    #[test]
    fn too_few_points_is_insufficient_data() {
        let s = SalesSeries::from_daily_values(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            smooth(&s, 10).unwrap_err(),
            ChartError::InsufficientData { needed: 4, got: 3 }
        );
        assert!(matches!(
            smooth(&[], 10),
            Err(ChartError::InsufficientData { got: 0, .. })
        ));
    }

    #[test]
    fn sample_count_below_two_is_invalid() {
        let s = SalesSeries::from_daily_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(matches!(smooth(&s, 1), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn unsorted_knots_are_rejected() {
        let err = CubicSpline::fit(&[0.0, 2.0, 1.0, 3.0], &[0.0; 4]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }
}
