//! Not-a-knot cubic spline interpolation.
//!
//! The chart's trend curve is a smooth interpolant through one knot per
//! bucket. A cubic spline is piecewise cubic, C² at every knot, and with the
//! not-a-knot end condition the third derivative is also continuous across
//! the second and the second-to-last knot. This is the unique interpolant
//! that reproduces any cubic polynomial exactly.
//!
//! # Algorithm
//!
//! The spline is stored as its second derivatives `M_i` at the knots. On
//! segment `[x_i, x_{i+1}]` with width `h_i`:
//!
//! ```text
//! S(x) = M_i (x_{i+1} - x)³ / 6h_i + M_{i+1} (x - x_i)³ / 6h_i
//!      + (y_i / h_i - M_i h_i / 6) (x_{i+1} - x)
//!      + (y_{i+1} / h_i - M_{i+1} h_i / 6) (x - x_i)
//! ```
//!
//! C¹ continuity gives one equation per interior knot. Eliminating `M_0` and
//! `M_{n-1}` with the not-a-knot conditions leaves a tridiagonal system over
//! `M_1..M_{n-2}`, solved in O(n) by the Thomas algorithm.
//!
//! With fewer than four knots the conditions are over-determined, so the
//! spline degrades to the interpolating polynomial: a parabola through three
//! knots, a line through two, a constant for one.

use crate::error::{Error, Result};

/// Cubic spline through a set of knots with strictly increasing abscissae.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a not-a-knot spline through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for zero knots and
    /// [`Error::InvalidConfig`] when lengths differ, a value is not finite,
    /// or `xs` is not strictly increasing.
    pub fn not_a_knot(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.is_empty() {
            return Err(Error::EmptyInput);
        }
        if xs.len() != ys.len() {
            return Err(Error::InvalidConfig(format!(
                "spline knots: {} x values but {} y values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys).any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfig("spline knots must be finite".to_string()));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::InvalidConfig(
                "spline x values must be strictly increasing".to_string(),
            ));
        }

        let m = match xs.len() {
            1 | 2 => vec![0.0; xs.len()],
            3 => {
                // Parabola: constant second derivative 2·f[x0, x1, x2].
                let d01 = (ys[1] - ys[0]) / (xs[1] - xs[0]);
                let d12 = (ys[2] - ys[1]) / (xs[2] - xs[1]);
                let curvature = 2.0 * (d12 - d01) / (xs[2] - xs[0]);
                vec![curvature; 3]
            }
            _ => second_derivatives(xs, ys),
        };

        Ok(Self { xs: xs.to_vec(), ys: ys.to_vec(), m })
    }

    /// Fit through knots at `x = 0, 1, .., n-1`.
    ///
    /// # Errors
    ///
    /// See [`CubicSpline::not_a_knot`].
    pub fn uniform(ys: &[f64]) -> Result<Self> {
        let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
        Self::not_a_knot(&xs, ys)
    }

    /// Number of knots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; a spline has at least one knot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Domain `(first knot, last knot)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate the spline at `x`. Outside the domain the end segments are
    /// extrapolated.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if n == 1 {
            return self.ys[0];
        }

        // Segment i with xs[i] <= x < xs[i+1], clamped to [0, n-2].
        let i = self.xs.partition_point(|&k| k <= x).saturating_sub(1).min(n - 2);

        let h = self.xs[i + 1] - self.xs[i];
        let t0 = x - self.xs[i];
        let t1 = self.xs[i + 1] - x;
        let (m0, m1) = (self.m[i], self.m[i + 1]);

        m0 * t1.powi(3) / (6.0 * h)
            + m1 * t0.powi(3) / (6.0 * h)
            + (self.ys[i] / h - m0 * h / 6.0) * t1
            + (self.ys[i + 1] / h - m1 * h / 6.0) * t0
    }

    /// Sample `count` evenly spaced points across `[from, to]`.
    #[must_use]
    pub fn sample(&self, from: f64, to: f64, count: usize) -> Vec<(f64, f64)> {
        match count {
            0 => Vec::new(),
            1 => vec![(from, self.eval(from))],
            _ => {
                let step = (to - from) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        let x = if i == count - 1 { to } else { from + step * i as f64 };
                        (x, self.eval(x))
                    })
                    .collect()
            }
        }
    }
}

/// Solve for the knot second derivatives with not-a-knot ends. `n >= 4`.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    // Unknowns M_1..M_{n-2}, row r is the equation at knot r + 1.
    let size = n - 2;
    let mut lower = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut upper = vec![0.0; size];
    let mut rhs = vec![0.0; size];

    for r in 0..size {
        let i = r + 1;
        lower[r] = h[i - 1];
        diag[r] = 2.0 * (h[i - 1] + h[i]);
        upper[r] = h[i];
        rhs[r] = 6.0 * (slope[i] - slope[i - 1]);
    }

    // M_0 = M_1 (1 + h0/h1) - M_2 h0/h1
    let a = h[0] / h[1];
    diag[0] += h[0] * (1.0 + a);
    upper[0] -= h[0] * a;
    lower[0] = 0.0;

    // M_{n-1} = M_{n-2} (1 + b) - M_{n-3} b,  b = h_{n-2} / h_{n-3}
    let b = h[n - 2] / h[n - 3];
    diag[size - 1] += h[n - 2] * (1.0 + b);
    lower[size - 1] -= h[n - 2] * b;
    upper[size - 1] = 0.0;

    let interior = solve_tridiagonal(&lower, &diag, &upper, &rhs);

    let mut m = Vec::with_capacity(n);
    m.push(interior[0] * (1.0 + a) - interior[1] * a);
    m.extend_from_slice(&interior);
    m.push(interior[size - 1] * (1.0 + b) - interior[size - 2] * b);
    m
}

/// Thomas algorithm for a tridiagonal system.
///
/// `lower[0]` and `upper[len-1]` are ignored.
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];

    c[0] = upper[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - lower[i] * c[i - 1];
        c[i] = if i + 1 < n { upper[i] / denom } else { 0.0 };
        d[i] = (rhs[i] - lower[i] * d[i - 1]) / denom;
    }

    let mut x = vec![0.0; n];
    x[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d[i] - c[i] * x[i + 1];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_reproduces_cubic() {
        let xs: Vec<f64> = (0..6).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x * x * x - 2.0 * x).collect();
        let spline = CubicSpline::not_a_knot(&xs, &ys).unwrap();

        for x in [0.25, 1.5, 2.5, 3.75, 4.9] {
            assert_relative_eq!(spline.eval(x), x * x * x - 2.0 * x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reproduces_cubic_nonuniform() {
        let xs = [0.0, 0.5, 2.0, 2.5, 4.0];
        let f = |x: f64| 0.5 * x * x * x - x * x + 3.0;
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let spline = CubicSpline::not_a_knot(&xs, &ys).unwrap();

        for x in [0.1, 1.0, 2.2, 3.3] {
            assert_relative_eq!(spline.eval(x), f(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_four_knots_is_single_cubic() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 2.0, 9.0, 28.0]; // x³ + 1
        let spline = CubicSpline::not_a_knot(&xs, &ys).unwrap();
        assert_relative_eq!(spline.eval(1.5), 4.375, epsilon = 1e-9);
    }

    #[test]
    fn test_three_knots_parabola() {
        let spline = CubicSpline::uniform(&[0.0, 1.0, 4.0]).unwrap();
        assert_relative_eq!(spline.eval(1.5), 2.25, epsilon = 1e-12);
        assert_relative_eq!(spline.eval(0.5), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_two_knots_linear() {
        let spline = CubicSpline::uniform(&[2.0, 4.0]).unwrap();
        assert_relative_eq!(spline.eval(0.5), 3.0);
    }

    #[test]
    fn test_single_knot_constant() {
        let spline = CubicSpline::uniform(&[7.0]).unwrap();
        assert_eq!(spline.eval(-3.0), 7.0);
        assert_eq!(spline.eval(12.0), 7.0);
        assert_eq!(spline.domain(), (0.0, 0.0));
    }

    #[test]
    fn test_rejects_bad_knots() {
        assert!(matches!(CubicSpline::not_a_knot(&[], &[]), Err(Error::EmptyInput)));
        assert!(CubicSpline::not_a_knot(&[0.0, 1.0], &[1.0]).is_err());
        assert!(CubicSpline::not_a_knot(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
        assert!(CubicSpline::not_a_knot(&[0.0, 1.0], &[f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_sample_endpoints() {
        let spline = CubicSpline::uniform(&[1.0, 3.0, 2.0, 5.0, 4.0]).unwrap();
        let pts = spline.sample(0.0, 4.0, 500);
        assert_eq!(pts.len(), 500);
        assert_eq!(pts[0].0, 0.0);
        assert_eq!(pts[499].0, 4.0);
        assert_relative_eq!(pts[0].1, 1.0, epsilon = 1e-9);
        assert_relative_eq!(pts[499].1, 4.0, epsilon = 1e-9);
        assert!(spline.sample(0.0, 1.0, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_interpolates_knots(ys in prop::collection::vec(-1000.0f64..1000.0, 1..40)) {
            let spline = CubicSpline::uniform(&ys).unwrap();
            for (i, &y) in ys.iter().enumerate() {
                let got = spline.eval(i as f64);
                prop_assert!((got - y).abs() < 1e-6 * (1.0 + y.abs()), "knot {}: {} vs {}", i, got, y);
            }
        }
    }
}
