//! Correlation statistics for the cognitive metrics.
//!
//! The library leaves the correlation coefficient to its caller; this is
//! the implementation the CLI plugs in.

/// Pearson product-moment correlation.
///
/// Returns 0.0 for degenerate samples (mismatched/short lengths or zero
/// variance) rather than NaN, so a constant feature reads as "uncorrelated".
pub fn pearson(
    xs: &[f64],
    ys: &[f64],
) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    covariance / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [10.0, 20.0, 30.0, 40.0];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);

        let neg: Vec<f64> = ys.iter().map(|y| -y).collect();
        assert!((pearson(&xs, &neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_samples() {
        assert_eq!(pearson(&[1.0], &[2.0]), 0.0);
        assert_eq!(pearson(&[1.0, 2.0], &[3.0]), 0.0);
        // Zero variance.
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_known_value() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 2.0, 2.0];
        // cov = 1, sx = sqrt(2), sy = sqrt(2/3).
        let expected = 1.0 / (2.0f64 * (2.0 / 3.0)).sqrt();
        assert!((pearson(&xs, &ys) - expected).abs() < 1e-12);
    }
}
