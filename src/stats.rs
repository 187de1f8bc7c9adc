//! Small statistics helpers shared by the queries.

/// Cut points splitting `values` into `n` equal-probability groups.
///
/// Uses the exclusive method (positions at `i * (len + 1) / n`, linearly
/// interpolated and clamped to the data range). Returns `None` when there
/// are fewer than two data points or `n < 2`, in which case callers fall
/// back to [`median`].
pub fn quantiles(values: &[f64], n: usize) -> Option<Vec<f64>> {
    let len = values.len();
    if len < 2 || n < 2 {
        return None;
    }
    let mut data = values.to_vec();
    data.sort_by(f64::total_cmp);

    let m = len + 1;
    let cuts = (1..n)
        .map(|i| {
            let j = (i * m / n).clamp(1, len - 1);
            let delta = (i * m) as f64 - (j * n) as f64;
            (data[j - 1] * (n as f64 - delta) + data[j] * delta) / n as f64
        })
        .collect();
    Some(cuts)
}

/// Median of `values`, averaging the middle pair for even lengths.
/// Empty input yields `0.0`.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut data = values.to_vec();
    data.sort_by(f64::total_cmp);
    let mid = data.len() / 2;
    if data.len() % 2 == 1 {
        data[mid]
    } else {
        (data[mid - 1] + data[mid]) / 2.0
    }
}

/// Upper quartile (Q3), or the median when quartiles cannot be computed.
pub fn upper_quartile(values: &[f64]) -> f64 {
    match quantiles(values, 4) {
        Some(cuts) => cuts[2],
        None => median(values),
    }
}

/// `wins / total * 100`, defined as `0.0` when `total` is zero.
pub fn win_ratio(wins: i64, total: i64) -> f64 {
    if total > 0 {
        wins as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_exclusive_method() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(quantiles(&data, 4), Some(vec![2.25, 4.5, 6.75]));

        let data = [10.0, 20.0, 30.0];
        assert_eq!(quantiles(&data, 4), Some(vec![10.0, 20.0, 30.0]));
    }

    #[test]
    fn test_quantiles_unsorted_input() {
        let data = [8.0, 1.0, 5.0, 3.0, 7.0, 2.0, 6.0, 4.0];
        assert_eq!(upper_quartile(&data), 6.75);
    }

    #[test]
    fn test_upper_quartile_falls_back_to_median() {
        assert_eq!(quantiles(&[4.0], 4), None);
        assert_eq!(upper_quartile(&[4.0]), 4.0);
        assert_eq!(upper_quartile(&[]), 0.0);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_win_ratio() {
        assert_eq!(win_ratio(3, 4), 75.0);
        assert_eq!(win_ratio(0, 0), 0.0);
        assert_eq!(win_ratio(5, 0), 0.0);
    }
}
