// File: crates/chart-core/src/axis.rs
// Summary: Value-axis ticks and category label thinning.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick values for a value axis; a flat range gets a single tick.
pub fn value_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if (max - min).abs() < f64::EPSILON {
        return vec![min];
    }
    linspace(min, max, count)
}

/// Show every `stride`-th category label so at most `max_labels` are drawn.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 || count <= max_labels {
        return 1;
    }
    count.div_ceil(max_labels)
}

/// Whether label `index` is drawn; the last label is always kept.
pub fn shows_label(index: usize, count: usize, stride: usize) -> bool {
    index % stride.max(1) == 0 || index + 1 == count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks() {
        assert_eq!(value_ticks(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(value_ticks(4.0, 4.0, 5), vec![4.0]);
        assert!(value_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn stride() {
        assert_eq!(label_stride(5, 8), 1);
        assert_eq!(label_stride(30, 8), 4);
        assert!(shows_label(29, 30, 4));
        assert!(!shows_label(1, 30, 4));
    }
}
