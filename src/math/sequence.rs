//! Deterministic number sequences driving the placement algorithms

use crate::io::configuration::{GOLDEN_ANGLE, GOLDEN_RATIO_INVERSE};

/// Rows and columns for `count` cells on a region of the given aspect ratio
///
/// Picks the layout whose cells are closest to square, considering only
/// layouts whose last row is non-empty; ties prefer fewer unused cells.
pub fn grid_dimensions(count: usize, region_aspect: f64) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }

    let mut best = (1, count);
    let mut best_score = (f64::INFINITY, usize::MAX);

    for rows in 1..=count {
        let cols = count.div_ceil(rows);
        if (rows - 1) * cols >= count {
            continue;
        }
        let cell_aspect = region_aspect * rows as f64 / cols as f64;
        let mismatch = cell_aspect.ln().abs();
        let unused = rows * cols - count;

        let better = mismatch < best_score.0 - 1e-9
            || ((mismatch - best_score.0).abs() <= 1e-9 && unused < best_score.1);
        if better {
            best = (rows, cols);
            best_score = (mismatch, unused);
        }
    }

    best
}

/// Split ratio for the `step`-th node of the fractal schedule
///
/// Alternates the inverse golden ratio with its complement.
pub const fn split_ratio(step: usize) -> f64 {
    if step % 2 == 0 {
        GOLDEN_RATIO_INVERSE
    } else {
        1.0 - GOLDEN_RATIO_INVERSE
    }
}

/// Polar position `(radius, angle)` of the `index`-th point of a golden-angle spiral
pub fn spiral_position(index: usize, spacing: f64) -> (f64, f64) {
    let i = index as f64;
    (spacing * i.sqrt(), i * GOLDEN_ANGLE)
}

/// Split `total` into `parts` counts differing by at most one, larger counts first
pub fn balanced_counts(total: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts;
    let extra = total % parts;
    (0..parts).map(|i| base + usize::from(i < extra)).collect()
}

/// Largest-remainder apportionment of `total` slots proportional to `weights`
///
/// Every part receives at least one slot when `total >= weights.len()`.
/// Ties in the remainder go to the earlier part.
pub fn apportion(total: usize, weights: &[f64]) -> Vec<usize> {
    let parts = weights.len();
    if parts == 0 {
        return Vec::new();
    }
    if total < parts {
        return (0..parts).map(|i| usize::from(i < total)).collect();
    }

    let mut counts = vec![1usize; parts];
    let spare = total - parts;
    let weight_sum: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if spare == 0 || weight_sum <= 0.0 {
        for (i, count) in counts.iter_mut().enumerate() {
            *count += spare / parts + usize::from(i < spare % parts);
        }
        return counts;
    }

    let quotas: Vec<f64> = weights
        .iter()
        .map(|w| w.max(0.0) / weight_sum * spare as f64)
        .collect();
    let mut assigned = 0;
    for (count, quota) in counts.iter_mut().zip(&quotas) {
        let whole = quota.floor() as usize;
        *count += whole;
        assigned += whole;
    }

    let mut order: Vec<usize> = (0..parts).collect();
    order.sort_by(|&a, &b| {
        let ra = quotas.get(a).map_or(0.0, |q| q - q.floor());
        let rb = quotas.get(b).map_or(0.0, |q| q - q.floor());
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &index in order.iter().take(spare.saturating_sub(assigned)) {
        if let Some(count) = counts.get_mut(index) {
            *count += 1;
        }
    }

    counts
}
