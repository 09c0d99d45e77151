//! Adaptive splitting tolerance, derived from a statistical read of the
//! children being split (§4.2).
//!
//! Grounded on the teacher's `LayoutConfig`/`Default` pattern: constants live in a
//! small config struct rather than scattered literals, so callers can retune the
//! engine without forking it.

use crate::layout::geometry::{self, Axis};
use crate::schema::Frame;

/// Coefficients driving [`adaptive_tolerance`]. See DESIGN.md for why these
/// particular defaults were chosen (§4.2 only bounds them with a range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Base tolerance is `-avg_size * k1`.
    pub k1: f64,
    /// Count penalty strength: higher = stricter tolerance as element count grows.
    pub count_penalty_strength: f64,
    /// Uniformity above which tolerance is loosened.
    pub uniformity_threshold: f64,
    /// Multiplier applied to the base tolerance when uniformity exceeds the threshold.
    pub uniformity_bonus: f64,
    /// Density above which tolerance is tightened.
    pub density_threshold: f64,
    /// Strength of the density penalty.
    pub density_penalty_strength: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        ToleranceConfig {
            k1: 0.1,
            count_penalty_strength: 0.05,
            uniformity_threshold: 0.9,
            uniformity_bonus: 1.6,
            density_threshold: 0.6,
            density_penalty_strength: 0.5,
        }
    }
}

/// Statistics over a set of children, projected onto the split axis (§3, §4.2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutFactors {
    pub avg_size: f64,
    pub size_std_dev: f64,
    pub size_uniformity: f64,
    pub element_count: usize,
    pub density: f64,
    pub cv: f64,
}

impl LayoutFactors {
    /// Compute factors for `children` projected onto `axis`, within a container of
    /// `container_extent` length along that axis (used for density).
    pub fn compute(children: &[Frame], axis: Axis, container_extent: f64) -> Self {
        if children.is_empty() {
            return LayoutFactors {
                avg_size: 0.0,
                size_std_dev: 0.0,
                size_uniformity: 1.0,
                element_count: 0,
                density: 0.0,
                cv: 0.0,
            };
        }

        let sizes: Vec<f64> = children.iter().map(|f| axis.size(f)).collect();
        let avg_size = geometry::mean(&sizes);
        let size_std_dev = geometry::stddev(&sizes);
        let cv = geometry::cv(&sizes);
        // Uniformity is the complement of the coefficient of variation, clamped to
        // [0, 1]: identical sizes give cv = 0 → uniformity = 1.
        let size_uniformity = (1.0 - cv).clamp(0.0, 1.0);

        let total_size: f64 = sizes.iter().sum();
        let density = if container_extent > 0.0 { (total_size / container_extent).clamp(0.0, 1.0) } else { 0.0 };

        LayoutFactors { avg_size, size_std_dev, size_uniformity, element_count: children.len(), density, cv }
    }
}

/// Derive the splitting tolerance for `children` along `axis` (§4.2).
///
/// Negative means "require an actual gap of this magnitude to split"; positive
/// means "tolerate an overlap of this magnitude and still split." Deterministic:
/// depends only on the input frames, axis, container extent, and config.
pub fn adaptive_tolerance(
    children: &[Frame],
    axis: Axis,
    container_extent: f64,
    cfg: &ToleranceConfig,
) -> f64 {
    let factors = LayoutFactors::compute(children, axis, container_extent);
    if factors.avg_size <= 0.0 {
        return 0.0;
    }

    let base = -factors.avg_size * cfg.k1;

    // Element-count penalty: a monotone-decreasing factor of element count, so
    // more elements means a stricter (more negative) tolerance (§4.2 step 3, §8
    // invariant 5). Two elements is the smallest meaningful split, so the penalty
    // only grows beyond that.
    let extra_elements = (factors.element_count.saturating_sub(2)) as f64;
    let count_factor = 1.0 / (1.0 + cfg.count_penalty_strength * extra_elements);
    let mut tolerance = base / count_factor;

    // Uniformity bonus: loosen (move toward positive / make less negative) when
    // children are near-identical in size, so jitter doesn't block an otherwise
    // obvious split (§4.2 step 4, §8 invariant 6).
    if factors.size_uniformity > cfg.uniformity_threshold {
        tolerance *= cfg.uniformity_bonus;
    }

    // Density penalty: tighten tolerance when children pack densely relative to
    // the container (§4.2 step 5).
    if factors.density > cfg.density_threshold {
        let excess = factors.density - cfg.density_threshold;
        tolerance -= factors.avg_size * cfg.density_penalty_strength * excess;
    }

    tolerance.clamp(-factors.avg_size, factors.avg_size / 4.0)
}

/// `{light, significant}` overlap tolerances scaled by the median frame diagonal,
/// used by the child classifier (§4.2, §4.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapTolerance {
    pub light: f64,
    pub significant: f64,
}

pub fn overlap_detection_tolerance(frames: &[Frame]) -> OverlapTolerance {
    if frames.is_empty() {
        return OverlapTolerance { light: 0.0, significant: 0.0 };
    }
    let diagonals: Vec<f64> = frames.iter().map(Frame::diagonal).collect();
    let median_diagonal = geometry::median(&diagonals);
    OverlapTolerance { light: median_diagonal * 0.1, significant: median_diagonal * 0.3 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_sized(size: f64) -> Frame {
        Frame::normalize(0.0, 0.0, size, size)
    }

    #[test]
    fn empty_input_yields_zero_tolerance() {
        let cfg = ToleranceConfig::default();
        assert_eq!(adaptive_tolerance(&[], Axis::Row, 1000.0, &cfg), 0.0);
    }

    #[test]
    fn tolerance_is_deterministic() {
        let cfg = ToleranceConfig::default();
        let children = vec![frame_sized(80.0), frame_sized(80.0), frame_sized(80.0)];
        let a = adaptive_tolerance(&children, Axis::Row, 1000.0, &cfg);
        let b = adaptive_tolerance(&children, Axis::Row, 1000.0, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn tolerance_is_monotone_non_increasing_in_element_count() {
        let cfg = ToleranceConfig::default();
        let extent = 10_000.0;
        let mut previous = f64::INFINITY;
        for n in 2..20 {
            let children: Vec<Frame> = (0..n).map(|_| frame_sized(80.0)).collect();
            let t = adaptive_tolerance(&children, Axis::Row, extent, &cfg);
            assert!(t <= previous + 1e-9, "tolerance increased at n={n}: {t} > {previous}");
            previous = t;
        }
    }

    #[test]
    fn uniform_sizes_produce_looser_tolerance_than_varied() {
        let cfg = ToleranceConfig::default();
        let extent = 10_000.0;
        let uniform: Vec<Frame> = (0..6).map(|_| frame_sized(80.0)).collect();
        let varied: Vec<Frame> =
            vec![frame_sized(20.0), frame_sized(140.0), frame_sized(30.0), frame_sized(150.0), frame_sized(25.0), frame_sized(135.0)];

        let uniform_tolerance = adaptive_tolerance(&uniform, Axis::Row, extent, &cfg);
        let varied_tolerance = adaptive_tolerance(&varied, Axis::Row, extent, &cfg);

        // Looser means numerically larger (less negative / more positive).
        assert!(uniform_tolerance > varied_tolerance);
    }

    #[test]
    fn tolerance_is_clamped() {
        let cfg = ToleranceConfig::default();
        let children: Vec<Frame> = (0..50).map(|_| frame_sized(100.0)).collect();
        let t = adaptive_tolerance(&children, Axis::Row, 50_000.0, &cfg);
        assert!(t >= -100.0);
        assert!(t <= 25.0);
    }

    #[test]
    fn overlap_detection_tolerance_scales_with_size() {
        let small = overlap_detection_tolerance(&[frame_sized(10.0)]);
        let large = overlap_detection_tolerance(&[frame_sized(100.0)]);
        assert!(large.light > small.light);
        assert!(large.significant > large.light);
    }
}
