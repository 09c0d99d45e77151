//! Alignment analyzer: classifies how the winning axis's child groups sit
//! within the parent frame, horizontally and vertically, each with a
//! confidence score (§4.7).

use crate::layout::geometry;
use crate::layout::tolerance::ToleranceConfig;
use crate::schema::{AlignHorizontal, AlignVertical, Frame};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlignmentAnalysis {
    pub align_horizontal: Option<AlignHorizontal>,
    pub align_vertical: Option<AlignVertical>,
    pub horizontal_confidence: f64,
    pub vertical_confidence: f64,
}

/// Classifications below 0.5 confidence are reported as "unknown" and dropped
/// from the output (§4.7, §7).
const CONFIDENCE_FLOOR: f64 = 0.5;

fn approx_zero(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}

fn pairwise_spread(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

/// Confidence from how far a deviation is below `eps`: 0 deviation → 1.0,
/// deviation == eps → 0.0, beyond that clamped to 0.
fn confidence_from_deviation(deviation: f64, eps: f64) -> f64 {
    if eps <= 0.0 {
        return if deviation <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - deviation / eps).clamp(0.0, 1.0)
}

/// An epsilon scaled to the groups being compared — a small fraction of their
/// average extent along the axis being analyzed (§4.2, §9's "single
/// configurable ε" guidance).
fn epsilon_for(leading_extent: f64, cfg: &ToleranceConfig) -> f64 {
    (leading_extent.abs() * cfg.k1).max(1.0)
}

struct MarginClassification {
    leading: Option<(bool, f64)>,
    trailing: Option<(bool, f64)>,
    center: Option<(bool, f64)>,
    space_between: Option<(bool, f64)>,
    space_evenly: Option<(bool, f64)>,
    justify: Option<(bool, f64)>,
}

/// Classify one axis's margins/gaps against all six classes from §4.7's table,
/// each paired with (matches, confidence). Shared by horizontal and vertical.
fn classify_margins(m_leading: f64, m_trailing: f64, gaps: &[f64], eps: f64) -> MarginClassification {
    let leading_zero = approx_zero(m_leading, eps);
    let trailing_zero = approx_zero(m_trailing, eps);
    let gap_spread = pairwise_spread(gaps);
    let gaps_equal = gaps.is_empty() || gap_spread <= eps;

    let leading = if leading_zero && m_trailing > eps {
        Some((true, confidence_from_deviation(m_leading.abs(), eps)))
    } else {
        None
    };

    let trailing = if trailing_zero && m_leading > eps {
        Some((true, confidence_from_deviation(m_trailing.abs(), eps)))
    } else {
        None
    };

    let center = if (m_leading - m_trailing).abs() <= eps && m_leading > eps && m_trailing > eps {
        Some((true, confidence_from_deviation((m_leading - m_trailing).abs(), eps)))
    } else {
        None
    };

    let space_between = if leading_zero && trailing_zero && !gaps.is_empty() && gaps_equal {
        let deviation = m_leading.abs().max(m_trailing.abs()).max(gap_spread);
        Some((true, confidence_from_deviation(deviation, eps)))
    } else {
        None
    };

    let space_evenly = if !gaps.is_empty() && gaps_equal {
        let avg_gap = geometry::mean(gaps);
        let all: Vec<f64> = std::iter::once(m_leading).chain(gaps.iter().cloned()).chain(std::iter::once(m_trailing)).collect();
        let spread = pairwise_spread(&all);
        if spread <= eps {
            let deviation = (m_leading - avg_gap).abs().max((m_trailing - avg_gap).abs()).max(gap_spread);
            Some((true, confidence_from_deviation(deviation, eps)))
        } else {
            None
        }
    } else {
        None
    };

    let justify = if gaps_equal && !gaps.is_empty() && !leading_zero && !trailing_zero && (m_leading - m_trailing).abs() > eps {
        Some((true, confidence_from_deviation(gap_spread, eps)))
    } else {
        None
    };

    MarginClassification { leading, trailing, center, space_between, space_evenly, justify }
}

/// Analyze alignment of `groups` (bounding boxes, ordered along the winning
/// axis) within `parent` (§4.7).
pub fn analyze_alignment(parent: Frame, groups: &[Frame], cfg: &ToleranceConfig) -> AlignmentAnalysis {
    if groups.is_empty() {
        return AlignmentAnalysis::default();
    }

    let first = groups[0];
    let last = *groups.last().unwrap();

    // Horizontal.
    let m_l = first.left - parent.left;
    let m_r = parent.right - last.right;
    let h_gaps: Vec<f64> = groups.windows(2).map(|w| w[1].left - w[0].right).collect();
    let h_eps = epsilon_for(geometry::mean(&groups.iter().map(|g| g.width).collect::<Vec<_>>()), cfg);
    let h = classify_margins(m_l, m_r, &h_gaps, h_eps);

    // Space-between / space-evenly take precedence (more specific reads of the
    // same zero-margin shape), then left/right/center, then justify.
    let (align_horizontal, horizontal_confidence) = pick_best(&[
        (AlignHorizontal::SpaceBetween, h.space_between),
        (AlignHorizontal::SpaceEvenly, h.space_evenly),
        (AlignHorizontal::Left, h.leading),
        (AlignHorizontal::Right, h.trailing),
        (AlignHorizontal::Center, h.center),
        (AlignHorizontal::Justify, h.justify),
    ]);

    // Vertical.
    let m_t = first.top - parent.top;
    let m_b = parent.bottom - last.bottom;
    let v_gaps: Vec<f64> = groups.windows(2).map(|w| w[1].top - w[0].bottom).collect();
    let v_eps = epsilon_for(geometry::mean(&groups.iter().map(|g| g.height).collect::<Vec<_>>()), cfg);
    let v = classify_margins(m_t, m_b, &v_gaps, v_eps);

    let stretch = {
        let heights: Vec<f64> = groups.iter().map(|g| g.height).collect();
        let usable = parent.height - m_t.max(0.0) - m_b.max(0.0);
        let deviation = heights.iter().map(|h| (h - usable).abs()).fold(0.0_f64, f64::max);
        if deviation <= v_eps {
            Some((true, confidence_from_deviation(deviation, v_eps)))
        } else {
            None
        }
    };

    // Top/bottom/middle are more specific reads of the margins than stretch
    // (which only requires every group to fill the usable height), so they're
    // listed first and win any exact-confidence tie.
    let (align_vertical, vertical_confidence) = pick_best(&[
        (AlignVertical::Top, v.leading),
        (AlignVertical::Bottom, v.trailing),
        (AlignVertical::Middle, v.center),
        (AlignVertical::Stretch, stretch),
    ]);

    AlignmentAnalysis {
        align_horizontal: if horizontal_confidence >= CONFIDENCE_FLOOR { align_horizontal } else { None },
        align_vertical: if vertical_confidence >= CONFIDENCE_FLOOR { align_vertical } else { None },
        horizontal_confidence,
        vertical_confidence,
    }
}

/// Pick the highest-confidence candidate, earlier entries winning exact ties.
/// `Iterator::max_by` returns the *last* equally-maximal element, which would
/// invert the precedence the candidate lists above are ordered by, so this
/// folds manually with a strict `>` instead.
fn pick_best<T: Copy>(candidates: &[(T, Option<(bool, f64)>)]) -> (Option<T>, f64) {
    let mut best: Option<(T, f64)> = None;
    for (class, result) in candidates {
        let Some((_, confidence)) = result else { continue };
        match best {
            Some((_, best_confidence)) if *confidence <= best_confidence => {}
            _ => best = Some((*class, *confidence)),
        }
    }
    best.map(|(class, confidence)| (Some(class), confidence)).unwrap_or((None, 0.0))
}
