//! Center-line split — handles children whose edges overlap slightly but whose
//! centers are cleanly separated (§4.3.2).

use crate::layout::executor::score_split;
use crate::layout::geometry::{self, Axis};
use crate::schema::Frame;

use super::{split_by_sorted_gaps, SplitOptions, SplitResult, SplitStrategy};

pub struct CenterLineSplit;

impl SplitStrategy for CenterLineSplit {
    fn name(&self) -> &'static str {
        "center-line"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn split(&self, children: &[Frame], opts: &SplitOptions) -> SplitResult {
        let result = center_line_split(children, opts.axis, opts.tolerance);
        let score = score_split(children, opts.axis, &result);
        SplitResult { score, ..result }
    }
}

/// Sort by center coordinate; split wherever the gap between consecutive centers
/// exceeds `avgSize + |tolerance|` — the center-to-center distance two
/// same-size, edge-touching children would have, adjusted by the same tolerance
/// the edge-based strategies use.
fn center_line_split(children: &[Frame], axis: Axis, tolerance: f64) -> SplitResult {
    if children.is_empty() {
        return SplitResult::unsplit("center-line", 0);
    }

    let sizes: Vec<f64> = children.iter().map(|f| axis.size(f)).collect();
    let avg_size = geometry::mean(&sizes);
    let threshold = avg_size + tolerance.abs();

    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by(|&a, &b| axis.center(&children[a]).partial_cmp(&axis.center(&children[b])).unwrap());

    let (groups, gaps) = split_by_sorted_gaps(
        &order,
        |prev, next| axis.center(&children[next]) - axis.center(&children[prev]),
        |gap| gap > threshold,
    );

    let success = groups.len() > 1;
    SplitResult { success, groups, gaps, strategy_name: "center-line", score: 0.0 }
}
