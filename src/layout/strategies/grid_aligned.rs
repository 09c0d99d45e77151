//! Grid-aligned split — detects a grid by banding children along the split axis
//! (each band already tight on that axis by construction of the gap split) and
//! additionally requiring every band to hold the same number of children, i.e.
//! form a genuine rectangular grid rather than an arbitrary run of gaps (§4.3.3).
//!
//! Grounded on the teacher's `GridLayout` (`layout::algorithms::grid`) only for the
//! "place in bands" framing — the teacher packs nodes into a grid forward; this
//! detects one that already exists.

use crate::layout::executor::score_split;
use crate::layout::geometry::{self, Axis};
use crate::schema::Frame;

use super::{split_by_sorted_gaps, SplitOptions, SplitResult, SplitStrategy};

pub struct GridAlignedSplit;

impl SplitStrategy for GridAlignedSplit {
    fn name(&self) -> &'static str {
        "grid-aligned"
    }

    fn priority(&self) -> u8 {
        4
    }

    fn split(&self, children: &[Frame], opts: &SplitOptions) -> SplitResult {
        let result = grid_aligned_split(children, opts.axis, opts.tolerance);
        let score = score_split(children, opts.axis, &result);
        SplitResult { score, ..result }
    }
}

fn grid_aligned_split(children: &[Frame], axis: Axis, tolerance: f64) -> SplitResult {
    if children.is_empty() {
        return SplitResult::unsplit("grid-aligned", 0);
    }

    let sizes: Vec<f64> = children.iter().map(|f| axis.size(f)).collect();
    let avg_size = geometry::mean(&sizes);
    let threshold = avg_size + tolerance.abs();

    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by(|&a, &b| axis.leading(&children[a]).partial_cmp(&axis.leading(&children[b])).unwrap());

    let (groups, gaps) =
        split_by_sorted_gaps(&order, |prev, next| axis.leading(&children[next]) - axis.leading(&children[prev]), |gap| gap > threshold);

    // Fewer than two bands: not a grid.
    if groups.len() < 2 {
        return SplitResult { success: false, groups, gaps, strategy_name: "grid-aligned", score: 0.0 };
    }

    // A real grid has the same number of elements in each band — that's what
    // distinguishes "rows of a grid" from an arbitrary gap-delimited sequence.
    let band_size = groups[0].len();
    let is_grid = band_size >= 2 && groups.iter().all(|band| band.len() == band_size);
    if !is_grid {
        return SplitResult { success: false, groups, gaps, strategy_name: "grid-aligned", score: 0.0 };
    }

    SplitResult { success: true, groups, gaps, strategy_name: "grid-aligned", score: 0.0 }
}
