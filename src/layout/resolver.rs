//! Layout-type resolver: given a parent frame and its `normal` children, decide
//! `row` / `column` / `mix`, the winning split's groups and gap, and padding
//! (§4.6).

use crate::layout::executor::execute_best;
use crate::layout::geometry::{self, Axis};
use crate::layout::strategies::{SplitOptions, SplitResult};
use crate::layout::tolerance::{adaptive_tolerance, ToleranceConfig};
use crate::schema::{Frame, LayoutType};

/// The four edge distances from a parent frame to its children's bounding box,
/// each clamped to non-negative (§4.6).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// The resolver's verdict for one container (§4.6).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDecision {
    pub layout_type: Option<LayoutType>,
    /// The winning split's groups, as indices into the `normal` children slice
    /// the resolver was given.
    pub groups: Vec<Vec<usize>>,
    /// Median of `gaps`, used directly as the CSS `gap` (§4.6).
    pub gap: f64,
    /// The raw per-adjacent-group-pair gaps behind `gap`, exposed for callers
    /// that want more than the summary statistic (§6's `determineLayoutType`).
    pub gaps: Vec<f64>,
    pub padding: Padding,
}

fn compute_padding(parent: Frame, children: &[Frame]) -> Padding {
    match geometry::bounding_box(children) {
        None => Padding::default(),
        Some(bb) => Padding {
            top: (bb.top - parent.top).max(0.0),
            right: (parent.right - bb.right).max(0.0),
            bottom: (parent.bottom - bb.bottom).max(0.0),
            left: (bb.left - parent.left).max(0.0),
        },
    }
}

/// Determine layout type for `children` (already filtered to `normal`) within
/// `parent_frame`, per §4.6's five-step decision.
pub fn determine_layout_type(parent_frame: Frame, children: &[Frame], cfg: &ToleranceConfig) -> LayoutDecision {
    let padding = compute_padding(parent_frame, children);

    if children.len() < 2 {
        let groups = if children.is_empty() { vec![] } else { vec![vec![0]] };
        return LayoutDecision { layout_type: None, groups, gap: 0.0, gaps: vec![], padding };
    }

    let col_tolerance = adaptive_tolerance(children, Axis::Column, parent_frame.height, cfg);
    let col_opts = SplitOptions { axis: Axis::Column, tolerance: col_tolerance, tolerance_config: cfg };
    let col_result = execute_best(children, &col_opts);

    let row_tolerance = adaptive_tolerance(children, Axis::Row, parent_frame.width, cfg);
    let row_opts = SplitOptions { axis: Axis::Row, tolerance: row_tolerance, tolerance_config: cfg };
    let row_result = execute_best(children, &row_opts);

    let (layout_type, winner) = match (col_result.success, row_result.success) {
        (true, false) => (LayoutType::Column, col_result),
        (false, true) => (LayoutType::Row, row_result),
        (true, true) => {
            // A genuine grid is detectable from either axis — the grid-aligned
            // strategy wins both reads. Its natural top-level reading is rows
            // stacked in a column, with the row structure recovered by recursing
            // into each group, rather than reporting the ambiguous `mix` layout
            // two independently-winning-but-unrelated splits would deserve.
            if col_result.strategy_name == "grid-aligned" && row_result.strategy_name == "grid-aligned" {
                (LayoutType::Column, col_result)
            } else if row_result.score >= col_result.score {
                (LayoutType::Mix, row_result)
            } else {
                (LayoutType::Mix, col_result)
            }
        }
        (false, false) => {
            return LayoutDecision {
                layout_type: None,
                groups: vec![(0..children.len()).collect()],
                gap: 0.0,
                gaps: vec![],
                padding,
            };
        }
    };

    let gap = median_gap(&winner);
    LayoutDecision { layout_type: Some(layout_type), groups: winner.groups, gap, gaps: winner.gaps, padding }
}

fn median_gap(result: &SplitResult) -> f64 {
    geometry::median(&result.gaps)
}
