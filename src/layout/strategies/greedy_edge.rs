//! Greedy edge split — the baseline strategy (§4.3.1).

use crate::layout::executor::score_split;
use crate::layout::geometry::Axis;
use crate::schema::Frame;

use super::{SplitOptions, SplitResult, SplitStrategy};

pub struct GreedyEdgeSplit;

impl SplitStrategy for GreedyEdgeSplit {
    fn name(&self) -> &'static str {
        "greedy-edge"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn split(&self, children: &[Frame], opts: &SplitOptions) -> SplitResult {
        let result = greedy_edge_split(children, opts.axis, opts.tolerance);
        let score = score_split(children, opts.axis, &result);
        SplitResult { score, ..result }
    }
}

/// Sort by leading edge; start a new group whenever the next child's leading edge
/// exceeds the *running* trailing edge of the current group by more than
/// `|tolerance|` (children aren't necessarily same-size, so the group's trailing
/// edge is a running max, not just the previous child's).
fn greedy_edge_split(children: &[Frame], axis: Axis, tolerance: f64) -> SplitResult {
    if children.is_empty() {
        return SplitResult::unsplit("greedy-edge", 0);
    }

    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by(|&a, &b| axis.leading(&children[a]).partial_cmp(&axis.leading(&children[b])).unwrap());

    let threshold = tolerance.abs();
    let mut groups: Vec<Vec<usize>> = vec![vec![order[0]]];
    let mut gaps: Vec<f64> = vec![];
    let mut group_trailing = axis.trailing(&children[order[0]]);

    for &idx in &order[1..] {
        let leading = axis.leading(&children[idx]);
        let gap = leading - group_trailing;
        if gap > threshold {
            gaps.push(gap);
            groups.push(vec![idx]);
            group_trailing = axis.trailing(&children[idx]);
        } else {
            groups.last_mut().unwrap().push(idx);
            group_trailing = group_trailing.max(axis.trailing(&children[idx]));
        }
    }

    let success = groups.len() > 1;
    SplitResult { success, groups, gaps, strategy_name: "greedy-edge", score: 0.0 }
}
