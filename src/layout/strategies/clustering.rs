//! Clustering split — 1-D agglomerative clustering on projected centers (§4.3.4).

use crate::layout::executor::score_split;
use crate::layout::geometry::{self, Axis};
use crate::schema::Frame;

use super::{SplitOptions, SplitResult, SplitStrategy};

pub struct ClusteringSplit;

impl SplitStrategy for ClusteringSplit {
    fn name(&self) -> &'static str {
        "clustering"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn split(&self, children: &[Frame], opts: &SplitOptions) -> SplitResult {
        let result = clustering_split(children, opts.axis);
        let score = score_split(children, opts.axis, &result);
        SplitResult { score, ..result }
    }
}

/// Sort children by center on `axis`, then merge adjacent clusters whose center
/// gap is below the merge threshold; stop once the next merge would cross it.
/// One group per surviving cluster.
///
/// The threshold is the mean of the inter-center gaps *excluding the largest
/// one* — the largest gap is the outlier separating clusters, so it must not
/// pull the threshold up to its own level. Plain `median(gaps)` ties to itself
/// whenever several small gaps share the median value, which (with `>=`) forced
/// a split at every one of them instead of only at the true outlier.
fn clustering_split(children: &[Frame], axis: Axis) -> SplitResult {
    if children.is_empty() {
        return SplitResult::unsplit("clustering", 0);
    }
    if children.len() == 1 {
        return SplitResult::unsplit("clustering", 1);
    }

    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by(|&a, &b| axis.center(&children[a]).partial_cmp(&axis.center(&children[b])).unwrap());

    let inter_center_gaps: Vec<f64> =
        order.windows(2).map(|w| axis.center(&children[w[1]]) - axis.center(&children[w[0]])).collect();
    let threshold = merge_threshold(&inter_center_gaps);

    let mut groups: Vec<Vec<usize>> = vec![vec![order[0]]];
    let mut gaps: Vec<f64> = vec![];
    for (window, &gap) in order.windows(2).zip(inter_center_gaps.iter()) {
        let next = window[1];
        if gap > threshold {
            gaps.push(gap);
            groups.push(vec![next]);
        } else {
            groups.last_mut().expect("non-empty").push(next);
        }
    }

    let success = groups.len() > 1;
    SplitResult { success, groups, gaps, strategy_name: "clustering", score: 0.0 }
}

/// Mean of `gaps` with one occurrence of the largest value removed. With only
/// one gap to begin with, there is nothing to average against it, so treat any
/// positive gap as worth splitting on.
fn merge_threshold(gaps: &[f64]) -> f64 {
    let max_gap = gaps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut removed = false;
    let rest: Vec<f64> = gaps
        .iter()
        .cloned()
        .filter(|&g| {
            if !removed && g == max_gap {
                removed = true;
                false
            } else {
                true
            }
        })
        .collect();
    if rest.is_empty() {
        0.0
    } else {
        geometry::mean(&rest)
    }
}
