//! The four split strategies (§4.3) and the shared types they all produce.
//!
//! Grounded on the teacher's `LayoutStrategy` trait (`layout::mod::LayoutStrategy`,
//! implemented by `GraphDrivenLayout`/`GridLayout` and dispatched by name in
//! `layout_diagram`): here the dispatch target is [`SplitStrategy`], implemented by
//! four strategies and dispatched by score instead of by name (§9's "tagged variants
//! plus dispatch" guidance; there is no real benefit to a `dyn Trait` registry at
//! this scale, but the shape mirrors the teacher's directly).

mod center_line;
mod clustering;
mod greedy_edge;
mod grid_aligned;

use crate::layout::geometry::Axis;
use crate::layout::tolerance::ToleranceConfig;
use crate::schema::Frame;

pub use center_line::CenterLineSplit;
pub use clustering::ClusteringSplit;
pub use greedy_edge::GreedyEdgeSplit;
pub use grid_aligned::GridAlignedSplit;

/// Inputs shared by every strategy (§4.3).
#[derive(Debug, Clone, Copy)]
pub struct SplitOptions<'a> {
    pub axis: Axis,
    pub tolerance: f64,
    pub tolerance_config: &'a ToleranceConfig,
}

/// The outcome of partitioning a child list along one axis (§3).
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// False iff this is a single group containing every input child.
    pub success: bool,
    /// An ordered partition of `0..children.len()`, each inner `Vec` one group.
    pub groups: Vec<Vec<usize>>,
    /// Gap along the split axis between `groups[i]` and `groups[i+1]`.
    pub gaps: Vec<f64>,
    pub strategy_name: &'static str,
    pub score: f64,
}

impl SplitResult {
    /// The trivial "everything is one group" result used whenever a strategy can't
    /// find a meaningful split (§3: `success` is false iff single group).
    pub fn unsplit(strategy_name: &'static str, children_len: usize) -> Self {
        let groups = if children_len == 0 { vec![] } else { vec![(0..children_len).collect()] };
        SplitResult { success: false, groups, gaps: vec![], strategy_name, score: 0.0 }
    }
}

/// A pure function `(children, opts) -> SplitResult` (§9), packaged as a trait so
/// the executor can iterate over all four uniformly.
pub trait SplitStrategy {
    fn name(&self) -> &'static str;
    /// Tie-break priority: higher wins. Order from §4.4: grid > clustering >
    /// center-line > greedy-edge.
    fn priority(&self) -> u8;
    fn split(&self, children: &[Frame], opts: &SplitOptions) -> SplitResult;
}

/// All four strategies, in no particular order (the executor sorts by score and
/// breaks ties by `priority`).
pub fn all_strategies() -> Vec<Box<dyn SplitStrategy>> {
    vec![
        Box::new(GreedyEdgeSplit),
        Box::new(CenterLineSplit),
        Box::new(GridAlignedSplit),
        Box::new(ClusteringSplit),
    ]
}

/// Build groups from children sorted by a key, splitting wherever consecutive
/// elements are farther apart (by `gap_fn`) than the provided tolerance allows.
/// Shared by greedy-edge and center-line, which differ only in sort key and gap
/// definition.
pub(super) fn split_by_sorted_gaps(
    order: &[usize],
    gap_for_adjacent: impl Fn(usize, usize) -> f64,
    should_start_new_group: impl Fn(f64) -> bool,
) -> (Vec<Vec<usize>>, Vec<f64>) {
    if order.is_empty() {
        return (vec![], vec![]);
    }

    let mut groups: Vec<Vec<usize>> = vec![vec![order[0]]];
    let mut gaps: Vec<f64> = vec![];

    for window in order.windows(2) {
        let (prev, next) = (window[0], window[1]);
        let gap = gap_for_adjacent(prev, next);
        if should_start_new_group(gap) {
            gaps.push(gap);
            groups.push(vec![next]);
        } else {
            groups.last_mut().expect("groups always has at least one entry").push(next);
        }
    }

    (groups, gaps)
}
