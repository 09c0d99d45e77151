//! Multi-strategy executor: run every split strategy and pick the best result
//! by score (§4.4).
//!
//! Grounded on the teacher's dispatch-by-name in `layout_diagram` (`layout::mod`,
//! picking `GraphDrivenLayout` vs `GridLayout`): here the selection key is a
//! computed score rather than a config string, but the "try each registered
//! strategy, keep one" shape is the same.

use crate::layout::geometry::{self, Axis};
use crate::layout::strategies::{all_strategies, SplitOptions, SplitResult};
use crate::schema::Frame;

/// Weights for the four scoring terms in [`score_split`]. Must sum to 1;
/// `ScoreWeights::default()` documents the chosen values (see DESIGN.md for the
/// Open Question this resolves — the source material left exact weights
/// unspecified).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub balance: f64,
    pub separation: f64,
    pub nontriviality: f64,
    pub alignment: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights { balance: 0.25, separation: 0.35, nontriviality: 0.2, alignment: 0.2 }
    }
}

/// Score a [`SplitResult`] per §4.4: balance, separation, non-triviality, and
/// alignment cleanliness, each normalized to roughly `[0, 1]` and combined by
/// `ScoreWeights`. A single-group (non-trivial-split-failed) result always
/// scores 0.
pub fn score_split(children: &[Frame], axis: Axis, result: &SplitResult) -> f64 {
    score_split_weighted(children, axis, result, &ScoreWeights::default())
}

pub fn score_split_weighted(children: &[Frame], axis: Axis, result: &SplitResult, weights: &ScoreWeights) -> f64 {
    if result.groups.len() < 2 {
        return 0.0;
    }

    let sizes: Vec<f64> = children.iter().map(|f| axis.size(f)).collect();
    let avg_size = geometry::mean(&sizes);

    let group_sizes: Vec<f64> = result.groups.iter().map(|g| g.len() as f64).collect();
    let balance = (1.0 - geometry::cv(&group_sizes)).clamp(0.0, 1.0);

    let separation = if avg_size > 0.0 && !result.gaps.is_empty() {
        let min_gap = result.gaps.iter().cloned().fold(f64::INFINITY, f64::min);
        (min_gap / avg_size).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let nontriviality = 1.0;

    let cross = axis.cross();
    let group_cvs: Vec<f64> = result
        .groups
        .iter()
        .map(|group| {
            if group.len() < 2 {
                return 0.0;
            }
            let edges: Vec<f64> = group.iter().map(|&i| cross.leading(&children[i])).collect();
            geometry::cv(&edges)
        })
        .collect();
    let alignment = (1.0 - geometry::mean(&group_cvs)).clamp(0.0, 1.0);

    weights.balance * balance + weights.separation * separation + weights.nontriviality * nontriviality + weights.alignment * alignment
}

/// Run all four strategies and return every result, for diagnostic use
/// (`executeAll` in §6).
pub fn execute_all(children: &[Frame], opts: &SplitOptions) -> Vec<SplitResult> {
    all_strategies().iter().map(|strategy| strategy.split(children, opts)).collect()
}

/// Run all four strategies and return the best by score, breaking ties by
/// strategy priority (grid > clustering > center-line > greedy-edge). Falls
/// back to the (unsplit) greedy-edge result if every strategy fails (§4.4).
pub fn execute_best(children: &[Frame], opts: &SplitOptions) -> SplitResult {
    let results = execute_all(children, opts);

    let best = results
        .iter()
        .filter(|r| r.success)
        .max_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap()
                .then_with(|| priority_of(a.strategy_name).cmp(&priority_of(b.strategy_name)))
        })
        .cloned();

    best.unwrap_or_else(|| {
        results
            .into_iter()
            .find(|r| r.strategy_name == "greedy-edge")
            .unwrap_or_else(|| SplitResult::unsplit("greedy-edge", children.len()))
    })
}

fn priority_of(strategy_name: &str) -> u8 {
    all_strategies().iter().find(|s| s.name() == strategy_name).map(|s| s.priority()).unwrap_or(0)
}
