//! Recursive post-order driver: the engine's single entry point (§4.9, §6).
//!
//! Grounded on the teacher's `post_order_groups`/`pre_order_groups` traversal
//! helpers (`layout::mod`) — the same bottom-up-first shape, collapsed to one
//! pass since this engine annotates nodes in place rather than accumulating
//! world coordinates from local ones.

use crate::layout::alignment::{analyze_alignment, AlignmentAnalysis};
use crate::layout::classifier::classify_children;
use crate::layout::executor::execute_best;
use crate::layout::geometry::{self, Axis};
use crate::layout::resolver::{determine_layout_type, LayoutDecision};
use crate::layout::strategies::{SplitOptions, SplitResult};
use crate::layout::style::synthesize_style;
use crate::layout::tolerance::{adaptive_tolerance, ToleranceConfig};
use crate::schema::{create_schema, CreateSchemaOptions, Frame, LayoutType, NodeSchema, Props, XLayout};

pub use crate::layout::style::{alignment_to_css, generate_flex_style, CssAlignment};

/// Fill in `right`/`bottom` on a possibly-partial frame (§6).
pub fn normalize_frame(left: f64, top: f64, width: f64, height: f64) -> Frame {
    Frame::normalize(left, top, width, height)
}

/// Convenience wrapper: run the executor fixed to `row` (§6).
pub fn split_to_row(children: &[Frame]) -> SplitResult {
    split_fixed_axis(children, Axis::Row)
}

/// Convenience wrapper: run the executor fixed to `column` (§6).
pub fn split_to_column(children: &[Frame]) -> SplitResult {
    split_fixed_axis(children, Axis::Column)
}

fn split_fixed_axis(children: &[Frame], axis: Axis) -> SplitResult {
    let cfg = ToleranceConfig::default();
    let extent = match geometry::bounding_box(children) {
        Some(bb) => axis.size(&bb),
        None => 0.0,
    };
    let tolerance = adaptive_tolerance(children, axis, extent, &cfg);
    let opts = SplitOptions { axis, tolerance, tolerance_config: &cfg };
    execute_best(children, &opts)
}

/// The `{layoutType, groups, gaps}` shape §6 documents for `determineLayoutType`.
pub struct LayoutTypeResult {
    pub layout_type: Option<LayoutType>,
    pub groups: Vec<Vec<usize>>,
    pub gaps: Vec<f64>,
}

/// Public wrapper around the resolver using default tolerance coefficients (§6).
pub fn determine_layout_type_default(parent_frame: Frame, children: &[Frame]) -> LayoutTypeResult {
    let cfg = ToleranceConfig::default();
    let decision = determine_layout_type(parent_frame, children, &cfg);
    LayoutTypeResult { layout_type: decision.layout_type, groups: decision.groups, gaps: decision.gaps }
}

/// Annotate `schema` with inferred layout, recursing post-order so every
/// child's own layout exists before its parent consults the child frames
/// (§4.9). The primary entry point (`layoutParser` in §6).
pub fn layout_parser(mut schema: NodeSchema) -> NodeSchema {
    schema.normalize_frame();

    schema.children = schema.children.into_iter().map(layout_parser).collect();

    let Some(parent_frame) = schema.frame else {
        return schema;
    };
    if parent_frame.area() <= 0.0 {
        return schema;
    }

    let classification = classify_children(&schema.children);
    if classification.normal.len() < 2 {
        return schema;
    }

    let cfg = ToleranceConfig::default();
    let normal_frames: Vec<Frame> = classification.normal.iter().map(|&i| schema.children[i].effective_frame()).collect();
    let decision = determine_layout_type(parent_frame, &normal_frames, &cfg);

    let Some(layout_type) = decision.layout_type else {
        return schema;
    };

    let group_boxes: Vec<Frame> = decision
        .groups
        .iter()
        .filter_map(|group| geometry::bounding_box(&group.iter().map(|&local| normal_frames[local]).collect::<Vec<_>>()))
        .collect();
    let alignment = analyze_alignment(parent_frame, &group_boxes, &cfg);

    let resize = schema.x_layout.as_ref().map(|x| x.resize).unwrap_or_default();
    let style = synthesize_style(layout_type, &alignment, decision.gap, decision.padding, parent_frame, resize);

    // Any group with more than one member needs its own nested layout to
    // express that sub-structure — not only the `mix` case (§4.9 step 6).
    // Singleton groups (the common case for a plain row/column) need no
    // wrapper: the group *is* the leaf, and children stay in document order.
    if decision.groups.iter().any(|group| group.len() > 1) {
        restructure_into_groups(&mut schema, &classification.normal, &decision, &normal_frames);
    }

    schema.layout_type = Some(layout_type);
    schema.props.style.extend(style);
    let x_layout = schema.x_layout.get_or_insert_with(XLayout::default);
    x_layout.align_horizontal = x_layout.align_horizontal.or(alignment.align_horizontal);
    x_layout.align_vertical = x_layout.align_vertical.or(alignment.align_vertical);

    schema
}

/// Wrap each multi-member group's `normal` children in a freshly generated
/// container node carrying its own nested layout, leaving everything not in
/// `normal` in its original relative order (§4.9, §8 invariant 2 — wrapper
/// nodes are the one case preservation allows new ids).
fn restructure_into_groups(schema: &mut NodeSchema, normal_indices: &[usize], decision: &LayoutDecision, normal_frames: &[Frame]) {
    let mut wrappers: Vec<NodeSchema> = Vec::with_capacity(decision.groups.len());
    for group in &decision.groups {
        let member_global_indices: Vec<usize> = group.iter().map(|&local| normal_indices[local]).collect();
        let members: Vec<NodeSchema> = member_global_indices.iter().map(|&gi| schema.children[gi].clone()).collect();
        let member_frames: Vec<Frame> = group.iter().map(|&local| normal_frames[local]).collect();
        let bbox = geometry::bounding_box(&member_frames).unwrap_or_else(Frame::zero);

        let wrapper_opts = CreateSchemaOptions { frame: Some(bbox), props: Props::default(), children: members, id: None };
        let mut wrapper = create_schema("FlexGroup", wrapper_opts);
        wrapper = layout_parser(wrapper);
        wrappers.push(wrapper);
    }

    let mut non_normal: Vec<NodeSchema> = schema
        .children
        .iter()
        .enumerate()
        .filter(|(i, _)| !normal_indices.contains(i))
        .map(|(_, c)| c.clone())
        .collect();

    let mut new_children = wrappers;
    new_children.append(&mut non_normal);
    schema.children = new_children;
}
