//! Child classifier: partitions a container's children into `hidden`, `slot`,
//! `absolute`, and `normal` before splitting is attempted (§4.5).
//!
//! Grounded on the teacher's overlap-then-exact-check idiom in `spatial_grid.rs`
//! (`overlaps_any` before trusting a placement) — here used the other way round,
//! to *disqualify* children whose overlap means they can't be part of a flex run.

use crate::layout::geometry;
use crate::layout::tolerance::overlap_detection_tolerance;
use crate::schema::NodeSchema;

/// Indices into a children slice, partitioned by classification (§4.5).
/// Pairwise disjoint and exhaustive over the input (§8 invariant 1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildClassification {
    pub normal: Vec<usize>,
    pub absolute: Vec<usize>,
    pub hidden: Vec<usize>,
    pub slot: Vec<usize>,
}

fn has_absolute_position(node: &NodeSchema) -> bool {
    matches!(
        node.props.style.get("position"),
        Some(crate::schema::StyleValue::String(s)) if s == "absolute" || s == "fixed"
    )
}

/// Classify `children` per §4.5. A child with no frame is treated as zero-size
/// at the origin and classified `absolute`, never `normal`, so it can't skew the
/// statistics splitting depends on.
pub fn classify_children(children: &[NodeSchema]) -> ChildClassification {
    let mut out = ChildClassification::default();
    let frames: Vec<_> = children.iter().map(NodeSchema::effective_frame).collect();
    let overlap_tolerance = overlap_detection_tolerance(&frames);

    for (i, child) in children.iter().enumerate() {
        if child.hidden {
            out.hidden.push(i);
            continue;
        }
        if child.slot.as_deref().is_some_and(|s| !s.is_empty()) {
            out.slot.push(i);
            continue;
        }
        if child.frame.is_none() || has_absolute_position(child) {
            out.absolute.push(i);
            continue;
        }
        let overlaps_a_sibling = frames
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && geometry::significantly_overlaps(&frames[i], other, overlap_tolerance.significant));
        if overlaps_a_sibling {
            out.absolute.push(i);
        } else {
            out.normal.push(i);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{create_schema, CreateSchemaOptions, Frame, Props, StyleValue};

    fn node(left: f64, top: f64, width: f64, height: f64) -> NodeSchema {
        create_schema(
            "Box",
            CreateSchemaOptions { frame: Some(Frame::normalize(left, top, width, height)), ..Default::default() },
        )
    }

    #[test]
    fn partitions_are_disjoint_and_exhaustive() {
        let mut hidden = node(0.0, 0.0, 10.0, 10.0);
        hidden.hidden = true;
        let mut slotted = node(0.0, 0.0, 10.0, 10.0);
        slotted.slot = Some("header".to_string());
        let overlapping_a = node(0.0, 0.0, 100.0, 50.0);
        let overlapping_b = node(50.0, 0.0, 100.0, 50.0);
        let plain = node(300.0, 0.0, 80.0, 50.0);

        let children = vec![hidden, slotted, overlapping_a, overlapping_b, plain];
        let result = classify_children(&children);

        assert_eq!(result.hidden, vec![0]);
        assert_eq!(result.slot, vec![1]);
        assert_eq!(result.absolute, vec![2, 3]);
        assert_eq!(result.normal, vec![4]);

        let mut all: Vec<usize> =
            result.normal.iter().chain(&result.absolute).chain(&result.hidden).chain(&result.slot).cloned().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn missing_frame_is_classified_absolute() {
        let mut no_frame = create_schema("Box", CreateSchemaOptions::default());
        no_frame.frame = None;
        let children = vec![no_frame];
        let result = classify_children(&children);
        assert_eq!(result.absolute, vec![0]);
        assert!(result.normal.is_empty());
    }

    #[test]
    fn explicit_absolute_position_style_is_classified_absolute() {
        let mut n = node(0.0, 0.0, 80.0, 50.0);
        n.props = Props::default();
        n.props.style.insert("position".to_string(), StyleValue::from("absolute"));
        let children = vec![n];
        let result = classify_children(&children);
        assert_eq!(result.absolute, vec![0]);
    }

    #[test]
    fn non_overlapping_children_are_all_normal() {
        let children = vec![node(0.0, 0.0, 80.0, 50.0), node(100.0, 0.0, 80.0, 50.0), node(200.0, 0.0, 80.0, 50.0)];
        let result = classify_children(&children);
        assert_eq!(result.normal, vec![0, 1, 2]);
        assert!(result.absolute.is_empty());
    }
}
