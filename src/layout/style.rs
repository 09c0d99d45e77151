//! Style synthesizer: turns a layout decision into a CSS-equivalent flex style
//! bag (§4.8), and the `alignment-to-CSS` mapping table §6 exposes on its own.

use crate::layout::alignment::{analyze_alignment, AlignmentAnalysis};
use crate::layout::classifier::classify_children;
use crate::layout::geometry;
use crate::layout::resolver::{determine_layout_type, Padding};
use crate::layout::tolerance::ToleranceConfig;
use crate::schema::{strip_frame_keys, AlignHorizontal, AlignVertical, Frame, LayoutType, NodeSchema, Resize, StyleProps, StyleValue};

/// `justifyContent`/`alignItems`, already mapped to their CSS keyword strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CssAlignment {
    pub justify_content: Option<String>,
    pub align_items: Option<String>,
}

fn horizontal_to_css(class: AlignHorizontal) -> &'static str {
    match class {
        AlignHorizontal::Left => "flex-start",
        AlignHorizontal::Right => "flex-end",
        AlignHorizontal::Center => "center",
        AlignHorizontal::SpaceBetween => "space-between",
        AlignHorizontal::SpaceEvenly => "space-evenly",
        // No exact CSS keyword for `justify`; space-between is the closest
        // visual approximation and what most design tools fall back to.
        AlignHorizontal::Justify => "space-between",
    }
}

fn vertical_to_css(class: AlignVertical) -> &'static str {
    match class {
        AlignVertical::Top => "flex-start",
        AlignVertical::Bottom => "flex-end",
        AlignVertical::Middle => "center",
        AlignVertical::Stretch => "stretch",
    }
}

/// Map §4.7's alignment classes to CSS `justifyContent`/`alignItems`, given
/// which axis is main (the flex direction) (§6).
pub fn alignment_to_css(align_horizontal: Option<AlignHorizontal>, align_vertical: Option<AlignVertical>, direction: LayoutType) -> CssAlignment {
    match direction {
        LayoutType::Column => CssAlignment {
            justify_content: align_vertical.map(vertical_to_css).map(str::to_string),
            align_items: align_horizontal.map(horizontal_to_css).map(str::to_string),
        },
        // `mix`'s top-level direction is whichever axis won (§4.6); treat it
        // like `row` for the purpose of main/cross assignment at this level.
        LayoutType::Row | LayoutType::Mix => CssAlignment {
            justify_content: align_horizontal.map(horizontal_to_css).map(str::to_string),
            align_items: align_vertical.map(vertical_to_css).map(str::to_string),
        },
    }
}

/// Build the flex style bag from an already-computed decision (§4.8). Used
/// directly by the driver, which has these values in hand from the resolver
/// and analyzer without needing to recompute them.
pub fn synthesize_style(
    layout_type: LayoutType,
    alignment: &AlignmentAnalysis,
    gap: f64,
    padding: Padding,
    frame: Frame,
    resize: Resize,
) -> StyleProps {
    let mut style = StyleProps::new();
    style.insert("display".to_string(), StyleValue::from("flex"));
    let direction = match layout_type {
        LayoutType::Row | LayoutType::Mix => "row",
        LayoutType::Column => "column",
    };
    style.insert("flexDirection".to_string(), StyleValue::from(direction));

    if gap > 0.0 {
        style.insert("gap".to_string(), StyleValue::Number(gap));
    }
    if padding.top > 0.0 {
        style.insert("paddingTop".to_string(), StyleValue::Number(padding.top));
    }
    if padding.right > 0.0 {
        style.insert("paddingRight".to_string(), StyleValue::Number(padding.right));
    }
    if padding.bottom > 0.0 {
        style.insert("paddingBottom".to_string(), StyleValue::Number(padding.bottom));
    }
    if padding.left > 0.0 {
        style.insert("paddingLeft".to_string(), StyleValue::Number(padding.left));
    }

    let css = alignment_to_css(alignment.align_horizontal, alignment.align_vertical, layout_type);
    if let Some(jc) = css.justify_content {
        style.insert("justifyContent".to_string(), StyleValue::from(jc.as_str()));
    }
    if let Some(ai) = css.align_items {
        style.insert("alignItems".to_string(), StyleValue::from(ai.as_str()));
    }

    if resize.width != Some(crate::schema::ResizeMode::Fill) && frame.width > 0.0 {
        style.insert("width".to_string(), StyleValue::Number(frame.width));
    }
    if resize.height != Some(crate::schema::ResizeMode::Fill) && frame.height > 0.0 {
        style.insert("height".to_string(), StyleValue::Number(frame.height));
    }

    strip_frame_keys(&mut style);
    style
}

/// Standalone convenience wrapper (§6): given an annotated node, recompute the
/// layout decision and alignment from its own frame and children, and emit the
/// corresponding style. Prefer the driver's internal path when the decision is
/// already in hand — this recomputes it from scratch.
pub fn generate_flex_style(node: &NodeSchema) -> StyleProps {
    let Some(parent_frame) = node.frame else {
        return StyleProps::new();
    };
    let classification = classify_children(&node.children);
    let normal_frames: Vec<Frame> = classification.normal.iter().map(|&i| node.children[i].effective_frame()).collect();

    let cfg = ToleranceConfig::default();
    let decision = determine_layout_type(parent_frame, &normal_frames, &cfg);
    let Some(layout_type) = decision.layout_type else {
        return StyleProps::new();
    };

    let group_boxes: Vec<Frame> =
        decision.groups.iter().filter_map(|group| geometry::bounding_box(&group.iter().map(|&i| normal_frames[i]).collect::<Vec<_>>())).collect();
    let alignment = analyze_alignment(parent_frame, &group_boxes, &cfg);
    let resize = node.x_layout.as_ref().map(|x| x.resize).unwrap_or_default();

    synthesize_style(layout_type, &alignment, decision.gap, decision.padding, parent_frame, resize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::alignment::AlignmentAnalysis;

    #[test]
    fn simple_row_style_matches_s1() {
        let alignment = AlignmentAnalysis {
            align_horizontal: Some(AlignHorizontal::Left),
            align_vertical: None,
            horizontal_confidence: 1.0,
            vertical_confidence: 0.0,
        };
        let padding = Padding { top: 25.0, right: 10.0, bottom: 25.0, left: 10.0 };
        let frame = Frame::normalize(0.0, 0.0, 300.0, 100.0);
        let style = synthesize_style(LayoutType::Row, &alignment, 20.0, padding, frame, Resize::default());

        assert_eq!(style.get("display"), Some(&StyleValue::from("flex")));
        assert_eq!(style.get("flexDirection"), Some(&StyleValue::from("row")));
        assert_eq!(style.get("gap"), Some(&StyleValue::Number(20.0)));
        assert_eq!(style.get("paddingTop"), Some(&StyleValue::Number(25.0)));
        assert_eq!(style.get("justifyContent"), Some(&StyleValue::from("flex-start")));
        assert!(!style.contains_key("left"));
    }

    #[test]
    fn zero_gap_and_padding_are_omitted() {
        let alignment = AlignmentAnalysis::default();
        let frame = Frame::normalize(0.0, 0.0, 100.0, 100.0);
        let style = synthesize_style(LayoutType::Column, &alignment, 0.0, Padding::default(), frame, Resize::default());
        assert!(!style.contains_key("gap"));
        assert!(!style.contains_key("paddingTop"));
    }

    #[test]
    fn fill_resize_omits_the_matching_dimension() {
        let alignment = AlignmentAnalysis::default();
        let frame = Frame::normalize(0.0, 0.0, 100.0, 50.0);
        let resize = Resize { width: Some(crate::schema::ResizeMode::Fill), height: None };
        let style = synthesize_style(LayoutType::Row, &alignment, 0.0, Padding::default(), frame, resize);
        assert!(!style.contains_key("width"));
        assert_eq!(style.get("height"), Some(&StyleValue::Number(50.0)));
    }
}
