//! The data model a JSX-to-schema converter (or any other collaborator) hands us:
//! an absolutely-positioned tree of `NodeSchema`, annotated in place by
//! [`crate::layout::driver::layout_parser`].

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Absolute rectangle plus its cached right/bottom edges.
///
/// Always constructed through [`Frame::normalize`] so `right == left + width` and
/// `bottom == top + height` hold exactly (§8 invariant 7) for the lifetime of the
/// value — there is no public constructor that skips normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Frame {
    /// Build a normalized `Frame` from possibly-partial, possibly-invalid input.
    /// Non-finite or negative dimensions are clamped to 0 rather than rejected (§7).
    pub fn normalize(left: f64, top: f64, width: f64, height: f64) -> Self {
        let left = if left.is_finite() { left } else { 0.0 };
        let top = if top.is_finite() { top } else { 0.0 };
        let width = if width.is_finite() && width > 0.0 { width } else { 0.0 };
        let height = if height.is_finite() && height > 0.0 { height } else { 0.0 };
        Frame { left, top, width, height, right: left + width, bottom: top + height }
    }

    pub fn zero() -> Self {
        Frame::normalize(0.0, 0.0, 0.0, 0.0)
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Diagonal length, used to scale overlap-detection tolerance in
    /// [`crate::layout::tolerance::overlap_detection_tolerance`].
    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

/// A leaf value in the style bag: either a CSS-style string (`"flex"`) or a bare
/// number (`20` for a gap/padding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    String(String),
    Number(f64),
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

/// A CSS-property-name → value map. `BTreeMap` keeps serialized output
/// deterministic, matching §8 invariant 3 (determinism) down to byte-for-byte JSON.
pub type StyleProps = BTreeMap<String, StyleValue>;

/// Frame-related keys stripped from any style bag before it is stored, so a
/// synthesized flex layout never contradicts leftover absolute-positioning keys (§4.8).
pub const FRAME_STYLE_KEYS: &[&str] = &["left", "top", "right", "bottom", "width", "height"];

pub fn strip_frame_keys(style: &mut StyleProps) {
    for key in FRAME_STYLE_KEYS {
        style.remove(*key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignHorizontal {
    Left,
    Center,
    Right,
    Justify,
    SpaceBetween,
    SpaceEvenly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignVertical {
    Top,
    Middle,
    Bottom,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    Fill,
    Fit,
    Fix,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resize {
    pub width: Option<ResizeMode>,
    pub height: Option<ResizeMode>,
}

/// The engine's extended layout annotation. Any field may be absent when
/// confidence was too low to assert it (§4.7).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_horizontal: Option<AlignHorizontal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_vertical: Option<AlignVertical>,
    #[serde(skip_serializing_if = "Resize::is_empty")]
    pub resize: Resize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<bool>,
}

impl Resize {
    fn is_empty(resize: &Resize) -> bool {
        resize.width.is_none() && resize.height.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Row,
    Column,
    Mix,
}

/// The `props` bag carried on every node: arbitrary collaborator-supplied data plus
/// the `style` sub-map the engine reads from and writes into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    #[serde(default, skip_serializing_if = "StyleProps::is_empty")]
    pub style: StyleProps,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A node in the absolutely-positioned input tree, and the same node annotated
/// with inferred layout on output (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSchema {
    pub component_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSchema>,
    #[serde(default, skip_serializing_if = "is_default_props")]
    pub props: Props,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,

    // Output-only fields, populated by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<LayoutType>,
    #[serde(rename = "x-layout", skip_serializing_if = "Option::is_none")]
    pub x_layout: Option<XLayout>,
}

fn is_default_props(props: &Props) -> bool {
    props.style.is_empty() && props.extra.is_empty()
}

/// Options accepted by [`create_schema`].
#[derive(Debug, Clone, Default)]
pub struct CreateSchemaOptions {
    pub frame: Option<Frame>,
    pub props: Props,
    pub children: Vec<NodeSchema>,
    pub id: Option<String>,
}

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Base36-encode a counter value into a short, dense suffix.
fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ascii")
}

/// Generate a short, process-unique id: `{lowercase componentName}-{base36 counter}`.
///
/// Uses a monotonic counter rather than a random/uuid source (§2.1): the engine's
/// determinism guarantee (§5, §8 invariant 3) only needs ids to be unique within a
/// single tree, not globally or cryptographically, and a counter keeps two runs on
/// structurally equal trees producing byte-identical output.
fn generate_id(component_name: &str) -> String {
    let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", component_name.to_lowercase(), base36(n))
}

/// Construct a new node, generating an id when one isn't supplied (§6).
pub fn create_schema(component_name: &str, opts: CreateSchemaOptions) -> NodeSchema {
    let id = opts.id.unwrap_or_else(|| generate_id(component_name));
    NodeSchema {
        component_name: component_name.to_string(),
        id: Some(id),
        frame: opts.frame,
        children: opts.children,
        props: opts.props,
        hidden: false,
        slot: None,
        layout_type: None,
        x_layout: None,
    }
}

impl NodeSchema {
    /// Fill in `right`/`bottom` on this node's frame if present, normalizing any
    /// non-finite or negative dimensions to 0 (§7, §9).
    pub fn normalize_frame(&mut self) {
        if let Some(f) = self.frame {
            self.frame = Some(Frame::normalize(f.left, f.top, f.width, f.height));
        }
    }

    /// The frame to use for geometric reasoning: the node's own frame, or a
    /// zero-size frame at the origin when absent (§7).
    pub fn effective_frame(&self) -> Frame {
        self.frame.unwrap_or_else(Frame::zero)
    }
}
