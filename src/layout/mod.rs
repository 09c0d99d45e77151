//! Layout inference: turns an absolutely-positioned `NodeSchema` tree into one
//! annotated with flex-equivalent layout (row/column/mix, gap, padding,
//! alignment).
//!
//! Submodules mirror the pipeline each container runs through, bottom-up:
//! - `geometry` / `tolerance`: shared primitives (§4.1, §4.2).
//! - `strategies` / `executor`: the four split strategies and their scorer (§4.3, §4.4).
//! - `classifier`: partitions children before splitting (§4.5).
//! - `resolver`: decides row/column/mix from the winning split (§4.6).
//! - `alignment`: classifies how groups sit in the parent (§4.7).
//! - `style`: synthesizes the CSS-equivalent style bag (§4.8).
//! - `driver`: the post-order traversal tying it all together (§4.9).

pub mod alignment;
pub mod classifier;
pub mod driver;
pub mod executor;
pub mod geometry;
pub mod resolver;
pub mod strategies;
pub mod style;
pub mod tolerance;

pub use driver::layout_parser;
