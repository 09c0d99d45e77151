//! Infers flex-equivalent layout (row/column/mix, gap, padding, alignment) for
//! a tree of absolutely-positioned UI nodes.
//!
//! The primary entry point is [`layout_parser`]; [`wasm::infer_layout_json`]
//! wraps it for the WASM/JSON boundary (§6).

pub mod layout;
pub mod schema;
pub mod wasm;

pub use layout::layout_parser;
pub use schema::{create_schema, CreateSchemaOptions, Frame, NodeSchema};
