//! Component trait for building reusable UI widgets
//!
//! Components encapsulate the logic for turning a small amount of caller data
//! (a value, a title, a few style options) into a subtree of nodes.
//!
//! # Example
//!
//! ```ignore
//! use airy_ui::{Component, Content, Node, NodeId, TextContent, UiContext};
//!
//! struct Caption {
//!     text: String,
//! }
//!
//! impl Component for Caption {
//!     fn node(self, ctx: &mut UiContext) -> Node {
//!         let id = ctx.generate_id("caption");
//!         Node::new()
//!             .with_id(NodeId::new(id))
//!             .with_content(Content::Text(TextContent::new(self.text)))
//!     }
//! }
//! ```

use crate::{Node, UiContext};

/// A component that can be rendered as a UI node
///
/// `node` takes `self` by value: components are created inline, configured
/// through a builder chain, and consumed once they have produced their node.
pub trait Component {
    /// Build the node tree for this component
    fn node(self, ctx: &mut UiContext) -> Node;
}
