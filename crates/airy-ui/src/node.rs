use crate::color::Color;
use crate::content::{Content, HorizontalAlign, VerticalAlign};
use crate::layout::{Layout, Overflow, Size, Spacing, Translation};
use crate::style::Style;
use crate::transition::Transition;

/// Unique identifier for a node, used for event routing and style tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for NodeId {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

/// A UI node that can contain content and/or children
///
/// Nodes can be either:
/// - Container nodes: Have children and an optional background
/// - Content nodes: Have content (text, icon) and cannot have children
///
/// All fields are private - use the builder pattern methods (`with_*`) to configure nodes.
/// The tree only describes intent; sizing and painting belong to the host backend.
#[derive(Debug, Clone)]
pub struct Node {
    /// Optional identifier (used for event routing and transitions)
    id: Option<NodeId>,
    /// Width of the node
    width: Size,
    /// Height of the node
    height: Size,
    /// Translation from the laid out position
    translation: Translation,
    /// Padding inside the node
    padding: Spacing,
    /// Gap between children in the layout direction
    gap: Size,
    /// Layout mode for children
    layout_direction: Layout,
    /// Horizontal alignment of children within this container
    h_align: HorizontalAlign,
    /// Vertical alignment of children within this container
    v_align: VerticalAlign,
    /// How overflow of content/children is handled
    overflow: Overflow,
    /// Opacity of this node and all its children
    opacity: Option<f32>,
    /// Background fill painted behind content and children
    background: Option<Color>,
    /// Optional content - content nodes cannot have children
    content: Option<Content>,
    /// Child nodes (not allowed if content is Some)
    children: Vec<Node>,
    /// Base style (always applied)
    base_style: Option<Style>,
    /// Transition configuration for style changes
    transition: Option<Transition>,
}

impl Node {
    /// Create a new node with default settings
    pub fn new() -> Self {
        Self {
            id: None,
            width: Size::default(),
            height: Size::default(),
            translation: Translation::ZERO,
            padding: Spacing::ZERO,
            gap: Size::Logical(0.0),
            layout_direction: Layout::default(),
            h_align: HorizontalAlign::Left,
            v_align: VerticalAlign::Top,
            overflow: Overflow::default(),
            opacity: None,
            background: None,
            content: None,
            children: Vec::new(),
            base_style: None,
            transition: None,
        }
    }

    /// Set the node ID
    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the width
    pub fn with_width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    /// Set the height
    pub fn with_height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    /// Set the translation (post-layout offset)
    pub fn with_translation(mut self, translation: Translation) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap(mut self, gap: Size) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_layout_direction(mut self, direction: Layout) -> Self {
        self.layout_direction = direction;
        self
    }

    pub fn with_h_align(mut self, align: HorizontalAlign) -> Self {
        self.h_align = align;
        self
    }

    pub fn with_v_align(mut self, align: VerticalAlign) -> Self {
        self.v_align = align;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the content (makes this a content node that cannot have children)
    pub fn with_content(mut self, content: Content) -> Self {
        debug_assert!(
            self.children.is_empty(),
            "Cannot set content on a node that already has children"
        );
        self.content = Some(content);
        // Style may have been set first; make sure it reaches the content too
        if let Some(style) = self.base_style {
            style.apply_to_node(&mut self);
        }
        self
    }

    /// Set the base style and apply it immediately
    pub fn with_style(mut self, style: Style) -> Self {
        style.apply_to_node(&mut self);
        self.base_style = Some(style);
        self
    }

    /// Set the transition configuration for style changes
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Add a child node
    pub fn with_child(mut self, child: Node) -> Self {
        debug_assert!(
            self.content.is_none(),
            "Cannot add children to a content node"
        );
        self.children.push(child);
        self
    }

    /// Add multiple children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        debug_assert!(
            self.content.is_none(),
            "Cannot add children to a content node"
        );
        self.children.extend(children);
        self
    }

    // ========== Getters ==========

    /// Get the node ID, if set
    pub fn id(&self) -> Option<&NodeId> {
        self.id.as_ref()
    }

    pub fn width(&self) -> Size {
        self.width
    }

    pub fn height(&self) -> Size {
        self.height
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    /// Get the gap between children
    pub fn gap(&self) -> Size {
        self.gap
    }

    /// Get the layout mode
    pub fn layout_direction(&self) -> Layout {
        self.layout_direction
    }

    pub fn h_align(&self) -> HorizontalAlign {
        self.h_align
    }

    pub fn v_align(&self) -> VerticalAlign {
        self.v_align
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Effective opacity (1.0 when unset)
    pub fn opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut Content> {
        self.content.as_mut()
    }

    /// Get the children
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get the base style
    pub fn base_style(&self) -> Option<&Style> {
        self.base_style.as_ref()
    }

    /// Get the transition configuration
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    // ========== Setters used by the style system ==========

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = Some(opacity);
    }

    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    // ========== Traversal ==========

    /// Find a node by id in this subtree (depth-first, self included)
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_ref().is_some_and(|own| own.as_str() == id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Ids of the direct children, in order (children without an id are skipped)
    pub fn child_ids(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|child| child.id().map(NodeId::as_str))
            .collect()
    }

    /// Visit every node in this subtree, parents before children
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// Text of this node's content, if it is a text node
    pub fn text(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(Content::as_text)
            .map(|text| text.text.as_str())
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
