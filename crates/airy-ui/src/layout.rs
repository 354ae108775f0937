//! Layout vocabulary attached to nodes.
//!
//! airy does not solve layout itself. These types describe the intent of each
//! node (sizes, spacing, direction) so that the host renderer can lay the tree
//! out with its own engine.

/// Size specification that can be fixed, filling, or derived from content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Size {
    /// Fixed size in logical pixels
    Logical(f32),
    /// Fill all remaining available space
    Fill,
    /// Size to the minimum that fits content, plus padding
    FitContent,
}

impl Size {
    /// Fixed size in logical pixels
    pub const fn lpx(pixels: f32) -> Self {
        Self::Logical(pixels)
    }

    /// Check if this size is Fill
    pub const fn is_fill(&self) -> bool {
        matches!(self, Size::Fill)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::FitContent
    }
}

/// Overflow policy for content/children that exceed the node's bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Content can render outside the node's bounds.
    #[default]
    Visible,
    /// Content is clipped to the node's bounds.
    Hidden,
}

/// Layout mode for arranging children
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    /// Children are arranged horizontally (left to right)
    Horizontal,
    /// Children are arranged vertically (top to bottom)
    #[default]
    Vertical,
    /// Children are stacked in the Z direction (overlapping)
    Stack,
}

/// 2D translation offset in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn x(x: f32) -> Self {
        Self { x, y: 0.0 }
    }
}

/// Spacing on the four sides of a node (padding or margin)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub top: Size,
    pub right: Size,
    pub bottom: Size,
    pub left: Size,
}

impl Spacing {
    pub const ZERO: Self = Self::all(Size::Logical(0.0));

    pub const fn all(value: Size) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(horizontal: Size, vertical: Size) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Only top and bottom spacing
    pub const fn vertical(value: Size) -> Self {
        Self::symmetric(Size::Logical(0.0), value)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::ZERO
    }
}
