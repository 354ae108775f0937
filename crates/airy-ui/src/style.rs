use crate::color::Color;
use crate::content::Content;
use crate::node::Node;

/// Visual style properties that can be transitioned
///
/// All fields are `Option<T>` to allow partial styles that only override specific properties.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    /// Background fill color
    pub fill_color: Option<Color>,

    /// Node opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: Option<f32>,

    /// Text color (for text content)
    pub text_color: Option<Color>,

    /// Tint color (for icon content)
    pub tint_color: Option<Color>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style with only fill color
    pub fn fill(color: Color) -> Self {
        Self {
            fill_color: Some(color),
            ..Default::default()
        }
    }

    /// Create a style with only text color
    pub fn text(color: Color) -> Self {
        Self {
            text_color: Some(color),
            ..Default::default()
        }
    }

    /// Create a style with only tint color
    pub fn tint(color: Color) -> Self {
        Self {
            tint_color: Some(color),
            ..Default::default()
        }
    }

    /// Write this style into a node's visual properties
    ///
    /// Used when a transition produces an interpolated style for a frame.
    pub fn apply_to_node(&self, node: &mut Node) {
        if let Some(opacity) = self.opacity {
            node.set_opacity(opacity);
        }

        if let Some(color) = self.fill_color {
            node.set_background(Some(color));
        }

        match node.content_mut() {
            Some(Content::Text(text)) => {
                if let Some(color) = self.text_color {
                    text.color = color;
                }
            }
            Some(Content::Icon(icon)) => {
                if let Some(color) = self.tint_color {
                    icon.color = color;
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IconContent, TextContent};

    #[test]
    fn test_tint_leaves_text_alone() {
        let mut icon = Node::new().with_content(Content::Icon(IconContent::new("mail")));
        let mut text = Node::new().with_content(Content::Text(TextContent::new("x")));
        let style = Style::tint(Color::rgb(0.0, 1.0, 0.0));
        style.apply_to_node(&mut icon);
        style.apply_to_node(&mut text);

        let tint = icon.content().and_then(Content::as_icon).map(|i| i.color);
        assert_eq!(tint, Some(Color::rgb(0.0, 1.0, 0.0)));
        let color = text.content().and_then(Content::as_text).map(|t| t.color);
        assert_eq!(color, Some(TextContent::new("x").color));
    }

    #[test]
    fn test_apply_to_text_node() {
        let mut node = Node::new().with_content(Content::Text(TextContent::new("x")));
        Style::text(Color::rgb(0.0, 0.0, 1.0)).apply_to_node(&mut node);

        let color = node.content().and_then(Content::as_text).map(|t| t.color);
        assert_eq!(color, Some(Color::rgb(0.0, 0.0, 1.0)));
    }
}
