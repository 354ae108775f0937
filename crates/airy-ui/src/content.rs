use crate::color::Color;

/// Font weight for text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    Thin,        // 100
    Light,       // 300
    #[default]
    Normal,      // 400
    Medium,      // 500
    SemiBold,    // 600
    Bold,        // 700
    Black,       // 900
    Custom(u16), // Exact weight for variable fonts
}

impl FontWeight {
    pub fn to_weight(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
            FontWeight::Custom(w) => w.clamp(100, 900),
        }
    }
}

/// Family class of a system font
///
/// The backend maps each design onto a concrete font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontDesign {
    #[default]
    Default,
    Rounded,
    Serif,
    Monospaced,
}

/// A font description: size, weight and design
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Size in logical pixels
    pub size: f32,
    pub weight: FontWeight,
    pub design: FontDesign,
}

impl Font {
    pub const fn system(size: f32, weight: FontWeight, design: FontDesign) -> Self {
        Self {
            size,
            weight,
            design,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_design(mut self, design: FontDesign) -> Self {
        self.design = design;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(16.0, FontWeight::Normal, FontDesign::Default)
    }
}

/// Content that can be displayed in a node
///
/// Content nodes are leaf nodes that cannot have children.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Text content with styling
    Text(TextContent),
    /// Named glyph/image resolved by the host's asset lookup
    Icon(IconContent),
}

impl Content {
    pub fn as_text(&self) -> Option<&TextContent> {
        match self {
            Content::Text(text) => Some(text),
            Content::Icon(_) => None,
        }
    }

    pub fn as_icon(&self) -> Option<&IconContent> {
        match self {
            Content::Icon(icon) => Some(icon),
            Content::Text(_) => None,
        }
    }
}

/// Text content configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    /// The text to display
    pub text: String,
    pub font: Font,
    /// Text color
    pub color: Color,
    /// Horizontal alignment within the node
    pub h_align: HorizontalAlign,
    /// Vertical alignment within the node
    pub v_align: VerticalAlign,
}

impl TextContent {
    /// Create new text content with default styling
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
            color: Color::rgb(1.0, 1.0, 1.0),
            h_align: HorizontalAlign::Left,
            v_align: VerticalAlign::Top,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set horizontal alignment
    pub fn with_h_align(mut self, align: HorizontalAlign) -> Self {
        self.h_align = align;
        self
    }

    /// Set vertical alignment
    pub fn with_v_align(mut self, align: VerticalAlign) -> Self {
        self.v_align = align;
        self
    }
}

/// How an icon's pixels are combined with its tint color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IconRenderingMode {
    /// Monochrome mask filled with the tint color
    #[default]
    Template,
    /// Original asset colors, tint ignored
    Original,
    /// Whatever the asset itself declares
    Automatic,
}

/// Icon content configuration
#[derive(Debug, Clone, PartialEq)]
pub struct IconContent {
    /// Asset name, resolved by the backend
    pub name: String,
    /// Edge length of the square the icon is fit into
    pub size: f32,
    /// Tint color, applied according to `rendering_mode`
    pub color: Color,
    pub rendering_mode: IconRenderingMode,
}

impl IconContent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 16.0,
            color: Color::rgb(1.0, 1.0, 1.0),
            rendering_mode: IconRenderingMode::Template,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_rendering_mode(mut self, mode: IconRenderingMode) -> Self {
        self.rendering_mode = mode;
        self
    }

    /// The color the backend should tint with, if any
    ///
    /// `Automatic` hands the decision to the backend, which gets the tint and
    /// may ignore it for multicolor assets.
    pub fn effective_tint(&self) -> Option<Color> {
        match self.rendering_mode {
            IconRenderingMode::Template | IconRenderingMode::Automatic => Some(self.color),
            IconRenderingMode::Original => None,
        }
    }
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_weight_is_clamped() {
        assert_eq!(FontWeight::Custom(50).to_weight(), 100);
        assert_eq!(FontWeight::Custom(1000).to_weight(), 900);
        assert_eq!(FontWeight::Bold.to_weight(), 700);
    }

    #[test]
    fn test_original_icons_ignore_tint() {
        let icon = IconContent::new("mail").with_color(Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(icon.effective_tint(), Some(Color::rgb(1.0, 0.0, 0.0)));

        let icon = icon.with_rendering_mode(IconRenderingMode::Original);
        assert_eq!(icon.effective_tint(), None);
    }

    #[test]
    fn test_content_accessors() {
        let text = Content::Text(TextContent::new("hi"));
        assert_eq!(text.as_text().map(|t| t.text.as_str()), Some("hi"));
        assert!(text.as_icon().is_none());
    }
}
