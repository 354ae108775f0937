//! Styling shared by the text field components

use airy_macros::WithBuilders;
use airy_ui::{
    css, Color, Font, FontDesign, FontWeight, HorizontalAlign, IconRenderingMode,
};
use std::time::Duration;

/// Caret styling for the editable part of a field
#[derive(Debug, Clone, PartialEq, WithBuilders)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct CursorStyle {
    /// Caret color (if None, uses the main color)
    pub color: Option<Color>,
    /// Caret width
    pub thickness: f32,
    /// Time between blinks
    pub blink_interval: Duration,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            color: None,
            thickness: 2.0,
            blink_interval: Duration::from_millis(530),
        }
    }
}

/// Visual styling for [`TextField`](crate::TextField) and
/// [`IconTextField`](crate::IconTextField)
///
/// Focus decides between the two colors: the title and the underline use
/// `main_color` while the field is focused and `secondary_color` otherwise.
/// Typed text is always drawn in `main_color`, the placeholder in
/// `secondary_color`.
#[derive(Debug, Clone, PartialEq, WithBuilders)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct TextFieldStyle {
    /// Font of the floating title
    pub title_font: Font,
    /// Font of the editable text
    pub font: Font,
    /// Thickness of the underline
    pub line_height: f32,
    pub main_color: Color,
    pub secondary_color: Color,
    /// Alignment of the editable text
    pub text_alignment: HorizontalAlign,
    /// Alignment of the floating title
    pub title_alignment: HorizontalAlign,
    /// Render the title in upper case
    pub title_uppercased: bool,
    /// Vertical padding around the editable text
    pub input_padding: f32,
    /// Selection highlight color
    pub selection_color: Color,
    pub cursor: CursorStyle,
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self {
            title_font: Font::system(12.0, FontWeight::Bold, FontDesign::Rounded),
            font: Font::system(16.0, FontWeight::Bold, FontDesign::Rounded),
            line_height: 1.0,
            main_color: css::BLACK,
            secondary_color: css::GRAY,
            text_alignment: HorizontalAlign::Left,
            title_alignment: HorizontalAlign::Left,
            title_uppercased: false,
            input_padding: 4.0,
            selection_color: css::BLUE.with_alpha(0.25),
            cursor: CursorStyle::default(),
        }
    }
}

impl TextFieldStyle {
    /// Color of the title for the given focus state
    pub fn title_color(&self, focused: bool) -> Color {
        self.focus_color(focused)
    }

    /// Color of the underline for the given focus state
    pub fn underline_color(&self, focused: bool) -> Color {
        self.focus_color(focused)
    }

    /// Color of the editable text, or of the placeholder while `text` is empty
    pub fn text_color(&self, text: &str) -> Color {
        if text.is_empty() {
            self.secondary_color
        } else {
            self.main_color
        }
    }

    pub fn cursor_color(&self) -> Color {
        self.cursor.color.unwrap_or(self.main_color)
    }

    /// The label shown above the input
    ///
    /// Empty while `text` is empty so the label keeps its height without
    /// competing with the placeholder.
    pub fn display_title(&self, title: &str, text: &str) -> String {
        if text.is_empty() {
            String::new()
        } else if self.title_uppercased {
            title.to_uppercase()
        } else {
            title.to_string()
        }
    }

    fn focus_color(&self, focused: bool) -> Color {
        if focused {
            self.main_color
        } else {
            self.secondary_color
        }
    }
}

/// Which side of the input an icon sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IconPosition {
    #[default]
    Leading,
    Trailing,
}

/// Icon styling for [`IconTextField`](crate::IconTextField)
///
/// The icon is tinted with the field's `secondary_color` whatever the focus
/// state.
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct IconStyle {
    /// Edge length of the square the icon is drawn in
    pub size: f32,
    pub rendering_mode: IconRenderingMode,
    pub position: IconPosition,
    /// Gap between the icon and the input
    pub spacing: f32,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            rendering_mode: IconRenderingMode::Template,
            position: IconPosition::Leading,
            spacing: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = TextFieldStyle::default();
        assert_eq!(style.title_font.size, 12.0);
        assert_eq!(style.title_font.weight, FontWeight::Bold);
        assert_eq!(style.font.size, 16.0);
        assert_eq!(style.font.design, FontDesign::Rounded);
        assert_eq!(style.line_height, 1.0);
        assert_eq!(style.main_color, css::BLACK);
        assert_eq!(style.secondary_color, css::GRAY);
        assert_eq!(style.text_alignment, HorizontalAlign::Left);
        assert_eq!(style.title_alignment, HorizontalAlign::Left);
        assert!(!style.title_uppercased);

        let icon = IconStyle::default();
        assert_eq!(icon.size, 16.0);
        assert_eq!(icon.rendering_mode, IconRenderingMode::Template);
        assert_eq!(icon.position, IconPosition::Leading);
        assert_eq!(icon.spacing, 5.0);
    }

    #[test]
    fn test_focus_colors() {
        let style = TextFieldStyle::default()
            .with_main_color(css::NAVY)
            .with_secondary_color(css::SILVER);

        assert_eq!(style.title_color(true), css::NAVY);
        assert_eq!(style.title_color(false), css::SILVER);
        assert_eq!(style.underline_color(true), css::NAVY);
        assert_eq!(style.underline_color(false), css::SILVER);
    }

    #[test]
    fn test_placeholder_uses_secondary_color() {
        let style = TextFieldStyle::default();
        assert_eq!(style.text_color(""), css::GRAY);
        assert_eq!(style.text_color("a"), css::BLACK);
    }

    #[test]
    fn test_display_title() {
        let style = TextFieldStyle::default();
        assert_eq!(style.display_title("Email", ""), "");
        assert_eq!(style.display_title("Email", "you@x.com"), "Email");

        let style = style.with_title_uppercased(true);
        assert_eq!(style.display_title("Email", "you@x.com"), "EMAIL");
        assert_eq!(style.display_title("Email", ""), "");
    }

    #[test]
    fn test_cursor_color_falls_back_to_main() {
        let style = TextFieldStyle::default().with_main_color(css::TEAL);
        assert_eq!(style.cursor_color(), css::TEAL);

        let style = style.with_cursor(CursorStyle::default().with_color(Some(css::RED)));
        assert_eq!(style.cursor_color(), css::RED);
    }
}
