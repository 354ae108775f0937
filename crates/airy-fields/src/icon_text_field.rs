//! Text field decorated with an icon beside the input

use crate::field::{impl_field_builders, FieldCore};
use crate::style::{IconPosition, IconStyle};
use airy_ui::{
    Component, Content, IconContent, IconRenderingMode, Layout, Node, NodeId, Size, Style,
    UiContext, VerticalAlign,
};

/// A [`TextField`](crate::TextField) with an icon before or after the input
///
/// Title and placeholder default to empty. The icon is always tinted with
/// `secondary_color`, even while the field has focus; title and underline
/// follow focus like they do on the plain field.
///
/// # Example
///
/// ```ignore
/// IconTextField::new(email.clone(), "mail")
///     .title("Email")
///     .placeholder("you@example.com")
///     .icon_position(IconPosition::Trailing)
///     .on_change(|value| email = value.to_string())
///     .node(&mut ctx)
/// ```
pub struct IconTextField<'a> {
    core: FieldCore<'a>,
    icon: String,
    icon_style: IconStyle,
}

impl<'a> IconTextField<'a> {
    /// Create a field showing `value` with the named icon
    pub fn new(value: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(String::new(), String::new(), value.into()),
            icon: icon.into(),
            icon_style: IconStyle::default(),
        }
    }

    /// Set the floating title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.core.title = title.into();
        self
    }

    /// Set the text shown while the value is empty
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.core.placeholder = placeholder.into();
        self
    }

    pub fn icon_rendering_mode(mut self, mode: IconRenderingMode) -> Self {
        self.icon_style.rendering_mode = mode;
        self
    }

    /// Edge length of the square the icon is drawn in
    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_style.size = size;
        self
    }

    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.icon_style.position = position;
        self
    }

    /// Gap between the icon and the input
    pub fn icon_spacing(mut self, spacing: f32) -> Self {
        self.icon_style.spacing = spacing;
        self
    }

    /// Replace the whole icon style
    pub fn with_icon_style(mut self, style: IconStyle) -> Self {
        self.icon_style = style;
        self
    }

    pub fn icon_style(&self) -> &IconStyle {
        &self.icon_style
    }

    fn icon_node(&self, id: &str) -> Node {
        let size = self.icon_style.size;
        Node::new()
            .with_id(NodeId::new(format!("{}_icon", id)))
            .with_width(Size::lpx(size))
            .with_height(Size::lpx(size))
            .with_style(Style::tint(self.core.style.secondary_color))
            .with_content(Content::Icon(
                IconContent::new(self.icon.clone())
                    .with_size(size)
                    .with_rendering_mode(self.icon_style.rendering_mode),
            ))
    }
}

impl_field_builders!(IconTextField);

impl Component for IconTextField<'_> {
    fn node(mut self, ctx: &mut UiContext) -> Node {
        let id = ctx.generate_id("icon_text_field");
        let frame = self.core.process(&id, ctx);

        let input = self.core.input_node(&id, &frame, ctx);
        let icon = self.icon_node(&id);
        let children = match self.icon_style.position {
            IconPosition::Leading => vec![icon, input],
            IconPosition::Trailing => vec![input, icon],
        };

        let row = Node::new()
            .with_id(NodeId::new(format!("{}_row", id)))
            .with_width(Size::Fill)
            .with_layout_direction(Layout::Horizontal)
            .with_gap(Size::lpx(self.icon_style.spacing))
            .with_v_align(VerticalAlign::Center)
            .with_children(children);

        self.core.column(&id, frame.focused, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::test_support::{click, escape, fill, finish, text_color};
    use crate::TextFieldStyle;
    use airy_ui::{css, HorizontalAlign};
    use proptest::prelude::*;

    fn build(field: IconTextField<'_>) -> Node {
        let mut ctx = UiContext::new();
        ctx.begin_frame();
        field.node(&mut ctx)
    }

    fn icon_of(root: &Node) -> &IconContent {
        root.find("icon_text_field_0_icon")
            .and_then(Node::content)
            .and_then(Content::as_icon)
            .expect("icon node")
    }

    #[test]
    fn test_defaults() {
        let field = IconTextField::new("", "mail");
        assert_eq!(field.icon_style(), &IconStyle::default());
        assert_eq!(field.style(), &TextFieldStyle::default());

        let root = build(field);
        let title = root.find("icon_text_field_0_title").and_then(Node::text);
        assert_eq!(title, Some(""));
        let text = root.find("icon_text_field_0_text").and_then(Node::text);
        assert_eq!(text, Some(""));
    }

    #[test]
    fn test_icon_leads_by_default() {
        let root = build(IconTextField::new("", "mail"));

        assert_eq!(
            root.child_ids(),
            vec![
                "icon_text_field_0_title",
                "icon_text_field_0_row",
                "icon_text_field_0_underline"
            ]
        );
        let row = root.find("icon_text_field_0_row").expect("row node");
        assert_eq!(
            row.child_ids(),
            vec!["icon_text_field_0_icon", "icon_text_field_0_input"]
        );
        assert_eq!(row.layout_direction(), Layout::Horizontal);
        assert_eq!(row.gap(), Size::lpx(5.0));
    }

    #[test]
    fn test_trailing_mail_scenario() {
        let root = build(
            IconTextField::new("", "mail")
                .icon_position(IconPosition::Trailing)
                .icon_size(20.0)
                .icon_spacing(8.0),
        );

        let row = root.find("icon_text_field_0_row").expect("row node");
        assert_eq!(
            row.child_ids(),
            vec!["icon_text_field_0_input", "icon_text_field_0_icon"]
        );
        assert_eq!(row.gap(), Size::lpx(8.0));

        let icon = icon_of(&root);
        assert_eq!(icon.name, "mail");
        assert_eq!(icon.size, 20.0);
        let icon_node = root.find("icon_text_field_0_icon").expect("icon node");
        assert_eq!(icon_node.width(), Size::lpx(20.0));
        assert_eq!(icon_node.height(), Size::lpx(20.0));
    }

    #[test]
    fn test_rendering_mode_reaches_icon() {
        let root = build(
            IconTextField::new("", "logo").icon_rendering_mode(IconRenderingMode::Original),
        );
        let icon = icon_of(&root);
        assert_eq!(icon.rendering_mode, IconRenderingMode::Original);
        assert_eq!(icon.effective_tint(), None);
    }

    #[test]
    fn test_icon_keeps_secondary_color_while_focused() {
        let mut ctx = UiContext::new();
        let field = || {
            IconTextField::new("me@x.com", "mail")
                .title("Email")
                .main_color(css::NAVY)
                .secondary_color(css::SILVER)
        };

        let mut root = field().node(&mut ctx);
        assert_eq!(icon_of(&root).color, css::SILVER);
        finish(&mut ctx, &mut root);

        click(&mut ctx, "icon_text_field_0_icon");
        let mut root = field().node(&mut ctx);
        assert!(ctx.is_focused("icon_text_field_0"));
        assert_eq!(icon_of(&root).color, css::SILVER);
        finish(&mut ctx, &mut root);
    }

    #[test]
    fn test_underline_follows_focus() {
        let mut ctx = UiContext::new();
        let field = || {
            IconTextField::new("me@x.com", "mail")
                .main_color(css::NAVY)
                .secondary_color(css::SILVER)
        };

        click(&mut ctx, "icon_text_field_0_hitbox");
        let mut root = field().node(&mut ctx);
        let underline = root.find("icon_text_field_0_underline").expect("underline");
        let title = root.find("icon_text_field_0_title").expect("title");
        assert_eq!(fill(underline), Some(css::NAVY));
        assert_eq!(text_color(title), Some(css::NAVY));
        finish(&mut ctx, &mut root);

        escape(&mut ctx);
        let mut root = field().node(&mut ctx);
        let underline = root.find("icon_text_field_0_underline").expect("underline");
        let title = root.find("icon_text_field_0_title").expect("title");
        assert_eq!(fill(underline), Some(css::SILVER));
        assert_eq!(text_color(title), Some(css::SILVER));
        finish(&mut ctx, &mut root);
    }

    #[test]
    fn test_alignment_and_uppercase_are_honored() {
        let root = build(
            IconTextField::new("ada", "person")
                .title("Name")
                .title_uppercased(true)
                .title_alignment(HorizontalAlign::Right)
                .text_alignment(HorizontalAlign::Center),
        );

        let title = root
            .find("icon_text_field_0_title")
            .and_then(Node::content)
            .and_then(Content::as_text)
            .expect("title text");
        assert_eq!(title.text, "NAME");
        assert_eq!(title.h_align, HorizontalAlign::Right);

        let text = root
            .find("icon_text_field_0_text")
            .and_then(Node::content)
            .and_then(Content::as_text)
            .expect("input text");
        assert_eq!(text.h_align, HorizontalAlign::Center);
    }

    #[test]
    fn test_icon_builders_touch_only_icon_style() {
        let field = IconTextField::new("", "mail").icon_spacing(12.0);
        assert_eq!(
            field.icon_style(),
            &IconStyle::default().with_spacing(12.0)
        );
        assert_eq!(field.style(), &TextFieldStyle::default());

        let once = IconTextField::new("", "mail").icon_size(24.0);
        let twice = IconTextField::new("", "mail").icon_size(24.0).icon_size(24.0);
        assert_eq!(once.icon_style(), twice.icon_style());
    }

    #[test]
    fn test_degenerate_inputs_pass_through() {
        for size in [0.0, -4.0] {
            let mut ctx = UiContext::new();
            let field = || {
                IconTextField::new("", "")
                    .icon_size(size)
                    .main_color(css::TEAL)
                    .secondary_color(css::TEAL)
            };

            click(&mut ctx, "icon_text_field_0_icon");
            let mut root = field().node(&mut ctx);
            assert!(ctx.is_focused("icon_text_field_0"));
            finish(&mut ctx, &mut root);

            let icon_node = root.find("icon_text_field_0_icon").expect("icon node");
            assert_eq!(icon_node.width(), Size::lpx(size));
            assert_eq!(icon_node.height(), Size::lpx(size));
            assert_eq!(icon_of(&root).size, size);
            assert_eq!(icon_of(&root).name, "");
            assert_eq!(icon_of(&root).color, css::TEAL);

            let underline = root.find("icon_text_field_0_underline").expect("underline");
            assert_eq!(fill(underline), Some(css::TEAL));
            let title = root.find("icon_text_field_0_title").and_then(Node::text);
            assert_eq!(title, Some(""));
            let text = root.find("icon_text_field_0_text").and_then(Node::text);
            assert_eq!(text, Some(""));
        }
    }

    proptest! {
        #[test]
        fn prop_icon_tint_ignores_focus(focused in any::<bool>(), trailing in any::<bool>()) {
            let mut ctx = UiContext::new();
            if focused {
                ctx.set_focus(Some("icon_text_field_0"));
            }
            ctx.begin_frame();

            let position = if trailing { IconPosition::Trailing } else { IconPosition::Leading };
            let root = IconTextField::new("x", "mail")
                .secondary_color(css::TEAL)
                .icon_position(position)
                .node(&mut ctx);

            prop_assert_eq!(icon_of(&root).color, css::TEAL);
            let row = root.find("icon_text_field_0_row").expect("row node");
            let icon_index = if trailing { 1 } else { 0 };
            prop_assert_eq!(row.child_ids()[icon_index], "icon_text_field_0_icon");
        }
    }
}
