//! Behaviour shared by the plain and the icon text field
//!
//! A field is built as a vertical column:
//!
//! ```text
//! <id>                      vertical
//! ├── <id>_title            floating title
//! ├── <id>_input            stack: selection, <id>_text, <id>_cursor, <id>_hitbox
//! │   (or <id>_row          horizontal: <id>_icon and <id>_input)
//! └── <id>_underline
//! ```

use crate::editor;
use crate::style::TextFieldStyle;
use airy_ui::{
    Content, HorizontalAlign, InteractionEvent, Layout, MeasureTextRequest, MouseButton,
    NamedKey, Node, NodeId, Overflow, Size, Spacing, Style, TextContent, TextEditState,
    Transition, Translation, UiContext, VerticalAlign,
};

/// Suffixes of the nodes that take focus when clicked
const FOCUS_TARGETS: &[&str] = &["", "_row", "_input", "_text", "_hitbox", "_icon"];

/// Value, labels, style and callbacks of a field being built
pub(crate) struct FieldCore<'a> {
    pub title: String,
    pub placeholder: String,
    pub value: String,
    pub style: TextFieldStyle,
    pub on_change: Option<Box<dyn FnMut(&str) + 'a>>,
    pub on_focus_change: Option<Box<dyn FnMut(bool) + 'a>>,
    pub on_submit: Option<Box<dyn FnMut(&str) + 'a>>,
}

/// Result of processing one frame of input for a field
#[derive(Debug, Clone)]
pub(crate) struct FieldFrame {
    pub focused: bool,
    pub edit: TextEditState,
    pub cursor_visible: bool,
}

impl<'a> FieldCore<'a> {
    pub fn new(title: String, placeholder: String, value: String) -> Self {
        Self {
            title,
            placeholder,
            value,
            style: TextFieldStyle::default(),
            on_change: None,
            on_focus_change: None,
            on_submit: None,
        }
    }

    /// Handle focus, blur and keystrokes for this frame
    ///
    /// Edits land in `self.value` and are reported through the callbacks
    /// before any node is built, so the tree shows the edited value.
    pub fn process(&mut self, id: &str, ctx: &mut UiContext) -> FieldFrame {
        let clicked = ctx.events().iter().any(|event| {
            matches!(event.event, InteractionEvent::Click { .. })
                && is_focus_target(id, event.target.as_str())
        });

        let input = ctx.input().clone();
        if clicked {
            ctx.set_focus(Some(id));
        } else if ctx.is_focused(id) {
            let escape_pressed = input.is_named_key_just_pressed(NamedKey::Escape);
            let clicked_outside = input.is_button_just_pressed(MouseButton::Left);
            if escape_pressed || clicked_outside {
                ctx.set_focus(None);
            }
        }
        let focused = ctx.is_focused(id);

        let mut edit = ctx.memory().text_edit(id).clone();
        edit.clamp_to(&self.value);

        if edit.focused != focused {
            edit.focused = focused;
            if focused {
                edit.cursor_pos = self.value.len();
            } else {
                edit.clear_selection();
            }
            log::debug!("{} focus changed to {}", id, focused);
            if let Some(on_focus_change) = self.on_focus_change.as_mut() {
                on_focus_change(focused);
            }
        }

        if focused {
            let outcome = editor::apply_input(&mut self.value, &mut edit, &input);
            if outcome.changed || outcome.moved {
                ctx.reset_cursor_blink(id);
            }
            if outcome.changed {
                log::trace!("{} value changed ({} bytes)", id, self.value.len());
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&self.value);
                }
            }
            if outcome.submitted {
                log::debug!("{} submitted", id);
                if let Some(on_submit) = self.on_submit.as_mut() {
                    on_submit(&self.value);
                }
            }
        }

        *ctx.memory().text_edit(id) = edit.clone();

        let cursor_visible =
            focused && ctx.update_cursor_blink(id, self.style.cursor.blink_interval);

        FieldFrame {
            focused,
            edit,
            cursor_visible,
        }
    }

    /// Floating title above the input
    pub fn title_node(&self, id: &str, focused: bool) -> Node {
        let style = &self.style;
        let color = style.title_color(focused);

        Node::new()
            .with_id(NodeId::new(format!("{}_title", id)))
            .with_width(Size::Fill)
            .with_content(Content::Text(
                TextContent::new(style.display_title(&self.title, &self.value))
                    .with_font(style.title_font)
                    .with_color(color)
                    .with_h_align(style.title_alignment),
            ))
            .with_style(Style::text(color))
            .with_transition(Transition::standard())
    }

    /// Editable text with its caret and selection overlays
    pub fn input_node(&self, id: &str, frame: &FieldFrame, ctx: &mut UiContext) -> Node {
        let style = &self.style;
        let align = style.text_alignment;
        let text_width = self.measure(ctx, &self.value);

        let mut children = Vec::with_capacity(4);

        if frame.focused {
            if let Some((start, end)) = frame.edit.selection.filter(|(s, e)| s < e) {
                let x = self.measure(ctx, &self.value[..start]);
                let width = self.measure(ctx, &self.value[start..end]);
                children.push(
                    Node::new()
                        .with_width(Size::lpx(width))
                        .with_height(Size::lpx(style.font.size))
                        .with_translation(Translation::x(x - align_factor(align) * (text_width - width)))
                        .with_style(Style::fill(style.selection_color)),
                );
            }
        }

        let text_color = style.text_color(&self.value);
        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            self.value.clone()
        };
        children.push(
            Node::new()
                .with_id(NodeId::new(format!("{}_text", id)))
                .with_content(Content::Text(
                    TextContent::new(display_text)
                        .with_font(style.font)
                        .with_color(text_color)
                        .with_h_align(align)
                        .with_v_align(VerticalAlign::Center),
                ))
                .with_style(Style::text(text_color))
                .with_transition(Transition::quick()),
        );

        if frame.cursor_visible {
            let x = self.measure(ctx, &self.value[..frame.edit.cursor_pos]);
            let thickness = style.cursor.thickness;
            children.push(
                Node::new()
                    .with_id(NodeId::new(format!("{}_cursor", id)))
                    .with_width(Size::lpx(thickness))
                    .with_height(Size::lpx(style.font.size))
                    .with_translation(Translation::x(
                        x - align_factor(align) * (text_width - thickness),
                    ))
                    .with_style(Style::fill(style.cursor_color())),
            );
        }

        children.push(
            Node::new()
                .with_id(NodeId::new(format!("{}_hitbox", id)))
                .with_width(Size::Fill)
                .with_height(Size::Fill),
        );

        Node::new()
            .with_id(NodeId::new(format!("{}_input", id)))
            .with_width(Size::Fill)
            .with_padding(Spacing::vertical(Size::lpx(style.input_padding)))
            .with_layout_direction(Layout::Stack)
            .with_h_align(align)
            .with_v_align(VerticalAlign::Center)
            .with_overflow(Overflow::Hidden)
            .with_children(children)
    }

    /// Line under the input, colored by focus
    pub fn underline_node(&self, id: &str, focused: bool) -> Node {
        Node::new()
            .with_id(NodeId::new(format!("{}_underline", id)))
            .with_width(Size::Fill)
            .with_height(Size::lpx(self.style.line_height))
            .with_style(Style::fill(self.style.underline_color(focused)))
            .with_transition(Transition::standard())
    }

    /// Wrap title, body and underline into the field's column
    pub fn column(&self, id: &str, focused: bool, body: Node) -> Node {
        Node::new()
            .with_id(NodeId::new(id))
            .with_width(Size::Fill)
            .with_layout_direction(Layout::Vertical)
            .with_child(self.title_node(id, focused))
            .with_child(body)
            .with_child(self.underline_node(id, focused))
    }

    fn measure(&self, ctx: &mut UiContext, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        ctx.measure_text(MeasureTextRequest {
            text,
            font: &self.style.font,
        })
        .width
    }
}

fn is_focus_target(id: &str, target: &str) -> bool {
    target
        .strip_prefix(id)
        .is_some_and(|suffix| FOCUS_TARGETS.contains(&suffix))
}

/// Share of the free space placed before aligned content
///
/// Overlays sit in the same stack as the text, so they are aligned like it and
/// then shifted back to the text's leading edge.
fn align_factor(align: HorizontalAlign) -> f32 {
    match align {
        HorizontalAlign::Left => 0.0,
        HorizontalAlign::Center => 0.5,
        HorizontalAlign::Right => 1.0,
    }
}

/// Builder methods shared by every text field component
///
/// The component must hold its [`FieldCore`] in a field named `core`.
macro_rules! impl_field_builders {
    ($component:ident) => {
        impl<'a> $component<'a> {
            /// Color of the title and underline while focused, and of the typed text
            pub fn main_color(mut self, color: airy_ui::Color) -> Self {
                self.core.style.main_color = color;
                self
            }

            /// Color of the title and underline while unfocused, and of the placeholder
            pub fn secondary_color(mut self, color: airy_ui::Color) -> Self {
                self.core.style.secondary_color = color;
                self
            }

            pub fn title_font(mut self, font: airy_ui::Font) -> Self {
                self.core.style.title_font = font;
                self
            }

            pub fn font(mut self, font: airy_ui::Font) -> Self {
                self.core.style.font = font;
                self
            }

            /// Thickness of the underline
            pub fn line_height(mut self, height: f32) -> Self {
                self.core.style.line_height = height;
                self
            }

            pub fn title_uppercased(mut self, uppercased: bool) -> Self {
                self.core.style.title_uppercased = uppercased;
                self
            }

            pub fn title_alignment(mut self, alignment: airy_ui::HorizontalAlign) -> Self {
                self.core.style.title_alignment = alignment;
                self
            }

            pub fn text_alignment(mut self, alignment: airy_ui::HorizontalAlign) -> Self {
                self.core.style.text_alignment = alignment;
                self
            }

            /// Replace the whole field style
            pub fn with_style(mut self, style: $crate::TextFieldStyle) -> Self {
                self.core.style = style;
                self
            }

            /// Called with the new value after every edit
            pub fn on_change(mut self, f: impl FnMut(&str) + 'a) -> Self {
                self.core.on_change = Some(Box::new(f));
                self
            }

            /// Called with the new focus state whenever the field gains or loses focus
            pub fn on_focus_change(mut self, f: impl FnMut(bool) + 'a) -> Self {
                self.core.on_focus_change = Some(Box::new(f));
                self
            }

            /// Called with the current value when Enter is pressed
            pub fn on_submit(mut self, f: impl FnMut(&str) + 'a) -> Self {
                self.core.on_submit = Some(Box::new(f));
                self
            }

            pub fn style(&self) -> &$crate::TextFieldStyle {
                &self.core.style
            }

            /// The value as it will be rendered
            pub fn value(&self) -> &str {
                &self.core.value
            }
        }
    };
}

pub(crate) use impl_field_builders;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_targets() {
        assert!(is_focus_target("text_field_0", "text_field_0"));
        assert!(is_focus_target("text_field_0", "text_field_0_hitbox"));
        assert!(is_focus_target("text_field_0", "text_field_0_icon"));
        assert!(!is_focus_target("text_field_0", "text_field_0_title"));
        assert!(!is_focus_target("text_field_0", "text_field_1_hitbox"));
        assert!(!is_focus_target("text_field_1", "text_field_10"));
    }

    #[test]
    fn test_align_factor() {
        assert_eq!(align_factor(HorizontalAlign::Left), 0.0);
        assert_eq!(align_factor(HorizontalAlign::Center), 0.5);
        assert_eq!(align_factor(HorizontalAlign::Right), 1.0);
    }

    #[test]
    fn test_typing_reports_change() {
        let mut ctx = UiContext::new();
        let mut changes = Vec::new();
        let mut core = FieldCore::new("Name".into(), "".into(), "Al".into());
        core.on_change = Some(Box::new(|value: &str| changes.push(value.to_string())));

        ctx.set_focus(Some("field"));
        ctx.input_mut().type_str("ex");
        ctx.begin_frame();
        let frame = core.process("field", &mut ctx);

        assert!(frame.focused);
        assert_eq!(frame.edit.cursor_pos, 4);
        assert_eq!(core.value, "Alex");
        drop(core);
        assert_eq!(changes, vec!["Alex".to_string()]);
    }

    #[test]
    fn test_caret_is_placed_after_text() {
        let mut ctx = UiContext::new();
        let mut core = FieldCore::new("".into(), "".into(), "abc".into());

        ctx.set_focus(Some("field"));
        ctx.begin_frame();
        let frame = core.process("field", &mut ctx);
        let node = core.input_node("field", &frame, &mut ctx);

        let cursor = node.find("field_cursor").expect("caret is shown while focused");
        // 3 chars at 0.6 em of the 16px default font
        assert!((cursor.translation().x - 28.8).abs() < 1e-4);
    }
}
