//! Text field with a floating title and an underline

use crate::field::{impl_field_builders, FieldCore};
use airy_ui::{Component, Node, UiContext};

/// A single-line text field with a floating title
///
/// The title appears above the input once something has been typed, and
/// switches to `main_color` together with the underline while the field has
/// focus. The value is owned by the caller: the field renders the value it
/// was given and reports every edit through [`on_change`](Self::on_change).
///
/// # Example
///
/// ```ignore
/// TextField::new("Email", "you@example.com", email.clone())
///     .main_color(mocha::LAVENDER)
///     .title_uppercased(true)
///     .on_change(|value| email = value.to_string())
///     .node(&mut ctx)
/// ```
pub struct TextField<'a> {
    core: FieldCore<'a>,
}

impl<'a> TextField<'a> {
    /// Create a field showing `value`
    pub fn new(
        title: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            core: FieldCore::new(title.into(), placeholder.into(), value.into()),
        }
    }
}

impl_field_builders!(TextField);

impl Component for TextField<'_> {
    fn node(mut self, ctx: &mut UiContext) -> Node {
        let id = ctx.generate_id("text_field");
        let frame = self.core.process(&id, ctx);
        let input = self.core.input_node(&id, &frame, ctx);
        self.core.column(&id, frame.focused, input)
    }
}
