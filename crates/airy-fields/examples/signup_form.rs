//! Headless signup form
//!
//! Drives two fields through a few simulated frames (click, type, click the next field,
//! submit) and prints the resulting node trees and validation results.
//!
//! Run with `RUST_LOG=debug` to see focus changes logged by the fields.

use airy_fields::{
    validate_all, AllOf, IconPosition, IconTextField, LengthRange, Pattern, Required, TextField,
    ValidationStatus, Validator,
};
use airy_ui::{
    catppuccin::mocha, Component, Content, Key, MouseButton, NamedKey, Node, TargetedEvent,
    UiContext,
};
use std::error::Error;

#[derive(Debug, Default)]
struct Form {
    email: String,
    password: String,
    submitted: bool,
}

fn build(ctx: &mut UiContext, form: &mut Form) -> Node {
    let Form {
        email,
        password,
        submitted,
    } = form;

    let email_field = IconTextField::new(email.clone(), "mail")
        .title("Email")
        .placeholder("you@example.com")
        .main_color(mocha::LAVENDER)
        .secondary_color(mocha::OVERLAY0)
        .icon_position(IconPosition::Trailing)
        .on_change(|value| *email = value.to_string())
        .node(ctx);

    let password_field = TextField::new("Password", "at least 8 characters", password.clone())
        .main_color(mocha::LAVENDER)
        .secondary_color(mocha::OVERLAY0)
        .title_uppercased(true)
        .on_change(|value| *password = value.to_string())
        .on_submit(|_| *submitted = true)
        .node(ctx);

    Node::new()
        .with_child(email_field)
        .with_child(password_field)
}

fn frame(ctx: &mut UiContext, form: &mut Form, feed: impl FnOnce(&mut UiContext)) -> Node {
    feed(ctx);
    ctx.begin_frame();
    let mut root = build(ctx, form);
    ctx.end_frame(&mut root);
    ctx.input_mut().release_button(MouseButton::Left);
    root
}

fn print_tree(node: &Node, depth: usize) {
    let id = node.id().map(|id| id.as_str()).unwrap_or("-");
    let detail = match node.content() {
        Some(Content::Text(text)) => format!("text {:?}", text.text),
        Some(Content::Icon(icon)) => format!("icon {:?}", icon.name),
        None => String::new(),
    };
    println!("{:indent$}{} {}", "", id, detail, indent = depth * 2);
    for child in node.children() {
        print_tree(child, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut ctx = UiContext::new();
    let mut form = Form::default();

    // Nothing focused yet: titles are empty, placeholders show
    let root = frame(&mut ctx, &mut form, |_| {});
    print_tree(&root, 0);

    frame(&mut ctx, &mut form, |ctx| {
        ctx.input_mut().press_button(MouseButton::Left);
        ctx.push_event(TargetedEvent::click("icon_text_field_0_hitbox"));
    });
    frame(&mut ctx, &mut form, |ctx| ctx.input_mut().type_str("ada@lovelace.dev"));

    frame(&mut ctx, &mut form, |ctx| {
        ctx.input_mut().press_button(MouseButton::Left);
        ctx.push_event(TargetedEvent::click("text_field_1"));
    });
    frame(&mut ctx, &mut form, |ctx| ctx.input_mut().type_str("analytical"));
    let root = frame(&mut ctx, &mut form, |ctx| {
        ctx.input_mut().press_key(Key::Named(NamedKey::Enter));
    });
    print_tree(&root, 0);

    let email_validator = AllOf::new().with(Required::default()).with(Pattern::email()?);
    let password_validator = AllOf::new()
        .with(Required::new("Password required"))
        .with(LengthRange::at_least(8));
    let not_reserved = |text: &str, title: &str| {
        if text.starts_with("admin@") {
            ValidationStatus::invalid("Reserved address")
        } else {
            ValidationStatus::valid(title)
        }
    };

    let entries: [(&dyn Validator, &str, &str); 3] = [
        (&email_validator, &form.email, "Email"),
        (&not_reserved, &form.email, "Email"),
        (&password_validator, &form.password, "Password"),
    ];
    let (statuses, all_valid) = validate_all(&entries);
    for status in &statuses {
        println!("{:<20} valid={}", status.message, status.is_valid);
    }
    println!(
        "submitted={} all_valid={} email={:?}",
        form.submitted, all_valid, form.email
    );

    Ok(())
}
