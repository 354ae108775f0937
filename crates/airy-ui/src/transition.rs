use crate::color::Color;
use crate::node::{Node, NodeId};
use crate::style::Style;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Ease in (quadratic) - slow start, accelerating
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Ease out (quadratic) - fast start, decelerating
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two colors
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: lerp_f32(a.r, b.r, t),
        g: lerp_f32(a.g, b.g, t),
        b: lerp_f32(a.b, b.b, t),
        a: lerp_f32(a.a, b.a, t),
    }
}

fn lerp_option<T: Copy>(from: Option<T>, to: Option<T>, t: f32, lerp: fn(T, T, f32) -> T) -> Option<T> {
    match (from, to) {
        (Some(a), Some(b)) => Some(lerp(a, b, t)),
        (None, b) => b,
        (a, None) => a,
    }
}

/// Interpolate between two styles
///
/// Properties present on both sides are interpolated, otherwise whichever side
/// has a value wins.
pub fn lerp_style(from: &Style, to: &Style, t: f32) -> Style {
    Style {
        fill_color: lerp_option(from.fill_color, to.fill_color, t, lerp_color),
        opacity: lerp_option(from.opacity, to.opacity, t, lerp_f32),
        text_color: lerp_option(from.text_color, to.text_color, t, lerp_color),
        tint_color: lerp_option(from.tint_color, to.tint_color, t, lerp_color),
    }
}

/// Transition configuration
///
/// Defines how long a transition takes and what easing function to use.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Duration in seconds
    pub duration: f32,

    /// Easing function to apply
    pub easing: EasingFn,
}

impl Transition {
    /// Create a new transition with custom duration and easing
    pub fn new(duration: f32, easing: EasingFn) -> Self {
        Self { duration, easing }
    }

    /// Instant transition (no animation, duration = 0)
    pub fn instant() -> Self {
        Self {
            duration: 0.0,
            easing: linear,
        }
    }

    /// Quick transition (150ms, ease-out)
    pub fn quick() -> Self {
        Self {
            duration: 0.15,
            easing: ease_out,
        }
    }

    /// Standard transition (350ms, ease-in-out)
    pub fn standard() -> Self {
        Self {
            duration: 0.35,
            easing: ease_in_out,
        }
    }

    /// Eased progress at `elapsed` seconds into the transition
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.easing)((elapsed / self.duration).clamp(0.0, 1.0))
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone)]
struct TrackedStyle {
    from: Style,
    target: Style,
    displayed: Style,
    started: Instant,
    transition: Transition,
}

impl TrackedStyle {
    fn is_running(&self, now: Instant) -> bool {
        now.duration_since(self.started).as_secs_f32() < self.transition.duration
    }
}

/// Animates the base style of identified nodes between frames
///
/// Every node that carries an id, a base style and a transition is tracked.
/// When its base style changes from one frame to the next, the displayed
/// style eases from what was on screen towards the new target.
#[derive(Debug, Default)]
pub struct StyleTransitions {
    tracked: HashMap<NodeId, TrackedStyle>,
}

impl StyleTransitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpolate styles for this frame and write them into the tree
    pub fn update(&mut self, root: &mut Node, now: Instant) {
        let mut seen = HashSet::new();

        root.walk_mut(&mut |node| {
            let (Some(id), Some(target), Some(transition)) =
                (node.id().cloned(), node.base_style().copied(), node.transition().copied())
            else {
                return;
            };

            let tracked = self
                .tracked
                .entry(id.clone())
                .or_insert_with(|| TrackedStyle {
                    from: target,
                    target,
                    displayed: target,
                    started: now,
                    transition,
                });

            if tracked.target != target {
                tracked.from = tracked.displayed;
                tracked.target = target;
                tracked.started = now;
            }
            tracked.transition = transition;

            let elapsed = now.duration_since(tracked.started).as_secs_f32();
            let t = transition.progress(elapsed);
            tracked.displayed = lerp_style(&tracked.from, &tracked.target, t);
            tracked.displayed.apply_to_node(node);

            seen.insert(id);
        });

        // Nodes that disappeared from the tree start fresh when they come back
        self.tracked.retain(|id, _| seen.contains(id));
    }

    /// Whether any tracked style is still easing towards its target
    pub fn has_active(&self, now: Instant) -> bool {
        self.tracked
            .values()
            .any(|tracked| tracked.from != tracked.target && tracked.is_running(now))
    }

    /// The style shown for a node in the last update, if tracked
    pub fn displayed(&self, id: &str) -> Option<&Style> {
        self.tracked.get(&NodeId::new(id)).map(|t| &t.displayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Content, TextContent};
    use std::time::Duration;

    fn label(color: Color) -> Node {
        Node::new()
            .with_id("label")
            .with_content(Content::Text(TextContent::new("Email")))
            .with_style(Style::text(color))
            .with_transition(Transition::new(1.0, linear))
    }

    #[test]
    fn test_linear_easing() {
        assert_eq!(linear(0.0), 0.0);
        assert_eq!(linear(0.5), 0.5);
        assert_eq!(linear(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!(ease_in_out(0.25) < 0.25);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert!(ease_in_out(0.75) > 0.75);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn test_lerp_color() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);
        let gray = lerp_color(black, white, 0.5);

        assert_eq!(gray.r, 0.5);
        assert_eq!(gray.g, 0.5);
        assert_eq!(gray.b, 0.5);
    }

    #[test]
    fn test_instant_transition_progress() {
        assert_eq!(Transition::instant().progress(0.0), 1.0);
        assert_eq!(Transition::new(2.0, linear).progress(1.0), 0.5);
        assert_eq!(Transition::new(2.0, linear).progress(5.0), 1.0);
    }

    #[test]
    fn test_style_change_is_eased() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);
        let start = Instant::now();
        let mut transitions = StyleTransitions::new();

        let mut first = label(black);
        transitions.update(&mut first, start);
        assert_eq!(transitions.displayed("label"), Some(&Style::text(black)));
        assert!(!transitions.has_active(start));

        let mut second = label(white);
        transitions.update(&mut second, start);
        assert_eq!(transitions.displayed("label"), Some(&Style::text(black)));
        assert!(transitions.has_active(start));

        let halfway = start + Duration::from_millis(500);
        let mut third = label(white);
        transitions.update(&mut third, halfway);
        let shown = third.content().and_then(Content::as_text).map(|t| t.color);
        assert_eq!(shown, Some(Color::rgb(0.5, 0.5, 0.5)));

        let done = start + Duration::from_secs(2);
        let mut fourth = label(white);
        transitions.update(&mut fourth, done);
        assert_eq!(transitions.displayed("label"), Some(&Style::text(white)));
        assert!(!transitions.has_active(done));
    }

    #[test]
    fn test_removed_nodes_are_forgotten() {
        let mut transitions = StyleTransitions::new();
        let now = Instant::now();

        let mut tree = label(Color::rgb(0.0, 0.0, 0.0));
        transitions.update(&mut tree, now);
        assert!(transitions.displayed("label").is_some());

        let mut empty = Node::new();
        transitions.update(&mut empty, now);
        assert!(transitions.displayed("label").is_none());
    }
}
