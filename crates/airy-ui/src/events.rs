//! Event routing and focus tracking
//!
//! airy does not hit-test. The host reports which node was clicked and the
//! dispatcher turns that, together with focus changes, into the list of
//! [`TargetedEvent`]s components see on the next frame.

use crate::{MouseButton, NodeId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Type of interaction event
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// Mouse click (button pressed and released on the same target)
    Click {
        /// Which mouse button was clicked
        button: MouseButton,
    },
    /// Node gained focus
    Focus,
    /// Node lost focus
    Blur,
}

/// An interaction event targeted at a specific node
#[derive(Debug, Clone, PartialEq)]
pub struct TargetedEvent {
    /// The interaction event
    pub event: InteractionEvent,
    /// The ID of the target node
    pub target: NodeId,
}

impl TargetedEvent {
    pub fn new(event: InteractionEvent, target: impl Into<NodeId>) -> Self {
        Self {
            event,
            target: target.into(),
        }
    }

    /// Left click on `target`
    pub fn click(target: impl Into<NodeId>) -> Self {
        Self::new(
            InteractionEvent::Click {
                button: MouseButton::Left,
            },
            target,
        )
    }
}

/// Cursor blink state tracker
#[derive(Debug, Clone)]
struct CursorBlinkState {
    /// When the cursor last toggled
    last_blink: Instant,
    /// Whether the cursor is currently visible
    visible: bool,
}

/// Collects events for the next frame and owns keyboard focus
#[derive(Debug, Default)]
pub struct EventDispatcher {
    /// Events queued since the last dispatch
    pending: Vec<TargetedEvent>,
    /// Currently focused node ID, if any
    focused_node: Option<NodeId>,
    /// Cursor blink states for focused text widgets
    cursor_blink_states: HashMap<NodeId, CursorBlinkState>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event reported by the host (e.g. a hit-tested click)
    pub fn push(&mut self, event: TargetedEvent) {
        self.pending.push(event);
    }

    /// Take all events queued since the last dispatch
    pub fn dispatch(&mut self) -> Vec<TargetedEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Get the currently focused node ID, if any
    pub fn focused_node(&self) -> Option<&NodeId> {
        self.focused_node.as_ref()
    }

    /// Move keyboard focus
    ///
    /// Queues a `Blur` for the previously focused node and a `Focus` for the
    /// new one. Setting the focus to the node that already has it is a no-op.
    pub fn set_focus(&mut self, node_id: Option<NodeId>) {
        if self.focused_node == node_id {
            return;
        }

        if let Some(old_id) = self.focused_node.take() {
            self.cursor_blink_states.remove(&old_id);
            log::debug!("focus left {}", old_id.as_str());
            self.pending
                .push(TargetedEvent::new(InteractionEvent::Blur, old_id));
        }

        if let Some(new_id) = &node_id {
            self.cursor_blink_states.insert(
                new_id.clone(),
                CursorBlinkState {
                    last_blink: Instant::now(),
                    visible: true,
                },
            );
            log::debug!("focus entered {}", new_id.as_str());
            self.pending
                .push(TargetedEvent::new(InteractionEvent::Focus, new_id.clone()));
        }

        self.focused_node = node_id;
    }

    /// Update cursor blink state for a focused node
    ///
    /// Returns the current visibility state.
    pub fn update_cursor_blink(&mut self, node_id: &NodeId, interval: Duration) -> bool {
        match self.cursor_blink_states.get_mut(node_id) {
            Some(state) => {
                if state.last_blink.elapsed() >= interval {
                    state.visible = !state.visible;
                    state.last_blink = Instant::now();
                }
                state.visible
            }
            // Not a focused text widget, default to visible
            None => true,
        }
    }

    /// Reset cursor blink to visible (call when text changes)
    pub fn reset_cursor_blink(&mut self, node_id: &NodeId) {
        if let Some(state) = self.cursor_blink_states.get_mut(node_id) {
            state.visible = true;
            state.last_blink = Instant::now();
        }
    }

    /// Check if cursor should be visible for a node
    pub fn is_cursor_visible(&self, node_id: &NodeId) -> bool {
        self.cursor_blink_states
            .get(node_id)
            .map(|s| s.visible)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_change_queues_blur_then_focus() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.set_focus(Some(NodeId::new("a")));
        dispatcher.dispatch();

        dispatcher.set_focus(Some(NodeId::new("b")));
        let events = dispatcher.dispatch();

        assert_eq!(
            events,
            vec![
                TargetedEvent::new(InteractionEvent::Blur, "a"),
                TargetedEvent::new(InteractionEvent::Focus, "b"),
            ]
        );
        assert!(dispatcher.dispatch().is_empty());
    }

    #[test]
    fn test_refocus_is_noop() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.set_focus(Some(NodeId::new("a")));
        dispatcher.dispatch();

        dispatcher.set_focus(Some(NodeId::new("a")));
        assert!(dispatcher.dispatch().is_empty());
    }

    #[test]
    fn test_cursor_blink_only_for_focused() {
        let mut dispatcher = EventDispatcher::new();
        let id = NodeId::new("input");

        assert!(!dispatcher.is_cursor_visible(&id));
        dispatcher.set_focus(Some(id.clone()));
        assert!(dispatcher.is_cursor_visible(&id));
        assert!(dispatcher.update_cursor_blink(&id, Duration::from_secs(60)));

        dispatcher.set_focus(None);
        assert!(!dispatcher.is_cursor_visible(&id));
    }
}
