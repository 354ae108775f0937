//! UI Context for managing the immediate mode UI lifecycle
//!
//! The `UiContext` holds the plumbing components need between frames:
//! - Input state (keyboard, mouse buttons)
//! - Event dispatcher (host-reported clicks, focus changes)
//! - Style transitions (eased color changes)
//! - Widget memory (caret positions, focus flags)
//! - Content measurer (text metrics for caret placement)
//! - ID stack (for generating unique widget IDs)

use crate::{
    ContentMeasurer, EventDispatcher, InputState, IntrinsicSize,
    MeasureTextRequest, MonospaceEstimate, Node, NodeId, StyleTransitions, TargetedEvent,
    WidgetMemory,
};
use std::time::{Duration, Instant};

/// The main UI context that coordinates all UI operations
///
/// # Example
///
/// ```ignore
/// // Host feeds input and hit-tested clicks between frames
/// ctx.input_mut().type_character('a');
/// ctx.push_event(TargetedEvent::click("text_field_0_hitbox"));
///
/// ctx.begin_frame();
/// let mut root = TextField::new("Email", "you@example.com", email.clone())
///     .on_change(|value| email = value.to_string())
///     .node(&mut ctx);
/// ctx.end_frame(&mut root);
/// // ... lay out and render `root`
/// ```
pub struct UiContext {
    /// Current input state
    input: InputState,

    /// Events from the last frame (available during UI building)
    events: Vec<TargetedEvent>,

    /// Focus owner and event queue
    dispatcher: EventDispatcher,

    /// Eased style changes between frames
    transitions: StyleTransitions,

    /// Widget memory for storing internal state
    memory: WidgetMemory,

    /// Content measurer for text measurement
    measurer: Box<dyn ContentMeasurer>,

    /// ID stack for hierarchical ID generation
    id_stack: Vec<String>,

    /// Counter for generating unique IDs within a frame
    id_counter: usize,
}

impl UiContext {
    /// Create a new UI context
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            events: Vec::new(),
            dispatcher: EventDispatcher::new(),
            transitions: StyleTransitions::new(),
            memory: WidgetMemory::new(),
            measurer: Box::new(MonospaceEstimate),
            id_stack: Vec::new(),
            id_counter: 0,
        }
    }

    /// Create a new UI context with a content measurer
    pub fn with_measurer(measurer: impl ContentMeasurer + 'static) -> Self {
        Self {
            measurer: Box::new(measurer),
            ..Self::new()
        }
    }

    /// Replace the content measurer
    pub fn set_measurer(&mut self, measurer: impl ContentMeasurer + 'static) {
        self.measurer = Box::new(measurer);
    }

    // ========== Frame Lifecycle ==========

    /// Begin a new frame
    ///
    /// Call before building UI, after the host has fed input and clicks.
    /// Queued events become visible through [`events`](Self::events) and
    /// widget ids are handed out from zero again so that the same structure
    /// produces the same ids every frame.
    pub fn begin_frame(&mut self) {
        self.events = self.dispatcher.dispatch();
        self.id_counter = 0;
        self.id_stack.clear();
    }

    /// End the current frame
    ///
    /// Call after building UI. Eases styles for this frame and clears
    /// per-frame input.
    pub fn end_frame(&mut self, root: &mut Node) {
        self.end_frame_at(root, Instant::now());
    }

    /// [`end_frame`](Self::end_frame) with an explicit clock, for hosts that
    /// drive animation time themselves
    pub fn end_frame_at(&mut self, root: &mut Node, now: Instant) {
        self.transitions.update(root, now);
        self.input.begin_frame();
    }

    /// Check if any transitions are currently active
    ///
    /// Use this to determine if continuous redraws are needed.
    pub fn has_active_transitions(&self) -> bool {
        self.transitions.has_active(Instant::now())
    }

    /// Style transitions, for inspecting what was displayed
    pub fn transitions(&self) -> &StyleTransitions {
        &self.transitions
    }

    // ========== Input State Access ==========

    /// Get the current input state
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Get mutable access to the input state
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    // ========== Event Checking ==========

    /// Queue a host-reported event (e.g. a hit-tested click)
    ///
    /// Delivered by the next [`begin_frame`](Self::begin_frame).
    pub fn push_event(&mut self, event: TargetedEvent) {
        self.dispatcher.push(event);
    }

    /// Get all events delivered to this frame
    pub fn events(&self) -> &[TargetedEvent] {
        &self.events
    }

    // ========== Focus Management ==========

    /// Get the currently focused widget ID
    pub fn focused_widget(&self) -> Option<&NodeId> {
        self.dispatcher.focused_node()
    }

    /// Check if a widget is focused
    pub fn is_focused(&self, id: &str) -> bool {
        self.dispatcher
            .focused_node()
            .is_some_and(|fid| fid.as_str() == id)
    }

    /// Set the focused widget
    pub fn set_focus(&mut self, id: Option<&str>) {
        self.dispatcher.set_focus(id.map(NodeId::new));
    }

    /// Update cursor blink for a focused text widget
    pub fn update_cursor_blink(&mut self, id: &str, interval: Duration) -> bool {
        self.dispatcher
            .update_cursor_blink(&NodeId::new(id), interval)
    }

    /// Reset cursor blink to visible (call when text changes)
    pub fn reset_cursor_blink(&mut self, id: &str) {
        self.dispatcher.reset_cursor_blink(&NodeId::new(id));
    }

    // ========== Widget Memory ==========

    /// Get access to widget memory for storing internal state
    pub fn memory(&mut self) -> &mut WidgetMemory {
        &mut self.memory
    }

    // ========== Content Measurement ==========

    /// Measure text with the installed measurer
    pub fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        self.measurer.measure_text(request)
    }

    // ========== ID Generation ==========

    /// Generate a unique ID for a widget
    ///
    /// IDs are built from the current ID stack, the label and a per-frame
    /// counter, so they stay stable while the UI structure stays the same.
    pub fn generate_id(&mut self, label: &str) -> String {
        let id = self.peek_id(label);
        self.id_counter += 1;
        id
    }

    /// The ID `generate_id` would return next, without consuming it
    pub fn peek_id(&self, label: &str) -> String {
        if self.id_stack.is_empty() {
            format!("{}_{}", label, self.id_counter)
        } else {
            format!("{}/{}_{}", self.id_stack.join("/"), label, self.id_counter)
        }
    }

    /// Push a scope onto the ID stack
    pub fn push_id(&mut self, scope: impl Into<String>) {
        self.id_stack.push(scope.into());
    }

    /// Pop the current scope from the ID stack
    pub fn pop_id(&mut self) {
        self.id_stack.pop();
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiContext")
            .field("events", &self.events.len())
            .field("focused", &self.focused_widget())
            .field("memory", &self.memory)
            .field("id_stack", &self.id_stack)
            .finish()
    }
}
