//! # airy-ui
//!
//! Renderer agnostic UI model.
//!
//! Components produce a tree of [`Node`]s describing content, styles and layout
//! intent. A host backend lays the tree out, paints it and feeds input back in
//! through the [`UiContext`].
//!
//! ## Core Types
//!
//! - [`Node`] - The fundamental building block of the UI tree
//! - [`UiContext`] - Central coordinator for the UI system
//! - [`Component`] - Trait for reusable UI widgets
//!
//! ## Input & Events
//!
//! - [`InputState`] - Tracks keyboard and mouse buttons between frames
//! - [`EventDispatcher`] - Queues host clicks and owns keyboard focus
//! - [`TargetedEvent`] - An event targeted at a specific node
//!
//! ## State Management
//!
//! - [`StyleTransitions`] - Eases node styles between frames
//! - [`WidgetMemory`] - Stores internal widget state (carets, focus flags)
//!
//! ## Styling
//!
//! - [`Style`], [`Color`], [`Font`] - Visual properties
//! - [`Transition`] - Animation configuration for style changes
//! - [`ContentMeasurer`] - Trait for text measurement

mod color;
mod component;
mod content;
mod context;
mod events;
mod input;
mod layout;
mod measure;
mod memory;
mod node;
mod style;
pub mod transition;

pub use color::*;
pub use component::*;
pub use content::*;
pub use context::*;
pub use layout::*;
pub use measure::*;
pub use node::*;
pub use style::*;
pub use transition::*;

// Input & Events
pub use events::*;
pub use input::*;

// State Management
pub use memory::*;
