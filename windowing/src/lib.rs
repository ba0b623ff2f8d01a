//! # ParkUI Windowing Library
//!
//! Core window and widget management for the ParkUI interface. This library
//! owns the z-ordered window registry and everything that operates on a
//! window's widget and scroll arrays: hit testing, scroll regions, wheel
//! routing, edge snapping and the modal text-input session.
//!
//! ## Modules
//!
//! - [`colour`] - Palette colours, slot flags and the legacy byte encoding
//! - [`common`] - Geometry primitives, identifiers and error types
//! - [`widget`] - Widget definitions and widget-level geometry helpers
//! - [`scroll`] - Scroll areas, thumb geometry and wheel application
//! - [`window`] - Window state, handler hooks and viewports
//! - [`manager`] - The window registry and dirty-region tracking
//! - [`placement`] - Moving, resizing, snapping and relocating windows
//! - [`textbox`] - The single text-input session
//! - [`wheel`] - Per-frame mouse wheel routing

pub mod colour;
pub mod common;
pub mod manager;
pub mod placement;
pub mod scroll;
pub mod textbox;
pub mod wheel;
pub mod widget;
pub mod window;

pub use colour::{Colour, ColourFlags, ColourWithFlags};
pub use common::errors::WindowError;
pub use common::geometry::{ScreenCoords, ScreenRect, ScreenSize};
pub use common::ids::{ImageId, StringId, WidgetIndex, WindowClass, WindowIdentity, WindowNumber};
pub use manager::{DirtyRegions, InputFlags, ScreenFlags, WindowManager};
pub use widget::{Widget, WidgetContent, WidgetFlags, WidgetType};
pub use window::{TaskOutput, Viewport, Window, WindowFlags, WindowHandler, WindowState};
