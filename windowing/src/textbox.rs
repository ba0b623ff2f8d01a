//! The single text-input session.
//!
//! Only one widget in the whole UI can own keyboard text input at a time.
//! Starting a session while another is active cancels the old one first, so
//! there is never a moment with two owners.

use crate::common::ids::{WidgetIndex, WindowClass, WindowIdentity};
use crate::manager::WindowManager;

/// Caret frame counter wraps back to 0 once it passes this value.
const CARET_FRAME_WRAP: u32 = 30;
/// Last frame of the blink cycle on which the caret is drawn.
const CARET_VISIBLE_FRAMES: u32 = 15;

/// Platform text input (IME, on-screen keyboard, key repeat).
pub trait TextInputBackend {
    fn start(&mut self, initial_text: &str, max_length: usize);
    fn stop(&mut self);
}

/// Backend for headless use; accepts every call and does nothing.
#[derive(Debug, Default)]
pub struct NoopTextInput;

impl TextInputBackend for NoopTextInput {
    fn start(&mut self, _initial_text: &str, _max_length: usize) {}

    fn stop(&mut self) {}
}

pub struct TextInputSession {
    backend: Box<dyn TextInputBackend>,
    owner: Option<WindowIdentity>,
    widget_index: Option<WidgetIndex>,
    buffer: String,
    max_length: usize,
    caret_frame: u32,
    active: bool,
}

impl TextInputSession {
    pub fn new(backend: Box<dyn TextInputBackend>) -> Self {
        Self {
            backend,
            owner: None,
            widget_index: None,
            buffer: String::new(),
            max_length: 0,
            caret_frame: 0,
            active: false,
        }
    }

    pub fn headless() -> Self {
        Self::new(Box::new(NoopTextInput))
    }

    /// Gives keyboard text input to a widget, cancelling any current session.
    pub fn start(
        &mut self,
        windows: &mut WindowManager,
        owner: WindowIdentity,
        widget_index: WidgetIndex,
        initial_text: &str,
        max_length: usize,
    ) {
        self.cancel(windows);

        self.owner = Some(owner);
        self.widget_index = Some(widget_index);
        self.caret_frame = 0;
        windows.close_by_class(WindowClass::TextInput);

        self.max_length = max_length;
        self.buffer = initial_text.chars().take(max_length).collect();
        self.backend.start(&self.buffer, max_length);
        self.active = true;
        windows.invalidate_window(owner);
        log::debug!("Text input started on {owner} widget {widget_index}");
    }

    /// Ends the session, if any, telling its owner with a `None` text event.
    ///
    /// The owner may already be closed; that is not an error. Cancelling
    /// twice, or with no session, does nothing.
    pub fn cancel(&mut self, windows: &mut WindowManager) {
        if !self.active {
            return;
        }

        let owner = self.owner;
        let widget_index = self.widget_index;
        if let (Some(identity), Some(index)) = (owner, widget_index) {
            if let Some(window) = windows.get_mut(identity) {
                window.call_text_input(index, None);
            }
        }

        self.owner = None;
        self.backend.stop();
        self.active = false;

        if let (Some(identity), Some(index)) = (owner, widget_index) {
            if let Some((window, dirty)) = windows.get_with_dirty(identity) {
                window.invalidate_widget(index, dirty);
            }
        }
        self.widget_index = None;
    }

    /// Replaces the text typed so far, truncated to the session's limit.
    pub fn set_text(&mut self, text: &str) {
        if !self.active {
            return;
        }
        self.buffer = text.chars().take(self.max_length).collect();
    }

    /// Per-frame update after typing: restarts the caret blink, redraws the
    /// widget and hands the current text to the owner.
    pub fn update(&mut self, windows: &mut WindowManager) {
        if !self.active {
            return;
        }
        self.caret_frame = 0;

        let (Some(identity), Some(index)) = (self.owner, self.widget_index) else {
            return;
        };
        if let Some((window, dirty)) = windows.get_with_dirty(identity) {
            window.invalidate_widget(index, dirty);
            window.call_text_input(index, Some(&self.buffer));
        }
    }

    /// Advances the caret blink counter by one frame.
    pub fn update_caret(&mut self) {
        self.caret_frame += 1;
        if self.caret_frame > CARET_FRAME_WRAP {
            self.caret_frame = 0;
        }
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_frame <= CARET_VISIBLE_FRAMES
    }

    pub fn caret_frame(&self) -> u32 {
        self.caret_frame
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_widget_active(&self, identity: WindowIdentity, widget_index: WidgetIndex) -> bool {
        self.active && self.owner == Some(identity) && self.widget_index == Some(widget_index)
    }

    pub fn owner(&self) -> Option<WindowIdentity> {
        self.owner
    }

    pub fn widget_index(&self) -> Option<WidgetIndex> {
        self.widget_index
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }
}

impl Default for TextInputSession {
    fn default() -> Self {
        Self::headless()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_blinks_on_a_31_frame_cycle() {
        let mut session = TextInputSession::headless();
        let mut visible = Vec::new();
        for _ in 0..31 {
            visible.push(session.caret_visible());
            session.update_caret();
        }

        assert_eq!(session.caret_frame(), 0);
        assert!(visible[..16].iter().all(|shown| *shown));
        assert!(visible[16..].iter().all(|shown| !*shown));
    }

    #[test]
    fn test_inactive_session_ignores_text() {
        let mut session = TextInputSession::headless();
        session.set_text("ignored");
        assert_eq!(session.text(), "");
        assert!(!session.is_active());
    }
}
