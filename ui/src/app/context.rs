use crate::app::task_manager::TaskManager;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::theme::{ThemeFlags, ThemeManager};
use std::future::Future;
use tokio::runtime::Handle;
use windowing::textbox::{TextInputBackend, TextInputSession};
use windowing::wheel::{CursorState, MouseWheelRouter, WheelOutcome};
use windowing::{
    ColourWithFlags, ScreenCoords, ScreenFlags, ScreenSize, TaskOutput, WidgetIndex, Window,
    WindowClass, WindowIdentity, WindowManager,
};

/// Everything the interface needs between frames: the window registry, the
/// theme manager, the text-input session, wheel routing state and background
/// jobs.
pub struct UiContext {
    windows: WindowManager,
    themes: ThemeManager,
    text_input: TextInputSession,
    wheel: MouseWheelRouter,
    tasks: TaskManager,
    snap_proximity: i32,
}

impl UiContext {
    pub fn new(config: &AppConfig, themes: ThemeManager, runtime: Handle) -> Self {
        let mut windows = WindowManager::new(config.screen().size());
        if config.interface().title_demo() {
            windows.set_screen_flags(ScreenFlags::TITLE_DEMO);
        }

        Self {
            windows,
            themes,
            text_input: TextInputSession::headless(),
            wheel: MouseWheelRouter::new(),
            tasks: TaskManager::new(runtime),
            snap_proximity: config.interface().window_snap_proximity(),
        }
    }

    pub fn with_text_input_backend(mut self, backend: Box<dyn TextInputBackend>) -> Self {
        self.text_input = TextInputSession::new(backend);
        self
    }

    /// Loads the theme list and activates the configured preset.
    pub fn initialise(&mut self) {
        self.themes.initialise(&mut self.windows);
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    pub fn themes(&self) -> &ThemeManager {
        &self.themes
    }

    pub fn text_input(&self) -> &TextInputSession {
        &self.text_input
    }

    pub fn tasks(&self) -> &TaskManager {
        &self.tasks
    }

    /// Colours the window from the active theme and adds it to the registry.
    pub fn open_window(&mut self, mut window: Window) -> AppResult<WindowIdentity> {
        self.themes.update_colour_scheme(&mut window);
        Ok(self.windows.insert(window)?)
    }

    /// Closes a window, ending its text-input session and cancelling its jobs.
    pub fn close_window(&mut self, identity: WindowIdentity) -> bool {
        if self.text_input.owner() == Some(identity) {
            self.text_input.cancel(&mut self.windows);
        }
        let cancelled = self.tasks.cancel_for_window(identity);
        if cancelled > 0 {
            log::debug!("Cancelled {cancelled} task(s) owned by {identity}");
        }
        self.windows.close(identity)
    }

    /// Drags a window to `target`, snapping to nearby edges.
    pub fn move_window(&mut self, identity: WindowIdentity, target: ScreenCoords) {
        self.windows
            .move_and_snap(identity, target, self.snap_proximity);
    }

    pub fn resize_screen(&mut self, size: ScreenSize) {
        self.windows.resize_screen(size);
    }

    pub fn process_wheel(&mut self, cursor: CursorState) -> WheelOutcome {
        self.wheel.process(&mut self.windows, cursor)
    }

    pub fn start_text_input(
        &mut self,
        owner: WindowIdentity,
        widget_index: WidgetIndex,
        initial_text: &str,
        max_length: usize,
    ) {
        self.text_input
            .start(&mut self.windows, owner, widget_index, initial_text, max_length);
    }

    /// Replaces the typed text and forwards it to the owning window.
    pub fn set_text_input(&mut self, text: &str) {
        if !self.text_input.is_active() {
            return;
        }
        self.text_input.set_text(text);
        self.text_input.update(&mut self.windows);
    }

    pub fn cancel_text_input(&mut self) {
        self.text_input.cancel(&mut self.windows);
    }

    pub fn spawn_task<F>(&mut self, owner: WindowIdentity, key: impl Into<String>, job: F)
    where
        F: Future<Output = AppResult<TaskOutput>> + Send + 'static,
    {
        self.tasks.spawn(owner, key, job);
    }

    pub fn cancel_task(&mut self, key: &str) -> bool {
        self.tasks.cancel(key)
    }

    /// Hands finished jobs to their windows. Returns how many were delivered.
    pub fn process_task_completions(&mut self) -> usize {
        let mut delivered = 0;
        for completion in self.tasks.drain_completed() {
            match completion.outcome {
                Ok(output) => match self.windows.get_mut(completion.owner) {
                    Some(window) => {
                        window.call_task_complete(&completion.key, output);
                        delivered += 1;
                    }
                    None => log::debug!(
                        "Owner {} of task '{}' is gone",
                        completion.owner,
                        completion.key
                    ),
                },
                Err(e) => log::error!("Task '{}' failed: {}", completion.key, e),
            }
        }
        delivered
    }

    /// Per-frame housekeeping: caret blink and background job results.
    pub fn tick(&mut self) -> usize {
        if self.text_input.is_active() {
            self.text_input.update_caret();
            if let (Some(owner), Some(widget_index)) =
                (self.text_input.owner(), self.text_input.widget_index())
            {
                if let Some((window, dirty)) = self.windows.get_with_dirty(owner) {
                    window.invalidate_widget(widget_index, dirty);
                }
            }
        }
        self.process_task_completions()
    }

    /// Activates entry `index` of the available-theme list.
    pub fn select_theme(&mut self, index: usize) -> AppResult<()> {
        self.themes
            .set_active_available_theme(index, &mut self.windows)?;
        Ok(())
    }

    pub fn set_theme_colour(
        &mut self,
        class: WindowClass,
        slot: usize,
        colour: ColourWithFlags,
    ) -> AppResult<()> {
        self.themes.set_colour(class, slot, colour)?;
        self.themes
            .update_class_colour_schemes(class, &mut self.windows);
        Ok(())
    }

    pub fn set_theme_flag(&mut self, flag: ThemeFlags, enabled: bool) -> AppResult<()> {
        let mut flags = self.themes.flags();
        flags.set(flag, enabled);
        self.themes.set_flags(flags)?;
        self.windows.invalidate_screen();
        Ok(())
    }

    pub fn rename_theme(&mut self, name: &str) -> AppResult<()> {
        self.themes.rename(name)?;
        Ok(())
    }

    pub fn duplicate_theme(&mut self, name: &str) -> AppResult<()> {
        self.themes.duplicate(name, &mut self.windows)?;
        Ok(())
    }

    pub fn delete_theme(&mut self) -> AppResult<()> {
        self.themes.delete(&mut self.windows)?;
        Ok(())
    }
}
