use crate::common::ids::{WidgetIndex, WindowIdentity};
use thiserror::Error;

/// Errors raised by the window registry and widget helpers.
///
/// Hit tests and lookups that can legitimately miss return `Option`; these
/// variants cover requests that name something which does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window {0} is already open")]
    DuplicateWindow(WindowIdentity),

    #[error("Window {0} is not open")]
    WindowNotFound(WindowIdentity),

    #[error("Widget index {index} is out of range for window {window} ({count} widgets)")]
    WidgetOutOfRange {
        window: WindowIdentity,
        index: WidgetIndex,
        count: usize,
    },

    #[error("Widget {index} of window {window} is not a scroll widget")]
    NotAScrollWidget {
        window: WindowIdentity,
        index: WidgetIndex,
    },
}
