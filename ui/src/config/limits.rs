/// Largest edge-snap distance, in pixels, accepted from configuration
pub const MAX_WINDOW_SNAP_PROXIMITY: i32 = 255;

/// Smallest screen the window manager is configured for
pub const MIN_SCREEN_WIDTH: i32 = 640;
pub const MIN_SCREEN_HEIGHT: i32 = 480;

/// Largest screen dimension accepted from configuration
pub const MAX_SCREEN_DIMENSION: i32 = 16384;

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
