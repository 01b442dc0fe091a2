/// Zoom added or removed by one zoom key press (10%).
pub const ZOOM_STEP: f64 = 0.1;

/// Pan distance of one arrow key press, as a fraction of the destination
/// size at zoom 1.0. Divided by the current zoom before it is applied.
pub const PAN_STEP: f64 = 0.1;

/// Zoom at startup: the image fits the window.
pub const INITIAL_ZOOM: f64 = 1.0;

/// Positional argument that selects standard input.
pub const STDIN_ARG: &str = "-";

/// Name shown in the window title when reading from standard input.
pub const STDIN_NAME: &str = "stdin";

/// Prefix of every window title.
pub const TITLE_PREFIX: &str = "OSXIV - ";

/// Window size used until the monitor size is known (logical points).
pub const FALLBACK_WINDOW_SIZE: [f32; 2] = [960.0, 540.0];
