use tracing::debug;

use crate::consts::{INITIAL_ZOOM, PAN_STEP, ZOOM_STEP};
use crate::geometry::{Placement, Size};

/// Zoom and pan of the displayed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Multiplier applied to the window size before aspect correction.
    pub zoom: f64,
    /// Horizontal shift as a fraction of the destination width.
    pub pan_x: f64,
    /// Vertical shift as a fraction of the destination height.
    pub pan_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: INITIAL_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

/// A view mutation triggered by one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
}

impl ViewState {
    pub fn apply(&mut self, command: ViewCommand) {
        // Dividing by zoom keeps the on-screen pan distance constant.
        let pan_step = PAN_STEP / self.zoom;

        match command {
            ViewCommand::ZoomIn => self.zoom += ZOOM_STEP,
            ViewCommand::ZoomOut => {
                // Skipped outright near the floor instead of clamping to it.
                if self.zoom - ZOOM_STEP >= 0.0 {
                    self.zoom -= ZOOM_STEP;
                }
            }
            ViewCommand::PanUp => self.pan_y -= pan_step,
            ViewCommand::PanDown => self.pan_y += pan_step,
            ViewCommand::PanLeft => self.pan_x -= pan_step,
            ViewCommand::PanRight => self.pan_x += pan_step,
        }
    }
}

/// Input delivered by the windowing layer, already translated from its
/// native key and window events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    Command(ViewCommand),
    /// The window was resized or exposed. Carries the new size.
    Resized(Size),
    /// Quit key or window close request.
    Quit,
}

/// What the event loop must do after handling an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Quit,
}

/// Event loop driver: owns the view state of a single image.
#[derive(Clone, Debug)]
pub struct Viewer {
    source: Size,
    state: ViewState,
}

impl Viewer {
    pub fn new(source: Size) -> Self {
        Self {
            source,
            state: ViewState::default(),
        }
    }

    pub fn source_size(&self) -> Size {
        self.source
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn handle(&mut self, event: ViewerEvent) -> Flow {
        match event {
            ViewerEvent::Command(command) => {
                self.state.apply(command);
                debug!(?command, state = ?self.state, "view updated");
                Flow::Redraw
            }
            ViewerEvent::Resized(size) => {
                debug!(width = size.width, height = size.height, "window resized");
                Flow::Redraw
            }
            ViewerEvent::Quit => {
                debug!("quit requested");
                Flow::Quit
            }
        }
    }

    /// Destination of the image for the given window size.
    pub fn placement(&self, window: Size) -> Placement {
        Placement::compute(&self.state, self.source, window)
    }
}
