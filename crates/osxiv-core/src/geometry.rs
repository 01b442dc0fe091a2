use tracing::debug;

use crate::view::ViewState;

/// Width/height pair in pixels, used for both the source image and the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Half of each extent, rounded down. Used for the initial window size.
    pub fn halved(&self) -> Size {
        Size::new(self.width / 2, self.height / 2)
    }
}

/// Destination rectangle in integer window pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DestRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Where the image lands in the window for one frame.
///
/// Computed in `f64` so the aspect ratio is exact; [`Placement::to_dest_rect`]
/// gives the integer rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Map the view state onto a window.
    ///
    /// The window size is scaled by the zoom factor, then the larger
    /// dimension is shrunk to restore the source aspect ratio. The result is
    /// centered and finally shifted by the pan offsets, which are fractions
    /// of the destination size.
    ///
    /// `source.height` must be non-zero and `view.zoom` positive.
    pub fn compute(view: &ViewState, source: Size, window: Size) -> Self {
        debug_assert!(source.height > 0, "source image has zero height");

        let screen_w = window.width as f64;
        let screen_h = window.height as f64;

        let zoomed_w = screen_w * view.zoom;
        let zoomed_h = screen_h * view.zoom;

        // Undo the stretch-to-fill
        let ratio = source.aspect_ratio();
        let (width, height) = if zoomed_h >= zoomed_w / ratio {
            (zoomed_w, zoomed_w / ratio)
        } else {
            (ratio * zoomed_h, zoomed_h)
        };

        let centered_x = (screen_w - width) / 2.0;
        let centered_y = (screen_h - height) / 2.0;

        let placement = Self {
            x: centered_x - view.pan_x * width,
            y: centered_y - view.pan_y * height,
            width,
            height,
        };

        debug!(
            src_w = source.width,
            src_h = source.height,
            screen_w = window.width,
            screen_h = window.height,
            zoom = view.zoom,
            pan_x = view.pan_x,
            pan_y = view.pan_y,
            ?placement,
            "computed placement"
        );

        placement
    }

    /// Truncate toward zero into integer pixels.
    pub fn to_dest_rect(&self) -> DestRect {
        DestRect {
            x: self.x as i32,
            y: self.y as i32,
            w: self.width as i32,
            h: self.height as i32,
        }
    }

    /// False when a degenerate view state (zero zoom) produced NaN or
    /// infinite coordinates.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}
