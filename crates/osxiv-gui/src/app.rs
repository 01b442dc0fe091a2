use osxiv_core::error::Result;
use osxiv_core::geometry::Size;
use osxiv_core::io::decode::DecodedImage;
use osxiv_core::view::{Flow, Viewer, ViewerEvent};
use tracing::{debug, info};

use crate::convert::to_color_image;
use crate::input::collect_events;
use crate::viewport;

/// Application context: owns the texture and the view state for the
/// lifetime of the window. Dropping it releases the texture.
pub struct ViewerApp {
    viewer: Viewer,
    texture: egui::TextureHandle,
    /// Last window size seen by the painter, for resize detection.
    window_size: Option<Size>,
    /// Set once the window has been resized to half the monitor.
    initial_size_applied: bool,
}

impl ViewerApp {
    /// Upload the image as a texture. Images larger than the renderer's
    /// texture limit are downscaled first; geometry keeps using the
    /// decoded size.
    pub fn new(ctx: &egui::Context, image: DecodedImage) -> Result<Self> {
        let viewer = Viewer::new(image.size());

        let max_side = ctx.input(|i| i.max_texture_side);
        let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
        let image = image.fit_within(max_side)?;

        let texture = ctx.load_texture("image", to_color_image(&image), egui::TextureOptions::LINEAR);

        Ok(Self {
            viewer,
            texture,
            window_size: None,
            initial_size_applied: false,
        })
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn texture_id(&self) -> egui::TextureId {
        self.texture.id()
    }

    fn apply_initial_size(&mut self, ctx: &egui::Context) {
        if self.initial_size_applied {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };

        let screen = Size::new(monitor.x.round() as u32, monitor.y.round() as u32);
        let half = screen.halved();
        info!(
            screen_w = screen.width,
            screen_h = screen.height,
            width = half.width,
            height = half.height,
            "sizing window to half the display"
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            half.width as f32,
            half.height as f32,
        )));
        self.initial_size_applied = true;
    }

    /// Feed an event to the driver. Returns false once the app should close.
    fn dispatch(&mut self, ctx: &egui::Context, event: ViewerEvent) -> bool {
        match self.viewer.handle(event) {
            Flow::Redraw => true,
            Flow::Quit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                false
            }
        }
    }

    /// Drain this frame's input into the driver. Returns false once a quit
    /// was handled.
    pub fn handle_input(&mut self, ctx: &egui::Context) -> bool {
        for event in ctx.input(collect_events) {
            if !self.dispatch(ctx, event) {
                debug!("closing window");
                return false;
            }
        }
        true
    }

    /// Record the painter's window size, redrawing through the driver when
    /// it changed.
    pub fn observe_window(&mut self, ctx: &egui::Context, window: Size) {
        if self.window_size != Some(window) {
            self.window_size = Some(window);
            self.dispatch(ctx, ViewerEvent::Resized(window));
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_initial_size(ctx);

        if !self.handle_input(ctx) {
            return;
        }

        viewport::show(ctx, self);
    }
}
