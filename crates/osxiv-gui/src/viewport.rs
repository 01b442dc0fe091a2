use osxiv_core::geometry::{DestRect, Size};
use tracing::warn;

use crate::app::ViewerApp;

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let window = window_size(rect);

            app.observe_window(ctx, window);

            let placement = app.viewer().placement(window);
            if !placement.is_finite() {
                warn!(?placement, state = ?app.viewer().state(), "skipping degenerate placement");
                return;
            }

            let dest = placement.to_dest_rect();
            draw_image(ui, app.texture_id(), to_screen_rect(rect, &dest));
        });
}

fn window_size(rect: egui::Rect) -> Size {
    Size::new(
        rect.width().max(0.0).round() as u32,
        rect.height().max(0.0).round() as u32,
    )
}

fn to_screen_rect(rect: egui::Rect, dest: &DestRect) -> egui::Rect {
    egui::Rect::from_min_size(
        rect.min + egui::vec2(dest.x as f32, dest.y as f32),
        egui::vec2(dest.w as f32, dest.h as f32),
    )
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
