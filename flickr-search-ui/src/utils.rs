//! Conversions between the view-model's geometry and egui's.

use flickr_search_core::{Bitmap, Color, Rect};

pub fn to_core_rect(rect: egui::Rect) -> Rect {
    Rect {
        x: rect.min.x,
        y: rect.min.y,
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn to_color_image(bitmap: &Bitmap) -> egui::ColorImage {
    let (width, height) = bitmap.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], bitmap.as_raw())
}
