use crate::{utils::to_color_image, LargeImage};
use flickr_search_core::{Bitmap, Photo, PhotoId};

const MAX_WIDTH: f32 = 800.;

#[derive(Default)]
pub struct PhotoDetailWindow {
    texture: Option<(PhotoId, egui::TextureHandle)>,
}

impl PhotoDetailWindow {
    /// Shows `photo` with its large image, or a spinner while it loads.
    /// Returns `false` once the user closes the window.
    pub fn show(&mut self, ctx: &egui::Context, photo: &Photo, large_image: LargeImage<'_>) -> bool {
        let mut open = true;
        let title = if photo.title.is_empty() {
            "Untitled"
        } else {
            photo.title.as_str()
        };

        egui::Window::new(title)
            .id(egui::Id::new("photo_detail_window"))
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| match large_image {
                LargeImage::Loaded(image) => {
                    let texture = self.texture_for(ctx, &photo.id, image);
                    let scale = (MAX_WIDTH / image.width() as f32).min(1.);
                    let size = egui::vec2(image.width() as f32, image.height() as f32) * scale;
                    ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                            .fit_to_exact_size(size),
                    );
                }
                LargeImage::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading");
                    });
                }
                LargeImage::Failed(error) => {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        format!("Could not load image: {error}"),
                    );
                }
            });

        if !open {
            self.texture = None;
        }
        open
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        photo_id: &PhotoId,
        image: &Bitmap,
    ) -> &egui::TextureHandle {
        if !matches!(&self.texture, Some((id, _)) if *id == *photo_id) {
            tracing::debug!("Uploading large image texture for photo {}", photo_id);
            let texture = ctx.load_texture(
                format!("large-{photo_id}"),
                to_color_image(image),
                egui::TextureOptions::LINEAR,
            );
            self.texture = Some((photo_id.clone(), texture));
        }
        &self.texture.as_ref().expect("texture was just set").1
    }
}
