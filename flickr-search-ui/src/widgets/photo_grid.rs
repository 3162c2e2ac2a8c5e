use crate::utils::{to_color32, to_color_image};
use flickr_search_core::{
    Bitmap, Color, GridDataSource, GridLayoutDelegate, GridWidget, PhotoCell, PhotoId, Size,
};
use std::collections;

type CellIndex = (usize, usize);

/// What the data source bound to one cell.
#[derive(Default)]
pub struct PhotoCellContents {
    pub photo_id: Option<PhotoId>,
    pub background: Option<Color>,
    pub image: Option<Bitmap>,
}

impl PhotoCell for PhotoCellContents {
    fn set_photo_id(&mut self, photo_id: &str) {
        self.photo_id = Some(photo_id.to_owned());
    }

    fn set_background_color(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn set_image(&mut self, image: Option<&Bitmap>) {
        self.image = image.cloned();
    }
}

/// Sections of square photo cells laid out by a [`GridLayoutDelegate`].
#[derive(Default)]
pub struct PhotoGrid {
    textures: collections::HashMap<PhotoId, egui::TextureHandle>,
    scroll_to_top: bool,
    reload_count: usize,
}

impl GridWidget for PhotoGrid {
    fn reload_data(&mut self) {
        self.scroll_to_top = true;
        self.reload_count += 1;
    }
}

impl PhotoGrid {
    pub fn reload_count(&self) -> usize {
        self.reload_count
    }

    /// Draws every section. Returns the cell the user clicked, if any.
    pub fn show<P>(&mut self, ui: &mut egui::Ui, presenter: &P) -> Option<CellIndex>
    where
        P: GridDataSource + GridLayoutDelegate,
    {
        let mut clicked = None;
        let mut scroll_area = egui::ScrollArea::vertical().auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_to_top) {
            scroll_area = scroll_area.vertical_scroll_offset(0.);
        }

        scroll_area.show(ui, |ui| {
            let viewport_width = ui.available_width();
            for section in 0..presenter.number_of_sections() {
                if let Some(index) = self.show_section(ui, presenter, section, viewport_width) {
                    clicked = Some(index);
                }
            }
        });

        clicked
    }

    fn show_section<P>(
        &mut self,
        ui: &mut egui::Ui,
        presenter: &P,
        section: usize,
        viewport_width: f32,
    ) -> Option<CellIndex>
    where
        P: GridDataSource + GridLayoutDelegate,
    {
        let item_count = presenter.number_of_items(section);
        let insets = presenter.inset_for_section(section);
        let line_spacing = presenter.minimum_line_spacing(section);
        let content_width = (viewport_width - insets.left - insets.right).max(0.);
        let mut clicked = None;

        egui::Frame::none()
            .inner_margin(egui::Margin {
                left: insets.left,
                right: insets.right,
                top: insets.top,
                bottom: insets.bottom,
            })
            .show(ui, |ui| {
                ui.set_width(content_width);
                ui.spacing_mut().item_spacing = egui::vec2(line_spacing, line_spacing);
                if item_count == 0 {
                    return;
                }

                let first_size = presenter.size_for_item(viewport_width, section, 0);
                let columns = columns_that_fit(content_width, first_size.width, line_spacing);

                for row_start in (0..item_count).step_by(columns) {
                    ui.horizontal(|ui| {
                        for item in row_start..(row_start + columns).min(item_count) {
                            let size = presenter.size_for_item(viewport_width, section, item);
                            let mut cell = PhotoCellContents::default();
                            presenter.configure_cell(&mut cell, section, item);
                            if self.paint_cell(ui, &cell, size).clicked() {
                                clicked = Some((section, item));
                            }
                        }
                    });
                }
            });

        clicked
    }

    fn paint_cell(
        &mut self,
        ui: &mut egui::Ui,
        cell: &PhotoCellContents,
        size: Size,
    ) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(size.width, size.height), egui::Sense::click());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        if let Some(background) = cell.background {
            ui.painter().rect_filled(rect, 0., to_color32(background));
        }
        if let (Some(photo_id), Some(image)) = (&cell.photo_id, &cell.image) {
            let texture = self.textures.entry(photo_id.clone()).or_insert_with(|| {
                tracing::debug!("Uploading thumbnail texture for photo {}", photo_id);
                ui.ctx().load_texture(
                    format!("thumbnail-{photo_id}"),
                    to_color_image(image),
                    egui::TextureOptions::LINEAR,
                )
            });
            egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                .paint_at(ui, rect);
        }
        response
    }
}

/// How many cells of width `edge` separated by `spacing` fit across
/// `content_width`. Never less than one.
pub fn columns_that_fit(content_width: f32, edge: f32, spacing: f32) -> usize {
    if edge <= 0. {
        return 1;
    }
    // Tolerate rounding when the cells exactly fill the row.
    let columns = ((content_width + spacing) / (edge + spacing) + 1e-3).floor();
    columns.max(1.) as usize
}
