//! Capabilities the host toolkit supplies to the search view-model.

use crate::{Bitmap, EdgeInsets, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// A progress indicator attached to an input widget for one submission.
pub trait Spinner {
    fn set_frame(&mut self, frame: Rect);
    fn start_animating(&mut self);
    fn stop_animating(&mut self);
    fn remove_from_parent(&mut self);
}

/// The text field the user submits search terms from.
pub trait InputWidget {
    type Spinner: Spinner;

    fn bounds(&self) -> Rect;
    /// Creates a spinner already inserted as a child of this widget.
    fn add_spinner(&mut self) -> Self::Spinner;
    fn clear_text(&mut self);
    fn resign_first_responder(&mut self);
}

pub trait GridWidget {
    /// Discard everything displayed and re-query the data source.
    fn reload_data(&mut self);
}

pub trait PhotoCell {
    /// Identifies the photo shown, so the host can cache per photo.
    fn set_photo_id(&mut self, photo_id: &str);
    fn set_background_color(&mut self, color: Color);
    fn set_image(&mut self, image: Option<&Bitmap>);
}

/// Structural questions the grid widget asks.
pub trait GridDataSource {
    fn number_of_sections(&self) -> usize;
    fn number_of_items(&self, section: usize) -> usize;
    fn configure_cell(&self, cell: &mut dyn PhotoCell, section: usize, item: usize);
}

/// Layout questions the grid widget asks.
pub trait GridLayoutDelegate {
    fn size_for_item(&self, viewport_width: f32, section: usize, item: usize) -> Size;
    fn inset_for_section(&self, section: usize) -> EdgeInsets;
    fn minimum_line_spacing(&self, section: usize) -> f32;
}
