use crate::{
    Color, EdgeInsets, FlowLayout, GridDataSource, GridLayoutDelegate, PhotoCell, SearchHistory,
    Size,
};

/// Answers the grid widget's questions from a read-only view of the history.
pub struct GridPresenter<'a> {
    history: &'a SearchHistory,
    layout: &'a FlowLayout,
}

impl<'a> GridPresenter<'a> {
    pub fn new(history: &'a SearchHistory, layout: &'a FlowLayout) -> Self {
        GridPresenter { history, layout }
    }

    pub fn history(&self) -> &'a SearchHistory {
        self.history
    }

    pub fn layout(&self) -> &'a FlowLayout {
        self.layout
    }
}

impl<'a> GridDataSource for GridPresenter<'a> {
    fn number_of_sections(&self) -> usize {
        self.history.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.history.item_count(section)
    }

    fn configure_cell(&self, cell: &mut dyn PhotoCell, section: usize, item: usize) {
        let photo = self.history.photo(section, item);
        cell.set_photo_id(&photo.id);
        cell.set_background_color(Color::WHITE);
        cell.set_image(photo.thumbnail.as_ref());
    }
}

impl<'a> GridLayoutDelegate for GridPresenter<'a> {
    fn size_for_item(&self, viewport_width: f32, _section: usize, _item: usize) -> Size {
        self.layout.item_size(viewport_width)
    }

    fn inset_for_section(&self, _section: usize) -> EdgeInsets {
        self.layout.section_insets()
    }

    fn minimum_line_spacing(&self, _section: usize) -> f32 {
        self.layout.minimum_line_spacing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bitmap, Photo, SearchResults};
    use std::sync;

    #[derive(Default)]
    struct RecordingCell {
        photo_id: Option<String>,
        background: Option<Color>,
        image: Option<Bitmap>,
        image_set: bool,
    }

    impl PhotoCell for RecordingCell {
        fn set_photo_id(&mut self, photo_id: &str) {
            self.photo_id = Some(photo_id.to_owned());
        }

        fn set_background_color(&mut self, color: Color) {
            self.background = Some(color);
        }

        fn set_image(&mut self, image: Option<&Bitmap>) {
            self.image_set = true;
            self.image = image.cloned();
        }
    }

    fn thumbnail() -> Bitmap {
        sync::Arc::new(image::RgbaImage::new(1, 1))
    }

    #[test]
    fn test_empty_history_has_no_sections() {
        let history = SearchHistory::new();
        let layout = FlowLayout::default();
        let presenter = GridPresenter::new(&history, &layout);
        assert_eq!(presenter.number_of_sections(), 0);
    }

    #[test]
    fn test_configure_cell_binds_thumbnail_on_white() {
        let p2_thumbnail = thumbnail();
        let mut history = SearchHistory::new();
        history.prepend(SearchResults::new(
            "cats",
            vec![
                Photo::new("p1", "P1").with_thumbnail(thumbnail()),
                Photo::new("p2", "P2").with_thumbnail(p2_thumbnail.clone()),
                Photo::new("p3", "P3").with_thumbnail(thumbnail()),
            ],
        ));
        let layout = FlowLayout::default();
        let presenter = GridPresenter::new(&history, &layout);

        let mut cell = RecordingCell::default();
        presenter.configure_cell(&mut cell, 0, 1);

        assert_eq!(cell.photo_id.as_deref(), Some("p2"));
        assert_eq!(cell.background, Some(Color::WHITE));
        assert!(sync::Arc::ptr_eq(cell.image.as_ref().unwrap(), &p2_thumbnail));
    }

    #[test]
    fn test_configure_cell_without_thumbnail_renders_empty() {
        let mut history = SearchHistory::new();
        history.prepend(SearchResults::new("cats", vec![Photo::new("p1", "P1")]));
        let layout = FlowLayout::default();
        let presenter = GridPresenter::new(&history, &layout);

        let mut cell = RecordingCell::default();
        presenter.configure_cell(&mut cell, 0, 0);

        assert!(cell.image_set);
        assert!(cell.image.is_none());
        assert_eq!(cell.background, Some(Color::WHITE));
    }

    #[test]
    fn test_layout_queries_use_flow_layout() {
        let history = SearchHistory::new();
        let layout = FlowLayout::default();
        let presenter = GridPresenter::new(&history, &layout);

        assert_eq!(presenter.size_for_item(380., 0, 0), Size::square(100.));
        assert_eq!(presenter.inset_for_section(0), layout.section_insets);
        assert_eq!(presenter.minimum_line_spacing(0), 20.);
    }

    #[test]
    fn test_item_counts_sum_to_total_photos() {
        let mut history = SearchHistory::new();
        history.prepend(SearchResults::new(
            "a",
            vec![Photo::new("1", ""), Photo::new("2", "")],
        ));
        history.prepend(SearchResults::new("b", vec![]));
        history.prepend(SearchResults::new("c", vec![Photo::new("3", "")]));
        let layout = FlowLayout::default();
        let presenter = GridPresenter::new(&history, &layout);

        let total: usize = (0..presenter.number_of_sections())
            .map(|s| presenter.number_of_items(s))
            .sum();
        assert_eq!(total, history.total_photos());
        assert_eq!(total, 3);
    }
}
