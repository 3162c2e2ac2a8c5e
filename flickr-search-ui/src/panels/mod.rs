mod photo_detail_window;
mod top_panel;

pub use photo_detail_window::PhotoDetailWindow;
pub use top_panel::TopPanel;
