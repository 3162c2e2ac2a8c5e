pub mod panels;

pub mod widgets;

pub mod utils;

use crate::{
    panels::{PhotoDetailWindow, TopPanel},
    widgets::{photo_grid::PhotoGrid, search_field::SearchField},
};

use eframe::egui;
use flickr_search_core::{Bitmap, GridDataSource, GridLayoutDelegate, Photo};

/// Something the user did during a frame that the app has to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Submitted(String),
    PhotoSelected { section: usize, item: usize },
    DetailClosed,
}

/// Where the selected photo's large image is at.
#[derive(Debug, Clone, Copy)]
pub enum LargeImage<'a> {
    Loading,
    Loaded(&'a Bitmap),
    Failed(&'a str),
}

#[derive(Default)]
struct AppPanels {
    top: TopPanel,
    photo_detail: PhotoDetailWindow,
}

#[derive(Default)]
pub struct Ui {
    panels: AppPanels,
    pub search_field: SearchField,
    pub photo_grid: PhotoGrid,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<P>(
        &mut self,
        ctx: &egui::Context,
        presenter: &P,
        selected_photo: Option<(&Photo, LargeImage<'_>)>,
    ) -> Vec<UiEvent>
    where
        P: GridDataSource + GridLayoutDelegate,
    {
        let mut events = vec![];

        if let Some(text) =
            self.panels
                .top
                .show(ctx, &mut self.search_field, presenter.number_of_sections())
        {
            events.push(UiEvent::Submitted(text));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if presenter.number_of_sections() == 0 {
                ui.centered_and_justified(|ui| {
                    ui.label("Type a search term and press return");
                });
                return;
            }
            if let Some((section, item)) = self.photo_grid.show(ui, presenter) {
                events.push(UiEvent::PhotoSelected { section, item });
            }
        });

        if let Some((photo, large_image)) = selected_photo {
            if !self.panels.photo_detail.show(ctx, photo, large_image) {
                events.push(UiEvent::DetailClosed);
            }
        }

        events
    }
}
