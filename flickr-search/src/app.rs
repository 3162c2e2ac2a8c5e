use flickr_search_actors::{ImageLoaderActor, LoadLargeImageMessage, PhotoSearchHandle};
use flickr_search_core::{AppMessage, FlowLayout, Photo, SearchController};
use flickr_search_ui::{widgets::search_field::SpinnerOverlay, LargeImage, Ui, UiEvent};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::image_store::ImageStore;

pub(crate) struct App {
    pub rx_app_message: UnboundedReceiver<AppMessage>,
    pub image_loader_addr: actix::Addr<ImageLoaderActor>,
    pub controller: SearchController<PhotoSearchHandle, SpinnerOverlay>,
    pub layout: FlowLayout,
    pub image_store: ImageStore,
    pub selected_photo: Option<Photo>,
    pub ui: Ui,
}

impl App {
    pub fn new(
        rx_app_message: UnboundedReceiver<AppMessage>,
        photo_search: PhotoSearchHandle,
        image_loader_addr: actix::Addr<ImageLoaderActor>,
    ) -> Self {
        Self {
            rx_app_message,
            image_loader_addr,
            controller: SearchController::new(photo_search),
            layout: FlowLayout::default(),
            image_store: ImageStore::default(),
            selected_photo: None,
            ui: Ui::new(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        let presenter = self.controller.presenter(&self.layout);
        let selected_photo = self
            .selected_photo
            .as_ref()
            .map(|photo| (photo, large_image(&self.image_store, photo)));
        let events = self.ui.update(ctx, &presenter, selected_photo);

        for event in events {
            self.handle_ui_event(event);
        }
    }
}

impl App {
    /// Applies everything the background actors posted since the last frame.
    fn process_messages(&mut self) {
        while let Ok(message) = self.rx_app_message.try_recv() {
            match message {
                AppMessage::SearchCompleted {
                    submission_id,
                    result,
                } => {
                    self.controller.on_search_completed(
                        submission_id,
                        result,
                        &mut self.ui.photo_grid,
                    );
                }
                AppMessage::LargeImageLoaded { photo_id, image } => {
                    self.image_store.insert(photo_id, image);
                }
                AppMessage::LargeImageFailed { photo_id, error } => {
                    self.image_store.insert_failure(photo_id, error);
                }
            }
        }
    }

    fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Submitted(text) => {
                self.controller.on_submit(&mut self.ui.search_field, &text);
            }
            UiEvent::PhotoSelected { section, item } => {
                let photo = self.controller.history().photo(section, item).clone();
                self.image_store.clear_failure(&photo.id);
                if photo.large_image.is_none() && self.image_store.load(&photo.id).is_none() {
                    if let Err(e) = self.image_loader_addr.try_send(LoadLargeImageMessage {
                        photo: photo.clone(),
                    }) {
                        tracing::warn!("Failed to send LoadLargeImageMessage: {}", e);
                        self.image_store.insert_failure(photo.id.clone(), e.to_string());
                    }
                }
                self.selected_photo = Some(photo);
            }
            UiEvent::DetailClosed => {
                self.selected_photo = None;
            }
        }
    }
}

fn large_image<'a>(image_store: &'a ImageStore, photo: &'a Photo) -> LargeImage<'a> {
    if let Some(image) = photo.large_image.as_ref().or(image_store.load(&photo.id)) {
        LargeImage::Loaded(image)
    } else if let Some(error) = image_store.failure(&photo.id) {
        LargeImage::Failed(error)
    } else {
        LargeImage::Loading
    }
}
