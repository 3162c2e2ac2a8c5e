use actix::prelude::*;
use flickr_search_core::{AppMessage, Photo, PhotoService};
use std::sync;
use tokio::sync::mpsc::UnboundedSender;

pub struct ImageLoaderActor {
    pub tx_app_message: UnboundedSender<AppMessage>,
    pub service: sync::Arc<dyn PhotoService>,
    pub egui_ctx: egui::Context,
}

impl ImageLoaderActor {
    pub fn new(
        tx_app_message: UnboundedSender<AppMessage>,
        service: sync::Arc<dyn PhotoService>,
        egui_ctx: egui::Context,
    ) -> Self {
        Self {
            tx_app_message,
            service,
            egui_ctx,
        }
    }
}

impl Actor for ImageLoaderActor {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct LoadLargeImageMessage {
    pub photo: Photo,
}

impl Handler<LoadLargeImageMessage> for ImageLoaderActor {
    type Result = ResponseFuture<()>;

    fn handle(&mut self, msg: LoadLargeImageMessage, _ctx: &mut Self::Context) -> Self::Result {
        let tx_app_message = self.tx_app_message.clone();
        let egui_ctx = self.egui_ctx.clone();
        let photo_id = msg.photo.id.clone();
        let load = self.service.load_large_image(&msg.photo);

        Box::pin(async move {
            tracing::info!("Fetching large image for photo {}...", photo_id);
            let message = match load.await {
                Ok(image) => {
                    tracing::info!("Fetched large image for photo {}", photo_id);
                    AppMessage::LargeImageLoaded { photo_id, image }
                }
                Err(e) => {
                    tracing::error!("Could not load large image for photo {}: {}", photo_id, e);
                    AppMessage::LargeImageFailed {
                        photo_id,
                        error: e.to_string(),
                    }
                }
            };
            if let Err(e) = tx_app_message.send(message) {
                tracing::error!("Failed to send large image: {}", e);
            }
            egui_ctx.request_repaint();
        })
    }
}
