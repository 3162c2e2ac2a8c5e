use actix::prelude::*;
use flickr_fetch::Flickr;
use flickr_search_actors::{ImageLoaderActor, PhotoSearchActor, PhotoSearchHandle};
use flickr_search_config::Config;
use flickr_search_core::{AppMessage, PhotoService};
use std::{error, sync};

mod app;
mod image_store;

#[actix::main]
async fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt::init();

    let cfg = Config::load()?;

    let api_key = cfg.api_key();
    if api_key.is_none() {
        tracing::warn!(
            "No Flickr API key found. Set FLICKR_API_KEY or add api_key to the configuration file"
        );
    }

    let service: sync::Arc<dyn PhotoService> =
        sync::Arc::new(Flickr::new(api_key.unwrap_or_default()).with_per_page(cfg.per_page));

    let (tx_app_message, rx_app_message) = tokio::sync::mpsc::unbounded_channel::<AppMessage>();

    eframe::run_native(
        "Flickr Search",
        eframe::NativeOptions::default(),
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();

            let photo_search_addr = PhotoSearchActor::start_in_arbiter(&Arbiter::new().handle(), {
                let tx_app_message = tx_app_message.clone();
                let service = service.clone();
                let egui_ctx = egui_ctx.clone();
                move |_ctx| PhotoSearchActor::new(tx_app_message, service, egui_ctx)
            });

            let image_loader_addr =
                ImageLoaderActor::start_in_arbiter(&Arbiter::new().handle(), move |_ctx| {
                    ImageLoaderActor::new(tx_app_message, service, egui_ctx)
                });

            Ok(Box::new(app::App::new(
                rx_app_message,
                PhotoSearchHandle(photo_search_addr),
                image_loader_addr,
            )))
        }),
    )?;

    Ok(())
}
