use actix::prelude::*;
use flickr_search_core::{AppMessage, PhotoService, SearchDispatcher, SearchError, SubmissionId};
use std::sync;
use tokio::sync::mpsc::UnboundedSender;

/// Runs searches against a [`PhotoService`] and posts each outcome back to
/// the UI thread. Searches run concurrently and report in completion order.
pub struct PhotoSearchActor {
    pub tx_app_message: UnboundedSender<AppMessage>,
    pub service: sync::Arc<dyn PhotoService>,
    pub egui_ctx: egui::Context,
}

impl PhotoSearchActor {
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

impl Actor for PhotoSearchActor {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct SearchMessage {
    pub submission_id: SubmissionId,
    pub term: String,
}

impl Handler<SearchMessage> for PhotoSearchActor {
    type Result = ResponseFuture<()>;

    fn handle(&mut self, msg: SearchMessage, _ctx: &mut Self::Context) -> Self::Result {
        let tx_app_message = self.tx_app_message.clone();
        let egui_ctx = self.egui_ctx.clone();
        let search = self.service.search(&msg.term);
        let submission_id = msg.submission_id;

        Box::pin(async move {
            let result = search.await;
            if let Err(e) = &result {
                tracing::debug!("Search {} failed: {}", submission_id, e);
            }
            if let Err(e) = tx_app_message.send(AppMessage::SearchCompleted {
                submission_id,
                result,
            }) {
                tracing::error!("Failed to send search result: {}", e);
            }
            egui_ctx.request_repaint();
        })
    }
}

/// Dispatches searches to a running [`PhotoSearchActor`].
#[derive(Clone)]
pub struct PhotoSearchHandle(pub Addr<PhotoSearchActor>);

impl SearchDispatcher for PhotoSearchHandle {
    fn dispatch(&mut self, submission_id: SubmissionId, term: String) -> Result<(), SearchError> {
        self.0
            .try_send(SearchMessage {
                submission_id,
                term,
            })
            .map_err(|e| SearchError::from(format!("search actor unavailable: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flickr_search_core::{Bitmap, Photo, SearchError, SearchResults};
    use futures::future::{BoxFuture, FutureExt};
    use std::time::Duration;

    /// Answers every term with one photo, except `err`, which fails. Terms
    /// starting with `slow` take a while.
    struct InMemoryService;

    impl PhotoService for InMemoryService {
        fn search(&self, term: &str) -> BoxFuture<'static, Result<SearchResults, SearchError>> {
            let term = term.to_owned();
            async move {
                if term.starts_with("slow") {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
                if term == "err" {
                    return Err(SearchError::from("service unavailable"));
                }
                Ok(SearchResults::new(
                    term.clone(),
                    vec![Photo::new(format!("{term}-1"), term.clone())],
                ))
            }
            .boxed()
        }

        fn load_large_image(
            &self,
            _photo: &Photo,
        ) -> BoxFuture<'static, Result<Bitmap, SearchError>> {
            async { Err(SearchError::from("not supported")) }.boxed()
        }
    }

    fn start() -> (
        PhotoSearchHandle,
        tokio::sync::mpsc::UnboundedReceiver<AppMessage>,
    ) {
        let (tx_app_message, rx_app_message) = tokio::sync::mpsc::unbounded_channel();
        let addr = PhotoSearchActor::new(
            tx_app_message,
            sync::Arc::new(InMemoryService),
            egui::Context::default(),
        )
        .start();
        (PhotoSearchHandle(addr), rx_app_message)
    }

    #[actix::test]
    async fn test_search_result_is_posted_back() {
        let (mut handle, mut rx_app_message) = start();
        handle.dispatch(7, "cats".to_string()).unwrap();

        match rx_app_message.recv().await.unwrap() {
            AppMessage::SearchCompleted {
                submission_id,
                result,
            } => {
                assert_eq!(submission_id, 7);
                let results = result.unwrap();
                assert_eq!(results.search_term, "cats");
                assert_eq!(results.search_results.len(), 1);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[actix::test]
    async fn test_search_failure_is_posted_back() {
        let (mut handle, mut rx_app_message) = start();
        handle.dispatch(1, "err".to_string()).unwrap();

        match rx_app_message.recv().await.unwrap() {
            AppMessage::SearchCompleted {
                submission_id,
                result,
            } => {
                assert_eq!(submission_id, 1);
                assert_eq!(result.unwrap_err().to_string(), "service unavailable");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[actix::test]
    async fn test_results_arrive_in_completion_order() {
        let (mut handle, mut rx_app_message) = start();
        handle.dispatch(0, "slow a".to_string()).unwrap();
        handle.dispatch(1, "b".to_string()).unwrap();

        let mut order = vec![];
        for _ in 0..2 {
            if let Some(AppMessage::SearchCompleted { submission_id, .. }) =
                rx_app_message.recv().await
            {
                order.push(submission_id);
            }
        }
        assert_eq!(order, [1, 0]);
    }

    #[actix::test]
    async fn test_dispatch_to_stopped_actor_fails() {
        let (tx_app_message, mut rx_app_message) = tokio::sync::mpsc::unbounded_channel();
        let addr = PhotoSearchActor::create(|ctx| {
            ctx.stop();
            PhotoSearchActor::new(
                tx_app_message,
                sync::Arc::new(InMemoryService),
                egui::Context::default(),
            )
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mut handle = PhotoSearchHandle(addr);
        assert!(handle.dispatch(0, "cats".to_string()).is_err());
        assert!(rx_app_message.try_recv().is_err());
    }
}
