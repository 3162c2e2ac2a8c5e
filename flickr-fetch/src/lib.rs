use flickr_search_core::{Bitmap, Photo, PhotoService, SearchError, SearchResults};
use futures::future::BoxFuture;
use std::sync::{self, OnceLock};

const FLICKR_REST_URL: &str = "https://api.flickr.com/services/rest/";

pub const DEFAULT_PER_PAGE: u32 = 20;

static FLICKR_RATE_LIMIT_AMOUNT_CELL: OnceLock<governor::Quota> = OnceLock::new();
pub fn flickr_rate_limit_amount() -> &'static governor::Quota {
    FLICKR_RATE_LIMIT_AMOUNT_CELL
        .get_or_init(|| governor::Quota::with_period(std::time::Duration::from_millis(100)).unwrap())
}

type RateLimiter = governor::RateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

static FLICKR_RATE_LIMITER_CELL: OnceLock<RateLimiter> = OnceLock::new();
pub fn flickr_rate_limiter() -> &'static RateLimiter {
    FLICKR_RATE_LIMITER_CELL
        .get_or_init(|| governor::RateLimiter::direct(*flickr_rate_limit_amount()))
}

#[derive(Debug, thiserror::Error)]
pub enum FlickrError {
    #[error("no Flickr API key configured")]
    MissingApiKey,
    #[error("Flickr API error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("unknown API response")]
    UnknownApiResponse,
    #[error("JSON deserialization error: {0} for response: {1}")]
    Serde(serde_json::Error, String),
    #[error("request error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("response is not an image (content type: {0:?})")]
    NotAnImage(Option<String>),
    #[error("could not decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Top level of a `flickr.photos.search` response.
#[derive(Debug, serde::Deserialize)]
pub struct SearchResponse {
    pub stat: String,
    pub photos: Option<PhotosPage>,
    pub code: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct PhotosPage {
    pub photo: Vec<FlickrPhoto>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct FlickrPhoto {
    pub id: String,
    pub farm: i64,
    pub server: String,
    pub secret: String,
    #[serde(default)]
    pub title: String,
}

impl FlickrPhoto {
    /// `size` is one of Flickr's size suffixes, e.g. `m` (240px) or `b` (1024px).
    pub fn image_url(&self, size: &str) -> String {
        format!(
            "https://farm{}.staticflickr.com/{}/{}_{}_{}.jpg",
            self.farm, self.server, self.id, self.secret, size
        )
    }

    pub fn thumbnail_url(&self) -> String {
        self.image_url("m")
    }

    pub fn large_image_url(&self) -> String {
        self.image_url("b")
    }
}

pub fn parse_search_response(response_text: &str) -> Result<Vec<FlickrPhoto>, FlickrError> {
    let response: SearchResponse = match serde_json::from_str(response_text) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(
                "Could not deserialize search response. Response: {:?}",
                response_text
            );
            return Err(FlickrError::Serde(e, response_text.to_owned()));
        }
    };

    match response.stat.as_str() {
        "ok" => response
            .photos
            .map(|photos| photos.photo)
            .ok_or(FlickrError::UnknownApiResponse),
        "fail" => Err(FlickrError::Api {
            code: response.code.unwrap_or_default(),
            message: response.message.unwrap_or_default(),
        }),
        _ => Err(FlickrError::UnknownApiResponse),
    }
}

#[derive(Clone, Debug)]
pub struct Flickr {
    api_key: String,
    per_page: u32,
    client: reqwest::Client,
}

impl Flickr {
    pub fn new(api_key: impl Into<String>) -> Self {
        Flickr {
            api_key: api_key.into(),
            per_page: DEFAULT_PER_PAGE,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Fetches the first page of photos matching `term`, thumbnails included.
    pub async fn search_flickr(&self, term: &str) -> Result<SearchResults, FlickrError> {
        if self.api_key.is_empty() {
            return Err(FlickrError::MissingApiKey);
        }

        tracing::info!("Searching Flickr for {:?}", term);
        flickr_rate_limiter().until_ready().await;
        let per_page = self.per_page.to_string();
        let response = self
            .client
            .get(FLICKR_REST_URL)
            .query(&[
                ("method", "flickr.photos.search"),
                ("api_key", self.api_key.as_str()),
                ("text", term),
                ("per_page", per_page.as_str()),
                ("format", "json"),
                ("nojsoncallback", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let response_text = response.text().await?;
        let flickr_photos = parse_search_response(&response_text)?;
        tracing::info!("Fetched {} photos. Loading thumbnails...", flickr_photos.len());

        let photos = futures::future::join_all(
            flickr_photos
                .into_iter()
                .map(|flickr_photo| self.load_photo(flickr_photo)),
        )
        .await;

        Ok(SearchResults::new(term, photos))
    }

    async fn load_photo(&self, flickr_photo: FlickrPhoto) -> Photo {
        let photo = Photo::new(flickr_photo.id.clone(), flickr_photo.title.clone())
            .with_large_image_url(flickr_photo.large_image_url());
        match self.fetch_image(&flickr_photo.thumbnail_url()).await {
            Ok(thumbnail) => photo.with_thumbnail(thumbnail),
            Err(e) => {
                tracing::warn!("Could not load thumbnail for photo {}: {}", flickr_photo.id, e);
                photo
            }
        }
    }

    pub async fn fetch_image(&self, url: &str) -> Result<Bitmap, FlickrError> {
        flickr_rate_limiter().until_ready().await;
        tracing::debug!("Fetching image {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        if !content_type
            .as_deref()
            .is_some_and(|value| value.starts_with("image/"))
        {
            return Err(FlickrError::NotAnImage(content_type));
        }

        let bytes = response.bytes().await?;
        decode_image(&bytes)
    }
}

pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, FlickrError> {
    Ok(sync::Arc::new(image::load_from_memory(bytes)?.to_rgba8()))
}

impl PhotoService for Flickr {
    fn search(&self, term: &str) -> BoxFuture<'static, Result<SearchResults, SearchError>> {
        let flickr = self.clone();
        let term = term.to_owned();
        Box::pin(async move { Ok::<_, SearchError>(flickr.search_flickr(&term).await?) })
    }

    fn load_large_image(&self, photo: &Photo) -> BoxFuture<'static, Result<Bitmap, SearchError>> {
        let flickr = self.clone();
        let url = photo.large_image_url.clone();
        let photo_id = photo.id.clone();
        Box::pin(async move {
            let url = url.ok_or_else(|| {
                SearchError::from(format!("photo {photo_id} has no large image"))
            })?;
            Ok::<_, SearchError>(flickr.fetch_image(&url).await?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_RESPONSE: &str = r#"{
        "photos": {
            "page": 1, "pages": 100, "perpage": 2, "total": 200,
            "photo": [
                {"id": "5216", "owner": "1@N00", "secret": "abc", "server": "4124",
                 "farm": 5, "title": "Cat on a mat", "ispublic": 1, "isfriend": 0, "isfamily": 0},
                {"id": "5217", "owner": "2@N00", "secret": "def", "server": "4125",
                 "farm": 3, "title": "", "ispublic": 1, "isfriend": 0, "isfamily": 0}
            ]
        },
        "stat": "ok"
    }"#;

    #[test]
    fn test_parse_ok_response() {
        let photos = parse_search_response(OK_RESPONSE).unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(
            photos[0],
            FlickrPhoto {
                id: "5216".into(),
                farm: 5,
                server: "4124".into(),
                secret: "abc".into(),
                title: "Cat on a mat".into(),
            }
        );
        assert_eq!(photos[1].title, "");
    }

    #[test]
    fn test_parse_ok_response_without_photos() {
        let response = r#"{"photos": {"page": 1, "photo": []}, "stat": "ok"}"#;
        assert!(parse_search_response(response).unwrap().is_empty());
    }

    #[test]
    fn test_parse_fail_response() {
        let response = r#"{"stat": "fail", "code": 100, "message": "Invalid API Key (Key has invalid format)"}"#;
        match parse_search_response(response) {
            Err(FlickrError::Api { code, message }) => {
                assert_eq!(code, 100);
                assert_eq!(message, "Invalid API Key (Key has invalid format)");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_stat() {
        let response = r#"{"stat": "maybe"}"#;
        assert!(matches!(
            parse_search_response(response),
            Err(FlickrError::UnknownApiResponse)
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_search_response("jsonFlickrApi({})"),
            Err(FlickrError::Serde(_, _))
        ));
    }

    #[test]
    fn test_image_urls() {
        let photo = FlickrPhoto {
            id: "5216".into(),
            farm: 5,
            server: "4124".into(),
            secret: "abc".into(),
            title: String::new(),
        };
        assert_eq!(
            photo.thumbnail_url(),
            "https://farm5.staticflickr.com/4124/5216_abc_m.jpg"
        );
        assert_eq!(
            photo.large_image_url(),
            "https://farm5.staticflickr.com/4124/5216_abc_b.jpg"
        );
    }

    #[test]
    fn test_decode_png() {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image::RgbaImage::new(3, 2))
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageOutputFormat::Png,
            )
            .unwrap();
        let bitmap = decode_image(&bytes).unwrap();
        assert_eq!(bitmap.dimensions(), (3, 2));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_image(b"not an image"),
            Err(FlickrError::Image(_))
        ));
    }

    #[tokio::test]
    async fn test_search_without_api_key_fails_fast() {
        let result = Flickr::new("").search_flickr("cats").await;
        assert!(matches!(result, Err(FlickrError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_large_image_requires_url() {
        let flickr = Flickr::new("key");
        let result = flickr.load_large_image(&Photo::new("1", "no url")).await;
        assert!(result.is_err());
    }
}
