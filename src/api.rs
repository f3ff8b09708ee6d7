// API client module: a small blocking HTTP client for the public Dog CEO
// API. Every call is one GET; responses are JSON envelopes of the form
// `{"status": "success", "message": ...}`.

use crate::catalog::BreedCatalog;
use crate::error::FetchError;
use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to reach the API and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The three read-only operations the interactive loop needs.
///
/// Failures are returned as values, never panics: an `Err` from an image
/// fetch means "no image available" and the caller reports it and moves on.
pub trait DogApi {
    /// Full breed -> sub-breeds mapping.
    fn fetch_all_breeds(&self) -> Result<BreedCatalog, FetchError>;
    /// URL of a random image of `breed`.
    fn fetch_random_image(&self, breed: &str) -> Result<String, FetchError>;
    /// URL of a random image of `sub_breed` under `breed`.
    fn fetch_random_sub_breed_image(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<String, FetchError>;
}

/// Response envelope shared by all endpoints. `message` is kept as a raw
/// JSON value because on failure it holds an error string instead of data.
#[derive(Deserialize, Debug)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    message: serde_json::Value,
}

/// Blocking client holding a reqwest client and the API base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Client for the public Dog CEO API with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid API base URL '{}'", config.base_url))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, base_url })
    }

    /// Append path segments to the base URL. Segments are percent-encoded,
    /// so user-typed names can never escape their path position.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET `url`, check the HTTP status and the envelope status, then decode
    /// the `message` field into `T`.
    fn get_message<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!("GET {url}");
        let res = self
            .client
            .get(url.clone())
            .send()
            .map_err(FetchError::Network)?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().map_err(FetchError::Network)?;
        let envelope: ApiResponse = serde_json::from_str(&body).map_err(FetchError::Malformed)?;
        if envelope.status != "success" {
            return Err(FetchError::Unsuccessful(envelope.status));
        }
        serde_json::from_value(envelope.message).map_err(FetchError::Malformed)
    }

    fn fetch_image(&self, url: Url) -> Result<String, FetchError> {
        let image: String = self.get_message(url)?;
        if image.starts_with("http") {
            Ok(image)
        } else {
            Err(FetchError::NotAnImageUrl(image))
        }
    }
}

impl DogApi for ApiClient {
    fn fetch_all_breeds(&self) -> Result<BreedCatalog, FetchError> {
        let url = self.endpoint(&["breeds", "list", "all"]);
        let result = self.get_message::<BreedCatalog>(url);
        match &result {
            Ok(catalog) => debug!("fetched {} breeds", catalog.len()),
            Err(e) => warn!("breed list unavailable: {e:?}"),
        }
        result
    }

    fn fetch_random_image(&self, breed: &str) -> Result<String, FetchError> {
        let url = self.endpoint(&["breed", breed, "images", "random"]);
        let result = self.fetch_image(url);
        if let Err(e) = &result {
            warn!("no image for breed '{breed}': {e:?}");
        }
        result
    }

    fn fetch_random_sub_breed_image(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<String, FetchError> {
        let url = self.endpoint(&["breed", breed, sub_breed, "images", "random"]);
        let result = self.fetch_image(url);
        if let Err(e) = &result {
            warn!("no image for sub-breed '{breed}/{sub_breed}': {e:?}");
        }
        result
    }
}
