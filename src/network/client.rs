use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::timeout;

use super::api::MovieApi;
use super::error::NetworkError;
use crate::config::{ApiConfig, SecureString};
use crate::movies::{Movie, MovieId, MovieListPage, ReviewListPage};

/// Error body TMDB returns alongside non-success statuses.
#[derive(Deserialize)]
struct TmdbStatus {
    status_message: String,
}

/// [`MovieApi`] over the TMDB v3 REST API.
pub struct TmdbClient {
    client: Client,
    base_url: Url,
    api_key: Option<SecureString>,
    language: String,
    request_timeout: Duration,
}

impl TmdbClient {
    /// Build a client from configuration.
    ///
    /// The API key is resolved once, here.
    pub fn new(config: &ApiConfig) -> Result<Self, NetworkError> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            NetworkError::Connection(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(NetworkError::Connection(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| NetworkError::Connection(e.to_string()))?;

        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            tracing::warn!("no TMDB API key configured; requests will likely be rejected");
        }

        Ok(Self {
            client,
            base_url,
            api_key,
            language: config.language.clone(),
            request_timeout: config.timeout(),
        })
    }

    fn endpoint(&self, segments: &[&str], page: Option<u32>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        {
            let mut query = url.query_pairs_mut();
            if let Some(key) = &self.api_key {
                query.append_pair("api_key", key.expose());
            }
            query.append_pair("language", &self.language);
            if let Some(page) = page {
                query.append_pair("page", &page.to_string());
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, NetworkError> {
        let path = url.path().to_string();
        tracing::debug!(endpoint = %path, "requesting");

        let result = match timeout(self.request_timeout, self.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(NetworkError::RequestTimeout {
                duration: self.request_timeout.as_secs(),
            }),
        };

        if let Err(err) = &result {
            tracing::debug!(endpoint = %path, kind = err.kind(), error = %err, "request failed");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, NetworkError> {
        // without_url keeps the api_key query parameter out of error text.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NetworkError::Connection(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Connection(e.without_url().to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<TmdbStatus>(&body)
                .ok()
                .map(|s| s.status_message);
            return Err(NetworkError::from_status(status.as_u16(), message));
        }

        serde_json::from_slice(&body).map_err(|e| NetworkError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn get_popular_movies(&self) -> Result<MovieListPage, NetworkError> {
        self.get_json(self.endpoint(&["movie", "popular"], Some(1)))
            .await
    }

    async fn get_top_rated_movies(&self) -> Result<MovieListPage, NetworkError> {
        self.get_json(self.endpoint(&["movie", "top_rated"], Some(1)))
            .await
    }

    async fn get_movie_detail(&self, id: MovieId) -> Result<Movie, NetworkError> {
        let id = id.to_string();
        self.get_json(self.endpoint(&["movie", &id], None)).await
    }

    async fn get_reviews(&self, id: MovieId) -> Result<ReviewListPage, NetworkError> {
        let id = id.to_string();
        self.get_json(self.endpoint(&["movie", &id, "reviews"], Some(1)))
            .await
    }
}
