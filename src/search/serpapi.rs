//! SerpApi client.

use async_trait::async_trait;
use log::debug;

use crate::config::{DEFAULT_ENDPOINT, DEFAULT_ENGINE};
use crate::error_handling::{categorize_reqwest_error, truncate_error_message, SearchError};

use super::types::{PageRequest, SearchPage, SerpResponse};
use super::SearchProvider;

/// `SearchProvider` backed by the SerpApi HTTP endpoint.
///
/// The API key is passed in at construction; nothing is read from the
/// environment here.
#[derive(Clone)]
pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    engine: String,
}

impl std::fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("endpoint", &self.endpoint)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl SerpApiClient {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    fn query_params(&self, request: &PageRequest<'_>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("engine", self.engine.clone()),
            ("q", request.keyword.to_string()),
            ("hl", request.language.to_string()),
            ("gl", request.country.to_string()),
            ("num", request.count.to_string()),
            ("start", request.offset.to_string()),
        ];
        if let Some(location) = request.location {
            params.push(("location", location.to_string()));
        }
        params.push(("api_key", self.api_key.clone()));
        params
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn fetch_page(&self, request: &PageRequest<'_>) -> Result<SearchPage, SearchError> {
        debug!(
            "GET {} q={:?} start={} num={}",
            self.endpoint, request.keyword, request.offset, request.count
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query_params(request))
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        parse_response(status, &body)
    }
}

/// Interprets a SerpApi response.
///
/// An `error` field wins over everything else, including a success status,
/// so the message SerpApi sends with a 401 (bad key) or 429 (quota) reaches
/// the user verbatim.
pub fn parse_response(status: u16, body: &str) -> Result<SearchPage, SearchError> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<SerpResponse>(body) {
        Ok(parsed) if parsed.error.is_some() => {
            let message = parsed.error_message().unwrap_or_default();
            Err(SearchError::Api(truncate_error_message(&message)))
        }
        Ok(_) if !success => Err(SearchError::Status(status)),
        Ok(parsed) => Ok(SearchPage {
            results: parsed.organic_results,
        }),
        Err(_) if !success => Err(SearchError::Status(status)),
        Err(e) => Err(SearchError::Decode(e.to_string())),
    }
}
