use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::server::{
    catalog::{
        config::CatalogConfig,
        model::{CatalogCharacter, CatalogCharacterPage},
        CatalogClient,
    },
    error::catalog::CatalogError,
};

/// HTTP implementation of [`CatalogClient`] built on a pooled [`reqwest::Client`].
///
/// Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Creates a new [`HttpCatalogClient`] from its configuration
    ///
    /// # Returns
    /// - `Ok(HttpCatalogClient)` - client ready to issue requests
    /// - `Err(CatalogError::InvalidBaseUrl)` - base URL is not an absolute http(s) URL
    /// - `Err(CatalogError::Request)` - the underlying HTTP client could not be built
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| CatalogError::InvalidBaseUrl(config.base_url.clone()))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, CatalogError> {
        self.http.get(url).send().await.map_err(|err| {
            tracing::error!(error = %err, "Failed to make request to the character catalog");
            CatalogError::Request(err)
        })
    }

    /// Returns the response body when the status is a success, otherwise a
    /// [`CatalogError::Status`] carrying the status code and body text
    async fn read_success(response: reqwest::Response) -> Result<Vec<u8>, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());

            tracing::error!(
                status_code = status.as_u16(),
                response_body = %body,
                "Character catalog returned non-success status"
            );

            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, CatalogError> {
        serde_json::from_slice(body).map_err(|err| {
            tracing::error!(error = %err, "Failed to decode character catalog response");
            CatalogError::Decode(err)
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn find_by_name(&self, name: &str) -> Result<Option<CatalogCharacter>, CatalogError> {
        tracing::info!(
            target_name = %name,
            "Fetching all characters from the character catalog to find by name"
        );

        let url = self.endpoint(&["characters"])?;
        let response = self.get(url).await?;
        let body = Self::read_success(response).await?;
        let page: CatalogCharacterPage = Self::decode(&body)?;

        match page.items.into_iter().find(|c| c.name == name) {
            Some(character) => {
                tracing::info!(
                    character_name = %name,
                    character_id = %character.id,
                    "Character found in the character catalog by name"
                );

                Ok(Some(character))
            }
            None => {
                tracing::info!(
                    character_name = %name,
                    "Character not found in the character catalog by name"
                );

                Ok(None)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogCharacter>, CatalogError> {
        tracing::info!(character_id = %id, "Fetching character by ID from the character catalog");

        let url = self.endpoint(&["characters", id])?;
        let response = self.get(url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(character_id = %id, "Character not found in the character catalog by ID");
            return Ok(None);
        }

        let body = Self::read_success(response).await?;
        let character: CatalogCharacter = Self::decode(&body)?;

        tracing::info!(
            character_id = %character.id,
            character_name = %character.name,
            "Character found in the character catalog by ID"
        );

        Ok(Some(character))
    }
}
