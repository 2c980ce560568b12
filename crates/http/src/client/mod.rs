//! PG manager API client
//!
//! Every request goes through [`ApiClient::request`], which reads the
//! persisted token at construction time and attaches it as a bearer
//! `Authorization` header. There is no retry or timeout policy.

pub mod auth;
pub mod error;
pub mod properties;

use crate::config::ApiConfig;
use crate::storage::{MemoryStorage, TokenStorage};
use error::ClientError;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;

/// API client bound to a fixed base URL
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    storage: Rc<dyn TokenStorage>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(
        base_url: impl Into<String>,
        storage: Rc<dyn TokenStorage>,
    ) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).storage(storage).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Storage the interceptor reads the token from
    pub fn storage(&self) -> &Rc<dyn TokenStorage> {
        &self.storage
    }

    /// Create a request builder, attaching the persisted token if there is one.
    ///
    /// A storage failure is returned as-is and nothing is sent.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(method, url);

        let token = self.storage.token().map_err(|e| {
            tracing::warn!(path, error = %e, "Could not read token for request");
            e
        })?;

        match token {
            Some(token) => {
                tracing::debug!(path, "Attaching bearer token");
                Ok(request.header(header::AUTHORIZATION, format!("Bearer {token}")))
            }
            None => Ok(request),
        }
    }

    /// Execute a request and handle common errors.
    ///
    /// A success body that is not the expected JSON is a
    /// [`ClientError::Serialization`].
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    /// POST `body` as JSON to `path` and decode the JSON reply
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.execute(request).await
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    storage: Option<Rc<dyn TokenStorage>>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the storage the token is read from
    pub fn storage(mut self, storage: Rc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }

        let client = ClientBuilder::new().user_agent(ApiConfig::USER_AGENT).build()?;

        let storage = self
            .storage
            .unwrap_or_else(|| Rc::new(MemoryStorage::new()));

        Ok(ApiClient {
            client,
            base_url,
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = ApiClient::builder()
            .base_url("http://localhost:8080/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn request_without_token_has_no_authorization() {
        let client = ApiClient::new("http://localhost:8080/api", Rc::new(MemoryStorage::new()))
            .unwrap();
        let request = client
            .request(Method::GET, "/properties")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:8080/api/properties");
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn request_reads_token_at_send_time() {
        let storage = Rc::new(MemoryStorage::new());
        let client = ApiClient::new("http://localhost:8080/api", storage.clone()).unwrap();

        storage.set_token("late-token").unwrap();
        let request = client
            .request(Method::GET, "/properties")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer late-token"
        );
    }
}
