use reqwest::{header::CONTENT_TYPE, Client, Method, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::errors::ApiError;

/// Thin JSON-over-HTTP wrapper rooted at a base URL.
///
/// Every request carries `Content-Type: application/json`. Any non-2xx status
/// becomes [`ApiError::Status`]; success bodies are decoded as JSON.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, endpoint, None).await?;
        decode(response).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        let response = self.send(Method::POST, endpoint, Some(payload)).await?;
        decode(response).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        let response = self.send(Method::PUT, endpoint, Some(payload)).await?;
        decode(response).await
    }

    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        let response = self.send(Method::PATCH, endpoint, Some(payload)).await?;
        decode(response).await
    }

    /// Issues a DELETE. The success body, if any, is discarded.
    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, endpoint, None).await?;
        Ok(())
    }

    fn url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, endpoint);
        Url::parse(&raw).map_err(|err| ApiError::InvalidUrl(format!("{raw}: {err}")))
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response, ApiError> {
        let url = self.url(endpoint)?;
        debug!(%method, %url, "sending API request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|err| {
            warn!(%method, %url, error = %err, "API request could not be sent");
            ApiError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "API request failed");
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
