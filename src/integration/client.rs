//! Single-backend REST client.
//!
//! One [`RestClient`] per backend, all sharing one `reqwest::Client` so the
//! uniform timeout and connection pool are configured exactly once. Every
//! call is independent and stateless: no caching, no retries.

use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{self, IntegrationError};

pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Compose the base URL `http://host:port/<resource>` for one backend.
    pub fn new(http: reqwest::Client, host: &str, port: u16, resource: &str) -> Self {
        Self {
            http,
            base_url: format!("http://{}:{}/{}", host, port, resource),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a single entity by id (`GET <base>/{id}`).
    pub async fn get_one<T: DeserializeOwned>(&self, id: i32) -> Result<T, IntegrationError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("calling GET {}", url);

        let response = self.http.get(&url).send().await.map_err(error::transport)?;
        Self::decode(response).await
    }

    /// GET a list filtered by product id (`GET <base>?productId={id}`).
    ///
    /// Deliberately asymmetric to the other operations: list retrieval is
    /// best-effort enrichment, so every failure (non-2xx and transport
    /// alike) degrades to an empty list instead of propagating.
    pub async fn get_many<T: DeserializeOwned>(&self, product_id: i32) -> Vec<T> {
        let url = format!("{}?productId={}", self.base_url, product_id);
        debug!("calling GET {}", url);

        match self.try_get_many(&url).await {
            Ok(items) => items,
            Err(err) => {
                warn!(
                    "request to {} failed, returning an empty list: {}",
                    url, err
                );
                Vec::new()
            }
        }
    }

    async fn try_get_many<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Vec<T>, IntegrationError> {
        let response = self.http.get(url).send().await.map_err(error::transport)?;
        Self::decode(response).await
    }

    /// POST a new entity (`POST <base>`), echoing back the created record.
    pub async fn create<T>(&self, body: &T) -> Result<T, IntegrationError>
    where
        T: Serialize + DeserializeOwned,
    {
        debug!("calling POST {}", self.base_url);

        let response = self
            .http
            .post(&self.base_url)
            .json(body)
            .send()
            .await
            .map_err(error::transport)?;
        Self::decode(response).await
    }

    /// DELETE a single entity by id (`DELETE <base>/{id}`).
    pub async fn delete_by_id(&self, id: i32) -> Result<(), IntegrationError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("calling DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(error::transport)?;
        Self::expect_empty(response).await
    }

    /// DELETE all entities of a product (`DELETE <base>?productId={id}`).
    pub async fn delete_by_product_id(&self, product_id: i32) -> Result<(), IntegrationError> {
        let url = format!("{}?productId={}", self.base_url, product_id);
        debug!("calling DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(error::transport)?;
        Self::expect_empty(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, IntegrationError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| IntegrationError::Transport(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(error::translate_status(status, &body))
        }
    }

    async fn expect_empty(response: Response) -> Result<(), IntegrationError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(error::translate_status(status, &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_composed_from_host_port_and_resource() {
        let client = RestClient::new(reqwest::Client::new(), "localhost", 7001, "product");
        assert_eq!(client.base_url(), "http://localhost:7001/product");
    }
}
