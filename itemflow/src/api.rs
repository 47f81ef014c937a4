use std::future::Future;

use thiserror::Error;

use crate::{Credentials, Items, LoginResponse};

/// Errors produced by the HTTP endpoint. Transport failures, non-success
/// statuses and body deserialization all surface as `Http`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The remote endpoint contract: one listing call, one login call.
pub trait Api: Send + Sync {
    type Error: std::error::Error + Send + 'static;

    fn fetch_items(&self) -> impl Future<Output = Result<Items, Self::Error>> + Send;

    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<LoginResponse, Self::Error>> + Send;
}

/// `reqwest`-backed endpoint. The base URL is plain configuration; no timeout
/// or retry is added on top of the client's own behavior.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Api for HttpApi {
    type Error = ApiError;

    fn fetch_items(&self) -> impl Future<Output = Result<Items, ApiError>> + Send {
        async move {
            let url = format!("{}items", self.base_url);
            let response = self.client.get(url).send().await?.error_for_status()?;
            Ok(response.json::<Items>().await?)
        }
    }

    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>> + Send {
        async move {
            let response = self
                .client
                .post(self.base_url.as_str())
                .json(&credentials)
                .send()
                .await?
                .error_for_status()?;
            Ok(response.json::<LoginResponse>().await?)
        }
    }
}
