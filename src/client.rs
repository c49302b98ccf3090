use std::time::Duration;

use crate::{error::Error, result::Result};
use reqwest::{header::USER_AGENT, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;

/// Base URL of the RedFlagDeals forums.
pub const API_BASE_URL: &str = "https://forums.redflagdeals.com";

/// Upper bound on a single API request, connect and read included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to a forum API base URL.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    base: String,
}

impl Client {
    /// Creates a client for the RedFlagDeals forum API.
    pub fn new() -> Client {
        Self::with_base(API_BASE_URL)
    }

    /// Creates a client against a custom API base URL.
    ///
    /// The base is everything before `/api/...`, without a trailing slash.
    pub fn with_base(base: impl Into<String>) -> Client {
        Client {
            http: ReqwestClient::new(),
            base: base.into(),
        }
    }

    /// Returns the API base URL this client talks to.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub(crate) async fn fetch_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        log::info!("request for {url} dispatched");
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, "RfdCli/0.4")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        log::debug!("response status: {}", response.status());

        match response.status() {
            StatusCode::OK => response.json::<T>().await.map_err(Into::into),
            code => Err(Error::UnexpectedStatus(code)),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
