//! User API client (payment form → Lacag server).

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_response};
use crate::objects::{ResolveMode, ResolveRequest, ResolveResponse, WalletOption};

/// Typed HTTP client for the Lacag **User API**.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: Client,
    base_url: Url,
}

impl UserClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `GET /api/v1/wallet-types` – wallets offered on the payment form.
    pub async fn wallet_types(&self) -> Result<Vec<WalletOption>, ClientError> {
        let url = self.base_url.join("/api/v1/wallet-types")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }

    /// `POST /api/v1/resolve` – classify `phone` against the routing config.
    ///
    /// With `normalize` set, the server first converts a local-format number
    /// (`61xxxxxxx`) to international form.
    pub async fn resolve(
        &self,
        phone: impl Into<String>,
        mode: Option<ResolveMode>,
        normalize: bool,
    ) -> Result<ResolveResponse, ClientError> {
        let url = self.base_url.join("/api/v1/resolve")?;
        let request = ResolveRequest {
            phone: phone.into(),
            mode,
            normalize,
        };
        let resp = self.http.post(url).json(&request).send().await?;
        parse_response(resp).await
    }
}
