//! Admin API client (admin dashboard → Lacag server).
//!
//! All requests carry the plaintext admin secret in the
//! `Lacag-Admin-Authorization` header.

use reqwest::Client;
use url::Url;

use super::{ClientError, check_status, parse_response};
use crate::ADMIN_AUTH_HEADER;
use crate::objects::{AdminConfigResponse, UpdateWalletTypeRequest, WalletConfig, WalletType};

/// Typed HTTP client for the Lacag **Admin API**.
///
/// Authentication uses a plaintext secret sent in the
/// `Lacag-Admin-Authorization` header, verified server-side against an
/// argon2-hashed value.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: Url,
    admin_secret: String,
}

impl AdminClient {
    /// Create a new `AdminClient`.
    ///
    /// * `base_url` – root URL of the Lacag server.
    /// * `admin_secret` – the plaintext admin secret.
    pub fn new(base_url: Url, admin_secret: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            admin_secret: admin_secret.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `GET /api/v1/admin/config` – the current routing configuration.
    pub async fn get_config(&self) -> Result<WalletConfig, ClientError> {
        let url = self.base_url.join("/api/v1/admin/config")?;
        let resp = self
            .http
            .get(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/admin/wallet-types/{key}` – a single wallet type.
    pub async fn get_wallet_type(&self, key: &str) -> Result<WalletType, ClientError> {
        let url = self.wallet_type_url(key)?;
        let resp = self
            .http
            .get(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `PATCH /api/v1/admin/wallet-types/{key}` – merge fields into a wallet type.
    pub async fn update_wallet_type(
        &self,
        key: &str,
        request: &UpdateWalletTypeRequest,
    ) -> Result<WalletType, ClientError> {
        let url = self.wallet_type_url(key)?;
        let resp = self
            .http
            .patch(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .json(request)
            .send()
            .await?;
        parse_response(resp).await
    }

    /// Wallet keys are free-form, so the key is percent-encoded into a
    /// single path segment.
    fn wallet_type_url(&self, key: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(&format!(
            "/api/v1/admin/wallet-types/{}",
            urlencoding::encode(key)
        ))?)
    }

    /// `POST /api/v1/admin/reset` – restore the default configuration.
    pub async fn reset(&self) -> Result<AdminConfigResponse, ClientError> {
        let url = self.base_url.join("/api/v1/admin/reset")?;
        let resp = self
            .http
            .post(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/admin/export` – the pretty-printed configuration document.
    pub async fn export(&self) -> Result<String, ClientError> {
        let url = self.base_url.join("/api/v1/admin/export")?;
        let resp = self
            .http
            .get(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .send()
            .await?;
        Ok(check_status(resp).await?.text().await?)
    }

    /// `POST /api/v1/admin/import` – replace the configuration with `document`.
    pub async fn import(&self, document: String) -> Result<AdminConfigResponse, ClientError> {
        let url = self.base_url.join("/api/v1/admin/import")?;
        let resp = self
            .http
            .post(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(document)
            .send()
            .await?;
        parse_response(resp).await
    }
}
