use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use reqwest::blocking::{Client, Response};
use reqwest::redirect::Policy;
use reqwest::{header, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use super::catalog::{Catalog, CatalogQuery, Credentials, Product};
use super::error::{RemoteError, Result};

pub const CATALOGUE_URL: &str = "https://catalogue.dataspace.copernicus.eu/odata/v1";
pub const TOKEN_URL: &str =
    "https://identity.dataspace.copernicus.eu/auth/realms/CDSE/protocol/openid-connect/token";
const CLIENT_ID: &str = "cdse-public";
const MAX_REDIRECTS: usize = 10;

#[derive(Deserialize)]
struct ODataPage {
    value: Vec<Product>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Copernicus Data Space Ecosystem OData catalog.
pub struct CopernicusCatalog {
    client: Client,
    catalogue_url: String,
    token_url: String,
}

impl CopernicusCatalog {
    pub fn new() -> Result<Self> {
        Self::with_endpoints(CATALOGUE_URL, TOKEN_URL)
    }

    pub fn with_endpoints(catalogue_url: &str, token_url: &str) -> Result<Self> {
        // Redirects are followed by hand so the bearer token survives them.
        // Product archives are large; no overall request timeout.
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(None::<std::time::Duration>)
            .build()?;

        Ok(Self {
            client,
            catalogue_url: catalogue_url.trim_end_matches('/').to_string(),
            token_url: token_url.to_string(),
        })
    }

    /// Password-grant access token from the Keycloak endpoint.
    fn access_token(&self, credentials: &Credentials) -> Result<String> {
        credentials.validate()?;
        let resp = self
            .client
            .post(&self.token_url)
            .form(&[
                ("client_id", CLIENT_ID),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("grant_type", "password"),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(RemoteError::Auth(format!(
                "token creation failed ({status}). Response from the server was: {body}"
            )));
        }
        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.access_token)
    }

    /// GET `url` with the bearer token, following redirects manually.
    fn get_following(&self, url: &str, token: &str) -> Result<Response> {
        let mut url = url.to_string();
        for _ in 0..MAX_REDIRECTS {
            let resp = self.client.get(&url).bearer_auth(token).send()?;
            if !is_redirect(resp.status()) {
                return Ok(resp);
            }
            let location = resp
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    RemoteError::Catalog(format!("redirect without Location from {url}"))
                })?;
            debug!(from = %url, to = %location, "Following redirect");
            url = location.to_string();
        }
        Err(RemoteError::TooManyRedirects(url))
    }
}

fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
    )
}

impl Catalog for CopernicusCatalog {
    fn search(&self, query: &CatalogQuery) -> Result<Vec<Product>> {
        let url = format!("{}/Products", self.catalogue_url);
        let top = query.top.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("$filter", query.odata_filter().as_str()),
                ("$count", "True"),
                ("$top", top.as_str()),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(RemoteError::Catalog(format!("search failed ({status}): {body}")));
        }
        let page: ODataPage = serde_json::from_str(&body)?;
        info!(products = page.value.len(), "Catalog search complete");
        Ok(page.value)
    }

    fn download(
        &self,
        product: &Product,
        credentials: &Credentials,
        dest_dir: &Path,
    ) -> Result<PathBuf> {
        let token = self.access_token(credentials)?;
        let url = format!("{}/Products({})/$value", self.catalogue_url, product.id);
        let mut resp = self.get_following(&url, &token)?.error_for_status()?;

        std::fs::create_dir_all(dest_dir)?;
        let path = dest_dir.join(product.archive_name());
        let mut file = BufWriter::new(File::create(&path)?);
        let bytes = resp.copy_to(&mut file)?;
        file.flush()?;

        info!(product = %product.name, bytes, path = %path.display(), "Product downloaded");
        Ok(path)
    }
}
