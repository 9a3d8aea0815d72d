use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;

use super::error::{RemoteError, Result};

/// Lake Garda test area, WKT in EPSG:4326.
pub const DEFAULT_AOI: &str = "POLYGON((10.2886962890625 45.93587125244685,10.8544921875 45.93587125244685,10.8544921875 46.33776088279935,10.2886962890625 46.33776088279935,10.2886962890625 45.93587125244685))";

pub const DEFAULT_COLLECTION: &str = "SENTINEL-2";

/// Maximum number of products requested per search.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

const ENV_USER: &str = "copernicus_user";
const ENV_PASSWORD: &str = "copernicus_password";

/// Account used for authenticated downloads.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// From the `copernicus_user` / `copernicus_password` environment variables.
    pub fn from_env() -> Self {
        Self {
            username: std::env::var(ENV_USER).unwrap_or_default(),
            password: std::env::var(ENV_PASSWORD).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(RemoteError::MissingCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Products of `collection` intersecting `aoi` whose acquisition starts
/// strictly between `start` and `end` (both at 00:00 UTC).
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogQuery {
    pub collection: String,
    /// Area of interest as WKT.
    pub aoi: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub top: u32,
}

impl CatalogQuery {
    /// Sentinel-2 over `aoi` from yesterday to today.
    pub fn last_day(aoi: impl Into<String>) -> Self {
        let today = Utc::now().date_naive();
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            aoi: aoi.into(),
            start: today - Duration::days(1),
            end: today,
            top: DEFAULT_PAGE_SIZE,
        }
    }

    /// OData `$filter` expression for this query.
    pub fn odata_filter(&self) -> String {
        format!(
            "Collection/Name eq '{}' and \
             OData.CSC.Intersects(area=geography'SRID=4326;{}') and \
             ContentDate/Start gt {}T00:00:00.000Z and \
             ContentDate/Start lt {}T00:00:00.000Z",
            self.collection,
            self.aoi,
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d"),
        )
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::last_day(DEFAULT_AOI)
    }
}

/// Acquisition time span of a product.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentDate {
    pub start: String,
    pub end: String,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content_length: Option<u64>,
    #[serde(default)]
    pub content_date: Option<ContentDate>,
    #[serde(default)]
    pub online: Option<bool>,
}

impl Product {
    /// Level-1C (top of atmosphere) products are skipped by acquisition.
    pub fn is_l1c(&self) -> bool {
        self.name.contains("L1C")
    }

    /// Local archive name: product name without its `.SAFE` suffix, plus `.zip`.
    ///
    /// Only the last path component of the server-supplied name is kept, so
    /// the archive always lands directly in the destination directory. The
    /// product id is used when the name has no usable component.
    pub fn archive_name(&self) -> String {
        let stem = plain_file_name(&self.name)
            .or_else(|| plain_file_name(&self.id))
            .unwrap_or("product");
        let stem = stem.strip_suffix(".SAFE").unwrap_or(stem);
        format!("{stem}.zip")
    }
}

/// Last component of `name` split on both path separators, if it names a file.
fn plain_file_name(name: &str) -> Option<&str> {
    let last = name.rsplit(['/', '\\']).next()?.trim();
    match last {
        "" | "." | ".." => None,
        _ => Some(last),
    }
}

/// A remote source of satellite products.
pub trait Catalog: Send + Sync {
    fn search(&self, query: &CatalogQuery) -> Result<Vec<Product>>;

    /// Download `product` into `dest_dir`, returning the written file.
    fn download(
        &self,
        product: &Product,
        credentials: &Credentials,
        dest_dir: &Path,
    ) -> Result<PathBuf>;
}
