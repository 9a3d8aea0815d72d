use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use super::catalog::{Catalog, CatalogQuery, Credentials};
use super::error::Result;
use crate::worker::{spawn_worker, Notify, StatusSink, WorkerHandle};

/// Everything the acquisition worker needs.
#[derive(Clone, Debug)]
pub struct AcquisitionRequest {
    pub query: CatalogQuery,
    pub credentials: Credentials,
    /// Directory receiving the product archives.
    pub dest_dir: PathBuf,
}

/// Search the catalog and download every Level-2A product found.
///
/// A failed download is reported and the next product is tried. Returns the
/// archives written.
pub fn run_acquisition(
    catalog: &dyn Catalog,
    request: &AcquisitionRequest,
    sink: &StatusSink,
) -> Result<Vec<PathBuf>> {
    sink.status("Fetching Sentinel-2 L2A products...");

    let products: Vec<_> = catalog
        .search(&request.query)?
        .into_iter()
        .filter(|p| !p.is_l1c())
        .collect();

    if products.is_empty() {
        sink.status("No Sentinel-2 L2A products found for the requested window.");
        return Ok(Vec::new());
    }
    sink.status(format!("Total Sentinel-2 L2A tiles found: {}", products.len()));

    let mut written = Vec::with_capacity(products.len());
    for product in &products {
        sink.status(format!("Downloading {}...", product.name));
        match catalog.download(product, &request.credentials, &request.dest_dir) {
            Ok(path) => written.push(path),
            Err(e) => {
                warn!(product = %product.name, "Download failed: {e}");
                sink.status(format!("Problem downloading {}: {e}", product.name));
            }
        }
    }

    sink.status("Sentinel-2 L2A products downloaded successfully.");
    Ok(written)
}

/// Validate credentials, then run [`run_acquisition`] on a worker thread.
pub fn spawn_acquisition(
    catalog: Arc<dyn Catalog>,
    request: AcquisitionRequest,
    notify: Option<Notify>,
) -> Result<WorkerHandle> {
    request.credentials.validate()?;
    let handle = spawn_worker("acquisition", notify, move |sink| {
        run_acquisition(catalog.as_ref(), &request, sink).map(|_| ())
    })?;
    Ok(handle)
}

