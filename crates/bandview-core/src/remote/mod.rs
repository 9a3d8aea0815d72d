//! Remote collaborators driven from background workers: the simulated
//! script runner and the Copernicus catalog search/download workflow.

pub mod acquisition;
pub mod catalog;
pub mod copernicus;
pub mod error;
pub mod script;

pub use acquisition::{run_acquisition, spawn_acquisition, AcquisitionRequest};
pub use catalog::{Catalog, CatalogQuery, Credentials, Product};
pub use copernicus::CopernicusCatalog;
pub use error::{RemoteError, Result};
pub use script::{run_script, spawn_script, DEFAULT_SCRIPT_DELAY};
