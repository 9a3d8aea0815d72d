use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use bandview_core::remote::catalog::{DEFAULT_AOI, DEFAULT_COLLECTION, DEFAULT_PAGE_SIZE};
use bandview_core::remote::{
    spawn_acquisition, AcquisitionRequest, Catalog, CatalogQuery, CopernicusCatalog, Credentials,
};
use chrono::{Duration, NaiveDate, Utc};
use clap::Args;

#[derive(Args)]
pub struct FetchArgs {
    /// Copernicus Data Space user name
    #[arg(long, env = "copernicus_user", default_value = "", hide_default_value = true)]
    pub user: String,

    /// Copernicus Data Space password
    #[arg(
        long,
        env = "copernicus_password",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub password: String,

    /// Area of interest as WKT (EPSG:4326)
    #[arg(long, default_value = DEFAULT_AOI, hide_default_value = true)]
    pub aoi: String,

    /// First day of the window, YYYY-MM-DD (default: yesterday, UTC)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the window, YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Directory receiving the downloaded archives
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,
}

pub fn run(args: &FetchArgs) -> Result<()> {
    let today = Utc::now().date_naive();
    let end = args.end.unwrap_or(today);
    let start = args.start.unwrap_or(end - Duration::days(1));
    if start >= end {
        bail!("start date {start} must be before end date {end}");
    }

    let request = AcquisitionRequest {
        query: CatalogQuery {
            collection: DEFAULT_COLLECTION.to_string(),
            aoi: args.aoi.clone(),
            start,
            end,
            top: DEFAULT_PAGE_SIZE,
        },
        credentials: Credentials::new(&args.user, &args.password),
        dest_dir: args.dest.clone(),
    };

    let catalog: Arc<dyn Catalog> = Arc::new(CopernicusCatalog::new()?);
    let handle = spawn_acquisition(catalog, request, None)?;
    super::follow_worker(handle)?;
    Ok(())
}
