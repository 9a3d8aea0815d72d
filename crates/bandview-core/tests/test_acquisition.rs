use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tempfile::TempDir;

use bandview_core::remote::{
    run_acquisition, spawn_acquisition, AcquisitionRequest, Catalog, CatalogQuery, Credentials,
    Product, RemoteError, Result,
};
use bandview_core::remote::catalog::DEFAULT_AOI;
use bandview_core::worker::{spawn_worker, WorkerEvent};

fn product(name: &str) -> Product {
    Product {
        id: format!("id-{name}"),
        name: name.to_string(),
        content_length: None,
        content_date: None,
        online: Some(true),
    }
}

/// In-memory catalog. Downloads of products named in `failing` fail.
struct FakeCatalog {
    products: Vec<Product>,
    failing: Vec<String>,
    downloaded: Mutex<Vec<String>>,
}

impl FakeCatalog {
    fn new(names: &[&str]) -> Self {
        Self {
            products: names.iter().map(|n| product(n)).collect(),
            failing: Vec::new(),
            downloaded: Mutex::new(Vec::new()),
        }
    }
}

impl Catalog for FakeCatalog {
    fn search(&self, _query: &CatalogQuery) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn download(&self, product: &Product, _credentials: &Credentials, dest_dir: &Path) -> Result<PathBuf> {
        if self.failing.contains(&product.name) {
            return Err(RemoteError::Catalog("server said no".into()));
        }
        let path = dest_dir.join(product.archive_name());
        std::fs::write(&path, b"zip")?;
        self.downloaded.lock().unwrap().push(product.name.clone());
        Ok(path)
    }
}

fn request(dest: &Path) -> AcquisitionRequest {
    AcquisitionRequest {
        query: CatalogQuery::last_day(DEFAULT_AOI),
        credentials: Credentials::new("user", "secret"),
        dest_dir: dest.to_path_buf(),
    }
}

fn statuses(events: Vec<WorkerEvent>) -> Vec<String> {
    events
        .into_iter()
        .filter_map(|e| match e {
            WorkerEvent::Status(s) => Some(s),
            WorkerEvent::Finished => None,
        })
        .collect()
}

#[test]
fn test_downloads_only_level_2a_products() {
    let dir = TempDir::new().unwrap();
    let catalog = Arc::new(FakeCatalog::new(&[
        "S2A_MSIL2A_20240601_T32TPR.SAFE",
        "S2A_MSIL1C_20240601_T32TPR.SAFE",
        "S2B_MSIL2A_20240601_T32TQR.SAFE",
    ]));

    let worker_catalog = Arc::clone(&catalog);
    let req = request(dir.path());
    let handle = spawn_worker("acq", None, move |sink| {
        run_acquisition(worker_catalog.as_ref(), &req, sink).map(|_| ())
    })
    .unwrap();

    let lines = statuses(handle.wait());
    assert_eq!(
        lines,
        vec![
            "Fetching Sentinel-2 L2A products...",
            "Total Sentinel-2 L2A tiles found: 2",
            "Downloading S2A_MSIL2A_20240601_T32TPR.SAFE...",
            "Downloading S2B_MSIL2A_20240601_T32TQR.SAFE...",
            "Sentinel-2 L2A products downloaded successfully.",
        ]
    );
    assert_eq!(catalog.downloaded.lock().unwrap().len(), 2);
    assert!(dir.path().join("S2A_MSIL2A_20240601_T32TPR.zip").exists());
    assert!(!dir.path().join("S2A_MSIL1C_20240601_T32TPR.zip").exists());
}

#[test]
fn test_failed_download_does_not_stop_the_rest() {
    let dir = TempDir::new().unwrap();
    let mut catalog = FakeCatalog::new(&["A_MSIL2A.SAFE", "B_MSIL2A.SAFE"]);
    catalog.failing.push("A_MSIL2A.SAFE".to_string());
    let catalog: Arc<dyn Catalog> = Arc::new(catalog);

    let handle = spawn_acquisition(catalog, request(dir.path()), None).unwrap();
    let lines = statuses(handle.wait());

    assert!(lines.contains(&"Problem downloading A_MSIL2A.SAFE: catalog error: server said no".to_string()));
    assert!(lines.contains(&"Downloading B_MSIL2A.SAFE...".to_string()));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Sentinel-2 L2A products downloaded successfully.")
    );
    assert!(dir.path().join("B_MSIL2A.zip").exists());
}

#[test]
fn test_empty_search_result() {
    let dir = TempDir::new().unwrap();
    let catalog: Arc<dyn Catalog> = Arc::new(FakeCatalog::new(&["ONLY_MSIL1C.SAFE"]));
    let handle = spawn_acquisition(catalog, request(dir.path()), None).unwrap();
    assert_eq!(
        statuses(handle.wait()),
        vec![
            "Fetching Sentinel-2 L2A products...",
            "No Sentinel-2 L2A products found for the requested window.",
        ]
    );
}

#[test]
fn test_missing_credentials_rejected_before_spawning() {
    let dir = TempDir::new().unwrap();
    let catalog: Arc<dyn Catalog> = Arc::new(FakeCatalog::new(&[]));
    let mut req = request(dir.path());
    req.credentials = Credentials::new("user", "");

    let err = spawn_acquisition(catalog, req, None).unwrap_err();
    assert!(matches!(err, RemoteError::MissingCredentials));
}

#[test]
fn test_credentials_debug_hides_password() {
    let creds = Credentials::new("user", "hunter2");
    let shown = format!("{creds:?}");
    assert!(shown.contains("user"));
    assert!(!shown.contains("hunter2"));
}

#[test]
fn test_odata_filter() {
    let query = CatalogQuery {
        collection: "SENTINEL-2".to_string(),
        aoi: "POINT(10 45)".to_string(),
        start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
        top: 1000,
    };
    let filter = query.odata_filter();
    assert!(filter.starts_with("Collection/Name eq 'SENTINEL-2' and "));
    assert!(filter.contains("OData.CSC.Intersects(area=geography'SRID=4326;POINT(10 45)')"));
    assert!(filter.contains("ContentDate/Start gt 2024-06-01T00:00:00.000Z"));
    assert!(filter.ends_with("ContentDate/Start lt 2024-06-02T00:00:00.000Z"));
}

#[test]
fn test_product_json_and_archive_name() {
    let json = r#"{"Id":"abc","Name":"S2A_MSIL2A_X.SAFE","ContentLength":123,"Online":true}"#;
    let p: Product = serde_json::from_str(json).unwrap();
    assert_eq!(p.id, "abc");
    assert_eq!(p.content_length, Some(123));
    assert!(!p.is_l1c());
    assert_eq!(p.archive_name(), "S2A_MSIL2A_X.zip");
}

#[test]
fn test_last_day_window() {
    let q = CatalogQuery::last_day(DEFAULT_AOI);
    assert_eq!((q.end - q.start).num_days(), 1);
    assert_eq!(q.collection, "SENTINEL-2");
}

#[test]
fn test_archive_name_keeps_only_the_file_name() {
    assert_eq!(product("/tmp/evil").archive_name(), "evil.zip");
    assert_eq!(product("../../outside.SAFE").archive_name(), "outside.zip");
    assert_eq!(product("..\\..\\win.SAFE").archive_name(), "win.zip");

    let unnamed = Product {
        id: "0f1e2d".to_string(),
        ..product("nested/..")
    };
    assert_eq!(unnamed.archive_name(), "0f1e2d.zip");
}

#[test]
fn test_downloads_stay_inside_destination() {
    let root = TempDir::new().unwrap();
    let dest = root.path().join("downloads");
    std::fs::create_dir(&dest).unwrap();
    let catalog = FakeCatalog::new(&[
        "../escaped_MSIL2A.SAFE",
        "sub/dir/nested_MSIL2A.SAFE",
    ]);

    let written = Arc::new(Mutex::new(Vec::new()));
    let worker_written = Arc::clone(&written);
    let req = request(&dest);
    let handle = spawn_worker("acq", None, move |sink| {
        let paths = run_acquisition(&catalog, &req, sink)?;
        worker_written.lock().unwrap().extend(paths);
        Ok::<_, RemoteError>(())
    })
    .unwrap();

    let lines = statuses(handle.wait());
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Sentinel-2 L2A products downloaded successfully.")
    );
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 2);
    for path in written.iter() {
        assert_eq!(path.parent(), Some(dest.as_path()));
    }
    assert!(root.path().join("downloads").join("escaped_MSIL2A.zip").exists());
    assert!(root.path().join("downloads").join("nested_MSIL2A.zip").exists());
    assert!(!root.path().join("escaped_MSIL2A.zip").exists());
}
