//! OSRM dataset preparation (download + preprocess) for integration testing.
//!
//! Fetches a Geofabrik extract and runs the osrm-backend preprocessing
//! pipeline through docker so a local `/table` service can be started
//! against real road data.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// A Geofabrik region path, e.g. `"europe/monaco"`.
#[derive(Debug, Clone)]
pub struct Region(String);

impl Region {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Last path segment, used to name local files.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("region")
    }

    pub fn download_url(&self) -> String {
        format!("https://download.geofabrik.de/{}-latest.osm.pbf", self.0)
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io failure: {0}")]
    Io(#[from] io::Error),
    #[error("download failure: {0}")]
    Http(#[from] reqwest::Error),
    #[error("preprocessing failed: {0}")]
    Process(String),
}

/// A prepared OSRM dataset on disk, ready for `osrm-routed --algorithm mld`.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub data_dir: PathBuf,
    pub osrm_base: PathBuf,
}

impl Dataset {
    /// Ensures the extract is downloaded and preprocessed under
    /// `data_root/<region>`, skipping any step whose outputs already exist.
    pub fn ensure(region: &Region, data_root: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        let data_root: PathBuf = data_root.into();
        let data_root = if data_root.is_absolute() {
            data_root
        } else {
            std::env::current_dir()?.join(data_root)
        };
        let data_dir = data_root.join(region.name());
        fs::create_dir_all(&data_dir)?;

        let pbf_path = data_dir.join(format!("{}-latest.osm.pbf", region.name()));
        if !pbf_path.exists() {
            tracing::info!(url = %region.download_url(), "downloading extract");
            download(&region.download_url(), &pbf_path)?;
        }

        let osrm_base = data_dir.join(format!("{}-latest.osrm", region.name()));
        if !osrm_base.exists() {
            run_backend(
                &data_dir,
                &["osrm-extract", "-p", "/opt/car.lua", &in_container(&pbf_path)],
            )?;
        }
        if !mld_ready(&osrm_base) {
            run_backend(&data_dir, &["osrm-partition", &in_container(&osrm_base)])?;
            run_backend(&data_dir, &["osrm-customize", &in_container(&osrm_base)])?;
        }

        Ok(Self { data_dir, osrm_base })
    }
}

fn download(url: &str, dest: &Path) -> Result<(), DatasetError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writer.write_all(&response.bytes()?)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;
    Ok(())
}

fn mld_ready(osrm_base: &Path) -> bool {
    ["osrm.partition", "osrm.mldgr", "osrm.cells"]
        .iter()
        .all(|ext| osrm_base.with_extension(ext).exists())
}

fn run_backend(data_dir: &Path, args: &[&str]) -> Result<(), DatasetError> {
    let status = Command::new("docker")
        .args(["run", "--rm", "-t", "-v"])
        .arg(format!("{}:/data", data_dir.display()))
        .arg("osrm/osrm-backend")
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(DatasetError::Process(format!(
            "docker exited with status {}",
            status
        )))
    }
}

fn in_container(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    format!("/data/{}", name)
}
