//! Input providers for connection lists.
//!
//! The planner receives one of these instead of picking a data source on its own.
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use log::info;
use serde::Deserialize;

use super::model::{Connection, LatLong, TripData};
use crate::constants::Weight;

pub trait ConnectionSource {
    /// Loads the full, unordered list of connections
    fn connections(&self) -> anyhow::Result<Vec<Connection>>;
}

impl ConnectionSource for Vec<Connection> {
    fn connections(&self) -> anyhow::Result<Vec<Connection>> {
        Ok(self.clone())
    }
}

impl<S: ConnectionSource + ?Sized> ConnectionSource for Box<S> {
    fn connections(&self) -> anyhow::Result<Vec<Connection>> {
        (**self).connections()
    }
}

/// JSON document of the form `{"connections": [...]}`
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }
}

impl ConnectionSource for JsonFile {
    fn connections(&self) -> anyhow::Result<Vec<Connection>> {
        info!("Reading connections from {}", self.path.display());
        let file = File::open(&self.path)
            .with_context(|| format!("Could not open {}", self.path.display()))?;
        let data: TripData = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        info!("Read {} connections", data.connections.len());
        Ok(data.connections)
    }
}

/// Flat CSV with header `from,to,price,from_lat,from_long,to_lat,to_long`
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFile { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    from: String,
    to: String,
    price: Weight,
    from_lat: f64,
    from_long: f64,
    to_lat: f64,
    to_long: f64,
}

impl From<ConnectionRecord> for Connection {
    fn from(r: ConnectionRecord) -> Self {
        Connection::new(
            &r.from,
            &r.to,
            r.price,
            LatLong::new(r.from_lat, r.from_long),
            LatLong::new(r.to_lat, r.to_long),
        )
    }
}

impl ConnectionSource for CsvFile {
    fn connections(&self) -> anyhow::Result<Vec<Connection>> {
        info!("Reading connections from {}", self.path.display());
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Could not open {}", self.path.display()))?;

        let mut connections = Vec::new();
        for result in reader.deserialize() {
            let record: ConnectionRecord = result.context("Failed to parse Connection")?;
            connections.push(record.into());
        }
        info!("Read {} connections", connections.len());
        Ok(connections)
    }
}

/// Picks the source by file extension
pub fn from_path(path: &Path) -> anyhow::Result<Box<dyn ConnectionSource>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Box::new(JsonFile::new(path))),
        Some("csv") => Ok(Box::new(CsvFile::new(path))),
        _ => bail!(
            "Unsupported connection file {}, expected .json or .csv",
            path.display()
        ),
    }
}
