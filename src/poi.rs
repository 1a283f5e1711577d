//! Points of interest and CSV ingestion.
//!
//! The working set is loaded once per session, either from a fixed in-memory
//! list or from a delimited text file, and is never mutated afterwards; only
//! selection membership changes.

use std::io::Read;

use serde::{Deserialize, Serialize};

/// A named geocoded location in the working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// External-provider place identifier, when known.
    #[serde(default)]
    pub place_id: Option<String>,
}

impl Poi {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            address: None,
            lat,
            lon,
            place_id: None,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: Option<String>,
    #[serde(alias = "latitude")]
    lat: Option<f64>,
    #[serde(alias = "longitude", alias = "lng")]
    lon: Option<f64>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    place_id: Option<String>,
}

/// Reads POIs from delimited text with a header row.
///
/// Required columns: `name`, `lat`/`latitude`, `lon`/`longitude`.
/// Optional columns: `address`, `place_id`. Rows missing a name or with
/// non-numeric coordinates are dropped without surfacing an error.
pub fn load_csv<R: Read>(reader: R) -> Vec<Poi> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut pois = Vec::new();
    for (line, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                tracing::debug!(line, %err, "dropping malformed poi row");
                continue;
            }
        };

        let (name, lat, lon) = match (row.name, row.lat, row.lon) {
            (Some(name), Some(lat), Some(lon)) if !name.is_empty() => (name, lat, lon),
            _ => {
                tracing::debug!(line, "dropping poi row with missing fields");
                continue;
            }
        };

        pois.push(Poi {
            name,
            address: row.address.filter(|a| !a.is_empty()),
            lat,
            lon,
            place_id: row.place_id.filter(|id| !id.is_empty()),
        });
    }

    pois
}
