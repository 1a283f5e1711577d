//! OSRM HTTP adapter for per-origin distance queries.

use serde::Deserialize;

use crate::error::ProviderError;
use crate::traits::DistanceProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl DistanceProvider for OsrmClient {
    /// One `/table` request per origin: the origin is coordinate 0 and the
    /// sole source, the destinations follow. OSRM reports `null` for a pair
    /// it cannot route, which maps to an unreachable leg.
    fn query(
        &self,
        origin: (f64, f64),
        destinations: &[(f64, f64)],
    ) -> Result<Vec<Option<f64>>, ProviderError> {
        let coords = std::iter::once(&origin)
            .chain(destinations)
            .map(|(lat, lon)| format!("{:.6},{:.6}", lon, lat))
            .collect::<Vec<_>>()
            .join(";");
        let dest_indices = (1..=destinations.len())
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/table/v1/{}/{}?annotations=duration&sources=0&destinations={}",
            self.config.base_url, self.config.profile, coords, dest_indices
        );

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmTableResponse>())?;

        if body.code != "Ok" {
            return Err(ProviderError::Status(format!("osrm code {}", body.code)));
        }

        let mut rows = body
            .durations
            .ok_or_else(|| ProviderError::Status("osrm response missing durations".to_string()))?;
        if rows.len() != 1 {
            return Err(ProviderError::Status(format!(
                "expected 1 duration row, got {}",
                rows.len()
            )));
        }

        Ok(rows.remove(0))
    }
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    code: String,
    durations: Option<Vec<Vec<Option<f64>>>>,
}
