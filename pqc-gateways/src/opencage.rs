use geocoding::{Forward, Opencage, Point};
use pqc_core::gateways::geocode::GeoCodingGateway;

/// Forward geocoding with the OpenCage Data API.
pub struct OpenCage {
    api_key: Option<String>,
    /// Appended to every query to keep results local.
    region: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>, region: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("No OpenCage API key configured: addresses won't be resolved");
        }
        Self {
            api_key,
            region,
        }
    }

    fn query(&self, addr: &str) -> String {
        let addr = addr.trim();
        match self.region.as_deref() {
            Some(region) if !addr.to_lowercase().contains(&region.to_lowercase()) => {
                format!("{addr}, {region}")
            }
            _ => addr.to_owned(),
        }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)> {
        let api_key = self.api_key.as_ref()?;
        let query = self.query(addr);
        if query.is_empty() {
            return None;
        }
        let res: Result<Vec<Point<f64>>, _> = Opencage::new(api_key.clone()).forward(&query);
        match res {
            Ok(points) => {
                let point = points.first()?;
                log::debug!("Resolved address '{query}' to {point:?}");
                Some((point.y(), point.x()))
            }
            Err(err) => {
                log::warn!("Unable to geocode address '{query}': {err}");
                None
            }
        }
    }
}
