use anyhow::anyhow;
use async_trait::async_trait;
use weather_dash_core::{Coordinates, Geolocator};

/// Terminals have no positioning API, so "my location" is whatever the user
/// passed with `--lat` / `--lon`.
#[derive(Debug, Clone, Copy)]
pub struct ArgGeolocator {
    position: Option<Coordinates>,
}

impl ArgGeolocator {
    pub fn new(lat: Option<f64>, lon: Option<f64>) -> Self {
        let position = match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };
        Self { position }
    }
}

#[async_trait]
impl Geolocator for ArgGeolocator {
    async fn locate(&self) -> anyhow::Result<Coordinates> {
        self.position
            .ok_or_else(|| anyhow!("No position available; pass both --lat and --lon."))
    }
}
