//! Binds fetched weather to a render surface.
//!
//! [`Dashboard`] owns the last successful [`WeatherReport`] and the session's
//! [`UnitPreference`]. Every user action runs to completion through `&mut self`,
//! so a newer fetch simply replaces the snapshot.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::{
    error::DashboardError,
    model::{Coordinates, LocationQuery, WeatherReport},
    provider::WeatherProvider,
    store::LocationStore,
    units::UnitPreference,
    view::{CurrentView, DayView, Theme, current_view, day_views, theme_for},
};

/// Where the dashboard draws.
///
/// Animation themes (`Theme::animation`, `DayView::animation`) describe motion;
/// a static surface such as a terminal may ignore them.
pub trait RenderSink {
    /// Hide the previous result and clear any error message.
    fn reset(&mut self);
    fn set_loading(&mut self, loading: bool);
    fn show_error(&mut self, message: &str);
    fn render_current(&mut self, current: &CurrentView);
    fn render_forecast(&mut self, days: &[DayView]);
    fn set_theme(&mut self, theme: Theme);
}

/// Device position source.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Returns the position or an error whose message is the platform's reason.
    async fn locate(&self) -> anyhow::Result<Coordinates>;
}

#[derive(Debug)]
pub struct Dashboard<S: RenderSink> {
    provider: Box<dyn WeatherProvider>,
    store: Box<dyn LocationStore>,
    sink: S,
    units: UnitPreference,
    snapshot: Option<WeatherReport>,
}

impl<S: RenderSink> Dashboard<S> {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        store: Box<dyn LocationStore>,
        sink: S,
        units: UnitPreference,
    ) -> Self {
        Self {
            provider,
            store,
            sink,
            units,
            snapshot: None,
        }
    }

    pub fn units(&self) -> UnitPreference {
        self.units
    }

    pub fn snapshot(&self) -> Option<&WeatherReport> {
        self.snapshot.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn store(&self) -> &dyn LocationStore {
        self.store.as_ref()
    }

    /// Search by free-text city. Blank input is rejected without a request.
    pub async fn search_city(&mut self, input: &str) -> Result<(), DashboardError> {
        let city = input.trim();
        if city.is_empty() {
            return Err(self.fail(DashboardError::EmptyQuery));
        }
        self.fetch(LocationQuery::City(city.to_string())).await
    }

    pub async fn search_coords(&mut self, coords: Coordinates) -> Result<(), DashboardError> {
        if !coords.is_valid() {
            return Err(self.fail(DashboardError::Geolocation(format!(
                "Coordinates out of range: {}, {}",
                coords.lat, coords.lon
            ))));
        }
        self.fetch(LocationQuery::Coords(coords)).await
    }

    /// "Use my location": resolve the device position, then fetch for it.
    pub async fn use_my_location(&mut self, geo: &dyn Geolocator) -> Result<(), DashboardError> {
        self.sink.reset();
        self.sink.set_loading(true);

        let located = geo.locate().await;
        self.sink.set_loading(false);

        match located {
            Ok(coords) => self.search_coords(coords).await,
            Err(e) => Err(self.fail(DashboardError::Geolocation(e.to_string()))),
        }
    }

    /// Search for the persisted last location, if any. Returns whether a
    /// search was started.
    pub async fn restore_last(&mut self) -> Result<bool, DashboardError> {
        let last = match self.store.load() {
            Ok(last) => last,
            Err(e) => {
                warn!("Failed to load last location: {e:#}");
                None
            }
        };

        match last {
            Some(city) => {
                debug!(%city, "restoring last location");
                self.search_city(&city).await.map(|()| true)
            }
            None => Ok(false),
        }
    }

    /// Flip metric/imperial and redraw the snapshot without refetching.
    pub fn toggle_units(&mut self) -> UnitPreference {
        self.set_units(self.units.toggled());
        self.units
    }

    pub fn set_units(&mut self, units: UnitPreference) {
        self.units = units;
        if self.snapshot.is_some() {
            self.render_snapshot();
        }
    }

    async fn fetch(&mut self, query: LocationQuery) -> Result<(), DashboardError> {
        self.sink.reset();
        self.sink.set_loading(true);

        let result = self.provider.fetch(&query).await;

        let outcome = match result {
            Ok(report) => {
                info!(location = %report.current.location_name, "weather updated");
                if let Err(e) = self.store.save(&report.current.location_name) {
                    warn!("Failed to persist last location: {e:#}");
                }
                self.snapshot = Some(report);
                self.render_snapshot();
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        };

        self.sink.set_loading(false);
        outcome
    }

    fn render_snapshot(&mut self) {
        let Some(report) = &self.snapshot else {
            return;
        };

        self.sink.render_current(&current_view(&report.current, self.units));
        self.sink.render_forecast(&day_views(&report.forecast, self.units));
        self.sink.set_theme(theme_for(&report.current));
    }

    fn fail(&mut self, err: DashboardError) -> DashboardError {
        debug!("dashboard operation failed: {err}");
        self.sink.show_error(&err.to_string());
        err
    }
}
