//! Core library for the `weather-dash` terminal dashboard.
//!
//! This crate defines:
//! - Shared domain models (forecast samples, daily summaries, current conditions)
//! - Unit conversion and condition-to-theme mapping
//! - Day aggregation of the 3-hour forecast
//! - The OpenWeather client and the last-location store
//! - The [`Dashboard`] binder that pushes display views into a [`RenderSink`]
//!
//! It is used by `weather-dash`, but any other surface can implement
//! [`RenderSink`] and drive a [`Dashboard`].

pub mod aggregate;
pub mod category;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod provider;
pub mod store;
pub mod units;
pub mod view;

pub use aggregate::{MAX_DAYS, aggregate};
pub use config::Config;
pub use dashboard::{Dashboard, Geolocator, RenderSink};
pub use error::DashboardError;
pub use model::{
    Condition, Coordinates, CurrentConditions, DailySummary, ForecastSample, LocationQuery,
    WeatherReport,
};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use store::{FileLocationStore, LocationStore, MemoryLocationStore};
pub use units::{UnitPreference, to_display_speed, to_display_temp};
pub use view::{CurrentView, DayView, Theme};
