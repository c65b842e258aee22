use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{
    error::DashboardError,
    model::{Condition, CurrentConditions, ForecastSample, LocationQuery, WeatherReport},
};

use super::WeatherProvider;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Requests always ask for metric values; conversion happens at display time.
const REQUEST_UNITS: &str = "metric";
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    weather_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(api_key, DEFAULT_WEATHER_URL, DEFAULT_FORECAST_URL)
    }

    pub fn with_endpoints(
        api_key: String,
        weather_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            weather_url: weather_url.into(),
            forecast_url: forecast_url.into(),
            http: Client::new(),
        }
    }

    fn query_params(&self, query: &LocationQuery) -> Vec<(&'static str, String)> {
        let mut params = match query {
            LocationQuery::City(city) => vec![("q", city.clone())],
            LocationQuery::Coords(c) => {
                vec![("lat", c.lat.to_string()), ("lon", c.lon.to_string())]
            }
        };
        params.push(("appid", self.api_key.clone()));
        params.push(("units", REQUEST_UNITS.to_string()));
        params
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &LocationQuery,
    ) -> Result<T, DashboardError> {
        debug!(url, "requesting OpenWeather");

        let res = self.http.get(url).query(&self.query_params(query)).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<OwError>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("provider responded with status {status}"));
            debug!(%status, %message, "OpenWeather request rejected");
            return Err(DashboardError::Fetch(message));
        }

        serde_json::from_str(&body)
            .map_err(|e| DashboardError::Fetch(format!("unreadable provider response: {e}")))
    }

    async fn fetch_current(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentConditions, DashboardError> {
        let parsed: OwCurrentResponse = self.get_json(&self.weather_url, query).await?;

        Ok(CurrentConditions {
            location_name: parsed.name,
            temp_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            condition: first_condition(parsed.weather),
        })
    }

    async fn fetch_forecast(
        &self,
        query: &LocationQuery,
    ) -> Result<Vec<ForecastSample>, DashboardError> {
        let parsed: OwForecastResponse = self.get_json(&self.forecast_url, query).await?;

        parsed.list.into_iter().map(OwForecastEntry::into_sample).collect()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn fetch(&self, query: &LocationQuery) -> Result<WeatherReport, DashboardError> {
        let (current, forecast) =
            tokio::try_join!(self.fetch_current(query), self.fetch_forecast(query))?;

        debug!(
            location = %current.location_name,
            samples = forecast.len(),
            "OpenWeather fetch complete"
        );

        Ok(WeatherReport {
            current,
            forecast,
            fetched_at: Utc::now(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

impl From<OwWeather> for Condition {
    fn from(w: OwWeather) -> Self {
        Condition {
            category: w.main,
            icon: w.icon,
            description: w.description,
        }
    }
}

fn first_condition(weather: Vec<OwWeather>) -> Condition {
    weather
        .into_iter()
        .next()
        .map(Condition::from)
        .unwrap_or_else(Condition::unknown)
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwCurrentMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    dt_txt: String,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
}

impl OwForecastEntry {
    fn into_sample(self) -> Result<ForecastSample, DashboardError> {
        let local_time =
            NaiveDateTime::parse_from_str(&self.dt_txt, DT_TXT_FORMAT).map_err(|e| {
                DashboardError::Fetch(format!("invalid forecast time '{}': {e}", self.dt_txt))
            })?;

        Ok(ForecastSample {
            timestamp: self.dt,
            local_time,
            temp_c: self.main.temp,
            temp_min_c: self.main.temp_min,
            temp_max_c: self.main.temp_max,
            condition: first_condition(self.weather),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;

    fn value<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn city_query_params() {
        let provider = OpenWeatherProvider::new("KEY".into());
        let params = provider.query_params(&LocationQuery::City("Oslo".into()));

        assert_eq!(value(&params, "q"), Some("Oslo"));
        assert_eq!(value(&params, "appid"), Some("KEY"));
        assert_eq!(value(&params, "units"), Some("metric"));
        assert_eq!(value(&params, "lat"), None);
    }

    #[test]
    fn coordinate_query_params() {
        let provider = OpenWeatherProvider::new("KEY".into());
        let params =
            provider.query_params(&LocationQuery::Coords(Coordinates::new(52.52, 13.405)));

        assert_eq!(value(&params, "lat"), Some("52.52"));
        assert_eq!(value(&params, "lon"), Some("13.405"));
        assert_eq!(value(&params, "q"), None);
    }

    #[test]
    fn forecast_entry_parses_provider_time() {
        let entry: OwForecastEntry = serde_json::from_value(serde_json::json!({
            "dt": 1_715_000_400,
            "dt_txt": "2024-05-06 12:00:00",
            "main": { "temp": 12.0, "temp_min": 10.0, "temp_max": 15.0 },
            "weather": [{ "main": "Rain", "description": "light rain", "icon": "10d" }]
        }))
        .unwrap();

        let sample = entry.into_sample().unwrap();

        assert!(sample.is_midday());
        assert_eq!(sample.temp_min_c, 10.0);
        assert_eq!(sample.condition.category, "Rain");
        assert_eq!(sample.condition.icon, "10d");
    }

    #[test]
    fn forecast_entry_rejects_bad_time() {
        let entry: OwForecastEntry = serde_json::from_value(serde_json::json!({
            "dt": 0,
            "dt_txt": "yesterday",
            "main": { "temp": 1.0, "temp_min": 1.0, "temp_max": 1.0 },
            "weather": []
        }))
        .unwrap();

        let err = entry.into_sample().unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(msg) if msg.contains("yesterday")));
    }

    #[test]
    fn missing_weather_block_is_unknown() {
        assert_eq!(first_condition(Vec::new()), Condition::unknown());
    }
}
