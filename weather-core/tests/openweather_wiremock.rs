//! OpenWeather client against a mock HTTP server.

use weather_dash_core::{
    Coordinates, DashboardError, LocationQuery, OpenWeatherProvider, WeatherProvider, aggregate,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn current_body() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 10.75, "lat": 59.91 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "main": {
            "temp": 11.3,
            "feels_like": 10.4,
            "temp_min": 10.1,
            "temp_max": 12.2,
            "pressure": 1008,
            "humidity": 81
        },
        "wind": { "speed": 4.6, "deg": 210 },
        "dt": 1715000400,
        "name": "Oslo",
        "cod": 200
    })
}

fn forecast_entry(dt: i64, dt_txt: &str, min: f64, max: f64, main: &str) -> serde_json::Value {
    serde_json::json!({
        "dt": dt,
        "main": { "temp": (min + max) / 2.0, "temp_min": min, "temp_max": max, "humidity": 70 },
        "weather": [{ "id": 800, "main": main, "description": main.to_lowercase(), "icon": "01d" }],
        "wind": { "speed": 3.0, "deg": 180 },
        "dt_txt": dt_txt
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 4,
        "list": [
            forecast_entry(1715000400, "2024-05-06 09:00:00", 9.0, 11.0, "Clouds"),
            forecast_entry(1715011200, "2024-05-06 12:00:00", 10.0, 15.0, "Rain"),
            forecast_entry(1715022000, "2024-05-06 15:00:00", 8.5, 13.0, "Clouds"),
            forecast_entry(1715086800, "2024-05-07 09:00:00", 6.0, 8.0, "Clear")
        ],
        "city": { "name": "Oslo", "country": "NO" }
    })
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_endpoints(
        "TEST_KEY".to_string(),
        format!("{}/data/2.5/weather", server.uri()),
        format!("{}/data/2.5/forecast", server.uri()),
    )
}

async fn mount(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/data/2.5/{endpoint}")))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_by_city_returns_current_and_forecast() {
    let server = MockServer::start().await;
    mount(&server, "weather", ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount(&server, "forecast", ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let report = provider_for(&server)
        .fetch(&LocationQuery::City("Oslo".into()))
        .await
        .expect("fetch should succeed");

    assert_eq!(report.current.location_name, "Oslo");
    assert_eq!(report.current.temp_c, 11.3);
    assert_eq!(report.current.humidity_pct, 81);
    assert_eq!(report.current.pressure_hpa, 1008.0);
    assert_eq!(report.current.wind_speed_mps, 4.6);
    assert_eq!(report.current.condition.category, "Rain");
    assert_eq!(report.forecast.len(), 4);

    let days = aggregate(&report.forecast);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].condition.category, "Rain");
    assert_eq!(days[0].min_temp_c, 8.5);
    assert_eq!(days[0].max_temp_c, 15.0);
    assert_eq!(days[1].condition.category, "Clear");
}

#[tokio::test]
async fn city_request_sends_key_and_metric_units() {
    let server = MockServer::start().await;
    for (endpoint, body) in [("weather", current_body()), ("forecast", forecast_body())] {
        Mock::given(method("GET"))
            .and(path(format!("/data/2.5/{endpoint}")))
            .and(query_param("q", "Oslo"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let result = provider_for(&server)
        .fetch(&LocationQuery::City("Oslo".into()))
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn coordinate_request_sends_lat_lon() {
    let server = MockServer::start().await;
    for (endpoint, body) in [("weather", current_body()), ("forecast", forecast_body())] {
        Mock::given(method("GET"))
            .and(path(format!("/data/2.5/{endpoint}")))
            .and(query_param("lat", "59.91"))
            .and(query_param("lon", "10.75"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let result = provider_for(&server)
        .fetch(&LocationQuery::Coords(Coordinates::new(59.91, 10.75)))
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn provider_message_is_surfaced_on_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        "weather",
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
    )
    .await;
    mount(&server, "forecast", ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let err = provider_for(&server)
        .fetch(&LocationQuery::City("Atlantis".into()))
        .await
        .unwrap_err();

    assert_eq!(err, DashboardError::Fetch("city not found".into()));
    assert_eq!(err.to_string(), "fetch failed: city not found");
}

#[tokio::test]
async fn forecast_failure_fails_the_whole_fetch() {
    let server = MockServer::start().await;
    mount(&server, "weather", ResponseTemplate::new(200).set_body_json(current_body())).await;
    mount(
        &server,
        "forecast",
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })),
    )
    .await;

    let err = provider_for(&server)
        .fetch(&LocationQuery::City("Oslo".into()))
        .await
        .unwrap_err();

    assert!(
        matches!(&err, DashboardError::Fetch(msg) if msg.starts_with("Invalid API key")),
        "Expected provider message, got: {err:?}"
    );
}

#[tokio::test]
async fn non_json_error_body_reports_status() {
    let server = MockServer::start().await;
    mount(&server, "weather", ResponseTemplate::new(502).set_body_string("Bad Gateway")).await;
    mount(&server, "forecast", ResponseTemplate::new(502).set_body_string("Bad Gateway")).await;

    let err = provider_for(&server)
        .fetch(&LocationQuery::City("Oslo".into()))
        .await
        .unwrap_err();

    assert!(
        matches!(&err, DashboardError::Fetch(msg) if msg.contains("502")),
        "Expected status in message, got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_fetch_error() {
    let server = MockServer::start().await;
    mount(&server, "weather", ResponseTemplate::new(200).set_body_string("not valid json")).await;
    mount(&server, "forecast", ResponseTemplate::new(200).set_body_json(forecast_body())).await;

    let err = provider_for(&server)
        .fetch(&LocationQuery::City("Oslo".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, DashboardError::Fetch(_)), "got: {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_fetch_error() {
    let server = MockServer::start().await;
    let provider = provider_for(&server);
    drop(server);

    let err = provider
        .fetch(&LocationQuery::City("Oslo".into()))
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("fetch failed: "), "got: {msg}");
    assert!(!msg.contains("TEST_KEY"), "API key leaked into: {msg}");
}
