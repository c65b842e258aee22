use thiserror::Error;

/// Errors surfaced to the user. Each one ends the current operation only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The search box was empty; no request was made.
    #[error("Please enter a city name.")]
    EmptyQuery,

    /// Position could not be determined. Carries the platform's reason.
    #[error("Unable to retrieve your location. {0}")]
    Geolocation(String),

    /// Transport failure, non-2xx response or unreadable payload.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// The request URL carries the API key, so it is stripped before display.
impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Fetch(err.without_url().to_string())
    }
}
