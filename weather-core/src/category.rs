//! Maps provider condition categories and icon codes onto the fixed set of
//! icons and themes the dashboard knows how to draw.
//!
//! Every mapping is total: anything outside the known set falls back to a
//! default instead of failing.

use serde::{Deserialize, Serialize};

/// Provider condition categories (the `weather[].main` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
}

impl Category {
    pub fn parse(value: &str) -> Option<Self> {
        let category = match value {
            "Clear" => Category::Clear,
            "Clouds" => Category::Clouds,
            "Rain" => Category::Rain,
            "Drizzle" => Category::Drizzle,
            "Thunderstorm" => Category::Thunderstorm,
            "Snow" => Category::Snow,
            "Mist" => Category::Mist,
            "Smoke" => Category::Smoke,
            "Haze" => Category::Haze,
            "Dust" => Category::Dust,
            "Fog" => Category::Fog,
            "Sand" => Category::Sand,
            "Ash" => Category::Ash,
            "Squall" => Category::Squall,
            "Tornado" => Category::Tornado,
            _ => return None,
        };
        Some(category)
    }

    fn is_wet(self) -> bool {
        matches!(self, Category::Rain | Category::Drizzle | Category::Thunderstorm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKind {
    ClearDay,
    ClearNight,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Cloudy,
    Rain,
    Snow,
    Fog,
}

impl IconKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IconKind::ClearDay => "CLEAR_DAY",
            IconKind::ClearNight => "CLEAR_NIGHT",
            IconKind::PartlyCloudyDay => "PARTLY_CLOUDY_DAY",
            IconKind::PartlyCloudyNight => "PARTLY_CLOUDY_NIGHT",
            IconKind::Cloudy => "CLOUDY",
            IconKind::Rain => "RAIN",
            IconKind::Snow => "SNOW",
            IconKind::Fog => "FOG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundTheme {
    Clear,
    Clouds,
    Rain,
    Snow,
    Atmosphere,
}

impl BackgroundTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundTheme::Clear => "bg-clear",
            BackgroundTheme::Clouds => "bg-clouds",
            BackgroundTheme::Rain => "bg-rain",
            BackgroundTheme::Snow => "bg-snow",
            BackgroundTheme::Atmosphere => "bg-atmosphere",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationTheme {
    Clear,
    Rain,
    Cloudy,
}

impl AnimationTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationTheme::Clear => "weather-anim-clear",
            AnimationTheme::Rain => "weather-anim-rain",
            AnimationTheme::Cloudy => "weather-anim-cloudy",
        }
    }
}

/// Color treatment of a single forecast card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTone {
    Clear,
    Rain,
    Snow,
    Cloudy,
}

impl CardTone {
    pub fn as_str(self) -> &'static str {
        match self {
            CardTone::Clear => "weather-clear",
            CardTone::Rain => "weather-rain",
            CardTone::Snow => "weather-snow",
            CardTone::Cloudy => "weather-cloudy",
        }
    }
}

/// Icon for a provider icon code such as "10d". Unknown codes draw a clear day.
pub fn icon_for(code: &str) -> IconKind {
    match code {
        "01d" => IconKind::ClearDay,
        "01n" => IconKind::ClearNight,
        "02d" => IconKind::PartlyCloudyDay,
        "02n" => IconKind::PartlyCloudyNight,
        "03d" | "03n" | "04d" | "04n" => IconKind::Cloudy,
        // no dedicated thunderstorm icon
        "09d" | "09n" | "10d" | "10n" | "11d" | "11n" => IconKind::Rain,
        "13d" | "13n" => IconKind::Snow,
        "50d" | "50n" => IconKind::Fog,
        _ => IconKind::ClearDay,
    }
}

pub fn background_for(category: &str) -> BackgroundTheme {
    match Category::parse(category) {
        Some(Category::Clear) => BackgroundTheme::Clear,
        Some(Category::Clouds) | None => BackgroundTheme::Clouds,
        Some(c) if c.is_wet() => BackgroundTheme::Rain,
        Some(Category::Snow) => BackgroundTheme::Snow,
        Some(_) => BackgroundTheme::Atmosphere,
    }
}

pub fn animation_for(category: &str) -> AnimationTheme {
    match Category::parse(category) {
        Some(Category::Clear) => AnimationTheme::Clear,
        Some(c) if c.is_wet() => AnimationTheme::Rain,
        Some(Category::Snow) => AnimationTheme::Rain,
        _ => AnimationTheme::Cloudy,
    }
}

pub fn card_tone_for(category: &str) -> CardTone {
    match Category::parse(category) {
        Some(Category::Clear) => CardTone::Clear,
        Some(c) if c.is_wet() => CardTone::Rain,
        Some(Category::Snow) => CardTone::Snow,
        _ => CardTone::Cloudy,
    }
}
