//! Display-ready records handed to a [`RenderSink`](crate::RenderSink).

use serde::Serialize;

use crate::{
    aggregate::aggregate,
    category::{
        AnimationTheme, BackgroundTheme, CardTone, IconKind, animation_for, background_for,
        card_tone_for, icon_for,
    },
    model::{CurrentConditions, ForecastSample},
    units::{UnitPreference, round_for_display, to_display_speed, to_display_temp},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView {
    pub location: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub temp_unit: &'static str,
    pub description: String,
    pub icon: IconKind,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub speed_unit: &'static str,
    pub pressure_hpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub day_label: String,
    pub high: i64,
    pub low: i64,
    pub temp_unit: &'static str,
    pub icon: IconKind,
    pub description: String,
    pub animation: AnimationTheme,
    pub tone: CardTone,
}

/// Page-wide theme, driven by the current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: BackgroundTheme,
    pub animation: AnimationTheme,
}

pub fn current_view(current: &CurrentConditions, units: UnitPreference) -> CurrentView {
    CurrentView {
        location: current.location_name.clone(),
        temperature: round_for_display(to_display_temp(current.temp_c, units)),
        feels_like: round_for_display(to_display_temp(current.feels_like_c, units)),
        temp_unit: units.temp_label(),
        description: current.condition.description.clone(),
        icon: icon_for(&current.condition.icon),
        humidity_pct: current.humidity_pct,
        wind_speed: to_display_speed(current.wind_speed_mps, units),
        speed_unit: units.speed_label(),
        pressure_hpa: current.pressure_hpa,
    }
}

pub fn day_views(forecast: &[ForecastSample], units: UnitPreference) -> Vec<DayView> {
    aggregate(forecast)
        .into_iter()
        .map(|day| DayView {
            day_label: day.day_label,
            high: round_for_display(to_display_temp(day.max_temp_c, units)),
            low: round_for_display(to_display_temp(day.min_temp_c, units)),
            temp_unit: units.temp_label(),
            icon: icon_for(&day.condition.icon),
            animation: animation_for(&day.condition.category),
            tone: card_tone_for(&day.condition.category),
            description: day.condition.description,
        })
        .collect()
}

pub fn theme_for(current: &CurrentConditions) -> Theme {
    Theme {
        background: background_for(&current.condition.category),
        animation: animation_for(&current.condition.category),
    }
}
