use std::io::{self, Write};

use chrono::Local;
use weather_dash_core::{
    CurrentView, DayView, RenderSink, Theme,
    category::{BackgroundTheme, CardTone, IconKind},
};

/// Draws dashboard views as plain text.
///
/// Current conditions and the forecast are buffered and written together once
/// the theme arrives, so a frame is never half drawn.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    current: Option<CurrentView>,
    days: Vec<DayView>,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current: None,
            days: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, theme: Theme) -> io::Result<()> {
        let Some(current) = self.current.take() else {
            return Ok(());
        };
        let days = std::mem::take(&mut self.days);

        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} {}  (updated {})",
            banner(theme.background),
            current.location,
            Local::now().format("%H:%M")
        )?;
        writeln!(
            self.out,
            "  {} {}{}  {}",
            glyph(current.icon),
            current.temperature,
            current.temp_unit,
            current.description
        )?;
        writeln!(
            self.out,
            "  Feels like {}{} | Humidity {}% | Wind {:.1} {} | Pressure {:.0} hPa",
            current.feels_like,
            current.temp_unit,
            current.humidity_pct,
            current.wind_speed,
            current.speed_unit,
            current.pressure_hpa
        )?;

        if !days.is_empty() {
            writeln!(self.out)?;
        }
        for day in &days {
            writeln!(
                self.out,
                "{} {:<4} {}  {:>4}{} / {:>4}{}  {}",
                card_mark(day.tone),
                day.day_label,
                glyph(day.icon),
                day.high,
                day.temp_unit,
                day.low,
                day.temp_unit,
                day.description
            )?;
        }

        self.out.flush()
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn reset(&mut self) {
        self.current = None;
        self.days.clear();
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            eprintln!("Fetching weather...");
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn render_current(&mut self, current: &CurrentView) {
        self.current = Some(current.clone());
    }

    fn render_forecast(&mut self, days: &[DayView]) {
        self.days = days.to_vec();
    }

    fn set_theme(&mut self, theme: Theme) {
        if let Err(e) = self.draw(theme) {
            tracing::warn!("Failed to write dashboard: {e}");
        }
    }
}

fn glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::ClearDay => "☀",
        IconKind::ClearNight => "☾",
        IconKind::PartlyCloudyDay | IconKind::PartlyCloudyNight => "⛅",
        IconKind::Cloudy => "☁",
        IconKind::Rain => "☂",
        IconKind::Snow => "❄",
        IconKind::Fog => "≡",
    }
}

/// Left-edge marker standing in for the forecast card color.
fn card_mark(tone: CardTone) -> &'static str {
    match tone {
        CardTone::Clear => "|",
        CardTone::Rain => "/",
        CardTone::Snow => "*",
        CardTone::Cloudy => "~",
    }
}

fn banner(background: BackgroundTheme) -> &'static str {
    match background {
        BackgroundTheme::Clear => "==",
        BackgroundTheme::Clouds => "~~",
        BackgroundTheme::Rain => "//",
        BackgroundTheme::Snow => "**",
        BackgroundTheme::Atmosphere => "::",
    }
}
