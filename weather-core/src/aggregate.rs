//! Buckets 3-hour forecast samples into calendar days.

use chrono::NaiveDate;

use crate::model::{DailySummary, ForecastSample};

/// Number of days the dashboard shows.
pub const MAX_DAYS: usize = 5;

/// Samples seen so far for one date. Only ever created from a sample, so a
/// group is never empty.
struct DayGroup<'a> {
    date: NaiveDate,
    first: &'a ForecastSample,
    midday: Option<&'a ForecastSample>,
    min_c: f64,
    max_c: f64,
}

impl<'a> DayGroup<'a> {
    fn start(sample: &'a ForecastSample) -> Self {
        Self {
            date: sample.date(),
            first: sample,
            midday: sample.is_midday().then_some(sample),
            min_c: sample.temp_min_c,
            max_c: sample.temp_max_c,
        }
    }

    fn absorb(&mut self, sample: &'a ForecastSample) {
        self.min_c = self.min_c.min(sample.temp_min_c);
        self.max_c = self.max_c.max(sample.temp_max_c);
        if sample.is_midday() {
            self.midday = Some(sample);
        }
    }

    fn into_summary(self) -> DailySummary {
        let representative = self.midday.unwrap_or(self.first);
        DailySummary {
            date: self.date,
            day_label: self.date.format("%a").to_string(),
            min_temp_c: self.min_c,
            max_temp_c: self.max_c,
            condition: representative.condition.clone(),
        }
    }
}

/// Collapses time-ordered samples into at most [`MAX_DAYS`] daily summaries.
///
/// Days come out in the order they are first seen; the input is not re-sorted.
/// Each day's condition is the 12:00:00 sample's, or the day's first sample
/// when there is no midday tick.
pub fn aggregate(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut days: Vec<DayGroup<'_>> = Vec::new();

    for sample in samples {
        let date = sample.date();
        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => day.absorb(sample),
            None => days.push(DayGroup::start(sample)),
        }
    }

    tracing::debug!(
        samples = samples.len(),
        days = days.len(),
        "aggregated forecast samples"
    );

    days.into_iter()
        .take(MAX_DAYS)
        .map(DayGroup::into_summary)
        .collect()
}
