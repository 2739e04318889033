//! Synthetic dataset generators.
//!
//! The traffic sets model 90 days of page views and unique users for a
//! press-release page and a story page; the engagement profile models
//! how far down a page readers actually get. All formulas are fixed so
//! every run renders the same picture.

use std::f64::consts::PI;

use crate::data::SampleSeries;

/// One day of traffic for the line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficPoint {
    /// Display label, `m/d` form.
    pub label: String,
    /// Page views.
    pub pv: f64,
    /// Unique users, always `<=` page views.
    pub uu: f64,
}

/// Which synthetic traffic set to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// Press-release traffic: small range, launch spike in the first days.
    Press,
    /// Story traffic: gentle growth over the period.
    Story,
}

/// Generate a daily traffic set starting August 1.
///
/// Weekends are dampened by 10%. Unique users trail page views by a
/// bounded delta of at most 3, hitting zero on a fixed cadence so the
/// two lines touch periodically.
pub fn traffic_series(kind: DatasetKind, days: usize) -> Vec<TrafficPoint> {
    // August 1 falls on a Friday in the modeled year.
    const START_WEEKDAY: usize = 5;

    let mut points = Vec::with_capacity(days);
    for i in 0..days {
        let weekday = (START_WEEKDAY + i) % 7;
        let weekend_factor = if weekday == 6 || weekday == 0 { 0.9 } else { 1.0 };
        let x = i as f64;

        let (pv, delta) = match kind {
            DatasetKind::Press => {
                let spike = if i < 5 {
                    1.2
                } else if i < 10 {
                    1.1
                } else {
                    1.0
                };
                let base = 30.0 + 8.0 * (x / 6.0).sin() + 6.0 * (x / 3.0).sin();
                let pv = (base * weekend_factor * spike).round().max(0.0);
                let delta = if i % 6 == 0 {
                    0.0
                } else {
                    (3.0 * (x * 1.3).sin()).round().abs().clamp(1.0, 3.0)
                };
                (pv, delta)
            }
            DatasetKind::Story => {
                let growth = 22.0 + (x * 0.18).min(16.0);
                let wave = 7.0 * (x / 7.0).sin() + 4.0 * (x / 3.2).sin();
                let pv = ((growth + wave) * weekend_factor).round().max(0.0);
                let delta = if i % 5 == 0 {
                    0.0
                } else {
                    (2.0 * (x * 1.5).sin()).round().abs().clamp(1.0, 3.0)
                };
                (pv, delta)
            }
        };

        points.push(TrafficPoint {
            label: day_label(i),
            pv,
            uu: (pv - delta).max(0.0),
        });
    }
    points
}

/// Engagement-over-scroll-position profile for the heat overlay.
///
/// Readers arrive, linger longest around the middle of the page, and
/// almost nobody reaches the footer: the curve rises from its baseline
/// to a mid-page peak, eases back down, then collapses over the last
/// few percent.
pub fn engagement_profile(samples: usize) -> SampleSeries {
    let mut values = Vec::with_capacity(samples);
    for i in 0..samples {
        let x = if samples > 1 {
            i as f64 / (samples - 1) as f64
        } else {
            0.0
        };
        let hump = 105.0 + 125.0 * (PI * x).sin().max(0.0);
        // Footer dropoff over the last 5% of the page.
        let tail = if x > 0.95 {
            1.0 - 0.65 * ((x - 0.95) / 0.05)
        } else {
            1.0
        };
        values.push((hump * tail).round());
    }
    SampleSeries::new(values)
}

/// `m/d` label for a zero-based day offset from August 1.
fn day_label(offset: usize) -> String {
    const MONTH_LENGTHS: [(usize, usize); 5] = [(8, 31), (9, 30), (10, 31), (11, 30), (12, 31)];

    let mut remaining = offset;
    for (month, len) in MONTH_LENGTHS {
        if remaining < len {
            return format!("{}/{}", month, remaining + 1);
        }
        remaining -= len;
    }
    // Past the modeled window; keep labels monotone rather than wrapping.
    format!("12/{}", remaining + 32)
}
