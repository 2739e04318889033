//! Synthetic analytics data.
//!
//! Everything the viewer displays is generated in-memory: the engagement
//! profile that drives the heat overlay and the daily traffic sets shown
//! in the line chart. There is no file ingestion or network fetching.

mod series;
mod synth;

pub use series::SampleSeries;
pub use synth::{engagement_profile, traffic_series, DatasetKind, TrafficPoint};
