//! Heatlens - a terminal-based analytics viewer with a heat overlay.
//!
//! Heatlens renders two interactive surfaces over synthetic analytics
//! data: a multi-series traffic line chart, and a scroll-position heat
//! overlay composited on top of a content block. The overlay engine is
//! the interesting part: a pure gradient mapper, a freshly-measured
//! surface sizer, a full-repaint renderer and a reactive controller
//! driving the three repaint triggers.
//!
//! # Example
//!
//! ```
//! use heatlens::data::SampleSeries;
//! use heatlens::heat::gradient::{compute_gradient_stops, STANDARD_RAMP};
//!
//! let series = SampleSeries::new(vec![100.0, 150.0, 200.0]);
//! let stops = compute_gradient_stops(&series, 0.6, &STANDARD_RAMP);
//! assert_eq!(stops.len(), 3);
//! assert_eq!(stops[2].position, 1.0);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod data;
pub mod error;
pub mod heat;
pub mod ui;

pub use error::{HeatlensError, Result};
