//! Statistical utilities for the cpkit project.
//!
//! This crate is domain-agnostic: it operates on raw `f64` slices and knows
//! nothing about deviation samples or specification limits.
//!
//! - **Descriptive statistics**: arithmetic mean, Bessel-corrected sample
//!   standard deviation, and a combined [`descriptive::DescriptiveStats`]
//!   summary.
//!
//! # Examples
//!
//! ```
//! use cpkit_stats::descriptive::{self, DescriptiveStats};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let mean = descriptive::mean(&values);
//! assert_eq!(mean, 3.0);
//! assert!((descriptive::sample_std_dev(&values, mean) - 2.5_f64.sqrt()).abs() < 1e-12);
//!
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.min, 1.0);
//! assert_eq!(stats.max, 5.0);
//! ```

pub mod descriptive;
