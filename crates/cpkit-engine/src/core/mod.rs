//! Sample model and the capability calculation.
//!
//! - [`Sample`] / [`SampleSet`] - Ordered paired deviation measurements
//! - [`CapabilityResult`] - Mean, sample standard deviation, and CPK per axis
//! - [`compute_capability`] - Full recomputation from a sample sequence
//! - [`Suggestion`] - Advisory category derived from the two CPK values
//!
//! # Example
//!
//! ```
//! use cpkit_engine::{Sample, Suggestion, compute_capability};
//!
//! let samples = [
//!     Sample::new(1, 0.001, 0.002),
//!     Sample::new(2, -0.001, -0.002),
//!     Sample::new(3, 0.0005, 0.001),
//! ];
//! let result = compute_capability(&samples, 0.02).unwrap();
//! assert!(result.x.cpk > result.y.cpk);
//! assert_eq!(result.suggestion(), Some(Suggestion::Excellent));
//! ```

pub use self::{capability::*, sample::*, suggestion::*};

mod capability;
mod sample;
mod suggestion;
