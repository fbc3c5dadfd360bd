//! quadfit-cli: the reporting side of quadfit.
//!
//! Supplies sample sets (built-in or from JSON configuration), runs the
//! quadratic fit from the `quadfit` crate, and formats the results.
pub mod config;
pub mod datasets;
pub mod fit;
pub mod report;
