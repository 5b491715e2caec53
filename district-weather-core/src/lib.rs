//! Core library for the `district-weather` CLI.
//!
//! This crate defines:
//! - Division/district reference data and its loader
//! - District lookup by division name
//! - Abstraction over the weather provider (OpenWeather)
//! - Configuration & credentials handling
//! - The per-division report driver
//!
//! It is used by `district-weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;
pub mod reference;
pub mod report;
pub mod resolver;

pub use config::Config;
pub use model::{District, Division, WeatherObservation};
pub use provider::{WeatherError, WeatherProvider};
pub use reference::ReferenceData;
pub use report::{DistrictWeather, DivisionReport};
