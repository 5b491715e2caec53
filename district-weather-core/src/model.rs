use serde::{Deserialize, Serialize};

/// Top-level administrative region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: String,
    pub name: String,
    pub bn_name: String,
    /// Reference to the division's district listing.
    pub url: String,
}

/// Sub-region belonging to exactly one [`Division`].
///
/// Coordinates are kept as the text found in the source data and handed to the
/// weather provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub division_id: String,
    pub name: String,
    pub bn_name: String,
    pub lat: String,
    pub lon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Condition category, e.g. "Clouds".
    pub main: String,
    pub description: String,
    pub temperature_c: f64,
}
