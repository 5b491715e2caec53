use tracing::info;

use crate::{
    model::{District, WeatherObservation},
    provider::{WeatherError, WeatherProvider},
    reference::ReferenceData,
    resolver,
};

/// Outcome of one district's weather lookup.
#[derive(Debug)]
pub struct DistrictWeather {
    pub district: District,
    pub weather: Result<WeatherObservation, WeatherError>,
}

#[derive(Debug)]
pub struct DivisionReport {
    /// Division name as requested, not as spelled in the reference data.
    pub division_name: String,
    pub entries: Vec<DistrictWeather>,
}

impl DivisionReport {
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.weather.is_err()).count()
    }
}

/// Resolve the division's districts and fetch weather for each in turn.
pub async fn build_report(
    division_name: &str,
    data: &ReferenceData,
    provider: &dyn WeatherProvider,
) -> DivisionReport {
    build_report_with(division_name, data, provider, |_| {}).await
}

/// Like [`build_report`], calling `on_entry` as soon as each district's lookup
/// finishes. A failed lookup is recorded and the loop moves on.
pub async fn build_report_with<F>(
    division_name: &str,
    data: &ReferenceData,
    provider: &dyn WeatherProvider,
    mut on_entry: F,
) -> DivisionReport
where
    F: FnMut(&DistrictWeather),
{
    let districts = resolver::resolve(division_name, &data.divisions, &data.districts);
    info!(division = division_name, districts = districts.len(), "Resolved districts");

    let mut entries = Vec::with_capacity(districts.len());
    for district in districts {
        let weather = provider.current_weather(&district.lat, &district.lon).await;
        let entry = DistrictWeather {
            district: district.clone(),
            weather,
        };
        on_entry(&entry);
        entries.push(entry);
    }

    DivisionReport {
        division_name: division_name.to_string(),
        entries,
    }
}
