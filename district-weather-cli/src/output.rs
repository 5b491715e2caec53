use district_weather_core::{DistrictWeather, Division, WeatherObservation};
use std::io::{self, Write};
use tracing::error;

pub fn print_header(out: &mut impl Write, division: &str) -> io::Result<()> {
    writeln!(out, "Districts in {division} Division:")
}

/// Print one district. Failed lookups are logged instead of printed.
pub fn print_entry(out: &mut impl Write, entry: &DistrictWeather) -> io::Result<()> {
    writeln!(out, "District Name: {}", entry.district.name)?;

    match &entry.weather {
        Ok(weather) => writeln!(out, "{}", summary(weather)),
        Err(err) => {
            error!("Error fetching weather forecast for {}: {err}", entry.district.name);
            Ok(())
        }
    }
}

pub fn summary(weather: &WeatherObservation) -> String {
    format!(
        "Weather Forecast: {} - {}, Temperature: {:.1}°C",
        weather.main, weather.description, weather.temperature_c
    )
}

pub fn print_divisions(out: &mut impl Write, divisions: &[Division]) -> io::Result<()> {
    for d in divisions {
        writeln!(out, "{:>3}  {:<12} {}", d.id, d.name, d.bn_name)?;
    }
    Ok(())
}
