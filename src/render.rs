//! Response Renderer
//!
//! Turns handler output into the text that is spoken. Pure string work;
//! nothing here calls a service.

use crate::error::ServiceResult;
use crate::services::{Lookup, SystemInventory, TemperatureUnit, WeatherReport};

pub const UNRECOGNIZED: &str = "Command not recognized!";
pub const TERMINATING: &str = "Terminating Session...";
pub const OPENING_BROWSER: &str = "Opening Web Browser...";
pub const ACCESSING_SERVER: &str = "Accessing Main Server...";
pub const FETCHING_NEWS: &str = "Fetching top news headlines...";

/// Raw handler output awaiting rendering
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    DateTime { location: String, formatted: String },
    Weather(ServiceResult<WeatherReport>),
    SystemInfo(ServiceResult<SystemInventory>),
    Lookup(ServiceResult<Lookup>),
    News(ServiceResult<Vec<String>>),
    SearchLaunched,
    ServerLaunched,
    Unrecognized,
}

/// Final text ready for the output capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse(pub String);

impl RenderedResponse {
    pub fn text(&self) -> &str {
        &self.0
    }
}

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn render(reply: &Reply) -> RenderedResponse {
    let text = match reply {
        Reply::DateTime {
            location,
            formatted,
        } => format!("The current date and time in {} is {}", location, formatted),
        Reply::Weather(result) => render_weather(result),
        Reply::SystemInfo(result) => match result {
            Ok(inventory) => inventory.describe(),
            Err(e) => e.to_string(),
        },
        Reply::Lookup(result) => match result {
            Ok(Lookup::Summary(summary)) => summary.clone(),
            Ok(Lookup::Disambiguation { topic, options }) => format!(
                "Multiple results found for {}. Select options: {}",
                topic,
                options.join(", ")
            ),
            Err(e) => e.to_string(),
        },
        Reply::News(result) => match result {
            Ok(headlines) if headlines.is_empty() => {
                format!("{} There are no headlines right now.", FETCHING_NEWS)
            }
            Ok(headlines) => format!("{} {}", FETCHING_NEWS, headlines_to_prose(headlines)),
            Err(e) => format!("{} {}", FETCHING_NEWS, e),
        },
        Reply::SearchLaunched => OPENING_BROWSER.to_string(),
        Reply::ServerLaunched => ACCESSING_SERVER.to_string(),
        Reply::Unrecognized => UNRECOGNIZED.to_string(),
    };
    RenderedResponse(text)
}

/// Weather sentence, or the adapter's diagnostic
pub fn render_weather(result: &ServiceResult<WeatherReport>) -> String {
    match result {
        Ok(report) => {
            let (temperature, label) = spoken_temperature(report.temperature, report.unit);
            format!(
                "The temperature is {} {}, the pressure is {}hPa, and the humidity is {}% with {}.",
                round2(temperature),
                label,
                round2(report.pressure),
                round2(report.humidity),
                report.description
            )
        }
        Err(e) => e.to_string(),
    }
}

/// Absolute temperatures are spoken in Celsius
fn spoken_temperature(value: f64, unit: TemperatureUnit) -> (f64, &'static str) {
    match unit {
        TemperatureUnit::Celsius => (value, "degrees Celsius"),
        TemperatureUnit::Kelvin => (value - 273.15, "degrees Celsius"),
        TemperatureUnit::Fahrenheit => (value, "degrees Fahrenheit"),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// "Headline 1: A. Headline 2: B."
pub fn headlines_to_prose(headlines: &[String]) -> String {
    headlines
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let title = title.trim();
            if title.ends_with(['.', '!', '?']) {
                format!("Headline {}: {}", idx + 1, title)
            } else {
                format!("Headline {}: {}.", idx + 1, title)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Opening greeting spoken before mode selection
pub fn greeting(
    hour: u32,
    location: &str,
    formatted_date_time: &str,
    weather: &ServiceResult<WeatherReport>,
) -> RenderedResponse {
    let part_of_day = match hour {
        0..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };
    let date_time = formatted_date_time.replace("AM", "am").replace("PM", "pm");

    RenderedResponse(format!(
        "Good {}! Welcome to the Ghost Protocol! The current date and time in {} is {}. {}",
        part_of_day,
        location,
        date_time,
        render_weather(weather)
    ))
}
