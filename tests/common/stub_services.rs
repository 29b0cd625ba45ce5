//! Canned service adapters

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use ghost_protocol::error::{ServiceError, ServiceResult};
use ghost_protocol::services::{
    Browser, Clock, EncyclopediaService, InventoryProbe, Lookup, NewsService, Services,
    SystemInventory, TemperatureUnit, WeatherReport, WeatherService,
};
use std::sync::{Arc, Mutex};

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(330 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 21, 9, 5, 0)
            .unwrap()
    }

    fn location(&self) -> &str {
        "Colombo Sri Lanka"
    }
}

pub struct StubWeather(pub ServiceResult<WeatherReport>);

#[async_trait]
impl WeatherService for StubWeather {
    async fn fetch(&self) -> ServiceResult<WeatherReport> {
        self.0.clone()
    }
}

pub struct StubInventory;

#[async_trait]
impl InventoryProbe for StubInventory {
    async fn fetch(&self) -> ServiceResult<SystemInventory> {
        Ok(SystemInventory {
            manufacturer: Some("Framework".into()),
            model: Some("Laptop 13".into()),
            processor: Some("AMD Ryzen 7 7840U".into()),
            os: "Fedora Linux 40".into(),
            runtime_version: "0.1.0".into(),
            total_ram_bytes: 32 * 1024 * 1024 * 1024,
            fixed_storage_bytes: vec![1024 * 1024 * 1024 * 1024],
        })
    }
}

/// Records topics; "mercury" is ambiguous, "zzqx" has no page
#[derive(Default)]
pub struct StubEncyclopedia {
    pub topics: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl EncyclopediaService for StubEncyclopedia {
    async fn fetch(&self, topic: &str) -> ServiceResult<Lookup> {
        self.topics.lock().unwrap().push(topic.to_string());
        match topic {
            "mercury" => Ok(Lookup::Disambiguation {
                topic: topic.to_string(),
                options: vec!["Mercury (planet)".into(), "Mercury (element)".into()],
            }),
            "zzqx" => Err(ServiceError::NoMatch(topic.to_string())),
            _ => Ok(Lookup::Summary(format!("{} is a topic.", topic))),
        }
    }
}

pub struct StubNews(pub ServiceResult<Vec<String>>);

#[async_trait]
impl NewsService for StubNews {
    async fn fetch(&self) -> ServiceResult<Vec<String>> {
        self.0.clone()
    }
}

/// Records every URL it is asked to open
#[derive(Default)]
pub struct RecordingBrowser {
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl Browser for RecordingBrowser {
    fn open(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

pub fn sunny() -> WeatherReport {
    WeatherReport {
        temperature: 30.0,
        unit: TemperatureUnit::Celsius,
        pressure: 1010.0,
        humidity: 70.0,
        description: "clear sky".into(),
    }
}

/// Handles kept by tests to inspect side effects
pub struct Recorders {
    pub opened: Arc<Mutex<Vec<String>>>,
    pub topics: Arc<Mutex<Vec<String>>>,
}

pub fn stub_services(weather: ServiceResult<WeatherReport>) -> (Services, Recorders) {
    let browser = RecordingBrowser::default();
    let encyclopedia = StubEncyclopedia::default();
    let recorders = Recorders {
        opened: browser.opened.clone(),
        topics: encyclopedia.topics.clone(),
    };

    let services = Services {
        clock: Arc::new(FixedClock),
        weather: Arc::new(StubWeather(weather)),
        inventory: Arc::new(StubInventory),
        encyclopedia: Arc::new(encyclopedia),
        news: Arc::new(StubNews(Ok(vec![
            "Markets rally".into(),
            "Rain expected".into(),
        ]))),
        browser: Arc::new(browser),
    };
    (services, recorders)
}
