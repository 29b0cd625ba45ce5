//! External Service Adapters
//!
//! One adapter per information source. Every adapter returns a
//! `ServiceResult`, so faults surface as values rather than panics or
//! propagated errors.

pub mod browser;
pub mod clock;
pub mod encyclopedia;
pub mod inventory;
pub mod news;
pub mod weather;

use crate::config::Config;
use crate::error::ServiceError;
use std::sync::Arc;
use tracing::warn;

pub use browser::{Browser, SystemBrowser};
pub use clock::{Clock, SystemClock};
pub use encyclopedia::{EncyclopediaService, Lookup, WikipediaClient};
pub use inventory::{InventoryProbe, SysinfoProbe, SystemInventory};
pub use news::{NewsApiClient, NewsService};
pub use weather::{OpenWeatherClient, TemperatureUnit, WeatherReport, WeatherService};

/// All collaborators the dispatcher may call, built once per process
#[derive(Clone)]
pub struct Services {
    pub clock: Arc<dyn Clock>,
    pub weather: Arc<dyn WeatherService>,
    pub inventory: Arc<dyn InventoryProbe>,
    pub encyclopedia: Arc<dyn EncyclopediaService>,
    pub news: Arc<dyn NewsService>,
    pub browser: Arc<dyn Browser>,
}

impl Services {
    /// Wire the production adapters from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = build_http_client(config)?;
        Ok(Self {
            clock: Arc::new(SystemClock::new(&config.clock)),
            weather: Arc::new(OpenWeatherClient::new(http.clone(), &config.weather)),
            inventory: Arc::new(SysinfoProbe),
            encyclopedia: Arc::new(WikipediaClient::new(http.clone(), &config.encyclopedia)),
            news: Arc::new(NewsApiClient::new(http, &config.news)),
            browser: Arc::new(SystemBrowser),
        })
    }
}

/// Shared HTTP client with the configured timeout applied to every request
pub fn build_http_client(config: &Config) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .user_agent(concat!("ghost-protocol/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Map a transport error to the network failure for `action`
pub(crate) fn network_failure(action: &'static str, err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        warn!("⏱️ Request timed out while trying to {}: {}", action, err);
    } else {
        warn!("❌ Request failed while trying to {}: {}", action, err);
    }
    ServiceError::Network { action }
}
