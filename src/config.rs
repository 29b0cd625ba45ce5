use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment overrides for the provider keys
pub const WEATHER_KEY_ENV: &str = "GHOST_WEATHER_API_KEY";
pub const NEWS_KEY_ENV: &str = "GHOST_NEWS_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub weather: WeatherConfig,
    pub news: NewsConfig,
    pub clock: ClockConfig,
    pub encyclopedia: EncyclopediaConfig,
    pub search: SearchConfig,
    pub server: ServerConfig,
    pub speech: SpeechConfig,

    /// Upper bound for every outbound HTTP request
    pub http_timeout_secs: u64,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub city: String,
    /// OpenWeatherMap unit system: "metric", "imperial" or "standard"
    pub units: String,
    pub base_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            city: "Colombo".to_string(),
            units: "metric".to_string(),
            base_url: "http://api.openweathermap.org/data/2.5/weather".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub api_key: Option<String>,
    pub country: String,
    pub max_headlines: usize,
    pub base_url: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            country: "us".to_string(),
            max_headlines: 10,
            base_url: "https://newsapi.org/v2/top-headlines".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Spoken name of the target location
    pub location: String,
    /// Fixed UTC offset of the target timezone
    pub utc_offset_minutes: i32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            location: "Colombo Sri Lanka".to_string(),
            utc_offset_minutes: 330,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncyclopediaConfig {
    pub base_url: String,
    pub sentences: usize,
    pub max_candidates: usize,
}

impl Default for EncyclopediaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org".to_string(),
            sentences: 3,
            max_candidates: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub engine_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: "https://www.google.com/search?q=".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// "system", "speechd" or "console"
    pub tts_engine: String,
    /// "speechd" or "none"
    pub asr_engine: String,
    /// Longest wait for one spoken command
    pub listen_timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            tts_engine: "system".to_string(),
            asr_engine: "speechd".to_string(),
            listen_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults when absent or corrupt
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    let backup_path = path.with_extension("json.corrupt");
                    let _ = std::fs::rename(path, &backup_path);
                    Self::default()
                }
            }
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Keys from the environment (or a `.env` file) win over the file
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(WEATHER_KEY_ENV) {
            self.weather.api_key = Some(key);
        }
        if let Ok(key) = std::env::var(NEWS_KEY_ENV) {
            self.news.api_key = Some(key);
        }
    }

    pub fn http_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.http_timeout_secs.max(1))
    }

    pub fn listen_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.speech.listen_timeout_secs.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            news: NewsConfig::default(),
            clock: ClockConfig::default(),
            encyclopedia: EncyclopediaConfig::default(),
            search: SearchConfig::default(),
            server: ServerConfig::default(),
            speech: SpeechConfig::default(),
            http_timeout_secs: 10,
            log_level: "INFO".to_string(),
        }
    }
}

/// Trim a configured key, treating blank values as absent
pub fn non_empty(key: &Option<String>) -> Option<&str> {
    key.as_deref().map(str::trim).filter(|k| !k.is_empty())
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ghost-protocol")
        .join("config.json")
}
