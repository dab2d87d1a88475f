use crate::theme::ThemeVariant;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;

const CONFIG_PATH: &str = "config.toml";

fn default_portfolio_path() -> String {
    "portfolio.toml".to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeVariant,
    #[serde(default = "default_portfolio_path")]
    pub portfolio_path: String,
    /// Input poll timeout; also the cadence of the slide transition.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            portfolio_path: default_portfolio_path(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Creates a default config on first run.
        let figment = Figment::new().merge(Toml::file(CONFIG_PATH));

        match figment.extract() {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let default_settings = Settings::default();
                default_settings.save().unwrap_or_default();
                Ok(default_settings)
            }
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let toml_string = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(CONFIG_PATH, toml_string)
    }
}
