use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SETTINGS_FILE: &str = "calc_engine.json";
const SETTINGS_VARIABLE: &str = "CALC_ENGINE_SETTINGS";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// most decimals shown for a result
    pub fraction_digits: usize,
    pub prompt: String,
    /// off/error/warn/info/debug/trace, RUST_LOG still takes precedence
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fraction_digits: 6,
            prompt: "> ".into(),
            log_level: "info".into(),
        }
    }
}

impl Settings {
    /// Reads the file named by `CALC_ENGINE_SETTINGS`, or `calc_engine.json`.
    pub fn load() -> serde_json::Result<Settings> {
        let path = std::env::var(SETTINGS_VARIABLE).unwrap_or_else(|_| SETTINGS_FILE.to_owned());
        Self::load_from(path)
    }

    /// A missing file gives the defaults; a malformed one is an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> serde_json::Result<Settings> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(_) => Ok(Settings::default()),
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Settings> {
        serde_json::from_str(text)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
