/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-inches.
 *
 * gear-inches is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-inches is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-inches. If not, see <https://www.gnu.org/licenses/>.
 */

use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DemoSettings {
    log_filename: String,
    decimal_places: u32
}

impl DemoSettings {
    const LOG_FILENAME: &'static str = "log_filename";
    const DECIMAL_PLACES: &'static str = "decimal_places";
    pub const CONFIG_FILENAME: &'static str = "gear-inches-conf";

    const DEFAULT_LOG_FILENAME: &'static str = "gear_inches.log";
    const DEFAULT_DECIMAL_PLACES: u32 = 4;
    const MAX_DECIMAL_PLACES: u32 = 15;

    pub fn default() -> Self {
        DemoSettings {
            log_filename: DemoSettings::DEFAULT_LOG_FILENAME.to_string(),
            decimal_places: DemoSettings::DEFAULT_DECIMAL_PLACES
        }
    }

    pub fn load() -> (Self, Vec<String>) {
        Self::load_from(DemoSettings::CONFIG_FILENAME)
    }

    /// Load settings from the named config file (extension optional) falling
    /// back to the defaults for anything it doesn't set.
    ///
    /// This never fails. A file that can't be read or decoded gives the
    /// defaults, and the problems found are returned so they can be logged
    /// once logging is up.
    pub fn load_from(config_name: &str) -> (Self, Vec<String>) {
        let mut warnings: Vec<String> = Vec::new();
        let mut settings = match Self::try_load_from(config_name) {
            Ok(settings) => settings,
            Err(e) => {
                warnings.push(format!("Failed to load settings, using defaults. {}", e.to_string()));
                DemoSettings::default()
            }
        };
        if settings.decimal_places > DemoSettings::MAX_DECIMAL_PLACES {
            warnings.push(format!("decimal_places {} is beyond f64 precision, using {}",
                                  settings.decimal_places, DemoSettings::MAX_DECIMAL_PLACES));
            settings.decimal_places = DemoSettings::MAX_DECIMAL_PLACES;
        }
        (settings, warnings)
    }

    fn try_load_from(config_name: &str) -> Result<Self, ConfigError> {
        Self::defaults_builder()?
            .add_source(config::File::with_name(config_name).required(false))
            .build()?
            .try_deserialize()
    }

    fn defaults_builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default(DemoSettings::LOG_FILENAME, DemoSettings::DEFAULT_LOG_FILENAME)?
            .set_default(DemoSettings::DECIMAL_PLACES, DemoSettings::DEFAULT_DECIMAL_PLACES as i64)
    }

    pub fn log_filename(&self) -> &str {
        &self.log_filename
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use super::DemoSettings;

    fn write_test_config(test_name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gear-inches-settings-{}.toml", test_name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn load_test_config(test_name: &str, contents: &str) -> (DemoSettings, Vec<String>) {
        let path = write_test_config(test_name, contents);
        let loaded = DemoSettings::load_from(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        loaded
    }

    #[test]
    fn missing_file_gives_defaults() {
        let (settings, warnings) = DemoSettings::load_from("this-config-does-not-exist");
        assert_eq!(settings, DemoSettings::default());
        assert_eq!(settings.log_filename(), "gear_inches.log");
        assert_eq!(settings.decimal_places(), 4);
        assert!(warnings.is_empty());
    }

    #[test]
    fn file_overrides_defaults() {
        let (settings, warnings) = load_test_config("override", "decimal_places = 2\n");
        assert_eq!(settings.decimal_places(), 2);
        assert_eq!(settings.log_filename(), "gear_inches.log");
        assert!(warnings.is_empty());
    }

    #[test]
    fn decimal_places_are_capped() {
        let (settings, warnings) = load_test_config("capped", "decimal_places = 25\n");
        assert_eq!(settings.decimal_places(), 15);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("decimal_places 25"));
    }

    #[test]
    fn invalid_value_gives_defaults() {
        let (settings, warnings) = load_test_config("negative", "decimal_places = -1\n");
        assert_eq!(settings, DemoSettings::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to load settings, using defaults."));
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let (settings, warnings) = load_test_config("malformed", "decimal_places = = 3\n");
        assert_eq!(settings, DemoSettings::default());
        assert_eq!(warnings.len(), 1);
    }
}
