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

mod demo;
mod settings;

use std::env;
use tracing::{info, warn};
use settings::DemoSettings;


fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warnings) = DemoSettings::load();

    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, settings.log_filename());
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
    for warning in settings_warnings {
        warn!("{}", warning);
    }
    if settings == DemoSettings::default() {
        info!("Using default settings. Create {}.toml to override them", DemoSettings::CONFIG_FILENAME);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    demo::run(&mut handle, settings.decimal_places()).map_err(|e| {
        warn!("Demo failed. {}", e.to_string());
        e
    })
}
