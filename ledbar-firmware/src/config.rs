//! Settings loading
//!
//! Settings come from `ledbar.ini`, embedded at compile time. The build
//! script rejects an invalid file, so the fallback below only guards
//! against a parser change.

use defmt::*;

use ledbar_core::config::{parse_config, BarConfig};

/// Parse the embedded settings, falling back to defaults
pub fn load_config(source: &str) -> BarConfig {
    match parse_config(source) {
        Ok(config) => {
            info!(
                "Settings: fg={}, bg={}, power={}, wait={}ms, dt={}s",
                config.foreground, config.background, config.power, config.wait_ms, config.clock_offset_s
            );
            config
        }
        Err(e) => {
            error!("Failed to parse embedded settings: {:?}", e);
            error!("Using default settings");
            BarConfig::default()
        }
    }
}
