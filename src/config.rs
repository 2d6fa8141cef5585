use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

fn default_pin() -> String {
    "1234".to_string()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct OpalConfig {
    /// 4-digit unlock PIN. The lock screen is a courtesy gate, not an
    /// access-control boundary; it can always be bypassed.
    pub pin: String,
    /// Whether the card float animation is paused; toggled from the home
    /// action row and persisted across sessions.
    pub float_paused: bool,
    pub debug_logging: bool,
}

impl Default for OpalConfig {
    fn default() -> Self {
        Self {
            pin: default_pin(),
            float_paused: false,
            debug_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = OpalConfig::default();
        assert_eq!(config.pin, "1234");
        assert_eq!(config.pin.len(), 4);
        assert!(!config.float_paused);
        assert!(!config.debug_logging);
    }
}
