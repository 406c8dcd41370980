use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint row under the counters
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Capture mouse clicks (buttons, row selection, double-click toggle).
    /// Turn off to keep the terminal's native text selection.
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Color overrides by theme slot name, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            mouse: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
