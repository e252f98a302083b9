//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server templates may embed a `<script id="pixi-config" type="application/json">`
//! block to point the client at another API origin or retune timings. Every
//! field is optional; missing config means defaults, and malformed config
//! is reported once the logger is up, then replaced by defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "pixi-config";

/// Error returned when the inline config block cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid client config: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

/// Endpoint locations and UI timing constants.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every `/api/...` path. Empty means same origin.
    pub api_base: String,
    /// Path stored document files are served from.
    pub uploads_path: String,
    /// Delay before focusing the chat input after the widget opens.
    pub chat_focus_delay_ms: u32,
    /// Simulated upload progress increment, in percent.
    pub progress_step: u8,
    /// Interval between simulated progress increments.
    pub progress_tick_ms: u32,
    /// Simulated progress never passes this value before the response lands.
    pub progress_ceiling: u8,
    /// Delay before an application-level upload failure resets the panel.
    pub upload_error_reset_ms: u32,
    /// Author recorded for comments posted with a blank name.
    pub anonymous_author: String,
    /// Title sent for uploads with a blank title field.
    pub untitled_document: String,
    /// Minimum `log` level forwarded to the browser console.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            uploads_path: "/static/uploads".to_owned(),
            chat_focus_delay_ms: 100,
            progress_step: 5,
            progress_tick_ms: 200,
            progress_ceiling: 90,
            upload_error_reset_ms: 3000,
            anonymous_author: "Anonymous".to_owned(),
            untitled_document: "Untitled Document".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config block, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `raw` is not a JSON object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.progress_ceiling = config.progress_ceiling.min(100);
        Ok(config)
    }

    /// Resolved `log` level, defaulting to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Parse the text of the inline config block. An absent or blank block
    /// yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the block holds malformed JSON.
    pub fn from_block(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    /// Read the inline config block from the current page.
    ///
    /// Native builds always see an absent block.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the block is present but malformed; callers
    /// fall back to `ClientConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            Self::from_block(raw.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::from_block(None)
        }
    }
}
