use serde::Deserialize;

use crate::{
    consts::{DEFAULT_LOG_LEVEL, MOUNT_SELECTOR},
    Result,
};

/// Startup configuration.
///
/// Missing fields fall back to their defaults, an empty object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub mount_selector: String,
    pub log_level: String,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Maximum log level, unknown levels are treated as the default level.
    pub fn max_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .or_else(|_| DEFAULT_LOG_LEVEL.parse())
            .unwrap_or(tracing::Level::INFO)
    }

    /// Reads the configuration embedded in the hosting document.
    ///
    /// A document without configuration yields the default configuration,
    /// a malformed configuration is an error.
    #[cfg(feature = "browser")]
    pub fn from_document() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(crate::Error::NoDocument)?;

        let selector = format!("meta[name=\"{}\"]", crate::consts::CONFIG_META);
        let content = document
            .query_selector(&selector)
            .map_err(|err| crate::Error::Dom(format!("{err:?}")))?
            .and_then(|meta| meta.get_attribute("content"));

        match content {
            Some(content) => Self::from_json(&content),
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_selector: MOUNT_SELECTOR.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}
