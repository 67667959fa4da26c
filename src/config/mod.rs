mod types;

pub use types::*;

use crate::error::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.display().to_string(),
        source,
    })
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./recodarr.toml",
        "./config.toml",
        "~/.config/recodarr/config.toml",
        "/etc/recodarr/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

impl Config {
    /// Apply command-line overrides on top of file values
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.catalog_url {
            self.catalog.url = url;
        }
        if let Some(key) = overrides.catalog_api_key {
            self.catalog.api_key = key;
        }
        if let Some(url) = overrides.queue_url {
            self.queue.url = url;
        }
        if let Some(token) = overrides.queue_token {
            self.queue.token = token;
        }
        if let Some(count) = overrides.count {
            self.triage.count = count;
        }
        // A flag can only switch dry-run on
        self.triage.dry_run |= overrides.dry_run;
    }

    /// Check that every setting needed for a run is present.
    ///
    /// All missing keys are reported together so the operator can fix them in
    /// one pass.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("catalog.url", &self.catalog.url),
            ("catalog.api_key", &self.catalog.api_key),
            ("queue.url", &self.queue.url),
            ("queue.token", &self.queue.token),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect();

        if !missing.is_empty() {
            return Err(Error::configuration(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        if self.queue.timeout_secs == 0 {
            return Err(Error::configuration("queue.timeout_secs cannot be 0"));
        }

        Ok(())
    }
}
