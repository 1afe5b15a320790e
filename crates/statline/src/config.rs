//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (include_str! from statline.toml)
//! 2. `~/.config/statline/statline.toml`
//! 3. `./statline.toml`
//! 4. An explicit file, e.g. from `--config`

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use statline_cache::CacheConfig;
use statline_core::Season;
use statline_error::{ConfigError, StatlineError, StatlineResult};
use statline_provider::ProviderConfig;
use statline_query::FormatterConfig;
use statline_social::ListenerConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../statline.toml");

/// `[cache]` section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct CacheSection {
    /// Season whose records go stale
    #[serde(default)]
    current_season: Option<Season>,

    /// Age after which a current-season record is refetched (seconds)
    #[serde(default)]
    staleness_threshold_secs: Option<u64>,

    /// Directory holding the persisted tables
    #[serde(default)]
    data_dir: Option<PathBuf>,
}

impl CacheSection {
    /// Freshness settings, filling unset values with the cache defaults.
    pub fn cache_config(&self) -> CacheConfig {
        let mut config = CacheConfig::default();
        if let Some(season) = &self.current_season {
            config = config.with_current_season(season.clone());
        }
        if let Some(secs) = self.staleness_threshold_secs {
            config = config.with_staleness_threshold_secs(secs);
        }
        config
    }

    /// Configured data directory, or `statline` under the platform data directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("statline"))
                .unwrap_or_else(|| PathBuf::from(".statline"))
        })
    }
}

/// Top-level Statline configuration.
///
/// # Example
///
/// ```no_run
/// use statline::StatlineConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StatlineConfig::load()?;
/// println!("current season: {}", config.cache().cache_config().current_season());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct StatlineConfig {
    /// Cache freshness and persistence
    #[serde(default)]
    cache: CacheSection,

    /// Remote provider connection
    #[serde(default)]
    provider: ProviderConfig,

    /// Table rendering rules
    #[serde(default)]
    formatter: FormatterConfig,

    /// Comment stream filter
    #[serde(default)]
    listener: ListenerConfig,
}

impl StatlineConfig {
    /// Load a single file, without the bundled defaults or user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StatlineResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StatlineError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StatlineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load bundled defaults, then the home and current-directory overrides.
    ///
    /// Override files are optional and skipped when missing.
    pub fn load() -> StatlineResult<Self> {
        Self::load_with(None::<&Path>)
    }

    /// Like [`load`](Self::load), with `explicit` layered on top.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is missing, or if any source fails to
    /// parse.
    #[instrument(skip(explicit))]
    pub fn load_with(explicit: Option<impl AsRef<Path>>) -> StatlineResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/statline/statline.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("statline").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.as_ref().display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder
            .build()
            .map_err(|e| {
                StatlineError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StatlineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bundled defaults only.
    pub fn bundled() -> StatlineResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                StatlineError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }

    /// Replace the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.cache.data_dir = Some(data_dir.into());
        self
    }
}
