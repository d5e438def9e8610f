//! `kundali.toml` configuration.
//!
//! ```toml
//! [location]
//! latitude = 28.6139
//! longitude = 77.2090
//! utc_offset = 5.5
//!
//! [output]
//! json = false
//! ```
//!
//! Every key is optional. The file is looked up in this order: an explicit
//! path, the `KUNDALI_CONFIG` environment variable, `./kundali.toml`, then
//! `./config/kundali.toml`. No file at all means built-in defaults.

pub mod error;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use kundali_base::GeoLocation;
use kundali_time::UtcOffset;
use serde::Deserialize;

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "KUNDALI_CONFIG";

/// Relative paths tried when neither an explicit path nor the environment
/// variable is given.
pub const DEFAULT_PATHS: [&str; 2] = ["kundali.toml", "config/kundali.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationToml {
    latitude: Option<f64>,
    longitude: Option<f64>,
    utc_offset: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputToml {
    #[serde(default)]
    json: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    location: LocationToml,
    #[serde(default)]
    output: OutputToml,
}

/// Default birth place, used when the command line omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationDefaults {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utc_offset: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutputSettings {
    /// Print charts as JSON instead of a table.
    pub json: bool,
}

/// Validated configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KundaliConfig {
    pub location: LocationDefaults,
    pub output: OutputSettings,
    /// File the values were read from; `None` for built-in defaults.
    pub path: Option<PathBuf>,
}

impl KundaliConfig {
    /// Parse and range-check TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let root: RootConfigToml = toml::from_str(text)?;
        let LocationToml {
            latitude,
            longitude,
            utc_offset,
        } = root.location;

        // Absent coordinates check as 0.
        GeoLocation::new(latitude.unwrap_or(0.0), longitude.unwrap_or(0.0))
            .map_err(|e| ConfigError::Invalid(format!("[location] {e}")))?;
        if let Some(hours) = utc_offset {
            UtcOffset::new(hours).map_err(|e| ConfigError::Invalid(format!("[location] {e}")))?;
        }

        Ok(Self {
            location: LocationDefaults {
                latitude,
                longitude,
                utc_offset,
            },
            output: OutputSettings {
                json: root.output.json,
            },
            path: None,
        })
    }

    /// Read and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(Self {
            path: Some(path.to_path_buf()),
            ..config
        })
    }
}

/// Pick the config file to read, if any.
///
/// An explicit path or the environment value is returned whether or not the
/// file exists. The default paths are resolved against `base_dir` and only
/// returned if present.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    base_dir: &Path,
) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(v) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(v));
    }
    DEFAULT_PATHS
        .iter()
        .map(|p| base_dir.join(p))
        .find(|p| p.is_file())
}

/// Load the configuration using the standard search order from the
/// current directory.
pub fn load(explicit: Option<&Path>) -> Result<KundaliConfig, ConfigError> {
    let base = Path::new(".");
    match resolve_config_path(explicit, std::env::var_os(CONFIG_ENV_VAR), base) {
        Some(path) => KundaliConfig::load_from(&path),
        None => {
            log::debug!("no config file found, using defaults");
            Ok(KundaliConfig::default())
        }
    }
}
