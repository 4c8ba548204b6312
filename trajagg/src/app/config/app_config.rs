use std::{collections::HashSet, path::PathBuf, time::Duration};

use config::{Config, Environment, FileFormat};
use serde::{Deserialize, Serialize};
use trajagg_core::aggregate::DEFAULT_SEGMENT_PRECISION;
use trajagg_ors::fetch::FetcherConfig;

use super::{duration_format, StyleConfig, VehicleConfig};
use crate::app::AppError;

/// prefix of environment variables overriding configuration values, such as
/// `TRAJAGG__FETCH__BATCH_SIZE=20`
pub const ENV_PREFIX: &str = "TRAJAGG";

/// api key value shipped in example environment files, never a real key
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

const DEFAULT_CONFIG: &str = include_str!("trajagg-default.toml");

/// configuration of a trajagg run.
///
/// built from three layers, each overriding the last: the embedded default
/// configuration, an optional user TOML file, and `TRAJAGG__` environment
/// variables using `__` as the key separator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub trips_file: PathBuf,
    pub cache_file: PathBuf,
    pub output_directory: PathBuf,
    pub ors: OrsSection,
    pub fetch: FetchSection,
    pub segments: SegmentsSection,
    pub grid: GridSection,
    /// vehicle types to process, in output order
    pub vehicles: Vec<VehicleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrsSection {
    pub base_url: String,
    #[serde(with = "duration_format")]
    pub timeout: Duration,
    /// name of the environment variable holding the api key
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSection {
    pub batch_size: usize,
    #[serde(with = "duration_format")]
    pub batch_delay: Duration,
    #[serde(with = "duration_format")]
    pub rate_limit_cooldown: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentsSection {
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSection {
    pub size: usize,
    pub padding: f64,
}

fn default_precision() -> usize {
    DEFAULT_SEGMENT_PRECISION
}

impl AppConfig {
    /// loads the layered configuration, reading overrides from the process
    /// environment.
    ///
    /// # Arguments
    ///
    /// * `config_file` - optional user TOML file layered over the defaults
    ///
    /// # Returns
    ///
    /// * the validated configuration
    pub fn load(config_file: Option<&str>) -> Result<Self, AppError> {
        Self::load_with_env(config_file, Self::environment())
    }

    /// environment variable source for `TRAJAGG__SECTION__KEY` overrides
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    /// loads the layered configuration with an explicit environment source
    pub fn load_with_env(config_file: Option<&str>, env: Environment) -> Result<Self, AppError> {
        let mut builder =
            Config::builder().add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        if let Some(filepath) = config_file {
            builder = builder.add_source(config::File::new(filepath, FileFormat::Toml));
        }
        let source_description = config_file.unwrap_or("default configuration");
        let config = builder
            .add_source(env)
            .build()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!("failed reading '{source_description}'"),
                source: e,
            })?;
        let app_config: AppConfig =
            config
                .try_deserialize()
                .map_err(|e| AppError::ConfigReadError {
                    msg: format!("failed deserializing '{source_description}'"),
                    source: e,
                })?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.fetcher_config().validate()?;
        if self.vehicles.is_empty() {
            return Err(AppError::ConfigurationError(String::from(
                "at least one vehicle must be configured",
            )));
        }
        let mut names = HashSet::new();
        if let Some(duplicate) = self.vehicles.iter().find(|v| !names.insert(v.name.as_str())) {
            return Err(AppError::ConfigurationError(format!(
                "vehicle '{}' is configured more than once",
                duplicate.name
            )));
        }
        validate_grid_size(self.grid.size)?;
        if !(self.grid.padding.is_finite() && self.grid.padding >= 0.0) {
            return Err(AppError::ConfigurationError(format!(
                "grid padding must be a non-negative number, found {}",
                self.grid.padding
            )));
        }
        Ok(())
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            batch_size: self.fetch.batch_size,
            batch_delay: self.fetch.batch_delay,
            rate_limit_cooldown: self.fetch.rate_limit_cooldown,
        }
    }

    pub fn vehicle(&self, name: &str) -> Option<&VehicleConfig> {
        self.vehicles.iter().find(|v| v.name == name)
    }

    /// reads the routing service api key from the configured environment
    /// variable. only operations that call the routing service need it.
    pub fn api_key(&self) -> Result<String, AppError> {
        validate_api_key(&self.ors.api_key_env, std::env::var(&self.ors.api_key_env).ok())
    }
}

pub(crate) fn validate_grid_size(size: usize) -> Result<(), AppError> {
    if size == 0 {
        return Err(AppError::ConfigurationError(String::from(
            "grid size must be greater than 0",
        )));
    }
    Ok(())
}

fn validate_api_key(env_var: &str, value: Option<String>) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
        _ => Err(AppError::ConfigurationError(format!(
            "{env_var} is not set. export it with your OpenRouteService api key \
            (sign up at https://openrouteservice.org/dev/#/signup)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_api_key, AppConfig, PLACEHOLDER_API_KEY};
    use crate::app::AppError;
    use config::{Environment, Map};
    use std::{io::Write, time::Duration};

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::load_with_env(None, env(&[])).expect("defaults should load");
        assert_eq!(config.fetch.batch_size, 35);
        assert_eq!(config.fetch.batch_delay, Duration::from_secs(65));
        assert_eq!(config.fetch.rate_limit_cooldown, Duration::from_secs(70));
        assert_eq!(config.ors.timeout, Duration::from_secs(15));
        assert_eq!(config.ors.api_key_env, "ORS_API_KEY");
        assert_eq!(config.segments.precision, 4);
        assert_eq!(config.grid.size, 16);
        assert_eq!(config.grid.padding, 0.02);
        let vehicles = config
            .vehicles
            .iter()
            .map(|v| (v.name.as_str(), v.profile.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            vehicles,
            vec![
                ("EV Car", "driving-car"),
                ("Motor Dup", "cycling-electric"),
                ("Rickshaw", "cycling-regular"),
                ("Remork", "cycling-regular"),
            ]
        );
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            r#"
trips_file = "data/phnom_penh.csv"

[fetch]
batch_delay = "2m"

[grid]
size = 32

[[vehicles]]
name = "Tuk Tuk"
profile = "driving-car"
"#
        )
        .expect("write config");
        let path = file.path().to_string_lossy().to_string();
        let config =
            AppConfig::load_with_env(Some(&path), env(&[])).expect("user config should load");
        assert_eq!(config.trips_file.to_string_lossy(), "data/phnom_penh.csv");
        assert_eq!(config.fetch.batch_delay, Duration::from_secs(120));
        assert_eq!(config.fetch.batch_size, 35);
        assert_eq!(config.grid.size, 32);
        assert_eq!(config.vehicles.len(), 1);
        assert_eq!(config.vehicles[0].name, "Tuk Tuk");
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = AppConfig::load_with_env(
            None,
            env(&[
                ("TRAJAGG__FETCH__BATCH_SIZE", "10"),
                ("TRAJAGG__ORS__BASE_URL", "http://localhost:8080/ors"),
            ]),
        )
        .expect("config should load");
        assert_eq!(config.fetch.batch_size, 10);
        assert_eq!(config.ors.base_url, "http://localhost:8080/ors");
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let result =
            AppConfig::load_with_env(None, env(&[("TRAJAGG__FETCH__BATCH_SIZE", "0")]));
        assert!(matches!(result, Err(AppError::FetchError(_))));
    }

    #[test]
    fn test_zero_grid_size_rejected() {
        let result = AppConfig::load_with_env(None, env(&[("TRAJAGG__GRID__SIZE", "0")]));
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_bad_duration_rejected() {
        let result =
            AppConfig::load_with_env(None, env(&[("TRAJAGG__FETCH__BATCH_DELAY", "soon")]));
        assert!(matches!(result, Err(AppError::ConfigReadError { .. })));
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let result = AppConfig::load_with_env(Some("/nonexistent/trajagg.toml"), env(&[]));
        assert!(matches!(result, Err(AppError::ConfigReadError { .. })));
    }

    #[test]
    fn test_duplicate_vehicle_rejected() {
        let mut config = AppConfig::load_with_env(None, env(&[])).expect("defaults should load");
        config.vehicles.push(config.vehicles[0].clone());
        assert!(matches!(
            config.validate(),
            Err(AppError::ConfigurationError(_))
        ));
        config.vehicles.clear();
        assert!(matches!(
            config.validate(),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_api_key_validation() {
        assert_eq!(
            validate_api_key("ORS_API_KEY", Some(String::from("abc123"))).expect("valid key"),
            "abc123"
        );
        for invalid in [None, Some(String::new()), Some(PLACEHOLDER_API_KEY.to_string())] {
            match validate_api_key("ORS_API_KEY", invalid) {
                Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("ORS_API_KEY")),
                other => panic!("expected configuration error, found {other:?}"),
            }
        }
    }
}
