/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub n_floors: u8,
    /// Seconds to travel between two adjacent floors.
    pub speed: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Probability that a new passenger shows up in one request window.
    pub passenger_frequency: f64,
    pub tick_ms: u64,
    pub request_window_ms: u64,
    pub seed: Option<u64>,
    pub duration_secs: Option<f64>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            n_floors: 10,
            speed: 1.0,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            passenger_frequency: 0.3,
            tick_ms: 10,
            request_window_ms: 1000,
            seed: None,
            duration_secs: None,
        }
    }
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn request_window(&self) -> Duration {
        Duration::from_millis(self.request_window_ms)
    }

    pub fn max_duration(&self) -> Option<Duration> {
        self.duration_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

impl ElevatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_floors < 2 {
            return Err(invalid(format!(
                "n_floors must be at least 2, got {}",
                self.n_floors
            )));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(invalid(format!(
                "speed must be a positive number of seconds, got {}",
                self.speed
            )));
        }
        Ok(())
    }

    /// Travel time between two adjacent floors.
    pub fn travel_time(&self) -> Result<Duration, ConfigError> {
        self.validate()?;
        Duration::try_from_secs_f64(self.speed)
            .map_err(|e| invalid(format!("speed {} is not a valid duration: {}", self.speed, e)))
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.elevator.validate()?;
        if !(0.0..=1.0).contains(&self.simulation.passenger_frequency) {
            return Err(invalid(format!(
                "passenger_frequency must be within [0, 1], got {}",
                self.simulation.passenger_frequency
            )));
        }
        if self.simulation.tick_ms == 0 || self.simulation.request_window_ms == 0 {
            return Err(invalid("tick_ms and request_window_ms must be positive".to_string()));
        }
        if let Some(duration) = self.simulation.duration_secs {
            if !duration.is_finite() || duration < 0.0 {
                return Err(invalid(format!(
                    "duration_secs must be a non-negative number, got {}",
                    duration
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}

/***************************************/
/*             Public API              */
/***************************************/

/// Reads the configuration from `path`, or from `config.toml` if no path is given.
/// A missing default file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound && !required => Ok(Config::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
