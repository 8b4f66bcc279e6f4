//! Scenario file models and loaders for the rosette simulator.
//!
//! Files carry raw numbers only; semantic validation (positive period,
//! coherent slider ranges, ...) happens at the scenario boundary in the
//! main library so that parse errors and domain errors stay distinct.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A full scenario document: orbit defaults, run settings, slider ranges.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub orbit: OrbitConfig,
    pub run: RunConfig,
    #[serde(default)]
    pub controls: BTreeMap<String, ControlRange>,
}

/// Orbit geometry defaults parsed from scenario files.
#[derive(Debug, Deserialize, Clone)]
pub struct OrbitConfig {
    pub planet_semi_major_axis: f64,
    pub planet_semi_minor_axis: f64,
    pub planet_period: f64,
    pub moon_orbits_per_planet_orbit: f64,
    pub moon_radial_base: f64,
    pub moon_radial_amplitude: f64,
    pub moon_tangential_amplitude: f64,
}

/// Runtime settings for batch sampling and the interactive host.
#[derive(Debug, Deserialize, Clone)]
pub struct RunConfig {
    pub num_planet_orbits: f64,
    pub base_step: f64,
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f64,
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize,
}

/// Numeric bounds and step granularity for one UI control.
///
/// Ranges drive slider bounds in a front end; updates themselves are never
/// clamped against them.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

fn default_speed_multiplier() -> f64 {
    1.0
}

fn default_trail_capacity() -> usize {
    500
}

/// Errors that can occur while loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a single scenario document from a YAML or TOML file.
pub fn load_scenario_config<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load every scenario under a path: a file yields one document, a
/// directory yields its TOML files in sorted order.
pub fn load_scenario_configs<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_configs(path)
    } else {
        Ok(vec![load_scenario_config(path)?])
    }
}

fn read_dir_configs(dir: &Path) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let mut configs = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        configs.push(toml::from_str(&contents)?);
    }
    Ok(configs)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
