//! Scenario loading and the parameter-validation boundary.
//!
//! Scenario files carry raw numbers; everything the evaluator assumes
//! (positive axes and period, non-negative amplitudes) is checked here,
//! once, when the file becomes a [`Scenario`]. Invalid configurations are
//! rejected with a descriptive error instead of ever reaching the math.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use rosette_config::{ConfigError, ControlRange, RunConfig, ScenarioConfig};

use crate::controls::ParameterControls;
use crate::ephemeris::OrbitParameters;
use crate::simulation::Simulation;

/// Validated runtime settings for batch sampling and the interactive host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    pub num_planet_orbits: f64,
    pub base_step: f64,
    pub speed_multiplier: f64,
    pub trail_capacity: usize,
}

/// A validated scenario ready to drive the evaluator.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub parameters: OrbitParameters,
    pub run: RunSettings,
    pub controls: BTreeMap<String, ControlRange>,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{parameter} must be positive (got {value})")]
    NonPositive { parameter: &'static str, value: f64 },
    #[error("{parameter} must not be negative (got {value})")]
    Negative { parameter: &'static str, value: f64 },
    #[error("control '{control}' has an invalid range (min {min}, max {max}, step {step})")]
    InvalidControlRange {
        control: String,
        min: f64,
        max: f64,
        step: f64,
    },
    #[error("control '{control}' default {value} lies outside its range [{min}, {max}]")]
    DefaultOutOfRange {
        control: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("control '{control}' does not name a known parameter")]
    UnknownControl { control: String },
}

/// Load and validate a scenario from a YAML or TOML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioError> {
    let config = rosette_config::load_scenario_config(path)?;
    config.try_into()
}

impl Scenario {
    /// Build the UI control surface seeded with this scenario's defaults.
    pub fn parameter_controls(&self) -> ParameterControls {
        ParameterControls::new(
            self.parameters,
            self.run.speed_multiplier,
            self.controls.clone(),
        )
    }

    /// Build the interactive host seeded with this scenario's defaults.
    pub fn simulation(&self) -> Simulation {
        let mut simulation = Simulation::new(
            self.parameters,
            self.run.base_step,
            self.run.trail_capacity,
        );
        simulation.set_speed_multiplier(self.run.speed_multiplier);
        simulation
    }

    /// Total sampled time for a batch run: `num_planet_orbits` revolutions.
    pub fn total_time(&self) -> f64 {
        self.run.num_planet_orbits * self.parameters.planet_period
    }
}

impl TryFrom<ScenarioConfig> for Scenario {
    type Error = ScenarioError;

    fn try_from(config: ScenarioConfig) -> Result<Self, Self::Error> {
        let parameters = orbit_parameters(&config)?;
        let run = run_settings(&config.run)?;
        validate_controls(&config.controls, &parameters, run.speed_multiplier)?;

        Ok(Scenario {
            name: config.name,
            parameters,
            run,
            controls: config.controls,
        })
    }
}

fn orbit_parameters(config: &ScenarioConfig) -> Result<OrbitParameters, ScenarioError> {
    let orbit = &config.orbit;
    require_positive("planet_semi_major_axis", orbit.planet_semi_major_axis)?;
    require_positive("planet_semi_minor_axis", orbit.planet_semi_minor_axis)?;
    require_positive("planet_period", orbit.planet_period)?;
    require_non_negative(
        "moon_orbits_per_planet_orbit",
        orbit.moon_orbits_per_planet_orbit,
    )?;
    require_non_negative("moon_radial_base", orbit.moon_radial_base)?;
    require_non_negative("moon_radial_amplitude", orbit.moon_radial_amplitude)?;
    require_non_negative("moon_tangential_amplitude", orbit.moon_tangential_amplitude)?;

    Ok(OrbitParameters {
        planet_semi_major_axis: orbit.planet_semi_major_axis,
        planet_semi_minor_axis: orbit.planet_semi_minor_axis,
        planet_period: orbit.planet_period,
        moon_orbits_per_planet_orbit: orbit.moon_orbits_per_planet_orbit,
        moon_radial_base: orbit.moon_radial_base,
        moon_radial_amplitude: orbit.moon_radial_amplitude,
        moon_tangential_amplitude: orbit.moon_tangential_amplitude,
    })
}

fn run_settings(run: &RunConfig) -> Result<RunSettings, ScenarioError> {
    require_positive("num_planet_orbits", run.num_planet_orbits)?;
    require_positive("base_step", run.base_step)?;
    require_non_negative("speed_multiplier", run.speed_multiplier)?;
    if run.trail_capacity == 0 {
        return Err(ScenarioError::NonPositive {
            parameter: "trail_capacity",
            value: 0.0,
        });
    }

    Ok(RunSettings {
        num_planet_orbits: run.num_planet_orbits,
        base_step: run.base_step,
        speed_multiplier: run.speed_multiplier,
        trail_capacity: run.trail_capacity,
    })
}

fn validate_controls(
    controls: &BTreeMap<String, ControlRange>,
    parameters: &OrbitParameters,
    speed_multiplier: f64,
) -> Result<(), ScenarioError> {
    let defaults = ParameterControls::new(*parameters, speed_multiplier, BTreeMap::new());
    for (name, range) in controls {
        let Some(default) = defaults.value(name) else {
            return Err(ScenarioError::UnknownControl {
                control: name.clone(),
            });
        };
        if !(range.min <= range.max) || range.step <= 0.0 {
            return Err(ScenarioError::InvalidControlRange {
                control: name.clone(),
                min: range.min,
                max: range.max,
                step: range.step,
            });
        }
        if default < range.min || default > range.max {
            return Err(ScenarioError::DefaultOutOfRange {
                control: name.clone(),
                value: default,
                min: range.min,
                max: range.max,
            });
        }
    }
    Ok(())
}

fn require_positive(parameter: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::NonPositive { parameter, value })
    }
}

fn require_non_negative(parameter: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::Negative { parameter, value })
    }
}
