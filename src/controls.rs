//! Name-keyed mutable parameter surface for an interactive front end.
//!
//! Each control maps a stable name to one scalar of the running system:
//! the seven orbit parameters plus the clock speed multiplier. Updates
//! arrive as raw slider/input text and apply immediately; text that does
//! not parse to a finite number is ignored and the last valid value stays
//! in place, so a malformed input can never reach the render loop.

use std::collections::BTreeMap;

use rosette_config::ControlRange;

use crate::ephemeris::OrbitParameters;

/// Control name for the clock speed multiplier.
pub const SPEED_MULTIPLIER: &str = "speed_multiplier";

/// Names of the orbit-parameter controls, in display order.
pub const ORBIT_CONTROL_NAMES: [&str; 7] = [
    "planet_semi_major_axis",
    "planet_semi_minor_axis",
    "planet_period",
    "moon_orbits_per_planet_orbit",
    "moon_radial_base",
    "moon_radial_amplitude",
    "moon_tangential_amplitude",
];

/// Outcome of one update request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlUpdate {
    /// The value was parsed and applied.
    Applied(f64),
    /// The raw text did not parse to a finite number; nothing changed.
    Ignored,
    /// No control with that name exists; nothing changed.
    Unknown,
}

/// The mutable parameter set exposed to a UI.
#[derive(Debug, Clone)]
pub struct ParameterControls {
    parameters: OrbitParameters,
    speed_multiplier: f64,
    ranges: BTreeMap<String, ControlRange>,
}

impl ParameterControls {
    pub fn new(
        parameters: OrbitParameters,
        speed_multiplier: f64,
        ranges: BTreeMap<String, ControlRange>,
    ) -> Self {
        Self {
            parameters,
            speed_multiplier,
            ranges,
        }
    }

    /// Apply a raw text update to the named control, immediately.
    ///
    /// Parsing is the only validation: range bounds drive UI widgets and
    /// are deliberately not enforced here.
    pub fn set(&mut self, name: &str, raw: &str) -> ControlUpdate {
        let Some(slot) = self.slot(name) else {
            return ControlUpdate::Unknown;
        };
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                *slot = value;
                ControlUpdate::Applied(value)
            }
            _ => ControlUpdate::Ignored,
        }
    }

    /// Current value of the named control.
    pub fn value(&self, name: &str) -> Option<f64> {
        match name {
            "planet_semi_major_axis" => Some(self.parameters.planet_semi_major_axis),
            "planet_semi_minor_axis" => Some(self.parameters.planet_semi_minor_axis),
            "planet_period" => Some(self.parameters.planet_period),
            "moon_orbits_per_planet_orbit" => Some(self.parameters.moon_orbits_per_planet_orbit),
            "moon_radial_base" => Some(self.parameters.moon_radial_base),
            "moon_radial_amplitude" => Some(self.parameters.moon_radial_amplitude),
            "moon_tangential_amplitude" => Some(self.parameters.moon_tangential_amplitude),
            SPEED_MULTIPLIER => Some(self.speed_multiplier),
            _ => None,
        }
    }

    /// Display string for the current value, with precision derived from
    /// the control's step granularity (integer steps print no decimals).
    pub fn display(&self, name: &str) -> Option<String> {
        let value = self.value(name)?;
        let decimals = self
            .ranges
            .get(name)
            .map(|range| step_decimals(range.step))
            .unwrap_or(2);
        Some(format!("{value:.decimals$}"))
    }

    /// Declared UI range of the named control, when the scenario shipped
    /// one.
    pub fn range(&self, name: &str) -> Option<&ControlRange> {
        self.ranges.get(name)
    }

    /// The orbit parameter record in its current state.
    pub fn parameters(&self) -> &OrbitParameters {
        &self.parameters
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "planet_semi_major_axis" => Some(&mut self.parameters.planet_semi_major_axis),
            "planet_semi_minor_axis" => Some(&mut self.parameters.planet_semi_minor_axis),
            "planet_period" => Some(&mut self.parameters.planet_period),
            "moon_orbits_per_planet_orbit" => {
                Some(&mut self.parameters.moon_orbits_per_planet_orbit)
            }
            "moon_radial_base" => Some(&mut self.parameters.moon_radial_base),
            "moon_radial_amplitude" => Some(&mut self.parameters.moon_radial_amplitude),
            "moon_tangential_amplitude" => Some(&mut self.parameters.moon_tangential_amplitude),
            SPEED_MULTIPLIER => Some(&mut self.speed_multiplier),
            _ => None,
        }
    }
}

/// Number of decimal places a step granularity calls for, capped at 4.
fn step_decimals(step: f64) -> usize {
    if step <= 0.0 {
        return 2;
    }
    for decimals in 0..=4 {
        let scale = 10f64.powi(decimals as i32);
        if (step * scale - (step * scale).round()).abs() < 1e-9 {
            return decimals;
        }
    }
    4
}
