//! Frame-driven host around the pure evaluator.
//!
//! The host owns the only mutable state in the system: the clock, the
//! current parameter record, and the trail buffers. A front end calls
//! [`Simulation::tick`] once per rendering frame and forwards the returned
//! positions to its scene objects; parameter writes land between ticks and
//! take effect on the next evaluation.

mod trail;

pub use trail::Trail;

use crate::ephemeris::{self, OrbitParameters, SystemState};

/// Elapsed-time owner for the frame loop.
///
/// Each tick advances by `base_step × speed_multiplier`; a multiplier of
/// zero freezes the clock without resetting it.
#[derive(Debug, Clone, Copy)]
pub struct SimulationClock {
    elapsed: f64,
    base_step: f64,
    speed_multiplier: f64,
}

impl SimulationClock {
    /// New clock at t = 0 with a unit speed multiplier.
    pub fn new(base_step: f64) -> Self {
        Self {
            elapsed: 0.0,
            base_step,
            speed_multiplier: 1.0,
        }
    }

    /// Advance one frame and return the new elapsed time.
    pub fn advance(&mut self) -> f64 {
        self.elapsed += self.base_step * self.speed_multiplier;
        self.elapsed
    }

    /// Elapsed simulated time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current speed multiplier.
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Set the speed multiplier. Negative or non-finite requests are
    /// ignored so the clock stays monotonically non-decreasing.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        if multiplier.is_finite() && multiplier >= 0.0 {
            self.speed_multiplier = multiplier;
        }
    }
}

/// Interactive host: clock + parameters + trails.
#[derive(Debug)]
pub struct Simulation {
    clock: SimulationClock,
    parameters: OrbitParameters,
    planet_trail: Trail,
    moon_trail: Trail,
}

impl Simulation {
    pub fn new(parameters: OrbitParameters, base_step: f64, trail_capacity: usize) -> Self {
        Self {
            clock: SimulationClock::new(base_step),
            parameters,
            planet_trail: Trail::with_capacity(trail_capacity),
            moon_trail: Trail::with_capacity(trail_capacity),
        }
    }

    /// Advance one frame: step the clock, evaluate, record trail points.
    pub fn tick(&mut self) -> SystemState {
        let t = self.clock.advance();
        let state = ephemeris::state_at(t, &self.parameters);
        self.planet_trail.push(state.planet);
        self.moon_trail.push(state.moon);
        state
    }

    /// Evaluate at the current clock reading without advancing or
    /// recording. Calling this repeatedly yields identical states.
    pub fn current_state(&self) -> SystemState {
        ephemeris::state_at(self.clock.elapsed(), &self.parameters)
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.clock.set_speed_multiplier(multiplier);
    }

    pub fn parameters(&self) -> &OrbitParameters {
        &self.parameters
    }

    /// Mutable access for immediate-effect writes from a control surface.
    /// Writes apply to the next evaluation; there is no batching.
    pub fn parameters_mut(&mut self) -> &mut OrbitParameters {
        &mut self.parameters
    }

    pub fn planet_trail(&self) -> &Trail {
        &self.planet_trail
    }

    pub fn moon_trail(&self) -> &Trail {
        &self.moon_trail
    }
}
