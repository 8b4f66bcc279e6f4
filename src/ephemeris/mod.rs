//! Closed-form positions for the star / planet / moon system.
//!
//! Positions are direct functions of elapsed time: the planet rides an
//! ellipse around the star, and the moon's offset is expressed in the
//! planet's instantaneous radial/tangential frame so that its oscillation
//! is dragged along the ellipse, tracing a rosette rather than a fixed
//! ellipse of its own. Nothing here is integrated and nothing is stored;
//! callers own the clock.

use std::f64::consts::TAU;

use rosette_core::vector::{self, Vector2, Vector3};

/// Kinematic parameters for one star / planet / moon system.
///
/// The evaluator assumes the parameters passed the scenario validation
/// boundary (positive axes and period, non-negative amplitudes and orbit
/// ratio); it performs no checks of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    /// Semi-major axis of the planet's ellipse around the star.
    pub planet_semi_major_axis: f64,
    /// Semi-minor axis of the planet's ellipse around the star.
    pub planet_semi_minor_axis: f64,
    /// Time for one full planet revolution.
    pub planet_period: f64,
    /// Moon angular rate as a multiple of the planet's; the petal count of
    /// the rosette when integral.
    pub moon_orbits_per_planet_orbit: f64,
    /// Mean radial distance of the moon from the planet.
    pub moon_radial_base: f64,
    /// Amplitude of the radial oscillation around the mean.
    pub moon_radial_amplitude: f64,
    /// Amplitude of the tangential offset; controls petal width.
    pub moon_tangential_amplitude: f64,
}

/// World positions of the three bodies at one instant. Planar: z = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemState {
    pub star: Vector3,
    pub planet: Vector3,
    pub moon: Vector3,
}

/// Radial/tangential basis at a point on the planet's orbit.
///
/// Radial points away from the star, tangential is its +90° rotation
/// (right-handed in the orbital plane). At the origin the frame is
/// undefined; the fixed fallback (1,0)/(0,1) keeps the evaluator total.
pub fn radial_tangential_frame(planet: &Vector2) -> (Vector2, Vector2) {
    let r_norm = vector::norm2(planet);
    if r_norm > 0.0 {
        let r_hat = vector::scale2(planet, 1.0 / r_norm);
        (r_hat, vector::perp2(&r_hat))
    } else {
        ([1.0, 0.0], [0.0, 1.0])
    }
}

/// Planet position on its ellipse at elapsed time `t`.
pub fn planet_position(t: f64, params: &OrbitParameters) -> Vector2 {
    let theta_p = TAU * t / params.planet_period;
    [
        params.planet_semi_major_axis * theta_p.cos(),
        params.planet_semi_minor_axis * theta_p.sin(),
    ]
}

/// Moon offset from the planet at elapsed time `t`, in world axes.
pub fn moon_relative(t: f64, params: &OrbitParameters) -> Vector2 {
    let planet = planet_position(t, params);
    let (r_hat, t_hat) = radial_tangential_frame(&planet);

    let theta_p = TAU * t / params.planet_period;
    let theta_m = params.moon_orbits_per_planet_orbit * theta_p;
    let radial = params.moon_radial_base + params.moon_radial_amplitude * theta_m.cos();
    let tangential = params.moon_tangential_amplitude * theta_m.sin();

    vector::add2(
        &vector::scale2(&r_hat, radial),
        &vector::scale2(&t_hat, tangential),
    )
}

/// Evaluate the full system at elapsed time `t`.
///
/// Pure and deterministic: equal inputs yield equal outputs, for any real
/// `t` including negative and arbitrarily large values.
pub fn state_at(t: f64, params: &OrbitParameters) -> SystemState {
    let planet = planet_position(t, params);
    let moon = vector::add2(&planet, &moon_relative(t, params));

    SystemState {
        star: [0.0, 0.0, 0.0],
        planet: vector::lift(&planet),
        moon: vector::lift(&moon),
    }
}

/// Sample the system over `[0, total_time]` at a fixed step.
///
/// The headless batch path: the same closed-form equations evaluated over a
/// time grid for export, metrics, and plotting.
pub fn sample_states(
    params: &OrbitParameters,
    total_time: f64,
    step: f64,
) -> (Vec<f64>, Vec<SystemState>) {
    let times = rosette_core::time::sample_times(total_time, step);
    let states = times.iter().map(|&t| state_at(t, params)).collect();
    (times, states)
}

/// The moon's planet-relative path sampled over one planet period.
///
/// For an integral orbit ratio the rosette closes after exactly one planet
/// revolution, so this is the full petal pattern a front end overlays on
/// the moving planet.
pub fn relative_path(params: &OrbitParameters, samples: usize) -> Vec<Vector2> {
    debug_assert!(samples >= 2, "a path needs at least two samples");
    let span = params.planet_period;
    (0..samples)
        .map(|i| {
            let t = span * i as f64 / (samples - 1) as f64;
            moon_relative(t, params)
        })
        .collect()
}
