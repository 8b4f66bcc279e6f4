//! Derived metrics over a sampled trajectory: pericentre passages of the
//! moon, star-planet-moon alignments, and a run summary.

use rosette_core::vector::{self, Vector2};

use crate::ephemeris::SystemState;

/// Default angular threshold for alignment detection, in radians.
pub const DEFAULT_ALIGNMENT_THRESHOLD: f64 = 1.5 * std::f64::consts::PI / 180.0;

/// Summary of derived orbital metrics from one sampled run.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalMetrics {
    /// Number of moon orbits completed, counted as pericentre passages.
    pub moon_orbit_count: usize,
    /// Mean number of moon orbits between consecutive alignments, when at
    /// least two alignments and one pericentre were observed.
    pub mean_orbits_between_alignments: Option<f64>,
    pub alignment_times: Vec<f64>,
    pub pericentre_times: Vec<f64>,
}

/// Detect pericentre passages of the moon relative to the planet.
///
/// A passage is a strict local minimum of the planet-moon distance over the
/// sampled grid; endpoints are never reported.
pub fn detect_pericentre_passages(times: &[f64], states: &[SystemState]) -> Vec<f64> {
    debug_assert_eq!(times.len(), states.len());
    let distances: Vec<f64> = states
        .iter()
        .map(|s| vector::norm3(&vector::sub3(&s.moon, &s.planet)))
        .collect();

    let mut passages = Vec::new();
    for i in 1..distances.len().saturating_sub(1) {
        if distances[i] < distances[i - 1] && distances[i] < distances[i + 1] {
            passages.push(times[i]);
        }
    }
    passages
}

/// Detect star-planet-moon alignments within an angular threshold.
///
/// Alignment compares the star-to-planet direction with the planet-to-moon
/// direction; samples where either vector vanishes are skipped.
pub fn detect_alignments(
    times: &[f64],
    states: &[SystemState],
    angle_threshold: f64,
) -> Vec<f64> {
    debug_assert_eq!(times.len(), states.len());
    let mut alignments = Vec::new();
    for (idx, state) in states.iter().enumerate() {
        let sp: Vector2 = [
            state.planet[0] - state.star[0],
            state.planet[1] - state.star[1],
        ];
        let pm: Vector2 = [
            state.moon[0] - state.planet[0],
            state.moon[1] - state.planet[1],
        ];
        let sp_norm = vector::norm2(&sp);
        let pm_norm = vector::norm2(&pm);
        if sp_norm == 0.0 || pm_norm == 0.0 {
            continue;
        }
        let cos_angle = (vector::dot2(&sp, &pm) / (sp_norm * pm_norm)).clamp(-1.0, 1.0);
        if cos_angle.acos() <= angle_threshold {
            alignments.push(times[idx]);
        }
    }
    alignments
}

/// Compute the full metrics summary for one sampled run.
pub fn summarise(times: &[f64], states: &[SystemState]) -> OrbitalMetrics {
    let pericentre_times = detect_pericentre_passages(times, states);
    let alignment_times = detect_alignments(times, states, DEFAULT_ALIGNMENT_THRESHOLD);

    let orbit_count = pericentre_times.len();
    let mean_orbits_between_alignments = if alignment_times.len() >= 2 && orbit_count > 0 {
        let mut between = Vec::with_capacity(alignment_times.len() - 1);
        let mut last_count = pericentres_before(&pericentre_times, alignment_times[0]);
        for &alignment in &alignment_times[1..] {
            let count = pericentres_before(&pericentre_times, alignment);
            between.push(count.saturating_sub(last_count));
            last_count = count;
        }
        if between.is_empty() {
            None
        } else {
            Some(between.iter().sum::<usize>() as f64 / between.len() as f64)
        }
    } else {
        None
    };

    OrbitalMetrics {
        moon_orbit_count: orbit_count,
        mean_orbits_between_alignments,
        alignment_times,
        pericentre_times,
    }
}

/// Number of pericentre passages strictly before `time`.
fn pericentres_before(pericentre_times: &[f64], time: f64) -> usize {
    pericentre_times.partition_point(|&p| p < time)
}
