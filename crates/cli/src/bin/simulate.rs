use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;

use rosette_simulator::ephemeris;
use rosette_simulator::export::{self, metrics as metrics_export, trajectory, trajectory_json};
use rosette_simulator::metrics;
use rosette_simulator::scenario::{Scenario, load_scenario};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sample the star-planet-moon system and export trajectory artifacts"
)]
struct Cli {
    /// Scenario file (YAML or TOML)
    #[arg(long, default_value = "data/scenarios/red_dwarf.yaml")]
    scenario: PathBuf,

    /// Number of planet orbits to sample (overrides the scenario)
    #[arg(long)]
    orbits: Option<f64>,

    /// Sample step in simulated time units (overrides the scenario)
    #[arg(long)]
    step: Option<f64>,

    /// Directory receiving trajectories.csv/.json and metrics.json
    #[arg(long, default_value = "artifacts")]
    output_dir: PathBuf,

    /// Run without writing any artifacts
    #[arg(long)]
    no_save: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut scenario = load_scenario(&cli.scenario)?;

    if let Some(orbits) = cli.orbits {
        if !(orbits > 0.0) {
            return Err(anyhow::anyhow!("--orbits must be positive (got {orbits})"));
        }
        scenario.run.num_planet_orbits = orbits;
    }
    if let Some(step) = cli.step {
        if !(step > 0.0) {
            return Err(anyhow::anyhow!("--step must be positive (got {step})"));
        }
        scenario.run.base_step = step;
    }

    println!("Computing trajectories...");
    let (times, states) = ephemeris::sample_states(
        &scenario.parameters,
        scenario.total_time(),
        scenario.run.base_step,
    );
    let summary = metrics::summarise(&times, &states);

    if !cli.no_save {
        write_artifacts(&cli.output_dir, &scenario, &times, &states, &summary)?;
        println!("Artifacts written to {}", cli.output_dir.display());
    }

    println!("Simulation complete.");
    println!("Moon completed {} orbits.", summary.moon_orbit_count);
    println!(
        "Number of alignments detected: {}",
        summary.alignment_times.len()
    );

    Ok(())
}

fn write_artifacts(
    output_dir: &Path,
    scenario: &Scenario,
    times: &[f64],
    states: &[ephemeris::SystemState],
    summary: &metrics::OrbitalMetrics,
) -> anyhow::Result<()> {
    let csv_path = output_dir.join("trajectories.csv");
    let mut writer = export::writer_for_path(&csv_path)?;
    trajectory::write_header(&mut writer)?;
    for (time, state) in times.iter().zip(states) {
        trajectory::Record {
            time: *time,
            star: state.star,
            planet: state.planet,
            moon: state.moon,
        }
        .write_to(&mut writer)?;
    }
    writer.flush()?;

    let bodies = trajectory_json::Bodies {
        star: states.iter().map(|s| s.star).collect(),
        planet: states.iter().map(|s| s.planet).collect(),
        moon: states.iter().map(|s| s.moon).collect(),
    };
    trajectory_json::write(&output_dir.join("trajectories.json"), times, &bodies)?;

    let generated_utc = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let report = metrics_export::Report {
        scenario: &scenario.name,
        generated_utc: &generated_utc,
        moon_orbit_count: summary.moon_orbit_count,
        mean_orbits_between_alignments: summary.mean_orbits_between_alignments,
        alignment_times: &summary.alignment_times,
        pericentre_times: &summary.pericentre_times,
        parameters: metrics_export::ParameterEcho {
            planet_semi_major_axis: scenario.parameters.planet_semi_major_axis,
            planet_semi_minor_axis: scenario.parameters.planet_semi_minor_axis,
            planet_period: scenario.parameters.planet_period,
            moon_orbits_per_planet_orbit: scenario.parameters.moon_orbits_per_planet_orbit,
            moon_radial_base: scenario.parameters.moon_radial_base,
            moon_radial_amplitude: scenario.parameters.moon_radial_amplitude,
            moon_tangential_amplitude: scenario.parameters.moon_tangential_amplitude,
        },
    };
    metrics_export::write(&output_dir.join("metrics.json"), &report)?;

    Ok(())
}
