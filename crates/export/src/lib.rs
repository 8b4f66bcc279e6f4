//! Artifact writers for sampled trajectories and run metrics.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by
/// convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod trajectory {
    use std::io::{self, Write};

    pub const HEADER: &str =
        "time,star_x,star_y,star_z,planet_x,planet_y,planet_z,moon_x,moon_y,moon_z";

    /// Write the standard trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the trajectory exporter.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub time: f64,
        pub star: [f64; 3],
        pub planet: [f64; 3],
        pub moon: [f64; 3],
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header
        /// ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
                self.time,
                self.star[0],
                self.star[1],
                self.star[2],
                self.planet[0],
                self.planet[1],
                self.planet[2],
                self.moon[0],
                self.moon[1],
                self.moon[2],
            )
        }
    }
}

pub mod trajectory_json {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Per-body position series keyed by display name, the shape the web
    /// front end consumes.
    #[derive(Debug, Serialize)]
    pub struct Bodies {
        #[serde(rename = "Star")]
        pub star: Vec<[f64; 3]>,
        #[serde(rename = "Planet")]
        pub planet: Vec<[f64; 3]>,
        #[serde(rename = "Moon")]
        pub moon: Vec<[f64; 3]>,
    }

    #[derive(Debug, Serialize)]
    struct Document<'a> {
        times: &'a [f64],
        bodies: &'a Bodies,
    }

    /// Write the `{ times, bodies }` trajectory document.
    pub fn write(output: &Path, times: &[f64], bodies: &Bodies) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = Document { times, bodies };
        to_writer_pretty(File::create(output)?, &document)?;
        Ok(())
    }
}

pub mod metrics {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Echo of the orbit parameters a report was generated from.
    #[derive(Debug, Clone, Serialize)]
    pub struct ParameterEcho {
        pub planet_semi_major_axis: f64,
        pub planet_semi_minor_axis: f64,
        pub planet_period: f64,
        pub moon_orbits_per_planet_orbit: f64,
        pub moon_radial_base: f64,
        pub moon_radial_amplitude: f64,
        pub moon_tangential_amplitude: f64,
    }

    /// Metrics report persisted alongside exported trajectories.
    #[derive(Debug, Serialize)]
    pub struct Report<'a> {
        pub scenario: &'a str,
        pub generated_utc: &'a str,
        pub moon_orbit_count: usize,
        pub mean_orbits_between_alignments: Option<f64>,
        pub alignment_times: &'a [f64],
        pub pericentre_times: &'a [f64],
        pub parameters: ParameterEcho,
    }

    /// Write the metrics report as pretty JSON.
    pub fn write(output: &Path, report: &Report<'_>) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(output)?, report)?;
        Ok(())
    }
}
