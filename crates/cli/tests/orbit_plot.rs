use std::fs::{self, File};
use std::io::Write;

use assert_cmd::Command;

#[test]
fn orbit_plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("trajectories.csv");
    let png_path = dir.path().join("orbits.png");

    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(
        file,
        "time,star_x,star_y,star_z,planet_x,planet_y,planet_z,moon_x,moon_y,moon_z"
    )
    .unwrap();
    for i in 0..12 {
        let theta = i as f64 * 0.5;
        writeln!(
            file,
            "{:.3},0.0,0.0,0.0,{:.6},{:.6},0.0,{:.6},{:.6},0.0",
            i as f64 * 0.1,
            2.0 * theta.cos(),
            1.5 * theta.sin(),
            2.0 * theta.cos() + 0.9,
            1.5 * theta.sin() + 0.2,
        )
        .unwrap();
    }

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "400",
            "--height",
            "400",
            "--rosette",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn missing_columns_fail_loudly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("broken.csv");
    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(file, "time,planet_x,planet_y").unwrap();
    writeln!(file, "0.0,1.0,1.0").unwrap();

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .args(["--input", csv_path.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn empty_input_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("empty.csv");
    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(
        file,
        "time,star_x,star_y,star_z,planet_x,planet_y,planet_z,moon_x,moon_y,moon_z"
    )
    .unwrap();

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .args(["--input", csv_path.to_str().unwrap()])
        .assert()
        .failure();
}
