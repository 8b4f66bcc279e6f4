use std::io::Write;

use rosette_simulator::scenario::{Scenario, ScenarioError, load_scenario};

fn scenario_from_yaml(contents: &str) -> Result<Scenario, ScenarioError> {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp scenario");
    file.write_all(contents.as_bytes()).expect("write scenario");
    load_scenario(file.path())
}

fn base_yaml(extra: &str) -> String {
    format!(
        "name: test\n\
         orbit:\n\
         \x20 planet_semi_major_axis: 2.0\n\
         \x20 planet_semi_minor_axis: 1.5\n\
         \x20 planet_period: 10.0\n\
         \x20 moon_orbits_per_planet_orbit: 5.0\n\
         \x20 moon_radial_base: 0.9\n\
         \x20 moon_radial_amplitude: 0.9\n\
         \x20 moon_tangential_amplitude: 0.3\n\
         run:\n\
         \x20 num_planet_orbits: 2.0\n\
         \x20 base_step: 0.05\n\
         {extra}"
    )
}

#[test]
fn shipped_scenario_loads_with_the_documented_defaults() {
    let scenario = load_scenario("data/scenarios/red_dwarf.yaml").expect("red dwarf scenario");

    assert_eq!(scenario.name, "red_dwarf");
    assert_eq!(scenario.parameters.planet_semi_major_axis, 2.0);
    assert_eq!(scenario.parameters.planet_semi_minor_axis, 1.5);
    assert_eq!(scenario.parameters.planet_period, 10.0);
    assert_eq!(scenario.parameters.moon_orbits_per_planet_orbit, 5.0);
    assert_eq!(scenario.parameters.moon_radial_base, 0.9);
    assert_eq!(scenario.parameters.moon_radial_amplitude, 0.9);
    assert_eq!(scenario.parameters.moon_tangential_amplitude, 0.3);
    assert_eq!(scenario.run.num_planet_orbits, 6.0);
    assert_eq!(scenario.run.base_step, 0.01);
    assert_eq!(scenario.run.trail_capacity, 500);
    assert_eq!(scenario.total_time(), 60.0);
    assert_eq!(scenario.controls.len(), 8);
}

#[test]
fn shipped_scenario_builds_a_seeded_host_and_control_surface() {
    let scenario = load_scenario("data/scenarios/red_dwarf.yaml").expect("red dwarf scenario");

    let simulation = scenario.simulation();
    assert_eq!(simulation.clock().speed_multiplier(), 1.0);
    assert_eq!(simulation.parameters(), &scenario.parameters);

    let controls = scenario.parameter_controls();
    assert_eq!(controls.value("planet_period"), Some(10.0));
    assert!(controls.range("planet_period").is_some());
}

#[test]
fn zero_period_is_rejected_at_the_validation_boundary() {
    let yaml = base_yaml("").replace("planet_period: 10.0", "planet_period: 0.0");
    match scenario_from_yaml(&yaml) {
        Err(ScenarioError::NonPositive { parameter, value }) => {
            assert_eq!(parameter, "planet_period");
            assert_eq!(value, 0.0);
        }
        other => panic!("expected NonPositive for zero period, got {other:?}"),
    }
}

#[test]
fn negative_amplitudes_are_rejected() {
    let yaml =
        base_yaml("").replace("moon_radial_amplitude: 0.9", "moon_radial_amplitude: -0.1");
    match scenario_from_yaml(&yaml) {
        Err(ScenarioError::Negative { parameter, .. }) => {
            assert_eq!(parameter, "moon_radial_amplitude");
        }
        other => panic!("expected Negative for a negative amplitude, got {other:?}"),
    }
}

#[test]
fn inverted_control_ranges_are_rejected() {
    let yaml = base_yaml(
        "controls:\n\
         \x20 planet_period: { min: 60.0, max: 2.0, step: 0.5 }\n",
    );
    match scenario_from_yaml(&yaml) {
        Err(ScenarioError::InvalidControlRange { control, .. }) => {
            assert_eq!(control, "planet_period");
        }
        other => panic!("expected InvalidControlRange, got {other:?}"),
    }
}

#[test]
fn defaults_outside_their_declared_range_are_rejected() {
    let yaml = base_yaml(
        "controls:\n\
         \x20 planet_period: { min: 20.0, max: 60.0, step: 0.5 }\n",
    );
    match scenario_from_yaml(&yaml) {
        Err(ScenarioError::DefaultOutOfRange { control, value, .. }) => {
            assert_eq!(control, "planet_period");
            assert_eq!(value, 10.0);
        }
        other => panic!("expected DefaultOutOfRange, got {other:?}"),
    }
}

#[test]
fn controls_must_name_known_parameters() {
    let yaml = base_yaml(
        "controls:\n\
         \x20 star_mass: { min: 0.0, max: 1.0, step: 0.1 }\n",
    );
    match scenario_from_yaml(&yaml) {
        Err(ScenarioError::UnknownControl { control }) => assert_eq!(control, "star_mass"),
        other => panic!("expected UnknownControl, got {other:?}"),
    }
}

#[test]
fn run_settings_take_serde_defaults_when_omitted() {
    let scenario = scenario_from_yaml(&base_yaml("")).expect("minimal scenario");
    assert_eq!(scenario.run.speed_multiplier, 1.0);
    assert_eq!(scenario.run.trail_capacity, 500);
}

#[test]
fn toml_scenarios_load_like_yaml_ones() {
    let toml = "name = \"toml_test\"\n\n\
        [orbit]\n\
        planet_semi_major_axis = 2.0\n\
        planet_semi_minor_axis = 1.5\n\
        planet_period = 10.0\n\
        moon_orbits_per_planet_orbit = 5.0\n\
        moon_radial_base = 0.9\n\
        moon_radial_amplitude = 0.9\n\
        moon_tangential_amplitude = 0.3\n\n\
        [run]\n\
        num_planet_orbits = 2.0\n\
        base_step = 0.05\n";
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp scenario");
    file.write_all(toml.as_bytes()).expect("write scenario");

    let scenario = load_scenario(file.path()).expect("toml scenario");
    assert_eq!(scenario.name, "toml_test");
    assert_eq!(scenario.parameters.planet_period, 10.0);
}

#[test]
fn scenario_catalogs_load_from_a_directory_of_toml_files() {
    let toml = |name: &str| {
        format!(
            "name = \"{name}\"\n\n\
             [orbit]\n\
             planet_semi_major_axis = 2.0\n\
             planet_semi_minor_axis = 1.5\n\
             planet_period = 10.0\n\
             moon_orbits_per_planet_orbit = 5.0\n\
             moon_radial_base = 0.9\n\
             moon_radial_amplitude = 0.9\n\
             moon_tangential_amplitude = 0.3\n\n\
             [run]\n\
             num_planet_orbits = 2.0\n\
             base_step = 0.05\n"
        )
    };
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("alpha.toml"), toml("alpha")).expect("write alpha");
    std::fs::write(dir.path().join("beta.toml"), toml("beta")).expect("write beta");
    std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write notes");

    let configs =
        rosette_simulator::config::load_scenario_configs(dir.path()).expect("catalog load");
    let names: Vec<&str> = configs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta"], "sorted TOML files only");
}

#[test]
fn parse_failures_surface_as_config_errors() {
    match scenario_from_yaml("name: [unterminated") {
        Err(ScenarioError::Config(_)) => {}
        other => panic!("expected a Config error, got {other:?}"),
    }
}
