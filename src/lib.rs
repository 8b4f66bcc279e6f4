//! Closed-form kinematics for a toy three-body system: a star fixed at the
//! origin, a planet on an ellipse around it, and a moon tracing a rosette in
//! the planet's radial/tangential frame.
//!
//! The library is deliberately split between the pure evaluator
//! ([`ephemeris`]) and the state-owning host ([`simulation`]) so that batch
//! exports, tests, and an interactive front end all drive the same math.

pub mod controls;
pub mod ephemeris;
pub mod metrics;
pub mod scenario;
pub mod simulation;

pub use rosette_config as config;
pub use rosette_export as export;

/// Returns the version of the library for smoke tests while scaffolding.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
