//! Generator configuration
//!
//! All parameters needed to produce one event stream. The defaults are the
//! reference parameter set: a Z boson (PDG mass and width, in GeV) decaying
//! to an electron pair, with a falling-exponential transverse momentum
//! spectrum and a unit-width rapidity Gaussian.
//!
//! Validation happens in `Generator::new`; a config that fails validation
//! aborts the run before any events are produced.

use serde::{Deserialize, Serialize};

/// Complete generator configuration
///
/// # Example
/// ```
/// use decay_generator_core_rs::GeneratorConfig;
///
/// let config = GeneratorConfig {
///     event_count: 1000,
///     seed: 42,
///     ..GeneratorConfig::default()
/// };
/// assert_eq!(config.parent_mass, 91.1876);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of events to generate (0 yields an empty dataset)
    pub event_count: usize,

    /// RNG seed; 0 means "derive from system entropy"
    pub seed: u64,

    /// Resonance central mass (GeV)
    pub parent_mass: f64,

    /// Resonance width (GeV)
    pub parent_width: f64,

    /// Rest mass of each decay product (GeV)
    pub daughter_mass: f64,

    /// Mean of the transverse-momentum exponential (GeV)
    pub pt_scale: f64,

    /// Hard upper clamp on sampled transverse momentum (GeV)
    pub pt_cap: f64,

    /// Standard deviation of the rapidity Gaussian
    pub rapidity_sigma: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            event_count: 100_000,
            seed: 0,
            parent_mass: 91.1876,
            parent_width: 2.4952,
            daughter_mass: 0.000511,
            pt_scale: 8.0,
            pt_cap: 80.0,
            rapidity_sigma: 1.0,
        }
    }
}
