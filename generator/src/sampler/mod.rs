//! Kinematic sampler
//!
//! Draws the scalar quantities that define one event, each from its
//! configured distribution, off a single shared RNG stream.
//!
//! # Draw order contract
//!
//! Reproducibility (same seed → same event stream) depends on a single
//! deterministic draw sequence, so the per-event order is a contract, not
//! an implementation detail:
//!
//! 1. parent mass (Breit-Wigner)
//! 2. transverse momentum (exponential, clamped)
//! 3. azimuthal angle (uniform)
//! 4. rapidity (Gaussian)
//! 5. decay cos θ (uniform, isotropic)
//! 6. decay φ (uniform)
//!
//! Every sampling operation takes the RNG by exclusive mutable reference
//! and advances it; nothing else touches the stream.

use crate::models::GeneratorConfig;
use crate::orchestrator::GeneratorError;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Retry bound for the positive-mass rejection loop.
///
/// With any physically sensible mass/width the first draw is almost always
/// positive; exhausting this cap means the configuration itself is
/// pathological and the run must abort.
pub const MASS_RESAMPLE_CAP: usize = 64;

/// The six sampled scalars that define one event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventKinematics {
    /// Parent invariant mass
    pub mass: f64,
    /// Parent transverse momentum
    pub pt: f64,
    /// Parent azimuthal angle, [0, 2π)
    pub azimuth: f64,
    /// Parent rapidity
    pub rapidity: f64,
    /// Decay polar angle cosine in the rest frame, [-1, 1]
    pub cos_theta: f64,
    /// Decay azimuthal angle in the rest frame, [0, 2π)
    pub decay_phi: f64,
}

/// Samples per-event kinematic scalars from the configured distributions
///
/// Stateless apart from the distribution parameters; the RNG stream is the
/// only thing advanced between calls.
#[derive(Debug, Clone)]
pub struct KinematicSampler {
    parent_mass: f64,
    parent_width: f64,
    pt_scale: f64,
    pt_cap: f64,
    rapidity_sigma: f64,
}

impl KinematicSampler {
    /// Create a sampler from the generator configuration
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            parent_mass: config.parent_mass,
            parent_width: config.parent_width,
            pt_scale: config.pt_scale,
            pt_cap: config.pt_cap,
            rapidity_sigma: config.rapidity_sigma,
        }
    }

    /// Sample the parent mass from a Breit-Wigner peak
    ///
    /// Uses the symmetric (Cauchy-shaped) approximation of the relativistic
    /// Breit-Wigner via the inverse CDF: `m0 + (Γ/2)·tan(π·(u − ½))`. The
    /// heavy lower tail can reach non-physical values, so draws are rejected
    /// until positive, bounded by [`MASS_RESAMPLE_CAP`].
    pub fn sample_parent_mass(&self, rng: &mut RngManager) -> Result<f64, GeneratorError> {
        for _ in 0..MASS_RESAMPLE_CAP {
            let u = rng.next_f64();
            let mass = self.parent_mass + 0.5 * self.parent_width * (PI * (u - 0.5)).tan();
            if mass > 0.0 {
                return Ok(mass);
            }
        }
        Err(GeneratorError::MassSamplingExhausted {
            attempts: MASS_RESAMPLE_CAP,
        })
    }

    /// Sample the parent transverse momentum
    ///
    /// Exponential with mean `pt_scale`, clamped to `[0, pt_cap]`.
    pub fn sample_transverse_momentum(&self, rng: &mut RngManager) -> f64 {
        let u = rng.next_f64();
        // Inverse CDF on (0, 1]; 1 - u avoids ln(0)
        let pt = -self.pt_scale * (1.0 - u).ln();
        pt.clamp(0.0, self.pt_cap)
    }

    /// Sample the parent azimuthal angle, uniform over [0, 2π)
    pub fn sample_azimuth(&self, rng: &mut RngManager) -> f64 {
        2.0 * PI * rng.next_f64()
    }

    /// Sample the parent rapidity, Gaussian with mean 0
    ///
    /// Box-Muller transform; consumes two uniforms per call.
    pub fn sample_rapidity(&self, rng: &mut RngManager) -> f64 {
        let u1 = rng.next_f64();
        let u2 = rng.next_f64();
        let z = (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * PI * u2).cos();
        self.rapidity_sigma * z
    }

    /// Sample the rest-frame decay angles (cos θ, φ)
    ///
    /// cos θ uniform over [-1, 1] makes the decay isotropic; φ uniform over
    /// [0, 2π). Independent of the parent-level draws.
    pub fn sample_decay_angles(&self, rng: &mut RngManager) -> (f64, f64) {
        let cos_theta = 2.0 * rng.next_f64() - 1.0;
        let phi = 2.0 * PI * rng.next_f64();
        (cos_theta, phi)
    }

    /// Draw all six scalars for one event, in the contractual order
    pub fn sample_event(&self, rng: &mut RngManager) -> Result<EventKinematics, GeneratorError> {
        let mass = self.sample_parent_mass(rng)?;
        let pt = self.sample_transverse_momentum(rng);
        let azimuth = self.sample_azimuth(rng);
        let rapidity = self.sample_rapidity(rng);
        let (cos_theta, decay_phi) = self.sample_decay_angles(rng);

        Ok(EventKinematics {
            mass,
            pt,
            azimuth,
            rapidity,
            cos_theta,
            decay_phi,
        })
    }
}
