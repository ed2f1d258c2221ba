//! Decay Generator Core - Rust Engine
//!
//! Monte Carlo event generator for two-body resonance decays with
//! deterministic execution: a parent particle of variable invariant mass is
//! produced with random transverse momentum and rapidity, decays
//! isotropically in its own rest frame, and the daughters are boosted into
//! the lab frame.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation (single shared stream)
//! - **sampler**: Per-event kinematic scalars, fixed draw order
//! - **kinematics**: Four-vectors, frame builder, relativistic boost
//! - **models**: Domain types (GeneratorConfig, EventRecord, EventLog)
//! - **orchestrator**: Main generation loop
//!
//! # Critical Invariants
//!
//! 1. Same seed + same config → bit-identical event streams
//! 2. Every parent four-vector is on-shell: E² − |p|² ≈ mz²
//! 3. Energy-momentum is conserved across each decay: parent ≈ minus + plus
//! 4. The boost preserves each daughter's invariant mass

// Module declarations
pub mod kinematics;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod sampler;

// Re-exports for convenience
pub use kinematics::{FourVector, FrameBuilder};
pub use models::{
    config::GeneratorConfig,
    event::{EventLog, EventRecord},
};
pub use orchestrator::{Generator, GeneratorError};
pub use rng::{entropy_seed, RngManager};
pub use sampler::{EventKinematics, KinematicSampler, MASS_RESAMPLE_CAP};
