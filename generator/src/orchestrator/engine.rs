//! Generation engine
//!
//! Main generation loop integrating all components:
//! - Kinematic sampling (six scalars per event, fixed draw order)
//! - Frame building (parent vector, rest-frame decay, boost to lab)
//! - Event logging (ordered dataset for the analysis step)
//!
//! # Architecture
//!
//! ```text
//! For each of event_count iterations:
//! 1. Sample mass, pT, azimuth, rapidity, decay angles (one RNG stream)
//! 2. Build the parent four-vector in the lab frame
//! 3. Decay isotropically in the parent rest frame
//! 4. Boost both daughters into the lab frame
//! 5. Append the record to the event log
//! ```
//!
//! Each iteration's state is local; the RNG stream is the only mutable
//! state carried across events, which is what makes a run reproducible
//! from its seed alone.
//!
//! # Example
//!
//! ```rust
//! use decay_generator_core_rs::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     event_count: 100,
//!     seed: 42,
//!     ..GeneratorConfig::default()
//! };
//!
//! let mut generator = Generator::new(config).unwrap();
//! let log = generator.run().unwrap();
//! assert_eq!(log.len(), 100);
//! ```

use crate::kinematics::FrameBuilder;
use crate::models::{EventLog, EventRecord, GeneratorConfig};
use crate::rng::{entropy_seed, RngManager};
use crate::sampler::KinematicSampler;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors that abort a generation run
///
/// Configuration problems surface before any event is produced; the in-run
/// variants indicate inputs no physical configuration can reach. Events
/// near the decay threshold (`mz < 2 * m_daughter`) are not errors; they
/// emit with zero rest-frame momentum.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration validation error
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    /// The positive-mass rejection loop hit its retry cap
    #[error("parent mass sampling exhausted after {attempts} attempts; check parent_mass and parent_width")]
    MassSamplingExhausted { attempts: usize },

    /// Parent four-vector has no defined boost (E <= 0)
    #[error("parent energy {energy} is not positive; boost undefined")]
    NonPositiveEnergy { energy: f64 },

    /// Boost magnitude at or beyond the speed of light
    #[error("boost magnitude |beta|^2 = {beta2} >= 1; unphysical parent kinematics")]
    UnphysicalBoost { beta2: f64 },

    /// Dataset sink failure, reported upward unchanged
    #[error("dataset I/O error")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Generator
// ============================================================================

/// Monte Carlo two-body decay event generator
///
/// Owns the configuration, the single RNG stream, and the two generation
/// components. Construction validates the configuration and resolves the
/// effective seed; generation itself cannot fail for physical inputs.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    sampler: KinematicSampler,
    frame: FrameBuilder,
    rng: RngManager,
    /// Effective seed after entropy resolution (never 0)
    seed: u64,
    events_generated: usize,
}

impl Generator {
    /// Create a new generator from configuration
    ///
    /// Validates all parameters, resolves `seed == 0` to an entropy-derived
    /// seed, and initializes the sampler and frame builder.
    ///
    /// # Returns
    ///
    /// * `Ok(Generator)` - ready to generate
    /// * `Err(GeneratorError::InvalidConfig)` - validation failed; no events
    ///   were produced
    ///
    /// # Example
    ///
    /// ```rust
    /// use decay_generator_core_rs::{Generator, GeneratorConfig};
    ///
    /// let generator = Generator::new(GeneratorConfig::default()).unwrap();
    /// assert_ne!(generator.seed(), 0);
    /// ```
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::validate_config(&config)?;

        let seed = if config.seed == 0 {
            entropy_seed()
        } else {
            config.seed
        };

        let sampler = KinematicSampler::new(&config);
        let frame = FrameBuilder::new(config.daughter_mass);
        let rng = RngManager::new(seed);

        Ok(Self {
            config,
            sampler,
            frame,
            rng,
            seed,
            events_generated: 0,
        })
    }

    fn validate_config(config: &GeneratorConfig) -> Result<(), GeneratorError> {
        let finite = [
            ("parent_mass", config.parent_mass),
            ("parent_width", config.parent_width),
            ("daughter_mass", config.daughter_mass),
            ("pt_scale", config.pt_scale),
            ("pt_cap", config.pt_cap),
            ("rapidity_sigma", config.rapidity_sigma),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(GeneratorError::InvalidConfig {
                    message: format!("{} must be finite, got {}", name, value),
                });
            }
        }

        if config.parent_mass <= 0.0 {
            return Err(GeneratorError::InvalidConfig {
                message: format!("parent_mass must be > 0, got {}", config.parent_mass),
            });
        }

        if config.parent_width <= 0.0 {
            return Err(GeneratorError::InvalidConfig {
                message: format!("parent_width must be > 0, got {}", config.parent_width),
            });
        }

        if config.daughter_mass < 0.0 {
            return Err(GeneratorError::InvalidConfig {
                message: format!("daughter_mass must be >= 0, got {}", config.daughter_mass),
            });
        }

        if config.pt_scale <= 0.0 {
            return Err(GeneratorError::InvalidConfig {
                message: format!("pt_scale must be > 0, got {}", config.pt_scale),
            });
        }

        if config.pt_cap < 0.0 {
            return Err(GeneratorError::InvalidConfig {
                message: format!("pt_cap must be >= 0, got {}", config.pt_cap),
            });
        }

        if config.rapidity_sigma < 0.0 {
            return Err(GeneratorError::InvalidConfig {
                message: format!("rapidity_sigma must be >= 0, got {}", config.rapidity_sigma),
            });
        }

        Ok(())
    }

    /// Generate the next event
    ///
    /// Samples one scalar tuple and builds one record. Advances the RNG
    /// stream; no other state changes between events.
    pub fn next_event(&mut self) -> Result<EventRecord, GeneratorError> {
        let kinematics = self.sampler.sample_event(&mut self.rng)?;
        let record = self.frame.build_event(&kinematics)?;
        self.events_generated += 1;
        Ok(record)
    }

    /// Run the full generation loop
    ///
    /// Produces exactly `event_count` records in order, starting from the
    /// current stream position. An `event_count` of 0 yields an empty log
    /// and no error.
    pub fn run(&mut self) -> Result<EventLog, GeneratorError> {
        let mut log = EventLog::with_capacity(self.config.event_count);
        for _ in 0..self.config.event_count {
            log.push(self.next_event()?);
        }
        Ok(log)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The configuration this generator was built from
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Effective RNG seed (entropy-resolved when the configured seed was 0)
    ///
    /// Recording this value makes an entropy-seeded run reproducible.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current RNG stream state (for replay)
    pub fn rng_state(&self) -> u64 {
        self.rng.get_state()
    }

    /// Number of events generated so far
    pub fn events_generated(&self) -> usize {
        self.events_generated
    }
}
