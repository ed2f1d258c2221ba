//! Frame builder
//!
//! Turns the six sampled scalars of one event into a self-consistent
//! [`EventRecord`]: parent four-vector in the lab frame, two-body isotropic
//! decay in the parent rest frame, then a boost of both daughters into the
//! lab frame.
//!
//! # Guarantees
//!
//! - the parent satisfies `E² − |p|² = mz²` under real arithmetic;
//! - the rest-frame daughters sum to exactly `(0, 0, 0, mz)`;
//! - the boost preserves each daughter's invariant mass and the lab-frame
//!   daughters sum to the parent component-wise.

use crate::kinematics::FourVector;
use crate::models::EventRecord;
use crate::orchestrator::GeneratorError;
use crate::sampler::EventKinematics;

/// Builds invariant-preserving event records from sampled scalars
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    daughter_mass: f64,
}

impl FrameBuilder {
    /// Create a frame builder for decay products of the given rest mass
    pub fn new(daughter_mass: f64) -> Self {
        Self { daughter_mass }
    }

    /// Construct the parent four-vector in the lab frame
    ///
    /// From mass, transverse momentum, azimuth and rapidity:
    /// `mT = √(mz² + pT²)`, `pz = mT·sinh(y)`, `E = mT·cosh(y)`.
    pub fn parent_vector(&self, kin: &EventKinematics) -> FourVector {
        let mt = (kin.mass * kin.mass + kin.pt * kin.pt).sqrt();
        FourVector::new(
            kin.pt * kin.azimuth.cos(),
            kin.pt * kin.azimuth.sin(),
            mt * kin.rapidity.sinh(),
            mt * kin.rapidity.cosh(),
        )
    }

    /// Build both daughters in the parent rest frame
    ///
    /// Each daughter carries half the parent mass as rest energy. The
    /// momentum magnitude is `sqrt(E_rest^2 - m_d^2)`, clamped at zero for
    /// the near-threshold case `mz < 2*m_d`; such events are still emitted,
    /// with both daughters at rest. Momentum cancels by construction.
    pub fn rest_frame_daughters(
        &self,
        mass: f64,
        cos_theta: f64,
        phi: f64,
    ) -> (FourVector, FourVector) {
        let e_rest = 0.5 * mass;
        let p = (e_rest * e_rest - self.daughter_mass * self.daughter_mass)
            .max(0.0)
            .sqrt();
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

        let px = p * sin_theta * phi.cos();
        let py = p * sin_theta * phi.sin();
        let pz = p * cos_theta;

        (
            FourVector::new(px, py, pz, e_rest),
            FourVector::new(-px, -py, -pz, e_rest),
        )
    }

    /// Assemble one complete event record
    ///
    /// Builds the parent, decays it in its rest frame, and boosts both
    /// daughters into the lab frame with the parent's boost vector.
    ///
    /// # Errors
    ///
    /// A parent with non-positive energy or a boost with `|β| ≥ 1` cannot
    /// arise from sampled kinematics; either one indicates malformed input
    /// and fails the whole run rather than skipping the event.
    pub fn build_event(&self, kin: &EventKinematics) -> Result<EventRecord, GeneratorError> {
        let parent = self.parent_vector(kin);

        let beta = parent
            .boost_vector()
            .ok_or(GeneratorError::NonPositiveEnergy { energy: parent.e() })?;
        let beta2 = beta[0] * beta[0] + beta[1] * beta[1] + beta[2] * beta[2];
        if beta2 >= 1.0 {
            return Err(GeneratorError::UnphysicalBoost { beta2 });
        }

        let (minus_rest, plus_rest) =
            self.rest_frame_daughters(kin.mass, kin.cos_theta, kin.decay_phi);

        let daughter_minus = minus_rest.boost(beta);
        let daughter_plus = plus_rest.boost(beta);

        Ok(EventRecord::new(kin.mass, parent, daughter_minus, daughter_plus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinematics() -> EventKinematics {
        EventKinematics {
            mass: 91.2,
            pt: 12.0,
            azimuth: 1.1,
            rapidity: -0.4,
            cos_theta: 0.3,
            decay_phi: 2.5,
        }
    }

    #[test]
    fn test_parent_is_on_shell() {
        let builder = FrameBuilder::new(0.000511);
        let kin = kinematics();
        let parent = builder.parent_vector(&kin);
        assert!((parent.mass2() - kin.mass * kin.mass).abs() < 1e-9);
    }

    #[test]
    fn test_rest_frame_sum_is_parent_at_rest() {
        let builder = FrameBuilder::new(0.000511);
        let (minus, plus) = builder.rest_frame_daughters(91.2, 0.3, 2.5);

        let total = minus + plus;
        assert_eq!(total.px(), 0.0);
        assert_eq!(total.py(), 0.0);
        assert_eq!(total.pz(), 0.0);
        assert_eq!(total.e(), 91.2);
    }

    #[test]
    fn test_near_threshold_clamps_momentum() {
        // mz < 2 * m_daughter: both daughters at rest, event still built
        let builder = FrameBuilder::new(60.0);
        let (minus, plus) = builder.rest_frame_daughters(91.2, 0.3, 2.5);

        assert_eq!(minus.spatial_squared(), 0.0);
        assert_eq!(plus.spatial_squared(), 0.0);
        assert_eq!(minus.e(), 45.6);
        assert_eq!(plus.e(), 45.6);
    }

    #[test]
    fn test_build_event_conserves_momentum() {
        let builder = FrameBuilder::new(0.000511);
        let record = builder.build_event(&kinematics()).unwrap();

        let sum = record.daughter_minus() + record.daughter_plus();
        let parent = record.parent();
        assert!((sum.px() - parent.px()).abs() < 1e-9);
        assert!((sum.py() - parent.py()).abs() < 1e-9);
        assert!((sum.pz() - parent.pz()).abs() < 1e-9);
        assert!((sum.e() - parent.e()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_energy_parent_rejected() {
        // mass = 0 and pT = 0 collapse the parent to the zero vector
        let builder = FrameBuilder::new(0.000511);
        let kin = EventKinematics {
            mass: 0.0,
            pt: 0.0,
            azimuth: 0.0,
            rapidity: 0.0,
            cos_theta: 0.0,
            decay_phi: 0.0,
        };
        let result = builder.build_event(&kin);
        assert!(matches!(
            result,
            Err(GeneratorError::NonPositiveEnergy { .. })
        ));
    }

    #[test]
    fn test_lightlike_parent_rejected() {
        // A massless parent moves at |beta| = 1; the boost is undefined
        let builder = FrameBuilder::new(0.000511);
        let kin = EventKinematics {
            mass: 0.0,
            pt: 5.0,
            azimuth: 0.0,
            rapidity: 0.0,
            cos_theta: 0.0,
            decay_phi: 0.0,
        };
        let result = builder.build_event(&kin);
        assert!(matches!(
            result,
            Err(GeneratorError::UnphysicalBoost { .. })
        ));
    }
}
