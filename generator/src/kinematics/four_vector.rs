//! Relativistic four-momentum
//!
//! A four-vector is the (px, py, pz, E) energy-momentum tuple of one
//! particle, all components in double precision.
//!
//! # Critical Invariant
//!
//! For a particle of rest mass m, `E² − (px² + py² + pz²) ≈ m²` within
//! floating-point tolerance. Every operation in this module preserves that
//! invariant; the boost in particular maps a four-vector between inertial
//! frames without changing its invariant mass.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Energy-momentum four-vector (px, py, pz, E)
///
/// # Example
/// ```
/// use decay_generator_core_rs::FourVector;
///
/// // A particle of mass 3 at rest along z with |p| = 4: E = 5
/// let p = FourVector::new(0.0, 0.0, 4.0, 5.0);
/// assert!((p.mass() - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourVector {
    px: f64,
    py: f64,
    pz: f64,
    e: f64,
}

impl FourVector {
    /// Create a four-vector from its components
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Momentum x-component
    pub fn px(&self) -> f64 {
        self.px
    }

    /// Momentum y-component
    pub fn py(&self) -> f64 {
        self.py
    }

    /// Momentum z-component
    pub fn pz(&self) -> f64 {
        self.pz
    }

    /// Energy component
    pub fn e(&self) -> f64 {
        self.e
    }

    /// Squared spatial momentum |p|²
    pub fn spatial_squared(&self) -> f64 {
        self.px * self.px + self.py * self.py + self.pz * self.pz
    }

    /// Squared invariant mass E² − |p|²
    ///
    /// May come out slightly negative from rounding when the true mass is
    /// near zero; callers that need the mass itself should use [`mass`],
    /// which clamps the radicand.
    ///
    /// [`mass`]: FourVector::mass
    pub fn mass2(&self) -> f64 {
        self.e * self.e - self.spatial_squared()
    }

    /// Invariant mass √(E² − |p|²), frame-independent
    pub fn mass(&self) -> f64 {
        self.mass2().max(0.0).sqrt()
    }

    /// Transverse momentum √(px² + py²)
    pub fn pt(&self) -> f64 {
        (self.px * self.px + self.py * self.py).sqrt()
    }

    /// Velocity vector β = (px/E, py/E, pz/E)
    ///
    /// Only defined for positive energy; returns `None` when `E <= 0`.
    pub fn boost_vector(&self) -> Option<[f64; 3]> {
        if self.e > 0.0 {
            Some([self.px / self.e, self.py / self.e, self.pz / self.e])
        } else {
            None
        }
    }

    /// Apply a pure Lorentz boost with velocity `beta`
    ///
    /// Maps this four-vector into the frame moving with velocity `-beta`
    /// relative to the current one; boosting a rest-frame decay product by
    /// the parent's own boost vector lands it in the lab frame.
    ///
    /// The caller must guarantee `|beta| < 1`; the generation engine treats
    /// a violation as a fatal configuration error before ever calling this.
    pub fn boost(&self, beta: [f64; 3]) -> FourVector {
        let [bx, by, bz] = beta;
        let b2 = bx * bx + by * by + bz * bz;
        debug_assert!(b2 < 1.0, "boost called with |beta|^2 = {} >= 1", b2);

        let gamma = 1.0 / (1.0 - b2).sqrt();
        let bp = bx * self.px + by * self.py + bz * self.pz;
        // (gamma - 1) / b2 is the projection coefficient along beta; the
        // b2 -> 0 limit is finite but the quotient is not, hence the guard.
        let gamma2 = if b2 > 0.0 { (gamma - 1.0) / b2 } else { 0.0 };
        let factor = gamma2 * bp + gamma * self.e;

        FourVector::new(
            self.px + factor * bx,
            self.py + factor * by,
            self.pz + factor * bz,
            gamma * (self.e + bp),
        )
    }
}

impl Add for FourVector {
    type Output = FourVector;

    fn add(self, other: FourVector) -> FourVector {
        FourVector::new(
            self.px + other.px,
            self.py + other.py,
            self.pz + other.pz,
            self.e + other.e,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let p = FourVector::new(1.0, 2.0, 3.0, 10.0);
        assert_eq!(p.px(), 1.0);
        assert_eq!(p.py(), 2.0);
        assert_eq!(p.pz(), 3.0);
        assert_eq!(p.e(), 10.0);
    }

    #[test]
    fn test_mass_of_rest_vector() {
        let p = FourVector::new(0.0, 0.0, 0.0, 91.1876);
        assert_eq!(p.mass(), 91.1876);
    }

    #[test]
    fn test_mass_clamps_negative_radicand() {
        // Slightly spacelike from rounding; mass must come out 0, not NaN
        let p = FourVector::new(1.0, 0.0, 0.0, 1.0 - 1e-12);
        assert_eq!(p.mass(), 0.0);
    }

    #[test]
    fn test_pt() {
        let p = FourVector::new(3.0, 4.0, 12.0, 20.0);
        assert!((p.pt() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_boost_vector_requires_positive_energy() {
        assert!(FourVector::new(1.0, 0.0, 0.0, 0.0).boost_vector().is_none());
        assert!(FourVector::new(1.0, 0.0, 0.0, -5.0).boost_vector().is_none());

        let beta = FourVector::new(1.0, 2.0, 2.0, 10.0).boost_vector().unwrap();
        assert_eq!(beta, [0.1, 0.2, 0.2]);
    }

    #[test]
    fn test_boost_of_rest_frame_vector() {
        // Boosting (0,0,0,m) by beta along z gives (0, 0, gamma*beta*m, gamma*m)
        let m = 91.1876;
        let beta = 0.6f64;
        let gamma = 1.0 / (1.0 - beta * beta).sqrt();

        let boosted = FourVector::new(0.0, 0.0, 0.0, m).boost([0.0, 0.0, beta]);

        assert!((boosted.e() - gamma * m).abs() < 1e-9);
        assert!((boosted.pz() - gamma * beta * m).abs() < 1e-9);
        assert_eq!(boosted.px(), 0.0);
        assert_eq!(boosted.py(), 0.0);
    }

    #[test]
    fn test_boost_preserves_mass() {
        let p = FourVector::new(3.0, -2.0, 7.0, 12.0);
        let boosted = p.boost([0.3, -0.4, 0.5]);
        assert!((boosted.mass2() - p.mass2()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_boost_is_identity() {
        let p = FourVector::new(3.0, -2.0, 7.0, 12.0);
        assert_eq!(p.boost([0.0, 0.0, 0.0]), p);
    }

    #[test]
    fn test_add_componentwise() {
        let a = FourVector::new(1.0, 2.0, 3.0, 4.0);
        let b = FourVector::new(-1.0, 0.5, 1.0, 6.0);
        assert_eq!(a + b, FourVector::new(0.0, 2.5, 4.0, 10.0));
    }
}
