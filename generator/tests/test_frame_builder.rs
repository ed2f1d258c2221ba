//! Tests for the frame builder
//!
//! Verifies the three construction steps (parent vector, rest-frame decay,
//! boost to lab) against the physical invariants they must preserve.

use decay_generator_core_rs::{EventKinematics, FrameBuilder, GeneratorError};

const ELECTRON_MASS: f64 = 0.000511;
const MUON_MASS: f64 = 0.1056584;

fn kin(mass: f64, pt: f64, azimuth: f64, rapidity: f64, cos_theta: f64, phi: f64) -> EventKinematics {
    EventKinematics {
        mass,
        pt,
        azimuth,
        rapidity,
        cos_theta,
        decay_phi: phi,
    }
}

#[test]
fn test_parent_vector_on_shell_across_inputs() {
    let builder = FrameBuilder::new(ELECTRON_MASS);
    for &mass in &[1.0, 50.0, 91.2, 150.0] {
        for &pt in &[0.0, 5.0, 40.0, 80.0] {
            for &y in &[-2.5, -0.5, 0.0, 1.0, 2.5] {
                let parent = builder.parent_vector(&kin(mass, pt, 0.7, y, 0.0, 0.0));
                let tol = (1e-6 * mass * mass).max(1e-9);
                assert!(
                    (parent.mass2() - mass * mass).abs() < tol,
                    "parent off-shell: mass {} pt {} y {}",
                    mass,
                    pt,
                    y
                );
            }
        }
    }
}

#[test]
fn test_parent_vector_components() {
    let builder = FrameBuilder::new(ELECTRON_MASS);
    let parent = builder.parent_vector(&kin(91.2, 10.0, 0.0, 0.5, 0.0, 0.0));

    let mt = (91.2f64 * 91.2 + 100.0).sqrt();
    assert!((parent.px() - 10.0).abs() < 1e-12);
    assert!(parent.py().abs() < 1e-12);
    assert!((parent.pz() - mt * 0.5f64.sinh()).abs() < 1e-9);
    assert!((parent.e() - mt * 0.5f64.cosh()).abs() < 1e-9);
}

#[test]
fn test_rest_frame_daughters_balance_exactly() {
    let builder = FrameBuilder::new(MUON_MASS);
    let (minus, plus) = builder.rest_frame_daughters(91.2, 0.37, 4.1);

    // Exact cancellation by construction, not just within tolerance
    assert_eq!(minus.px(), -plus.px());
    assert_eq!(minus.py(), -plus.py());
    assert_eq!(minus.pz(), -plus.pz());
    assert_eq!(minus.e() + plus.e(), 91.2);
}

#[test]
fn test_rest_frame_daughter_mass() {
    let builder = FrameBuilder::new(MUON_MASS);
    let (minus, _) = builder.rest_frame_daughters(91.2, 0.37, 4.1);

    let tol = 1e-6 * MUON_MASS * MUON_MASS;
    assert!((minus.mass2() - MUON_MASS * MUON_MASS).abs() < tol);
}

#[test]
fn test_build_event_full_invariants() {
    let builder = FrameBuilder::new(MUON_MASS);
    let record = builder
        .build_event(&kin(91.2, 25.0, 2.2, -1.3, -0.6, 0.9))
        .unwrap();

    let parent = record.parent();
    let minus = record.daughter_minus();
    let plus = record.daughter_plus();

    // Conservation across the decay
    let sum = minus + plus;
    let tol = 1e-6 * parent.e().max(1.0);
    assert!((sum.px() - parent.px()).abs() < tol);
    assert!((sum.py() - parent.py()).abs() < tol);
    assert!((sum.pz() - parent.pz()).abs() < tol);
    assert!((sum.e() - parent.e()).abs() < tol);

    // Daughter masses preserved by the boost
    let mass_tol = (1e-6 * MUON_MASS * MUON_MASS).max(1e-10 * minus.e() * minus.e());
    assert!((minus.mass2() - MUON_MASS * MUON_MASS).abs() < mass_tol);
    assert!((plus.mass2() - MUON_MASS * MUON_MASS).abs() < mass_tol);

    // Invariant mass of the pair reconstructs the sampled parent mass
    assert!((sum.mass() - record.mz).abs() < 1e-6 * record.mz);
}

#[test]
fn test_near_threshold_event_still_emitted() {
    // mz below 2 * m_daughter: rest momentum clamps to zero, the event is
    // emitted, and both daughters coincide after the common boost.
    let builder = FrameBuilder::new(60.0);
    let record = builder
        .build_event(&kin(91.2, 15.0, 0.4, 0.8, 0.1, 3.3))
        .unwrap();

    let minus = record.daughter_minus();
    let plus = record.daughter_plus();
    assert_eq!(minus, plus);

    // Energy conservation survives the clamp
    let parent = record.parent();
    let sum = minus + plus;
    let tol = 1e-6 * parent.e();
    assert!((sum.e() - parent.e()).abs() < tol);
    assert!((sum.px() - parent.px()).abs() < tol);
}

#[test]
fn test_zero_vector_parent_is_config_error() {
    let builder = FrameBuilder::new(ELECTRON_MASS);
    let result = builder.build_event(&kin(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    assert!(matches!(
        result,
        Err(GeneratorError::NonPositiveEnergy { .. })
    ));
}

#[test]
fn test_lightlike_parent_is_config_error() {
    // Massless parent at azimuth 0 and rapidity 0 gives |beta| exactly 1
    let builder = FrameBuilder::new(ELECTRON_MASS);
    let result = builder.build_event(&kin(0.0, 5.0, 0.0, 0.0, 0.0, 0.0));
    assert!(matches!(result, Err(GeneratorError::UnphysicalBoost { .. })));
}
