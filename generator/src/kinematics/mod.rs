//! Relativistic kinematics
//!
//! Four-momentum arithmetic and the frame transforms that turn sampled
//! scalars into lab-frame decay products.

pub mod four_vector;
pub mod frame;

// Re-exports
pub use four_vector::FourVector;
pub use frame::FrameBuilder;
