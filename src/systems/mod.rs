//! Systems module - trial systems for single-parameter VMC.

mod harmonic;
mod helium;
mod hydrogen;

pub use harmonic::HarmonicOscillator;
pub use helium::HeliumAtom;
pub use hydrogen::HydrogenAtom;
