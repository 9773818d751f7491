//! Convenience module for exposing commonly used structs

pub use crate::components::{Rotor, RotorKind};
pub use crate::traits::{Init, SerdeAPI};
pub use crate::vehicle::{Fuselage, Vehicle, Wing};
pub use crate::weights::wiring::{wiring_mass, wiring_mass_breakdown, WiringMass};
pub use uom::ConstZero;
