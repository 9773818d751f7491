//! Module containing propulsion components carried by a [Vehicle](crate::vehicle::Vehicle)

pub(crate) use crate::imports::*;

pub mod rotor;

pub use rotor::{Rotor, RotorKind};
