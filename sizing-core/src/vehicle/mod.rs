//! Module containing the vehicle description read by the sizing methods

pub(crate) use crate::imports::*;

pub mod fuselage;
pub mod vehicle_model;
pub mod wing;

pub use fuselage::{Fuselage, FuselageHeights, FuselageLengths};
pub use vehicle_model::{Vehicle, FUSELAGE_TAG};
pub use wing::{Wing, WingAreas, WingSpans};
