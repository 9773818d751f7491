//! Import uom si system and add unit constants
//! Zero values should be created using standard uom syntax ($Quantity::ZERO) after adding "use crate::imports::*"
//! Non-zero values should be created using standard uom syntax ($Quantity::new::<$unit>($value)) or multiplication syntax ($value * $UNIT_CONSTANT)

use uom::si;

pub use si::area::square_meter;
pub use si::f64::{Area, Length, Mass, Power, Ratio};
pub use si::length::{foot, meter};
pub use si::mass::{kilogram, pound};
pub use si::power::{kilowatt, watt};
pub use si::ratio::ratio;
