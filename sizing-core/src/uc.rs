//! Module providing unit constants (e.g. 1 kg) for an assortment of
//! dimensional quantities.

use super::si::*;

use uom::lib::marker::PhantomData;
use uom::si::Quantity;

/// Invoking `unit_const!(R, Ratio, 1.0);` yields:
/// ```ignore
/// pub const R: Ratio = Quantity {
///    dimension: PhantomData,
///    units: PhantomData,
///    value: 1.0,
/// }
/// ```
macro_rules! unit_const {
    ($(#[$docs:meta])* $name:ident, $T:ty, $value:expr) => {
        $(#[$docs])*
        /// defines uom unit const
        pub const $name: $T = Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value: $value,
        };
    };
}

unit_const!(R, Ratio, 1.0);

unit_const!(KG, Mass, 1.0);
unit_const!(LB, Mass, 4.535_924_E-1);

unit_const!(M, Length, 1.0);
unit_const!(FT, Length, 3.048_E-1);
unit_const!(M2, Area, 1.0);

unit_const!(W, Power, 1.0);
unit_const!(KW, Power, 1.0E3);
