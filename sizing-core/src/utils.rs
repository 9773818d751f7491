use crate::imports::*;

/// returns true for use with serde default
pub fn return_true() -> bool {
    true
}

/// Returns true if `val1` and `val2` are within a relative/absolute `epsilon` of each other
pub fn almost_eq(val1: f64, val2: f64, epsilon: Option<f64>) -> bool {
    let epsilon = epsilon.unwrap_or(1e-8);
    ((val2 - val1) / (val1 + val2)).abs() < epsilon || (val2 - val1).abs() < epsilon
}

/// [almost_eq] for `uom` quantities, compared in SI base units
pub fn almost_eq_uom<D, U>(
    val1: &uom::si::Quantity<D, U, f64>,
    val2: &uom::si::Quantity<D, U, f64>,
    epsilon: Option<f64>,
) -> bool
where
    D: uom::si::Dimension + ?Sized,
    U: uom::si::Units<f64> + ?Sized,
{
    almost_eq(val1.value, val2.value, epsilon)
}

/// Ensures `length` is a finite, non-negative number
pub(crate) fn check_length(length: si::Length, field_name: &str) -> anyhow::Result<()> {
    ensure!(
        length.value.is_finite() && length >= si::Length::ZERO,
        "`{field_name}` ({} m) must be finite and non-negative",
        length.get::<si::meter>()
    );
    Ok(())
}
