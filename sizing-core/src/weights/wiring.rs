//! Wiring mass of a wing on an electric aircraft: DC power cables running from the fuselage to
//! each motor, plus bundles of sensor and communication wires.
//!
//! Calibrated against the Project Vahana conceptual trade study for electric multicopter,
//! vectored-thrust and stopped-rotor configurations.  The coefficients are empirical and fixed.

use super::*;
use crate::vehicle::{Vehicle, Wing};

/// Length of cable run per unit of summed motor spanwise fraction
const SPANWISE_RUN_FACTOR: f64 = 1.1;
/// Design margin applied to the cable power draw
const POWER_MARGIN: f64 = 1.2;
/// Cable mass per watt carried per meter of cable \[kg/(W m)\]
const CABLE_DENSITY: f64 = 5.7e-6;
/// Sensor/communication wire runs per meter of fuselage length
const FUSELAGE_WIRE_RUNS: f64 = 10.0;
/// Sensor/communication wire runs per meter of wingspan
const SPAN_WIRE_RUNS: f64 = 4.0;
/// Linear density of a single sensor/communication wire \[kg/m\]
const WIRE_DENSITY: f64 = 460e-5;
const WIRES_PER_BUNDLE: f64 = 6.0;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
/// Intermediate quantities of a wiring mass estimate
pub struct WiringMass {
    /// Motors per half-wing, at least 1
    pub n_motors: usize,
    /// Length of DC power cable
    pub cable_length: si::Length,
    /// Length of each sensor/communication wire run
    pub wire_length: si::Length,
    /// Mass of DC power cables
    pub cables: si::Mass,
    /// Mass of sensor/communication wires
    pub wires: si::Mass,
}

impl WiringMass {
    pub fn total(&self) -> si::Mass {
        self.cables + self.wires
    }
}

/// Returns the wiring mass estimate for `wing`, or `None` if `vehicle`'s entry for the wing
/// has no `motor_spanwise_locations`.
///
/// # Arguments
/// - `wing`: wing whose tag is looked up in `vehicle` and whose projected span is used
/// - `vehicle`: supplies the motor locations and the primary fuselage
/// - `cable_power`: maximum DC power draw carried by the cables, not validated
///
/// Fails only if the wing tag or the primary fuselage cannot be found in `vehicle`.
pub fn wiring_mass_breakdown(
    wing: &Wing,
    vehicle: &Vehicle,
    cable_power: si::Power,
) -> anyhow::Result<Option<WiringMass>> {
    let msl = match &vehicle.wing(&wing.tag)?.motor_spanwise_locations {
        Some(msl) => msl,
        None => return Ok(None),
    };
    let fuselage = vehicle.fuselage()?;
    let f_length = fuselage.lengths.total.get::<si::meter>();
    let f_height = fuselage.heights.maximum.get::<si::meter>();
    let wingspan = wing.spans.projected.get::<si::meter>();
    let n_motors = msl.len().max(1);

    // power cables
    let cable_length = (n_motors as f64 * f_height)
        + msl.iter().map(|loc| loc.abs()).sum::<f64>() * SPANWISE_RUN_FACTOR;
    let cable_power = cable_power.get::<si::watt>() * POWER_MARGIN;
    let mass_cables = CABLE_DENSITY * cable_power * cable_length;

    // sensor/communication wires
    let wire_length =
        cable_length + (FUSELAGE_WIRE_RUNS * f_length) + SPAN_WIRE_RUNS * wingspan;
    let mass_wires = 2.0 * WIRE_DENSITY * WIRES_PER_BUNDLE * wire_length;

    Ok(Some(WiringMass {
        n_motors,
        cable_length: uc::M * cable_length,
        wire_length: uc::M * wire_length,
        cables: uc::KG * mass_cables,
        wires: uc::KG * mass_wires,
    }))
}

/// Returns the mass of the wiring needed for `wing`, zero if the wing carries no motors.
/// See [wiring_mass_breakdown].
pub fn wiring_mass(
    wing: &Wing,
    vehicle: &Vehicle,
    cable_power: si::Power,
) -> anyhow::Result<si::Mass> {
    Ok(wiring_mass_breakdown(wing, vehicle, cable_power)?
        .map_or(si::Mass::ZERO, |wiring| wiring.total()))
}
