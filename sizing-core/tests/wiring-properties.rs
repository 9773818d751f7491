//! Property-based tests for the wiring mass estimate using proptest.

use proptest::prelude::*;
use sizing_core::prelude::*;
use sizing_core::vehicle::FUSELAGE_TAG;
use sizing_core::{si, uc};

fn vehicle(msl: Option<Vec<f64>>, f_length: f64, f_height: f64, span: f64) -> (Wing, Vehicle) {
    let mut wing = Wing::new("main_wing", uc::M * span);
    wing.motor_spanwise_locations = msl;
    let mut veh = Vehicle::new("prop");
    veh.append_wing(wing.clone()).unwrap();
    veh.append_fuselage(Fuselage::new(FUSELAGE_TAG, uc::M * f_length, uc::M * f_height))
        .unwrap();
    (wing, veh)
}

proptest! {
    /// Wings without motor locations carry no wiring, whatever the power.
    #[test]
    fn no_motors_means_no_mass(
        power in 0.0f64..1e7,
        f_length in 0.0f64..30.0,
        f_height in 0.0f64..5.0,
        span in 0.0f64..50.0,
    ) {
        let (wing, veh) = vehicle(None, f_length, f_height, span);
        prop_assert_eq!(wiring_mass(&wing, &veh, uc::W * power).unwrap(), si::Mass::ZERO);
    }

    /// More cable power always means heavier cables when there is any cable.
    #[test]
    fn mass_increases_with_power(
        msl in prop::collection::vec(-1.0f64..1.0, 0..8),
        f_height in 0.1f64..5.0,
        power in 0.0f64..1e6,
        extra in 1.0f64..1e6,
    ) {
        let (wing, veh) = vehicle(Some(msl), 8.0, f_height, 10.0);
        let low = wiring_mass_breakdown(&wing, &veh, uc::W * power).unwrap().unwrap();
        let high = wiring_mass_breakdown(&wing, &veh, uc::W * (power + extra)).unwrap().unwrap();
        prop_assert!(low.cable_length > si::Length::ZERO);
        prop_assert!(high.cables > low.cables);
        prop_assert!(high.total() > low.total());
        prop_assert_eq!(high.wires, low.wires);
    }

    /// Raising the fuselage by `delta` lengthens the cable by `n_motors * delta`.
    #[test]
    fn cable_length_tracks_fuselage_height(
        msl in prop::collection::vec(-1.0f64..1.0, 0..8),
        f_height in 0.0f64..5.0,
        delta in 0.0f64..5.0,
    ) {
        let (wing, veh) = vehicle(Some(msl.clone()), 8.0, f_height, 10.0);
        let (_, veh_taller) = vehicle(Some(msl), 8.0, f_height + delta, 10.0);
        let base = wiring_mass_breakdown(&wing, &veh, uc::KW).unwrap().unwrap();
        let taller = wiring_mass_breakdown(&wing, &veh_taller, uc::KW).unwrap().unwrap();
        let growth = (taller.cable_length - base.cable_length).get::<si::meter>();
        prop_assert!((growth - base.n_motors as f64 * delta).abs() < 1e-9);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn estimate_is_repeatable(
        msl in prop::collection::vec(-1.0f64..1.0, 0..8),
        power in 0.0f64..1e6,
    ) {
        let (wing, veh) = vehicle(Some(msl), 8.0, 1.2, 10.0);
        let first = wiring_mass(&wing, &veh, uc::W * power).unwrap();
        let second = wiring_mass(&wing, &veh, uc::W * power).unwrap();
        prop_assert_eq!(first.value.to_bits(), second.value.to_bits());
    }
}
