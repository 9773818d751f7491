use sizing_core::prelude::*;
use sizing_core::utils::almost_eq;
use sizing_core::{si, uc};

const REFERENCE_VEHICLE: &str = include_str!("../resources/vehicles/tilt_wing.yaml");

#[test]
fn test_from_resource() {
    let vehicle = Vehicle::from_resource("tilt_wing.yaml", false).unwrap();
    assert_eq!(vehicle, Vehicle::from_yaml(REFERENCE_VEHICLE, false).unwrap());
    assert_eq!(vehicle.wings.len(), 3);
    assert_eq!(vehicle.rotors.len(), 2);
    assert!(vehicle
        .rotors
        .iter()
        .all(|rotor| rotor.kind == RotorKind::Propeller));
    assert!(Vehicle::from_resource("missing.yaml", false).is_err());
}

#[test]
fn test_reference_vehicle_wiring_mass() {
    let vehicle = Vehicle::from_yaml(REFERENCE_VEHICLE, false).unwrap();
    let power = uc::KW * 10.0;

    let main_wing = vehicle.wing("main_wing").unwrap();
    let wiring = wiring_mass_breakdown(main_wing, &vehicle, power)
        .unwrap()
        .unwrap();
    assert_eq!(wiring.n_motors, 4);
    assert!(almost_eq(wiring.cable_length.get::<si::meter>(), 7.95, None));
    assert!(almost_eq(wiring.wire_length.get::<si::meter>(), 91.15, None));
    assert!(almost_eq(wiring.total().get::<si::kilogram>(), 5.575_26, None));

    let stabilizer = vehicle.wing("vertical_stabilizer").unwrap();
    assert_eq!(
        wiring_mass(stabilizer, &vehicle, power).unwrap(),
        si::Mass::ZERO
    );

    assert!(almost_eq(
        vehicle.wiring_mass(power).unwrap().get::<si::kilogram>(),
        11.150_52,
        None
    ));
}

#[test]
fn test_str_round_trips() {
    let vehicle = Vehicle::from_yaml(REFERENCE_VEHICLE, false).unwrap();
    for format in ["yaml", "json"] {
        let serialized = vehicle.to_str(format).unwrap();
        assert_eq!(Vehicle::from_str(&serialized, format, false).unwrap(), vehicle);
    }
    assert!(vehicle.to_str("csv").is_err());
}

#[test]
fn test_file_round_trip() {
    let vehicle = Vehicle::from_yaml(REFERENCE_VEHICLE, false).unwrap();
    let dir = tempfile::tempdir().unwrap();
    for file_name in ["tilt_wing.yaml", "tilt_wing.json"] {
        let path = dir.path().join(file_name);
        vehicle.to_file(&path).unwrap();
        assert_eq!(Vehicle::from_file(&path, false).unwrap(), vehicle);
    }
    let err = Vehicle::from_file(dir.path().join("absent.yaml"), false).unwrap_err();
    assert!(err.to_string().contains("File not found"));
}

#[test]
fn test_init_runs_on_load() {
    let bad = REFERENCE_VEHICLE.replace("hub_radius: 0.12", "hub_radius: 1.2");
    let err = Vehicle::from_yaml(&bad, false).unwrap_err();
    assert!(format!("{err:#}").contains("must not exceed `tip_radius`"));
    // skipping init leaves validation to the caller
    assert!(Vehicle::from_yaml(&bad, true).is_ok());
}

#[test]
fn test_json_without_tags() {
    let vehicle = Vehicle::from_json(
        r#"{
            "wings": {"main_wing": {"motor_spanwise_locations": [0.3, 0.6], "spans": {"projected": 10.0}}},
            "fuselages": {"fuselage": {"lengths": {"total": 8.0}, "heights": {"maximum": 1.2}}}
        }"#,
        false,
    )
    .unwrap();
    let wing = vehicle.wing("main_wing").unwrap();
    assert_eq!(wing.tag, "main_wing");
    assert!(almost_eq(
        wiring_mass(wing, &vehicle, uc::W * 5000.0)
            .unwrap()
            .get::<si::kilogram>(),
        6.927_066,
        None
    ));
}
