//! Vehicle files packaged with the crate
#![cfg(feature = "resources")]

use include_dir::{include_dir, Dir};
pub const RESOURCES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Sorted names of the files directly under `subdir` of [RESOURCES_DIR], or under the top
/// level if `subdir` does not exist (pass `""` for the top level)
pub fn list_resources(subdir: &str) -> Vec<String> {
    let dir = RESOURCES_DIR.get_dir(subdir).unwrap_or(&RESOURCES_DIR);
    let mut file_names: Vec<String> = dir
        .files()
        .filter_map(|entry| entry.path().file_name()?.to_str().map(String::from))
        .collect();
    file_names.sort();
    file_names
}

/// Names accepted by `Vehicle::from_resource`
pub fn list_vehicles() -> Vec<String> {
    list_resources(<crate::vehicle::Vehicle as crate::traits::SerdeAPI>::RESOURCE_PREFIX)
}
