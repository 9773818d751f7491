//! Crate containing models for conceptual sizing of electric aircraft, centered on empirical
//! component mass estimates such as the wiring harness of a wing.
//! # Feature Flags
//! - `yaml`, `json`, `toml`: enable the corresponding formats in [traits::SerdeAPI]
//! - `resources`: packages the vehicle files under `resources/` with the crate

#[macro_use]
pub mod macros;

pub mod components;
pub mod imports;
pub mod prelude;
pub mod resources;
pub mod si;
pub mod traits;
pub mod uc;
pub mod utils;
pub mod vehicle;
pub mod weights;

/// List enabled features
pub fn enabled_features() -> Vec<String> {
    vec![
        #[cfg(feature = "default")]
        "default".into(),
        #[cfg(feature = "resources")]
        "resources".into(),
        #[cfg(feature = "json")]
        "json".into(),
        #[cfg(feature = "toml")]
        "toml".into(),
        #[cfg(feature = "yaml")]
        "yaml".into(),
    ]
}
