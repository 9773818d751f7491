use anyhow::Context;
use clap::{ArgGroup, Parser};
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::collections::BTreeMap;

extern crate sizing_core;
use sizing_core::prelude::*;
use sizing_core::{si, uc};

/// Wiring mass estimates for an electric aircraft.
/// After running `cargo build --release`, run with
/// ```bash
/// ./target/release/sizing-cli --veh-file sizing-core/resources/vehicles/tilt_wing.yaml --cable-power 10000
/// ```
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(group(
    ArgGroup::new("vehicle")
    .required(true)
    .args(&["veh", "veh-file", "veh-resource"])
))]
struct SizingApi {
    /// Vehicle as json string
    #[clap(value_parser, long)]
    veh: Option<String>,
    #[clap(long, value_parser)]
    /// Path to vehicle file (yaml, json, or toml)
    veh_file: Option<String>,
    #[clap(long, value_parser)]
    /// Name of a vehicle packaged with sizing-core, e.g. `tilt_wing.yaml`
    veh_resource: Option<String>,
    #[clap(long, value_parser)]
    /// Maximum DC power draw carried by each wing's cables (W)
    cable_power: f64,
    #[clap(long, value_parser)]
    /// Tag of the wing to estimate; every wing if omitted
    wing: Option<String>,
    #[clap(long, value_parser, default_value = "text")]
    /// How to return results: `text` or `json`
    res_fmt: String,
    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase log verbosity
    verbose: u8,
}

#[derive(Debug, Deserialize, Serialize)]
struct WiringResults {
    wings: BTreeMap<String, f64>,
    total_kg: f64,
}

impl WiringResults {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self)?)
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let sizing_api = SizingApi::parse();
    init_logging(sizing_api.verbose)?;
    log::debug!(
        "sizing-core features: {:?}",
        sizing_core::enabled_features()
    );

    let veh = if let Some(veh_string) = sizing_api.veh {
        Vehicle::from_json(veh_string, false)?
    } else if let Some(veh_file_path) = sizing_api.veh_file {
        Vehicle::from_file(veh_file_path, false)?
    } else if let Some(veh_resource) = sizing_api.veh_resource {
        Vehicle::from_resource(&veh_resource, false).with_context(|| {
            format!(
                "available vehicles: {:?}",
                sizing_core::resources::list_vehicles()
            )
        })?
    } else {
        anyhow::bail!("one of `--veh`, `--veh-file`, or `--veh-resource` must be provided")
    };
    log::info!(
        "vehicle `{}` with {} wing(s) and {} rotor(s)",
        veh.tag,
        veh.wings.len(),
        veh.rotors.len()
    );

    let cable_power = uc::W * sizing_api.cable_power;
    let wings: Vec<&Wing> = match &sizing_api.wing {
        Some(tag) => vec![veh.wing(tag)?],
        None => veh.wings.values().collect(),
    };

    let mut res = WiringResults {
        wings: BTreeMap::new(),
        total_kg: 0.0,
    };
    for wing in wings {
        let mass = wiring_mass(wing, &veh, cable_power)?.get::<si::kilogram>();
        log::debug!("wing `{}`: {mass} kg", wing.tag);
        res.wings.insert(wing.tag.clone(), mass);
        res.total_kg += mass;
    }

    match sizing_api.res_fmt.as_str() {
        "json" => println!("{}", res.to_json()?),
        "text" => {
            for (tag, mass) in &res.wings {
                println!("{tag}: {mass:.6} kg");
            }
            println!("total: {:.6} kg", res.total_kg);
        }
        other => anyhow::bail!("Invalid option `{other}` for `--res-fmt`, must be `text` or `json`"),
    }
    Ok(())
}
