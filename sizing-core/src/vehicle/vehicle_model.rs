use super::*;
use crate::components::Rotor;
use crate::weights::wiring::wiring_mass;

/// Tag of the fuselage that sizing methods treat as the vehicle's primary fuselage
pub const FUSELAGE_TAG: &str = "fuselage";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
/// Struct describing the geometry and components of an aircraft
pub struct Vehicle {
    #[serde(default)]
    pub tag: String,
    /// Wings keyed by tag
    #[serde(default)]
    pub wings: BTreeMap<String, Wing>,
    /// Fuselages keyed by tag; sizing methods use the one tagged [FUSELAGE_TAG]
    #[serde(default)]
    pub fuselages: BTreeMap<String, Fuselage>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rotors: Vec<Rotor>,
}

impl Vehicle {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            wings: Default::default(),
            fuselages: Default::default(),
            rotors: Default::default(),
        }
    }

    /// Adds `wing` keyed by its tag.  Fails if the tag is empty or already taken.
    pub fn append_wing(&mut self, wing: Wing) -> anyhow::Result<()> {
        ensure!(!wing.tag.is_empty(), "wing must have a tag to be appended");
        ensure!(
            !self.wings.contains_key(&wing.tag),
            "vehicle `{}` already has a wing tagged `{}`",
            self.tag,
            wing.tag
        );
        self.wings.insert(wing.tag.clone(), wing);
        Ok(())
    }

    /// Adds `fuselage` keyed by its tag.  Fails if the tag is empty or already taken.
    pub fn append_fuselage(&mut self, fuselage: Fuselage) -> anyhow::Result<()> {
        ensure!(
            !fuselage.tag.is_empty(),
            "fuselage must have a tag to be appended"
        );
        ensure!(
            !self.fuselages.contains_key(&fuselage.tag),
            "vehicle `{}` already has a fuselage tagged `{}`",
            self.tag,
            fuselage.tag
        );
        self.fuselages.insert(fuselage.tag.clone(), fuselage);
        Ok(())
    }

    /// Returns the wing tagged `tag`
    pub fn wing(&self, tag: &str) -> anyhow::Result<&Wing> {
        self.wings.get(tag).with_context(|| {
            format!(
                "vehicle `{}` has no wing tagged `{tag}`; available: {:?}",
                self.tag,
                self.wings.keys().collect::<Vec<_>>()
            )
        })
    }

    /// Returns the primary fuselage, i.e. the one tagged [FUSELAGE_TAG]
    pub fn fuselage(&self) -> anyhow::Result<&Fuselage> {
        self.fuselages.get(FUSELAGE_TAG).with_context(|| {
            format!(
                "vehicle `{}` has no fuselage tagged `{FUSELAGE_TAG}`",
                self.tag
            )
        })
    }

    /// Total wiring mass over all wings, each carrying `cable_power`
    pub fn wiring_mass(&self, cable_power: si::Power) -> anyhow::Result<si::Mass> {
        let mut total = si::Mass::ZERO;
        for wing in self.wings.values() {
            total += wiring_mass(wing, self, cable_power)
                .with_context(|| format!("wing `{}`", wing.tag))?;
        }
        Ok(total)
    }
}

impl Init for Vehicle {
    fn init(&mut self) -> anyhow::Result<()> {
        for (key, wing) in self.wings.iter_mut() {
            check_tag(&mut wing.tag, key, "wing")?;
            wing.init().with_context(|| format!("wing `{key}`"))?;
        }
        for (key, fuselage) in self.fuselages.iter_mut() {
            check_tag(&mut fuselage.tag, key, "fuselage")?;
            fuselage.init().with_context(|| format!("fuselage `{key}`"))?;
        }
        for (idx, rotor) in self.rotors.iter_mut().enumerate() {
            rotor
                .init()
                .with_context(|| format!("rotor {idx} (`{}`)", rotor.tag))?;
        }
        Ok(())
    }
}

impl SerdeAPI for Vehicle {
    #[cfg(feature = "resources")]
    const RESOURCE_PREFIX: &'static str = "vehicles";
}

/// Fills an empty `tag` from its map `key`, or ensures they agree
fn check_tag(tag: &mut String, key: &str, kind: &str) -> anyhow::Result<()> {
    if tag.is_empty() {
        log::warn!("{kind} keyed `{key}` has no tag, using `{key}`");
        *tag = key.to_string();
    }
    ensure!(
        *tag == key,
        "{kind} keyed `{key}` has mismatched tag `{tag}`"
    );
    Ok(())
}
