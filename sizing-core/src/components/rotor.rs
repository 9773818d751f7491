use super::*;

/// Variants of [Rotor], distinguished only by their tag
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotorKind {
    #[default]
    Rotor,
    /// Forward-thrust rotor
    Propeller,
    /// Vertical-lift rotor
    LiftRotor,
    /// Rotor that tilts between lift and forward thrust
    PropRotor,
}

impl RotorKind {
    /// Tag assigned to a rotor of this kind when none is given
    pub fn default_tag(&self) -> &'static str {
        match self {
            Self::Rotor => "rotor",
            Self::Propeller => "propeller",
            Self::LiftRotor => "lift_rotor",
            Self::PropRotor => "prop_rotor",
        }
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_tag())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
/// Rotor geometry.  Carries no behavior of its own; performance is computed elsewhere.
pub struct Rotor {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub kind: RotorKind,
    pub number_of_blades: u8,
    pub tip_radius: si::Length,
    pub hub_radius: si::Length,
    /// Hub position in vehicle body axes \[m\]
    #[serde(default)]
    #[serde(skip_serializing_if = "IsDefault::is_default")]
    pub origin: [f64; 3],
}

impl Rotor {
    pub fn new(
        kind: RotorKind,
        number_of_blades: u8,
        tip_radius: si::Length,
        hub_radius: si::Length,
    ) -> Self {
        Self {
            tag: kind.default_tag().into(),
            kind,
            number_of_blades,
            tip_radius,
            hub_radius,
            origin: Default::default(),
        }
    }

    /// Rotor of kind [RotorKind::Propeller], tagged `"propeller"`
    pub fn propeller(number_of_blades: u8, tip_radius: si::Length, hub_radius: si::Length) -> Self {
        Self::new(RotorKind::Propeller, number_of_blades, tip_radius, hub_radius)
    }
}

impl Init for Rotor {
    fn init(&mut self) -> anyhow::Result<()> {
        if self.tag.is_empty() {
            self.tag = self.kind.default_tag().into();
        }
        utils::check_length(self.tip_radius, "tip_radius").with_context(|| format_dbg!())?;
        utils::check_length(self.hub_radius, "hub_radius").with_context(|| format_dbg!())?;
        ensure!(
            self.hub_radius <= self.tip_radius,
            "`hub_radius` ({} m) must not exceed `tip_radius` ({} m)",
            self.hub_radius.get::<si::meter>(),
            self.tip_radius.get::<si::meter>()
        );
        Ok(())
    }
}
impl SerdeAPI for Rotor {}
