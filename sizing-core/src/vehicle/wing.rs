use super::*;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
/// Lifting surface of a vehicle
pub struct Wing {
    /// Identifier, matching this wing's key in [Vehicle::wings](super::Vehicle::wings)
    #[serde(default)]
    pub tag: String,
    /// Motor positions along the half-span as signed fractions of span.  `None` means the
    /// wing carries no motors, which is distinct from `Some(vec![])`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motor_spanwise_locations: Option<Vec<f64>>,
    pub spans: WingSpans,
    #[serde(default)]
    #[serde(skip_serializing_if = "IsDefault::is_default")]
    pub areas: WingAreas,
    /// Whether the wing is mirrored about the vehicle centerline
    #[serde(default = "utils::return_true")]
    pub symmetric: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WingSpans {
    /// Tip-to-tip span projected onto the horizontal plane
    pub projected: si::Length,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct WingAreas {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<si::Area>,
}

impl Wing {
    pub fn new<S: Into<String>>(tag: S, projected_span: si::Length) -> Self {
        Self {
            tag: tag.into(),
            motor_spanwise_locations: None,
            spans: WingSpans {
                projected: projected_span,
            },
            areas: Default::default(),
            symmetric: true,
        }
    }

    /// Returns `self` with motors at `locations`
    pub fn with_motor_spanwise_locations(mut self, locations: Vec<f64>) -> Self {
        self.motor_spanwise_locations = Some(locations);
        self
    }

    /// Number of motors on each half-wing, or `None` if the wing carries no motors
    pub fn n_motors(&self) -> Option<usize> {
        self.motor_spanwise_locations.as_ref().map(Vec::len)
    }
}

impl Init for Wing {
    fn init(&mut self) -> anyhow::Result<()> {
        utils::check_length(self.spans.projected, "spans.projected")?;
        if let Some(locations) = &self.motor_spanwise_locations {
            for (idx, loc) in locations.iter().enumerate() {
                ensure!(
                    loc.is_finite() && (-1.0..=1.0).contains(loc),
                    "`motor_spanwise_locations[{idx}]` ({loc}) must be within [-1, 1]"
                );
            }
        }
        if let Some(area) = self.areas.reference {
            ensure!(
                area.value.is_finite() && area >= si::Area::ZERO,
                "`areas.reference` ({} m^2) must be finite and non-negative",
                area.get::<si::square_meter>()
            );
        }
        Ok(())
    }
}
impl SerdeAPI for Wing {}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_wing() -> Wing {
        Wing::new("main_wing", uc::M * 10.0).with_motor_spanwise_locations(vec![0.3, -0.6])
    }

    #[test]
    fn test_init_accepts_mock() {
        assert!(mock_wing().init().is_ok());
    }

    #[test]
    fn test_init_rejects_location_outside_span() {
        let mut wing = mock_wing().with_motor_spanwise_locations(vec![0.3, 1.2]);
        let err = wing.init().unwrap_err();
        assert!(err.to_string().contains("motor_spanwise_locations[1]"));
    }

    #[test]
    fn test_init_rejects_negative_span() {
        let mut wing = Wing::new("main_wing", uc::M * -1.0);
        assert!(wing.init().is_err());
    }

    #[test]
    fn test_n_motors() {
        assert_eq!(mock_wing().n_motors(), Some(2));
        assert_eq!(Wing::new("tail", uc::M * 2.0).n_motors(), None);
        assert_eq!(
            Wing::new("tail", uc::M * 2.0)
                .with_motor_spanwise_locations(vec![])
                .n_motors(),
            Some(0)
        );
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_absent_and_empty_locations_stay_distinct() {
        let absent = Wing::from_yaml("spans: {projected: 4.0}", false).unwrap();
        assert_eq!(absent.motor_spanwise_locations, None);
        assert!(absent.symmetric);
        let empty = Wing::from_yaml(
            "spans: {projected: 4.0}\nmotor_spanwise_locations: []",
            false,
        )
        .unwrap();
        assert_eq!(empty.motor_spanwise_locations, Some(vec![]));
        assert!(!empty.to_yaml().unwrap().contains("areas"));
    }
}
