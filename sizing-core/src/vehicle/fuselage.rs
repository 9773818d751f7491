use super::*;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Fuselage {
    #[serde(default)]
    pub tag: String,
    pub lengths: FuselageLengths,
    pub heights: FuselageHeights,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<si::Length>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FuselageLengths {
    /// Nose-to-tail length
    pub total: si::Length,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FuselageHeights {
    pub maximum: si::Length,
}

impl Fuselage {
    pub fn new<S: Into<String>>(tag: S, total_length: si::Length, max_height: si::Length) -> Self {
        Self {
            tag: tag.into(),
            lengths: FuselageLengths {
                total: total_length,
            },
            heights: FuselageHeights {
                maximum: max_height,
            },
            width: None,
        }
    }
}

impl Init for Fuselage {
    fn init(&mut self) -> anyhow::Result<()> {
        utils::check_length(self.lengths.total, "lengths.total")?;
        utils::check_length(self.heights.maximum, "heights.maximum")?;
        if let Some(width) = self.width {
            utils::check_length(width, "width")?;
        }
        Ok(())
    }
}
impl SerdeAPI for Fuselage {}
