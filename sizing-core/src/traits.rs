//! Traits shared by everything that can be read from or written to a vehicle file

use crate::imports::*;

pub trait Init {
    /// Checks and completes a freshly deserialized object, e.g. filling a wing's empty tag from
    /// its key in [Vehicle::wings](crate::vehicle::Vehicle::wings).  Containers call this on
    /// everything they hold.
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Format of a vehicle file, taken from its extension (`tilt_wing.yaml` -> `yaml`)
fn file_format(filepath: &Path) -> anyhow::Result<&str> {
    filepath
        .extension()
        .and_then(OsStr::to_str)
        .with_context(|| format!("No usable file extension in {filepath:?}"))
}

/// Normalizes `.YAML`, `yml`, etc. to the names matched by [SerdeAPI]
fn normalize_format(format: &str) -> String {
    match format.trim_start_matches('.').to_lowercase().as_str() {
        "yml" => "yaml".into(),
        other => other.into(),
    }
}

/// Reading and writing of vehicles and their parts.  Every read runs [Init::init] unless
/// `skip_init` is set, so a loaded [Vehicle](crate::vehicle::Vehicle) has consistent tags and
/// physically sensible dimensions.
pub trait SerdeAPI: Serialize + for<'a> Deserialize<'a> + Init {
    /// Formats usable for files, readers and writers
    const ACCEPTED_BYTE_FORMATS: &'static [&'static str] = &[
        #[cfg(feature = "yaml")]
        "yaml",
        #[cfg(feature = "json")]
        "json",
        #[cfg(feature = "toml")]
        "toml",
    ];
    /// Formats usable for in-memory strings
    const ACCEPTED_STR_FORMATS: &'static [&'static str] = Self::ACCEPTED_BYTE_FORMATS;
    /// Subdirectory of `resources/` holding files of this type
    #[cfg(feature = "resources")]
    const RESOURCE_PREFIX: &'static str = "";

    /// Loads a file packaged with `sizing-core`, e.g. `Vehicle::from_resource("tilt_wing.yaml", false)`.
    /// `filepath` is relative to [Self::RESOURCE_PREFIX]; see
    /// [list_resources](crate::resources::list_resources) for what is available.
    #[cfg(feature = "resources")]
    fn from_resource<P: AsRef<Path>>(filepath: P, skip_init: bool) -> anyhow::Result<Self> {
        let filepath = Path::new(Self::RESOURCE_PREFIX).join(filepath);
        let format = file_format(&filepath)?;
        let file = crate::resources::RESOURCES_DIR
            .get_file(&filepath)
            .with_context(|| format!("File not found in resources: {filepath:?}"))?;
        log::debug!("loading resource {filepath:?}");
        Self::from_reader(file.contents(), format, skip_init)
    }

    /// Writes `self` to `filepath`, truncating any existing file.  The extension picks the
    /// format.
    fn to_file<P: AsRef<Path>>(&self, filepath: P) -> anyhow::Result<()> {
        let filepath = filepath.as_ref();
        let format = file_format(filepath)?;
        let file = File::create(filepath)
            .with_context(|| format!("Could not create file: {filepath:?}"))?;
        self.to_writer(file, format)
    }

    /// Reads an object from `filepath`.  The extension picks the format.
    fn from_file<P: AsRef<Path>>(filepath: P, skip_init: bool) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let format = file_format(filepath)?;
        let file = File::open(filepath).with_context(|| {
            if !filepath.exists() {
                format!("File not found: {filepath:?}")
            } else {
                format!("Could not open file: {filepath:?}")
            }
        })?;
        log::debug!("loading {filepath:?}");
        Self::from_reader(file, format, skip_init)
    }

    /// Writes `self` into `wtr` as `format`, one of [Self::ACCEPTED_BYTE_FORMATS]
    #[allow(unused_mut)]
    fn to_writer<W: std::io::Write>(&self, mut wtr: W, format: &str) -> anyhow::Result<()> {
        match normalize_format(format).as_str() {
            #[cfg(feature = "yaml")]
            "yaml" => serde_yaml::to_writer(wtr, self)?,
            #[cfg(feature = "json")]
            "json" => serde_json::to_writer(wtr, self)?,
            #[cfg(feature = "toml")]
            "toml" => wtr.write_all(self.to_toml()?.as_bytes())?,
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_BYTE_FORMATS
            ),
        }
        Ok(())
    }

    /// Reads an object of `format`, one of [Self::ACCEPTED_BYTE_FORMATS], from `rdr`
    #[allow(unused_mut)]
    fn from_reader<R: std::io::Read>(
        mut rdr: R,
        format: &str,
        skip_init: bool,
    ) -> anyhow::Result<Self> {
        let mut obj: Self = match normalize_format(format).as_str() {
            #[cfg(feature = "yaml")]
            "yaml" => serde_yaml::from_reader(rdr)?,
            #[cfg(feature = "json")]
            "json" => serde_json::from_reader(rdr)?,
            #[cfg(feature = "toml")]
            "toml" => {
                let mut buf = String::new();
                rdr.read_to_string(&mut buf)?;
                toml::from_str(&buf)?
            }
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_BYTE_FORMATS
            ),
        };
        if !skip_init {
            obj.init()?;
        }
        Ok(obj)
    }

    /// Serializes `self` into a string of `format`, one of [Self::ACCEPTED_STR_FORMATS]
    fn to_str(&self, format: &str) -> anyhow::Result<String> {
        match normalize_format(format).as_str() {
            #[cfg(feature = "yaml")]
            "yaml" => self.to_yaml(),
            #[cfg(feature = "json")]
            "json" => self.to_json(),
            #[cfg(feature = "toml")]
            "toml" => self.to_toml(),
            _ => bail!(
                "Unsupported format {format:?}, must be one of {:?}",
                Self::ACCEPTED_STR_FORMATS
            ),
        }
    }

    /// Parses `contents` as `format`, one of [Self::ACCEPTED_STR_FORMATS]
    fn from_str<S: AsRef<str>>(contents: S, format: &str, skip_init: bool) -> anyhow::Result<Self> {
        Self::from_reader(contents.as_ref().as_bytes(), format, skip_init)
    }

    #[cfg(feature = "json")]
    fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self)?)
    }

    /// Parses a JSON vehicle description, as passed to `sizing-cli --veh`
    #[cfg(feature = "json")]
    fn from_json<S: AsRef<str>>(json_str: S, skip_init: bool) -> anyhow::Result<Self> {
        Self::from_reader(json_str.as_ref().as_bytes(), "json", skip_init)
    }

    #[cfg(feature = "toml")]
    fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(&self)?)
    }

    #[cfg(feature = "toml")]
    fn from_toml<S: AsRef<str>>(toml_str: S, skip_init: bool) -> anyhow::Result<Self> {
        Self::from_reader(toml_str.as_ref().as_bytes(), "toml", skip_init)
    }

    #[cfg(feature = "yaml")]
    fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(&self)?)
    }

    /// Parses a YAML vehicle description, the format of the packaged resources
    #[cfg(feature = "yaml")]
    fn from_yaml<S: AsRef<str>>(yaml_str: S, skip_init: bool) -> anyhow::Result<Self> {
        Self::from_reader(yaml_str.as_ref().as_bytes(), "yaml", skip_init)
    }
}

impl<T: SerdeAPI> SerdeAPI for Vec<T> {}
impl<T: Init> Init for Vec<T> {
    fn init(&mut self) -> anyhow::Result<()> {
        for val in self {
            val.init()?
        }
        Ok(())
    }
}

/// Provides method for checking if struct is default
pub trait IsDefault: std::default::Default + PartialEq {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl<T: Default + PartialEq> IsDefault for T {}
