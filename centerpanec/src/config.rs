use std::path::Path;
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use lazy_static::lazy_static;
use serde::Deserialize;
use serde::Serialize;

use centerpane_layouts::DefaultLayout;
use centerpane_layouts::Layout;

lazy_static! {
    pub static ref HOME_DIR: Option<PathBuf> = std::env::var("CENTERPANE_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|config| config.join("centerpane")));
}

const CONFIG_FILES: [&str; 3] = ["centerpane.json", "centerpane.yaml", "centerpane.yml"];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// The `centerpane.json` static configuration file reference for `v0.1.0`
pub struct StaticConfig {
    /// Layout used when none is given on the command line (default: CenteredPrimaryColumns)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<DefaultLayout>,
    /// Also write logs to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl StaticConfig {
    /// Read a config file, choosing the format from its extension.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read configuration file {}", path.display()))?;

        Self::parse(path, &content)
            .wrap_err_with(|| format!("could not parse configuration file {}", path.display()))
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Self = match path.extension().and_then(|extension| extension.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(content)?,
            _ => serde_json::from_str(content)?,
        };

        Ok(value)
    }

    /// Load `explicit` if given, otherwise the first config file found in [`HOME_DIR`].
    ///
    /// Only an explicitly requested file has to exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        let Some(home) = HOME_DIR.as_ref() else {
            return Ok(Self::default());
        };

        match CONFIG_FILES
            .iter()
            .map(|name| home.join(name))
            .find(|path| path.is_file())
        {
            Some(path) => Self::read(&path),
            None => Ok(Self::default()),
        }
    }

    /// The layout to drive, preferring `flag` over the configured one.
    #[must_use]
    pub fn layout(&self, flag: Option<DefaultLayout>) -> Layout {
        Layout::from(flag.or(self.layout).unwrap_or_default())
    }
}
