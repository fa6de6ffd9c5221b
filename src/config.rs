use color_eyre::eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub(crate) fn load_toml<P, T>(path: P) -> Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let str = fs::read_to_string(&path)
        .wrap_err_with(|| format!("error reading config at {}", path.as_ref().display()))?;
    let file = toml::from_str(&str)
        .wrap_err_with(|| format!("error parsing config at {}", path.as_ref().display()))?;
    Ok(file)
}

pub fn config_dir() -> Option<PathBuf> {
    let mut dir = dirs::config_dir()?;
    dir.push("jniheaders");
    Some(dir)
}

/// User wide settings, read from `Config.toml` in the user config directory.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// JDK install searched for `javap` and `javah` before `JAVA_HOME`
    pub jdk_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load_from(&dir.join("Config.toml")),
            None => {
                debug!("no user config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// A missing file is not an error, the defaults are used instead.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        load_toml(path)
    }
}
