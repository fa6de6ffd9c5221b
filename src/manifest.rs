use crate::config::load_toml;
use crate::header::PatternConfig;
use color_eyre::eyre::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST: &str = "./JniHeaders.toml";

/// Per project settings, read from `JniHeaders.toml`. Every value can also
/// be given on the command line, which takes precedence.
#[derive(Deserialize, Debug, Default)]
pub struct Manifest {
    #[serde(default)]
    pub project: Project,
    #[serde(default)]
    pub javap: JavapSection,
    #[serde(default)]
    pub javah: JavahSection,
}

#[derive(Deserialize, Debug, Default)]
pub struct Project {
    /// Java sources, used to skip runs when the output is newer than the class source
    pub source_dir: Option<PathBuf>,
    /// Compiled classes, the tools run from here
    pub classes_dir: Option<PathBuf>,
    #[serde(default)]
    pub classpath: Vec<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
pub struct JavapSection {
    pub class: Option<String>,
    pub output: Option<PathBuf>,
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub patterns: PatternConfig,
}

#[derive(Deserialize, Debug, Default)]
pub struct JavahSection {
    pub class: Option<String>,
    pub output: Option<PathBuf>,
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Manifest> {
        load_toml(path)
    }

    /// Loads `path` when given, otherwise `JniHeaders.toml` in the working
    /// directory if there is one.
    pub fn locate(path: Option<&Path>) -> Result<Manifest> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_MANIFEST);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Manifest::default())
                }
            }
        }
    }
}
