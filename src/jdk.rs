use crate::config::Config;
use crate::utils::platform_executable;
use color_eyre::eyre::{bail, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looks for `bin/<tool>` in `home`, then in its parent. `JAVA_HOME` often
/// points at the `jre` directory inside a JDK.
fn tool_in_home(home: &Path, tool: &str) -> Option<PathBuf> {
    let exe = platform_executable(tool);
    [Some(home), home.parent()]
        .into_iter()
        .flatten()
        .map(|dir| dir.join("bin").join(&exe))
        .find(|path| path.is_file())
}

fn search_homes<I>(homes: I, tool: &str) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    homes.into_iter().find_map(|home| {
        debug!("looking for {} in {}", tool, home.display());
        tool_in_home(&home, tool)
    })
}

/// Resolves the executable for a JDK tool such as `javap`.
///
/// An explicit path wins. Otherwise the configured `jdk_path`, `JAVA_HOME`
/// and `JDK_HOME` are searched in that order, falling back to `PATH`.
pub fn find_tool(tool: &str, explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!(
                "cannot find {} at {}, check '{}_path'",
                tool,
                path.display(),
                tool
            );
        }
        return Ok(path.to_path_buf());
    }

    let homes = config
        .jdk_path
        .iter()
        .cloned()
        .chain(
            ["JAVA_HOME", "JDK_HOME"]
                .into_iter()
                .filter_map(env::var_os)
                .map(PathBuf::from),
        );
    if let Some(path) = search_homes(homes, tool) {
        return Ok(path);
    }

    match which::which(tool) {
        Ok(path) => Ok(path),
        Err(_) => bail!(
            "cannot find {} path, set '{}_path', 'jdk_path' in the user config, or JDK_HOME",
            tool,
            tool
        ),
    }
}
