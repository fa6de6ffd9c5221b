use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::info;

pub fn platform_executable(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.exe", name)
    } else {
        name.to_owned()
    }
}

/// `<source_dir>/com/example/Foo.java` for `com.example.Foo`. Nested classes
/// map to the file of their outermost class.
pub fn source_file(source_dir: &Path, class: &str) -> PathBuf {
    let outer = class.split('$').next().unwrap_or(class);
    source_dir.join(format!("{}.java", outer.replace('.', "/")))
}

fn modified(path: &Path) -> Option<SystemTime> {
    let meta = fs::metadata(path).ok()?;
    if !meta.is_file() {
        return None;
    }
    meta.modified().ok()
}

/// True when both files exist and `output` is at least as new as `source`.
pub fn is_up_to_date(source: &Path, output: &Path) -> bool {
    match (modified(source), modified(output)) {
        (Some(src), Some(out)) => src <= out,
        _ => false,
    }
}

/// Bumps the mtime of `path` to now if it was last written before `since`.
/// Missing files are left alone.
pub fn touch_if_older(path: &Path, since: SystemTime) -> io::Result<()> {
    match modified(path) {
        Some(time) if time < since => {
            File::options()
                .write(true)
                .open(path)?
                .set_modified(SystemTime::now())
        }
        _ => Ok(()),
    }
}

/// Logs and returns true when the class source has not changed since
/// `output` was last written.
pub fn is_fresh(source_dir: Option<&Path>, class: &str, output: &Path) -> bool {
    let source_dir = match source_dir {
        Some(dir) => dir,
        None => return false,
    };
    let source = source_file(source_dir, class);
    let fresh = is_up_to_date(&source, output);
    if fresh {
        info!(
            "Source file: [{}] is not modified, skipping execution",
            source.display()
        );
    }
    fresh
}
