use crate::config::Config;
use crate::jdk;
use crate::utils;
use color_eyre::eyre::{bail, Result, WrapErr};
use std::env;
use std::path::{self, Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;
use tracing::info;

pub struct JavahCommand {
    javah_path: PathBuf,
    verbose: bool,
    classpath: Vec<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl JavahCommand {
    pub fn new(javah_path: PathBuf) -> Self {
        Self {
            javah_path,
            verbose: false,
            classpath: Vec::new(),
            working_dir: None,
        }
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn add_classpath(&mut self, path: PathBuf) {
        self.classpath.push(path);
    }

    pub fn set_working_dir(&mut self, dir: PathBuf) {
        self.working_dir = Some(dir);
    }

    /// Runs `javah` for `class`, writing the JNI header to `output`. The
    /// tool's own output goes straight to the console.
    pub fn run(&self, class: &str, output: &Path) -> Result<()> {
        let mut command = Command::new(path::absolute(&self.javah_path)?);
        if self.verbose {
            command.arg("-verbose");
        }
        command.arg("-o").arg(path::absolute(output)?);
        if !self.classpath.is_empty() {
            let entries = self
                .classpath
                .iter()
                .map(path::absolute)
                .collect::<Result<Vec<_>, _>>()?;
            command
                .arg("-classpath")
                .arg(env::join_paths(entries).wrap_err("invalid classpath entry")?);
        }
        command.arg(class);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        info!("{:?}", command);

        let status = command
            .status()
            .wrap_err_with(|| format!("failed to execute {}", self.javah_path.display()))?;
        if !status.success() {
            bail!("javah failed ({})", status);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct JavahTask {
    pub class: String,
    pub output: PathBuf,
    pub javah_path: Option<PathBuf>,
    pub classpath: Vec<PathBuf>,
    pub classes_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub verbose: bool,
    pub force: bool,
}

pub fn generate(task: &JavahTask, config: &Config) -> Result<()> {
    if !task.force && utils::is_fresh(task.source_dir.as_deref(), &task.class, &task.output) {
        return Ok(());
    }
    let started = SystemTime::now();

    let javah_path = jdk::find_tool("javah", task.javah_path.as_deref(), config)?;
    let mut command = JavahCommand::new(javah_path);
    command.set_verbose(task.verbose);
    for entry in &task.classpath {
        command.add_classpath(entry.clone());
    }
    if let Some(dir) = &task.classes_dir {
        command.set_working_dir(dir.clone());
    }
    command.run(&task.class, &task.output)?;

    // javah leaves an unchanged header alone, which would defeat the
    // freshness check on the next run
    utils::touch_if_older(&task.output, started)
        .wrap_err_with(|| format!("failed to touch {}", task.output.display()))?;

    Ok(())
}
