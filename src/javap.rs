use crate::config::Config;
use crate::header::{self, PatternConfig, PatternSet};
use crate::jdk;
use crate::utils;
use color_eyre::eyre::{bail, Result, WrapErr};
use std::env;
use std::path::{self, PathBuf};
use std::process::Command;
use tracing::info;

pub struct JavapCommand {
    javap_path: PathBuf,
    classpath: Vec<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl JavapCommand {
    pub fn new(javap_path: PathBuf) -> Self {
        Self {
            javap_path,
            classpath: Vec::new(),
            working_dir: None,
        }
    }

    pub fn add_classpath(&mut self, path: PathBuf) {
        self.classpath.push(path);
    }

    pub fn set_working_dir(&mut self, dir: PathBuf) {
        self.working_dir = Some(dir);
    }

    /// Runs `javap -s` on `class` and returns stdout followed by stderr.
    pub fn run(&self, class: &str) -> Result<String> {
        let mut command = Command::new(path::absolute(&self.javap_path)?);
        command.arg("-s");
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

        let output = command
            .output()
            .wrap_err_with(|| format!("failed to execute {}", self.javap_path.display()))?;
        let mut report = String::from_utf8_lossy(&output.stdout).into_owned();
        report.push_str(&String::from_utf8_lossy(&output.stderr));
        if !output.status.success() {
            bail!("javap failed ({}), output: [{}]", output.status, report);
        }
        Ok(report)
    }
}

/// Everything needed to turn one class into a callbacks header.
#[derive(Debug, Clone)]
pub struct JavapTask {
    pub class: String,
    pub output: PathBuf,
    pub javap_path: Option<PathBuf>,
    pub classpath: Vec<PathBuf>,
    pub classes_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub patterns: PatternConfig,
    pub force: bool,
}

pub fn generate(task: &JavapTask, config: &Config) -> Result<()> {
    if !task.force && utils::is_fresh(task.source_dir.as_deref(), &task.class, &task.output) {
        return Ok(());
    }
    // bad patterns should fail before javap runs
    let patterns = PatternSet::compile(&task.patterns)?;

    let javap_path = jdk::find_tool("javap", task.javap_path.as_deref(), config)?;
    let mut command = JavapCommand::new(javap_path);
    for entry in &task.classpath {
        command.add_classpath(entry.clone());
    }
    if let Some(dir) = &task.classes_dir {
        command.set_working_dir(dir.clone());
    }
    let report = command.run(&task.class)?;

    let doc = header::parse_report(report.lines(), &task.class, &patterns)
        .wrap_err_with(|| format!("error reading javap output for {}", task.class))?;
    header::write_header(&task.output, &doc.to_string())?;
    info!(
        "wrote {} method(s) to {}",
        doc.records().len(),
        task.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::{Duration, SystemTime};

    #[test]
    fn skipped_task_never_looks_for_javap() {
        let dir = tempfile::tempdir().unwrap();
        let src_dir = dir.path().join("java");
        fs::create_dir_all(&src_dir).unwrap();
        let source = src_dir.join("B.java");
        fs::write(&source, "class B {}").unwrap();
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(SystemTime::now() - Duration::from_secs(60))
            .unwrap();
        let output = dir.path().join("callbacks.h");
        fs::write(&output, "untouched").unwrap();

        let task = JavapTask {
            class: "B".to_owned(),
            output: output.clone(),
            javap_path: Some(dir.path().join("no-such-javap")),
            classpath: Vec::new(),
            classes_dir: None,
            source_dir: Some(src_dir),
            patterns: PatternConfig::default(),
            force: false,
        };
        generate(&task, &Config::default()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "untouched");

        let forced = JavapTask {
            force: true,
            ..task
        };
        assert!(generate(&forced, &Config::default()).is_err());
    }
}
