use color_eyre::eyre::{ContextCompat, Result, WrapErr};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::config::Config;
use crate::header::{self, HeaderConfig, PatternConfig};
use crate::javah::{self, JavahTask};
use crate::javap::{self, JavapTask};
use crate::manifest::{Manifest, Project};

#[derive(Parser)]
#[clap(version, about = "Generate C headers for JNI native methods")]
struct Cli {
    /// Project manifest, defaults to ./JniHeaders.toml when present
    #[clap(long, global = true)]
    manifest: Option<PathBuf>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProjectArgs {
    /// Classpath entry, may be repeated
    #[clap(long)]
    classpath: Vec<PathBuf>,
    /// Compiled classes directory the tool runs in
    #[clap(long)]
    classes_dir: Option<PathBuf>,
    /// Java source directory, used to skip up to date outputs
    #[clap(long)]
    source_dir: Option<PathBuf>,
    /// Run even if the output is newer than the class source
    #[clap(long)]
    force: bool,
}

#[derive(Args)]
struct PatternArgs {
    /// Regex matching javap error lines
    #[clap(long)]
    error_regex: Option<String>,
    /// Regex matching method declarations, capturing the method name
    #[clap(long)]
    name_regex: Option<String>,
    /// Regex matching signature lines, capturing the signature
    #[clap(long)]
    signature_regex: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run javap on a class and write a header with macros for its native
    /// method names and signatures
    Javap {
        /// Fully qualified class name
        #[clap(long)]
        class: Option<String>,
        /// Header file to write
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(long)]
        javap_path: Option<PathBuf>,
        #[clap(flatten)]
        project: ProjectArgs,
        #[clap(flatten)]
        patterns: PatternArgs,
    },
    /// Run javah on a class to write its JNI header
    Javah {
        /// Fully qualified class name
        #[clap(long)]
        class: Option<String>,
        /// Header file to write
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(long)]
        javah_path: Option<PathBuf>,
        /// Pass -verbose to javah
        #[clap(long)]
        verbose: bool,
        #[clap(flatten)]
        project: ProjectArgs,
    },
    /// Generate the callbacks header from saved javap -s output
    Header {
        /// Fully qualified class name
        #[clap(long)]
        class: Option<String>,
        /// javap report to read, stdin when omitted
        #[clap(short, long)]
        input: Option<PathBuf>,
        /// Header file to write, stdout when omitted
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(flatten)]
        patterns: PatternArgs,
    },
}

impl PatternArgs {
    fn apply(self, mut patterns: PatternConfig) -> PatternConfig {
        if let Some(error) = self.error_regex {
            patterns.error = error;
        }
        if let Some(declaration) = self.name_regex {
            patterns.declaration = declaration;
        }
        if let Some(signature) = self.signature_regex {
            patterns.signature = signature;
        }
        patterns
    }
}

struct ResolvedProject {
    classpath: Vec<PathBuf>,
    classes_dir: Option<PathBuf>,
    source_dir: Option<PathBuf>,
    force: bool,
}

impl ProjectArgs {
    fn resolve(self, project: Project) -> ResolvedProject {
        let classpath = if self.classpath.is_empty() {
            project.classpath
        } else {
            self.classpath
        };
        ResolvedProject {
            classpath,
            classes_dir: self.classes_dir.or(project.classes_dir),
            source_dir: self.source_dir.or(project.source_dir),
            force: self.force,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let manifest = Manifest::locate(cli.manifest.as_deref())
        .wrap_err("error loading project manifest")?;

    match cli.command {
        Commands::Javap {
            class,
            output,
            javap_path,
            project,
            patterns,
        } => {
            let project = project.resolve(manifest.project);
            let task = JavapTask {
                class: class
                    .or(manifest.javap.class)
                    .context("no class to run javap on, pass --class or set javap.class")?,
                output: output
                    .or(manifest.javap.output)
                    .context("no output file, pass --output or set javap.output")?,
                javap_path: javap_path.or(manifest.javap.path),
                classpath: project.classpath,
                classes_dir: project.classes_dir,
                source_dir: project.source_dir,
                patterns: patterns.apply(manifest.javap.patterns),
                force: project.force,
            };
            let config = Config::load().wrap_err("error loading configuration")?;
            javap::generate(&task, &config)?;
        }
        Commands::Javah {
            class,
            output,
            javah_path,
            verbose,
            project,
        } => {
            let project = project.resolve(manifest.project);
            let task = JavahTask {
                class: class
                    .or(manifest.javah.class)
                    .context("no class to run javah on, pass --class or set javah.class")?,
                output: output
                    .or(manifest.javah.output)
                    .context("no output file, pass --output or set javah.output")?,
                javah_path: javah_path.or(manifest.javah.path),
                classpath: project.classpath,
                classes_dir: project.classes_dir,
                source_dir: project.source_dir,
                verbose: verbose || manifest.javah.verbose,
                force: project.force,
            };
            let config = Config::load().wrap_err("error loading configuration")?;
            javah::generate(&task, &config)?;
        }
        Commands::Header {
            class,
            input,
            output,
            patterns,
        } => {
            let config = HeaderConfig {
                class_name: class
                    .or(manifest.javap.class)
                    .context("no class name, pass --class or set javap.class")?,
                patterns: patterns.apply(manifest.javap.patterns),
            };
            let report = match input {
                Some(path) => fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut report = String::new();
                    io::stdin()
                        .read_to_string(&mut report)
                        .wrap_err("failed to read stdin")?;
                    report
                }
            };
            let text = header::generate_header(report.lines(), &config)?;
            match output {
                Some(path) => header::write_header(&path, &text)?,
                None => print!("{}", text),
            }
        }
    }

    Ok(())
}
