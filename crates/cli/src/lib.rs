mod locations;
mod scan;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use valdr_core::Options;

#[derive(Parser)]
#[command(
    name = "valdr",
    version,
    about = "Find the model classes whose bean-validation constraints become client-side rules",
    long_about = "Scans the JVM classpath (class directories and JAR archives) for every class \
                  under the configured model packages, leaving out explicitly excluded classes."
)]
pub struct Cli {
    /// Also log to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the classes that would be parsed for constraint annotations
    Scan {
        #[command(flatten)]
        target: ScanArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List the classpath roots that hold at least one model package
    Locations {
        #[command(flatten)]
        target: ScanArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// JSON options file (`modelPackages`, `excludedClasses`, `classpath`)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Model package prefix, may be repeated
    #[arg(long = "package", short = 'p', value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Fully-qualified class name to leave out, may be repeated
    #[arg(long = "exclude", short = 'x', value_name = "CLASS")]
    pub excluded: Vec<String>,

    /// Classpath as a platform path list. Defaults to the options file, then `CLASSPATH`.
    #[arg(long, short = 'c', alias = "cp", value_name = "CLASSPATH")]
    pub classpath: Option<String>,
}

impl ScanArgs {
    pub fn options(&self) -> Result<Options, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => Options::from_file(path)?,
            None => Options::default(),
        };
        options.extend(self.packages.iter().cloned(), self.excluded.iter().cloned());

        if let Some(list) = &self.classpath {
            options = options.with_classpath(std::env::split_paths(list));
        }

        Ok(options)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Plain,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = valdr_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Scan { target, format } => scan::run(&target, format),
        Commands::Locations { target } => locations::run(&target),
    }
}
